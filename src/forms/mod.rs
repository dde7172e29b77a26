pub mod comparisons;
pub mod custom_options;
pub mod objects;

/// Maximum allowed length for comparison, custom option and object names.
pub const NAME_MAX_LEN: usize = 50;
pub(crate) const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Collapse whitespace runs into single spaces and drop control characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Returns the first entry of `ids` that is not a UUID.
pub(crate) fn first_invalid_id<'a>(ids: impl IntoIterator<Item = &'a String>) -> Option<&'a str> {
    ids.into_iter()
        .map(String::as_str)
        .find(|id| uuid::Uuid::parse_str(id).is_err())
}
