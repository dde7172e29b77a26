use crate::db::{DbConnection, DbPool};
use crate::domain::association::Association;
use crate::domain::comparison::Comparison;
use crate::domain::custom_option::CustomOption;
use crate::domain::filter::{ComparisonFilter, CustomOptionFilter, ObjectFilter};
use crate::domain::object::Object;

pub mod association;
pub mod comparison;
pub mod custom_option;
pub mod errors;
pub mod object;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Escape character used by [`contains_pattern`].
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Lowercased `LIKE` pattern matching `term` anywhere, with `%`, `_` and the
/// escape character taken literally.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// Read-only operations over comparison records.
pub trait ComparisonReader {
    fn list_comparisons(&self, filter: &ComparisonFilter) -> RepositoryResult<Vec<Comparison>>;
    fn get_comparison_by_id(&self, id: &str) -> RepositoryResult<Option<Comparison>>;
    fn get_comparison_by_name(&self, name: &str) -> RepositoryResult<Option<Comparison>>;
}

/// Write operations over comparison records.
///
/// `create_comparison` reports [`RepositoryError::AlreadyExists`] when the name
/// is taken; `update_comparison` and `delete_comparison` report
/// [`RepositoryError::NotFound`] when no row matched.
pub trait ComparisonWriter {
    fn create_comparison(&self, comparison: &Comparison) -> RepositoryResult<()>;
    fn update_comparison(&self, comparison: &Comparison) -> RepositoryResult<()>;
    fn delete_comparison(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over custom option records.
pub trait CustomOptionReader {
    fn list_custom_options(
        &self,
        filter: &CustomOptionFilter,
    ) -> RepositoryResult<Vec<CustomOption>>;
    fn get_custom_option_by_id(&self, id: &str) -> RepositoryResult<Option<CustomOption>>;
    fn get_custom_option_by_name(&self, name: &str) -> RepositoryResult<Option<CustomOption>>;
}

/// Write operations over custom option records.
pub trait CustomOptionWriter {
    fn create_custom_option(&self, custom_option: &CustomOption) -> RepositoryResult<()>;
    fn update_custom_option(&self, custom_option: &CustomOption) -> RepositoryResult<()>;
    fn delete_custom_option(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over base object records.
///
/// Returned objects carry no associations; those live behind [`AssociationReader`].
pub trait ObjectReader {
    fn list_objects(&self, filter: &ObjectFilter) -> RepositoryResult<Vec<Object>>;
    fn get_object_by_id(&self, id: &str) -> RepositoryResult<Option<Object>>;
}

/// Write operations over base object records. Associations are not touched.
pub trait ObjectWriter {
    fn create_object(&self, object: &Object) -> RepositoryResult<()>;
    fn update_object(&self, object: &Object) -> RepositoryResult<()>;
    fn delete_object(&self, id: &str) -> RepositoryResult<()>;
}

/// Read-only operations over object/custom option associations.
pub trait AssociationReader {
    fn list_associations_by_object_id(&self, object_id: &str)
    -> RepositoryResult<Vec<Association>>;
}

/// Write operations over object/custom option associations.
pub trait AssociationWriter {
    /// Insert a new row; a duplicate `(object_id, custom_option_id)` pair is
    /// reported as [`RepositoryError::AlreadyExists`].
    fn add_association(&self, association: &Association) -> RepositoryResult<()>;
    /// Replace the value of the row matching `(object_id, custom_option_id)`.
    fn update_association(&self, association: &Association) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_lowercases_unicode() {
        assert_eq!(contains_pattern("МЕРС"), "%мерс%");
        assert_eq!(contains_pattern("Ölk"), "%ölk%");
    }

    #[test]
    fn contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("100%"), "%100\\%%");
        assert_eq!(contains_pattern("a_b"), "%a\\_b%");
        assert_eq!(contains_pattern("c:\\x"), "%c:\\\\x%");
    }
}
