pub mod association;
pub mod comparison;
pub mod custom_option;
pub mod object;
