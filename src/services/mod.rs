pub mod comparisons;
pub mod custom_options;
pub mod errors;
pub mod objects;

pub use errors::{ServiceError, ServiceResult};
