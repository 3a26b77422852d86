pub mod extractor;
pub mod parameter_error_handler;
pub mod schedule;

pub use extractor::SafeClassIdI64;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
