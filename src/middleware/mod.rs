pub mod catch_panic;
pub mod request_logging;

pub use catch_panic::catch_panic;
pub use request_logging::log_request;
