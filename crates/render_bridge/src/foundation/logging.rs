//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with an explicit filter string
///
/// Used by headless tools that take the filter from configuration rather
/// than the `RUST_LOG` environment variable.
pub fn init_with_filter(filter: &str) {
    env_logger::Builder::new().parse_filters(filter).init();
}
