//! Tracing setup for applications embedding the storefront client.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info,mealcart_client=debug,mealcart_core=debug";

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - ERROR: Failed checkouts
/// - WARN: Rejected requests, ignored config values
/// - INFO: Config loaded/saved, orders submitted
/// - DEBUG: Cart mutations, menu loads
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
