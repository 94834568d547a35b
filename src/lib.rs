//! BrainScan client core — the state layer of the Alzheimer's-care
//! companion app.
//!
//! All ML inference lives on the platform backend; this crate owns what
//! the screens need around it: the authenticated prediction history
//! (fetch, filter, paginate, aggregate), the reminder board, and PDF
//! report export.

pub mod api;
pub mod config;
pub mod history;
pub mod models;
pub mod reminders;
pub mod report;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding application. `RUST_LOG` wins
/// over the crate default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
