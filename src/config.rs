/// Application-level constants
pub const APP_NAME: &str = "BrainScan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Records shown per history page.
pub const RESULTS_PER_PAGE: usize = 20;

/// Maximum numbered buttons in the pagination control.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// Base URL of the BrainScan platform API.
/// Overridable via BRAINSCAN_API_URL (trailing slash is stripped).
pub fn api_base_url() -> String {
    std::env::var("BRAINSCAN_API_URL")
        .unwrap_or_else(|_| "http://localhost:5000/api".to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("{}=info", env!("CARGO_PKG_NAME"))
}
