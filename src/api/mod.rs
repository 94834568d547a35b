//! Client for the BrainScan platform API.
//!
//! All inference happens on the backend; this module only speaks its
//! HTTP surface: prediction history, scan upload, analysis save,
//! prediction delete, and the reminder endpoints. `PlatformApi` is the
//! seam — production code uses `HttpPlatformApi`, tests use
//! `MockPlatformApi`.

pub mod client;
pub mod error;

pub use client::{AnalysisOutcome, HttpPlatformApi, MockPlatformApi, PlatformApi};
pub use error::ApiError;
