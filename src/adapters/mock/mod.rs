//! Mock implementations for testing.
//!
//! - [`RecordingDialer`] - Dialer that records numbers instead of calling

pub mod dialer;

pub use dialer::RecordingDialer;
