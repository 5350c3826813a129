//! Concrete implementations of trait abstractions.
//!
//! - [`SystemDialer`] - Opens `tel:` URIs with the platform URI handler
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingDialer`] - Remembers every number it was asked to dial

pub mod mock;
pub mod system_dialer;

pub use mock::RecordingDialer;
pub use system_dialer::SystemDialer;
