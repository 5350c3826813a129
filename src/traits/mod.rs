//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`Dialer`] - Hands a phone number to the host platform

pub mod dialer;

pub use dialer::{DialError, Dialer};
