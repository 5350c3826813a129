//! Dialer trait abstraction.
//!
//! The "Call me" button on the third screen asks the host to start a phone
//! call. How (or whether) that happens is entirely up to the platform, so the
//! app only sees this trait.

use thiserror::Error;

use crate::error::AppError;

/// Dialing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialError {
    /// No handler is registered for `tel:` URIs, or the launcher failed.
    #[error("failed to launch dialer for {uri}: {message}")]
    LaunchFailed { uri: String, message: String },
}

impl From<DialError> for AppError {
    fn from(err: DialError) -> Self {
        match err {
            DialError::LaunchFailed { uri, message } => AppError::Dial {
                number: uri.trim_start_matches("tel:").to_string(),
                message,
            },
        }
    }
}

/// Something that can place a phone call.
///
/// # Example
///
/// ```ignore
/// use pizza_party::traits::Dialer;
///
/// fn call_home<D: Dialer + ?Sized>(dialer: &D) {
///     let _ = dialer.dial("6314202000");
/// }
/// ```
pub trait Dialer: Send + Sync {
    /// Ask the host to dial `number`. Returns once the request was handed
    /// off, not when the call connects.
    fn dial(&self, number: &str) -> Result<(), DialError>;
}

/// Build the `tel:` URI for a number.
pub fn tel_uri(number: &str) -> String {
    format!("tel:{}", number)
}
