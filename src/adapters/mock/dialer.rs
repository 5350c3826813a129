//! Recording dialer for testing.

use std::sync::{Arc, Mutex};

use crate::traits::dialer::tel_uri;
use crate::traits::{DialError, Dialer};

/// Dialer that records every request.
///
/// Clones share the same log, so a test can keep one handle and give the
/// other to the [`crate::app::App`].
///
/// # Example
///
/// ```
/// use pizza_party::adapters::mock::RecordingDialer;
/// use pizza_party::traits::Dialer;
///
/// let dialer = RecordingDialer::new();
/// dialer.dial("6314202000").unwrap();
/// assert_eq!(dialer.dialed(), vec!["6314202000".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingDialer {
    dialed: Arc<Mutex<Vec<String>>>,
    should_fail: Arc<Mutex<bool>>,
}

impl RecordingDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure whether dialing should fail.
    pub fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.lock().unwrap() = should_fail;
    }

    /// Numbers dialed so far, oldest first.
    pub fn dialed(&self) -> Vec<String> {
        self.dialed.lock().unwrap().clone()
    }
}

impl Dialer for RecordingDialer {
    fn dial(&self, number: &str) -> Result<(), DialError> {
        self.dialed.lock().unwrap().push(number.to_string());
        if *self.should_fail.lock().unwrap() {
            return Err(DialError::LaunchFailed {
                uri: tel_uri(number),
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }
}
