//! Dialer backed by the platform's URI handler.

use crate::traits::dialer::tel_uri;
use crate::traits::{DialError, Dialer};

/// Opens `tel:<number>` with whatever the desktop has registered for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDialer;

impl SystemDialer {
    pub fn new() -> Self {
        Self
    }
}

impl Dialer for SystemDialer {
    fn dial(&self, number: &str) -> Result<(), DialError> {
        let uri = tel_uri(number);
        tracing::info!("Dialing {}", uri);
        open::that_detached(&uri).map_err(|e| DialError::LaunchFailed {
            uri,
            message: e.to_string(),
        })
    }
}
