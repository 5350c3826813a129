//! Error handling for Pizza Party.
//!
//! Only infrastructure can fail here: the terminal, the log file, command-line
//! arguments and the external dialer. Bad numbers typed into a screen are not
//! errors; the calculators degrade to a fallback value instead (see
//! [`crate::calc`]).
//!
//! # Example
//!
//! ```ignore
//! use pizza_party::error::{AppError, AppResult};
//!
//! fn font_size(value: &str) -> AppResult<f32> {
//!     value.parse().map_err(|_| AppError::InvalidArgument {
//!         flag: "--font-size".to_string(),
//!         value: value.to_string(),
//!     })
//! }
//! ```

mod app_error;

pub use app_error::{AppError, AppResult};
