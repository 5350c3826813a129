//! Keyboard input handling.
//!
//! Key events are turned into [`Command`]s by the [`CommandRegistry`] and then
//! executed against the [`crate::app::App`] by the [`handlers`].
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> handlers -> App mutation
//! ```
//!
//! - [`command`] - Every user action
//! - [`context`] - [`InputContext`], which bindings are live right now
//! - [`keybindings`] - Default key map
//! - [`registry`] - Lookup with text-entry fallback
//! - [`handlers`] - Command execution

pub mod command;
pub mod context;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use context::InputContext;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;
