//! Reusable UI Components
//!
//! Building blocks shared by the screens, the drawer and the settings dialog.
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab strip with an arrow marker
//! - `InputField` - Labelled text input with a blinking caret
//! - `Button` - Bracketed push button
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod button;
mod dialog_frame;
mod input_field;
mod tab_selector;

pub use button::{button_line, render_button};
pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig};
pub use tab_selector::{render_tab_selector, TabItem};
