//! Pizza Party - a terminal pizza-party planner with a GPA calculator
//!
//! The calculators in [`calc`] are pure functions. Screen controllers in
//! [`view_state`] own the raw inputs and turn them into plain view data,
//! [`app`] routes between them, and [`ui`] draws whatever view state it is
//! handed. The library is exposed so integration tests and benchmarks can
//! drive all of it without a real terminal.

pub mod adapters;
pub mod app;
pub mod calc;
pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod settings;
pub mod startup;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view_state;
