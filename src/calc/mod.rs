//! Pure calculations behind the GPA and pizza screens.
//!
//! Nothing in here touches UI state or performs I/O. Screen controllers in
//! [`crate::view_state`] call into these functions when the user presses the
//! action button and turn the results into display data.
//!
//! - [`calculate_gpa`] / [`classify_gpa`] - three-grade average and its color band
//! - [`calculate_pizza_count`] / [`pizzas_for`] - pizzas needed for a headcount

mod gpa;
mod pizza;

pub use gpa::{calculate_gpa, classify_gpa, format_gpa, GpaBand, GpaOutcome};
pub use pizza::{calculate_pizza_count, parse_headcount, pizzas_for, HungerLevel, SLICES_PER_PIZZA};
