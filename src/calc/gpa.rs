//! GPA averaging and banding.

/// Result of averaging three grade inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GpaOutcome {
    /// Arithmetic mean of the three grades, unrounded.
    Value(f64),
    /// At least one grade did not parse to a finite number.
    Invalid,
}

impl GpaOutcome {
    /// The average, if the inputs were valid.
    pub fn value(&self) -> Option<f64> {
        match self {
            GpaOutcome::Value(v) => Some(*v),
            GpaOutcome::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, GpaOutcome::Invalid)
    }
}

/// Display band for a GPA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpaBand {
    /// Below 60
    Low,
    /// 60 through 79 inclusive
    Mid,
    /// Above 79
    High,
}

/// Parse a single grade. Surrounding whitespace is ignored; `NaN` and
/// infinities are rejected along with anything non-numeric.
fn parse_grade(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Average three grade strings.
///
/// Returns [`GpaOutcome::Invalid`] if any input fails to parse; a partial
/// average is never produced. Out-of-range grades (negative, above 100) are
/// averaged as given.
///
/// # Example
///
/// ```
/// use pizza_party::calc::{calculate_gpa, GpaOutcome};
///
/// assert_eq!(calculate_gpa("90", "80", "70"), GpaOutcome::Value(80.0));
/// assert_eq!(calculate_gpa("abc", "80", "70"), GpaOutcome::Invalid);
/// ```
pub fn calculate_gpa(grade1: &str, grade2: &str, grade3: &str) -> GpaOutcome {
    let grades = [grade1, grade2, grade3].map(parse_grade);
    match grades {
        [Some(a), Some(b), Some(c)] => GpaOutcome::Value(mean_of_three(a, b, c)),
        _ => GpaOutcome::Invalid,
    }
}

/// Mean of three finite values. The sum of huge grades can overflow, in which
/// case each term is scaled down first so the result stays finite.
fn mean_of_three(a: f64, b: f64, c: f64) -> f64 {
    let sum = a + b + c;
    if sum.is_finite() {
        sum / 3.0
    } else {
        a / 3.0 + b / 3.0 + c / 3.0
    }
}

/// Map a GPA value to its display band.
///
/// The middle band is the closed range `60.0..=79.0`: exactly 79 is still
/// [`GpaBand::Mid`], while 79.01 is [`GpaBand::High`].
pub fn classify_gpa(value: f64) -> GpaBand {
    if value < 60.0 {
        GpaBand::Low
    } else if (60.0..=79.0).contains(&value) {
        GpaBand::Mid
    } else {
        GpaBand::High
    }
}

/// Render a GPA value with at least one fractional digit (`80.0`,
/// `83.33333333333333`).
pub fn format_gpa(value: f64) -> String {
    format!("{:?}", value)
}
