//! GPA screen controller.

use crate::calc::{calculate_gpa, classify_gpa, format_gpa, GpaBand, GpaOutcome};

use super::{push_char, push_str, ActionOutcome, ScreenMode};

/// Message shown when any grade fails to parse.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

const GRADE_LABELS: [&str; 3] = ["Course 1 Grade", "Course 2 Grade", "Course 3 Grade"];

/// One of the three grade fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    First,
    Second,
    Third,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::First, Course::Second, Course::Third];

    fn index(self) -> usize {
        match self {
            Course::First => 0,
            Course::Second => 1,
            Course::Third => 2,
        }
    }
}

/// Focusable controls on the GPA screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GpaFocus {
    #[default]
    Grade1,
    Grade2,
    Grade3,
    Action,
}

impl GpaFocus {
    pub fn next(self) -> Self {
        match self {
            GpaFocus::Grade1 => GpaFocus::Grade2,
            GpaFocus::Grade2 => GpaFocus::Grade3,
            GpaFocus::Grade3 => GpaFocus::Action,
            GpaFocus::Action => GpaFocus::Grade1,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            GpaFocus::Grade1 => GpaFocus::Action,
            GpaFocus::Grade2 => GpaFocus::Grade1,
            GpaFocus::Grade3 => GpaFocus::Grade2,
            GpaFocus::Action => GpaFocus::Grade3,
        }
    }

    /// The grade field this control edits, if any.
    pub fn course(self) -> Option<Course> {
        match self {
            GpaFocus::Grade1 => Some(Course::First),
            GpaFocus::Grade2 => Some(Course::Second),
            GpaFocus::Grade3 => Some(Course::Third),
            GpaFocus::Action => None,
        }
    }
}

/// Screen background derived from the last result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backdrop {
    /// No result yet (cyan in the classic palette).
    #[default]
    Neutral,
    Low,
    Mid,
    High,
}

impl From<GpaBand> for Backdrop {
    fn from(band: GpaBand) -> Self {
        match band {
            GpaBand::Low => Backdrop::Low,
            GpaBand::Mid => Backdrop::Mid,
            GpaBand::High => Backdrop::High,
        }
    }
}

/// What the result slot currently holds.
#[derive(Debug, Clone, PartialEq)]
pub enum GpaResult {
    Value { value: f64, band: GpaBand },
    Invalid,
}

impl GpaResult {
    /// Text shown under the button.
    pub fn display_text(&self) -> String {
        match self {
            GpaResult::Value { value, .. } => format!("GPA: {}", format_gpa(*value)),
            GpaResult::Invalid => format!("GPA: {}", INVALID_INPUT_MESSAGE),
        }
    }
}

/// Controller for the GPA calculator.
#[derive(Debug, Clone, Default)]
pub struct GpaScreen {
    grades: [String; 3],
    result: Option<GpaResult>,
    backdrop: Backdrop,
    mode: ScreenMode,
    focus: GpaFocus,
}

/// Plain data for drawing the GPA screen.
#[derive(Debug, Clone, PartialEq)]
pub struct GpaView<'a> {
    pub labels: [&'static str; 3],
    pub grades: [&'a str; 3],
    pub focus: GpaFocus,
    pub action_label: &'static str,
    pub result_text: Option<String>,
    pub backdrop: Backdrop,
    pub mode: ScreenMode,
}

impl GpaScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grade(&self, course: Course) -> &str {
        &self.grades[course.index()]
    }

    /// Replace a grade's text wholesale.
    pub fn set_grade(&mut self, course: Course, value: impl Into<String>) {
        self.grades[course.index()] = value.into();
    }

    pub fn result(&self) -> Option<&GpaResult> {
        self.result.as_ref()
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop
    }

    pub fn mode(&self) -> ScreenMode {
        self.mode
    }

    pub fn focus(&self) -> GpaFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: GpaFocus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Whether keystrokes should go into a text field.
    pub fn is_editing_text(&self) -> bool {
        self.focus.course().is_some()
    }

    pub fn action_label(&self) -> &'static str {
        match self.mode {
            ScreenMode::Ready => "Calculate GPA",
            ScreenMode::ShowingResult => "Clear",
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(index) = self.focus.course().map(Course::index) {
            push_char(&mut self.grades[index], c);
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        if let Some(index) = self.focus.course().map(Course::index) {
            push_str(&mut self.grades[index], text);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(index) = self.focus.course().map(Course::index) {
            self.grades[index].pop();
        }
    }

    /// Press the Calculate/Clear button.
    pub fn press_action(&mut self) -> ActionOutcome {
        match self.mode {
            ScreenMode::Ready => self.calculate(),
            ScreenMode::ShowingResult => {
                self.clear();
                ActionOutcome::Cleared
            }
        }
    }

    fn calculate(&mut self) -> ActionOutcome {
        match calculate_gpa(&self.grades[0], &self.grades[1], &self.grades[2]) {
            GpaOutcome::Value(value) => {
                let band = classify_gpa(value);
                tracing::debug!("gpa: {} ({:?})", value, band);
                self.result = Some(GpaResult::Value { value, band });
                self.backdrop = band.into();
                self.mode = ScreenMode::ShowingResult;
                ActionOutcome::Calculated
            }
            GpaOutcome::Invalid => {
                tracing::debug!("gpa: invalid input");
                self.result = Some(GpaResult::Invalid);
                ActionOutcome::Rejected
            }
        }
    }

    /// Reset inputs, result and button. Safe to call in any mode.
    pub fn clear(&mut self) {
        self.grades.iter_mut().for_each(String::clear);
        self.result = None;
        self.backdrop = Backdrop::Neutral;
        self.mode = ScreenMode::Ready;
        self.focus = GpaFocus::Grade1;
    }

    pub fn view(&self) -> GpaView<'_> {
        GpaView {
            labels: GRADE_LABELS,
            grades: [&self.grades[0], &self.grades[1], &self.grades[2]],
            focus: self.focus,
            action_label: self.action_label(),
            result_text: self.result.as_ref().map(GpaResult::display_text),
            backdrop: self.backdrop,
            mode: self.mode,
        }
    }
}
