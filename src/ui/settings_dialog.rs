//! Modal settings dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::components::{button_line, render_dialog_frame, DialogFrameConfig};
use super::theme::{Palette, COLOR_ACCENT};
use crate::app::SettingsField;
use crate::settings::FONT_SIZE_STOPS;
use crate::view_state::SettingsDialogView;

/// Tick labels under the font size slider
const FONT_SIZE_TICKS: [&str; 3] = ["Small", "Normal", "Large"];

pub fn render_settings_dialog(
    frame: &mut Frame,
    area: Rect,
    dialog: &SettingsDialogView,
    palette: &Palette,
) {
    let lines = settings_lines(dialog, palette);
    let config = DialogFrameConfig::new("Settings", lines.len() as u16);
    let inner = render_dialog_frame(frame, area, &config, palette);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn row_style(focused: bool, palette: &Palette) -> Style {
    if focused {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.fg)
    }
}

fn marker(focused: bool) -> &'static str {
    if focused {
        "\u{25B6} "
    } else {
        "  "
    }
}

fn toggle_line(label: &str, on: bool, focused: bool, palette: &Palette) -> Line<'static> {
    let style = row_style(focused, palette);
    let switch = if on { "[ON ]" } else { "[OFF]" };
    Line::from(vec![
        Span::styled(marker(focused), style),
        Span::styled(format!("{:<16}", label), style),
        Span::styled(switch, style),
    ])
}

/// Slider track with one notch per font size stop.
fn font_size_track(font_size: f32) -> String {
    FONT_SIZE_STOPS
        .iter()
        .map(|stop| {
            if (stop - font_size).abs() < f32::EPSILON {
                "\u{25CF}"
            } else {
                "\u{2500}"
            }
        })
        .collect::<Vec<_>>()
        .join("\u{2500}\u{2500}")
}

pub(crate) fn settings_lines(dialog: &SettingsDialogView, palette: &Palette) -> Vec<Line<'static>> {
    let font_focused = dialog.focus == SettingsField::FontSize;
    let font_style = row_style(font_focused, palette);
    let done_focused = dialog.focus == SettingsField::Done;
    let mut done = button_line("Done", done_focused, palette);
    done.spans.insert(0, Span::raw(marker(done_focused)));

    vec![
        toggle_line(
            "Dark Mode",
            dialog.dark_mode,
            dialog.focus == SettingsField::DarkMode,
            palette,
        ),
        toggle_line(
            "Notifications",
            dialog.notifications,
            dialog.focus == SettingsField::Notifications,
            palette,
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled(marker(font_focused), font_style),
            Span::styled(
                format!("Font Size: {} ({:.1}x)", dialog.font_size_label, dialog.font_size),
                font_style,
            ),
        ]),
        Line::from(vec![
            Span::raw("    "),
            Span::styled(font_size_track(dialog.font_size), font_style),
        ]),
        Line::from(Span::styled(
            format!("    {}", FONT_SIZE_TICKS.join("   ")),
            Style::default().fg(palette.dim),
        )),
        Line::raw(""),
        done,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AppSettings;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_lines_reflect_settings() {
        let mut settings = AppSettings::default();
        settings.set_dark_mode(true);
        let dialog = SettingsDialogView::new(&settings, SettingsField::Notifications);
        let rendered = text(&settings_lines(&dialog, &Palette::DARK));

        assert!(rendered.contains("Dark Mode"));
        assert!(rendered.contains("Font Size: Normal (1.0x)"));
        assert!(rendered.contains("[ Done ]"));
        assert!(rendered.contains("\u{25B6} Notifications"));
    }

    #[test]
    fn test_font_size_track_marks_current_stop() {
        assert_eq!(font_size_track(1.0).matches('\u{25CF}').count(), 1);
        assert!(font_size_track(1.0).starts_with('\u{2500}'));
        assert!(font_size_track(0.5).starts_with('\u{25CF}'));
        // Off-stop values have no notch
        assert_eq!(font_size_track(1.25).matches('\u{25CF}').count(), 0);
    }
}
