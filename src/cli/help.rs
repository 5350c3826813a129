//! Help command.

pub const HELP_TEXT: &str = "\
Plan a pizza party, average three grades, or call us.

Usage: pizza-party [OPTIONS]

Options:
      --dark               Start with dark mode on
      --no-notifications   Start with notifications off
      --font-size <SIZE>   Initial font size, 0.5 to 2.0 [default: 1.0]
      --route <ID>         First screen: welcome, pizza, gpa, screen3,
                           help_route, about_route [default: welcome]
      --log-dir <PATH>     Directory for pizza-party.log
      --no-log             Do not write a log file
  -h, --help               Print help
  -V, --version            Print version

Environment:
  PIZZA_PARTY_LOG          Log filter, e.g. debug or pizza_party=trace [default: info]
  PIZZA_PARTY_LOG_DIR      Same as --log-dir

Keys:
  Tab / Shift+Tab          Move between fields
  Enter                    Press the focused button
  Left / Right             Adjust sliders and choices
  Ctrl+O or m              Open the menu
  Ctrl+S or s              Open settings
  Ctrl+Left / Ctrl+Right   Switch bottom tabs
  Esc                      Close, or go back
  Ctrl+C, Ctrl+Q or q      Quit
";

/// Handle `--help`: print usage and exit successfully.
pub fn handle_help_command() -> ! {
    println!("pizza-party {}\n\n{}", super::VERSION, HELP_TEXT);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Route;

    #[test]
    fn test_help_lists_every_route_id() {
        for route in Route::ALL {
            assert!(HELP_TEXT.contains(route.id()), "missing {}", route.id());
        }
    }
}
