//! Navigation shell: route table, back stack, drawer and bottom tabs.

use crate::view_state::{DialScreen, GpaScreen, PizzaScreen};

use super::types::{Route, BOTTOM_TABS, DRAWER_ITEMS};
use super::App;

/// Deepest back stack kept; older entries are dropped.
pub const MAX_BACK_STACK: usize = 32;

/// The controller for whatever route is on screen.
///
/// Welcome, Help and About are static and carry no state.
#[derive(Debug, Clone)]
pub enum ActiveScreen {
    Welcome,
    Pizza(PizzaScreen),
    Gpa(GpaScreen),
    Dial(DialScreen),
    Help,
    About,
}

impl ActiveScreen {
    /// Build fresh state for `route`.
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Welcome => ActiveScreen::Welcome,
            Route::Pizza => ActiveScreen::Pizza(PizzaScreen::new()),
            Route::Gpa => ActiveScreen::Gpa(GpaScreen::new()),
            Route::Dial => ActiveScreen::Dial(DialScreen::new()),
            Route::Help => ActiveScreen::Help,
            Route::About => ActiveScreen::About,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ActiveScreen::Welcome => Route::Welcome,
            ActiveScreen::Pizza(_) => Route::Pizza,
            ActiveScreen::Gpa(_) => Route::Gpa,
            ActiveScreen::Dial(_) => Route::Dial,
            ActiveScreen::Help => Route::Help,
            ActiveScreen::About => Route::About,
        }
    }

    /// Whether the focused control is a text field.
    pub fn is_editing_text(&self) -> bool {
        match self {
            ActiveScreen::Pizza(screen) => screen.is_editing_text(),
            ActiveScreen::Gpa(screen) => screen.is_editing_text(),
            _ => false,
        }
    }
}

/// Holds the active screen and the routes visited before it.
#[derive(Debug, Clone)]
pub struct NavigationShell {
    active: ActiveScreen,
    back_stack: Vec<Route>,
}

impl Default for NavigationShell {
    fn default() -> Self {
        Self::new(Route::default())
    }
}

impl NavigationShell {
    pub fn new(start: Route) -> Self {
        Self {
            active: ActiveScreen::for_route(start),
            back_stack: Vec::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        self.active.route()
    }

    pub fn active(&self) -> &ActiveScreen {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut ActiveScreen {
        &mut self.active
    }

    pub fn back_stack(&self) -> &[Route] {
        &self.back_stack
    }

    /// Switch to `route`.
    ///
    /// The outgoing screen's state is dropped and the target starts fresh.
    /// `on_bottom_bar_visibility` is told whether the target wants the bottom
    /// bar. Selecting the route that is already active changes nothing and
    /// returns `false`.
    pub fn navigate<F>(&mut self, route: Route, mut on_bottom_bar_visibility: F) -> bool
    where
        F: FnMut(bool),
    {
        let from = self.current_route();
        if from == route {
            return false;
        }

        tracing::info!("Navigate: {} -> {}", from.id(), route.id());
        if self.back_stack.len() == MAX_BACK_STACK {
            self.back_stack.remove(0);
        }
        self.back_stack.push(from);
        self.active = ActiveScreen::for_route(route);
        on_bottom_bar_visibility(route.shows_bottom_bar());
        true
    }

    /// Return to the previous route with fresh state. Returns `false` when
    /// there is nothing to go back to.
    pub fn back<F>(&mut self, mut on_bottom_bar_visibility: F) -> bool
    where
        F: FnMut(bool),
    {
        match self.back_stack.pop() {
            Some(route) => {
                tracing::info!("Back: {} -> {}", self.current_route().id(), route.id());
                self.active = ActiveScreen::for_route(route);
                on_bottom_bar_visibility(route.shows_bottom_bar());
                true
            }
            None => false,
        }
    }
}

/// Side menu state.
#[derive(Debug, Clone, Default)]
pub struct DrawerState {
    open: bool,
    selected: usize,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % DRAWER_ITEMS.len();
    }

    pub fn select_previous(&mut self) {
        self.selected = (self.selected + DRAWER_ITEMS.len() - 1) % DRAWER_ITEMS.len();
    }
}

impl App {
    /// Navigate and keep the bottom bar flag in sync.
    pub fn navigate_to(&mut self, route: Route) {
        let mut show_bottom_bar = self.show_bottom_bar;
        if self.shell.navigate(route, |visible| show_bottom_bar = visible) {
            self.show_bottom_bar = show_bottom_bar;
            self.reset_cursor();
        }
    }

    /// Go back one route. Returns `false` if already at the root.
    pub fn navigate_back(&mut self) -> bool {
        let mut show_bottom_bar = self.show_bottom_bar;
        let moved = self.shell.back(|visible| show_bottom_bar = visible);
        if moved {
            self.show_bottom_bar = show_bottom_bar;
            self.reset_cursor();
        }
        moved
    }

    pub fn toggle_drawer(&mut self) {
        if self.drawer.is_open() {
            self.drawer.close();
        } else {
            // Highlight the entry for where we are now.
            let current = self.shell.current_route();
            while DRAWER_ITEMS[self.drawer.selected()].route != current {
                self.drawer.select_next();
            }
            self.drawer.open();
        }
    }

    /// Pick the highlighted drawer entry: close the drawer, then navigate.
    pub fn select_drawer_item(&mut self) {
        let item = DRAWER_ITEMS[self.drawer.selected()];
        self.drawer.close();
        self.navigate_to(item.route);
    }

    /// Move along the bottom bar. From a route that has no tab, the first
    /// (or last) tab is chosen.
    pub fn cycle_tab(&mut self, forward: bool) {
        if !self.show_bottom_bar {
            return;
        }
        let current = self.shell.current_route();
        let position = BOTTOM_TABS.iter().position(|(route, _)| *route == current);
        let len = BOTTOM_TABS.len();
        let target = match (position, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.navigate_to(BOTTOM_TABS[target].0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::Course;

    #[test]
    fn test_navigate_reports_visibility() {
        let mut shell = NavigationShell::new(Route::Welcome);
        let mut seen = Vec::new();
        assert!(shell.navigate(Route::Gpa, |v| seen.push(v)));
        assert!(shell.navigate(Route::Welcome, |v| seen.push(v)));
        assert!(shell.navigate(Route::Help, |v| seen.push(v)));
        assert_eq!(seen, vec![true, false, true]);
    }

    #[test]
    fn test_navigate_discards_state() {
        let mut shell = NavigationShell::new(Route::Gpa);
        if let ActiveScreen::Gpa(screen) = shell.active_mut() {
            screen.set_grade(Course::First, "99");
        }
        shell.navigate(Route::Pizza, |_| {});
        shell.navigate(Route::Gpa, |_| {});
        match shell.active() {
            ActiveScreen::Gpa(screen) => assert_eq!(screen.grade(Course::First), ""),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_same_route_keeps_state() {
        let mut shell = NavigationShell::new(Route::Gpa);
        if let ActiveScreen::Gpa(screen) = shell.active_mut() {
            screen.set_grade(Course::First, "99");
        }
        let mut called = false;
        assert!(!shell.navigate(Route::Gpa, |_| called = true));
        assert!(!called);
        match shell.active() {
            ActiveScreen::Gpa(screen) => assert_eq!(screen.grade(Course::First), "99"),
            other => panic!("unexpected screen {:?}", other),
        }
    }

    #[test]
    fn test_back_stack() {
        let mut shell = NavigationShell::new(Route::Welcome);
        shell.navigate(Route::Pizza, |_| {});
        shell.navigate(Route::About, |_| {});
        assert_eq!(shell.back_stack(), &[Route::Welcome, Route::Pizza]);

        let mut visible = None;
        assert!(shell.back(|v| visible = Some(v)));
        assert_eq!(shell.current_route(), Route::Pizza);
        assert_eq!(visible, Some(true));

        assert!(shell.back(|v| visible = Some(v)));
        assert_eq!(shell.current_route(), Route::Welcome);
        assert_eq!(visible, Some(false));

        assert!(!shell.back(|_| panic!("no callback at the root")));
    }

    #[test]
    fn test_back_stack_is_bounded() {
        let mut shell = NavigationShell::new(Route::Welcome);
        for i in 0..(MAX_BACK_STACK * 2) {
            let route = if i % 2 == 0 { Route::Pizza } else { Route::Gpa };
            shell.navigate(route, |_| {});
        }
        assert_eq!(shell.back_stack().len(), MAX_BACK_STACK);
    }

    #[test]
    fn test_drawer_selection_wraps() {
        let mut drawer = DrawerState::default();
        drawer.select_previous();
        assert_eq!(drawer.selected(), DRAWER_ITEMS.len() - 1);
        drawer.select_next();
        assert_eq!(drawer.selected(), 0);
    }
}
