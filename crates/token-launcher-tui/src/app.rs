//! Application state and main loop

use crate::action::Action;
use crate::clipboard::SystemClipboard;
use crate::components::{Component, NavComponent, WizardComponent};
use crate::tui::{self, Tui};
use color_eyre::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};
use token_launcher_core::{LauncherConfig, Point, PointerHub};

/// Main application state
pub struct App {
    /// Whether the application should quit
    should_quit: bool,
    /// Banner, navigation bar and menu
    nav: NavComponent,
    /// Launch wizard
    wizard: WizardComponent,
    /// Pointer presses are broadcast here before components see them
    pointer: PointerHub,
}

impl App {
    pub fn new(config: LauncherConfig) -> Self {
        let pointer = PointerHub::new();
        Self {
            should_quit: false,
            nav: NavComponent::new(config.clone()),
            wizard: WizardComponent::new(config, pointer.clone(), Box::new(SystemClipboard)),
            pointer,
        }
    }

    /// Run the application
    pub fn run(&mut self) -> Result<()> {
        // Install panic hook
        tui::install_panic_hook();

        // Initialize terminal
        let mut terminal = tui::init()?;

        // Main loop
        let result = self.main_loop(&mut terminal);

        // Restore terminal
        tui::restore()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        while !self.should_quit {
            let mut drawn = Ok(());
            terminal.draw(|frame| drawn = self.draw(frame))?;
            drawn?;

            // Nothing animates, so block until the next input
            let event = event::read()?;
            self.handle_event(event)?;
        }

        Ok(())
    }

    /// Draw every component
    fn draw(&mut self, frame: &mut Frame) -> Result<()> {
        let layout = Layout::vertical([
            Constraint::Length(self.nav.height()),
            Constraint::Fill(1),
        ])
        .split(frame.area());

        self.nav.draw(frame, layout[0])?;
        self.wizard.draw(frame, layout[1])?;
        Ok(())
    }

    /// Route a terminal event to the components
    fn handle_event(&mut self, event: Event) -> Result<()> {
        let action = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key)?,
            Event::Mouse(mouse) => self.handle_mouse_event(mouse)?,
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            _ => None,
        };

        if let Some(action) = action {
            self.handle_action(action)?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::Quit));
        }
        if let Some(action) = self.nav.handle_key_event(key)? {
            return Ok(Some(action));
        }
        self.wizard.handle_key_event(key)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Outside-press observers run before any component handles the press
        if let MouseEventKind::Down(_) = mouse.kind {
            self.pointer.dispatch(Point::new(mouse.column, mouse.row));
        }

        if let Some(action) = self.nav.handle_mouse_event(mouse)? {
            return Ok(Some(action));
        }
        self.wizard.handle_mouse_event(mouse)
    }

    /// Handle an action
    fn handle_action(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
            Action::Resize(_w, _h) => {
                // Terminal will automatically resize on next draw
            }
            Action::ToggleMenu => {
                if let Some(next_action) = self.nav.update(action)? {
                    self.handle_action(next_action)?;
                }
            }
            _ => {
                // Forward to the wizard
                if let Some(next_action) = self.wizard.update(action)? {
                    self.handle_action(next_action)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::MouseButton;
    use ratatui::{Terminal, backend::TestBackend};
    use token_launcher_core::Step;

    fn key(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            key(app, KeyCode::Char(c));
        }
    }

    fn click(app: &mut App, x: u16, y: u16) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }))
        .unwrap();
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| app.draw(frame).unwrap()).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    /// App on the Review step with the given values
    fn review_app() -> App {
        let mut app = App::new(LauncherConfig::default());
        type_text(&mut app, "MAT Coin");
        key(&mut app, KeyCode::Tab);
        type_text(&mut app, "MAT");
        key(&mut app, KeyCode::Enter);
        key(&mut app, KeyCode::Enter);
        assert_eq!(app.wizard.wizard().step(), Step::Review);
        app
    }

    #[test]
    fn test_ctrl_c_quits_from_any_step() {
        let mut app = review_app();
        app.handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_esc_on_first_step_quits() {
        let mut app = App::new(LauncherConfig::default());
        key(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = App::new(LauncherConfig::default());
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(release)).unwrap();
        assert_eq!(app.wizard.wizard().state().token_name(), "");
    }

    #[test]
    fn test_f2_toggles_menu_without_touching_wizard() {
        let mut app = App::new(LauncherConfig::default());
        key(&mut app, KeyCode::F(2));
        assert!(app.nav.is_menu_open());
        assert!(render(&mut app).contains("Create LP"));

        key(&mut app, KeyCode::F(2));
        assert!(!app.nav.is_menu_open());
        assert_eq!(app.wizard.wizard().step(), Step::Basic);
    }

    #[test]
    fn test_full_flow_renders_review() {
        let mut app = review_app();
        let text = render(&mut app);
        assert!(text.contains("BOOST YOUR TOKEN WITH OUR LIQUIDITY"));
        assert!(text.contains("Step 3 of 3: Review & Launch"));
        assert!(text.contains("MAT Coin"));
        assert!(text.contains("Not specified"));
    }

    #[test]
    fn test_click_outside_closes_popover_through_hub() {
        let mut app = review_app();
        key(&mut app, KeyCode::Char('p'));
        render(&mut app);
        assert!(app.wizard.is_payment_visible());
        assert_eq!(app.pointer.listener_count(), 1);

        // Banner row is well outside the popover
        click(&mut app, 0, 0);
        assert!(!app.wizard.is_payment_visible());
        assert_eq!(app.pointer.listener_count(), 0);
    }

    #[test]
    fn test_scroll_events_are_not_presses() {
        let mut app = review_app();
        key(&mut app, KeyCode::Char('p'));
        render(&mut app);

        app.handle_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }))
        .unwrap();
        assert!(app.wizard.is_payment_visible());
    }

    #[test]
    fn test_resize_is_harmless() {
        let mut app = review_app();
        app.handle_event(Event::Resize(80, 24)).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.wizard.wizard().step(), Step::Review);
    }
}
