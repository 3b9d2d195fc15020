//! UI components

mod nav;
mod wizard;

pub use nav::NavComponent;
pub use wizard::WizardComponent;

use crate::action::Action;
use color_eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

/// A self-contained piece of the UI
pub trait Component {
    /// Handle a key press, optionally producing an action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>>;

    /// Handle a mouse event, optionally producing an action
    fn handle_mouse_event(&mut self, _mouse: MouseEvent) -> Result<Option<Action>> {
        Ok(None)
    }

    /// Apply an action, optionally producing a follow-up
    fn update(&mut self, action: Action) -> Result<Option<Action>>;

    /// Render into the given area
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
