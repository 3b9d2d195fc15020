//! Promo banner and navigation bar
//!
//! Owns the menu state, which is independent of the wizard.

use crate::action::Action;
use crate::components::Component;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use token_launcher_core::LauncherConfig;

/// Links always shown in the navigation bar
const NAV_LINKS: &[&str] = &["Dashboard", "Assets", "Waitlist", "Referrals"];

/// Entries revealed by the menu toggle
const MENU_LINKS: &[&str] = &["FAQ", "Quests", "Create LP", "Contact"];

const MENU_BUTTON: &str = " ☰ Menu ";

/// Banner and navigation component
pub struct NavComponent {
    config: LauncherConfig,
    menu_open: bool,
    /// Menu button area from the last draw
    menu_button: Option<Rect>,
}

impl NavComponent {
    pub fn new(config: LauncherConfig) -> Self {
        Self {
            config,
            menu_open: false,
            menu_button: None,
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Rows needed to draw the banner, the bar and the open menu
    pub fn height(&self) -> u16 {
        let menu = if self.menu_open {
            MENU_LINKS.len() as u16
        } else {
            0
        };
        3 + menu
    }

    fn draw_banner(&self, frame: &mut Frame, area: Rect) {
        let style = Style::default().fg(Color::White).bg(Color::Magenta);
        let lines = vec![
            Line::from(vec![
                Span::styled(
                    " NEW! ",
                    Style::default()
                        .fg(Color::LightYellow)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("BOOST YOUR TOKEN WITH OUR LIQUIDITY", style),
            ]),
            Line::styled(
                format!(
                    " CREATE TOKEN → GO TO \"CREATE LP\" → {} LIQUIDITY (FEE {} ONLY!)",
                    self.config.liquidity, self.config.launch_fee
                ),
                style,
            ),
        ];
        frame.render_widget(Paragraph::new(lines).style(style), area);
    }

    fn draw_bar(&mut self, frame: &mut Frame, area: Rect) {
        let badge = format!(" SOL Supply: {} ", self.config.sol_supply);
        let layout = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(badge.chars().count() as u16 + 1),
            Constraint::Length(MENU_BUTTON.chars().count() as u16),
        ])
        .split(area);

        let mut spans = vec![
            Span::styled(
                " L ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Liquidity Launcher",
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
        ];
        for link in NAV_LINKS {
            spans.push(Span::styled(*link, Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), layout[0]);

        frame.render_widget(
            Paragraph::new(Span::styled(
                badge,
                Style::default().fg(Color::White).bg(Color::Magenta),
            )),
            layout[1],
        );

        let menu_style = if self.menu_open {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::Cyan)
        };
        frame.render_widget(
            Paragraph::new(Span::styled(MENU_BUTTON, menu_style)),
            layout[2],
        );
        self.menu_button = Some(layout[2]);
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = MENU_LINKS
            .iter()
            .map(|link| {
                Line::from(vec![
                    Span::styled("   • ", Style::default().fg(Color::DarkGray)),
                    Span::styled(*link, Style::default().fg(Color::Magenta)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

impl Component for NavComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::F(2) => Ok(Some(Action::ToggleMenu)),
            _ => Ok(None),
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let position = Position::new(mouse.column, mouse.row);
        match self.menu_button {
            Some(button) if button.contains(position) => Ok(Some(Action::ToggleMenu)),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::ToggleMenu {
            self.menu_open = !self.menu_open;
            tracing::debug!("Menu open: {}", self.menu_open);
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = Layout::vertical([
            Constraint::Length(2), // Banner
            Constraint::Length(1), // Navigation bar
            Constraint::Fill(1),   // Menu
        ])
        .split(area);

        self.draw_banner(frame, layout[0]);
        self.draw_bar(frame, layout[1]);
        if self.menu_open {
            self.draw_menu(frame, layout[2]);
        }

        Ok(())
    }
}
