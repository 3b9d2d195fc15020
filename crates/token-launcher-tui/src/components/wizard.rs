//! Launch Wizard - step-driven token intake
//!
//! Guides users through preparing a token launch:
//! 1. Basic: name, symbol and logo
//! 2. Details: description, supply and social links
//! 3. Review: summary, payment address popover and start over
//!
//! Inputs are bound straight to the wizard state: every keystroke updates
//! the field it belongs to.

use crate::action::Action;
use crate::components::Component;
use crate::file_picker;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use token_launcher_core::{
    Bounds, ClipboardWriter, Field, LauncherConfig, Overlay, Point, PointerHub, SocialLink, Step,
    Wizard,
};

/// An input row on a form step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Text(Field),
    Logo,
}

const BASIC_INPUTS: &[Input] = &[
    Input::Text(Field::TokenName),
    Input::Text(Field::TokenSymbol),
    Input::Logo,
];

const DETAILS_INPUTS: &[Input] = &[
    Input::Text(Field::TokenDescription),
    Input::Text(Field::TotalSupply),
    Input::Text(Field::Social(SocialLink::Website)),
    Input::Text(Field::Social(SocialLink::Twitter)),
    Input::Text(Field::Social(SocialLink::Telegram)),
    Input::Text(Field::Social(SocialLink::Discord)),
];

/// Inputs shown on a step, in focus order
fn step_inputs(step: Step) -> &'static [Input] {
    match step {
        Step::Basic => BASIC_INPUTS,
        Step::Details => DETAILS_INPUTS,
        Step::Review => &[],
    }
}

/// Clickable areas from the last draw
#[derive(Debug, Default)]
struct HitAreas {
    back: Option<Rect>,
    next: Option<Rect>,
    start_over: Option<Rect>,
    payment_trigger: Option<Rect>,
    copy: Option<Rect>,
    inputs: Vec<(usize, Rect)>,
}

impl HitAreas {
    fn clear(&mut self) {
        *self = Self::default();
    }
}

fn hit(area: Option<Rect>, position: Position) -> bool {
    area.is_some_and(|rect| rect.contains(position))
}

/// Border, address, spacer and copy button
const POPOVER_HEIGHT: u16 = 5;

fn bounds_of(rect: Rect) -> Bounds {
    Bounds::new(rect.x, rect.y, rect.width, rect.height)
}

/// Launch wizard component
pub struct WizardComponent {
    /// Step state and field values
    wizard: Wizard,

    /// Payment address popover
    payment: Overlay,

    clipboard: Box<dyn ClipboardWriter>,

    config: LauncherConfig,

    /// Focused input on the current step
    focus: usize,

    /// Path typed into the logo field, not yet resolved
    logo_draft: String,

    hit_areas: HitAreas,
}

impl WizardComponent {
    pub fn new(
        config: LauncherConfig,
        pointer: PointerHub,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        Self {
            wizard: Wizard::new(),
            payment: Overlay::new(pointer),
            clipboard,
            config,
            focus: 0,
            logo_draft: String::new(),
            hit_areas: HitAreas::default(),
        }
    }

    /// Get wizard state
    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    /// Whether the payment popover is showing
    pub fn is_payment_visible(&self) -> bool {
        self.payment.is_visible()
    }

    fn focused_input(&self) -> Option<Input> {
        step_inputs(self.wizard.step()).get(self.focus).copied()
    }

    fn focus_next(&mut self) {
        let count = step_inputs(self.wizard.step()).len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    fn focus_prev(&mut self) {
        let count = step_inputs(self.wizard.step()).len();
        if count > 0 {
            self.focus = if self.focus == 0 {
                count - 1
            } else {
                self.focus - 1
            };
        }
    }

    /// Reset per-step UI after the step changed
    fn on_step_changed(&mut self, from: Step) {
        self.focus = 0;
        if from == Step::Review && self.wizard.step() != Step::Review {
            // The popover only exists on the Review step
            self.payment.close();
        }
    }

    fn select_logo(&mut self) {
        let picked = file_picker::pick_image(&self.logo_draft);
        if picked.is_some() {
            self.logo_draft.clear();
        }
        self.wizard.set_logo(picked);
    }

    /// Handle key events for the Basic and Details steps
    fn handle_form_key(&mut self, key: KeyEvent) -> Option<Action> {
        let focused = self.focused_input();
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                None
            }
            KeyCode::Enter => {
                if focused == Some(Input::Logo) && !self.logo_draft.is_empty() {
                    Some(Action::SelectLogo)
                } else {
                    Some(Action::NextStep)
                }
            }
            KeyCode::Esc => {
                if focused == Some(Input::Logo) && !self.logo_draft.is_empty() {
                    self.logo_draft.clear();
                    None
                } else if self.wizard.step() == Step::Basic {
                    Some(Action::Quit)
                } else {
                    Some(Action::PrevStep)
                }
            }
            KeyCode::Backspace => {
                match focused {
                    Some(Input::Text(field)) => self.wizard.pop_char(field),
                    Some(Input::Logo) => {
                        self.logo_draft.pop();
                    }
                    None => {}
                }
                None
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                match focused {
                    Some(Input::Text(field)) => self.wizard.push_char(field, c),
                    Some(Input::Logo) => self.logo_draft.push(c),
                    None => {}
                }
                None
            }
            _ => None,
        }
    }

    /// Handle key events for the Review step
    fn handle_review_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Char('p') => Some(Action::TogglePayment),
            KeyCode::Char('c') if self.payment.is_visible() => Some(Action::CopyAddress),
            KeyCode::Char('r') => Some(Action::StartOver),
            KeyCode::Esc => {
                if self.payment.is_visible() {
                    Some(Action::ClosePayment)
                } else {
                    Some(Action::PrevStep)
                }
            }
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    // ============ DRAWING ============

    /// Draw the wizard header with step indicator
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let current = self.wizard.step();
        let header = Line::from(vec![
            Span::styled(
                " Launch Wizard ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("Step {} of {}: ", current.number(), Step::total()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(current.title(), Style::default().fg(Color::White)),
        ]);

        let mut indicator = vec![Span::raw("  ")];
        for (i, step) in Step::ALL.iter().enumerate() {
            let reached = step.number() <= current.number();
            if i > 0 {
                indicator.push(Span::styled(
                    " ──── ",
                    Style::default().fg(if reached {
                        Color::Magenta
                    } else {
                        Color::DarkGray
                    }),
                ));
            }
            let (badge, label) = if reached {
                (
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Magenta)
                        .add_modifier(Modifier::BOLD),
                    Style::default().fg(Color::White),
                )
            } else {
                (
                    Style::default().fg(Color::DarkGray),
                    Style::default().fg(Color::DarkGray),
                )
            };
            indicator.push(Span::styled(format!(" {} ", step.number()), badge));
            indicator.push(Span::styled(format!(" {}", step.label()), label));
        }

        frame.render_widget(
            Paragraph::new(vec![header, Line::raw(""), Line::from(indicator)]),
            area,
        );
    }

    /// Render a single text input row
    fn field_line(&self, field: Field, focused: bool) -> Line<'static> {
        let value = self.wizard.state().field(field).to_string();
        let mut spans = vec![Span::styled(
            format!("  {:<19}", format!("{}:", field.label())),
            Style::default().fg(Color::Cyan),
        )];

        if value.is_empty() {
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
            spans.push(Span::styled(
                field.placeholder(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            let style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(value, style));
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
        }

        Line::from(spans)
    }

    /// Render the logo input rows
    fn logo_lines(&self, focused: bool) -> Vec<Line<'static>> {
        let label = Span::styled(
            format!("  {:<19}", "Token Logo:"),
            Style::default().fg(Color::Cyan),
        );
        let status = match self.wizard.state().token_logo() {
            Some(logo) => Line::from(vec![
                label,
                Span::styled("✓ ", Style::default().fg(Color::Green)),
                Span::styled(
                    format!("Logo uploaded: {}", logo.name()),
                    Style::default().fg(Color::Green),
                ),
            ]),
            None => Line::from(vec![
                label,
                Span::styled(
                    "Type a path to upload a logo ",
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    "(recommended size: 200×200)",
                    Style::default().fg(Color::DarkGray),
                ),
            ]),
        };

        let draft_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let mut path = vec![
            Span::styled(format!("  {:<19}", ""), Style::default()),
            Span::styled("Path: ", Style::default().fg(Color::DarkGray)),
            Span::styled(self.logo_draft.clone(), draft_style),
        ];
        if focused {
            path.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            let hint = if self.wizard.state().token_logo().is_some() {
                "  [Enter] Change logo"
            } else {
                "  [Enter] Select"
            };
            path.push(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        }

        vec![status, Line::from(path)]
    }

    /// Draw a button and record its area
    fn draw_button(frame: &mut Frame, area: Rect, label: &str, style: Style) -> Rect {
        let width = (label.chars().count() as u16).min(area.width);
        let rect = Rect::new(area.x, area.y, width, area.height.min(1));
        frame.render_widget(
            Paragraph::new(Span::styled(label.to_string(), style)),
            rect,
        );
        rect
    }

    /// Draw the Back / forward button row
    fn draw_buttons(&mut self, frame: &mut Frame, area: Rect) {
        let step = self.wizard.step();
        let layout = Layout::horizontal([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Fill(1),
            Constraint::Length(14),
            Constraint::Length(2),
        ])
        .split(area);

        let back_style = if step == Step::Basic {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        };
        self.hit_areas.back = Some(Self::draw_button(frame, layout[1], " ← ", back_style));

        let forward = layout[3];
        if step == Step::Review {
            let style = Style::default().fg(Color::Black).bg(Color::Cyan);
            self.hit_areas.start_over =
                Some(Self::draw_button(frame, forward, " Start Over ", style));
        } else {
            let style = if self.wizard.can_advance() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            self.hit_areas.next = Some(Self::draw_button(frame, forward, " Next → ", style));
        }
    }

    /// Draw the Basic and Details input rows
    fn draw_form(&mut self, frame: &mut Frame, area: Rect) {
        let inputs = step_inputs(self.wizard.step());
        let mut constraints: Vec<Constraint> = Vec::with_capacity(inputs.len() + 3);
        for input in inputs {
            constraints.push(match input {
                Input::Logo => Constraint::Length(3),
                Input::Text(Field::Social(SocialLink::Website)) => Constraint::Length(2),
                Input::Text(Field::Social(_)) => Constraint::Length(1),
                Input::Text(_) => Constraint::Length(2),
            });
        }
        constraints.push(Constraint::Fill(1)); // Spacer
        constraints.push(Constraint::Length(1)); // Buttons
        let layout = Layout::vertical(constraints).split(area);

        for (i, input) in inputs.iter().enumerate() {
            let focused = i == self.focus;
            let row = layout[i];
            match input {
                Input::Text(field @ Field::Social(SocialLink::Website)) => {
                    // Section title above the first social link
                    let lines = vec![
                        Line::styled(
                            "  Social Links (Optional)",
                            Style::default()
                                .fg(Color::Magenta)
                                .add_modifier(Modifier::BOLD),
                        ),
                        self.field_line(*field, focused),
                    ];
                    frame.render_widget(Paragraph::new(lines), row);
                    self.hit_areas.inputs.push((
                        i,
                        Rect {
                            y: row.y + 1,
                            height: row.height.saturating_sub(1),
                            ..row
                        },
                    ));
                }
                Input::Text(field) => {
                    frame.render_widget(Paragraph::new(self.field_line(*field, focused)), row);
                    self.hit_areas.inputs.push((i, row));
                }
                Input::Logo => {
                    frame.render_widget(Paragraph::new(self.logo_lines(focused)), row);
                    self.hit_areas.inputs.push((i, row));
                }
            }
        }

        let buttons = layout[inputs.len() + 1];
        self.draw_buttons(frame, buttons);
    }

    /// Draw the Review step
    fn draw_review(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([
            Constraint::Length(7), // Summary
            Constraint::Length(8), // Launch panel
            Constraint::Length(1), // Payment trigger
            Constraint::Fill(1),   // Spacer
            Constraint::Length(1), // Buttons
        ])
        .split(area);

        // Summary is rebuilt from state on every draw
        let summary = self.wizard.review();
        let rows: Vec<Line> = summary
            .rows()
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("  {:<14}", label), Style::default().fg(Color::Cyan)),
                    Span::styled(
                        value,
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            })
            .collect();
        let summary_block = Paragraph::new(rows).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Review Your Token ")
                .border_style(Style::default().fg(Color::Magenta)),
        );
        frame.render_widget(summary_block, layout[0]);

        let launch = Paragraph::new(format!(
            "Your {} and token are ready to be deployed to the blockchain. Once payment is \
             received, coin will be launched and available on the Dashboard. In the event you \
             decide to change the coin click the \"close\" button to remove all liquidity. The \
             amount of SOL loaned will be available in the Dashboard for 24 hours after payment \
             for you to create new coins allowing you to re-use the loaned liquidity for a new coin.",
            self.config.liquidity
        ))
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " Ready to Launch! Make Payment of {} to Proceed ",
                    self.config.launch_fee
                ))
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(launch, layout[1]);

        let trigger_label = " ₪ Payment Address ";
        let trigger_width = trigger_label.chars().count() as u16;
        let trigger_row = layout[2];
        let trigger_x = trigger_row.x + trigger_row.width.saturating_sub(trigger_width) / 2;
        let trigger_style = if self.payment.is_visible() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        };
        let trigger = Self::draw_button(
            frame,
            Rect {
                x: trigger_x,
                width: trigger_row.width.saturating_sub(trigger_x - trigger_row.x),
                ..trigger_row
            },
            trigger_label,
            trigger_style,
        );
        self.hit_areas.payment_trigger = Some(trigger);

        self.draw_buttons(frame, layout[4]);

        if self.payment.is_visible() {
            self.draw_payment_popover(frame, area, trigger);
        }
    }

    /// Draw the payment address popover next to its trigger
    ///
    /// Opens below the trigger, or above it when there is no room below.
    /// With room on neither side it is pinned to the top of `area`.
    fn draw_payment_popover(&mut self, frame: &mut Frame, area: Rect, trigger: Rect) {
        let address = self.config.payment_address.clone();
        let width = (address.chars().count() as u16 + 6).min(area.width);
        let height = POPOVER_HEIGHT.min(area.height);
        if width == 0 || height == 0 {
            return;
        }

        let y = if area.bottom().saturating_sub(trigger.bottom()) >= POPOVER_HEIGHT {
            trigger.bottom()
        } else if trigger.y.saturating_sub(area.y) >= POPOVER_HEIGHT {
            trigger.y - POPOVER_HEIGHT
        } else {
            area.y
        };

        let center = trigger.x + trigger.width / 2;
        let x = center
            .saturating_sub(width / 2)
            .max(area.x)
            .min(area.right().saturating_sub(width));
        let popover = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popover);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Payment Address ");
        let inner = block.inner(popover);
        frame.render_widget(block, popover);

        let layout = Layout::vertical([
            Constraint::Length(1), // Address
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Copy button
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {} ", address),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            layout[0],
        );
        let copy = Self::draw_button(
            frame,
            layout[2],
            " Copy Address ",
            Style::default().fg(Color::Black).bg(Color::Magenta),
        );
        self.hit_areas.copy = Some(copy);

        self.payment.set_bounds(bounds_of(popover));
    }

    /// Draw the key help line
    fn draw_help(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        let mut key = |k: &'static str, label: &'static str, color: Color| {
            spans.push(Span::styled(format!(" [{}] ", k), Style::default().fg(color)));
            spans.push(Span::raw(label));
            spans.push(Span::raw("  "));
        };

        match self.wizard.step() {
            Step::Basic => {
                key("Tab", "Next field", Color::Cyan);
                key("Enter", "Next / Select logo", Color::Green);
                key("Esc", "Quit", Color::Cyan);
            }
            Step::Details => {
                key("Tab", "Next field", Color::Cyan);
                key("Enter", "Next", Color::Green);
                key("Esc", "Back", Color::Cyan);
            }
            Step::Review => {
                key("p", "Payment Address", Color::Green);
                if self.payment.is_visible() {
                    key("c", "Copy Address", Color::Green);
                    key("Esc", "Close", Color::Cyan);
                } else {
                    key("Esc", "Back", Color::Cyan);
                }
                key("r", "Start Over", Color::Cyan);
                key("q", "Quit", Color::Cyan);
            }
        }
        key("F2", "Menu", Color::Cyan);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for WizardComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match self.wizard.step() {
            Step::Basic | Step::Details => self.handle_form_key(key),
            Step::Review => self.handle_review_key(key),
        };

        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let position = Position::new(mouse.column, mouse.row);
        let areas = &self.hit_areas;

        // Popover content sits on top of everything else
        if self.payment.is_visible() {
            if hit(areas.copy, position) {
                return Ok(Some(Action::CopyAddress));
            }
            let point = Point::new(mouse.column, mouse.row);
            if self
                .payment
                .bounds()
                .is_some_and(|bounds| bounds.contains(point))
            {
                return Ok(None);
            }
        }
        if hit(areas.payment_trigger, position) {
            return Ok(Some(Action::TogglePayment));
        }
        if hit(areas.back, position) {
            return Ok(Some(Action::PrevStep));
        }
        if hit(areas.next, position) {
            return Ok(Some(Action::NextStep));
        }
        if hit(areas.start_over, position) {
            return Ok(Some(Action::StartOver));
        }
        if let Some((index, _)) = areas.inputs.iter().find(|(_, rect)| rect.contains(position)) {
            self.focus = *index;
        }

        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let from = self.wizard.step();
        match action {
            Action::NextStep => {
                if self.wizard.go_next() {
                    self.on_step_changed(from);
                }
            }
            Action::PrevStep => {
                if self.wizard.go_prev() {
                    self.on_step_changed(from);
                }
            }
            Action::StartOver => {
                self.wizard.reset();
                self.on_step_changed(from);
            }
            Action::SelectLogo => self.select_logo(),
            Action::TogglePayment => {
                if self.wizard.step() == Step::Review {
                    self.payment.toggle();
                }
            }
            Action::ClosePayment => self.payment.close(),
            Action::CopyAddress => {
                if self.payment.is_visible() {
                    self.payment
                        .copy_address(self.clipboard.as_ref(), &self.config.payment_address);
                }
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let layout = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Spacer
            Constraint::Fill(1),   // Content
            Constraint::Length(1), // Help
        ])
        .split(area);

        self.hit_areas.clear();

        self.draw_header(frame, layout[0]);

        match self.wizard.step() {
            Step::Basic | Step::Details => self.draw_form(frame, layout[2]),
            Step::Review => self.draw_review(frame, layout[2]),
        }

        self.draw_help(frame, layout[3]);

        Ok(())
    }
}
