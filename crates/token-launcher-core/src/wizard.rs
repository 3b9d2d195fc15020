//! Token wizard - step state machine for the launch intake flow
//!
//! Collects token parameters across three steps:
//! 1. Basic: name, symbol and logo
//! 2. Details: description, supply and social links
//! 3. Review: read-only summary and payment
//!
//! Only the Basic step gates progression. The gate checks for empty strings
//! and nothing else, so whitespace-only values count as present.

use crate::review::ReviewSummary;
use std::fmt;
use std::path::{Path, PathBuf};

/// Wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// Name, symbol and logo
    #[default]
    Basic,
    /// Description, supply and social links
    Details,
    /// Summary and payment
    Review,
}

impl Step {
    /// Every step in display order
    pub const ALL: [Step; 3] = [Step::Basic, Step::Details, Step::Review];

    /// Get the step number (1-based) for display
    pub fn number(&self) -> u8 {
        match self {
            Step::Basic => 1,
            Step::Details => 2,
            Step::Review => 3,
        }
    }

    /// Look up a step by its 1-based number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.number() == number)
    }

    /// Get the total number of steps
    pub fn total() -> usize {
        Self::ALL.len()
    }

    /// Short label used by the step indicator
    pub fn label(&self) -> &'static str {
        match self {
            Step::Basic => "Basic",
            Step::Details => "Details",
            Step::Review => "Dashboard",
        }
    }

    /// Get the step title for display
    pub fn title(&self) -> &'static str {
        match self {
            Step::Basic => "Basic Information",
            Step::Details => "Token Details",
            Step::Review => "Review & Launch",
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            Step::Basic => Some(Step::Details),
            Step::Details => Some(Step::Review),
            Step::Review => None,
        }
    }

    fn prev(&self) -> Option<Self> {
        match self {
            Step::Basic => None,
            Step::Details => Some(Step::Basic),
            Step::Review => Some(Step::Details),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A user-selected logo file
///
/// Only the display name and presence matter to the wizard; the file
/// content is never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRef {
    name: String,
    path: PathBuf,
}

impl FileRef {
    /// Build a reference from a path, using its final component as the name
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { name, path }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Social link slots on the Details step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Website,
    Twitter,
    Telegram,
    Discord,
}

impl SocialLink {
    pub fn label(&self) -> &'static str {
        match self {
            SocialLink::Website => "Website",
            SocialLink::Twitter => "Twitter",
            SocialLink::Telegram => "Telegram",
            SocialLink::Discord => "Discord",
        }
    }
}

/// Social links collected on the Details step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    pub website: String,
    pub twitter: String,
    pub telegram: String,
    pub discord: String,
}

impl SocialLinks {
    pub fn get(&self, link: SocialLink) -> &str {
        match link {
            SocialLink::Website => &self.website,
            SocialLink::Twitter => &self.twitter,
            SocialLink::Telegram => &self.telegram,
            SocialLink::Discord => &self.discord,
        }
    }

    fn slot_mut(&mut self, link: SocialLink) -> &mut String {
        match link {
            SocialLink::Website => &mut self.website,
            SocialLink::Twitter => &mut self.twitter,
            SocialLink::Telegram => &mut self.telegram,
            SocialLink::Discord => &mut self.discord,
        }
    }
}

/// Text fields the wizard binds to inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    TokenName,
    TokenSymbol,
    TokenDescription,
    TotalSupply,
    Social(SocialLink),
}

impl Field {
    /// Input label
    pub fn label(&self) -> &'static str {
        match self {
            Field::TokenName => "Token Name",
            Field::TokenSymbol => "Token Symbol",
            Field::TokenDescription => "Token Description",
            Field::TotalSupply => "Total Supply",
            Field::Social(link) => link.label(),
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::TokenName => "e.g. My Amazing Token",
            Field::TokenSymbol => "e.g. MAT",
            Field::TokenDescription => "Describe your token and its purpose...",
            Field::TotalSupply => "e.g. 1000000000",
            Field::Social(SocialLink::Website) => "Website URL",
            Field::Social(SocialLink::Twitter) => "Twitter URL",
            Field::Social(SocialLink::Telegram) => "Telegram URL",
            Field::Social(SocialLink::Discord) => "Discord URL",
        }
    }
}

/// Data accumulated through the wizard flow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WizardState {
    step: Step,

    // From Basic step
    token_name: String,
    token_symbol: String,
    token_logo: Option<FileRef>,

    // From Details step
    token_description: String,
    total_supply: String,
    social_links: SocialLinks,
}

impl WizardState {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    pub fn token_symbol(&self) -> &str {
        &self.token_symbol
    }

    pub fn token_logo(&self) -> Option<&FileRef> {
        self.token_logo.as_ref()
    }

    pub fn token_description(&self) -> &str {
        &self.token_description
    }

    pub fn total_supply(&self) -> &str {
        &self.total_supply
    }

    pub fn social_links(&self) -> &SocialLinks {
        &self.social_links
    }

    /// Current value of a text field
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::TokenName => &self.token_name,
            Field::TokenSymbol => &self.token_symbol,
            Field::TokenDescription => &self.token_description,
            Field::TotalSupply => &self.total_supply,
            Field::Social(link) => self.social_links.get(link),
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::TokenName => &mut self.token_name,
            Field::TokenSymbol => &mut self.token_symbol,
            Field::TokenDescription => &mut self.token_description,
            Field::TotalSupply => &mut self.total_supply,
            Field::Social(link) => self.social_links.slot_mut(link),
        }
    }
}

/// Wizard controller: owns the state and the progression rules
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current state
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Get current step
    pub fn step(&self) -> Step {
        self.state.step
    }

    /// Whether Next is enabled on the current step
    ///
    /// Only the Basic step is gated, on non-empty name and symbol.
    pub fn can_advance(&self) -> bool {
        match self.state.step {
            Step::Basic => !self.state.token_name.is_empty() && !self.state.token_symbol.is_empty(),
            Step::Details => true,
            Step::Review => false,
        }
    }

    /// Advance to the next step when the current one allows it
    ///
    /// Returns whether the step changed.
    pub fn go_next(&mut self) -> bool {
        if !self.can_advance() {
            if self.state.step == Step::Basic {
                tracing::debug!("Wizard: Next blocked, name and symbol are required");
            }
            return false;
        }
        match self.state.step.next() {
            Some(next) => {
                self.transition(next);
                true
            }
            None => false,
        }
    }

    /// Return to the previous step; no-op on the first step
    pub fn go_prev(&mut self) -> bool {
        match self.state.step.prev() {
            Some(prev) => {
                self.transition(prev);
                true
            }
            None => false,
        }
    }

    /// Start over: return to the first step, keeping every entered value
    pub fn reset(&mut self) {
        self.transition(Step::Basic);
    }

    /// Assign a text field
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        *self.state.field_mut(field) = value.into();
    }

    /// Append a character to a text field
    pub fn push_char(&mut self, field: Field, c: char) {
        self.state.field_mut(field).push(c);
    }

    /// Remove the last character of a text field
    pub fn pop_char(&mut self, field: Field) {
        self.state.field_mut(field).pop();
    }

    /// Record a logo selection
    ///
    /// `None` means the picker produced nothing; the previous choice stays.
    pub fn set_logo(&mut self, logo: Option<FileRef>) {
        if let Some(file) = logo {
            tracing::info!("Wizard: logo selected: {}", file.name());
            self.state.token_logo = Some(file);
        }
    }

    /// Read-only summary shown on the Review step
    pub fn review(&self) -> ReviewSummary {
        ReviewSummary::from_state(&self.state)
    }

    /// Transition to a new step
    fn transition(&mut self, step: Step) {
        tracing::info!("Wizard: {:?} -> {:?}", self.state.step, step);
        self.state.step = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::LogoStatus;

    /// Create a wizard with the Basic step filled in
    fn basic_filled() -> Wizard {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::TokenName, "MAT Coin");
        wizard.set_field(Field::TokenSymbol, "MAT");
        wizard
    }

    /// Create a wizard sitting on the Review step
    fn at_review() -> Wizard {
        let mut wizard = basic_filled();
        assert!(wizard.go_next());
        assert!(wizard.go_next());
        wizard
    }

    // ==========================================================================
    // Step transitions
    // ==========================================================================

    #[test]
    fn test_starts_on_basic_with_empty_fields() {
        let wizard = Wizard::new();
        assert_eq!(wizard.step(), Step::Basic);
        assert_eq!(wizard.state().token_name(), "");
        assert_eq!(wizard.state().token_symbol(), "");
        assert!(wizard.state().token_logo().is_none());
        assert_eq!(wizard.state().social_links(), &SocialLinks::default());
    }

    #[test]
    fn test_prev_on_first_step_is_noop() {
        let mut wizard = Wizard::new();
        assert!(!wizard.go_prev());
        assert!(!wizard.go_prev());
        assert_eq!(wizard.step(), Step::Basic);
    }

    #[test]
    fn test_next_blocked_without_name() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::TokenSymbol, "MAT");

        assert!(!wizard.can_advance());
        assert!(!wizard.go_next());
        assert_eq!(wizard.step(), Step::Basic);
    }

    #[test]
    fn test_next_blocked_without_symbol() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::TokenName, "MAT Coin");

        assert!(!wizard.go_next());
        assert_eq!(wizard.step(), Step::Basic);
    }

    #[test]
    fn test_whitespace_only_values_pass_the_gate() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::TokenName, " ");
        wizard.set_field(Field::TokenSymbol, "\t");

        assert!(wizard.can_advance());
        assert!(wizard.go_next());
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn test_details_always_advances() {
        let mut wizard = basic_filled();
        wizard.go_next();
        // Clearing Basic fields after leaving the step does not gate Details
        wizard.set_field(Field::TokenName, "");
        wizard.set_field(Field::TokenSymbol, "");

        assert!(wizard.go_next());
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn test_next_on_review_is_noop() {
        let mut wizard = at_review();
        assert!(!wizard.can_advance());
        assert!(!wizard.go_next());
        assert_eq!(wizard.step(), Step::Review);
    }

    #[test]
    fn test_prev_walks_back_one_step() {
        let mut wizard = at_review();
        assert!(wizard.go_prev());
        assert_eq!(wizard.step(), Step::Details);
        assert!(wizard.go_prev());
        assert_eq!(wizard.step(), Step::Basic);
    }

    #[test]
    fn test_reset_keeps_field_values() {
        let mut wizard = at_review();
        wizard.set_field(Field::TokenDescription, "A community token");
        wizard.reset();

        assert_eq!(wizard.step(), Step::Basic);
        assert_eq!(wizard.state().token_name(), "MAT Coin");
        assert_eq!(wizard.state().token_symbol(), "MAT");
        assert_eq!(wizard.state().token_description(), "A community token");

        // Navigating forward again shows the same values
        wizard.go_next();
        wizard.go_next();
        let review = wizard.review();
        assert_eq!(review.name, "MAT Coin");
        assert_eq!(review.description, "A community token");
    }

    #[test]
    fn test_reset_from_every_step() {
        for number in 1..=3 {
            let mut wizard = basic_filled();
            while wizard.step().number() < number {
                wizard.go_next();
            }
            wizard.reset();
            assert_eq!(wizard.step(), Step::Basic);
            assert_eq!(wizard.state().token_name(), "MAT Coin");
        }
    }

    #[test]
    fn test_step_numbers_round_trip() {
        for step in Step::ALL {
            assert_eq!(Step::from_number(step.number()), Some(step));
        }
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
        assert_eq!(Step::total(), 3);
    }

    // ==========================================================================
    // Field binding
    // ==========================================================================

    #[test]
    fn test_social_link_updates_only_its_slot() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::Social(SocialLink::Website), "https://mat.example");
        wizard.set_field(Field::Social(SocialLink::Discord), "https://discord.gg/mat");
        wizard.set_field(Field::Social(SocialLink::Website), "https://mat.coin");

        let links = wizard.state().social_links();
        assert_eq!(links.website, "https://mat.coin");
        assert_eq!(links.twitter, "");
        assert_eq!(links.telegram, "");
        assert_eq!(links.discord, "https://discord.gg/mat");
    }

    #[test]
    fn test_typing_edits_field_in_place() {
        let mut wizard = Wizard::new();
        for c in "MATX".chars() {
            wizard.push_char(Field::TokenSymbol, c);
        }
        wizard.pop_char(Field::TokenSymbol);
        assert_eq!(wizard.state().field(Field::TokenSymbol), "MAT");

        // Popping an empty field is harmless
        wizard.pop_char(Field::TokenName);
        assert_eq!(wizard.state().field(Field::TokenName), "");
    }

    #[test]
    fn test_supply_accepts_any_text() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::TotalSupply, "lots");
        assert_eq!(wizard.state().total_supply(), "lots");
    }

    #[test]
    fn test_logo_selection_and_cancel() {
        let mut wizard = Wizard::new();
        wizard.set_logo(Some(FileRef::from_path("/tmp/logo.png")));
        assert_eq!(wizard.state().token_logo().map(FileRef::name), Some("logo.png"));

        // A cancelled picker does not clear the earlier choice
        wizard.set_logo(None);
        assert_eq!(wizard.state().token_logo().map(FileRef::name), Some("logo.png"));

        wizard.set_logo(Some(FileRef::from_path("/tmp/other.jpg")));
        assert_eq!(wizard.state().token_logo().map(FileRef::name), Some("other.jpg"));
    }

    // ==========================================================================
    // Scenario
    // ==========================================================================

    #[test]
    fn test_mat_coin_scenario() {
        let mut wizard = Wizard::new();
        wizard.set_field(Field::TokenName, "MAT Coin");
        wizard.set_field(Field::TokenSymbol, "MAT");
        wizard.go_next();
        assert_eq!(wizard.step(), Step::Details);

        wizard.set_field(Field::TotalSupply, "1000000000");
        wizard.go_next();
        assert_eq!(wizard.step(), Step::Review);

        let review = wizard.review();
        assert_eq!(review.name, "MAT Coin");
        assert_eq!(review.symbol, "MAT");
        assert_eq!(review.logo_status, LogoStatus::NotUploaded);
        assert_eq!(review.description, "Not provided");
        assert_eq!(review.supply, "1000000000");
    }
}
