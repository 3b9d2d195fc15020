//! Actions produced by components and handled by the app

/// Something the user asked for, independent of how it was triggered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resize(u16, u16),

    // Wizard navigation
    NextStep,
    PrevStep,
    StartOver,
    /// Resolve the typed logo path through the file picker
    SelectLogo,

    // Payment popover
    TogglePayment,
    ClosePayment,
    CopyAddress,

    // Navigation chrome
    ToggleMenu,
}
