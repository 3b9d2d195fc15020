//! token-launcher-core: Wizard and overlay logic for token-launcher
//!
//! Everything here is independent of the terminal: the step state machine,
//! the derived review summary, the dismissable popover and the launcher
//! configuration.

pub mod config;
pub mod error;
pub mod overlay;
pub mod pointer;
pub mod review;
pub mod wizard;

pub use config::{ConfigSource, LauncherConfig};
pub use error::LauncherError;
pub use overlay::{ClipboardWriter, Overlay, OverlayState};
pub use pointer::{Bounds, Point, PointerHub, PointerSubscription};
pub use review::{LogoStatus, ReviewSummary};
pub use wizard::{Field, FileRef, SocialLink, SocialLinks, Step, Wizard, WizardState};
