//! Transient popover state
//!
//! The popover listens for pointer presses only while it is visible. The
//! listener is held as a [`PointerSubscription`] inside the popover state,
//! so hiding the popover by any route (toggle, close, a press outside it,
//! or dropping the `Overlay`) releases it.

use crate::pointer::{Bounds, Point, PointerHub, PointerSubscription};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Write access to the platform clipboard
///
/// Fire-and-forget: implementations report failures through logging only.
pub trait ClipboardWriter {
    fn write_text(&self, text: &str);
}

/// Visibility snapshot handed to rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayState {
    pub visible: bool,
}

#[derive(Debug, Default)]
struct Inner {
    visible: bool,
    /// Area the popover occupied on the last draw
    bounds: Option<Bounds>,
    subscription: Option<PointerSubscription>,
}

impl Inner {
    fn is_outside(&self, point: Point) -> bool {
        // Not laid out yet: there is no area to be outside of
        self.bounds.is_some_and(|bounds| !bounds.contains(point))
    }
}

/// A popover dismissed by pressing anywhere outside it
#[derive(Debug)]
pub struct Overlay {
    inner: Rc<RefCell<Inner>>,
    hub: PointerHub,
}

impl Overlay {
    pub fn new(hub: PointerHub) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::default())),
            hub,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    pub fn state(&self) -> OverlayState {
        OverlayState {
            visible: self.is_visible(),
        }
    }

    /// Flip visibility
    pub fn toggle(&mut self) {
        if self.is_visible() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Hide the popover; idempotent
    pub fn close(&mut self) {
        hide(&self.inner);
    }

    /// Record where the popover was drawn
    pub fn set_bounds(&self, bounds: Bounds) {
        let mut inner = self.inner.borrow_mut();
        if inner.visible {
            inner.bounds = Some(bounds);
        }
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.inner.borrow().bounds
    }

    /// Whether a press at `point` falls outside the popover
    pub fn is_outside(&self, point: Point) -> bool {
        self.inner.borrow().is_outside(point)
    }

    /// Copy an address to the clipboard
    pub fn copy_address(&self, clipboard: &dyn ClipboardWriter, address: &str) {
        tracing::info!("Copying payment address to clipboard");
        clipboard.write_text(address);
    }

    fn open(&mut self) {
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        let subscription = self.hub.subscribe(move |point| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let outside = inner.borrow().is_outside(point);
            if outside {
                tracing::debug!("Overlay: press at {:?} outside, closing", point);
                hide(&inner);
            }
        });

        let mut inner = self.inner.borrow_mut();
        inner.visible = true;
        inner.subscription = Some(subscription);
        tracing::debug!("Overlay: opened");
    }
}

fn hide(inner: &RefCell<Inner>) {
    let released = {
        let mut inner = inner.borrow_mut();
        if !inner.visible {
            return;
        }
        inner.visible = false;
        inner.bounds = None;
        inner.subscription.take()
    };
    drop(released);
    tracing::debug!("Overlay: closed");
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clipboard that records every write
    #[derive(Default)]
    struct RecordingClipboard {
        writes: RefCell<Vec<String>>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&self, text: &str) {
            self.writes.borrow_mut().push(text.to_string());
        }
    }

    /// Create a visible overlay drawn at a fixed area
    fn visible_overlay(hub: &PointerHub) -> Overlay {
        let mut overlay = Overlay::new(hub.clone());
        overlay.toggle();
        overlay.set_bounds(Bounds::new(10, 10, 20, 4));
        overlay
    }

    #[test]
    fn test_starts_hidden_without_listener() {
        let hub = PointerHub::new();
        let overlay = Overlay::new(hub.clone());
        assert!(!overlay.is_visible());
        assert_eq!(overlay.state(), OverlayState { visible: false });
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let hub = PointerHub::new();
        let mut overlay = Overlay::new(hub.clone());

        overlay.toggle();
        assert!(overlay.is_visible());
        overlay.toggle();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_single_listener_across_repeated_toggles() {
        let hub = PointerHub::new();
        let mut overlay = Overlay::new(hub.clone());

        for _ in 0..5 {
            overlay.toggle();
            assert_eq!(hub.listener_count(), 1);
            overlay.toggle();
            assert_eq!(hub.listener_count(), 0);
        }
    }

    #[test]
    fn test_close_is_idempotent() {
        let hub = PointerHub::new();
        let mut overlay = visible_overlay(&hub);

        overlay.close();
        overlay.close();
        assert!(!overlay.is_visible());
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_press_inside_keeps_overlay_open() {
        let hub = PointerHub::new();
        let overlay = visible_overlay(&hub);

        hub.dispatch(Point::new(15, 11));
        assert!(overlay.is_visible());
        assert_eq!(hub.listener_count(), 1);
    }

    #[test]
    fn test_press_outside_closes_and_releases() {
        let hub = PointerHub::new();
        let overlay = visible_overlay(&hub);

        assert!(overlay.is_outside(Point::new(0, 0)));
        hub.dispatch(Point::new(0, 0));
        assert!(!overlay.is_visible());
        assert_eq!(hub.listener_count(), 0);
        assert!(overlay.bounds().is_none());
    }

    #[test]
    fn test_press_before_layout_is_ignored() {
        let hub = PointerHub::new();
        let mut overlay = Overlay::new(hub.clone());
        overlay.toggle();

        assert!(!overlay.is_outside(Point::new(0, 0)));
        hub.dispatch(Point::new(0, 0));
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_bounds_ignored_while_hidden() {
        let hub = PointerHub::new();
        let overlay = Overlay::new(hub);
        overlay.set_bounds(Bounds::new(0, 0, 5, 5));
        assert!(overlay.bounds().is_none());
    }

    #[test]
    fn test_drop_releases_listener() {
        let hub = PointerHub::new();
        let overlay = visible_overlay(&hub);
        assert_eq!(hub.listener_count(), 1);

        drop(overlay);
        assert_eq!(hub.listener_count(), 0);
    }

    #[test]
    fn test_copy_address_writes_exact_literal_once() {
        let hub = PointerHub::new();
        let overlay = visible_overlay(&hub);
        let clipboard = RecordingClipboard::default();

        overlay.copy_address(&clipboard, "AX8UpKZ5yRDbpiYJj4VfHxqERVLwF1veKNRp7Cqa1pin");

        assert_eq!(
            *clipboard.writes.borrow(),
            vec!["AX8UpKZ5yRDbpiYJj4VfHxqERVLwF1veKNRp7Cqa1pin".to_string()]
        );
        // Copying changes nothing else
        assert!(overlay.is_visible());
    }
}
