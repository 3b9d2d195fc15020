//! Pointer-down observation
//!
//! A single-threaded registry of listeners for pointer presses. Listeners
//! are held through [`PointerSubscription`] guards and removed when the
//! guard drops, so a listener can never outlive its owner.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

/// A cell position on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Bounds {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the point lies inside (right and bottom edges exclusive)
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && u32::from(point.x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(point.y) < u32::from(self.y) + u32::from(self.height)
    }
}

type ListenerId = u64;
type Listener = Box<dyn FnMut(Point)>;

#[derive(Default)]
struct Registry {
    next_id: ListenerId,
    live: BTreeSet<ListenerId>,
    listeners: BTreeMap<ListenerId, Listener>,
}

/// Broadcasts pointer presses to subscribed listeners
#[derive(Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener for pointer presses
    ///
    /// The listener stays registered until the returned guard is dropped.
    pub fn subscribe(&self, listener: impl FnMut(Point) + 'static) -> PointerSubscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.live.insert(id);
        registry.listeners.insert(id, Box::new(listener));
        tracing::debug!("Pointer listener {} registered", id);

        PointerSubscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer press to every listener
    ///
    /// Listeners may drop their own subscription (or others) while handling
    /// the press; such listeners are not called again.
    pub fn dispatch(&self, point: Point) {
        let ids: Vec<ListenerId> = self.registry.borrow().live.iter().copied().collect();
        for id in ids {
            // Take the listener out so it can reach back into the registry
            let listener = self.registry.borrow_mut().listeners.remove(&id);
            let Some(mut listener) = listener else {
                continue;
            };
            listener(point);

            let mut registry = self.registry.borrow_mut();
            if registry.live.contains(&id) {
                registry.listeners.insert(id, listener);
            }
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.registry.borrow().live.len()
    }
}

impl std::fmt::Debug for PointerHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerHub")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

/// RAII guard that unregisters its listener when dropped
#[must_use]
#[derive(Debug)]
pub struct PointerSubscription {
    id: ListenerId,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for PointerSubscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let mut registry = registry.borrow_mut();
            registry.live.remove(&self.id);
            registry.listeners.remove(&self.id)
        };
        // Dropped outside the borrow; the closure may own other guards
        drop(removed);
        tracing::debug!("Pointer listener {} released", self.id);
    }
}
