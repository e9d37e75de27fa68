//! Scroll container abstraction and the observer that tracks it.
//!
//! The scroll container is external to the engine and mutated by two actors:
//! user input and programmatic `scroll_to_index`. The engine never owns it.
//! It reaches the container through a [`ScrollElementProvider`], a capability
//! that may yield nothing (the consumer unmounted the viewport).
//!
//! [`ScrollObserver`] re-invokes the provider and re-reads offset and extent on
//! every [`observe`](ScrollObserver::observe) call. There is no caching between
//! notifications; the container is the single source of truth.

use super::types::Orientation;
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

/// A scrollable container as seen by one or more virtualizers.
///
/// Methods take `&self` because the same container is shared by several
/// virtualizers (a grid binds its row axis and column axis to one element);
/// implementors use interior mutability.
pub trait ScrollElement {
    /// Current scroll offset along `orientation`.
    fn scroll_offset(&self, orientation: Orientation) -> u64;

    /// Length of the visible window along `orientation`.
    fn viewport_extent(&self, orientation: Orientation) -> u64;

    /// Programmatically move the scroll offset along `orientation`.
    fn scroll_to(&self, orientation: Orientation, offset: u64);
}

/// Capability returning the currently mounted scroll container, if any.
pub type ScrollElementProvider = Box<dyn Fn() -> Option<Rc<dyn ScrollElement>>>;

/// Build a provider that always yields `element`.
pub fn fixed_element<E>(element: Rc<E>) -> ScrollElementProvider
where
    E: ScrollElement + 'static,
{
    Box::new(move || Some(element.clone() as Rc<dyn ScrollElement>))
}

/// Scroll position of one axis at the moment of the last observation.
///
/// # Invariants
/// - `offset <= max(0, total_extent - viewport_extent)` for the total extent
///   it was observed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    /// Current scroll offset.
    pub offset: u64,
    /// Length of the visible window.
    pub viewport_extent: u64,
}

impl ScrollState {
    /// Exclusive end of the visible window.
    pub fn end(&self) -> u64 {
        self.offset.saturating_add(self.viewport_extent)
    }

    /// Largest valid offset for content of `total_extent`.
    pub fn max_offset(&self, total_extent: u64) -> u64 {
        total_extent.saturating_sub(self.viewport_extent)
    }
}

/// What changed between two observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedChange {
    /// Same binding state, same offset and extent.
    Unchanged,
    /// Still bound; offset or extent moved.
    Moved,
    /// A container appeared (`Unbound -> Bound`).
    Bound,
    /// The container disappeared (`Bound -> Unbound`); scroll state discarded.
    Unbound,
}

/// Tracks the scroll offset and viewport extent of one axis of a container.
pub struct ScrollObserver {
    orientation: Orientation,
    provider: Option<ScrollElementProvider>,
    state: Option<ScrollState>,
}

impl ScrollObserver {
    /// Create an observer for `orientation`. Starts `Unbound` until observed.
    pub fn new(orientation: Orientation, provider: Option<ScrollElementProvider>) -> Self {
        Self {
            orientation,
            provider,
            state: None,
        }
    }

    /// Replace the element provider. Takes effect at the next observation.
    pub fn set_provider(&mut self, provider: Option<ScrollElementProvider>) {
        self.provider = provider;
    }

    /// Axis this observer reads.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Last observed state; `None` while unbound.
    pub fn state(&self) -> Option<ScrollState> {
        self.state
    }

    /// Whether a container was attached at the last observation.
    pub fn is_bound(&self) -> bool {
        self.state.is_some()
    }

    /// Re-obtain the container and re-read its offset and extent.
    ///
    /// The offset is clamped to `[0, max(0, total_extent - viewport_extent)]`.
    pub fn observe(&mut self, total_extent: u64) -> ObservedChange {
        let previous = self.state;
        self.state = self.resolve().map(|element| {
            let viewport_extent = element.viewport_extent(self.orientation);
            let offset = element
                .scroll_offset(self.orientation)
                .min(total_extent.saturating_sub(viewport_extent));
            ScrollState {
                offset,
                viewport_extent,
            }
        });

        let change = match (previous, self.state) {
            (None, None) => ObservedChange::Unchanged,
            (None, Some(_)) => ObservedChange::Bound,
            (Some(_), None) => ObservedChange::Unbound,
            (Some(before), Some(after)) if before == after => ObservedChange::Unchanged,
            (Some(_), Some(_)) => ObservedChange::Moved,
        };

        match change {
            ObservedChange::Bound | ObservedChange::Unbound => {
                debug!(orientation = ?self.orientation, ?change, "Scroll element binding changed");
            }
            ObservedChange::Moved => {
                trace!(orientation = ?self.orientation, state = ?self.state, "Scroll state moved");
            }
            ObservedChange::Unchanged => {}
        }

        change
    }

    /// Write `offset` to the container, then observe the result.
    ///
    /// Returns `None` without side effects when no container is attached.
    pub fn scroll_to(&mut self, offset: u64, total_extent: u64) -> Option<ObservedChange> {
        let Some(element) = self.resolve() else {
            self.observe(total_extent);
            return None;
        };
        element.scroll_to(self.orientation, offset);
        Some(self.observe(total_extent))
    }

    fn resolve(&self) -> Option<Rc<dyn ScrollElement>> {
        self.provider.as_ref().and_then(|provider| provider())
    }
}

impl fmt::Debug for ScrollObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollObserver")
            .field("orientation", &self.orientation)
            .field("has_provider", &self.provider.is_some())
            .field("state", &self.state)
            .finish()
    }
}
