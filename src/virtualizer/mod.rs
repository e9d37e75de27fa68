//! Fixed-size list and grid virtualization engine (pure core).
//!
//! Given an item count, a fixed item size, a viewport's offset and extent and
//! an overscan margin, the engine computes which items must be rendered and
//! where. Nothing here knows about terminals; the `view` module is just one
//! consumer of the descriptors produced here.
//!
//! # Layering
//!
//! - [`range`]: pure range arithmetic
//! - [`item`]: lazy [`VirtualItem`] materialization
//! - [`scroll`]: the [`ScrollElement`] capability and [`ScrollObserver`]
//! - [`axis`]: the single-axis [`Virtualizer`]
//! - [`grid`]: [`GridVirtualizer`], the cross product of two axes
//! - [`viewport`]: [`Viewport`], an in-memory [`ScrollElement`]

pub mod axis;
pub mod grid;
pub mod item;
pub mod range;
pub mod scroll;
pub mod types;
pub mod viewport;

pub use axis::{AxisConfig, Snapshot, Virtualizer, VirtualizerOptions};
pub use grid::{GridCell, GridCells, GridSize, GridVirtualizer};
pub use item::{materialize, VirtualItem, VirtualItems};
pub use range::{compute_range, visible_range, VisibleRange};
pub use scroll::{
    fixed_element, ObservedChange, ScrollElement, ScrollElementProvider, ScrollObserver,
    ScrollState,
};
pub use types::{ItemSize, Orientation, ScrollAlign, UnknownScrollAlign};
pub use viewport::Viewport;
