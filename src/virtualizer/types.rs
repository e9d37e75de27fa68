//! Core virtualizer newtypes

use crate::model::VirtualizerError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Fixed size of every item on one axis. Always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemSize(u64);

impl ItemSize {
    /// Smart constructor that validates the size is >= 1.
    ///
    /// # Examples
    /// ```
    /// # use virtscroll::virtualizer::ItemSize;
    /// assert_eq!(ItemSize::new(35).unwrap().get(), 35);
    /// assert!(ItemSize::new(0).is_err());
    /// ```
    pub fn new(size: u64) -> Result<Self, VirtualizerError> {
        if size == 0 {
            Err(VirtualizerError::invalid(format!(
                "item size must be > 0 (got {size})"
            )))
        } else {
            Ok(Self(size))
        }
    }

    /// Get the raw size.
    pub fn get(&self) -> u64 {
        self.0
    }

    /// Leading edge of the item at `index`: `index * size`, saturating.
    pub fn offset_of(&self, index: usize) -> u64 {
        (index as u64).saturating_mul(self.0)
    }

    /// Total extent of `count` items, saturating.
    pub fn extent_of(&self, count: usize) -> u64 {
        self.offset_of(count)
    }
}

/// Scroll axis of a virtualizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Items stack top to bottom (rows).
    #[default]
    Vertical,
    /// Items stack left to right (columns).
    Horizontal,
}

impl Orientation {
    /// Whether this is the horizontal axis.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Orientation::Horizontal)
    }
}

/// Where a `scroll_to_index` target lands in the viewport.
///
/// - `Start`: item's leading edge at the viewport start
/// - `Center`: item's midpoint at the viewport midpoint
/// - `End`: item's trailing edge at the viewport end
/// - `Auto`: smallest scroll that makes the item fully visible
///   (no scroll at all if it already is)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlign {
    /// Align the item's leading edge with the viewport start.
    #[default]
    Start,
    /// Center the item in the viewport.
    Center,
    /// Align the item's trailing edge with the viewport end.
    End,
    /// Scroll as little as possible to show the whole item.
    Auto,
}

impl ScrollAlign {
    /// Accepted spellings, in declaration order.
    pub const NAMES: [&'static str; 4] = ["start", "center", "end", "auto"];

    /// Lowercase name used by config files and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollAlign::Start => "start",
            ScrollAlign::Center => "center",
            ScrollAlign::End => "end",
            ScrollAlign::Auto => "auto",
        }
    }
}

impl fmt::Display for ScrollAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown alignment name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scroll alignment {0:?} (expected start, center, end or auto)")]
pub struct UnknownScrollAlign(pub String);

impl FromStr for ScrollAlign {
    type Err = UnknownScrollAlign;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" => Ok(ScrollAlign::Start),
            "center" => Ok(ScrollAlign::Center),
            "end" => Ok(ScrollAlign::End),
            "auto" => Ok(ScrollAlign::Auto),
            _ => Err(UnknownScrollAlign(s.to_string())),
        }
    }
}
