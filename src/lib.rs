//! virtscroll
//!
//! Fixed-size list and grid virtualization with a terminal demo.
//!
//! The [`virtualizer`] module is the pure core: it turns an item count, a
//! fixed item size and a viewport into the window of items to render. The
//! remaining modules form the impure shell that feeds it terminal
//! dimensions and draws what it returns.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod virtualizer;
