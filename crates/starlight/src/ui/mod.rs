//! Element tree
//!
//! Windows, labels and buttons form an owned tree. Every element stores its
//! rectangle relative to its parent; absolute positions only exist while a
//! frame is being drawn.
//!
//! Drawing is a pre-order walk: a parent paints before its children, so
//! children cover the parent wherever they overlap. Tree order is the only
//! stacking order.

pub mod element;
pub mod theme;

pub use element::{Element, ElementKind};
pub use theme::Theme;
