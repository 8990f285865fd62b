//! Rectangle geometry and bevel shading

pub mod rect;
pub mod shade;

pub use rect::Rect;
