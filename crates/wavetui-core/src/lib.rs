#![forbid(unsafe_code)]

//! Leaf primitives for the wavetui dialog stack.
//!
//! Everything here is plain data: the cell-grid rectangles the layout
//! negotiation works in, the bit-packed scroll/window-control descriptors
//! passed between the input layer and the viewports, and the geometry error
//! taxonomy shared by both.

pub mod error;
pub mod geometry;
pub mod mask;

pub use error::{FALLBACK_COLS, GeometryError, checked_dim};
pub use geometry::{Margins, PadPos, Rect};
pub use mask::{ScrollMask, WinCtrlMask};
