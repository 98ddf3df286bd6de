#![forbid(unsafe_code)]

//! Virtualized scrolling viewports for the wavetui dialog stack.
//!
//! Every dialog, list, and form in the application renders into an
//! oversized logical buffer (a pad) and shows a slice of it through a
//! bordered on-screen window. This crate owns the arithmetic that keeps
//! that illusion consistent:
//!
//! - [`VirtualCanvas`] maps the pad onto a bounded viewbox and clamps
//!   scroll offsets.
//! - [`ScrollIndicator`] turns content-vs-track ratios into proportional
//!   thumb geometry.
//! - [`Viewport`] composes a border frame, one canvas, and up to two
//!   indicators, negotiating geometry against a parent rectangle and
//!   keeping offset and thumb in lockstep on every scroll.
//!
//! Painting cells is not done here; a [`GridBlit`] implementation supplied
//! by the terminal backend receives pad slices and track geometry.

pub mod canvas;
pub mod scrollbar;
pub mod surface;
pub mod viewport;

pub use canvas::VirtualCanvas;
pub use scrollbar::{BarEdge, ScrollIndicator};
pub use surface::{GridBlit, TrackGeometry};
pub use viewport::{AutoScrollOffset, ViewProperty, Viewport};
