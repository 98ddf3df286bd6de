//! The seam to the physical character grid.
//!
//! Viewports never touch screen cells. The terminal backend implements
//! [`GridBlit`] and receives pad slices and scrollbar geometry; tests use a
//! recording implementation instead of a terminal.

use wavetui_core::Rect;

/// Scrollbar painting instructions for one track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackGeometry {
    /// The full screen track, arrow cells included.
    pub area: Rect,
    /// Track orientation.
    pub horizontal: bool,
    /// Whether the first and last track cells are arrow controls.
    pub arrows: bool,
    /// Thumb start, in cells from the track origin.
    pub thumb_offset: u16,
    /// Thumb extent in cells.
    pub thumb_len: u16,
}

/// Character-grid blit primitives supplied by the terminal backend.
pub trait GridBlit {
    /// Paint a pad slice into a screen rectangle. Both rectangles have the
    /// same extent; `pad_area` is in pad coordinates, `screen_area` in
    /// screen coordinates.
    fn blit_pad(&mut self, pad_area: Rect, screen_area: Rect);

    /// Paint a border frame with an optional title.
    fn paint_border(&mut self, area: Rect, title: Option<&str>);

    /// Paint one scrollbar track.
    fn paint_track(&mut self, track: &TrackGeometry);

    /// Clear a screen rectangle back to the background.
    fn erase(&mut self, area: Rect);
}
