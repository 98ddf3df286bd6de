//! Proportional scrollbar geometry.
//!
//! One indicator covers one axis. It never paints anything; it converts
//! content-length-vs-track-length into page counts and a thumb rectangle,
//! and hands that to the renderer as [`TrackGeometry`].

use crate::surface::TrackGeometry;
use wavetui_core::{GeometryError, Rect, ScrollMask};

/// Which edge of a content box the indicator sits against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarEdge {
    Top,
    Bottom,
    Left,
    Right,
}

impl BarEdge {
    /// Whether a bar on this edge runs horizontally.
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, BarEdge::Top | BarEdge::Bottom)
    }
}

/// A one-axis proportional scrollbar.
///
/// `bar_length` is the usable track (two cells less than the screen track
/// when arrow controls are shown). Pages beyond the first each claim one
/// increment; while increments still fit the track the thumb shrinks to
/// cover what is left, and once they no longer fit the thumb collapses to
/// a single cell stepped by the fractional `page_inc_val`.
#[derive(Debug, Clone)]
pub struct ScrollIndicator {
    edge: BarEdge,
    track: Rect,
    arrows: bool,
    bar_length: u16,
    scroll_length: u32,
    page_count: u32,
    page_increments: u32,
    page_inc_val: f64,
    scroller_size: u16,
    scroller_pos: u16,
}

impl ScrollIndicator {
    /// Create an indicator over the given screen track.
    ///
    /// The track must leave at least one usable cell after arrow controls
    /// are carved off.
    pub fn new(edge: BarEdge, track: Rect, arrows: bool) -> Result<Self, GeometryError> {
        let cells = if edge.is_horizontal() {
            track.cols
        } else {
            track.rows
        };
        let bar_length = cells.saturating_sub(if arrows { 2 } else { 0 });
        if bar_length == 0 {
            tracing::warn!(?edge, ?track, "scrollbar track too short");
            return Err(GeometryError::EmptyExtent {
                rows: track.rows,
                cols: track.cols,
            });
        }
        Ok(Self {
            edge,
            track,
            arrows,
            bar_length,
            scroll_length: 0,
            page_count: 1,
            page_increments: 0,
            page_inc_val: 1.0,
            scroller_size: bar_length,
            scroller_pos: 0,
        })
    }

    /// Recompute page and thumb geometry for a new content length.
    ///
    /// Resets the thumb to the track origin.
    pub fn set_scroll_length(&mut self, content: u32) {
        self.scroll_length = content;
        let bar = u32::from(self.bar_length);
        self.page_count = if content > bar { content - bar + 1 } else { 1 };
        self.page_increments = self.page_count - 1;
        if self.page_count < bar {
            // One track cell per increment; the thumb fills the rest.
            self.scroller_size = self.bar_length - self.page_increments as u16;
            self.page_inc_val = 1.0;
        } else {
            self.scroller_size = 1;
            self.page_inc_val = f64::from(self.bar_length) / self.page_count as f64;
        }
        self.scroller_pos = 0;
    }

    /// Move the thumb to the given page position.
    ///
    /// Positions at or past the last increment pin the thumb flush to the
    /// track end. Returns whether the thumb cell actually moved, which is
    /// what drives a redraw.
    pub fn set_position(&mut self, pos: u32) -> bool {
        if self.page_increments == 0 {
            return false;
        }
        let prev = self.scroller_pos;
        self.scroller_pos = if pos >= self.page_increments {
            self.bar_length - self.scroller_size
        } else {
            (pos as f64 * self.page_inc_val).floor() as u16
        };
        self.scroller_pos != prev
    }

    /// Number of discrete scroll increments; callers clamp their own
    /// position counters against this.
    #[inline]
    pub fn total_increments(&self) -> u32 {
        self.page_increments
    }

    #[inline]
    pub fn edge(&self) -> BarEdge {
        self.edge
    }

    #[inline]
    pub fn bar_length(&self) -> u16 {
        self.bar_length
    }

    #[inline]
    pub fn scroller_size(&self) -> u16 {
        self.scroller_size
    }

    #[inline]
    pub fn scroller_pos(&self) -> u16 {
        self.scroller_pos
    }

    /// Geometry handed to the renderer for painting.
    pub fn track_geometry(&self) -> TrackGeometry {
        TrackGeometry {
            area: self.track,
            horizontal: self.edge.is_horizontal(),
            arrows: self.arrows,
            thumb_offset: self.scroller_pos + u16::from(self.arrows),
            thumb_len: self.scroller_size,
        }
    }

    /// Resolve a mouse position against the arrow cells at the track ends.
    ///
    /// Returns a unit-factor scroll intent, or `None` when arrows are off
    /// or the cell is not an arrow.
    pub fn hit_arrow(&self, y: u16, x: u16) -> Option<ScrollMask> {
        if !self.arrows || !self.track.contains(y, x) {
            return None;
        }
        if self.edge.is_horizontal() {
            if x == self.track.x {
                return Some(ScrollMask::left(1));
            }
            if x == self.track.right() - 1 {
                return Some(ScrollMask::right(1));
            }
        } else {
            if y == self.track.y {
                return Some(ScrollMask::up(1));
            }
            if y == self.track.bottom() - 1 {
                return Some(ScrollMask::down(1));
            }
        }
        None
    }
}
