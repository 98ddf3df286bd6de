//! The pad: an oversized logical content buffer behind a bounded viewbox.

use wavetui_core::{GeometryError, PadPos, Rect};

/// A logical content buffer larger than its on-screen window.
///
/// The pad's extent is fixed at creation. The viewbox is the screen-side
/// rectangle a slice of the pad shows through; `pos` is where that slice's
/// top-left corner sits on the pad. Scrollability per axis is derived
/// state: the viewbox extent is strictly smaller than the pad extent.
#[derive(Debug, Clone)]
pub struct VirtualCanvas {
    pad_rows: u16,
    pad_cols: u16,
    viewbox: Rect,
    pos: PadPos,
    scroll_y: bool,
    scroll_x: bool,
}

impl VirtualCanvas {
    /// Allocate a pad of the given logical extent.
    ///
    /// The viewbox starts as the full pad, so a fresh canvas is
    /// unscrollable until [`resize_viewbox`](Self::resize_viewbox) shrinks
    /// the window.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GeometryError> {
        if rows == 0 || cols == 0 {
            tracing::warn!(rows, cols, "refusing zero-extent pad");
            return Err(GeometryError::EmptyExtent { rows, cols });
        }
        Ok(Self {
            pad_rows: rows,
            pad_cols: cols,
            viewbox: Rect::from_size(rows, cols),
            pos: PadPos::default(),
            scroll_y: false,
            scroll_x: false,
        })
    }

    /// Logical pad height.
    #[inline]
    pub fn pad_rows(&self) -> u16 {
        self.pad_rows
    }

    /// Logical pad width.
    #[inline]
    pub fn pad_cols(&self) -> u16 {
        self.pad_cols
    }

    /// The screen-side display rectangle.
    #[inline]
    pub fn viewbox(&self) -> Rect {
        self.viewbox
    }

    /// Top-left corner of the viewbox's mapping onto the pad.
    #[inline]
    pub fn pos(&self) -> PadPos {
        self.pos
    }

    /// Whether the pad overflows the viewbox vertically.
    #[inline]
    pub fn is_scrollable_y(&self) -> bool {
        self.scroll_y
    }

    /// Whether the pad overflows the viewbox horizontally.
    #[inline]
    pub fn is_scrollable_x(&self) -> bool {
        self.scroll_x
    }

    /// The currently visible slice, in pad coordinates.
    #[inline]
    pub fn visible_slice(&self) -> Rect {
        Rect::new(self.pos.y, self.pos.x, self.viewbox.rows, self.viewbox.cols)
    }

    /// Largest valid pad offset on the vertical axis.
    #[inline]
    fn max_pos_y(&self) -> i32 {
        i32::from(self.pad_rows) - i32::from(self.viewbox.rows) - 1
    }

    /// Largest valid pad offset on the horizontal axis.
    #[inline]
    fn max_pos_x(&self) -> i32 {
        i32::from(self.pad_cols) - i32::from(self.viewbox.cols) - 1
    }

    /// Largest valid pad offset per axis; zero on an unscrollable axis.
    pub fn max_offset(&self) -> PadPos {
        PadPos::new(
            if self.scroll_y {
                self.max_pos_y() as u16
            } else {
                0
            },
            if self.scroll_x {
                self.max_pos_x() as u16
            } else {
                0
            },
        )
    }

    /// Resize the displayed rectangle, keeping its screen position.
    ///
    /// Extents are capped at the pad extent; scrollability is recomputed
    /// and the pad offset re-clamped into the new valid range. Returns
    /// `false` (state untouched) for a zero extent.
    pub fn resize_viewbox(&mut self, rows: u16, cols: u16) -> bool {
        if rows == 0 || cols == 0 {
            tracing::warn!(rows, cols, "ignoring zero-extent viewbox");
            return false;
        }
        self.viewbox.rows = rows.min(self.pad_rows);
        self.viewbox.cols = cols.min(self.pad_cols);
        self.scroll_y = self.viewbox.rows < self.pad_rows;
        self.scroll_x = self.viewbox.cols < self.pad_cols;
        self.pos.y = if self.scroll_y {
            self.pos.y.min(self.max_pos_y() as u16)
        } else {
            0
        };
        self.pos.x = if self.scroll_x {
            self.pos.x.min(self.max_pos_x() as u16)
        } else {
            0
        };
        true
    }

    /// Reposition the screen-side rectangle only; the pad offset is kept.
    pub fn move_viewbox(&mut self, y: u16, x: u16) {
        self.viewbox.y = y;
        self.viewbox.x = x;
    }

    /// Shift the pad offset by a signed delta per axis, clamping at the
    /// content bounds. An axis that is not scrollable is silently skipped.
    ///
    /// Returns whether the offset changed.
    ///
    /// The two clamp tests are inherited asymmetric: upward motion checks
    /// the magnitude against the current offset, downward motion checks
    /// `max - dy` against it. Boundary behavior of both forms is pinned by
    /// tests; keep them as they are.
    pub fn scroll_by(&mut self, dy: i32, dx: i32) -> bool {
        // Deltas clamp to the addressable cell range first; the negation
        // and `max - d` tests below must stay inside i32.
        let dy = dy.clamp(-i32::from(u16::MAX), i32::from(u16::MAX));
        let dx = dx.clamp(-i32::from(u16::MAX), i32::from(u16::MAX));
        let before = self.pos;
        if self.scroll_y && dy != 0 {
            let pos = i32::from(self.pos.y);
            self.pos.y = if dy < 0 && -dy > pos {
                0
            } else {
                let max = self.max_pos_y();
                if max - dy >= pos {
                    (pos + dy) as u16
                } else {
                    max as u16
                }
            };
        }
        if self.scroll_x && dx != 0 {
            let pos = i32::from(self.pos.x);
            self.pos.x = if dx < 0 && -dx > pos {
                0
            } else {
                let max = self.max_pos_x();
                if max - dx >= pos {
                    (pos + dx) as u16
                } else {
                    max as u16
                }
            };
        }
        self.pos != before
    }
}

#[cfg(test)]
mod tests {
    use super::VirtualCanvas;
    use wavetui_core::GeometryError;

    fn canvas(pad: (u16, u16), viewbox: (u16, u16)) -> VirtualCanvas {
        let mut c = VirtualCanvas::new(pad.0, pad.1).unwrap();
        assert!(c.resize_viewbox(viewbox.0, viewbox.1));
        c
    }

    #[test]
    fn zero_extent_pad_is_rejected() {
        assert_eq!(
            VirtualCanvas::new(0, 10).unwrap_err(),
            GeometryError::EmptyExtent { rows: 0, cols: 10 }
        );
    }

    #[test]
    fn fresh_canvas_is_unscrollable() {
        let c = VirtualCanvas::new(5, 5).unwrap();
        assert!(!c.is_scrollable_y());
        assert!(!c.is_scrollable_x());
    }

    #[test]
    fn shrinking_viewbox_enables_scrolling() {
        let c = canvas((50, 20), (10, 20));
        assert!(c.is_scrollable_y());
        assert!(!c.is_scrollable_x());
    }

    #[test]
    fn zero_extent_resize_keeps_state() {
        let mut c = canvas((50, 20), (10, 20));
        assert!(!c.resize_viewbox(0, 20));
        assert_eq!(c.viewbox().rows, 10);
    }

    #[test]
    fn scroll_down_clamps_at_content_end() {
        // max offset = 50 - 10 - 1 = 39
        let mut c = canvas((50, 20), (10, 20));
        assert!(c.scroll_by(100, 0));
        assert_eq!(c.pos().y, 39);
        assert!(!c.scroll_by(1, 0));
    }

    #[test]
    fn scroll_up_clamps_at_origin() {
        let mut c = canvas((50, 20), (10, 20));
        c.scroll_by(5, 0);
        assert!(c.scroll_by(-100, 0));
        assert_eq!(c.pos().y, 0);
    }

    #[test]
    fn unscrollable_axis_is_a_silent_no_op() {
        let mut c = canvas((50, 20), (10, 20));
        assert!(!c.scroll_by(0, 3));
        assert_eq!(c.pos().x, 0);
    }

    #[test]
    fn upward_boundary_uses_magnitude_test() {
        let mut c = canvas((50, 20), (10, 20));
        c.scroll_by(3, 0);
        // |dy| == pos falls through to the general branch, landing on 0.
        assert!(c.scroll_by(-3, 0));
        assert_eq!(c.pos().y, 0);
        c.scroll_by(3, 0);
        // |dy| > pos takes the short-circuit to 0.
        assert!(c.scroll_by(-4, 0));
        assert_eq!(c.pos().y, 0);
    }

    #[test]
    fn downward_boundary_lands_exactly_on_max() {
        let mut c = canvas((50, 20), (10, 20));
        c.scroll_by(38, 0);
        assert!(c.scroll_by(1, 0));
        assert_eq!(c.pos().y, 39);
    }

    #[test]
    fn extreme_deltas_clamp_without_overflow() {
        let mut c = canvas((50, 20), (10, 20));
        assert!(c.scroll_by(i32::MAX, 0));
        assert_eq!(c.pos().y, 39);
        assert!(c.scroll_by(i32::MIN, 0));
        assert_eq!(c.pos().y, 0);
        // Horizontal axis is unscrollable here: still a silent no-op.
        assert!(!c.scroll_by(i32::MIN, i32::MIN));
        assert_eq!(c.pos().y, 0);
    }

    #[test]
    fn max_offset_reflects_scrollability() {
        use wavetui_core::PadPos;
        let c = canvas((50, 20), (10, 20));
        assert_eq!(c.max_offset(), PadPos::new(39, 0));
        let full = VirtualCanvas::new(5, 5).unwrap();
        assert_eq!(full.max_offset(), PadPos::default());
    }

    #[test]
    fn resize_reclamps_offset() {
        let mut c = canvas((50, 20), (10, 20));
        c.scroll_by(39, 0);
        assert!(c.resize_viewbox(40, 20));
        // new max = 50 - 40 - 1 = 9
        assert_eq!(c.pos().y, 9);
        assert!(c.resize_viewbox(50, 20));
        assert!(!c.is_scrollable_y());
        assert_eq!(c.pos().y, 0);
    }

    #[test]
    fn move_viewbox_leaves_pad_offset_alone() {
        let mut c = canvas((50, 20), (10, 20));
        c.scroll_by(7, 0);
        c.move_viewbox(3, 4);
        assert_eq!((c.viewbox().y, c.viewbox().x), (3, 4));
        assert_eq!(c.pos().y, 7);
    }
}
