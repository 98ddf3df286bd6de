//! Cell-grid geometry.
//!
//! Terminal coordinates are 0-indexed with the origin at the top-left,
//! expressed row-first (`y` before `x`) to match how the dialogs address
//! the screen.

/// A rectangle of screen cells used for layout bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top edge (inclusive).
    pub y: u16,
    /// Left edge (inclusive).
    pub x: u16,
    /// Height in rows.
    pub rows: u16,
    /// Width in columns.
    pub cols: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(y: u16, x: u16, rows: u16, cols: u16) -> Self {
        Self { y, x, rows, cols }
    }

    /// Create a rectangle at the origin with the given extent.
    #[inline]
    pub const fn from_size(rows: u16, cols: u16) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.rows)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.cols)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Check if a cell lies inside the rectangle.
    #[inline]
    pub const fn contains(&self, y: u16, x: u16) -> bool {
        y >= self.y && y < self.bottom() && x >= self.x && x < self.right()
    }

    /// Check if `other` fits inside this rectangle's extent on both axes.
    #[inline]
    pub const fn holds(&self, rows: u16, cols: u16) -> bool {
        rows <= self.rows && cols <= self.cols
    }

    /// The rectangle left after shrinking every edge by the given margins.
    pub fn inner(&self, margins: Margins) -> Rect {
        Rect {
            y: self.y.saturating_add(margins.top),
            x: self.x.saturating_add(margins.left),
            rows: self
                .rows
                .saturating_sub(margins.top)
                .saturating_sub(margins.bottom),
            cols: self
                .cols
                .saturating_sub(margins.left)
                .saturating_sub(margins.right),
        }
    }

    /// Reposition this rectangle so it is centered inside `parent`.
    ///
    /// The extent is kept; only `y`/`x` move. A rectangle larger than the
    /// parent stays pinned to the parent's origin on that axis.
    pub fn centered_in(&self, parent: &Rect) -> Rect {
        Rect {
            y: parent.y + parent.rows.saturating_sub(self.rows) / 2,
            x: parent.x + parent.cols.saturating_sub(self.cols) / 2,
            rows: self.rows,
            cols: self.cols,
        }
    }
}

/// A position inside a pad (logical content buffer), row-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadPos {
    pub y: u16,
    pub x: u16,
}

impl PadPos {
    #[inline]
    pub const fn new(y: u16, x: u16) -> Self {
        Self { y, x }
    }
}

/// Margins between a border frame and its content box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Margins {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Margins {
    /// Create margins with specific values, clockwise from the top.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Equal margins on every side.
    pub const fn all(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<u16> for Margins {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

impl From<(u16, u16, u16, u16)> for Margins {
    fn from((top, right, bottom, left): (u16, u16, u16, u16)) -> Self {
        Self::new(top, right, bottom, left)
    }
}
