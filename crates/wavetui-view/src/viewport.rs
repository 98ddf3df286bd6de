//! Bordered scroll windows: one canvas, up to two scrollbars, one frame.
//!
//! A `Viewport` is what a dialog actually owns. It negotiates its border
//! rectangle against the parent window, growing a margin per overflowing
//! axis to make room for a scrollbar, and from then on keeps the pad
//! offset and the scrollbar thumbs in lockstep for every scroll
//! operation. Geometry negotiation is idempotent: it restarts from the
//! caller-supplied margins on every call, so repeated resize events
//! converge on identical output.

use crate::canvas::VirtualCanvas;
use crate::scrollbar::{BarEdge, ScrollIndicator};
use crate::surface::GridBlit;
use wavetui_core::{GeometryError, Margins, PadPos, Rect, ScrollMask, WinCtrlMask, checked_dim};

/// Per-axis auto-scroll threshold: how close to a viewbox edge a point of
/// interest may get before the view shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoScrollOffset {
    pub y: u16,
    pub x: u16,
}

/// Snapshot of the current view mapping: pad offset plus viewbox extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewProperty {
    pub pos: PadPos,
    pub rows: u16,
    pub cols: u16,
}

/// Observer invoked after every successful geometry negotiation, with the
/// new content rectangle. Hooks run in registration order (FIFO); that
/// order is a contract, not an accident.
pub type ResizeHook = Box<dyn FnMut(Rect)>;

/// A border frame composing one [`VirtualCanvas`] and up to two
/// [`ScrollIndicator`]s.
pub struct Viewport {
    canvas: VirtualCanvas,
    title: Option<String>,
    base_margins: Margins,
    margins: Margins,
    border: Rect,
    content: Rect,
    vbar: Option<ScrollIndicator>,
    hbar: Option<ScrollIndicator>,
    arrows: bool,
    auto_scroll: AutoScrollOffset,
    visible: bool,
    resize_hooks: Vec<ResizeHook>,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("border", &self.border)
            .field("content", &self.content)
            .field("margins", &self.margins)
            .field("canvas", &self.canvas)
            .field("vbar", &self.vbar)
            .field("hbar", &self.hbar)
            .field("resize_hooks", &self.resize_hooks.len())
            .finish()
    }
}

fn desired_rows(pad_rows: u16, m: &Margins) -> u16 {
    checked_dim(usize::from(pad_rows) + usize::from(m.vertical_sum()) + 2)
}

fn desired_cols(pad_cols: u16, m: &Margins) -> u16 {
    checked_dim(usize::from(pad_cols) + usize::from(m.horizontal_sum()) + 2)
}

/// One vertical fitting pass. Runs at most twice per negotiation: once up
/// front, and once more if growing the bottom margin for a horizontal
/// scrollbar pushed the total height back over the parent.
fn vertical_pass(
    pad_rows: u16,
    parent: &Rect,
    m: &mut Margins,
    border: &mut Rect,
    reserved_right: &mut bool,
) {
    let desired = desired_rows(pad_rows, m);
    if desired <= parent.rows {
        border.rows = desired;
    } else {
        if !*reserved_right {
            m.right = m.right.saturating_add(1);
            *reserved_right = true;
        }
        border.rows = parent.rows;
    }
}

impl Viewport {
    /// Instantiate the scroll window: a pad of the given logical extent.
    ///
    /// The viewport has no screen geometry until
    /// [`create_border_win`](Self::create_border_win) runs.
    pub fn create_scroll_win(rows: u16, cols: u16) -> Result<Self, GeometryError> {
        Ok(Self {
            canvas: VirtualCanvas::new(rows, cols)?,
            title: None,
            base_margins: Margins::default(),
            margins: Margins::default(),
            border: Rect::default(),
            content: Rect::default(),
            vbar: None,
            hbar: None,
            arrows: false,
            auto_scroll: AutoScrollOffset::default(),
            visible: false,
            resize_hooks: Vec::new(),
        })
    }

    /// Reserve arrow-control cells on scrollbars built from now on.
    pub fn set_arrow_controls(&mut self, arrows: bool) {
        self.arrows = arrows;
    }

    /// Register a resize observer. Hooks fire after every successful
    /// geometry negotiation, in registration order.
    pub fn add_resize_hook(&mut self, hook: ResizeHook) {
        self.resize_hooks.push(hook);
    }

    /// Negotiate the border rectangle against `parent`.
    ///
    /// The desired size is the pad extent plus margins plus the border
    /// line. When it overflows the parent on an axis, the border clamps
    /// to the parent on that axis and one margin cell is reserved for a
    /// scrollbar (right margin for vertical, bottom for horizontal); the
    /// bottom reservation can push the height back over the limit, so the
    /// vertical pass re-runs once after the horizontal one. The result is
    /// centered in the parent.
    ///
    /// Returns `false` (state untouched, warning logged) when the inputs
    /// cannot produce a usable content box.
    pub fn create_border_win(
        &mut self,
        parent: Rect,
        title: Option<&str>,
        margins: Margins,
    ) -> bool {
        if parent.is_empty() {
            tracing::warn!(?parent, "ignoring empty parent rectangle");
            return false;
        }
        let pad_rows = self.canvas.pad_rows();
        let pad_cols = self.canvas.pad_cols();

        let mut m = margins;
        let mut border = Rect::from_size(desired_rows(pad_rows, &m), desired_cols(pad_cols, &m));
        if !parent.holds(border.rows, border.cols) {
            let mut reserved_right = false;
            let mut reserved_bottom = false;
            vertical_pass(pad_rows, &parent, &mut m, &mut border, &mut reserved_right);
            let desired = desired_cols(pad_cols, &m);
            if desired <= parent.cols {
                border.cols = desired;
            } else {
                if !reserved_bottom {
                    m.bottom = m.bottom.saturating_add(1);
                    reserved_bottom = true;
                }
                border.cols = parent.cols;
                vertical_pass(pad_rows, &parent, &mut m, &mut border, &mut reserved_right);
            }
        }
        let border = border.centered_in(&parent);

        let content = Rect::new(
            border.y.saturating_add(m.top).saturating_add(1),
            border.x.saturating_add(m.left).saturating_add(1),
            border
                .rows
                .saturating_sub(m.vertical_sum())
                .saturating_sub(2),
            border
                .cols
                .saturating_sub(m.horizontal_sum())
                .saturating_sub(2),
        );
        if content.is_empty() {
            tracing::warn!(?parent, ?margins, "margins leave no content box");
            return false;
        }

        self.canvas.resize_viewbox(content.rows, content.cols);
        self.canvas.move_viewbox(content.y, content.x);
        self.base_margins = margins;
        self.margins = m;
        self.border = border;
        self.content = content;
        self.title = title.map(str::to_owned);

        self.vbar = if self.canvas.is_scrollable_y() {
            let track = Rect::new(
                content.y,
                content.x.saturating_add(content.cols),
                content.rows,
                1,
            );
            self.build_bar(BarEdge::Right, track, u32::from(pad_rows))
        } else {
            None
        };
        self.hbar = if self.canvas.is_scrollable_x() {
            let track = Rect::new(
                content.y.saturating_add(content.rows),
                content.x,
                1,
                content.cols,
            );
            self.build_bar(BarEdge::Bottom, track, u32::from(pad_cols))
        } else {
            None
        };
        self.sync_bars();

        let area = self.content;
        for hook in &mut self.resize_hooks {
            hook(area);
        }
        true
    }

    fn build_bar(&self, edge: BarEdge, track: Rect, content: u32) -> Option<ScrollIndicator> {
        match ScrollIndicator::new(edge, track, self.arrows) {
            Ok(mut bar) => {
                bar.set_scroll_length(content);
                Some(bar)
            }
            // Degrades to an unscrollable look; already logged at the source.
            Err(_) => None,
        }
    }

    /// Re-aim both thumbs at the current pad offset.
    ///
    /// The canvas tops out one short of the indicator's last increment
    /// (`pad - viewbox - 1` offsets against `pad - bar` increments), so
    /// the end offset maps to the last increment explicitly; a view
    /// scrolled to the content end always renders a pinned thumb.
    fn sync_bars(&mut self) {
        let pos = self.canvas.pos();
        let max = self.canvas.max_offset();
        if let Some(bar) = &mut self.vbar {
            bar.set_position(if pos.y > 0 && pos.y == max.y {
                bar.total_increments()
            } else {
                u32::from(pos.y)
            });
        }
        if let Some(bar) = &mut self.hbar {
            bar.set_position(if pos.x > 0 && pos.x == max.x {
                bar.total_increments()
            } else {
                u32::from(pos.x)
            });
        }
    }

    fn scroll_and_sync(&mut self, dy: i32, dx: i32) -> bool {
        let moved = self.canvas.scroll_by(dy, dx);
        if moved {
            self.sync_bars();
        }
        moved
    }

    /// Scroll up by `rows`.
    pub fn scroll_up(&mut self, rows: u16) -> bool {
        self.scroll_and_sync(-i32::from(rows), 0)
    }

    /// Scroll down by `rows`.
    pub fn scroll_down(&mut self, rows: u16) -> bool {
        self.scroll_and_sync(i32::from(rows), 0)
    }

    /// Scroll left by `cols`.
    pub fn scroll_left(&mut self, cols: u16) -> bool {
        self.scroll_and_sync(0, -i32::from(cols))
    }

    /// Scroll right by `cols`.
    pub fn scroll_right(&mut self, cols: u16) -> bool {
        self.scroll_and_sync(0, i32::from(cols))
    }

    /// Jump both axes to the origin.
    pub fn scroll_home(&mut self) -> bool {
        let (rows, cols) = (self.canvas.pad_rows(), self.canvas.pad_cols());
        self.scroll_and_sync(-i32::from(rows), -i32::from(cols))
    }

    /// Jump the vertical axis to the top of the pad.
    pub fn scroll_top(&mut self) -> bool {
        self.scroll_and_sync(-i32::from(self.canvas.pad_rows()), 0)
    }

    /// Jump the vertical axis to the bottom of the pad.
    pub fn scroll_bottom(&mut self) -> bool {
        self.scroll_and_sync(i32::from(self.canvas.pad_rows()), 0)
    }

    /// Jump the horizontal axis to the left edge of the pad.
    pub fn scroll_left_edge(&mut self) -> bool {
        self.scroll_and_sync(0, -i32::from(self.canvas.pad_cols()))
    }

    /// Jump the horizontal axis to the right edge of the pad.
    pub fn scroll_right_edge(&mut self) -> bool {
        self.scroll_and_sync(0, i32::from(self.canvas.pad_cols()))
    }

    /// Apply a whole encoded scroll intent.
    pub fn scroll(&mut self, mask: ScrollMask) -> bool {
        if mask.is_to_home() {
            return self.scroll_home();
        }
        if mask.is_to_end() {
            let (rows, cols) = (self.canvas.pad_rows(), self.canvas.pad_cols());
            return self.scroll_and_sync(i32::from(rows), i32::from(cols));
        }
        let (dy, dx) = (mask.vertical(), mask.horizontal());
        if dy == 0 && dx == 0 {
            return false;
        }
        self.scroll_and_sync(i32::from(dy), i32::from(dx))
    }

    /// Shift the view just enough to keep a pad point inside the
    /// configured edge thresholds.
    ///
    /// Each axis is handled independently: a point within its threshold
    /// of the near edge pulls the view back, one past the far edge pushes
    /// it forward. The deltas go through the ordinary clamped scroll, so
    /// the view never overshoots the content bounds.
    pub fn auto_scroll(&mut self, y: u16, x: u16) -> bool {
        let slice = self.canvas.visible_slice();
        let mut dy = 0i32;
        let mut dx = 0i32;

        let top = i32::from(slice.y);
        let bottom = top + i32::from(slice.rows) - 1;
        let off = i32::from(self.auto_scroll.y);
        let p = i32::from(y);
        if p - off < top {
            dy = (p - off) - top;
        } else if p + off > bottom {
            dy = (p + off) - bottom;
        }

        let left = i32::from(slice.x);
        let right = left + i32::from(slice.cols) - 1;
        let off = i32::from(self.auto_scroll.x);
        let p = i32::from(x);
        if p - off < left {
            dx = (p - off) - left;
        } else if p + off > right {
            dx = (p + off) - right;
        }

        if dy == 0 && dx == 0 {
            return false;
        }
        self.scroll_and_sync(dy, dx)
    }

    /// Configure the auto-scroll edge thresholds.
    pub fn set_auto_scroll_offset(&mut self, y: u16, x: u16) {
        self.auto_scroll = AutoScrollOffset { y, x };
    }

    /// Resolve a mouse position against the window controls.
    pub fn hit_test(&self, y: u16, x: u16) -> Option<WinCtrlMask> {
        if self.close_region().contains(y, x) {
            return Some(WinCtrlMask::CLOSE);
        }
        if let Some(mask) = self.vbar.as_ref().and_then(|bar| bar.hit_arrow(y, x)) {
            return Some(mask.into());
        }
        if let Some(mask) = self.hbar.as_ref().and_then(|bar| bar.hit_arrow(y, x)) {
            return Some(mask.into());
        }
        None
    }

    /// The `[■]` close control: three cells on the top border line,
    /// ending one cell short of the corner.
    fn close_region(&self) -> Rect {
        if self.border.is_empty() {
            return Rect::default();
        }
        Rect::new(self.border.y, self.border.right().saturating_sub(4), 1, 3)
    }

    #[inline]
    pub fn is_scrollable_y(&self) -> bool {
        self.canvas.is_scrollable_y()
    }

    #[inline]
    pub fn is_scrollable_x(&self) -> bool {
        self.canvas.is_scrollable_x()
    }

    /// Current pad offset and viewbox extent.
    pub fn view_property(&self) -> ViewProperty {
        let viewbox = self.canvas.viewbox();
        ViewProperty {
            pos: self.canvas.pos(),
            rows: viewbox.rows,
            cols: viewbox.cols,
        }
    }

    /// The negotiated border rectangle.
    #[inline]
    pub fn border(&self) -> Rect {
        self.border
    }

    /// The inner content box.
    #[inline]
    pub fn content(&self) -> Rect {
        self.content
    }

    /// Effective margins after scrollbar reservations.
    #[inline]
    pub fn margins(&self) -> Margins {
        self.margins
    }

    #[inline]
    pub fn canvas(&self) -> &VirtualCanvas {
        &self.canvas
    }

    #[inline]
    pub fn vbar(&self) -> Option<&ScrollIndicator> {
        self.vbar.as_ref()
    }

    #[inline]
    pub fn hbar(&self) -> Option<&ScrollIndicator> {
        self.hbar.as_ref()
    }

    /// The border title, clipped to fit inside the top border line.
    pub fn title(&self) -> Option<&str> {
        let max = usize::from(self.border.cols.saturating_sub(4));
        self.title.as_deref().map(|t| match t.char_indices().nth(max) {
            Some((i, _)) => &t[..i],
            None => t,
        })
    }

    fn paint(&self, surface: &mut impl GridBlit) {
        surface.paint_border(self.border, self.title());
        surface.blit_pad(self.canvas.visible_slice(), self.content);
        if let Some(bar) = &self.vbar {
            surface.paint_track(&bar.track_geometry());
        }
        if let Some(bar) = &self.hbar {
            surface.paint_track(&bar.track_geometry());
        }
    }

    /// Mark the viewport visible and paint it.
    pub fn show(&mut self, surface: &mut impl GridBlit) {
        self.visible = true;
        self.paint(surface);
    }

    /// Erase the viewport from the screen.
    pub fn hide(&mut self, surface: &mut impl GridBlit) {
        if self.visible {
            surface.erase(self.border);
        }
        self.visible = false;
    }

    /// Repaint if currently visible.
    pub fn refresh_view(&self, surface: &mut impl GridBlit) {
        if self.visible {
            self.paint(surface);
        }
    }
}
