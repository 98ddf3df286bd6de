//! Bit-packed scroll and window-control descriptors.
//!
//! The input layer does not call scroll methods directly; it encodes an
//! intent into a [`ScrollMask`] and hands it across the dialog boundary.
//! Mouse hit-tests answer with a [`WinCtrlMask`], which carries the same
//! scroll bits plus one dedicated close-control bit.
//!
//! Layout (low byte): bits 0-1 hold the upward factor, bits 2-3 the downward
//! factor, bits 4-5 the leftward factor, bits 6-7 the rightward factor. Each
//! factor is 0-3 rows/columns per step. Saturating both fields of an axis
//! pair is the jump encoding: `TO_HOME` is `UP | LEFT`, `TO_END` is
//! `DOWN | RIGHT`.

use bitflags::bitflags;

const FACTOR_BITS: u16 = 0b11;
const UP_SHIFT: u16 = 0;
const DOWN_SHIFT: u16 = 2;
const LEFT_SHIFT: u16 = 4;
const RIGHT_SHIFT: u16 = 6;

/// Largest per-step scroll factor a mask can carry.
pub const MAX_SCROLL_FACTOR: u8 = 3;

bitflags! {
    /// A scroll intent: per-direction factors packed into one byte.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ScrollMask: u16 {
        /// Upward factor field.
        const UP    = FACTOR_BITS << UP_SHIFT;
        /// Downward factor field.
        const DOWN  = FACTOR_BITS << DOWN_SHIFT;
        /// Leftward factor field.
        const LEFT  = FACTOR_BITS << LEFT_SHIFT;
        /// Rightward factor field.
        const RIGHT = FACTOR_BITS << RIGHT_SHIFT;
        /// Jump to the origin on both axes.
        const TO_HOME = Self::UP.bits() | Self::LEFT.bits();
        /// Jump to the far end on both axes.
        const TO_END = Self::DOWN.bits() | Self::RIGHT.bits();
    }
}

impl ScrollMask {
    /// Scroll up by `factor` rows (clamped to [`MAX_SCROLL_FACTOR`]).
    #[must_use]
    pub fn up(factor: u8) -> Self {
        Self::field(factor, UP_SHIFT)
    }

    /// Scroll down by `factor` rows.
    #[must_use]
    pub fn down(factor: u8) -> Self {
        Self::field(factor, DOWN_SHIFT)
    }

    /// Scroll left by `factor` columns.
    #[must_use]
    pub fn left(factor: u8) -> Self {
        Self::field(factor, LEFT_SHIFT)
    }

    /// Scroll right by `factor` columns.
    #[must_use]
    pub fn right(factor: u8) -> Self {
        Self::field(factor, RIGHT_SHIFT)
    }

    fn field(factor: u8, shift: u16) -> Self {
        let clamped = u16::from(factor.clamp(1, MAX_SCROLL_FACTOR));
        Self::from_bits_retain(clamped << shift)
    }

    /// Signed vertical factor: negative scrolls up, positive scrolls down.
    ///
    /// When both fields are set (the jump encodings) the upward field wins,
    /// so `TO_HOME` reads as `-3` and plain factors read unchanged.
    #[must_use]
    pub fn vertical(&self) -> i8 {
        let up = (self.bits() >> UP_SHIFT) & FACTOR_BITS;
        if up != 0 {
            return -(up as i8);
        }
        ((self.bits() >> DOWN_SHIFT) & FACTOR_BITS) as i8
    }

    /// Signed horizontal factor: negative scrolls left, positive right.
    #[must_use]
    pub fn horizontal(&self) -> i8 {
        let left = (self.bits() >> LEFT_SHIFT) & FACTOR_BITS;
        if left != 0 {
            return -(left as i8);
        }
        ((self.bits() >> RIGHT_SHIFT) & FACTOR_BITS) as i8
    }

    /// True for the saturated jump-to-origin encoding.
    #[must_use]
    pub fn is_to_home(&self) -> bool {
        self.contains(Self::TO_HOME)
    }

    /// True for the saturated jump-to-end encoding.
    #[must_use]
    pub fn is_to_end(&self) -> bool {
        self.contains(Self::TO_END)
    }
}

bitflags! {
    /// A mouse hit-test result: scroll bits plus the border close control.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct WinCtrlMask: u16 {
        const UP      = ScrollMask::UP.bits();
        const DOWN    = ScrollMask::DOWN.bits();
        const LEFT    = ScrollMask::LEFT.bits();
        const RIGHT   = ScrollMask::RIGHT.bits();
        const TO_HOME = ScrollMask::TO_HOME.bits();
        const TO_END  = ScrollMask::TO_END.bits();
        /// The border's close control was hit.
        const CLOSE   = 1 << 8;
    }
}

impl WinCtrlMask {
    /// The scroll portion of this mask, with the close bit stripped.
    #[must_use]
    pub fn scroll_part(&self) -> ScrollMask {
        ScrollMask::from_bits_truncate(self.bits())
    }

    /// True if the close control was hit.
    #[must_use]
    pub fn is_close(&self) -> bool {
        self.contains(Self::CLOSE)
    }
}

impl From<ScrollMask> for WinCtrlMask {
    fn from(mask: ScrollMask) -> Self {
        Self::from_bits_retain(mask.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_SCROLL_FACTOR, ScrollMask, WinCtrlMask};

    #[test]
    fn factors_round_trip() {
        for n in 1..=MAX_SCROLL_FACTOR {
            assert_eq!(ScrollMask::up(n).vertical(), -(n as i8));
            assert_eq!(ScrollMask::down(n).vertical(), n as i8);
            assert_eq!(ScrollMask::left(n).horizontal(), -(n as i8));
            assert_eq!(ScrollMask::right(n).horizontal(), n as i8);
        }
    }

    #[test]
    fn factor_clamps_to_field_width() {
        assert_eq!(ScrollMask::up(0).vertical(), -1);
        assert_eq!(ScrollMask::down(200).vertical(), 3);
    }

    #[test]
    fn axes_pack_independently() {
        let mask = ScrollMask::up(2) | ScrollMask::right(3);
        assert_eq!(mask.vertical(), -2);
        assert_eq!(mask.horizontal(), 3);
    }

    #[test]
    fn jump_encodings() {
        assert!(ScrollMask::TO_HOME.is_to_home());
        assert!(ScrollMask::TO_END.is_to_end());
        assert!(!ScrollMask::up(3).is_to_home());
        assert!(!(ScrollMask::down(3) | ScrollMask::left(3)).is_to_end());
    }

    #[test]
    fn ctrl_mask_carries_scroll_bits_past_close() {
        let hit = WinCtrlMask::from(ScrollMask::down(1)) | WinCtrlMask::CLOSE;
        assert!(hit.is_close());
        assert_eq!(hit.scroll_part(), ScrollMask::down(1));
        assert!(!WinCtrlMask::from(ScrollMask::up(1)).is_close());
    }
}
