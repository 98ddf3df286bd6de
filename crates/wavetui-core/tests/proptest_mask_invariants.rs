//! Property-based invariant tests for the scroll mask encoding.

use proptest::prelude::*;
use wavetui_core::{ScrollMask, WinCtrlMask};

proptest! {
    #[test]
    fn vertical_factor_round_trips(n in 1u8..=3) {
        prop_assert_eq!(ScrollMask::up(n).vertical(), -(n as i8));
        prop_assert_eq!(ScrollMask::down(n).vertical(), n as i8);
        prop_assert_eq!(ScrollMask::up(n).horizontal(), 0);
    }
}

proptest! {
    #[test]
    fn horizontal_factor_round_trips(n in 1u8..=3) {
        prop_assert_eq!(ScrollMask::left(n).horizontal(), -(n as i8));
        prop_assert_eq!(ScrollMask::right(n).horizontal(), n as i8);
        prop_assert_eq!(ScrollMask::left(n).vertical(), 0);
    }
}

proptest! {
    #[test]
    fn axes_never_bleed(v in 1u8..=3, h in 1u8..=3) {
        let mask = ScrollMask::down(v) | ScrollMask::left(h);
        prop_assert_eq!(mask.vertical(), v as i8);
        prop_assert_eq!(mask.horizontal(), -(h as i8));
    }
}

proptest! {
    #[test]
    fn close_bit_survives_any_scroll_bits(bits in 0u16..=0xFF) {
        let scroll = ScrollMask::from_bits_truncate(bits);
        let hit = WinCtrlMask::from(scroll) | WinCtrlMask::CLOSE;
        prop_assert!(hit.is_close());
        prop_assert_eq!(hit.scroll_part(), scroll);
    }
}
