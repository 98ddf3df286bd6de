//! Geometry error taxonomy.
//!
//! Only two things can actually go wrong in this subsystem: a caller asks
//! for a window with a zero or negative extent, or a logical size escapes
//! the u16 cell grid during margin/position math. Over-scroll is never an
//! error anywhere; it is clamped at the call site.

use thiserror::Error;

/// Fallback width substituted when a dimension escapes the cell grid.
pub const FALLBACK_COLS: u16 = 80;

/// Errors raised by geometry negotiation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// A pad, viewbox, or scrollbar track with no area.
    #[error("extent must be positive, got {rows}x{cols}")]
    EmptyExtent { rows: u16, cols: u16 },

    /// A logical dimension too large for the u16 cell grid.
    #[error("dimension {value} exceeds the addressable cell range")]
    RangeOverflow { value: usize },
}

/// Narrow a logical dimension onto the cell grid.
///
/// A value that does not fit u16 is a caller bug upstream of us; it is
/// logged as fatal and replaced with [`FALLBACK_COLS`] so layout can still
/// produce a usable window instead of propagating a bogus cast.
#[must_use]
pub fn checked_dim(value: usize) -> u16 {
    match u16::try_from(value) {
        Ok(v) => v,
        Err(_) => {
            tracing::error!(value, fallback = FALLBACK_COLS, "dimension exceeds cell range");
            FALLBACK_COLS
        }
    }
}
