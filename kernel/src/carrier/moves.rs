//! `MoveV1`: the `(axis, layer, direction)` triple for one quarter turn.
//!
//! # Canonical enumeration order
//!
//! Axis `X`, `Y`, `Z`; then layer ascending; then direction `-1`, `+1`.
//! For a side-3 cube this yields 18 moves. The order is part of the
//! reproducibility surface: search tie-breaks fall back to insertion order,
//! which follows this enumeration.
//!
//! # Raw encoding
//!
//! | Field     | Raw type | Valid range       |
//! |-----------|----------|-------------------|
//! | axis      | u8       | `0..3` (X, Y, Z)  |
//! | layer     | u32      | `0..size`         |
//! | direction | i8       | `-1` or `+1`      |

use std::fmt;

/// Rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AxisV1 {
    X,
    Y,
    Z,
}

impl AxisV1 {
    /// All axes in canonical order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Coordinate index of this axis (`X = 0`, `Y = 1`, `Z = 2`).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Convert from a raw axis byte. Returns `None` outside `0..3`.
    #[must_use]
    pub const fn from_index(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::X),
            1 => Some(Self::Y),
            2 => Some(Self::Z),
            _ => None,
        }
    }

    /// Lowercase name used in JSON artifacts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Quarter-turn direction. Positive is counter-clockwise looking down the
/// positive axis toward the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i8)]
pub enum DirectionV1 {
    Negative = -1,
    Positive = 1,
}

impl DirectionV1 {
    /// Both directions in canonical order.
    pub const ALL: [Self; 2] = [Self::Negative, Self::Positive];

    /// Convert from a raw signed direction. Returns `None` unless `-1` or `+1`.
    #[must_use]
    pub const fn from_i8(raw: i8) -> Option<Self> {
        match raw {
            -1 => Some(Self::Negative),
            1 => Some(Self::Positive),
            _ => None,
        }
    }

    #[must_use]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

/// Typed failure for move construction and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Raw axis byte is not 0, 1 or 2.
    AxisOutOfRange { axis: u8 },
    /// Layer index is not below the puzzle size.
    LayerOutOfRange { layer: u32, size: u32 },
    /// Raw direction is not -1 or +1.
    DirectionOutOfRange { direction: i8 },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AxisOutOfRange { axis } => write!(f, "axis {axis} out of range 0..3"),
            Self::LayerOutOfRange { layer, size } => {
                write!(f, "layer {layer} out of range 0..{size}")
            }
            Self::DirectionOutOfRange { direction } => {
                write!(f, "direction {direction} is neither -1 nor +1")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// One elementary move: rotate `layer` about `axis` by a quarter turn.
///
/// Immutable once created. Ordering follows the canonical enumeration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MoveV1 {
    pub axis: AxisV1,
    pub layer: u32,
    pub direction: DirectionV1,
}

impl MoveV1 {
    #[must_use]
    pub const fn new(axis: AxisV1, layer: u32, direction: DirectionV1) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }

    /// Build a move from a raw triple, validating every field against `size`.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] found, checking axis, then layer,
    /// then direction.
    pub fn from_raw(axis: u8, layer: u32, direction: i8, size: u32) -> Result<Self, MoveError> {
        let axis = AxisV1::from_index(axis).ok_or(MoveError::AxisOutOfRange { axis })?;
        let direction =
            DirectionV1::from_i8(direction).ok_or(MoveError::DirectionOutOfRange { direction })?;
        let mv = Self::new(axis, layer, direction);
        mv.validate(size)?;
        Ok(mv)
    }

    /// Check that the layer index fits a puzzle of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::LayerOutOfRange`] if `layer >= size`.
    pub fn validate(&self, size: u32) -> Result<(), MoveError> {
        if self.layer >= size {
            return Err(MoveError::LayerOutOfRange {
                layer: self.layer,
                size,
            });
        }
        Ok(())
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.axis, self.layer, self.direction.reversed())
    }

    /// Every elementary move for a puzzle of side `size`, in canonical order.
    #[must_use]
    pub fn all(size: u32) -> Vec<Self> {
        let mut out = Vec::with_capacity(3 * size as usize * 2);
        for axis in AxisV1::ALL {
            for layer in 0..size {
                for direction in DirectionV1::ALL {
                    out.push(Self::new(axis, layer, direction));
                }
            }
        }
        out
    }

    /// JSON form used in artifacts: `{"axis":"x","direction":-1,"layer":0}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "axis": self.axis.as_str(),
            "direction": self.direction.to_i8(),
            "layer": self.layer,
        })
    }
}

impl fmt::Display for MoveV1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = match self.direction {
            DirectionV1::Negative => '-',
            DirectionV1::Positive => '+',
        };
        let axis = match self.axis {
            AxisV1::X => 'X',
            AxisV1::Y => 'Y',
            AxisV1::Z => 'Z',
        };
        write!(f, "{axis}{}{sign}", self.layer)
    }
}
