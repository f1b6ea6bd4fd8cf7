//! Strongly typed unit helpers and quantity abstractions.
//!
//! Phasor diagrams mix voltages, currents, and impedances on one canvas, so
//! every drawn quantity carries its unit at runtime. A phasor, its origin,
//! and the reference scale it is normalized by must share a dimension; the
//! check happens where the normalization happens and failures surface as
//! [`PhasorPlotError::IncompatibleUnits`].

use std::fmt;

use crate::errors::PhasorPlotError;
use crate::math::{pol, CScalar, Scalar};

/// Physical dimension tag attached to drawable quantities.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Unit {
    /// Dimensionless (bare plotting coordinates).
    #[default]
    One,
    /// Volts.
    Volt,
    /// Amperes.
    Ampere,
    /// Ohms.
    Ohm,
}

impl Unit {
    /// Display symbol for the unit; empty for dimensionless values.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::One => "",
            Self::Volt => "V",
            Self::Ampere => "A",
            Self::Ohm => "Ω",
        }
    }

    /// True if both units denote the same physical dimension.
    #[must_use]
    pub fn compatible(self, other: Self) -> bool {
        self == other
    }

    /// Checks compatibility, reporting `self` as the expected dimension.
    pub fn check(self, found: Self) -> Result<(), PhasorPlotError> {
        if self.compatible(found) {
            Ok(())
        } else {
            Err(PhasorPlotError::IncompatibleUnits {
                expected: self,
                found,
            })
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "1"),
            _ => write!(f, "{}", self.symbol()),
        }
    }
}

/// A real scalar tagged with a physical unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    value: Scalar,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity with an explicit unit.
    #[must_use]
    pub const fn new(value: Scalar, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a dimensionless quantity.
    #[must_use]
    pub const fn dimensionless(value: Scalar) -> Self {
        Self::new(value, Unit::One)
    }

    /// Creates a voltage in volts.
    #[must_use]
    pub const fn volts(value: Scalar) -> Self {
        Self::new(value, Unit::Volt)
    }

    /// Creates a current in amperes.
    #[must_use]
    pub const fn amps(value: Scalar) -> Self {
        Self::new(value, Unit::Ampere)
    }

    /// Creates an impedance in ohms.
    #[must_use]
    pub const fn ohms(value: Scalar) -> Self {
        Self::new(value, Unit::Ohm)
    }

    /// Unitless magnitude.
    #[must_use]
    pub const fn value(self) -> Scalar {
        self.value
    }

    /// Physical dimension tag.
    #[must_use]
    pub const fn unit(self) -> Unit {
        self.unit
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::One => write!(f, "{}", self.value),
            _ => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}

/// A planar vector representing the magnitude and phase angle of a sinusoidal
/// electrical quantity, tagged with a physical unit.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phasor {
    value: CScalar,
    unit: Unit,
}

impl Phasor {
    /// Creates a phasor from rectangular components.
    #[must_use]
    pub const fn new(re: Scalar, im: Scalar, unit: Unit) -> Self {
        Self {
            value: CScalar::new(re, im),
            unit,
        }
    }

    /// Creates a dimensionless phasor from rectangular components.
    #[must_use]
    pub const fn dimensionless(re: Scalar, im: Scalar) -> Self {
        Self::new(re, im, Unit::One)
    }

    /// Polar constructor: `r·cos(phi) + j·r·sin(phi)`, carrying the unit of
    /// the magnitude. `phi` is in radians.
    #[must_use]
    pub fn from_polar(magnitude: Quantity, phi: Scalar) -> Self {
        Self {
            value: pol(magnitude.value(), phi),
            unit: magnitude.unit(),
        }
    }

    /// Zero phasor of the given dimension.
    #[must_use]
    pub const fn zero(unit: Unit) -> Self {
        Self::new(0.0, 0.0, unit)
    }

    /// Real part (unitless).
    #[must_use]
    pub const fn re(&self) -> Scalar {
        self.value.re
    }

    /// Imaginary part (unitless).
    #[must_use]
    pub const fn im(&self) -> Scalar {
        self.value.im
    }

    /// Underlying complex value with the unit stripped.
    #[must_use]
    pub const fn complex(&self) -> CScalar {
        self.value
    }

    /// Magnitude as a quantity carrying this phasor's unit.
    #[must_use]
    pub fn magnitude(&self) -> Quantity {
        Quantity::new(self.value.norm(), self.unit)
    }

    /// Bare magnitude with the unit stripped.
    #[must_use]
    pub fn norm(&self) -> Scalar {
        self.value.norm()
    }

    /// Phase angle in radians.
    #[must_use]
    pub fn angle(&self) -> Scalar {
        self.value.arg()
    }

    /// Physical dimension tag.
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// Normalizes this phasor by a reference scale, mapping it onto the unit
    /// plotting square. Errors if the dimensions differ.
    pub fn ratio_to(&self, reference: Quantity) -> Result<CScalar, PhasorPlotError> {
        reference.unit().check(self.unit)?;
        Ok(self.value / reference.value())
    }

    /// Sum of two phasors of the same dimension.
    pub fn checked_add(&self, other: &Self) -> Result<Self, PhasorPlotError> {
        self.unit.check(other.unit)?;
        Ok(Self {
            value: self.value + other.value,
            unit: self.unit,
        })
    }

    /// Difference of two phasors of the same dimension.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, PhasorPlotError> {
        self.unit.check(other.unit)?;
        Ok(Self {
            value: self.value - other.value,
            unit: self.unit,
        })
    }
}

impl fmt::Display for Phasor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::One => write!(f, "{}", self.value),
            _ => write!(f, "{} {}", self.value, self.unit.symbol()),
        }
    }
}
