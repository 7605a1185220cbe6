//! Angles tagged with their unit.

use crate::num::Float;
use approx::{AbsDiffEq, RelativeEq};

/// An angle that can report its value in either unit. Rotations accept any
/// implementor.
pub trait Angle<F>: Copy {
    /// The value of the angle in degrees.
    fn degrees(self) -> F;

    /// The value of the angle in radians.
    fn radians(self) -> F;
}

/// An angle in degrees.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F: Float> Radians<F> {
    /// The angle in [0, π] whose cosine is `cos`. Values outside [-1, 1],
    /// as produced by rounding, are clamped onto the range first.
    pub fn from_cos(cos: F) -> Self {
        Self(cos.clamp(F::NEG_ONE, F::ONE).acos())
    }
}

impl<F: Float> From<Radians<F>> for Degrees<F> {
    fn from(Radians(rad): Radians<F>) -> Self {
        Self(rad * F::ONE_HUNDRED_EIGHTY * F::FRAC_1_PI())
    }
}

impl<F: Float> From<Degrees<F>> for Radians<F> {
    fn from(Degrees(deg): Degrees<F>) -> Self {
        Self(deg * F::PI() / F::ONE_HUNDRED_EIGHTY)
    }
}

impl<F: Float> Angle<F> for Degrees<F> {
    fn degrees(self) -> F {
        self.0
    }

    fn radians(self) -> F {
        Radians::from(self).0
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    fn degrees(self) -> F {
        Degrees::from(self).0
    }

    fn radians(self) -> F {
        self.0
    }
}

macro_rules! impl_approx_eq_for_angle {
    ($unit:ident) => {
        impl<F: Float> AbsDiffEq for $unit<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                self.0.abs_diff_eq(&other.0, epsilon)
            }
        }

        impl<F: Float> RelativeEq for $unit<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                self.0.relative_eq(&other.0, epsilon, max_relative)
            }
        }
    };
}

impl_approx_eq_for_angle!(Degrees);
impl_approx_eq_for_angle!(Radians);
