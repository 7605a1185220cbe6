//! Anchored free vectors in the plane and in space.

mod anchored;
mod vector2d;
mod vector3d;

pub use vector2d::Vector2d;
pub use vector3d::Vector3d;

use crate::{
    angle::{Degrees, Radians},
    num::Float,
};

/// Operations shared by free vectors of any dimensionality.
///
/// A free vector is identified by its components alone. Its initial point
/// only anchors it for display, so every operation combining two vectors
/// keeps the initial point of the receiver and ignores that of the operand.
/// No operation mutates its inputs.
pub trait FreeVector<F: Float>: Sized {
    /// Computes the magnitude (length) of the vector.
    fn magnitude(&self) -> F;

    /// Computes the magnitude (length) of the vector. Alias for
    /// [`magnitude`](Self::magnitude).
    fn length(&self) -> F {
        self.magnitude()
    }

    /// Whether the vector has zero magnitude, and thus no direction.
    fn is_zero(&self) -> bool {
        self.magnitude() == F::ZERO
    }

    /// Computes the vector of unit magnitude pointing in the same direction
    /// as this one, or [`None`] if this is a zero vector.
    fn unit_vector(&self) -> Option<Self>;

    /// Creates a new vector with the components scaled by `k`.
    fn multiply(&self, k: F) -> Self;

    /// Creates a new vector by adding the components of `other` to the
    /// components of this vector.
    fn add(&self, other: &Self) -> Self;

    /// Creates a new vector by subtracting the components of `other` from
    /// the components of this vector.
    fn subtract(&self, other: &Self) -> Self;

    /// Computes the dot product of this vector with `other`.
    fn dot_product(&self, other: &Self) -> F;

    /// Computes the cosine of the angle between this vector and the
    /// reference direction of its space, or [`None`] if this is a zero
    /// vector.
    fn reference_cos(&self) -> Option<F>;

    /// Computes the cosine of the angle between this vector and `other`, or
    /// [`None`] if either of them is a zero vector.
    ///
    /// The cosine is the dot product of the two unit vectors, which stays
    /// finite for any finite components.
    fn cos_between(&self, other: &Self) -> Option<F> {
        Some(self.unit_vector()?.dot_product(&other.unit_vector()?))
    }

    /// Computes the cosine of the angle between this vector and `other`, or
    /// between this vector and the reference direction if `other` is
    /// [`None`]. Returns [`None`] if any involved vector is a zero vector.
    fn cos(&self, other: Option<&Self>) -> Option<F> {
        match other {
            Some(other) => self.cos_between(other),
            None => self.reference_cos(),
        }
    }

    /// Computes the unsigned angle, in [0, π], between this vector and
    /// `other` (or the reference direction). Returns [`None`] if any
    /// involved vector is a zero vector.
    fn radians(&self, other: Option<&Self>) -> Option<Radians<F>> {
        self.cos(other).map(Radians::from_cos)
    }

    /// Computes the unsigned angle, in [0°, 180°], between this vector and
    /// `other` (or the reference direction). Returns [`None`] if any
    /// involved vector is a zero vector.
    fn degrees(&self, other: Option<&Self>) -> Option<Degrees<F>> {
        self.radians(other).map(Degrees::from)
    }
}
