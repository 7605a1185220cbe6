//! Free vectors in the plane.

use super::{FreeVector, anchored::AnchoredVector};
use crate::{angle::Angle, error::Result, num::Float};
use nalgebra::{Point2, Vector2};

/// An immutable 2-dimensional free vector anchored at an initial point.
///
/// The reference direction for angles is the positive x-axis.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector2d<F: Float = f64> {
    inner: AnchoredVector<F, 2>,
}

impl<F: Float> Vector2d<F> {
    /// Creates a new vector with the given components, anchored at the given
    /// initial point.
    pub fn new(initial_point: Point2<F>, components: Vector2<F>) -> Self {
        Self::wrap(AnchoredVector::new(initial_point, components))
    }

    /// Creates a new vector from untyped coordinate slices.
    ///
    /// # Errors
    /// Returns an error if either slice does not hold exactly two values.
    pub fn from_slices(initial_point: &[F], components: &[F]) -> Result<Self> {
        AnchoredVector::from_slices(initial_point, components).map(Self::wrap)
    }

    /// The point the vector is anchored at.
    pub fn initial_point(&self) -> &Point2<F> {
        self.inner.initial_point()
    }

    /// The displacement the vector represents.
    pub fn components(&self) -> &Vector2<F> {
        self.inner.components()
    }

    /// The point the vector ends at when drawn from its initial point.
    pub fn terminal_point(&self) -> Point2<F> {
        self.inner.terminal_point()
    }

    /// Creates a new vector by rotating this one counterclockwise about its
    /// initial point by the given angle.
    ///
    /// The vector is rebuilt from its magnitude and its signed direction
    /// angle, so the result has the same magnitude for any angle. A zero
    /// vector rotates to itself.
    pub fn rotated<A: Angle<F>>(&self, angle: A) -> Self {
        let Some((scale, rescaled)) = self.inner.rescaled_components() else {
            log::trace!("Rotating zero vector in the plane, leaving it unchanged");
            return *self;
        };
        let magnitude = rescaled.norm();
        let direction = rescaled.y.atan2(rescaled.x) + angle.radians();
        self.with_components(
            Vector2::new(magnitude * direction.cos(), magnitude * direction.sin()) * scale,
        )
    }

    fn with_components(&self, components: Vector2<F>) -> Self {
        Self::wrap(self.inner.with_components(components))
    }

    fn wrap(inner: AnchoredVector<F, 2>) -> Self {
        Self { inner }
    }
}

impl<F: Float> FreeVector<F> for Vector2d<F> {
    fn magnitude(&self) -> F {
        self.inner.magnitude()
    }

    fn unit_vector(&self) -> Option<Self> {
        self.inner.unit_vector().map(Self::wrap)
    }

    fn multiply(&self, k: F) -> Self {
        Self::wrap(self.inner.multiply(k))
    }

    fn add(&self, other: &Self) -> Self {
        Self::wrap(self.inner.add(&other.inner))
    }

    fn subtract(&self, other: &Self) -> Self {
        Self::wrap(self.inner.subtract(&other.inner))
    }

    fn dot_product(&self, other: &Self) -> F {
        self.inner.dot_product(&other.inner)
    }

    /// Computes the cosine of the angle from the positive x-axis, which is
    /// the x-component of the unit vector.
    fn reference_cos(&self) -> Option<F> {
        self.unit_vector().map(|unit| unit.components().x)
    }
}

impl_binop!(Add, add, <F>, Vector2d<F>, Vector2d<F>, Vector2d<F>, |a, b| {
    FreeVector::add(a, b)
});

impl_binop!(Sub, sub, <F>, Vector2d<F>, Vector2d<F>, Vector2d<F>, |a, b| {
    a.subtract(b)
});

impl_binop!(Mul, mul, <F>, Vector2d<F>, F, Vector2d<F>, |a, k| {
    a.multiply(*k)
});

impl_unary_op!(Neg, neg, <F>, Vector2d<F>, Vector2d<F>, |val| {
    val.multiply(F::NEG_ONE)
});

impl_approx_eq_for_anchored!(Vector2d);
