//! Free vectors in space.

use super::{FreeVector, anchored::AnchoredVector};
use crate::{
    angle::Angle,
    error::{Result, VectorError},
    num::Float,
};
use nalgebra::{Point3, Vector3};

/// An immutable 3-dimensional free vector anchored at an initial point.
///
/// The reference direction for angles is the vector's own projection onto
/// the xy-plane, so the reference angle is the elevation above (or below)
/// that plane rather than the angle from a coordinate axis.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector3d<F: Float = f64> {
    inner: AnchoredVector<F, 3>,
}

impl<F: Float> Vector3d<F> {
    /// Creates a new vector with the given components, anchored at the given
    /// initial point.
    pub fn new(initial_point: Point3<F>, components: Vector3<F>) -> Self {
        Self::wrap(AnchoredVector::new(initial_point, components))
    }

    /// Creates a new vector from untyped coordinate slices.
    ///
    /// # Errors
    /// Returns an error if either slice does not hold exactly three values.
    pub fn from_slices(initial_point: &[F], components: &[F]) -> Result<Self> {
        AnchoredVector::from_slices(initial_point, components).map(Self::wrap)
    }

    /// The point the vector is anchored at.
    pub fn initial_point(&self) -> &Point3<F> {
        self.inner.initial_point()
    }

    /// The displacement the vector represents.
    pub fn components(&self) -> &Vector3<F> {
        self.inner.components()
    }

    /// The point the vector ends at when drawn from its initial point.
    pub fn terminal_point(&self) -> Point3<F> {
        self.inner.terminal_point()
    }

    /// Computes the cross product of this vector with `other`, anchored at
    /// the initial point of this vector.
    pub fn cross_product(&self, other: &Self) -> Self {
        Self::wrap(
            self.inner
                .with_components(self.components().cross(other.components())),
        )
    }

    /// Creates a new vector by rotating this one about the direction of
    /// `axis` by the given angle, counterclockwise when looking down the axis
    /// towards its origin. The initial point of `axis` plays no role, and the
    /// result keeps the initial point of this vector.
    ///
    /// With `u` the unit vector along the axis and `θ` the angle, this
    /// evaluates Rodrigues' rotation formula
    /// `v cos(θ) + u (1 - cos(θ)) (v · u) + (u × v) sin(θ)`.
    ///
    /// The formula is applied to this vector divided by its largest absolute
    /// component, and the result is scaled back, so intermediate products
    /// stay in range for any finite input. A zero vector rotates to itself
    /// about any axis.
    ///
    /// # Errors
    /// Returns [`VectorError::DegenerateAxis`] if this vector is non-zero and
    /// `axis` has zero magnitude.
    pub fn rotated_about<A: Angle<F>>(&self, axis: &Self, angle: A) -> Result<Self> {
        let Some((scale, rescaled)) = self.inner.rescaled_components() else {
            log::trace!("Rotating zero vector in space, leaving it unchanged");
            return Ok(*self);
        };
        let v = Self::wrap(self.inner.with_components(rescaled));

        let Some(u) = axis.unit_vector() else {
            log::debug!("Rejecting rotation of {self:?} about zero axis");
            return Err(VectorError::DegenerateAxis);
        };

        let radians = angle.radians();
        let (sin, cos) = (radians.sin(), radians.cos());

        let parallel_scale = (F::ONE - cos) * v.dot_product(&u);

        // The sum takes the initial point of its first term, this vector
        let rotated = v
            .multiply(cos)
            .add(&u.multiply(parallel_scale))
            .add(&u.cross_product(&v).multiply(sin));

        Ok(rotated.multiply(scale))
    }

    fn wrap(inner: AnchoredVector<F, 3>) -> Self {
        Self { inner }
    }
}

impl<F: Float> FreeVector<F> for Vector3d<F> {
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

    /// Computes the cosine of the angle between the vector and its projection
    /// onto the xy-plane, which is the length of the projection of the unit
    /// vector.
    fn reference_cos(&self) -> Option<F> {
        let unit = self.unit_vector()?;
        Some(unit.components().x.hypot(unit.components().y))
    }
}

impl_binop!(Add, add, <F>, Vector3d<F>, Vector3d<F>, Vector3d<F>, |a, b| {
    FreeVector::add(a, b)
});

impl_binop!(Sub, sub, <F>, Vector3d<F>, Vector3d<F>, Vector3d<F>, |a, b| {
    a.subtract(b)
});

impl_binop!(Mul, mul, <F>, Vector3d<F>, F, Vector3d<F>, |a, k| {
    a.multiply(*k)
});

impl_unary_op!(Neg, neg, <F>, Vector3d<F>, Vector3d<F>, |val| {
    val.multiply(F::NEG_ONE)
});

impl_approx_eq_for_anchored!(Vector3d);
