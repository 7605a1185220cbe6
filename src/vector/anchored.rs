//! Arithmetic shared by vectors of every dimensionality.

use crate::{
    error::{Result, VectorError},
    num::Float,
};
use nalgebra::{Point, SVector};

/// A displacement anchored at an initial point, with `N` coordinates for
/// both. The concrete vector types wrap this and add the operations that
/// depend on their dimensionality.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AnchoredVector<F: Float, const N: usize> {
    initial_point: Point<F, N>,
    components: SVector<F, N>,
}

impl<F: Float, const N: usize> AnchoredVector<F, N> {
    pub(crate) fn new(initial_point: Point<F, N>, components: SVector<F, N>) -> Self {
        Self {
            initial_point,
            components,
        }
    }

    /// Creates a vector from untyped coordinate slices, which must both
    /// hold exactly `N` values.
    pub(crate) fn from_slices(initial_point: &[F], components: &[F]) -> Result<Self> {
        if initial_point.len() != N || components.len() != N {
            log::debug!(
                "Rejecting {}-dimensional vector with {} initial point and {} component coordinates",
                N,
                initial_point.len(),
                components.len()
            );
            return Err(VectorError::DimensionMismatch {
                expected: N,
                initial_point: initial_point.len(),
                components: components.len(),
            });
        }
        Ok(Self::new(
            Point::from(SVector::from_column_slice(initial_point)),
            SVector::from_column_slice(components),
        ))
    }

    pub(crate) fn initial_point(&self) -> &Point<F, N> {
        &self.initial_point
    }

    pub(crate) fn components(&self) -> &SVector<F, N> {
        &self.components
    }

    pub(crate) fn terminal_point(&self) -> Point<F, N> {
        self.initial_point + self.components
    }

    /// Splits the components into their largest absolute value and the
    /// components divided by it. The divided components have a norm in
    /// [1, √N], so squaring them can neither overflow nor underflow. Returns
    /// [`None`] when every component is zero.
    pub(crate) fn rescaled_components(&self) -> Option<(F, SVector<F, N>)> {
        let scale = self.components.amax();
        if scale == F::ZERO {
            None
        } else {
            Some((scale, self.components / scale))
        }
    }

    /// Computes the Euclidean norm of the components. Zero exactly when every
    /// component is zero, and finite whenever the true norm is representable.
    pub(crate) fn magnitude(&self) -> F {
        self.rescaled_components()
            .map_or(F::ZERO, |(scale, rescaled)| rescaled.norm() * scale)
    }

    /// Creates a vector with the given components, anchored at the same
    /// initial point as this one.
    pub(crate) fn with_components(&self, components: SVector<F, N>) -> Self {
        Self::new(self.initial_point, components)
    }

    pub(crate) fn unit_vector(&self) -> Option<Self> {
        let (_, rescaled) = self.rescaled_components()?;
        Some(self.with_components(rescaled / rescaled.norm()))
    }

    pub(crate) fn multiply(&self, k: F) -> Self {
        self.with_components(self.components * k)
    }

    pub(crate) fn add(&self, other: &Self) -> Self {
        self.with_components(self.components + other.components)
    }

    pub(crate) fn subtract(&self, other: &Self) -> Self {
        self.with_components(self.components - other.components)
    }

    pub(crate) fn dot_product(&self, other: &Self) -> F {
        self.components.dot(&other.components)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra::{point, vector};
    use proptest::prelude::*;

    fn finite_coord() -> impl Strategy<Value = f64> {
        prop::num::f64::POSITIVE
            | prop::num::f64::NEGATIVE
            | prop::num::f64::NORMAL
            | prop::num::f64::SUBNORMAL
            | prop::num::f64::ZERO
    }

    #[test]
    fn creating_from_slices_of_correct_length_works() {
        let v = AnchoredVector::<f64, 3>::from_slices(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(v.initial_point(), &point![1.0, 2.0, 3.0]);
        assert_eq!(v.components(), &vector![4.0, 5.0, 6.0]);
    }

    #[test]
    fn creating_from_slices_with_wrong_initial_point_length_fails() {
        assert_eq!(
            AnchoredVector::<f64, 2>::from_slices(&[1.0, 2.0, 3.0], &[4.0, 5.0]),
            Err(VectorError::DimensionMismatch {
                expected: 2,
                initial_point: 3,
                components: 2
            })
        );
    }

    #[test]
    fn creating_from_slices_with_wrong_component_length_fails() {
        assert_eq!(
            AnchoredVector::<f64, 3>::from_slices(&[1.0, 2.0, 3.0], &[4.0]),
            Err(VectorError::DimensionMismatch {
                expected: 3,
                initial_point: 3,
                components: 1
            })
        );
    }

    #[test]
    fn derived_vectors_keep_the_initial_point() {
        let a = AnchoredVector::new(point![1.0, -1.0], vector![3.0, 4.0]);
        let b = AnchoredVector::new(point![7.0, 7.0], vector![1.0, 1.0]);

        for derived in [
            a.multiply(2.0),
            a.add(&b),
            a.subtract(&b),
            a.unit_vector().unwrap(),
        ] {
            assert_eq!(derived.initial_point(), a.initial_point());
        }
    }

    #[test]
    fn unit_vector_of_zero_vector_is_none() {
        let v = AnchoredVector::<f64, 2>::new(point![1.0, 2.0], vector![0.0, 0.0]);
        assert!(v.unit_vector().is_none());
    }

    #[test]
    fn unit_vector_has_unit_magnitude() {
        let v = AnchoredVector::new(point![0.0, 0.0, 0.0], vector![-2.0, 3.0, 6.0]);
        let unit = v.unit_vector().unwrap();
        assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            unit.components(),
            &vector![-2.0 / 7.0, 3.0 / 7.0, 6.0 / 7.0],
            epsilon = 1e-12
        );
    }

    #[test]
    fn magnitude_of_tiny_components_does_not_underflow() {
        let v = AnchoredVector::new(point![0.0, 0.0], vector![1e-200, 0.0]);
        assert_eq!(v.magnitude(), 1e-200);
        assert_eq!(v.unit_vector().unwrap().components(), &vector![1.0, 0.0]);

        let v = AnchoredVector::new(point![0.0, 0.0, 0.0], vector![3e-170, -4e-170, 0.0]);
        assert_relative_eq!(v.magnitude(), 5e-170, max_relative = 1e-12);
    }

    #[test]
    fn magnitude_of_huge_components_does_not_overflow() {
        let v = AnchoredVector::new(point![0.0, 0.0], vector![1e200, 1e200]);
        assert_relative_eq!(v.magnitude(), 2.0_f64.sqrt() * 1e200, max_relative = 1e-12);

        let unit = v.unit_vector().unwrap();
        assert_abs_diff_eq!(
            unit.components(),
            &vector![0.5_f64.sqrt(), 0.5_f64.sqrt()],
            epsilon = 1e-12
        );
    }

    proptest! {
        #[test]
        fn magnitude_is_zero_only_for_zero_components(
            x in finite_coord(),
            y in finite_coord(),
            z in finite_coord(),
        ) {
            let v = AnchoredVector::new(point![0.0, 0.0, 0.0], vector![x, y, z]);
            prop_assert_eq!(v.magnitude() == 0.0, x == 0.0 && y == 0.0 && z == 0.0);
        }

        #[test]
        fn unit_vector_of_nonzero_vector_has_unit_magnitude(
            x in finite_coord(),
            y in finite_coord(),
        ) {
            let v = AnchoredVector::new(point![0.0, 0.0], vector![x, y]);
            prop_assume!(x != 0.0 || y != 0.0);
            let unit = v.unit_vector().unwrap();
            prop_assert!(unit.components().iter().all(|c| c.is_finite()));
            prop_assert!(approx::relative_eq!(unit.magnitude(), 1.0, max_relative = 1e-12));
        }
    }
}
