//! Crate-local utility macros.

/// Implements a binary operator for all four combinations of owned and
/// borrowed operands, forwarding to the given body, which receives
/// references.
macro_rules! impl_binop {
    (
        $op:ident, $method:ident,
        <$f:ident>, $tl:ty, $tr:ty, $to:ty,
        |$lhs:ident, $rhs:ident| $body:block
    ) => {
        impl<'a, $f: $crate::num::Float> ::std::ops::$op<&'a $tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = rhs;
                $body
            }
        }

        impl<'a, $f: $crate::num::Float> ::std::ops::$op<$tr> for &'a $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                let $lhs = self;
                let $rhs = &rhs;
                $body
            }
        }

        impl<'a, $f: $crate::num::Float> ::std::ops::$op<&'a $tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: &'a $tr) -> Self::Output {
                let $lhs = &self;
                let $rhs = rhs;
                $body
            }
        }

        impl<$f: $crate::num::Float> ::std::ops::$op<$tr> for $tl {
            type Output = $to;

            #[inline]
            fn $method(self, rhs: $tr) -> Self::Output {
                let $lhs = &self;
                let $rhs = &rhs;
                $body
            }
        }
    };
}

/// Implements a unary operator for both an owned and a borrowed operand.
macro_rules! impl_unary_op {
    ($op:ident, $method:ident, <$f:ident>, $t:ty, $to:ty, |$val:ident| $body:block) => {
        impl<$f: $crate::num::Float> ::std::ops::$op for &$t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $val = self;
                $body
            }
        }

        impl<$f: $crate::num::Float> ::std::ops::$op for $t {
            type Output = $to;

            #[inline]
            fn $method(self) -> Self::Output {
                let $val = &self;
                $body
            }
        }
    };
}

/// Implements [`approx::AbsDiffEq`] and [`approx::RelativeEq`] for a vector
/// type by comparing both its initial point and its components.
macro_rules! impl_approx_eq_for_anchored {
    ($t:ident) => {
        impl<F: $crate::num::Float> ::approx::AbsDiffEq for $t<F> {
            type Epsilon = F;

            fn default_epsilon() -> F {
                F::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
                ::approx::AbsDiffEq::abs_diff_eq(
                    self.initial_point(),
                    other.initial_point(),
                    epsilon,
                ) && ::approx::AbsDiffEq::abs_diff_eq(
                    self.components(),
                    other.components(),
                    epsilon,
                )
            }
        }

        impl<F: $crate::num::Float> ::approx::RelativeEq for $t<F> {
            fn default_max_relative() -> F {
                F::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
                ::approx::RelativeEq::relative_eq(
                    self.initial_point(),
                    other.initial_point(),
                    epsilon,
                    max_relative,
                ) && ::approx::RelativeEq::relative_eq(
                    self.components(),
                    other.components(),
                    epsilon,
                    max_relative,
                )
            }
        }
    };
}
