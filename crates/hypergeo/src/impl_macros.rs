macro_rules! impl_forward_bin_ops_to_ref {
    () => {};

    (
        impl $trait:ident for $type:ty { fn $func:ident() }
        $($remainder:tt)*
    ) => {
        impl<'a> std::ops::$trait<&'a $type> for $type {
            type Output = $type;

            fn $func(self, rhs: &'a $type) -> $type {
                std::ops::$trait::$func(self, *rhs)
            }
        }
        impl<'a> std::ops::$trait<$type> for &'a $type {
            type Output = $type;

            fn $func(self, rhs: $type) -> $type {
                std::ops::$trait::$func(*self, rhs)
            }
        }
        impl<'a, 'b> std::ops::$trait<&'b $type> for &'a $type {
            type Output = $type;

            fn $func(self, rhs: &'b $type) -> $type {
                std::ops::$trait::$func(*self, *rhs)
            }
        }
        impl_forward_bin_ops_to_ref! { $($remainder)* }
    };
}

/// Length of a vector from its components, chaining `hypot` so that
/// intermediate squares never overflow.
macro_rules! hypot_chain {
    ($last:expr) => {
        $crate::Float::abs($last)
    };
    ($first:expr, $($rest:expr),+) => {
        $crate::Float::hypot($first, hypot_chain!($($rest),+))
    };
}

macro_rules! sum_chain {
    ($first:expr $(, $rest:expr)*) => {
        $first $(+ $rest)*
    };
}

/// Implements arithmetic, conversions, formatting, and the [`crate::Vector`]
/// trait for a fixed-size vector struct.
macro_rules! impl_vector {
    ($type:ident, $ndim:literal, { $($i:literal => $field:ident),+ $(,)? }) => {
        impl $crate::Vector for $type {
            const NDIM: u8 = $ndim;
            const ZERO: Self = Self { $($field: 0.0),+ };

            fn get(&self, axis: u8) -> $crate::Float {
                match axis {
                    $($i => self.$field,)+
                    _ => 0.0,
                }
            }
            fn from_fn(mut f: impl FnMut(u8) -> $crate::Float) -> Self {
                Self { $($field: f($i)),+ }
            }

            fn dot(&self, rhs: &Self) -> $crate::Float {
                sum_chain!($(self.$field * rhs.$field),+)
            }
            fn norm(&self) -> $crate::Float {
                hypot_chain!($(self.$field),+)
            }
        }

        impl std::ops::Add for $type {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }
        impl std::ops::Sub for $type {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }
        impl_forward_bin_ops_to_ref! {
            impl Add for $type { fn add() }
            impl Sub for $type { fn sub() }
        }

        impl std::ops::Neg for $type {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }
        impl std::ops::Neg for &'_ $type {
            type Output = $type;

            fn neg(self) -> Self::Output {
                -*self
            }
        }

        impl std::ops::Mul<$crate::Float> for $type {
            type Output = Self;

            fn mul(self, rhs: $crate::Float) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }
        impl std::ops::Mul<$type> for $crate::Float {
            type Output = $type;

            fn mul(self, rhs: $type) -> Self::Output {
                rhs * self
            }
        }
        impl std::ops::Div<$crate::Float> for $type {
            type Output = Self;

            fn div(self, rhs: $crate::Float) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl std::ops::AddAssign for $type {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field += rhs.$field;)+
            }
        }
        impl std::ops::SubAssign for $type {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field -= rhs.$field;)+
            }
        }
        impl std::ops::MulAssign<$crate::Float> for $type {
            fn mul_assign(&mut self, rhs: $crate::Float) {
                $(self.$field *= rhs;)+
            }
        }
        impl std::ops::DivAssign<$crate::Float> for $type {
            fn div_assign(&mut self, rhs: $crate::Float) {
                $(self.$field /= rhs;)+
            }
        }

        impl std::ops::Index<u8> for $type {
            type Output = $crate::Float;

            fn index(&self, index: u8) -> &Self::Output {
                match index {
                    $($i => &self.$field,)+
                    _ => panic!(
                        "vector index out of bounds: the dimensionality is {} but the index is {index}",
                        $ndim,
                    ),
                }
            }
        }
        impl std::ops::IndexMut<u8> for $type {
            fn index_mut(&mut self, index: u8) -> &mut Self::Output {
                match index {
                    $($i => &mut self.$field,)+
                    _ => panic!(
                        "vector index out of bounds: the dimensionality is {} but the index is {index}",
                        $ndim,
                    ),
                }
            }
        }

        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(<Self as $crate::Vector>::ZERO, |acc, v| acc + v)
            }
        }
        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a $type>>(iter: I) -> Self {
                iter.copied().sum()
            }
        }

        impl num_traits::Zero for $type {
            fn zero() -> Self {
                <Self as $crate::Vector>::ZERO
            }
            fn is_zero(&self) -> bool {
                $crate::Vector::is_zero(self)
            }
        }

        impl approx::AbsDiffEq for $type {
            type Epsilon = $crate::Float;

            fn default_epsilon() -> Self::Epsilon {
                $crate::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $(<$crate::Float as approx::AbsDiffEq>::abs_diff_eq(&self.$field, &other.$field, epsilon))&&+
            }
        }
        impl approx::RelativeEq for $type {
            fn default_max_relative() -> Self::Epsilon {
                <$crate::Float as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $(<$crate::Float as approx::RelativeEq>::relative_eq(
                    &self.$field,
                    &other.$field,
                    epsilon,
                    max_relative,
                ))&&+
            }
        }

        impl From<[$crate::Float; $ndim]> for $type {
            fn from([$($field),+]: [$crate::Float; $ndim]) -> Self {
                Self { $($field),+ }
            }
        }
        impl From<$type> for [$crate::Float; $ndim] {
            fn from(v: $type) -> Self {
                [$(v.$field),+]
            }
        }
        impl TryFrom<&[$crate::Float]> for $type {
            type Error = $crate::error::DimensionMismatch;

            fn try_from(components: &[$crate::Float]) -> Result<Self, Self::Error> {
                match components {
                    [$($field),+] => Ok(Self { $($field: *$field),+ }),
                    _ => Err($crate::error::DimensionMismatch {
                        expected: $ndim,
                        got: components.len(),
                    }),
                }
            }
        }
        impl std::str::FromStr for $type {
            type Err = $crate::error::ParseVectorError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let components = $crate::vector::parse_components(s)?;
                Ok(Self::try_from(components.as_slice())?)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let components = [$(self.$field),+];
                write!(f, "({})", itertools::Itertools::join(&mut components.iter(), ", "))
            }
        }
    };
}
