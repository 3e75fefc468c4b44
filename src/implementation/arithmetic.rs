use crate::{
    api::{
        capacity::Capacity,
        errors::{CapacityError, CapacityResult},
    },
    utilities::scalar::Scalar,
};
use core::iter::Sum;
use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Rem, Sub, SubAssign};

impl Capacity {
    /// Divides by another capacity, yielding a plain number.
    ///
    /// # Returns
    ///
    /// The ratio of the two bit counts, or [CapacityError::DivisionByZero].
    pub fn checked_div(self, rhs: Capacity) -> CapacityResult<Scalar> {
        self.bits()
            .checked_div(rhs.bits())
            .ok_or(CapacityError::DivisionByZero)
    }

    /// Divides by a plain number, yielding a capacity.
    ///
    /// # Returns
    ///
    /// The scaled capacity, or [CapacityError::DivisionByZero].
    pub fn checked_div_scalar(self, rhs: impl Into<Scalar>) -> CapacityResult<Capacity> {
        self.bits()
            .checked_div(rhs.into())
            .map(Capacity::new)
            .ok_or(CapacityError::DivisionByZero)
    }

    /// Floor division by another capacity.
    ///
    /// # Returns
    ///
    /// How many whole `rhs` fit into `self` (an integer for finite capacities),
    /// or [CapacityError::DivisionByZero].
    pub fn floor_div(self, rhs: Capacity) -> CapacityResult<Scalar> {
        self.bits()
            .checked_floor_div(rhs.bits())
            .ok_or(CapacityError::DivisionByZero)
    }

    /// Floor division by a plain number.
    ///
    /// # Returns
    ///
    /// A capacity with a whole number of bits, or [CapacityError::DivisionByZero].
    pub fn floor_div_scalar(self, rhs: impl Into<Scalar>) -> CapacityResult<Capacity> {
        self.checked_div_scalar(rhs)
            .map(|quotient| Capacity::new(quotient.bits().floor()))
    }

    /// Floor modulo by another capacity; the remainder takes the sign of `rhs`.
    ///
    /// # Returns
    ///
    /// Zero when `self` is zero, whatever `rhs` is. Otherwise the remainder,
    /// or [CapacityError::ModuloByZero].
    pub fn checked_rem(self, rhs: Capacity) -> CapacityResult<Capacity> {
        if self.is_zero() {
            return Ok(Capacity::ZERO);
        }

        self.bits()
            .checked_floor_rem(rhs.bits())
            .map(Capacity::new)
            .ok_or(CapacityError::ModuloByZero)
    }
}

/// Unwraps results of operator impls, which panic like Rust's integer operators do.
#[inline]
#[track_caller]
fn or_panic<T>(result: CapacityResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(error) => panic!("{error}"),
    }
}

impl Add for Capacity {
    type Output = Capacity;

    fn add(self, rhs: Capacity) -> Capacity {
        Capacity::new(self.bits() + rhs.bits())
    }
}

impl Sub for Capacity {
    type Output = Capacity;

    fn sub(self, rhs: Capacity) -> Capacity {
        Capacity::new(self.bits() - rhs.bits())
    }
}

impl AddAssign for Capacity {
    fn add_assign(&mut self, rhs: Capacity) {
        *self = *self + rhs;
    }
}

impl SubAssign for Capacity {
    fn sub_assign(&mut self, rhs: Capacity) {
        *self = *self - rhs;
    }
}

impl Neg for Capacity {
    type Output = Capacity;

    fn neg(self) -> Capacity {
        Capacity::new(-self.bits())
    }
}

impl Sum for Capacity {
    fn sum<I: Iterator<Item = Capacity>>(iter: I) -> Capacity {
        iter.fold(Capacity::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Capacity> for Capacity {
    fn sum<I: Iterator<Item = &'a Capacity>>(iter: I) -> Capacity {
        iter.copied().sum()
    }
}

/// Panics if `rhs` is zero; see [Capacity::checked_div].
impl Div for Capacity {
    type Output = Scalar;

    #[track_caller]
    fn div(self, rhs: Capacity) -> Scalar {
        or_panic(self.checked_div(rhs))
    }
}

/// Panics if both sides are nonzero and `rhs` is zero; see [Capacity::checked_rem].
impl Rem for Capacity {
    type Output = Capacity;

    #[track_caller]
    fn rem(self, rhs: Capacity) -> Capacity {
        or_panic(self.checked_rem(rhs))
    }
}

macro_rules! capacity_scalar_ops {
    ($($ty:ty),*) => {
        $(
            impl Mul<$ty> for Capacity {
                type Output = Capacity;

                fn mul(self, rhs: $ty) -> Capacity {
                    Capacity::new(self.bits() * Scalar::from(rhs))
                }
            }

            impl Mul<Capacity> for $ty {
                type Output = Capacity;

                fn mul(self, rhs: Capacity) -> Capacity {
                    rhs * self
                }
            }

            impl MulAssign<$ty> for Capacity {
                fn mul_assign(&mut self, rhs: $ty) {
                    *self = *self * rhs;
                }
            }

            /// Panics if `rhs` is zero; see [Capacity::checked_div_scalar].
            impl Div<$ty> for Capacity {
                type Output = Capacity;

                #[track_caller]
                fn div(self, rhs: $ty) -> Capacity {
                    or_panic(self.checked_div_scalar(rhs))
                }
            }
        )*
    };
}

capacity_scalar_ops!(i64, f64, Scalar);
