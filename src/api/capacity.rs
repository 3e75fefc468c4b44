use crate::{
    api::{
        errors::{CapacityError, CapacityResult},
        value::Value,
    },
    utilities::scalar::Scalar,
};
use core::cmp::Ordering;

/// A quantity of digital storage, measured in bits.
///
/// # Remarks
///
/// Capacities are plain immutable values; every operation produces a new one.
/// Equality, ordering and hashing all go through the bit count, so a capacity
/// built from `8` bits equals one built from `8.0` bits and both hash the same
/// as the bit count itself.
///
/// Arithmetic is dimension checked: capacities add to capacities, scale by
/// plain numbers and divide into plain numbers. Combinations that would mix
/// dimensions either don't type-check or, through [Value](crate::api::value::Value),
/// report [CapacityError::Dimension].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Capacity {
    bits: Scalar,
}

impl Capacity {
    /// A capacity of zero bits.
    pub const ZERO: Capacity = Capacity::from_int(0);

    /// Creates a capacity from a raw number of bits.
    pub fn new(bits: impl Into<Scalar>) -> Self {
        Capacity {
            bits: bits.into().normalize(),
        }
    }

    /// Creates a capacity from an exact number of bits in a const context.
    pub const fn from_int(bits: i128) -> Self {
        Capacity {
            bits: Scalar::Int(bits),
        }
    }

    /// The number of bits in this capacity.
    #[inline]
    pub fn bits(&self) -> Scalar {
        self.bits
    }

    /// Returns true if this capacity holds exactly zero bits.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.bits.is_zero()
    }

    /// Returns the absolute value of this capacity.
    pub fn abs(self) -> Self {
        Capacity::new(self.bits.abs())
    }

    /// Rounds up to the closest multiple of `boundary`.
    ///
    /// # Arguments
    ///
    /// * `boundary` - The capacity whose multiple is returned.
    ///
    /// # Returns
    ///
    /// The smallest multiple of `boundary` that is not less than `self`,
    /// or [CapacityError::DivisionByZero] if `boundary` is zero.
    pub fn roundup(self, boundary: Capacity) -> CapacityResult<Capacity> {
        let rounded = self.rounddown(boundary)?;
        if self.checked_rem(boundary)?.is_zero() {
            Ok(rounded)
        } else {
            Ok(rounded + boundary)
        }
    }

    /// Rounds down to the closest multiple of `boundary`.
    ///
    /// # Arguments
    ///
    /// * `boundary` - The capacity whose multiple is returned.
    ///
    /// # Returns
    ///
    /// `floor(self / boundary) * boundary`, or [CapacityError::DivisionByZero]
    /// if `boundary` is zero.
    pub fn rounddown(self, boundary: Capacity) -> CapacityResult<Capacity> {
        Ok(boundary * self.floor_div(boundary)?)
    }

    /// Compares against a capacity or a dimensionless number.
    ///
    /// # Returns
    ///
    /// The ordering, or [CapacityError::Dimension] if `other` is a number other than zero.
    pub fn try_cmp(&self, other: impl Into<Value>) -> CapacityResult<Ordering> {
        Value::Capacity(*self).try_cmp(other)
    }

    /// Guards an operation that is only defined against a zero valued number.
    pub(crate) fn require_zero(
        operation: &'static str,
        number: Scalar,
    ) -> CapacityResult<()> {
        if number.is_zero() {
            Ok(())
        } else {
            Err(CapacityError::dimension(operation, number))
        }
    }
}

/// A capacity is truthy unless it holds exactly zero bits.
impl From<Capacity> for bool {
    fn from(capacity: Capacity) -> bool {
        !capacity.is_zero()
    }
}

impl From<Capacity> for Scalar {
    fn from(capacity: Capacity) -> Scalar {
        capacity.bits
    }
}

macro_rules! capacity_number_traits {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Capacity {
                /// Interprets the number as a raw count of bits.
                #[inline]
                fn from(bits: $ty) -> Self {
                    Capacity::new(bits)
                }
            }

            /// Capacities only ever equal the number zero, and only when empty.
            impl PartialEq<$ty> for Capacity {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.is_zero() && Scalar::from(*other).is_zero()
                }
            }

            impl PartialEq<Capacity> for $ty {
                #[inline]
                fn eq(&self, other: &Capacity) -> bool {
                    other == self
                }
            }
        )*
    };
}

capacity_number_traits!(i32, i64, i128, u32, u64, usize, f64);

impl PartialEq<Scalar> for Capacity {
    fn eq(&self, other: &Scalar) -> bool {
        self.is_zero() && other.is_zero()
    }
}
