use crate::{
    api::{
        capacity::Capacity,
        errors::{CapacityError, CapacityResult},
    },
    utilities::scalar::Scalar,
};
use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;

/// Either a [Capacity] or a dimensionless number.
///
/// # Remarks
///
/// The operator traits on [Capacity] only cover combinations that are always
/// valid. [Value] covers the rest: every pairing of capacities and plain
/// numbers, with invalid ones reported as [CapacityError::Dimension] at runtime.
///
/// | Op | Capacity, Capacity | Capacity, Number | Number, Capacity |
/// |----|--------------------|------------------|------------------|
/// | `+` | Capacity | zero only | zero only |
/// | `-` | Capacity | zero only | zero only (negates) |
/// | `*` | error | Capacity | Capacity |
/// | `/` | Number | Capacity | zero only, yields 0 |
/// | `//` | integer Number | Capacity | zero only, yields 0 |
/// | `%` | Capacity | zero capacity only | zero only, yields 0 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value {
    /// A quantity of bits.
    Capacity(Capacity),

    /// A dimensionless number.
    Number(Scalar),
}

impl Value {
    /// Returns the capacity, if this is one.
    pub fn as_capacity(&self) -> Option<Capacity> {
        match *self {
            Value::Capacity(capacity) => Some(capacity),
            Value::Number(_) => None,
        }
    }

    /// Returns the number, if this is one.
    pub fn as_number(&self) -> Option<Scalar> {
        match *self {
            Value::Capacity(_) => None,
            Value::Number(number) => Some(number),
        }
    }

    /// Adds two values.
    ///
    /// # Returns
    ///
    /// [CapacityError::Dimension] when adding a nonzero number to a capacity.
    pub fn try_add(self, rhs: impl Into<Value>) -> CapacityResult<Value> {
        Ok(match (self, rhs.into()) {
            (Value::Capacity(lhs), Value::Capacity(rhs)) => Value::Capacity(lhs + rhs),
            (Value::Capacity(capacity), Value::Number(number))
            | (Value::Number(number), Value::Capacity(capacity)) => {
                Capacity::require_zero("addition", number)?;
                Value::Capacity(capacity)
            }
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs + rhs),
        })
    }

    /// Subtracts `rhs` from this value.
    ///
    /// # Returns
    ///
    /// [CapacityError::Dimension] when a nonzero number meets a capacity.
    pub fn try_sub(self, rhs: impl Into<Value>) -> CapacityResult<Value> {
        Ok(match (self, rhs.into()) {
            (Value::Capacity(lhs), Value::Capacity(rhs)) => Value::Capacity(lhs - rhs),
            (Value::Capacity(capacity), Value::Number(number)) => {
                Capacity::require_zero("subtraction", number)?;
                Value::Capacity(capacity)
            }
            (Value::Number(number), Value::Capacity(capacity)) => {
                Capacity::require_zero("subtraction", number)?;
                Value::Capacity(-capacity)
            }
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs - rhs),
        })
    }

    /// Multiplies two values.
    ///
    /// # Returns
    ///
    /// [CapacityError::Dimension] when multiplying two capacities.
    pub fn try_mul(self, rhs: impl Into<Value>) -> CapacityResult<Value> {
        Ok(match (self, rhs.into()) {
            (Value::Capacity(_), Value::Capacity(rhs)) => {
                return Err(CapacityError::dimension("multiplication", rhs));
            }
            (Value::Capacity(capacity), Value::Number(number))
            | (Value::Number(number), Value::Capacity(capacity)) => {
                Value::Capacity(capacity * number)
            }
            (Value::Number(lhs), Value::Number(rhs)) => Value::Number(lhs * rhs),
        })
    }

    /// True division.
    ///
    /// # Returns
    ///
    /// [CapacityError::DivisionByZero] for a zero divisor, and
    /// [CapacityError::Dimension] when dividing a nonzero number by a capacity.
    pub fn try_div(self, rhs: impl Into<Value>) -> CapacityResult<Value> {
        match (self, rhs.into()) {
            (Value::Capacity(lhs), Value::Capacity(rhs)) => lhs.checked_div(rhs).map(Value::Number),
            (Value::Capacity(lhs), Value::Number(rhs)) => {
                lhs.checked_div_scalar(rhs).map(Value::Capacity)
            }
            (Value::Number(number), Value::Capacity(_)) => {
                Capacity::require_zero("division", number)?;
                Ok(Value::Number(Scalar::ZERO))
            }
            (Value::Number(lhs), Value::Number(rhs)) => lhs
                .checked_div(rhs)
                .map(Value::Number)
                .ok_or(CapacityError::DivisionByZero),
        }
    }

    /// Floor division.
    ///
    /// # Returns
    ///
    /// An integer number for two capacities, a capacity with a whole number of
    /// bits for a capacity and a number, [CapacityError::DivisionByZero] for a
    /// zero divisor and [CapacityError::Dimension] when dividing a nonzero number
    /// by a capacity.
    pub fn try_floor_div(self, rhs: impl Into<Value>) -> CapacityResult<Value> {
        match (self, rhs.into()) {
            (Value::Capacity(lhs), Value::Capacity(rhs)) => lhs.floor_div(rhs).map(Value::Number),
            (Value::Capacity(lhs), Value::Number(rhs)) => {
                lhs.floor_div_scalar(rhs).map(Value::Capacity)
            }
            (Value::Number(number), Value::Capacity(_)) => {
                Capacity::require_zero("floor division", number)?;
                Ok(Value::Number(Scalar::ZERO))
            }
            (Value::Number(lhs), Value::Number(rhs)) => lhs
                .checked_floor_div(rhs)
                .map(Value::Number)
                .ok_or(CapacityError::DivisionByZero),
        }
    }

    /// Floor modulo.
    ///
    /// # Returns
    ///
    /// A zero valued dividend always yields zero. Otherwise
    /// [CapacityError::ModuloByZero] for a zero divisor, and
    /// [CapacityError::Dimension] for any pairing other than two capacities or
    /// two numbers.
    pub fn try_rem(self, rhs: impl Into<Value>) -> CapacityResult<Value> {
        match (self, rhs.into()) {
            (Value::Capacity(lhs), Value::Capacity(rhs)) => lhs.checked_rem(rhs).map(Value::Capacity),
            (Value::Capacity(lhs), Value::Number(_)) if lhs.is_zero() => Ok(Value::Capacity(lhs)),
            (Value::Capacity(_), Value::Number(rhs)) if rhs.is_zero() => {
                Err(CapacityError::ModuloByZero)
            }
            (Value::Capacity(_), Value::Number(rhs)) => Err(CapacityError::dimension("modulo", rhs)),
            (Value::Number(number), Value::Capacity(_)) => {
                Capacity::require_zero("modulo", number)?;
                Ok(Value::Number(Scalar::ZERO))
            }
            (Value::Number(lhs), Value::Number(rhs)) => lhs
                .checked_floor_rem(rhs)
                .map(Value::Number)
                .ok_or(CapacityError::ModuloByZero),
        }
    }

    /// Orders two values.
    ///
    /// # Returns
    ///
    /// [CapacityError::Dimension] when a capacity is compared to a nonzero number.
    pub fn try_cmp(self, rhs: impl Into<Value>) -> CapacityResult<Ordering> {
        match (self, rhs.into()) {
            (Value::Capacity(lhs), Value::Capacity(rhs)) => Ok(lhs.cmp(&rhs)),
            (Value::Capacity(capacity), Value::Number(number)) => {
                Capacity::require_zero("comparison", number)?;
                Ok(capacity.bits().cmp(&Scalar::ZERO))
            }
            (Value::Number(number), Value::Capacity(capacity)) => {
                Capacity::require_zero("comparison", number)?;
                Ok(Scalar::ZERO.cmp(&capacity.bits()))
            }
            (Value::Number(lhs), Value::Number(rhs)) => Ok(lhs.cmp(&rhs)),
        }
    }

    /// Equality that never fails: values of incompatible dimensions are simply unequal.
    pub fn loose_eq(self, rhs: impl Into<Value>) -> bool {
        self.try_cmp(rhs) == Ok(Ordering::Equal)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Capacity(capacity) => Value::Capacity(-capacity),
            Value::Number(number) => Value::Number(-number),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Capacity(capacity) => fmt::Display::fmt(capacity, f),
            Value::Number(number) => fmt::Display::fmt(number, f),
        }
    }
}

impl From<Capacity> for Value {
    #[inline]
    fn from(capacity: Capacity) -> Self {
        Value::Capacity(capacity)
    }
}

impl From<Scalar> for Value {
    #[inline]
    fn from(number: Scalar) -> Self {
        Value::Number(number)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(number: $ty) -> Self {
                    Value::Number(Scalar::from(number))
                }
            }
        )*
    };
}

value_from_number!(i32, i64, i128, u32, u64, usize, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::units::*;
    use rstest::rstest;

    fn capacity(value: Capacity) -> Value {
        Value::Capacity(value)
    }

    #[test]
    fn add() {
        assert_eq!(capacity(MIB).try_add(MIB), Ok(capacity(MIB * 2)));
        assert_eq!(capacity(MIB).try_add(0), Ok(capacity(MIB)));
        assert_eq!(Value::from(0).try_add(MIB), Ok(capacity(MIB)));
        assert_eq!(Value::from(0.0).try_add(MIB), Ok(capacity(MIB)));
    }

    #[test]
    fn iadd_rebinds() {
        let mut value = capacity(MIB);
        value = value.try_add(MIB).unwrap();
        assert_eq!(value, capacity(MIB * 2));
    }

    #[test]
    fn sub() {
        assert_eq!(capacity(MIB).try_sub(BIT), Ok(capacity(Capacity::new(8_388_607))));
        assert_eq!(Value::from(0).try_sub(BIT), Ok(capacity(-BIT)));
        assert_eq!(capacity(BIT).try_sub(0), Ok(capacity(BIT)));
    }

    #[test]
    fn mul() {
        assert_eq!(Value::from(2).try_mul(MIB), Ok(capacity(MIB * 2)));
        assert_eq!(capacity(MIB).try_mul(0), Ok(capacity(Capacity::ZERO)));
        assert!(matches!(
            Value::from(0).try_mul(MIB),
            Ok(Value::Capacity(_))
        ));
    }

    #[test]
    fn div() {
        assert_eq!(capacity(MIB).try_div(2), Ok(capacity(MIB * 0.5)));
        assert_eq!(capacity(GB).try_div(10), Ok(capacity(MB * 100)));
        assert_eq!(capacity(MIB * 1.5).try_div(MIB), Ok(Value::from(1.5)));
        assert_eq!(capacity(MIB * 2).try_div(MIB), Ok(Value::from(2)));
        assert_eq!(Value::from(0).try_div(MIB), Ok(Value::from(0)));
    }

    #[test]
    fn floor_div() {
        assert_eq!(
            capacity(MIB * 2 + BIT).try_floor_div(MIB),
            Ok(Value::Number(Scalar::Int(2)))
        );
        assert_eq!(capacity(MIB * 2).try_floor_div(2), Ok(capacity(MIB)));
        assert_eq!(
            capacity(MIB * 2.001).try_floor_div(2),
            Ok(capacity(BIT * 8_392_802))
        );
        assert_eq!(Value::from(0).try_floor_div(MIB), Ok(Value::from(0)));
    }

    #[test]
    fn rem() {
        assert_eq!(capacity(MIB * 2 + BIT).try_rem(MIB), Ok(capacity(BIT)));
        assert_eq!(Value::from(0).try_rem(MIB), Ok(Value::from(0)));
        assert_eq!(Value::from(0).try_rem(BYTE), Ok(Value::from(0)));
        assert_eq!(capacity(BYTE * 0).try_rem(BYTE), Ok(capacity(Capacity::ZERO)));
        assert_eq!(capacity(BYTE * 0).try_rem(3), Ok(capacity(Capacity::ZERO)));
        assert_eq!(capacity(MIB * 0.5).try_rem(MIB * 0.5), Ok(capacity(Capacity::ZERO)));
    }

    #[rstest(lhs, rhs,
        case(capacity(BIT * 668), capacity(BIT * 668)),
        case(capacity(BIT * 668), Value::from(3))
    )]
    fn multiplication_and_addition_dimension_errors(lhs: Value, rhs: Value) {
        if rhs.as_capacity().is_some() {
            assert!(lhs.try_mul(rhs).unwrap_err().is_dimension_error());
        } else {
            assert!(lhs.try_add(rhs).unwrap_err().is_dimension_error());
            assert!(rhs.try_add(lhs).unwrap_err().is_dimension_error());
            assert!(lhs.try_sub(rhs).unwrap_err().is_dimension_error());
            assert!(rhs.try_sub(lhs).unwrap_err().is_dimension_error());
        }
    }

    #[test]
    fn invalid_arithmetic() {
        let size = capacity(BIT * 668);

        assert!(size.try_mul(size).unwrap_err().is_dimension_error());
        assert!(size.try_add(3).unwrap_err().is_dimension_error());
        assert!(Value::from(3).try_div(size).unwrap_err().is_dimension_error());
        assert!(Value::from(3).try_rem(size).unwrap_err().is_dimension_error());
        assert!(size.try_rem(3).unwrap_err().is_dimension_error());
        assert!(size.try_cmp(2).unwrap_err().is_dimension_error());
        assert!(Value::from(2).try_cmp(size).unwrap_err().is_dimension_error());

        assert_eq!(size.try_div(0), Err(CapacityError::DivisionByZero));
        assert_eq!(size.try_rem(0), Err(CapacityError::ModuloByZero));
        assert_eq!(size.try_div(Capacity::ZERO), Err(CapacityError::DivisionByZero));
        assert_eq!(size.try_rem(Capacity::ZERO), Err(CapacityError::ModuloByZero));
    }

    #[test]
    fn comparisons_against_zero() {
        let small = capacity(Capacity::new(666));
        assert_eq!(Value::from(0).try_cmp(-small), Ok(Ordering::Greater));
        assert_eq!(Value::from(0).try_cmp(small), Ok(Ordering::Less));
        assert_eq!(small.try_cmp(0), Ok(Ordering::Greater));
    }

    #[rstest(other,
        case(Value::from(2.0)),
        case(Value::from(2)),
        case(Value::from(1)),
        case(Value::from(0))
    )]
    fn loose_equality_never_fails(other: Value) {
        assert!(!capacity(MIB).loose_eq(other));
        assert!(!other.loose_eq(capacity(MIB)));
    }

    #[test]
    fn loose_equality_to_zero() {
        assert!(capacity(MIB * 0).loose_eq(0));
        assert!(Value::from(0).loose_eq(MIB * 0));
    }

    #[test]
    fn negation() {
        assert_eq!(-capacity(MIB), capacity(-MIB));
        assert_eq!(capacity(MIB).try_add(-capacity(MIB)).unwrap().try_cmp(0), Ok(Ordering::Equal));
        assert_eq!(-Value::from(2), Value::from(-2));
    }
}
