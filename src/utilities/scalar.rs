use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg, Sub};

/// Smallest float that no longer fits into an [i128] (2^127).
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// A dimensionless number, and the backing store for the bit count of a
/// [Capacity](crate::api::capacity::Capacity).
///
/// # Remarks
///
/// Values are kept as exact integers whenever possible and only degrade to
/// floating point when a result is fractional, non-finite or overflows [i128].
/// A float that is finite and mathematically integral is always stored as
/// [Scalar::Int]; this keeps `8` and `8.0` equal, hashing identically and
/// formatting the same.
///
/// Equality and ordering are total: `NaN` equals itself and sorts above
/// positive infinity.
#[derive(Clone, Copy)]
pub enum Scalar {
    /// An exact integer.
    Int(i128),

    /// A fractional, non-finite or out of [i128] range value.
    Float(f64),
}

impl Scalar {
    /// The integer zero.
    pub const ZERO: Scalar = Scalar::Int(0);

    /// Creates a scalar from a float, collapsing integral values to [Scalar::Int].
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite()
            && value.fract() == 0.0
            && (-I128_LIMIT..I128_LIMIT).contains(&value)
        {
            Scalar::Int(value as i128)
        } else {
            Scalar::Float(value)
        }
    }

    /// Returns the normalized form of this scalar.
    /// Only matters for values built directly from the [Scalar::Float] variant.
    #[inline]
    pub fn normalize(self) -> Self {
        match self {
            Scalar::Int(_) => self,
            Scalar::Float(value) => Scalar::from_f64(value),
        }
    }

    /// Returns true if the value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        match *self {
            Scalar::Int(value) => value == 0,
            Scalar::Float(value) => value == 0.0,
        }
    }

    /// Returns true if the value is neither infinite nor NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        match *self {
            Scalar::Int(_) => true,
            Scalar::Float(value) => value.is_finite(),
        }
    }

    /// Returns true if the value has no fractional part.
    pub fn is_integral(&self) -> bool {
        matches!(self.normalize(), Scalar::Int(_))
    }

    /// Returns the value as an [i128] if it is integral and in range.
    pub fn as_i128(&self) -> Option<i128> {
        match self.normalize() {
            Scalar::Int(value) => Some(value),
            Scalar::Float(_) => None,
        }
    }

    /// Returns the (possibly lossy) floating point value.
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Scalar::Int(value) => value as f64,
            Scalar::Float(value) => value,
        }
    }

    /// Returns the absolute value.
    pub fn abs(self) -> Self {
        match self {
            Scalar::Int(value) => value
                .checked_abs()
                .map(Scalar::Int)
                .unwrap_or_else(|| Scalar::Float((value as f64).abs())),
            Scalar::Float(value) => Scalar::from_f64(value.abs()),
        }
    }

    /// Rounds towards negative infinity.
    pub fn floor(self) -> Self {
        match self {
            Scalar::Int(_) => self,
            Scalar::Float(value) => Scalar::from_f64(value.floor()),
        }
    }

    /// True division. Exact when the integer operands divide evenly.
    ///
    /// # Returns
    ///
    /// `None` if `rhs` is zero.
    pub fn checked_div(self, rhs: Scalar) -> Option<Scalar> {
        if rhs.is_zero() {
            return None;
        }

        Some(match (self.normalize(), rhs.normalize()) {
            (Scalar::Int(lhs), Scalar::Int(rhs)) if lhs.checked_rem(rhs) == Some(0) => lhs
                .checked_div(rhs)
                .map(Scalar::Int)
                .unwrap_or_else(|| Scalar::from_f64(lhs as f64 / rhs as f64)),
            (lhs, rhs) => Scalar::from_f64(lhs.as_f64() / rhs.as_f64()),
        })
    }

    /// Floor division; the quotient is rounded towards negative infinity.
    ///
    /// # Returns
    ///
    /// `None` if `rhs` is zero.
    pub fn checked_floor_div(self, rhs: Scalar) -> Option<Scalar> {
        if rhs.is_zero() {
            return None;
        }

        Some(match (self.normalize(), rhs.normalize()) {
            (Scalar::Int(lhs), Scalar::Int(rhs)) => match lhs.checked_div(rhs) {
                Some(quotient) if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) => {
                    Scalar::Int(quotient - 1)
                }
                Some(quotient) => Scalar::Int(quotient),
                None => Scalar::from_f64((lhs as f64 / rhs as f64).floor()),
            },
            (lhs, rhs) => Scalar::from_f64((lhs.as_f64() / rhs.as_f64()).floor()),
        })
    }

    /// Floor modulo; a nonzero remainder takes the sign of `rhs`.
    ///
    /// # Returns
    ///
    /// `None` if `rhs` is zero.
    pub fn checked_floor_rem(self, rhs: Scalar) -> Option<Scalar> {
        if rhs.is_zero() {
            return None;
        }

        Some(match (self.normalize(), rhs.normalize()) {
            (Scalar::Int(lhs), Scalar::Int(rhs)) => {
                // i128::MIN % -1 overflows in the hardware sense; the remainder is 0.
                let remainder = lhs.checked_rem(rhs).unwrap_or(0);
                if remainder != 0 && (remainder < 0) != (rhs < 0) {
                    Scalar::Int(remainder + rhs)
                } else {
                    Scalar::Int(remainder)
                }
            }
            (lhs, rhs) => {
                let (lhs, rhs) = (lhs.as_f64(), rhs.as_f64());
                let remainder = lhs % rhs;
                if remainder != 0.0 && (remainder < 0.0) != (rhs < 0.0) {
                    Scalar::from_f64(remainder + rhs)
                } else {
                    Scalar::from_f64(remainder)
                }
            }
        })
    }

    /// Applies an integer operation, falling back to floats on overflow
    /// or when either side is already a float.
    #[inline]
    fn combine(
        self,
        rhs: Scalar,
        exact: fn(i128, i128) -> Option<i128>,
        float: fn(f64, f64) -> f64,
    ) -> Scalar {
        match (self.normalize(), rhs.normalize()) {
            (Scalar::Int(lhs), Scalar::Int(rhs)) => exact(lhs, rhs)
                .map(Scalar::Int)
                .unwrap_or_else(|| Scalar::from_f64(float(lhs as f64, rhs as f64))),
            (lhs, rhs) => Scalar::from_f64(float(lhs.as_f64(), rhs.as_f64())),
        }
    }
}

/// Compares an integer with a float without losing precision on either side.
fn compare_int_float(lhs: i128, rhs: f64) -> Ordering {
    if rhs.is_nan() || rhs >= I128_LIMIT {
        return Ordering::Less;
    }
    if rhs < -I128_LIMIT {
        return Ordering::Greater;
    }

    let whole = rhs.trunc();
    match lhs.cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(rhs - whole)).unwrap_or(Ordering::Equal),
        ordering => ordering,
    }
}

fn compare_floats(lhs: f64, rhs: f64) -> Ordering {
    match (lhs.is_nan(), rhs.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        match (*self, *other) {
            (Scalar::Int(lhs), Scalar::Int(rhs)) => lhs.cmp(&rhs),
            (Scalar::Int(lhs), Scalar::Float(rhs)) => compare_int_float(lhs, rhs),
            (Scalar::Float(lhs), Scalar::Int(rhs)) => compare_int_float(rhs, lhs).reverse(),
            (Scalar::Float(lhs), Scalar::Float(rhs)) => compare_floats(lhs, rhs),
        }
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scalar {}

impl Hash for Scalar {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.normalize() {
            Scalar::Int(value) => value.hash(state),
            Scalar::Float(value) if value.is_nan() => f64::NAN.to_bits().hash(state),
            Scalar::Float(value) => value.to_bits().hash(state),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Scalar::ZERO
    }
}

impl Add for Scalar {
    type Output = Scalar;

    fn add(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i128::checked_add, |lhs, rhs| lhs + rhs)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i128::checked_sub, |lhs, rhs| lhs - rhs)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Scalar) -> Scalar {
        self.combine(rhs, i128::checked_mul, |lhs, rhs| lhs * rhs)
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    fn neg(self) -> Scalar {
        Scalar::ZERO - self
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalize() {
            Scalar::Int(value) => fmt::Display::fmt(&value, f),
            Scalar::Float(value) => fmt::Display::fmt(&value, f),
        }
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

macro_rules! scalar_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Scalar {
                #[inline]
                fn from(value: $ty) -> Self {
                    Scalar::Int(value as i128)
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Scalar::from_f64(value)
    }
}

impl From<f32> for Scalar {
    #[inline]
    fn from(value: f32) -> Self {
        Scalar::from_f64(value as f64)
    }
}
