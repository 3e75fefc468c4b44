use crate::{
    api::{
        capacity::Capacity,
        errors::{CapacityError, CapacityResult},
        units::unit_by_name,
    },
    utilities::{decimal::Decimal, scalar::Scalar},
};
use core::str::FromStr;

/// Separator allowed between the amount and the unit, e.g. `20*GiB`.
const AMOUNT_SEPARATOR: char = '*';

/// Parses a capacity such as `20*GiB`, `2 GiB`, `1119.63 * TB`, `20b` or `MiB`.
///
/// # Arguments
///
/// * `text` - An optional unsigned decimal amount, optional whitespace, an
///   optional `*` (only after an amount), optional whitespace and then the exact,
///   case-sensitive name of a unit. A bare unit means one of that unit.
///
/// # Returns
///
/// The capacity, or [CapacityError::Parse] if the text doesn't follow the
/// grammar above or names an unknown unit.
///
/// # Remarks
///
/// The amount is parsed as an exact decimal before being multiplied by the
/// unit, so `1119.63 * TB` is exactly `1119630 * GB`. The result only becomes
/// fractional when the product itself is not a whole number of bits.
pub fn from_string(text: &str) -> CapacityResult<Capacity> {
    parse_capacity(text).ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::trace!(input = text, "rejected capacity literal");
        CapacityError::Parse(text.to_string())
    })
}

fn parse_capacity(text: &str) -> Option<Capacity> {
    let amount_end = text
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(text.len());
    let (amount, rest) = text.split_at(amount_end);

    if amount.is_empty() {
        return unit_by_name(text);
    }

    let amount = Decimal::parse(amount)?;
    let rest = rest.trim_start();
    let unit_name = rest
        .strip_prefix(AMOUNT_SEPARATOR)
        .map(str::trim_start)
        .unwrap_or(rest);

    let unit = unit_by_name(unit_name)?;
    let Scalar::Int(unit_bits) = unit.bits() else {
        return None;
    };

    Some(Capacity::new(amount.scale_by(unit_bits)))
}

impl FromStr for Capacity {
    type Err = CapacityError;

    fn from_str(text: &str) -> CapacityResult<Self> {
        from_string(text)
    }
}

impl TryFrom<&str> for Capacity {
    type Error = CapacityError;

    fn try_from(text: &str) -> CapacityResult<Self> {
        from_string(text)
    }
}
