use crate::{
    api::{
        capacity::Capacity,
        errors::{CapacityError, CapacityResult},
        units::{unit_by_name, units, BYTE},
    },
    utilities::scalar::Scalar,
};
use core::fmt;

/// Marker at the end of a format specifier that requests the unit name as a suffix.
const UNIT_SUFFIX_MARKER: char = '!';

/// A unit is only considered for display once the capacity reaches a tenth of it.
const DISPLAY_UNIT_THRESHOLD: f64 = 0.1;

/// Decimal digits kept when displaying a capacity in a larger unit.
const DISPLAY_DECIMALS: usize = 2;

impl Capacity {
    /// Renders the most compact readable form, e.g. `512 KiB` or `0.92 PiB`.
    ///
    /// This is the [Display](fmt::Display) form of a capacity.
    ///
    /// # Remarks
    ///
    /// Anything smaller than a byte is shown in bits. Otherwise every unit no
    /// more than ten times larger than the capacity is tried, with the amount
    /// rounded to two decimals. The shortest amount wins; on equal length a
    /// whole amount beats a fractional one, and the larger unit wins among the rest.
    pub fn to_friendly_string(&self) -> String {
        if !self.bits().is_finite() || *self < BYTE {
            return self.format_as_bits(" ");
        }

        let mut best: Option<(String, &'static str)> = None;
        for unit in units().iter().rev() {
            if unit.capacity() * DISPLAY_UNIT_THRESHOLD > *self {
                continue;
            }

            let Ok(amount) = self.checked_div(unit.capacity()) else {
                continue;
            };

            let amount = round_for_display(amount);
            let is_shorter = match &best {
                None => true,
                Some((current, _)) => display_rank(&amount) < display_rank(current),
            };

            if is_shorter {
                best = Some((amount, unit.name()));
            }
        }

        match best {
            Some((amount, name)) => format!("{amount} {name}"),
            None => self.format_as_bits(" "),
        }
    }

    /// Renders the exact form, e.g. `512*KiB` or `4194305*bit`.
    ///
    /// This is the [Debug](fmt::Debug) form of a capacity, and it parses back
    /// into an equal capacity with [from_string](crate::from_string) whenever
    /// the bit count is nonnegative.
    ///
    /// # Remarks
    ///
    /// The largest unit that divides the bit count evenly is used; capacities
    /// below a byte or with a fractional bit count are rendered in bits.
    pub fn to_exact_string(&self) -> String {
        if *self < BYTE {
            return self.format_as_bits("*");
        }

        if let Scalar::Int(bits) = self.bits() {
            for unit in units().iter().rev() {
                let Scalar::Int(unit_bits) = unit.capacity().bits() else {
                    continue;
                };

                if bits % unit_bits == 0 {
                    return format!("{}*{}", bits / unit_bits, unit.name());
                }
            }
        }

        self.format_as_bits("*")
    }

    /// Renders this capacity as an amount of a given unit.
    ///
    /// # Arguments
    ///
    /// * `spec` - `[[fill]align][0][width][.precision]<unit>[!]`, where `align`
    ///   is one of `<`, `>`, `^` or `=`. A trailing `!` appends the unit name.
    ///
    /// # Returns
    ///
    /// The formatted amount, or [CapacityError::Format] if the specifier is
    /// malformed or names an unknown unit.
    ///
    /// # Example
    ///
    /// ```
    /// use capacity::units::MIB;
    ///
    /// assert_eq!(MIB.format_spec("<5MiB!").unwrap(), "1MiB ");
    /// assert_eq!((MIB * 3).format_spec("05KiB").unwrap(), "03072");
    /// ```
    pub fn format_spec(&self, spec: &str) -> CapacityResult<String> {
        let parsed = FormatSpec::parse(spec).ok_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(spec = spec, "rejected capacity format specifier");
            CapacityError::Format(spec.to_string())
        })?;

        let Some(unit) = unit_by_name(parsed.unit) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(spec = spec, unit = parsed.unit, "unknown unit in format specifier");
            return Err(CapacityError::Format(spec.to_string()));
        };

        let amount = self.checked_div(unit)?;
        let mut text = match parsed.precision {
            Some(precision) => format!("{:.*}", precision, amount.as_f64()),
            None => amount.to_string(),
        };

        if parsed.unit_suffix {
            text.push_str(parsed.unit);
        }

        Ok(parsed.pad(text))
    }

    fn format_as_bits(&self, separator: &str) -> String {
        format!("{}{separator}bit", self.bits())
    }
}

/// Rounds an amount to [DISPLAY_DECIMALS] places, dropping trailing zeros.
fn round_for_display(amount: Scalar) -> String {
    match amount {
        Scalar::Int(amount) => amount.to_string(),
        Scalar::Float(amount) => {
            let text = format!("{:.*}", DISPLAY_DECIMALS, amount);
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

/// Lower ranks display better: shorter first, then whole amounts.
fn display_rank(amount: &str) -> (usize, bool) {
    (amount.len(), amount.contains('.'))
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_friendly_string())
    }
}

impl fmt::Debug for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_exact_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alignment {
    Left,
    Right,
    Center,
    /// Padding goes between the sign and the digits.
    AfterSign,
}

impl Alignment {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Alignment::Left),
            '>' => Some(Alignment::Right),
            '^' => Some(Alignment::Center),
            '=' => Some(Alignment::AfterSign),
            _ => None,
        }
    }
}

/// A parsed `[[fill]align][0][width][.precision]<unit>[!]` specifier.
#[derive(Debug, PartialEq, Eq)]
struct FormatSpec<'a> {
    fill: char,
    align: Alignment,
    width: usize,
    precision: Option<usize>,
    unit: &'a str,
    unit_suffix: bool,
}

impl<'a> FormatSpec<'a> {
    fn parse(spec: &'a str) -> Option<Self> {
        let (spec, unit_suffix) = match spec.strip_suffix(UNIT_SUFFIX_MARKER) {
            Some(spec) => (spec, true),
            None => (spec, false),
        };

        let mut rest = spec;
        let mut fill = None;
        let mut align = None;

        let mut chars = rest.chars();
        let first = chars.next();
        let second = chars.next();
        if let Some(alignment) = second.and_then(Alignment::from_char) {
            fill = first;
            align = Some(alignment);
            rest = chars.as_str();
        } else if let Some(alignment) = first.and_then(Alignment::from_char) {
            align = Some(alignment);
            rest = &rest[1..];
        }

        if let Some(stripped) = rest.strip_prefix('0') {
            fill = fill.or(Some('0'));
            align = align.or(Some(Alignment::AfterSign));
            rest = stripped;
        }

        let (width, after_width) = split_number(rest);
        rest = after_width;

        let mut precision = None;
        if let Some(stripped) = rest.strip_prefix('.') {
            let (digits, after_precision) = split_number(stripped);
            precision = Some(digits?);
            rest = after_precision;
        }

        if rest.is_empty() {
            return None;
        }

        Some(FormatSpec {
            fill: fill.unwrap_or(' '),
            align: align.unwrap_or(Alignment::Right),
            width: width.unwrap_or(0),
            precision,
            unit: rest,
            unit_suffix,
        })
    }

    fn pad(&self, text: String) -> String {
        let length = text.chars().count();
        if length >= self.width {
            return text;
        }

        let padding = self.width - length;
        let fill = |count: usize| core::iter::repeat(self.fill).take(count);
        match self.align {
            Alignment::Left => text.chars().chain(fill(padding)).collect(),
            Alignment::Right => fill(padding).chain(text.chars()).collect(),
            Alignment::Center => fill(padding / 2)
                .chain(text.chars())
                .chain(fill(padding - padding / 2))
                .collect(),
            Alignment::AfterSign => {
                let (sign, digits) = match text.strip_prefix(['-', '+']) {
                    Some(digits) => (&text[..1], digits),
                    None => ("", text.as_str()),
                };
                sign.chars().chain(fill(padding)).chain(digits.chars()).collect()
            }
        }
    }
}

/// Splits leading ASCII digits off `text`.
fn split_number(text: &str) -> (Option<usize>, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    let (digits, rest) = text.split_at(end);
    (digits.parse().ok(), rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::units::*;
    use crate::implementation::parsing::from_string;
    use rstest::rstest;

    #[rstest(value, friendly, exact,
        case(BIT, "1 bit", "1*bit"),
        case(KIB * 1_013_089_494_912i64, "0.92 PiB", "1013089494912*KiB"),
        case(MIB * 1_907_349, "2 TB", "1907349*MiB"),
        case(MIB * 110, "110 MiB", "110*MiB"),
        case(MIB * 0.5, "512 KiB", "512*KiB"),
        case(MIB * 0.5 + BIT, "512 KiB", "4194305*bit"),
        case(MIB * 0.5 - BIT, "512 KiB", "4194303*bit"),
        case(MIB * 2, "2 MiB", "2*MiB"),
        case(GIB - BIT, "1 GiB", "8589934591*bit"),
        case(GIB - BIT * 0.5, "1 GiB", "8589934591.5*bit"),
        // Fractions with two decimal places
        case(KIB * 0.99, "0.99 KiB", "8110.08*bit"),
        case(MIB * 0.59, "0.59 MiB", "4949278.72*bit"),
        // Fractions with more decimal places
        case(BYTE * 9122, "9122 byte", "9122*byte"),
        case(BYTE * 23_124_232, "22.05 MiB", "23124232*byte"),
        case(BYTE * 58_918_694_226i64, "54.87 GiB", "58918694226*byte"),
        case(BYTE * 213_124_232, "0.2 GiB", "213124232*byte"),
        // Decimal units
        case(MB * 0.5 - BIT, "500 KB", "3999999*bit"),
        case(MB * 0.5, "500 KB", "500*KB"),
        case(MB * 2, "2 MB", "2*MB"),
        case(BIT * 0, "0 bit", "0*bit"),
        case(GIB, "1 GiB", "1*GiB")
    )]
    fn representation(value: Capacity, friendly: &str, exact: &str) {
        assert_eq!(value.to_string(), friendly);
        assert_eq!(format!("{:?}", value), exact);
    }

    #[rstest(value, friendly, exact,
        case(-MIB, "-8388608 bit", "-8388608*bit"),
        case(BIT * 7, "7 bit", "7*bit"),
        case(BIT * 0.5, "0.5 bit", "0.5*bit"),
        case(BYTE * f64::INFINITY, "inf bit", "inf*bit")
    )]
    fn small_negative_and_infinite_are_in_bits(value: Capacity, friendly: &str, exact: &str) {
        assert_eq!(value.to_string(), friendly);
        assert_eq!(format!("{:?}", value), exact);
    }

    #[test]
    fn display_honours_width() {
        assert_eq!(format!("{:>8}", MIB), "   1 MiB");
        assert_eq!(format!("{:-<8}", MIB), "1 MiB---");
    }

    #[rstest(value, spec, expected,
        case(GIB * 3, "GiB", "3"),
        case(BYTE * 100, "byte", "100"),
        case(BYTE * 100, "b", "100"),
        case(MIB, "KiB", "1024"),
        case(KIB, "MiB", "0.0009765625"),
        case(MIB * 1.5, ".2MiB", "1.50"),
        case(MIB, "<5MiB", "1    "),
        case(MIB, ">5MiB", "    1"),
        case(MIB, "^5MiB", "  1  "),
        case(MIB, "05MiB", "00001"),
        case(MIB, "*^7MiB", "***1***"),
        case(-MIB, "05MiB", "-0001"),
        case(MIB, "<5MiB!", "1MiB "),
        case(MIB * 2, "MiB!", "2MiB")
    )]
    fn unit_format_specifiers(value: Capacity, spec: &str, expected: &str) {
        assert_eq!(value.format_spec(spec).unwrap(), expected);
    }

    #[test]
    fn negative_exact_form_is_not_parseable() {
        let exact = format!("{:?}", -MIB);
        assert_eq!(exact, "-8388608*bit");
        assert_eq!(from_string(&exact), Err(CapacityError::Parse(exact.clone())));
    }

    #[rstest(spec, case("kjdkj"), case(""), case("!"), case("<5"), case("5.MiB"), case("GIB"))]
    fn invalid_format_specifiers(spec: &str) {
        let error = (GIB * 3).format_spec(spec).unwrap_err();
        assert_eq!(error, CapacityError::Format(spec.to_string()));
        assert!(error.is_value_error());
    }

    #[test]
    fn friendly_and_exact_forms_are_distinct() {
        let value = MIB * 0.5;
        assert_eq!(value.to_friendly_string(), value.to_string());
        assert_eq!(value.to_exact_string(), format!("{:?}", value));
        assert_ne!(value.to_string(), format!("{:?}", value));
    }
}
