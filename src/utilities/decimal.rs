use crate::utilities::scalar::Scalar;

/// An unsigned decimal literal such as `1119.63`, held exactly as
/// `mantissa / 10^scale`.
///
/// # Remarks
///
/// Literals with more significant digits than fit into an [i128] keep only the
/// float approximation; [Decimal::scale_by] then degrades to float math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decimal {
    exact: Option<(i128, u32)>,
    approximate: f64,
}

impl Decimal {
    /// Parses `[0-9]+(\.[0-9]*)?` or `\.[0-9]+`.
    ///
    /// # Returns
    ///
    /// `None` if the text is not a plain unsigned decimal literal.
    pub fn parse(text: &str) -> Option<Self> {
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return None;
        }

        // Trailing zeros in the fraction don't change the value; dropping them
        // keeps the scale (and the divisor) as small as possible.
        let fraction = fraction.trim_end_matches('0');
        let exact = whole
            .bytes()
            .chain(fraction.bytes())
            .try_fold(0i128, |mantissa, digit| {
                mantissa
                    .checked_mul(10)?
                    .checked_add((digit - b'0') as i128)
            })
            .and_then(|mantissa| u32::try_from(fraction.len()).ok().map(|scale| (mantissa, scale)));

        Some(Decimal {
            exact,
            approximate: text.parse::<f64>().ok()?,
        })
    }

    /// Multiplies the literal by an integer factor.
    ///
    /// The result is an exact integer when `mantissa * factor` is divisible by
    /// `10^scale`; otherwise it is the nearest float.
    pub fn scale_by(&self, factor: i128) -> Scalar {
        let exact = self.exact.and_then(|(mantissa, scale)| {
            let numerator = mantissa.checked_mul(factor)?;
            let denominator = 10i128.checked_pow(scale)?;
            Some((numerator, denominator))
        });

        match exact {
            Some((numerator, denominator)) if numerator % denominator == 0 => {
                Scalar::Int(numerator / denominator)
            }
            Some((numerator, denominator)) => {
                Scalar::from_f64(numerator as f64 / denominator as f64)
            }
            None => Scalar::from_f64(self.approximate * factor as f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(text,
        case(""),
        case("."),
        case("1.2.3"),
        case("-1"),
        case("1e5"),
        case("+2"),
        case(" 2")
    )]
    fn rejects_non_literals(text: &str) {
        assert_eq!(Decimal::parse(text), None);
    }

    #[rstest(text, factor, expected,
        case("2", 8, Scalar::Int(16)),
        case("1.", 8, Scalar::Int(8)),
        case(".5", 8, Scalar::Int(4)),
        case("1119.63", 8_000_000_000_000, Scalar::Int(8_957_040_000_000_000)),
        case("0.500", 8, Scalar::Int(4)),
        case("0.1", 1, Scalar::Float(0.1))
    )]
    fn scales_exactly(text: &str, factor: i128, expected: Scalar) {
        let decimal = Decimal::parse(text).unwrap();
        assert_eq!(decimal.scale_by(factor), expected);
    }

    #[test]
    fn huge_literals_fall_back_to_float() {
        let text = "1".repeat(50);
        let decimal = Decimal::parse(&text).unwrap();
        assert!(matches!(decimal.scale_by(8), Scalar::Float(_)));
    }
}
