//! Numeric boundary: coercion of raw inputs into [`Decimal`] and fixed-point formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Failure to obtain a finite number, either from an input or from a formula.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("invalid numeric input for {field}: {input:?}")]
    InvalidNumericInput { field: &'static str, input: String },
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
}

/// A value that can be coerced into a number.
///
/// Text follows [`parse_number`]; floats must be finite. `None` means the
/// value is not a usable number.
pub trait Numeric {
    fn to_decimal(&self) -> Option<Decimal>;

    /// Raw form of the value, used in error reports.
    fn describe(&self) -> String;
}

impl Numeric for str {
    fn to_decimal(&self) -> Option<Decimal> {
        parse_number(self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Numeric for String {
    fn to_decimal(&self) -> Option<Decimal> {
        parse_number(self)
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl Numeric for Decimal {
    fn to_decimal(&self) -> Option<Decimal> {
        Some(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Numeric for f64 {
    fn to_decimal(&self) -> Option<Decimal> {
        if self.is_finite() {
            parse_number(&self.to_string())
        } else {
            None
        }
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl Numeric for f32 {
    fn to_decimal(&self) -> Option<Decimal> {
        f64::from(*self).to_decimal()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

macro_rules! impl_numeric_for_int {
    ($($ty:ty),*) => {
        $(
            impl Numeric for $ty {
                fn to_decimal(&self) -> Option<Decimal> {
                    Some(Decimal::from(*self))
                }

                fn describe(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

impl_numeric_for_int!(i32, i64, u32, u64);

impl<T: Numeric> Numeric for Option<T> {
    fn to_decimal(&self) -> Option<Decimal> {
        self.as_ref().and_then(Numeric::to_decimal)
    }

    fn describe(&self) -> String {
        self.as_ref()
            .map_or_else(|| "<missing>".to_string(), Numeric::describe)
    }
}

impl<T: Numeric + ?Sized> Numeric for &T {
    fn to_decimal(&self) -> Option<Decimal> {
        (**self).to_decimal()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Parse user text as a number.
///
/// Surrounding whitespace is ignored and a blank string counts as zero, the
/// way an emptied form field does. Plain and scientific notation are
/// accepted; `NaN`, `Infinity` and digit separators are not.
pub fn parse_number(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Decimal::ZERO);
    }
    if text.contains('_') {
        return None;
    }
    match text.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exponent)) => parse_scientific(mantissa, exponent),
        None => Decimal::from_str(text).ok(),
    }
}

/// `mantissa * 10^exponent`. Digits beyond the 28th decimal place round away,
/// so a tiny value becomes zero; a value past [`Decimal::MAX`] is `None`.
fn parse_scientific(mantissa: &str, exponent: &str) -> Option<Decimal> {
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;
    if value.is_zero() {
        return Some(Decimal::ZERO);
    }
    for _ in 0..exponent.unsigned_abs() {
        value = if exponent > 0 {
            value.checked_mul(Decimal::TEN)?
        } else {
            value.checked_div(Decimal::TEN)?
        };
        if value.is_zero() {
            break;
        }
    }
    Some(value)
}

/// Coerce `value` or report which field was unusable.
pub fn require<T: Numeric + ?Sized>(field: &'static str, value: &T) -> Result<Decimal, CalcError> {
    value.to_decimal().ok_or_else(|| CalcError::InvalidNumericInput {
        field,
        input: value.describe(),
    })
}

/// Fixed-point rendering with `decimals` digits, rounding half away from zero.
///
/// Never uses scientific notation, and a value that rounds to zero loses its sign.
pub fn format_fixed(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let rounded = if rounded.is_zero() { Decimal::ZERO } else { rounded };
    format!("{:.*}", decimals as usize, rounded)
}
