//! Amortized loan formulas.
//!
//! A loan of principal `P` at a monthly rate `i` over `m` months is repaid by a
//! constant payment `P*i / (1 - (1+i)^-m)`.

use super::number::CalcError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Loan term in months.
pub fn term_months(years: Decimal) -> Result<Decimal, CalcError> {
    years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or(CalcError::NonFinite("loan term"))
}

/// Monthly rate from an annual nominal percentage.
pub fn monthly_rate(annual_rate_pct: Decimal) -> Result<Decimal, CalcError> {
    annual_rate_pct
        .checked_div(dec!(100))
        .and_then(|rate| rate.checked_div(MONTHS_PER_YEAR))
        .ok_or(CalcError::NonFinite("monthly rate"))
}

/// `base` raised to `periods`, which may be fractional.
fn compound(base: Decimal, periods: Decimal) -> Result<Decimal, CalcError> {
    let factor = if periods.fract().is_zero() {
        periods.to_i64().and_then(|n| base.checked_powi(n))
    } else {
        base.checked_powd(periods)
    };
    factor.ok_or(CalcError::NonFinite("compound factor"))
}

/// Constant monthly payment repaying `principal` over `years`.
///
/// Evaluated as `P*i / (1 - d)` with the discount factor `d = (1/(1+i))^m`,
/// which shrinks towards zero for long terms or high rates. At a zero rate
/// the factor `i / (1 - d)` tends to `1/m`, so the payment is `P/m`. A zero
/// term has no finite payment.
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    years: Decimal,
) -> Result<Decimal, CalcError> {
    let months = term_months(years)?;
    let rate = monthly_rate(annual_rate_pct)?;

    if rate.is_zero() {
        return principal
            .checked_div(months)
            .ok_or(CalcError::NonFinite("monthly payment"));
    }

    let per_period = Decimal::ONE
        .checked_add(rate)
        .and_then(|growth| Decimal::ONE.checked_div(growth))
        .ok_or(CalcError::NonFinite("discount factor"))?;
    let discount = compound(per_period, months)?;
    principal
        .checked_mul(rate)
        .and_then(|amount| amount.checked_div(Decimal::ONE - discount))
        .ok_or(CalcError::NonFinite("monthly payment"))
}

/// Interest paid over the whole term for a given monthly payment.
///
/// Each payment is split into the straight-line principal share `P/m` and
/// interest; the interest share is summed over `m` months.
pub fn total_interest(
    principal: Decimal,
    years: Decimal,
    monthly_payment: Decimal,
) -> Result<Decimal, CalcError> {
    let months = term_months(years)?;
    principal
        .checked_div(months)
        .and_then(|principal_per_month| monthly_payment.checked_sub(principal_per_month))
        .and_then(|interest_per_month| interest_per_month.checked_mul(months))
        .ok_or(CalcError::NonFinite("total mortgage interest"))
}

/// Principal plus interest.
pub fn total_cost(principal: Decimal, total_interest: Decimal) -> Result<Decimal, CalcError> {
    principal
        .checked_add(total_interest)
        .ok_or(CalcError::NonFinite("total mortgage cost"))
}
