use super::number::CalcError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rent left after charges and property tax, per year.
pub fn net_annual_income(
    annual_rent: Decimal,
    annual_charges: Decimal,
    annual_tax: Decimal,
) -> Result<Decimal, CalcError> {
    annual_rent
        .checked_sub(annual_charges)
        .and_then(|income| income.checked_sub(annual_tax))
        .ok_or(CalcError::NonFinite("net annual income"))
}

/// Net rental income per month. May be negative.
pub fn net_monthly_income(
    annual_rent: Decimal,
    annual_charges: Decimal,
    annual_tax: Decimal,
) -> Result<Decimal, CalcError> {
    net_annual_income(annual_rent, annual_charges, annual_tax)?
        .checked_div(dec!(12))
        .ok_or(CalcError::NonFinite("net monthly income"))
}

/// Annual income as a percentage of the total cost.
pub fn gross_yield(annual_income: Decimal, total_cost: Decimal) -> Result<Decimal, CalcError> {
    annual_income
        .checked_div(total_cost)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(CalcError::NonFinite("gross yield"))
}
