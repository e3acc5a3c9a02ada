use super::number::CalcError;
use rust_decimal::Decimal;

/// Total acquisition cost: housing price plus notary fees plus works.
pub fn total_price(
    housing_price: Decimal,
    notary_fees: Decimal,
    house_works: Decimal,
) -> Result<Decimal, CalcError> {
    housing_price
        .checked_add(notary_fees)
        .and_then(|sum| sum.checked_add(house_works))
        .ok_or(CalcError::NonFinite("total purchase price"))
}

/// Share of the total price not covered by the loan.
///
/// Negative when the loan exceeds the price; the value is not clamped.
pub fn down_payment(loan_amount: Decimal, total_price: Decimal) -> Result<Decimal, CalcError> {
    total_price
        .checked_sub(loan_amount)
        .ok_or(CalcError::NonFinite("down payment"))
}
