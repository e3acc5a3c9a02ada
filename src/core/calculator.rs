//! String-in, string-out investment metrics.
//!
//! Every function coerces its arguments through [`Numeric`], applies the typed
//! formula and renders the result with a fixed number of decimals. An argument
//! that is not a number, or a result with no finite value, renders as
//! [`FALLBACK`]. Callers that need to tell a real zero from an invalid input
//! should use the typed formulas in [`purchase`], [`mortgage`] and [`rental`].

use super::mortgage;
use super::number::{format_fixed, require, CalcError, Numeric};
use super::purchase;
use super::rental;
use rust_decimal::Decimal;

/// Rendered in place of any value that is not a finite number.
pub const FALLBACK: &str = "0";

/// Decimals used for monetary amounts.
pub const AMOUNT_DECIMALS: u32 = 0;

/// Decimals used for yield percentages.
pub const YIELD_DECIMALS: u32 = 2;

fn render(
    metric: &'static str,
    decimals: u32,
    compute: impl FnOnce() -> Result<Decimal, CalcError>,
) -> String {
    match compute() {
        Ok(value) => format_fixed(value, decimals),
        Err(err) => {
            log::debug!("{metric}: {err}");
            FALLBACK.to_string()
        }
    }
}

/// Decimals used when rendering each kind of metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
    pub amount: u32,
    pub percent: u32,
}

impl Default for Precision {
    fn default() -> Self {
        Precision {
            amount: AMOUNT_DECIMALS,
            percent: YIELD_DECIMALS,
        }
    }
}

pub fn total_purchase_price(
    housing_price: impl Numeric,
    notary_fees: impl Numeric,
    house_works: impl Numeric,
) -> String {
    total_purchase_price_with_decimals(housing_price, notary_fees, house_works, AMOUNT_DECIMALS)
}

pub fn total_purchase_price_with_decimals(
    housing_price: impl Numeric,
    notary_fees: impl Numeric,
    house_works: impl Numeric,
    decimals: u32,
) -> String {
    render("total purchase price", decimals, || {
        purchase::total_price(
            require("housing_price", &housing_price)?,
            require("notary_fees", &notary_fees)?,
            require("house_works", &house_works)?,
        )
    })
}

/// Monthly repayment of an amortized loan. A zero rate spreads the principal
/// evenly; a zero term renders as [`FALLBACK`].
pub fn monthly_mortgage_payment(
    principal: impl Numeric,
    annual_rate_pct: impl Numeric,
    years: impl Numeric,
) -> String {
    monthly_mortgage_payment_with_decimals(principal, annual_rate_pct, years, AMOUNT_DECIMALS)
}

pub fn monthly_mortgage_payment_with_decimals(
    principal: impl Numeric,
    annual_rate_pct: impl Numeric,
    years: impl Numeric,
    decimals: u32,
) -> String {
    render("monthly mortgage payment", decimals, || {
        mortgage::monthly_payment(
            require("principal", &principal)?,
            require("annual_rate_pct", &annual_rate_pct)?,
            require("years", &years)?,
        )
    })
}

pub fn total_mortgage_interest(
    principal: impl Numeric,
    years: impl Numeric,
    monthly_payment: impl Numeric,
) -> String {
    total_mortgage_interest_with_decimals(principal, years, monthly_payment, AMOUNT_DECIMALS)
}

pub fn total_mortgage_interest_with_decimals(
    principal: impl Numeric,
    years: impl Numeric,
    monthly_payment: impl Numeric,
    decimals: u32,
) -> String {
    render("total mortgage interest", decimals, || {
        mortgage::total_interest(
            require("principal", &principal)?,
            require("years", &years)?,
            require("monthly_payment", &monthly_payment)?,
        )
    })
}

pub fn total_mortgage_cost(principal: impl Numeric, total_interest: impl Numeric) -> String {
    total_mortgage_cost_with_decimals(principal, total_interest, AMOUNT_DECIMALS)
}

pub fn total_mortgage_cost_with_decimals(
    principal: impl Numeric,
    total_interest: impl Numeric,
    decimals: u32,
) -> String {
    render("total mortgage cost", decimals, || {
        mortgage::total_cost(
            require("principal", &principal)?,
            require("total_interest", &total_interest)?,
        )
    })
}

pub fn net_monthly_income(
    annual_rent: impl Numeric,
    annual_charges: impl Numeric,
    annual_tax: impl Numeric,
) -> String {
    net_monthly_income_with_decimals(annual_rent, annual_charges, annual_tax, AMOUNT_DECIMALS)
}

pub fn net_monthly_income_with_decimals(
    annual_rent: impl Numeric,
    annual_charges: impl Numeric,
    annual_tax: impl Numeric,
    decimals: u32,
) -> String {
    render("net monthly income", decimals, || {
        rental::net_monthly_income(
            require("annual_rent", &annual_rent)?,
            require("annual_charges", &annual_charges)?,
            require("annual_tax", &annual_tax)?,
        )
    })
}

/// Total price minus loan amount. Not clamped at zero.
pub fn down_payment(loan_amount: impl Numeric, total_price: impl Numeric) -> String {
    down_payment_with_decimals(loan_amount, total_price, AMOUNT_DECIMALS)
}

pub fn down_payment_with_decimals(
    loan_amount: impl Numeric,
    total_price: impl Numeric,
    decimals: u32,
) -> String {
    render("down payment", decimals, || {
        purchase::down_payment(
            require("loan_amount", &loan_amount)?,
            require("total_price", &total_price)?,
        )
    })
}

/// Yield as a percentage with two decimals.
///
/// A zero cost renders as `"0"`, not `"0.00"`, while a zero income over a
/// real cost renders as `"0.00"`.
pub fn gross_yield(annual_income: impl Numeric, total_cost: impl Numeric) -> String {
    gross_yield_with_decimals(annual_income, total_cost, YIELD_DECIMALS)
}

pub fn gross_yield_with_decimals(
    annual_income: impl Numeric,
    total_cost: impl Numeric,
    decimals: u32,
) -> String {
    render("gross yield", decimals, || {
        rental::gross_yield(
            require("annual_income", &annual_income)?,
            require("total_cost", &total_cost)?,
        )
    })
}

/// Net annual income (rent less charges and property tax) as a percentage of
/// the total cost, with the same rendering as [`gross_yield`].
pub fn net_yield(
    annual_rent: impl Numeric,
    annual_charges: impl Numeric,
    annual_tax: impl Numeric,
    total_cost: impl Numeric,
) -> String {
    net_yield_with_decimals(annual_rent, annual_charges, annual_tax, total_cost, YIELD_DECIMALS)
}

pub fn net_yield_with_decimals(
    annual_rent: impl Numeric,
    annual_charges: impl Numeric,
    annual_tax: impl Numeric,
    total_cost: impl Numeric,
    decimals: u32,
) -> String {
    render("net yield", decimals, || {
        let income = rental::net_annual_income(
            require("annual_rent", &annual_rent)?,
            require("annual_charges", &annual_charges)?,
            require("annual_tax", &annual_tax)?,
        )?;
        rental::gross_yield(income, require("total_cost", &total_cost)?)
    })
}
