pub mod calculator;
pub mod investment;
pub mod mortgage;
pub mod number;
pub mod purchase;
pub mod rental;

// Flat public surface for domain types and functions.
pub use calculator::{
    down_payment, gross_yield, monthly_mortgage_payment, net_monthly_income, net_yield,
    total_mortgage_cost, total_mortgage_interest, total_purchase_price, Precision, FALLBACK,
};
pub use investment::{
    field_descriptions, read_investment_json, InputValue, InvestmentInput, InvestmentReport, LoanInput,
    PurchaseInput, RentalInput, ReportLine, Unit,
};
pub use number::{format_fixed, parse_number, require, CalcError, Numeric};
