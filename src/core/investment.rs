//! Investment scenario: the grouped purchase, loan and rental inputs and the
//! report derived from them.

use super::calculator::{self, Precision};
use super::number::{require, CalcError, Numeric};
use rust_decimal::Decimal;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

/// A raw input as entered: either a JSON number or free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

impl Numeric for InputValue {
    fn to_decimal(&self) -> Option<Decimal> {
        match self {
            InputValue::Number(n) => n.to_decimal(),
            InputValue::Text(s) => s.to_decimal(),
        }
    }

    fn describe(&self) -> String {
        match self {
            InputValue::Number(n) => n.to_string(),
            InputValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for InputValue {
    fn from(text: &str) -> Self {
        InputValue::Text(text.to_string())
    }
}

impl From<String> for InputValue {
    fn from(text: String) -> Self {
        InputValue::Text(text)
    }
}

impl From<f64> for InputValue {
    fn from(n: f64) -> Self {
        InputValue::Number(n)
    }
}

/// Purchase side of the investment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseInput {
    /// Price of the property
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub housing_price: Option<InputValue>,
    /// Notary fees paid on purchase
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notary_fees: Option<InputValue>,
    /// Renovation works budget
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub house_works: Option<InputValue>,
}

/// Bank loan financing the purchase
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoanInput {
    /// Amount borrowed, insurance included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_loan: Option<InputValue>,
    /// Annual nominal interest rate, in percent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_rate: Option<InputValue>,
    /// Loan duration in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_loan_period: Option<InputValue>,
}

/// Rental income and recurring costs, all annual
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RentalInput {
    /// Annual rent, charges included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rent: Option<InputValue>,
    /// Annual co-ownership charges
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_charges: Option<InputValue>,
    /// Annual property tax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_tax: Option<InputValue>,
}

/// Input root for a scenario file. All fields sit in one flat object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct InvestmentInput {
    #[serde(flatten)]
    pub purchase: PurchaseInput,
    #[serde(flatten)]
    pub loan: LoanInput,
    #[serde(flatten)]
    pub rental: RentalInput,
}

impl InvestmentInput {
    /// Every input with its serialized name, in form order.
    pub fn fields(&self) -> [(&'static str, &Option<InputValue>); 9] {
        [
            ("housingPrice", &self.purchase.housing_price),
            ("notaryFees", &self.purchase.notary_fees),
            ("houseWorks", &self.purchase.house_works),
            ("bankLoan", &self.loan.bank_loan),
            ("bankRate", &self.loan.bank_rate),
            ("bankLoanPeriod", &self.loan.bank_loan_period),
            ("rent", &self.rental.rent),
            ("rentalCharges", &self.rental.rental_charges),
            ("propertyTax", &self.rental.property_tax),
        ]
    }

    /// Inputs that are missing or not numbers.
    ///
    /// Evaluation still succeeds with these; the affected metrics render as the
    /// fallback value.
    pub fn validate(&self) -> Vec<CalcError> {
        self.fields()
            .into_iter()
            .filter_map(|(field, value)| require(field, value).err())
            .collect()
    }

    /// Derive every metric with the default precision.
    pub fn evaluate(&self) -> InvestmentReport {
        self.evaluate_with(Precision::default())
    }

    /// Derive every metric, feeding formatted intermediate results into the
    /// metrics that depend on them.
    pub fn evaluate_with(&self, precision: Precision) -> InvestmentReport {
        let Precision { amount, percent } = precision;
        let PurchaseInput {
            housing_price,
            notary_fees,
            house_works,
        } = &self.purchase;
        let LoanInput {
            bank_loan,
            bank_rate,
            bank_loan_period,
        } = &self.loan;
        let RentalInput {
            rent,
            rental_charges,
            property_tax,
        } = &self.rental;

        let total_purchase_price = calculator::total_purchase_price_with_decimals(
            housing_price,
            notary_fees,
            house_works,
            amount,
        );
        let down_payment =
            calculator::down_payment_with_decimals(bank_loan, &total_purchase_price, amount);

        let monthly_mortgage_payment = calculator::monthly_mortgage_payment_with_decimals(
            bank_loan,
            bank_rate,
            bank_loan_period,
            amount,
        );
        let total_mortgage_interest = calculator::total_mortgage_interest_with_decimals(
            bank_loan,
            bank_loan_period,
            &monthly_mortgage_payment,
            amount,
        );
        let total_mortgage_cost =
            calculator::total_mortgage_cost_with_decimals(bank_loan, &total_mortgage_interest, amount);

        let net_monthly_income = calculator::net_monthly_income_with_decimals(
            rent,
            rental_charges,
            property_tax,
            amount,
        );
        let gross_yield =
            calculator::gross_yield_with_decimals(rent, &total_purchase_price, percent);
        let net_yield = calculator::net_yield_with_decimals(
            rent,
            rental_charges,
            property_tax,
            &total_purchase_price,
            percent,
        );

        InvestmentReport {
            total_purchase_price,
            down_payment,
            monthly_mortgage_payment,
            total_mortgage_interest,
            total_mortgage_cost,
            net_monthly_income,
            gross_yield,
            net_yield,
        }
    }
}

/// Serialized name and documented description of every input, in form order.
///
/// Descriptions come from the generated JSON schema.
pub fn field_descriptions() -> Vec<(&'static str, String)> {
    let schema = serde_json::to_value(schema_for!(InvestmentInput)).unwrap_or_default();
    InvestmentInput::default()
        .fields()
        .iter()
        .map(|(name, _)| {
            let description = schema["properties"][*name]["description"]
                .as_str()
                .unwrap_or_default()
                .to_string();
            (*name, description)
        })
        .collect()
}

/// Read a scenario from JSON.
pub fn read_investment_json<R: Read>(reader: R) -> Result<InvestmentInput, serde_json::Error> {
    serde_json::from_reader(reader)
}

/// Derived metrics, already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReport {
    pub total_purchase_price: String,
    pub down_payment: String,
    pub monthly_mortgage_payment: String,
    pub total_mortgage_interest: String,
    pub total_mortgage_cost: String,
    pub net_monthly_income: String,
    pub gross_yield: String,
    pub net_yield: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Amount,
    Percent,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Amount => write!(f, "€"),
            Unit::Percent => write!(f, "%"),
        }
    }
}

/// One labelled metric of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub section: &'static str,
    pub metric: &'static str,
    pub value: String,
    pub unit: Unit,
}

impl InvestmentReport {
    pub fn lines(&self) -> Vec<ReportLine> {
        let line = |section, metric, value: &String, unit| ReportLine {
            section,
            metric,
            value: value.clone(),
            unit,
        };
        vec![
            line("Purchase", "Total investment cost", &self.total_purchase_price, Unit::Amount),
            line("Purchase", "Down payment", &self.down_payment, Unit::Amount),
            line("Loan", "Monthly payment", &self.monthly_mortgage_payment, Unit::Amount),
            line("Loan", "Total interest", &self.total_mortgage_interest, Unit::Amount),
            line("Loan", "Total credit cost", &self.total_mortgage_cost, Unit::Amount),
            line("Rental", "Net monthly income", &self.net_monthly_income, Unit::Amount),
            line("Rental", "Gross yield", &self.gross_yield, Unit::Percent),
            line("Rental", "Net yield", &self.net_yield, Unit::Percent),
        ]
    }
}
