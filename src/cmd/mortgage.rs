//! Mortgage command - repayment figures for a single loan

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use yieldc::core::{calculator, format_fixed, mortgage, require};

#[derive(Args, Debug)]
pub struct MortgageCommand {
    /// Amount borrowed, insurance included
    #[arg(short, long)]
    principal: String,

    /// Annual nominal interest rate, in percent
    #[arg(short, long, allow_hyphen_values = true)]
    rate: String,

    /// Loan duration in years
    #[arg(short, long)]
    years: String,

    /// Decimals shown for amounts
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=28))]
    decimals: u32,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct MortgageSummary {
    months: String,
    monthly_payment: String,
    total_interest: String,
    total_cost: String,
}

impl MortgageCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        // Unlike `report`, bad input is an error here rather than a fallback value
        require("principal", self.principal.as_str())?;
        require("rate", self.rate.as_str())?;
        let years = require("years", self.years.as_str())?;
        let months = mortgage::term_months(years)?;
        if months <= Decimal::ZERO {
            anyhow::bail!("Loan duration must be greater than zero, got {}", self.years);
        }

        let monthly_payment = calculator::monthly_mortgage_payment_with_decimals(
            &self.principal,
            &self.rate,
            &self.years,
            self.decimals,
        );
        let total_interest = calculator::total_mortgage_interest_with_decimals(
            &self.principal,
            &self.years,
            &monthly_payment,
            self.decimals,
        );
        let total_cost =
            calculator::total_mortgage_cost_with_decimals(&self.principal, &total_interest, self.decimals);

        let summary = MortgageSummary {
            months: format_fixed(months, 0),
            monthly_payment,
            total_interest,
            total_cost,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            self.print_summary(&summary);
        }
        Ok(())
    }

    fn print_summary(&self, summary: &MortgageSummary) {
        println!();
        println!(
            "MORTGAGE ({} at {}% over {} years)",
            self.principal, self.rate, self.years
        );
        println!();
        println!("  Months: {}", summary.months);
        println!("  Monthly payment: {} €", summary.monthly_payment);
        println!("  Total interest: {} €", summary.total_interest);
        println!("  Total credit cost: {} €", summary.total_cost);
        println!();
    }
}
