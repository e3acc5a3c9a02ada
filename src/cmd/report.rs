//! Report command - every derived metric of an investment scenario

use crate::cmd::read_investment;
use clap::Args;
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};
use yieldc::core::{InputValue, InvestmentInput, InvestmentReport, Precision, ReportLine};

#[derive(Args, Debug)]
pub struct ReportCommand {
    /// JSON file containing the scenario inputs ("-" for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Price of the property
    #[arg(long, allow_hyphen_values = true)]
    housing_price: Option<String>,

    /// Notary fees paid on purchase
    #[arg(long, allow_hyphen_values = true)]
    notary_fees: Option<String>,

    /// Renovation works budget
    #[arg(long, allow_hyphen_values = true)]
    house_works: Option<String>,

    /// Amount borrowed, insurance included
    #[arg(long, allow_hyphen_values = true)]
    bank_loan: Option<String>,

    /// Annual nominal interest rate, in percent
    #[arg(long, allow_hyphen_values = true)]
    bank_rate: Option<String>,

    /// Loan duration in years
    #[arg(long, allow_hyphen_values = true)]
    bank_loan_period: Option<String>,

    /// Annual rent, charges included
    #[arg(long, allow_hyphen_values = true)]
    rent: Option<String>,

    /// Annual co-ownership charges
    #[arg(long, allow_hyphen_values = true)]
    rental_charges: Option<String>,

    /// Annual property tax
    #[arg(long, allow_hyphen_values = true)]
    property_tax: Option<String>,

    /// Decimals shown for amounts
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=28))]
    amount_decimals: u32,

    /// Decimals shown for yields
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=28))]
    yield_decimals: u32,

    /// Output as JSON instead of formatted table
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct ReportOutput<'a> {
    input: &'a InvestmentInput,
    report: &'a InvestmentReport,
    warnings: Vec<String>,
}

/// Row for the report table output
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ReportRow {
    #[tabled(rename = "Section")]
    pub section: String,

    #[tabled(rename = "Metric")]
    pub metric: String,

    #[tabled(rename = "Value")]
    pub value: String,

    #[tabled(rename = "Unit")]
    pub unit: String,
}

impl From<ReportLine> for ReportRow {
    fn from(line: ReportLine) -> Self {
        ReportRow {
            section: line.section.to_string(),
            metric: line.metric.to_string(),
            value: line.value,
            unit: line.unit.to_string(),
        }
    }
}

impl ReportCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let mut input = match &self.input {
            Some(path) => read_investment(path)?,
            None => InvestmentInput::default(),
        };
        self.apply_overrides(&mut input);

        // Invalid fields still produce a report, with fallback values
        let warnings: Vec<String> = input.validate().iter().map(ToString::to_string).collect();
        for warning in &warnings {
            log::warn!("{}", warning);
        }

        let report = input.evaluate_with(Precision {
            amount: self.amount_decimals,
            percent: self.yield_decimals,
        });
        let rows: Vec<ReportRow> = report.lines().into_iter().map(ReportRow::from).collect();

        if self.json {
            let output = ReportOutput {
                input: &input,
                report: &report,
                warnings,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        } else if self.csv {
            self.write_csv(&rows)
        } else {
            self.print_table(&rows);
            Ok(())
        }
    }

    /// Flags take precedence over values read from the input file.
    fn apply_overrides(&self, input: &mut InvestmentInput) {
        let overrides = [
            (&self.housing_price, &mut input.purchase.housing_price),
            (&self.notary_fees, &mut input.purchase.notary_fees),
            (&self.house_works, &mut input.purchase.house_works),
            (&self.bank_loan, &mut input.loan.bank_loan),
            (&self.bank_rate, &mut input.loan.bank_rate),
            (&self.bank_loan_period, &mut input.loan.bank_loan_period),
            (&self.rent, &mut input.rental.rent),
            (&self.rental_charges, &mut input.rental.rental_charges),
            (&self.property_tax, &mut input.rental.property_tax),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = Some(InputValue::from(value.as_str()));
            }
        }
    }

    fn print_table(&self, rows: &[ReportRow]) {
        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn write_csv(&self, rows: &[ReportRow]) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_writer(io::stdout());
        for row in rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yieldc::core::field_descriptions;

    fn snake_case(name: &str) -> String {
        let mut id = String::new();
        for c in name.chars() {
            if c.is_ascii_uppercase() {
                id.push('_');
            }
            id.push(c.to_ascii_lowercase());
        }
        id
    }

    #[test]
    fn flag_help_matches_input_descriptions() {
        let command = ReportCommand::augment_args(clap::Command::new("report"));
        for (name, description) in field_descriptions() {
            let id = snake_case(name);
            let arg = command
                .get_arguments()
                .find(|arg| arg.get_id() == id.as_str())
                .unwrap_or_else(|| panic!("no flag for {name}"));
            let help = arg.get_help().map(ToString::to_string);
            assert_eq!(help.as_deref(), Some(description.as_str()), "{name}");
        }
    }
}
