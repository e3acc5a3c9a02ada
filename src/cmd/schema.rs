//! Schema command - print the scenario input format

use clap::Args;
use schemars::schema_for;
use yieldc::core::{field_descriptions, InvestmentInput};

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or fields
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the scenario file
    JsonSchema,
    /// Field names with descriptions
    Fields,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => self.print_json_schema(),
            SchemaFormat::Fields => self.print_fields(),
        }
    }

    fn print_json_schema(&self) -> anyhow::Result<()> {
        let schema = schema_for!(InvestmentInput);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        Ok(())
    }

    fn print_fields(&self) -> anyhow::Result<()> {
        println!("Scenario Input Format");
        println!("=====================");
        println!();
        for (name, description) in field_descriptions() {
            println!("{:16}  {}", name, description);
        }
        println!();
        println!("Values may be JSON numbers or strings; a blank string counts as zero.");
        println!("Missing or non-numeric values make dependent results fall back to 0.");
        Ok(())
    }
}
