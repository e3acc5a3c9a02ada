pub mod mortgage;
pub mod report;
pub mod schema;

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use yieldc::core::{read_investment_json, InvestmentInput};

/// Read an investment scenario (JSON) from a file, or stdin with "-"
pub fn read_investment(path: &Path) -> anyhow::Result<InvestmentInput> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        read_from_file(path)
    }
}

fn read_from_file(path: &Path) -> anyhow::Result<InvestmentInput> {
    let file = File::open(path)?;
    let input = read_investment_json(BufReader::new(file))?;
    log::debug!("read scenario from {}", path.display());
    Ok(input)
}

fn read_from_stdin() -> anyhow::Result<InvestmentInput> {
    let stdin = io::stdin();
    let mut reader = BufReader::new(stdin.lock());

    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a file or pipe data to stdin.");
    }

    let input = read_investment_json(io::Cursor::new(buffer))?;
    Ok(input)
}
