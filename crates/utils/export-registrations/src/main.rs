//! # Export Registrations Utility
//!
//! Writes every stored registration to a CSV file for the club organisers.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package export-registrations --bin export_registrations -- registrations.csv
//! ```
//!
//! Without an argument the CSV goes to stdout. `DATABASE_URL` selects the
//! database, as for the endpoint.

mod csv;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use lib_core::{create_pool, Config, RegistrationRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = Config::from_env().map_err(anyhow::Error::msg)?.database_url;
    let output = std::env::args().nth(1);

    eprintln!("Connecting to {}...", database_url);
    let pool = create_pool(&database_url).await?;

    let rows = RegistrationRepository::list(&pool).await?;
    if rows.is_empty() {
        eprintln!("No registrations found.");
    }

    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut writer = BufWriter::new(writer);
    csv::write_registrations(&mut writer, &rows)?;
    writer.flush()?;

    if let Some(path) = output {
        eprintln!("Exported {} registration(s) to {}", rows.len(), path);
    }

    Ok(())
}
