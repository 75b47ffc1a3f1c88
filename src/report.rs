use std::fmt::Display;

use crate::{
    error::FetchError,
    schema::{PlayerRecord, StatField},
};

/// Field-per-line rendering of a record.  Missing name or country lines are left out.
pub struct Report<'a>(pub &'a PlayerRecord);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let record = self.0;
        if let Some(name) = record.name() {
            writeln!(f, "Name: {name}")?;
        }
        if let Some(country) = record.country() {
            writeln!(f, "Country: {country}")?;
        }
        for field in StatField::all() {
            writeln!(f, "{field}: {}", record.get(field))?;
        }
        Ok(())
    }
}

/// The one line shown when no record could be produced.
pub struct Failure<'a>(pub &'a FetchError);

impl Display for Failure<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to retrieve player statistics: {}", self.0)
    }
}

pub fn print(record: &PlayerRecord) {
    println!("\nPlayer Information:");
    print!("{}", Report(record));
}
