use reqwest::StatusCode;
use thiserror::Error;

use crate::schema::Discipline;

/// Errors that stop the pipeline without producing a record.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Could not find a profile page for {query:?}.  Check player name spelling.")]
    Resolution { query: String },
    #[error("Could not fetch player profile details: profile container not found")]
    ProfileNotFound,
    #[error("Could not find player statistics: expected 2 statistics tables, found {found}")]
    StatsNotFound { found: usize },
    #[error("The {table} table has {len} numeric cells, but cell #{index} was requested")]
    StatsLayout {
        table: Discipline,
        index: usize,
        len: usize,
    },
    #[error("Invalid page address {0:?}: {1}")]
    InvalidUrl(String, url::ParseError),
    #[error("Server returned {status} for {url}")]
    Status { url: String, status: StatusCode },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Which piece of basic player information was missing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, derive_more::Display)]
pub enum BasicInfoField {
    #[display("name")]
    Name,
    #[display("country")]
    Country,
}

/// A non-fatal problem: the record is still produced, without the named field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("Could not find basic player information: {field} element not found")]
pub struct BasicInfoWarning {
    pub field: BasicInfoField,
}

/// A successfully produced value together with the non-fatal problems met on the way.
#[derive(Clone, PartialEq, Debug)]
pub struct Scraped<T> {
    pub value: T,
    pub warnings: Vec<BasicInfoWarning>,
}
impl<T> Scraped<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Scraped<U> {
        Scraped {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    pub fn is_partial(&self) -> bool {
        !self.warnings.is_empty()
    }
}
