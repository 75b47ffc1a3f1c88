use enum_map::EnumMap;
use itertools::Itertools;
use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};
use strum::IntoEnumIterator;
use url::Url;

use crate::{
    client::PageSource,
    error::{BasicInfoField, BasicInfoWarning, FetchError, Scraped},
    schema::{Discipline, Format, StatKind},
    site::ProfileSite,
};

pub type RawStats = EnumMap<Format, EnumMap<StatKind, String>>;

/// Text extracted from a profile page, before any numeric interpretation.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct RawProfile {
    pub name: Option<String>,
    pub country: Option<String>,
    pub stats: RawStats,
}

pub async fn scrape<S: ProfileSite>(
    source: &impl PageSource,
    url: &Url,
) -> Result<Scraped<RawProfile>, FetchError> {
    let markup = source.fetch(url).await?;
    parse_profile::<S>(&Html::parse_document(&markup))
}

pub fn parse_profile<S: ProfileSite>(html: &Html) -> Result<Scraped<RawProfile>, FetchError> {
    let container = html
        .select(S::profile_container_selector())
        .next()
        .ok_or(FetchError::ProfileNotFound)?;

    let mut warnings = vec![];
    let mut basic_info = |selector: &Selector, field| {
        let text = container.select(selector).next().map(text_of);
        if text.is_none() {
            let warning = BasicInfoWarning { field };
            warn!("{warning}");
            warnings.push(warning);
        }
        text
    };
    let name = basic_info(S::name_selector(), BasicInfoField::Name);
    let country = basic_info(S::country_selector(), BasicInfoField::Country);

    let tables = html.select(S::stats_table_selector()).collect_vec();
    let tables = match tables[..] {
        [batting, bowling, ..] => [batting, bowling],
        _ => return Err(FetchError::StatsNotFound { found: tables.len() }),
    };

    let mut stats = RawStats::default();
    for (discipline, table) in Discipline::iter().zip(tables) {
        let cells = table
            .select(S::stats_cell_selector())
            .map(text_of)
            .collect_vec();
        debug!("The {discipline} table has {} numeric cells", cells.len());
        for &(field, index) in S::layout(discipline) {
            let cell = cells.get(index).ok_or(FetchError::StatsLayout {
                table: discipline,
                index,
                len: cells.len(),
            })?;
            stats[field.format()][field.kind()] = cell.clone();
        }
    }

    Ok(Scraped {
        value: RawProfile {
            name,
            country,
            stats,
        },
        warnings,
    })
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_owned()
}
