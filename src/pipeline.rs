use log::{info, warn};

use crate::{
    client::PageSource,
    error::{FetchError, Scraped},
    normalize::normalize,
    profile, resolver,
    schema::PlayerRecord,
    site::ProfileSite,
};

/// Looks up `player_name` and builds their record: resolve, scrape, then normalize.
///
/// An `Err` means no record was produced.  An `Ok` may still carry warnings
/// about missing basic information.
pub async fn fetch_player_record<S: ProfileSite>(
    source: &impl PageSource,
    player_name: &str,
) -> Result<Scraped<PlayerRecord>, FetchError> {
    let url = resolver::resolve::<S>(source, player_name).await?;
    let scraped = profile::scrape::<S>(source, &url).await?.map(|raw| normalize(&raw));
    if scraped.is_partial() {
        warn!(
            "Retrieved statistics for {player_name:?} with {} warning(s)",
            scraped.warnings.len()
        );
    } else {
        info!("Retrieved statistics for {player_name:?}");
    }
    Ok(scraped)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::fetch_player_record;
    use crate::{
        client::PageSource,
        cricbuzz::Cricbuzz,
        error::{BasicInfoField, BasicInfoWarning, FetchError},
        report::Report,
        schema::{StatField, StatValue},
    };
    use itertools::Itertools;
    use reqwest::StatusCode;
    use url::Url;

    const SEARCH: &str = "https://www.google.com/search?q=Joe%20Root%20cricbuzz";
    const PROFILE: &str = "https://www.cricbuzz.com/profiles/8019/joe-root";

    struct Pages(HashMap<&'static str, String>);

    impl PageSource for Pages {
        async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
            self.0
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: StatusCode::NOT_FOUND,
                })
        }
    }

    fn search_page() -> String {
        format!(
            r#"<html><body><div class="kCrYT"><a href="/url?q={PROFILE}&amp;sa=U&amp;ved=0ah">Joe Root Profile - Cricbuzz</a></div></body></html>"#
        )
    }

    /// A statistics table whose numeric cells hold `cells` in order.
    fn table(cells: &[&str]) -> String {
        let cells = cells
            .iter()
            .map(|x| format!(r#"<td class="text-right">{x}</td>"#))
            .join("");
        format!(r#"<div class="cb-plyr-tbl"><table><tbody><tr>{cells}</tr></tbody></table></div>"#)
    }

    fn batting() -> String {
        let mut cells = vec!["0"; 39];
        for (index, value) in [
            (0, "113"),
            (3, "7028"),
            (5, "-"),
            (13, "171"),
            (16, "6522"),
            (18, "47.6"),
            (26, "32"),
            (29, "893"),
            (31, "35.72"),
        ] {
            cells[index] = value;
        }
        table(&cells)
    }

    fn bowling() -> String {
        let mut cells = vec!["0"; 36];
        for (index, value) in [
            (4, "45"),
            (7, "3.42"),
            (16, "26"),
            (19, "5.95"),
            (28, "6"),
            (31, ""),
        ] {
            cells[index] = value;
        }
        table(&cells)
    }

    fn profile_page(basic_info: &str, tables: &[String]) -> String {
        format!(
            r#"<html><body><div id="playerProfile">{basic_info}</div><div class="cb-col">{}</div></body></html>"#,
            tables.join("")
        )
    }

    const BASIC_INFO: &str =
        r#"<h1 class="cb-font-40">Joe Root</h1><h3 class="cb-font-18 text-gray">England</h3>"#;

    fn pages(profile: String) -> Pages {
        Pages(HashMap::from([(SEARCH, search_page()), (PROFILE, profile)]))
    }

    #[tokio::test]
    async fn resolution_failure() {
        let pages = Pages(HashMap::from([(
            SEARCH,
            r#"<html><body><p>No results</p></body></html>"#.to_owned(),
        )]));
        let result = fetch_player_record::<Cricbuzz>(&pages, "Joe Root").await;
        assert!(matches!(result, Err(FetchError::Resolution { .. })));
    }

    #[tokio::test]
    async fn profile_not_found() {
        let pages = pages(format!(
            "<html><body>{}{}</body></html>",
            batting(),
            bowling()
        ));
        let result = fetch_player_record::<Cricbuzz>(&pages, "Joe Root").await;
        assert!(matches!(result, Err(FetchError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn stats_not_found() {
        let pages = pages(profile_page(BASIC_INFO, &[batting()]));
        let result = fetch_player_record::<Cricbuzz>(&pages, "Joe Root").await;
        assert!(matches!(result, Err(FetchError::StatsNotFound { found: 1 })));
    }

    #[tokio::test]
    async fn unreachable_profile() {
        let pages = Pages(HashMap::from([(SEARCH, search_page())]));
        let result = fetch_player_record::<Cricbuzz>(&pages, "Joe Root").await;
        assert!(matches!(
            result,
            Err(FetchError::Status { status, .. }) if status == StatusCode::NOT_FOUND
        ));
    }

    #[tokio::test]
    async fn complete_record() {
        let pages = pages(profile_page(BASIC_INFO, &[batting(), bowling()]));
        let scraped = fetch_player_record::<Cricbuzz>(&pages, "Joe Root")
            .await
            .unwrap();
        assert!(scraped.warnings.is_empty());

        let record = scraped.value;
        let text = Report(&record).to_string();
        let lines = text.lines().collect_vec();
        assert_eq!(
            lines,
            [
                "Name: Joe Root",
                "Country: England",
                "Test Matches: 113",
                "Test Runs: 7028",
                "Test Average: N/A",
                "ODI Matches: 171",
                "ODI Runs: 6522",
                "ODI Average: 47.6",
                "T20 Matches: 32",
                "T20 Runs: 893",
                "T20 Average: 35.72",
                "Test Wickets: 45",
                "Test Economy: 3.42",
                "ODI Wickets: 26",
                "ODI Economy: 5.95",
                "T20 Wickets: 6",
                "T20 Economy: N/A",
            ]
        );
    }

    #[tokio::test]
    async fn missing_basic_info() {
        let pages = pages(profile_page("", &[batting(), bowling()]));
        let scraped = fetch_player_record::<Cricbuzz>(&pages, "Joe Root")
            .await
            .unwrap();
        assert_eq!(
            scraped.warnings,
            [
                BasicInfoWarning {
                    field: BasicInfoField::Name
                },
                BasicInfoWarning {
                    field: BasicInfoField::Country
                },
            ]
        );

        let record = scraped.value;
        assert_eq!(record.name(), &None);
        assert_eq!(record.country(), &None);
        assert_eq!(StatField::all().count(), 15);
        let available = StatField::all()
            .filter(|&field| record.get(field) != StatValue::Unavailable)
            .count();
        assert_eq!(available, 13);
        assert!(!Report(&record).to_string().contains("Name"));
    }
}
