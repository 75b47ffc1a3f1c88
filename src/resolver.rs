use std::borrow::Cow;

use log::{debug, info};
use scraper::Html;
use url::Url;

use crate::{client::PageSource, error::FetchError, site::ProfileSite};

const SEARCH_URL: &str = "https://www.google.com/search";
/// Search results link through this redirect endpoint instead of to the target itself.
const REDIRECT_PREFIX: &str = "/url?q=";

/// Finds the profile page of `player_name` on `S` through a web search.
pub async fn resolve<S: ProfileSite>(
    source: &impl PageSource,
    player_name: &str,
) -> Result<Url, FetchError> {
    let player_name = player_name.trim();
    if player_name.is_empty() {
        return Err(FetchError::Resolution {
            query: player_name.to_owned(),
        });
    }
    let url = search_url::<S>(player_name)?;
    let markup = source.fetch(&url).await?;
    let profile = parse_search_results::<S>(&Html::parse_document(&markup), player_name)?;
    info!("Resolved {player_name:?} to {profile}");
    Ok(profile)
}

pub fn search_url<S: ProfileSite>(player_name: &str) -> Result<Url, FetchError> {
    let url = format!(
        "{SEARCH_URL}?q={}%20{}",
        urlencoding::encode(player_name),
        S::SEARCH_KEYWORD
    );
    Url::parse(&url).map_err(|e| FetchError::InvalidUrl(url, e))
}

pub fn parse_search_results<S: ProfileSite>(html: &Html, query: &str) -> Result<Url, FetchError> {
    let not_found = || FetchError::Resolution {
        query: query.to_owned(),
    };
    let href = html
        .select(selector!("div.kCrYT"))
        .next()
        .and_then(|block| {
            block
                .select(selector!("a[href]"))
                .filter_map(|a| a.value().attr("href"))
                .find(|href| regex!(r"/[A-Za-z]\w+").is_match(href))
        })
        .ok_or_else(not_found)?;
    debug!("First matching search result: {href:?}");

    let target = unwrap_redirect(href);
    Url::parse(S::BASE_URL)
        .and_then(|base| base.join(&target))
        .map_err(|e| {
            debug!("Search result {target:?} is not a usable address: {e}");
            not_found()
        })
}

/// Strips the search provider's redirect wrapper, leaving the link target.
pub fn unwrap_redirect(href: &str) -> Cow<'_, str> {
    let Some(rest) = href.strip_prefix(REDIRECT_PREFIX) else {
        return Cow::Borrowed(href);
    };
    let target = rest.split_once('&').map_or(rest, |(target, _)| target);
    urlencoding::decode(target).unwrap_or(Cow::Borrowed(target))
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    use super::{parse_search_results, search_url, unwrap_redirect};
    use crate::{cricbuzz::Cricbuzz, error::FetchError};

    #[test]
    fn build_search_url() {
        let url = search_url::<Cricbuzz>("Virat Kohli").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.google.com/search?q=Virat%20Kohli%20cricbuzz"
        );
    }

    #[test]
    fn unwrap_redirect_link() {
        assert_eq!(
            unwrap_redirect("/url?q=https://www.cricbuzz.com/profiles/1413/virat-kohli&sa=U&ved=2ah"),
            "https://www.cricbuzz.com/profiles/1413/virat-kohli"
        );
        assert_eq!(
            unwrap_redirect("/url?q=https://example.com/a%3Fb%3D1&sa=U"),
            "https://example.com/a?b=1"
        );
        assert_eq!(unwrap_redirect("/profiles/1413"), "/profiles/1413");
    }

    #[test]
    fn first_matching_link() {
        let html = Html::parse_document(
            r##"<html><body>
            <div class="kCrYT"><a href="#">top</a><a href="/url?q=https://www.cricbuzz.com/profiles/1413/virat-kohli&amp;sa=U">Virat Kohli</a></div>
            <div class="kCrYT"><a href="/url?q=https://www.cricbuzz.com/profiles/2/other&amp;sa=U">Other</a></div>
            </body></html>"##,
        );
        let url = parse_search_results::<Cricbuzz>(&html, "Virat Kohli").unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.cricbuzz.com/profiles/1413/virat-kohli"
        );
    }

    #[test]
    fn relative_link_is_resolved_against_site() {
        let html = Html::parse_document(
            r#"<div class="kCrYT"><a href="/profiles/265/ms-dhoni">MS Dhoni</a></div>"#,
        );
        let url = parse_search_results::<Cricbuzz>(&html, "Dhoni").unwrap();
        assert_eq!(url.as_str(), "https://www.cricbuzz.com/profiles/265/ms-dhoni");
    }

    #[test]
    fn no_results() {
        let html = Html::parse_document(r#"<div class="g"><a href="/url?q=x">x</a></div>"#);
        assert!(matches!(
            parse_search_results::<Cricbuzz>(&html, "Nobody"),
            Err(FetchError::Resolution { query }) if query == "Nobody"
        ));

        let html = Html::parse_document(r##"<div class="kCrYT"><a href="#">x</a></div>"##);
        assert!(matches!(
            parse_search_results::<Cricbuzz>(&html, "Nobody"),
            Err(FetchError::Resolution { .. })
        ));
    }
}
