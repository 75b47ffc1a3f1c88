use scraper::Selector;

use crate::schema::{Discipline, StatField};

/// Maps each statistic to its position in the flat sequence of numeric cells of one table.
pub type Layout = &'static [(StatField, usize)];

/// A website serving player profile pages.
pub trait ProfileSite {
    /// Used to resolve relative profile links.
    const BASE_URL: &'static str;
    /// Appended to the player name in the search query to favor this site's pages.
    const SEARCH_KEYWORD: &'static str;

    fn profile_container_selector() -> &'static Selector;
    fn name_selector() -> &'static Selector;
    fn country_selector() -> &'static Selector;
    fn stats_table_selector() -> &'static Selector;
    fn stats_cell_selector() -> &'static Selector;

    fn layout(discipline: Discipline) -> Layout;
}
