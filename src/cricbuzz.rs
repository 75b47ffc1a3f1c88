use scraper::Selector;

use crate::{
    schema::{
        Discipline,
        Format::{Odi, T20, Test},
        StatField,
        StatKind::{Average, Economy, Matches, Runs, Wickets},
    },
    site::{Layout, ProfileSite},
};

// Rows of the batting table are formats, and each row holds 13 numeric cells.
const BATTING_LAYOUT: Layout = &[
    (StatField::new(Test, Matches), 0),
    (StatField::new(Test, Runs), 3),
    (StatField::new(Test, Average), 5),
    (StatField::new(Odi, Matches), 13),
    (StatField::new(Odi, Runs), 16),
    (StatField::new(Odi, Average), 18),
    (StatField::new(T20, Matches), 26),
    (StatField::new(T20, Runs), 29),
    (StatField::new(T20, Average), 31),
];

// Bowling rows hold 12 numeric cells each.
const BOWLING_LAYOUT: Layout = &[
    (StatField::new(Test, Wickets), 4),
    (StatField::new(Test, Economy), 7),
    (StatField::new(Odi, Wickets), 16),
    (StatField::new(Odi, Economy), 19),
    (StatField::new(T20, Wickets), 28),
    (StatField::new(T20, Economy), 31),
];

pub struct Cricbuzz;
impl ProfileSite for Cricbuzz {
    const BASE_URL: &'static str = "https://www.cricbuzz.com/";
    const SEARCH_KEYWORD: &'static str = "cricbuzz";

    fn profile_container_selector() -> &'static Selector {
        selector!("div#playerProfile")
    }
    fn name_selector() -> &'static Selector {
        selector!("h1.cb-font-40")
    }
    fn country_selector() -> &'static Selector {
        selector!("h3.cb-font-18.text-gray")
    }
    fn stats_table_selector() -> &'static Selector {
        selector!("div.cb-plyr-tbl")
    }
    fn stats_cell_selector() -> &'static Selector {
        selector!("td.text-right")
    }

    fn layout(discipline: Discipline) -> Layout {
        match discipline {
            Discipline::Batting => BATTING_LAYOUT,
            Discipline::Bowling => BOWLING_LAYOUT,
        }
    }
}
