use enum_map::EnumMap;

use crate::{
    profile::RawProfile,
    schema::{Country, PlayerName, PlayerRecord, StatValue},
};

/// Interprets cell text as a non-negative number; anything else becomes
/// [`StatValue::Unavailable`].  No career statistic can be negative.
pub fn parse_stat(text: &str) -> StatValue {
    match text.trim().parse::<f64>() {
        Ok(x) if x.is_finite() && x.is_sign_positive() => StatValue::Number(x),
        _ => StatValue::Unavailable,
    }
}

pub fn normalize(raw: &RawProfile) -> PlayerRecord {
    let stats = EnumMap::from_fn(|format| {
        EnumMap::from_fn(|kind| parse_stat(&raw.stats[format][kind]))
    });
    PlayerRecord::builder()
        .name(non_empty(&raw.name).map(PlayerName::from))
        .country(non_empty(&raw.country).map(Country::from))
        .stats(stats)
        .build()
}

fn non_empty(text: &Option<String>) -> Option<String> {
    text.as_deref()
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(str::to_owned)
}
