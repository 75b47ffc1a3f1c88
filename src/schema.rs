use std::fmt::Display;

use enum_map::{Enum, EnumMap};
use getset::{CopyGetters, Getters};
use itertools::iproduct;
use strum::{EnumIter, IntoEnumIterator};
use typed_builder::TypedBuilder;

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Enum,
    EnumIter,
    derive_more::Display,
)]
pub enum Format {
    Test,
    #[display("ODI")]
    Odi,
    T20,
}

#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Debug,
    Enum,
    EnumIter,
    derive_more::Display,
)]
pub enum StatKind {
    Matches,
    Runs,
    Average,
    Wickets,
    Economy,
}
impl StatKind {
    pub fn discipline(self) -> Discipline {
        use StatKind::*;
        match self {
            Matches | Runs | Average => Discipline::Batting,
            Wickets | Economy => Discipline::Bowling,
        }
    }
}

/// The two statistics tables of a profile page, in page order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, derive_more::Display)]
pub enum Discipline {
    #[display("batting")]
    Batting,
    #[display("bowling")]
    Bowling,
}
impl Discipline {
    pub fn kinds(self) -> impl Iterator<Item = StatKind> {
        StatKind::iter().filter(move |kind| kind.discipline() == self)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct StatField {
    format: Format,
    kind: StatKind,
}
impl StatField {
    pub const fn new(format: Format, kind: StatKind) -> Self {
        Self { format, kind }
    }

    /// All numeric fields in presentation order: batting fields format by format,
    /// then bowling fields format by format.
    pub fn all() -> impl Iterator<Item = StatField> {
        Discipline::iter().flat_map(|discipline| {
            iproduct!(Format::iter(), discipline.kinds().collect::<Vec<_>>())
                .map(|(format, kind)| StatField::new(format, kind))
        })
    }
}
impl Display for StatField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.format, self.kind)
    }
}

/// A normalized numeric statistic, or the "unavailable" sentinel.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum StatValue {
    Number(f64),
    #[default]
    Unavailable,
}
impl StatValue {
    pub fn number(self) -> Option<f64> {
        match self {
            StatValue::Number(x) => Some(x),
            StatValue::Unavailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        self.number().is_some()
    }
}
impl Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Number(x) => Display::fmt(x, f),
            StatValue::Unavailable => f.pad("N/A"),
        }
    }
}

#[derive(
    Clone, PartialEq, Eq, Debug, derive_more::From, derive_more::AsRef, derive_more::Display,
)]
#[as_ref(forward)]
pub struct PlayerName(String);

#[derive(
    Clone, PartialEq, Eq, Debug, derive_more::From, derive_more::AsRef, derive_more::Display,
)]
#[as_ref(forward)]
pub struct Country(String);

pub type StatTable = EnumMap<Format, EnumMap<StatKind, StatValue>>;

/// One player's career summary.
///
/// Every numeric field is present, either as a number or as [`StatValue::Unavailable`].
/// Name and country are display metadata and may be missing.
#[derive(Clone, PartialEq, Debug, TypedBuilder, Getters)]
pub struct PlayerRecord {
    #[builder(default)]
    #[getset(get = "pub")]
    name: Option<PlayerName>,
    #[builder(default)]
    #[getset(get = "pub")]
    country: Option<Country>,
    #[getset(get = "pub")]
    stats: StatTable,
}
impl PlayerRecord {
    pub fn get(&self, field: StatField) -> StatValue {
        self.stats[field.format()][field.kind()]
    }

    /// The value of `kind` for each format, in format order.
    pub fn series(&self, kind: StatKind) -> impl Iterator<Item = (Format, StatValue)> + '_ {
        Format::iter().map(move |format| (format, self.stats[format][kind]))
    }
}
