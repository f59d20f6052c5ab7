//! Closed vocabularies accepted by the finance and flight tools
//!
//! Each enum is the single source of truth for its set of wire values: the
//! same table drives input validation, error messages, and the help text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A closed set of string values understood by SerpAPI
pub trait Vocabulary: Sized + Copy + 'static {
    /// Every member, in documentation order
    const ALL: &'static [Self];
    /// Singular noun used in error messages ("trend")
    const KIND: &'static str;
    /// Plural noun used in error messages ("trends")
    const PLURAL: &'static str;

    /// Wire representation sent to the API
    fn as_str(&self) -> &'static str;

    /// All wire values, in documentation order
    fn values() -> Vec<&'static str> {
        Self::ALL.iter().map(|v| v.as_str()).collect()
    }

    /// Exact-match lookup against the wire values
    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == value)
            .ok_or_else(|| ValidationError::NotInSet {
                kind: Self::KIND,
                plural: Self::PLURAL,
                value: value.to_string(),
                allowed: Self::values(),
            })
    }
}

/// Market trend lists for the `google_finance_markets` engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MarketTrend {
    #[default]
    Indexes,
    MostActive,
    Gainers,
    Losers,
    ClimateLeaders,
    Cryptocurrencies,
    Currencies,
}

impl Vocabulary for MarketTrend {
    const ALL: &'static [Self] = &[
        Self::Indexes,
        Self::MostActive,
        Self::Gainers,
        Self::Losers,
        Self::ClimateLeaders,
        Self::Cryptocurrencies,
        Self::Currencies,
    ];
    const KIND: &'static str = "trend";
    const PLURAL: &'static str = "trends";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Indexes => "indexes",
            Self::MostActive => "most-active",
            Self::Gainers => "gainers",
            Self::Losers => "losers",
            Self::ClimateLeaders => "climate-leaders",
            Self::Cryptocurrencies => "cryptocurrencies",
            Self::Currencies => "currencies",
        }
    }
}

/// Time span of a price graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphPeriod {
    #[default]
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "5d")]
    FiveDays,
    #[serde(rename = "1m")]
    OneMonth,
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "ytd")]
    YearToDate,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "5y")]
    FiveYears,
    #[serde(rename = "max")]
    Max,
}

impl Vocabulary for GraphPeriod {
    const ALL: &'static [Self] = &[
        Self::OneDay,
        Self::FiveDays,
        Self::OneMonth,
        Self::SixMonths,
        Self::YearToDate,
        Self::OneYear,
        Self::FiveYears,
        Self::Max,
    ];
    const KIND: &'static str = "period";
    const PLURAL: &'static str = "periods";

    fn as_str(&self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::FiveDays => "5d",
            Self::OneMonth => "1m",
            Self::SixMonths => "6m",
            Self::YearToDate => "ytd",
            Self::OneYear => "1y",
            Self::FiveYears => "5y",
            Self::Max => "max",
        }
    }
}

/// News feed filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NewsCategory {
    All,
    Latest,
    Opinion,
    PressReleases,
}

impl Vocabulary for NewsCategory {
    const ALL: &'static [Self] = &[Self::All, Self::Latest, Self::Opinion, Self::PressReleases];
    const KIND: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Latest => "latest",
            Self::Opinion => "opinion",
            Self::PressReleases => "press_releases",
        }
    }
}

/// Reporting window for financial statements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinancialWindow {
    #[serde(rename = "week")]
    Week,
    #[serde(rename = "month")]
    Month,
    #[serde(rename = "3month")]
    ThreeMonths,
    #[serde(rename = "6month")]
    SixMonths,
    #[serde(rename = "year")]
    Year,
}

impl Vocabulary for FinancialWindow {
    const ALL: &'static [Self] = &[Self::Week, Self::Month, Self::ThreeMonths, Self::SixMonths, Self::Year];
    const KIND: &'static str = "window";
    const PLURAL: &'static str = "windows";

    fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::ThreeMonths => "3month",
            Self::SixMonths => "6month",
            Self::Year => "year",
        }
    }
}

/// Cabin tier, sent to Google Flights as an integer 1-4
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelClass {
    #[default]
    Economy,
    PremiumEconomy,
    Business,
    First,
}

/// Human phrasings accepted for each tier. Keys are in normalized form.
const TRAVEL_CLASS_ALIASES: &[(&str, TravelClass)] = &[
    ("economy", TravelClass::Economy),
    ("eco", TravelClass::Economy),
    ("coach", TravelClass::Economy),
    ("premium", TravelClass::PremiumEconomy),
    ("premium economy", TravelClass::PremiumEconomy),
    ("premium_economy", TravelClass::PremiumEconomy),
    ("business", TravelClass::Business),
    ("business class", TravelClass::Business),
    ("business_class", TravelClass::Business),
    ("first", TravelClass::First),
    ("first class", TravelClass::First),
    ("first_class", TravelClass::First),
    ("luxury", TravelClass::First),
];

impl TravelClass {
    /// Integer tier understood by the `google_flights` engine
    pub fn tier(&self) -> u8 {
        match self {
            Self::Economy => 1,
            Self::PremiumEconomy => 2,
            Self::Business => 3,
            Self::First => 4,
        }
    }

    /// Every accepted alias, in table order
    pub fn aliases() -> Vec<&'static str> {
        TRAVEL_CLASS_ALIASES.iter().map(|(alias, _)| *alias).collect()
    }

    /// Resolve a free-form phrasing. Case, hyphens, underscores and spaces
    /// between words are interchangeable.
    pub fn resolve(input: &str) -> Result<Self, ValidationError> {
        let wanted = alias_key(input);
        TRAVEL_CLASS_ALIASES
            .iter()
            .find(|(alias, _)| alias_key(alias) == wanted)
            .map(|(_, class)| *class)
            .ok_or_else(|| ValidationError::TravelClass {
                value: input.to_string(),
                aliases: Self::aliases(),
            })
    }
}

fn alias_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

macro_rules! impl_display_from_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $ty {
                type Err = ValidationError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Vocabulary>::parse(s)
                }
            }
        )*
    };
}

impl_display_from_str!(MarketTrend, GraphPeriod, NewsCategory, FinancialWindow);
