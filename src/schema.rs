use std::borrow::Borrow;

use clap::ValueEnum;
use derive_more::{Display, From, FromStr};
use indexmap::IndexMap;

/// Region token as it appears in the request path, e.g. `utah`.
#[derive(Clone, PartialEq, Eq, Debug, From, FromStr, Display)]
pub struct Region(String);

#[derive(Clone, PartialEq, Eq, Hash, Debug, From, Display)]
pub struct ResortName(String);
impl ResortName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
impl Borrow<str> for ResortName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Snowfall figure exactly as printed on the page, e.g. `6"`.
#[derive(Clone, PartialEq, Eq, Debug, From, Display)]
pub struct SnowfallText(String);
impl SnowfallText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Field {
    #[display("Forecasts")]
    Forecast,
    #[display("Reports")]
    Report,
}

/// Which of the two page layouts is scraped and how it is printed.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum Variant {
    /// Forecast and report side by side
    #[default]
    Dual,
    /// Forecast only, falling back from `snow` to `highsnow` to `nosnow`
    Tiered,
}

/// Resorts in page order. A repeated name keeps its first position but takes the latest value.
#[derive(Clone, Default, Debug)]
pub struct ResortTable(IndexMap<ResortName, SnowfallText>);

impl ResortTable {
    pub fn insert(&mut self, name: ResortName, value: SnowfallText) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(SnowfallText::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResortName, &SnowfallText)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Default, Debug)]
pub struct ResortTables(Vec<(Field, ResortTable)>);

impl ResortTables {
    pub fn with_fields(fields: impl IntoIterator<Item = Field>) -> Self {
        Self(
            fields
                .into_iter()
                .map(|field| (field, ResortTable::default()))
                .collect(),
        )
    }

    pub fn get(&self, field: Field) -> Option<&ResortTable> {
        self.0.iter().find(|x| x.0 == field).map(|x| &x.1)
    }

    pub fn get_mut(&mut self, field: Field) -> Option<&mut ResortTable> {
        self.0.iter_mut().find(|x| x.0 == field).map(|x| &mut x.1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Field, ResortTable)> {
        self.0.iter()
    }
}
