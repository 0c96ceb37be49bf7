pub mod controller;

pub use controller::*;

use serde::{Deserialize, Serialize};

/// A single city row as parsed from the source CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityRecord {
    pub fn new(city: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            city: city.into(),
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ProviderEntry {
    name: String,
    cities: Vec<CityRecord>,
}

/// Providers mapped to their cities.
///
/// Ordering contract:
/// - Providers iterate in first-seen order from the source.
/// - Cities within a provider keep source row order.
///
/// Every provider present holds at least one city: records are only added
/// through [`push`](Self::push), so a provider with no valid rows never
/// gets an entry.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCatalog {
    entries: Vec<ProviderEntry>,
}

impl ProviderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `record` to `provider`, creating the provider at the end
    /// of the iteration order when absent.
    pub fn push(&mut self, provider: &str, record: CityRecord) {
        match self.entries.iter_mut().find(|e| e.name == provider) {
            Some(entry) => entry.cities.push(record),
            None => self.entries.push(ProviderEntry {
                name: provider.to_string(),
                cities: vec![record],
            }),
        }
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.entries.iter().any(|e| e.name == provider)
    }

    pub fn first_provider(&self) -> Option<&str> {
        self.entries.first().map(|e| e.name.as_str())
    }

    pub fn cities(&self, provider: &str) -> Option<&[CityRecord]> {
        self.entries
            .iter()
            .find(|e| e.name == provider)
            .map(|e| e.cities.as_slice())
    }

    /// Iterates `(provider, cities)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[CityRecord])> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.cities.as_slice()))
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Number of providers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total record count across all providers.
    pub fn total_cities(&self) -> usize {
        self.entries.iter().map(|e| e.cities.len()).sum()
    }
}
