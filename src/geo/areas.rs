use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Approximate land areas in km², keyed by normalized country name.
const BUILTIN_AREAS: &[(&str, f64)] = &[
    ("France", 551_695.0),
    ("United States", 9_833_520.0),
    ("USA", 9_833_520.0),
    ("Italy", 301_340.0),
    ("Brazil", 8_515_767.0),
    ("Cambodia", 181_035.0),
    ("Chile", 756_102.0),
    ("Germany", 357_022.0),
    ("Singapore", 719.0),
    ("Turkey", 783_356.0),
    ("Nepal", 147_516.0),
    ("Canada", 9_984_670.0),
    ("Zambia", 752_618.0),
    ("Zimbabwe", 390_757.0),
    ("Zambia/Zimbabwe", 1_143_375.0),
    ("Vietnam", 331_212.0),
    ("Argentina", 2_780_400.0),
    ("Argentina/Brazil", 11_296_167.0),
    ("Australia", 7_692_024.0),
    ("Japan", 377_975.0),
    ("Bolivia", 1_098_581.0),
    ("China", 9_596_961.0),
    ("United Kingdom", 242_495.0),
    ("UK", 242_495.0),
    ("Spain", 505_990.0),
    ("UAE", 83_600.0),
];

const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("USA", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("Zambia/Zimbabwe", "Zambia/Zimbabwe"),
    ("Argentina/Brazil", "Argentina/Brazil"),
];

#[derive(Debug, Error)]
pub enum AreasError {
    #[error("failed to read country areas file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse country areas file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("country `{country}` has a non-positive area")]
    NonPositiveArea { country: String },
}

/// Country area table used to normalize scores by country size.
///
/// Built once at startup and shared read-only; scoring functions take it by
/// reference.
#[derive(Clone, Debug, Deserialize)]
pub struct CountryAreas {
    areas: HashMap<String, f64>,
    #[serde(default)]
    aliases: HashMap<String, String>,
}

impl Default for CountryAreas {
    fn default() -> Self {
        Self {
            areas: BUILTIN_AREAS
                .iter()
                .map(|(name, area)| (name.to_string(), *area))
                .collect(),
            aliases: BUILTIN_ALIASES
                .iter()
                .map(|(alias, name)| (alias.to_string(), name.to_string()))
                .collect(),
        }
    }
}

impl CountryAreas {
    pub fn load(path: &Path) -> Result<Self, AreasError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, AreasError> {
        let areas: CountryAreas = serde_json::from_str(raw)?;
        if let Some((country, _)) = areas.areas.iter().find(|(_, area)| **area <= 0.0) {
            return Err(AreasError::NonPositiveArea {
                country: country.clone(),
            });
        }
        Ok(areas)
    }

    /// Resolves an alias to its canonical name. Unknown names pass through.
    pub fn normalize<'a>(&'a self, country: &'a str) -> &'a str {
        self.aliases
            .get(country)
            .map(String::as_str)
            .unwrap_or(country)
    }

    pub fn area_of(&self, country: &str) -> Option<f64> {
        self.areas.get(self.normalize(country)).copied()
    }

    /// Approximate linear size of the country, `None` for unmapped countries.
    pub fn span_km(&self, country: &str) -> Option<f64> {
        self.area_of(country).map(f64::sqrt)
    }

    pub fn country_count(&self) -> usize {
        self.areas.len()
    }
}
