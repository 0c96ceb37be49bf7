use std::fs;
use std::path::Path;

use catalog::{CityRecord, ProviderCatalog};

/// Header columns every provider CSV must carry, in any order.
pub const REQUIRED_COLUMNS: [&str; 4] = ["provider", "city", "latitude", "longitude"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The header row lacks one or more of the required columns.
    MissingColumns,
    /// The file name does not end in `.csv`.
    UnsupportedFileType { name: String },
    Io(String),
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::MissingColumns => write!(
                f,
                "CSV must contain the columns provider, city, latitude and longitude"
            ),
            IngestError::UnsupportedFileType { name } => {
                write!(f, "not a .csv file: {name}")
            }
            IngestError::Io(msg) => write!(f, "read error: {msg}"),
        }
    }
}

impl std::error::Error for IngestError {}

/// Parses provider/city CSV text into a catalog.
///
/// Single pass, no backtracking. Splitting is intentionally naive: commas
/// only, no quoted-field support. A missing required column aborts the
/// whole parse; every per-row problem (short row, empty provider or city,
/// unparseable coordinate) skips that row silently.
pub fn parse_provider_csv(text: &str) -> Result<ProviderCatalog, IngestError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let Some((header, rows)) = lines.split_first() else {
        return Ok(ProviderCatalog::new());
    };

    let headers: Vec<String> = header
        .split(',')
        .map(|h| h.trim().to_lowercase())
        .collect();
    let position = |name: &str| headers.iter().position(|h| h == name);
    let (Some(provider_idx), Some(city_idx), Some(lat_idx), Some(lon_idx)) = (
        position("provider"),
        position("city"),
        position("latitude"),
        position("longitude"),
    ) else {
        return Err(IngestError::MissingColumns);
    };

    let mut out = ProviderCatalog::new();
    for row in rows {
        let fields: Vec<&str> = row.split(',').map(str::trim).collect();
        if fields.len() < headers.len() {
            continue;
        }

        let provider = fields[provider_idx];
        let city = fields[city_idx];
        if provider.is_empty() || city.is_empty() {
            continue;
        }

        let (Ok(latitude), Ok(longitude)) = (
            fields[lat_idx].parse::<f64>(),
            fields[lon_idx].parse::<f64>(),
        ) else {
            continue;
        };
        // `"NaN".parse::<f64>()` succeeds; the catalog must never hold one.
        if latitude.is_nan() || longitude.is_nan() {
            continue;
        }

        out.push(provider, CityRecord::new(city, latitude, longitude));
    }

    Ok(out)
}

/// Extension gate: file name check only, no content sniffing.
pub fn has_csv_extension(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

/// Reads and parses a `.csv` file from disk.
pub fn load_provider_csv(path: &Path) -> Result<ProviderCatalog, IngestError> {
    let name = path.file_name().and_then(|s| s.to_str()).unwrap_or_default();
    if !has_csv_extension(name) {
        return Err(IngestError::UnsupportedFileType {
            name: name.to_string(),
        });
    }

    let text =
        fs::read_to_string(path).map_err(|e| IngestError::Io(format!("read {path:?}: {e}")))?;
    parse_provider_csv(&text)
}
