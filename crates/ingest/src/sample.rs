use catalog::ProviderCatalog;

use crate::csv_table::parse_provider_csv;

/// Dataset shown before any file is loaded: two providers, four cities.
const SAMPLE_CSV: &str = "provider,city,latitude,longitude\n\
                          ProveedorA,Madrid,40.4168,-3.7038\n\
                          ProveedorA,Barcelona,41.3874,2.1686\n\
                          ProveedorB,Paris,48.8566,2.3522\n\
                          ProveedorB,Berlin,52.52,13.4050\n";

pub fn sample_catalog() -> ProviderCatalog {
    // The sample is known-good; a parse failure here would be a parser
    // bug, not bad data.
    parse_provider_csv(SAMPLE_CSV).unwrap_or_default()
}
