use std::env;
use std::path::PathBuf;

use catalog::{PointSurface, ProviderController, Summary};
use ingest::{IngestError, load_provider_csv, sample_catalog};
use surfaces::{GeoPointSurface, SphereMarkerSurface};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Fixed user-facing messages for the two recoverable load errors.
const MSG_SCHEMA: &str = "El CSV debe contener las columnas provider, city, latitude y longitude.";
const MSG_FILE_TYPE: &str = "Por favor, selecciona un archivo .csv";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = real_main() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "summary" => cmd_summary(args),
        "markers" => cmd_markers(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    [
        "usage:",
        "  viewer summary [file.csv] [--provider NAME] [--json]",
        "  viewer markers [file.csv] [--provider NAME]",
        "",
        "With no file, the built-in sample dataset is shown.",
    ]
    .join("\n")
}

struct LoadArgs {
    file: Option<PathBuf>,
    provider: Option<String>,
    json: bool,
}

fn parse_load_args(args: Vec<String>, allow_json: bool) -> Result<LoadArgs, String> {
    let mut out = LoadArgs {
        file: None,
        provider: None,
        json: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--provider" => {
                i += 1;
                if i >= args.len() {
                    return Err("--provider requires a value".to_string());
                }
                out.provider = Some(args[i].clone());
            }
            "--json" if allow_json => {
                out.json = true;
            }
            s if s.starts_with('-') => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
            _ => {
                if out.file.is_some() {
                    return Err(format!("only one input file expected\n\n{}", usage()));
                }
                out.file = Some(PathBuf::from(&args[i]));
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Loads the requested catalog (or the sample) into a fresh controller
/// and applies the optional provider selection.
fn load_controller<S: PointSurface>(
    surface: S,
    args: &LoadArgs,
) -> Result<ProviderController<S>, String> {
    let catalog = match &args.file {
        Some(path) => load_provider_csv(path).map_err(user_message)?,
        None => sample_catalog(),
    };
    info!(
        providers = catalog.len(),
        cities = catalog.total_cities(),
        "catalog loaded"
    );

    let mut ctrl = ProviderController::new(surface);
    ctrl.load(catalog);

    if let Some(name) = &args.provider {
        if !ctrl.select(name) {
            return Err(format!("proveedor desconocido: {name}"));
        }
        info!(provider = %name, "provider selected");
    }

    Ok(ctrl)
}

fn user_message(err: IngestError) -> String {
    match err {
        IngestError::MissingColumns => MSG_SCHEMA.to_string(),
        IngestError::UnsupportedFileType { .. } => MSG_FILE_TYPE.to_string(),
        IngestError::Io(msg) => msg,
    }
}

fn cmd_summary(args: Vec<String>) -> Result<(), String> {
    let args = parse_load_args(args, true)?;
    let ctrl = load_controller(GeoPointSurface::new(), &args)?;
    let summary = ctrl.summary();

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("serialize summary: {e}"))?;
        println!("{json}");
    } else {
        print_summary_text(&summary);
    }
    Ok(())
}

fn print_summary_text(summary: &Summary) {
    let selected = summary.selected_provider.as_deref().unwrap_or("ninguno");
    println!("Proveedor seleccionado: {selected}");
    println!("Número de ciudades: {}", summary.selected_count);
    println!("Ciudades cargadas por proveedor:");
    if summary.per_provider.is_empty() {
        println!("  - Sin datos cargados");
    } else {
        for provider in &summary.per_provider {
            println!("  - {}: {} ciudades", provider.name, provider.count);
        }
    }
}

fn cmd_markers(args: Vec<String>) -> Result<(), String> {
    let args = parse_load_args(args, false)?;
    let ctrl = load_controller(SphereMarkerSurface::new(), &args)?;

    let selected = ctrl.selected_provider().unwrap_or("ninguno");
    println!("Proveedor seleccionado: {selected}");
    for marker in ctrl.surface().markers() {
        let p = marker.position;
        println!("  {}: ({:.4}, {:.4}, {:.4})", marker.city, p.x, p.y, p.z);
    }
    Ok(())
}
