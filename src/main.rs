use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tone_engine::{FaceDescriptor, Rgb};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use personal_color::api;
use personal_color::models::{AnalysisResponse, AppConfig, PaletteResponse};
use personal_color::server;
use personal_color::services::analysis_service::{parse_contrast, parse_intensity};
use personal_color::services::{write_png, AnalysisService};

#[derive(Parser)]
#[command(name = "personal-color")]
#[command(about = "Personal color analysis - skin tone, season and palettes from a portrait")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a portrait and print the color profile as JSON
    Analyze {
        /// Image file (plain path or file:// URI)
        image: String,

        /// Detected face as X,Y,EYE_DISTANCE in working-image pixels
        #[arg(long, value_parser = parse_face)]
        face: Option<FaceDescriptor>,

        /// Configuration file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the cutout to this PNG instead of the output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Do not write the cutout at all
        #[arg(long, conflicts_with = "output")]
        no_save: bool,
    },
    /// Start the HTTP server
    Serve {
        /// Configuration file (overrides CONFIG_FILE)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Classify a bare skin color and list its palettes
    Palettes {
        /// Skin color as hex, e.g. "#E6BEAA"
        hex: String,

        /// Contrast level: low, medium or high
        #[arg(long, value_parser = parse_contrast_arg)]
        contrast: Option<tone_engine::ContrastLevel>,

        /// Intensity: bright or soft
        #[arg(long, value_parser = parse_intensity_arg)]
        intensity: Option<tone_engine::IntensityLevel>,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personal Color API",
        description = "Skin tone, seasonal color type and palettes from a portrait",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_analyze, api::handle_palettes),
    components(schemas(AnalysisResponse, PaletteResponse)),
    tags((name = "Analysis", description = "Color analysis of portraits and skin colors"))
)]
struct ApiDoc;

fn parse_face(s: &str) -> Result<FaceDescriptor, String> {
    let parts: Vec<f32> = s
        .split(',')
        .map(|p| p.trim().parse::<f32>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match *parts.as_slice() {
        [x, y, eye] if !(x.is_finite() && y.is_finite() && eye.is_finite()) => {
            Err(format!("face values must be finite, got {x},{y},{eye}"))
        }
        [x, y, eye] if eye >= 0.0 => Ok(FaceDescriptor::new(x, y, eye)),
        [_, _, _] => Err("eye distance must not be negative".to_string()),
        _ => Err("expected X,Y,EYE_DISTANCE".to_string()),
    }
}

fn parse_contrast_arg(s: &str) -> Result<tone_engine::ContrastLevel, String> {
    parse_contrast(s).ok_or_else(|| format!("unknown contrast level {s:?} (low, medium, high)"))
}

fn parse_intensity_arg(s: &str) -> Result<tone_engine::IntensityLevel, String> {
    parse_intensity(s).ok_or_else(|| format!("unknown intensity {s:?} (bright, soft)"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Analyze {
            image,
            face,
            config,
            output,
            no_save,
        }) => run_analyze_command(&image, face, config.as_deref(), output.as_deref(), no_save),
        Some(Commands::Serve { config }) => run_server(config.as_deref()).await,
        Some(Commands::Palettes {
            hex,
            contrast,
            intensity,
        }) => run_palettes_command(&hex, contrast, intensity),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "personal_color=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

/// Analyze one image file and print the profile
fn run_analyze_command(
    image: &str,
    face: Option<FaceDescriptor>,
    config: Option<&Path>,
    output: Option<&Path>,
    no_save: bool,
) -> anyhow::Result<()> {
    init_cli_logging();

    let config = AppConfig::load_with_env(config);
    let service = AnalysisService::new(&config);
    let report = service
        .analyze_file(image, face)
        .map_err(|e| anyhow::anyhow!("Analysis of {image} failed: {e}"))?;

    let mut response = AnalysisResponse::from_report(&report);
    if let Some(path) = output {
        write_png(&report.cutout, path)?;
        let absolute = std::fs::canonicalize(path)?;
        response = response.with_image_path(format!("file://{}", absolute.display()));
    } else if !no_save {
        response = response.with_image_path(service.store().save(&report.cutout, report.path));
    }

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Classify a bare color (no image needed)
fn run_palettes_command(
    hex: &str,
    contrast: Option<tone_engine::ContrastLevel>,
    intensity: Option<tone_engine::IntensityLevel>,
) -> anyhow::Result<()> {
    init_cli_logging();

    let color: Rgb = hex.parse().map_err(|e| anyhow::anyhow!("Invalid color {hex:?}: {e}"))?;
    let service = AnalysisService::new(&AppConfig::load_with_env(None));
    let profile = service.profile_color(color, contrast, intensity);

    println!("{} {}", profile.hex, profile.season_full);
    println!("Undertone: {} ({})", profile.undertone, profile.undertone_detail);
    println!("Contrast:  {}, {}\n", profile.contrast, profile.intensity);

    let width = profile.palettes.iter().map(|p| p.name.len()).max().unwrap_or(0);
    for palette in &profile.palettes {
        println!("  {:<width$}  {}", palette.name, palette.colors.join(" "));
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("personal-color v{VERSION}");
    println!("Skin tone, seasonal color type and palettes from a portrait\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config = AppConfig::load_with_env(None);
    println!("\nConfiguration:");
    println!("  analysis.target_width     = {}", config.analysis.target_width);
    println!("  analysis.sample_count     = {}", config.analysis.sample_count);
    println!("  analysis.seed             = {}", config.analysis.seed);
    println!("  analysis.central_fraction = {}", config.analysis.central_fraction);
    println!("  analysis.min_skin_samples = {}", config.analysis.min_skin_samples);
    println!("  output.dir                = {}", config.output.dir.display());
    println!("  server.max_upload_bytes   = {}", config.server.max_upload_bytes);

    println!("\nCommands:");
    println!("  personal-color analyze <IMAGE>   Analyze a portrait");
    println!("  personal-color palettes <HEX>    Profile a bare skin color");
    println!("  personal-color serve             Start the HTTP server");
    println!("\nRun 'personal-color --help' for more details.");
}

/// Run the HTTP server
async fn run_server(config: Option<&Path>) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "personal_color=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load_with_env(config);
    tracing::info!(
        target_width = config.analysis.target_width,
        max_upload_bytes = config.server.max_upload_bytes,
        "Configuration loaded"
    );

    let state = server::create_app_state(config);
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Personal color server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
