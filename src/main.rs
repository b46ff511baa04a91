use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use lowlight_gallery::config::{self, StudioConfig};
use lowlight_gallery::imaging::RustBackend;
use lowlight_gallery::output;
use lowlight_gallery::pipeline::{self, GalleryError};
use lowlight_gallery::slug::RandomToken;
use lowlight_gallery::types::GalleryRequest;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lowlight-gallery")]
#[command(version)]
#[command(about = "Create a client gallery delivery folder")]
#[command(long_about = "\
Create a client gallery delivery folder

Copies the template into <outroot>/<client>-<date>-<token>/, renames the
source images to full/001.jpg, full/002.jpg, ... in file-name order,
writes JPEG thumbnails to thumbs/ and describes everything in
manifest.json for the gallery page.

Output layout:

  c/
  ├── studio.toml                    # Studio config (optional)
  ├── template/                      # Copied into every gallery
  └── anna-2026-01-19-2fefa5/
      ├── index.html                 # From the template
      ├── full/001.jpg               # Delivered images
      ├── thumbs/001.jpg             # Previews (unless --no-thumbs)
      └── manifest.json

Eligible source images: .jpg .jpeg .png .webp (any case).

Run 'lowlight-gallery --print-config' for a documented studio.toml.")]
struct Cli {
    /// Client name (used in the slug and the gallery title)
    #[arg(required_unless_present = "print_config")]
    client_name: Option<String>,

    /// Folder containing the final images
    #[arg(required_unless_present = "print_config")]
    source_folder: Option<PathBuf>,

    /// Template folder copied into each new gallery
    #[arg(long, default_value = "c/template")]
    template: PathBuf,

    /// Root folder where galleries live
    #[arg(long, default_value = "c")]
    outroot: PathBuf,

    /// Delivery date [default: today, YYYY-MM-DD]
    #[arg(long)]
    date: Option<String>,

    /// Skip generating thumbnails
    #[arg(long)]
    no_thumbs: bool,

    /// Thumbnail max dimension in pixels [default: 1400]
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    thumb_size: Option<u32>,

    /// Thumbnail JPEG quality, 0-100 [default: 82]
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    thumb_quality: Option<u8>,

    /// Slug token, empty means random [default: 6 random hex characters]
    #[arg(long)]
    token: Option<String>,

    /// Studio config file [default: <outroot>/studio.toml]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a stock studio.toml with all options documented and exit
    #[arg(long)]
    print_config: bool,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Merge command-line flags over the studio config.
fn build_request(cli: Cli, studio: &StudioConfig) -> GalleryRequest {
    let (Some(client_name), Some(source)) = (cli.client_name, cli.source_folder) else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "CLIENT_NAME and SOURCE_FOLDER are required",
            )
            .exit()
    };
    GalleryRequest {
        client_name,
        source,
        template: cli.template,
        outroot: cli.outroot,
        date: cli.date.unwrap_or_else(today),
        thumbnails: !cli.no_thumbs,
        thumb_size: cli.thumb_size.unwrap_or(studio.thumbnails.size),
        thumb_quality: cli.thumb_quality.unwrap_or(studio.thumbnails.quality),
        token: cli.token,
    }
}

fn run(cli: Cli) -> Result<(), GalleryError> {
    let config_path = config::config_path(cli.config.as_deref(), &cli.outroot);
    let studio = config::load_config(&config_path)?;

    let request = build_request(cli, &studio);
    tracing::debug!(?request, "resolved request");

    let outcome = pipeline::run(&request, &studio.studio, &mut RandomToken, &RustBackend::new())?;
    output::print_summary(&outcome);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return ExitCode::SUCCESS;
    }

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", output::format_error(&err));
            ExitCode::FAILURE
        }
    }
}
