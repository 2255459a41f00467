//! tinyraster: render OBJ models to an image file
//!
//! Every model on the command line is drawn into one shared framebuffer,
//! which is written once at the end.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};

use tinyraster::config::{config_to_string, load_config, RenderConfig};
use tinyraster::model::load_obj;
use tinyraster::rasterizer::{
    render_flat_with, render_wireframe_with, FillMethod, Framebuffer, Orthographic, RenderMode, Vec3f,
};
use tinyraster::VERSION;

#[derive(Parser, Debug)]
#[command(name = "tinyraster", version, about = "Software rasterizer for OBJ models")]
struct Cli {
    /// OBJ models, all drawn into the same image
    #[arg(value_name = "MODEL", required_unless_present = "dump_config")]
    models: Vec<PathBuf>,

    /// RON settings file; flags below override its fields
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output image (.tga, .png or .bmp)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum)]
    mode: Option<RenderMode>,

    /// Triangle fill algorithm for flat shading
    #[arg(long, value_enum)]
    fill: Option<FillMethod>,

    /// Light direction as x,y,z
    #[arg(long, value_name = "X,Y,Z", value_parser = parse_vec3, allow_hyphen_values = true)]
    light: Option<Vec3f>,

    #[arg(long)]
    width: Option<usize>,

    #[arg(long)]
    height: Option<usize>,

    /// Print the effective settings as RON and exit
    #[arg(long)]
    dump_config: bool,

    /// Debug-level logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn parse_vec3(s: &str) -> Result<Vec3f, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected x,y,z but got '{}'", s));
    }
    let mut v = [0.0f32; 3];
    for (c, part) in v.iter_mut().zip(&parts) {
        *c = part.parse().map_err(|_| format!("invalid component '{}'", part))?;
    }
    Ok(Vec3f::new(v[0], v[1], v[2]))
}

fn apply_overrides(config: &mut RenderConfig, cli: &Cli) {
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(fill) = cli.fill {
        config.fill = fill;
    }
    if let Some(light) = cli.light {
        config.light_dir = light;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    config.validate().context("invalid settings")?;

    if cli.dump_config {
        println!("{}", config_to_string(&config)?);
        return Ok(());
    }

    info!(
        "tinyraster v{}: {}x{} {:?} ({:?} fill) -> {}",
        VERSION,
        config.width,
        config.height,
        config.mode,
        config.fill,
        config.output.display()
    );

    let light = config.light_dir.normalized();
    let mut fb = Framebuffer::new(config.width, config.height);
    fb.clear(config.background);
    let projector = Orthographic::for_sink(&fb);

    let progress = ProgressBar::new(cli.models.len() as u64);
    progress.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {wide_msg}")?);

    for path in &cli.models {
        progress.set_message(path.display().to_string());

        // A bad model is skipped; the rest of the batch still renders
        let model = match load_obj(path) {
            Ok(model) => model,
            Err(e) => {
                warn!("skipping {}: {}", path.display(), e);
                progress.inc(1);
                continue;
            }
        };

        if let Some(bounds) = model.bounds() {
            if !bounds.fits_view() {
                warn!(
                    "{}: extends beyond [-1, 1] ({:?} .. {:?}), parts will be off-image",
                    path.display(),
                    bounds.min,
                    bounds.max
                );
            }
        }

        if config.mode.draws_flat() {
            let stats = render_flat_with(&model, &mut fb, light, &projector, config.fill);
            info!("{}: {} faces shaded, {} culled", path.display(), stats.drawn, stats.culled);
        }
        if config.mode.draws_wireframe() {
            render_wireframe_with(&model, &mut fb, config.wire_color, &projector);
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    fb.save(&config.output)
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
