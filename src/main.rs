use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use roundrect::{
    generate_curve, generate_mesh, init_logging, level_for_verbosity, Config, ConfigFormat,
    CornerPolicy, Extrusion, FillMode, Geometry, GeometrySink, HandleType, LogFormat, ObjSink,
    OutputFormat, OutputSettings, Point2, PolygonMode, SvgSink, UvProfile,
};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser)]
#[command(name = "roundrect", version, long_version = LONG_VERSION, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML or JSON); defaults to the platform config dir
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a closed Bezier outline
    Curve(CurveArgs),
    /// Generate a tessellated mesh
    Mesh(MeshArgs),
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show {
        #[arg(long, default_value = "toml")]
        format: ConfigFormat,
    },
    /// Print the configuration file location
    Path,
}

/// Options shared by both geometry kinds
#[derive(Args)]
struct ShapeArgs {
    /// First corner, as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    from: Option<Point2>,

    /// Opposite corner, as X,Y
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    to: Option<Point2>,

    /// Rounding factor for all corners, or TL,TR,BR,BL
    #[arg(short, long, value_name = "F[,F,F,F]", value_parser = parse_quad::<f64>, allow_hyphen_values = true)]
    rounding: Option<[f64; 4]>,

    /// Zero rounding handling: sharp_fallback or force_round
    #[arg(long)]
    policy: Option<CornerPolicy>,

    /// Solidify thickness forwarded to the output
    #[arg(long)]
    thickness: Option<f64>,

    /// Solidify offset in [-1, 1]
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<f64>,
}

impl ShapeArgs {
    fn apply(
        &self,
        corner_a: &mut Point2,
        corner_b: &mut Point2,
        rounding: &mut [f64; 4],
        policy: &mut CornerPolicy,
        extrusion: &mut Extrusion,
    ) {
        if let Some(p) = self.from {
            *corner_a = p;
        }
        if let Some(p) = self.to {
            *corner_b = p;
        }
        if let Some(r) = self.rounding {
            *rounding = r;
        }
        if let Some(p) = self.policy {
            *policy = p;
        }
        if let Some(t) = self.thickness {
            extrusion.thickness = t;
        }
        if let Some(o) = self.offset {
            extrusion.offset = o;
        }
    }
}

#[derive(Args)]
struct OutputArgs {
    /// Output file, relative to `output.directory`; stdout when omitted
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Document format: obj, svg or json; inferred from the output file
    #[arg(short, long)]
    format: Option<OutputFormat>,
}

#[derive(Args)]
struct CurveArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    /// Samples per segment for flattening hosts
    #[arg(long)]
    resolution: Option<i32>,

    /// Handle type on straight edges: free or vector
    #[arg(long)]
    straight_edge: Option<HandleType>,

    /// Fill mode: none, back, front or both
    #[arg(long)]
    fill: Option<FillMode>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args)]
struct MeshArgs {
    #[command(flatten)]
    shape: ShapeArgs,

    /// Arc samples for all corners, or TL,TR,BR,BL
    #[arg(long, value_name = "N[,N,N,N]", value_parser = parse_quad::<i32>, allow_hyphen_values = true)]
    resolutions: Option<[i32; 4]>,

    /// Face layout: ngon, quad or triangle
    #[arg(short, long)]
    polygon_mode: Option<PolygonMode>,

    /// UV layout: stretch, contain or cover
    #[arg(long)]
    uv_profile: Option<UvProfile>,

    #[command(flatten)]
    output: OutputArgs,
}

fn parse_point(s: &str) -> Result<Point2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{v}': {e}"))
    };
    Ok(Point2::new(coord(x)?, coord(y)?))
}

/// One value for all corners, or four comma separated values
fn parse_quad<T>(s: &str) -> Result<[T; 4], String>
where
    T: FromStr + Copy,
    T::Err: std::fmt::Display,
{
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<T>().map_err(|e| format!("'{v}': {e}")))
        .collect::<Result<Vec<T>, String>>()?;
    match values.as_slice() {
        [v] => Ok([*v; 4]),
        [a, b, c, d] => Ok([*a, *b, *c, *d]),
        _ => Err(format!("expected 1 or 4 values, got {}", values.len())),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(level_for_verbosity(cli.verbose, cli.quiet), log_format)?;

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    debug!("Using config path {}", config_path.display());

    match cli.command {
        Command::Config { action } => run_config(action, &config_path, cli.config.is_some()),
        Command::Curve(args) => {
            let config = load_config(&config_path, cli.config.is_some())?;
            run_curve(args, &config)
        }
        Command::Mesh(args) => {
            let config = load_config(&config_path, cli.config.is_some())?;
            run_mesh(args, &config)
        }
    }
}

/// An explicit config file must exist; the platform default may be absent
fn load_config(path: &Path, explicit: bool) -> Result<Config> {
    let config = if explicit {
        Config::load_from_file(path)
    } else {
        Config::load_or_default(path)
    };
    config.with_context(|| format!("Failed to load config from {}", path.display()))
}

fn run_config(action: ConfigAction, path: &Path, explicit: bool) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                );
            }
            Config::default()
                .save_to_file(path)
                .with_context(|| format!("Failed to write config to {}", path.display()))?;
            info!("Wrote default config to {}", path.display());
            println!("{}", path.display());
        }
        ConfigAction::Show { format } => {
            let config = load_config(path, explicit)?;
            print!("{}", config.render(format)?);
        }
        ConfigAction::Path => println!("{}", path.display()),
    }
    Ok(())
}

fn run_curve(args: CurveArgs, config: &Config) -> Result<()> {
    let mut request = config.curve.clone();
    args.shape.apply(
        &mut request.corner_a,
        &mut request.corner_b,
        &mut request.rounding,
        &mut request.corner_policy,
        &mut request.extrusion,
    );
    if let Some(resolution) = args.resolution {
        request.resolution = resolution;
    }
    if let Some(handle) = args.straight_edge {
        request.straight_edge = handle;
    }
    if let Some(fill) = args.fill {
        request.fill_mode = fill;
    }

    let curve = generate_curve(&request, &config.constants);
    info!(
        "Generated curve with {} knots over {}x{}",
        curve.profile.knot_count(),
        curve.rect.width(),
        curve.rect.height()
    );
    write_geometry(&curve.into(), &args.output, &config.output)
}

fn run_mesh(args: MeshArgs, config: &Config) -> Result<()> {
    let mut request = config.mesh.clone();
    args.shape.apply(
        &mut request.corner_a,
        &mut request.corner_b,
        &mut request.rounding,
        &mut request.corner_policy,
        &mut request.extrusion,
    );
    if let Some(resolutions) = args.resolutions {
        request.resolutions = resolutions;
    }
    if let Some(mode) = args.polygon_mode {
        request.polygon_mode = mode;
    }
    if let Some(profile) = args.uv_profile {
        request.uv_profile = profile;
    }

    let mesh = generate_mesh(&request, &config.constants);
    mesh.mesh
        .validate()
        .context("Generated mesh failed validation")?;
    info!(
        "Generated {} mesh with {} vertices and {} faces",
        mesh.polygon_mode,
        mesh.mesh.vertex_count(),
        mesh.mesh.face_count()
    );
    write_geometry(&mesh.into(), &args.output, &config.output)
}

fn write_geometry(geometry: &Geometry, args: &OutputArgs, settings: &OutputSettings) -> Result<()> {
    let format = match (args.format, &args.output) {
        (Some(format), _) => format,
        (None, Some(path)) => OutputFormat::from_path(path).unwrap_or(settings.format),
        (None, None) => settings.format,
    };

    match args.output.as_deref().map(|p| settings.resolve(p)) {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let file = File::create(&path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            make_sink(format, file, settings)
                .realize(geometry)
                .with_context(|| format!("Failed to write {format} to {}", path.display()))?;
            info!("Wrote {} {format} to {}", geometry.kind(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            make_sink(format, stdout.lock(), settings)
                .realize(geometry)
                .with_context(|| format!("Failed to write {format} to stdout"))?;
        }
    }
    Ok(())
}

/// Build the sink for `format`, carrying the configured output options
fn make_sink<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    settings: &OutputSettings,
) -> Box<dyn GeometrySink + 'a> {
    match format {
        OutputFormat::Obj => {
            Box::new(ObjSink::new(writer).with_object_name(settings.object_name.clone()))
        }
        OutputFormat::Svg => Box::new(SvgSink::new(writer).with_margin(settings.svg_margin)),
        OutputFormat::Json => format.sink(writer),
    }
}
