#![forbid(unsafe_code)]

mod model;
mod summary;

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use voxform_geom::Rgba;
use voxform_mesh_cpu::{Face, NeighborSet, generate_mesh};
use voxform_volume::{BlockId, Palette, Volume};

use crate::summary::MeshSummary;

pub(crate) type BoxError = Box<dyn std::error::Error>;

#[derive(Parser, Debug)]
#[command(name = "voxform", version, about = "Greedy voxel mesher")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Mesh a model file and print a summary
    Mesh {
        model: PathBuf,
        /// Neighbor slab as FACE=MODEL (front, back, top, bottom, right, left)
        #[arg(long = "neighbor", value_parser = parse_neighbor)]
        neighbors: Vec<(Face, PathBuf)>,
    },
    /// Build a generated shape, mesh it and print a summary
    Shape {
        #[arg(value_enum)]
        kind: ShapeKind,
        /// Extents as WxHxD
        #[arg(long)]
        size: Dims,
        #[arg(long, default_value_t = 1.0)]
        voxel_size: f32,
        /// Identifier written into the volume
        #[arg(long, default_value_t = 1)]
        color: u32,
        /// Palette TOML; defaults to a single white entry
        #[arg(long)]
        palette: Option<PathBuf>,
        /// Seed for `random`; defaults to the current time
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ShapeKind {
    Sphere,
    Base,
    Fill,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Dims(usize, usize, usize);

impl FromStr for Dims {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(['x', 'X']).collect();
        let [w, h, d] = parts.as_slice() else {
            return Err(format!("expected WxHxD, got `{s}`"));
        };
        let parse = |p: &str| p.trim().parse::<usize>().map_err(|e| format!("bad extent `{p}`: {e}"));
        Ok(Dims(parse(*w)?, parse(*h)?, parse(*d)?))
    }
}

fn parse_neighbor(s: &str) -> Result<(Face, PathBuf), String> {
    let (face, path) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FACE=MODEL, got `{s}`"))?;
    let face = Face::from_name(face.trim()).ok_or_else(|| format!("unknown face `{face}`"))?;
    Ok((face, PathBuf::from(path)))
}

fn run_mesh(model_path: &Path, neighbor_paths: &[(Face, PathBuf)]) -> Result<MeshSummary, BoxError> {
    let model = model::load_model(model_path)?;
    let slabs = neighbor_paths
        .iter()
        .map(|(face, path)| model::load_slab(path).map(|v| (*face, v)))
        .collect::<Result<Vec<_>, _>>()?;
    let mut neighbors = NeighborSet::new();
    for (face, slab) in &slabs {
        log::debug!("neighbor {} from slab {:?}", face.name(), slab.dims());
        neighbors = neighbors.with(*face, slab);
    }
    let mesh = generate_mesh(&model.volume, &model.palette, Some(&neighbors))?;
    Ok(MeshSummary::of(&mesh))
}

struct ShapeArgs<'a> {
    kind: ShapeKind,
    dims: Dims,
    voxel_size: f32,
    color: u32,
    palette: Option<&'a Path>,
    seed: Option<u64>,
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

fn build_shape(args: &ShapeArgs<'_>, palette_len: usize) -> Result<Volume, BoxError> {
    let Dims(w, h, d) = args.dims;
    let mut volume = Volume::new(w, h, d, args.voxel_size)?;
    let id = BlockId(args.color);
    match args.kind {
        ShapeKind::Sphere => volume.fill_sphere(id),
        ShapeKind::Base => volume.fill_base(id),
        ShapeKind::Fill => volume.fill(id),
        ShapeKind::Random => {
            let seed = args.seed.unwrap_or_else(time_seed);
            log::info!("random fill with seed {seed}");
            volume.fill_random(palette_len, &mut StdRng::seed_from_u64(seed));
        }
    }
    Ok(volume)
}

fn run_shape(args: &ShapeArgs<'_>) -> Result<MeshSummary, BoxError> {
    let palette = match args.palette {
        Some(path) => Palette::from_path(path)?,
        None => Palette::from_colors([Rgba::WHITE]),
    };
    let volume = build_shape(args, palette.len())?;
    let mesh = generate_mesh(&volume, &palette, None)?;
    Ok(MeshSummary::of(&mesh))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match &cli.command {
        Command::Mesh { model, neighbors } => run_mesh(model, neighbors),
        Command::Shape { kind, size, voxel_size, color, palette, seed } => run_shape(&ShapeArgs {
            kind: *kind,
            dims: *size,
            voxel_size: *voxel_size,
            color: *color,
            palette: palette.as_deref(),
            seed: *seed,
        }),
    };
    match result {
        Ok(summary) => {
            print!("{summary}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
