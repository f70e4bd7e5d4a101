use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use knoll_mesh_cpu::{Vertex, build_terrain_mesh};
use knoll_world::{HeightField, NormalMode, WorldGenParams, load_params_from_path};

mod view;

use view::ModelTransform;

#[derive(Parser, Debug)]
#[command(name = "knoll", about = "Procedural heightfield terrain generator")]
struct Args {
    /// Worldgen TOML; built-in defaults when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides the config seed.
    #[arg(long)]
    seed: Option<u64>,
    /// Overrides the heightfield edge length.
    #[arg(long)]
    size: Option<usize>,
    /// Use unit face normals instead of the diagonal shading vectors.
    #[arg(long)]
    geometric_normals: bool,
    /// Number of frames of model transform to trace at debug level.
    #[arg(long, default_value_t = 0)]
    frames: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => load_params_from_path(path)?,
        None => WorldGenParams::default(),
    };
    apply_overrides(&mut params, &args);
    params.validate()?;

    log::info!(
        "generating {}x{} terrain, seed {}, {} octave(s)",
        params.world_size,
        params.world_size,
        params.seed,
        params.octaves.len()
    );
    let t0 = Instant::now();
    let heightfield = HeightField::from_seed(&params);
    let (lo, hi) = heightfield.min_max().unwrap_or_default();
    log::info!(
        "heightfield ready in {:.1} ms (elevation {:.3}..{:.3})",
        t0.elapsed().as_secs_f64() * 1000.0,
        lo,
        hi
    );

    let t1 = Instant::now();
    let mesh = build_terrain_mesh(&heightfield, &params.surface);
    log::info!(
        "mesh ready in {:.1} ms: {} vertices, {} triangles",
        t1.elapsed().as_secs_f64() * 1000.0,
        mesh.len(),
        mesh.triangle_count()
    );
    if let Some(bb) = mesh.bounds() {
        log::info!("mesh bounds min {:?} max {:?}", bb.min, bb.max);
    }

    let vertices = mesh.into_vertices();
    trace_frames(&vertices, args.frames);
    Ok(())
}

/// Command-line flags win over whatever the config file set.
fn apply_overrides(params: &mut WorldGenParams, args: &Args) {
    if let Some(seed) = args.seed {
        params.seed = seed;
    }
    if let Some(size) = args.size {
        params.world_size = size;
    }
    if args.geometric_normals {
        params.surface.normals = NormalMode::Geometric;
    }
}

/// Stands in for the display loop: the transform is recomputed from the frame
/// index every frame.
fn trace_frames(vertices: &[Vertex], frames: u64) {
    let Some(first) = vertices.first() else {
        return;
    };
    for frame in 0..frames {
        let t = ModelTransform::at_frame(frame);
        log::debug!(
            "frame {frame}: angle {:.4} first vertex -> {:?}",
            t.angle,
            t.apply(first.position)
        );
    }
}
