use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Deserialize)]
pub struct WorldGenConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub world: WorldDims,
    #[serde(default = "default_octaves")]
    pub octaves: Vec<OctaveDef>,
    #[serde(default)]
    pub surface: Surface,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            world: WorldDims::default(),
            octaves: default_octaves(),
            surface: Surface::default(),
        }
    }
}

fn default_seed() -> u64 {
    1337
}

#[derive(Clone, Debug, Deserialize)]
pub struct WorldDims {
    #[serde(default = "default_world_size")]
    pub size: usize,
}
fn default_world_size() -> usize {
    1024
}
impl Default for WorldDims {
    fn default() -> Self {
        Self {
            size: default_world_size(),
        }
    }
}

/// One noise layer: lattice resolution, domain divisor and amplitude.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct OctaveDef {
    pub resolution: usize,
    pub scale: f32,
    pub weight: f32,
}

// Base shape, then two detail layers on small lattices.
fn default_octaves() -> Vec<OctaveDef> {
    vec![
        OctaveDef {
            resolution: 128,
            scale: 32.0,
            weight: 1.0,
        },
        OctaveDef {
            resolution: 16,
            scale: 4.0,
            weight: 0.1,
        },
        OctaveDef {
            resolution: 16,
            scale: 2.0,
            weight: 0.05,
        },
    ]
}

#[derive(Clone, Debug, Deserialize)]
pub struct Surface {
    #[serde(default = "default_horiz_scale")]
    pub horiz_scale: f32,
    #[serde(default = "default_vert_scale")]
    pub vert_scale: f32,
    #[serde(default = "default_low_color")]
    pub low_color: [u8; 3],
    #[serde(default = "default_high_color")]
    pub high_color: [u8; 3],
    #[serde(default)]
    pub normals: NormalMode,
}
fn default_horiz_scale() -> f32 {
    64.0
}
fn default_vert_scale() -> f32 {
    2.0
}
fn default_low_color() -> [u8; 3] {
    [132, 140, 132]
}
fn default_high_color() -> [u8; 3] {
    [200, 200, 230]
}
impl Default for Surface {
    fn default() -> Self {
        Self {
            horiz_scale: default_horiz_scale(),
            vert_scale: default_vert_scale(),
            low_color: default_low_color(),
            high_color: default_high_color(),
            normals: NormalMode::default(),
        }
    }
}

/// How per-triangle normals are derived when meshing.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NormalMode {
    /// Unnormalized `(1, diagonal difference, 1)` per triangle. Cheap, and the
    /// look the terrain was tuned for.
    #[default]
    Diagonal,
    /// Unit face normal from the triangle's edges. Changes shading output.
    Geometric,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OctaveParams {
    pub resolution: usize,
    pub scale: f32,
    pub weight: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceParams {
    pub horiz_scale: f32,
    pub vert_scale: f32,
    pub low_color: [u8; 3],
    pub high_color: [u8; 3],
    pub normals: NormalMode,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WorldGenParams {
    pub seed: u64,
    pub world_size: usize,
    pub octaves: Vec<OctaveParams>,
    pub surface: SurfaceParams,
}

impl Default for WorldGenParams {
    fn default() -> Self {
        Self::from_config(&WorldGenConfig::default())
    }
}

impl WorldGenParams {
    pub fn from_config(cfg: &WorldGenConfig) -> Self {
        Self {
            seed: cfg.seed,
            world_size: cfg.world.size,
            octaves: cfg
                .octaves
                .iter()
                .map(|o| OctaveParams {
                    resolution: o.resolution,
                    scale: o.scale,
                    weight: o.weight,
                })
                .collect(),
            surface: SurfaceParams {
                horiz_scale: cfg.surface.horiz_scale,
                vert_scale: cfg.surface.vert_scale,
                low_color: cfg.surface.low_color,
                high_color: cfg.surface.high_color,
                normals: cfg.surface.normals,
            },
        }
    }

    /// Rejects parameter sets the generator cannot run on.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.world_size < 2 {
            return Err(format!("world size must be at least 2, got {}", self.world_size).into());
        }
        if self.octaves.is_empty() {
            return Err("at least one octave is required".into());
        }
        for (i, o) in self.octaves.iter().enumerate() {
            if o.resolution == 0 {
                return Err(format!("octave {i}: resolution must be non-zero").into());
            }
            if !o.scale.is_finite() || o.scale <= 0.0 {
                return Err(format!("octave {i}: scale must be positive, got {}", o.scale).into());
            }
            if !o.weight.is_finite() {
                return Err(format!("octave {i}: weight must be finite").into());
            }
        }
        Ok(())
    }
}

pub fn parse_params(s: &str) -> Result<WorldGenParams, Box<dyn Error>> {
    let cfg: WorldGenConfig = toml::from_str(s)?;
    let params = WorldGenParams::from_config(&cfg);
    params.validate()?;
    Ok(params)
}

pub fn load_params_from_path(path: &Path) -> Result<WorldGenParams, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let params = parse_params(&s)?;
    log::debug!("worldgen config loaded from {}", path.display());
    Ok(params)
}
