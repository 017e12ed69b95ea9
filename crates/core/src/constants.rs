use crate::painter::Rgba;

// Shared tuning constants for both demos.
//
// Everything per-frame here is tuned for a ~60 Hz display cadence. Nothing is
// scaled by elapsed time: a faster display makes the scenes move faster.

// Surface
pub const MIN_SURFACE_WIDTH: u32 = 300;
pub const MIN_SURFACE_HEIGHT: u32 = 200;

// Particle population
pub const PARTICLE_AREA_PER_PARTICLE: u64 = 9000; // device px² per particle
pub const PARTICLE_COUNT_MIN: usize = 120;
pub const PARTICLE_COUNT_MAX: usize = 800;
pub const PARTICLE_SPAWN_SPEED: f32 = 0.4; // initial velocity in [-s, s) per axis
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 2.8;

// Flow field: fx = sin(y * SPATIAL + t * TIME_X), fy = cos(x * SPATIAL - t * TIME_Y)
pub const FLOW_SPATIAL_FREQ: f32 = 0.008;
pub const FLOW_TIME_FREQ_X: f64 = 0.0009;
pub const FLOW_TIME_FREQ_Y: f64 = 0.0012;
pub const FLOW_GAIN: f32 = 0.12;

// Pointer influence
pub const POINTER_RADIUS_SQ: f32 = 20_000.0; // px²
pub const POINTER_GAIN: f32 = 0.0006;
pub const POINTER_ABSENT: f32 = -9999.0; // sentinel used when the pointer leaves

// Integration
pub const VELOCITY_DAMPING: f32 = 0.995;
pub const WRAP_MARGIN: f32 = 10.0;

// Wave packet
pub const WAVE_SPEED: f32 = 1.3; // px per frame
pub const WAVE_WRAP_MARGIN: f32 = 200.0;
pub const WAVE_RESET_CENTER: f32 = -100.0;
pub const WAVE_NUMBER: f32 = 0.06; // k
pub const WAVE_ANGULAR_FREQ: f64 = 0.018; // ω
pub const WAVE_TIME_SCALE: f64 = 0.6;
pub const WAVE_SIGMA_FRACTION: f32 = 0.07; // σ = width * fraction
pub const WAVE_MAX_SAMPLES: usize = 600;
pub const WAVE_HEIGHT_FRACTION: f32 = 0.7;
pub const WAVE_ALPHA_BASE: f32 = 0.35;
pub const WAVE_ALPHA_GAIN: f32 = 2.5;

// Palette
pub const FLUID_FADE: Rgba = Rgba::new(6, 10, 18, 0.14);
pub const FLUID_PARTICLE: Rgba = Rgba::new(140, 220, 255, 0.85);
pub const FLUID_LABEL_BOX: Rgba = Rgba::new(255, 255, 255, 0.06);
pub const FLUID_LABEL_TEXT: Rgba = Rgba::new(230, 238, 246, 1.0); // #e6eef6

pub const QUANTUM_BACKGROUND: Rgba = Rgba::new(7, 16, 38, 1.0); // #071026
pub const QUANTUM_BASELINE: Rgba = Rgba::new(255, 255, 255, 0.06);
pub const QUANTUM_BAR_RGB: [u8; 3] = [120, 200, 255];
pub const QUANTUM_LABEL_BOX: Rgba = Rgba::new(255, 255, 255, 0.08);
pub const QUANTUM_LABEL_TEXT: Rgba = Rgba::new(233, 247, 255, 1.0); // #e9f7ff

// In-canvas labels
pub const LABEL_FONT: &str = "13px system-ui, Arial";
pub const FLUID_LABEL: &str = "Fluid dynamics (simplified demo): click to push particles away";
pub const QUANTUM_LABEL: &str = "Quantum mechanics: |ψ|² density (simplified demo)";
