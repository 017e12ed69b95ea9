//! Simulation context shared by the frame loop and the input handlers.

use crate::mode::Mode;
use crate::painter::Painter;
use crate::particles::ParticleField;
use crate::pointer::PointerState;
use crate::surface::Surface;
use crate::wave::WavePacket;
use rand::rngs::StdRng;

/// Timestamps of the display-refresh callbacks.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameClock {
    pub last_ms: Option<f64>,
    pub dt_ms: f64,
    pub elapsed_ms: f64,
    pub frames: u64,
}

impl FrameClock {
    /// Record a new frame timestamp and return the time since the previous one.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = match self.last_ms {
            Some(prev) => (now_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.dt_ms = dt;
        self.elapsed_ms += dt;
        self.frames += 1;
        dt
    }
}

/// Everything one frame needs: surface, pointer, active mode and both views.
///
/// Both views are always kept initialized, so switching mode never shows a
/// stale frame.
pub struct SimContext {
    surface: Surface,
    mode: Mode,
    pub pointer: PointerState,
    field: ParticleField,
    wave: WavePacket,
    clock: FrameClock,
}

impl SimContext {
    pub fn new(surface: Surface, rng: StdRng) -> Self {
        let mut ctx = Self {
            surface,
            mode: Mode::default(),
            pointer: PointerState::default(),
            field: ParticleField::new(rng),
            wave: WavePacket::default(),
            clock: FrameClock::default(),
        };
        ctx.reset();
        ctx
    }

    pub fn with_seed(surface: Surface, seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(surface, StdRng::seed_from_u64(seed))
    }

    /// Repopulate the particle field for the current surface and rewind the
    /// wave packet.
    pub fn reset(&mut self) {
        self.field.init(self.surface.width, self.surface.height);
        self.wave.reset();
        log::debug!(
            "[sim] reset mode={} surface={}x{} particles={}",
            self.mode,
            self.surface.width,
            self.surface.height,
            self.field.len()
        );
    }

    /// Switch the active view and reset before the next frame renders.
    pub fn set_mode(&mut self, mode: Mode) {
        if mode != self.mode {
            log::info!("[mode] {} -> {}", self.mode, mode);
        }
        self.mode = mode;
        self.reset();
    }

    /// Resize the surface; existing particles are kept and wrap into the
    /// new bounds on their own.
    pub fn resize(&mut self, css_width: f64, css_height: f64, scale: f64) -> bool {
        self.surface.resize(css_width, css_height, scale)
    }

    /// One animation tick: advance the active view and draw it.
    pub fn frame(&mut self, now_ms: f64, painter: &mut dyn Painter) {
        self.clock.tick(now_ms);
        let Surface { width, height, .. } = self.surface;
        match self.mode {
            Mode::Fluid => {
                self.field.step(width, height, now_ms, &self.pointer);
                self.field.render(painter, width, height);
            }
            Mode::Quantum => {
                self.wave.step_and_render(painter, width, height, now_ms);
            }
        }
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn wave(&self) -> &WavePacket {
        &self.wave
    }

    #[inline]
    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }
}
