//! Pointer-driven particle flow field.
//!
//! Each particle is pushed by a time-varying trigonometric current, pulled
//! toward (or pushed from) the pointer when close, damped, and moved one
//! explicit Euler step per frame. There is no interaction between particles.

use crate::constants::*;
use crate::painter::{Blend, Label, Painter};
use crate::pointer::PointerState;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Uniformly placed inside `width` x `height` with a small random drift.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let pos = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        let vel = Vec2::new(
            rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
            rng.gen_range(-PARTICLE_SPAWN_SPEED..PARTICLE_SPAWN_SPEED),
        );
        let radius = rng.gen_range(PARTICLE_RADIUS_MIN..PARTICLE_RADIUS_MAX);
        Self { pos, vel, radius }
    }

    /// Advance one frame. `t_ms` is the animation timestamp in milliseconds.
    pub fn step(&mut self, width: f32, height: f32, t_ms: f64, pointer: &PointerState) {
        self.vel += flow_force(self.pos, t_ms) * FLOW_GAIN;
        self.vel += pointer_impulse(self.pos, pointer);
        self.vel *= VELOCITY_DAMPING;
        self.pos += self.vel;
        self.pos.x = wrap_coord(self.pos.x, width);
        self.pos.y = wrap_coord(self.pos.y, height);
    }
}

/// Unscaled flow-field vector at `pos` and time `t_ms`, each component in [-1, 1].
#[inline]
pub fn flow_force(pos: Vec2, t_ms: f64) -> Vec2 {
    let fx = ((pos.y * FLOW_SPATIAL_FREQ) as f64 + t_ms * FLOW_TIME_FREQ_X).sin();
    let fy = ((pos.x * FLOW_SPATIAL_FREQ) as f64 - t_ms * FLOW_TIME_FREQ_Y).cos();
    Vec2::new(fx as f32, fy as f32)
}

/// Velocity change caused by the pointer.
///
/// Zero outside the influence radius. Inside it the impulse grows linearly
/// toward the pointer and points away from it while pressed, toward it
/// otherwise.
#[inline]
pub fn pointer_impulse(pos: Vec2, pointer: &PointerState) -> Vec2 {
    let offset = pos - pointer.pos;
    let d2 = offset.length_squared();
    if d2 >= POINTER_RADIUS_SQ {
        return Vec2::ZERO;
    }
    let force = (POINTER_RADIUS_SQ - d2) / POINTER_RADIUS_SQ;
    let sign = if pointer.pressed { 1.0 } else { -1.0 };
    offset * POINTER_GAIN * force * sign
}

/// Soft wrap into `[-WRAP_MARGIN, extent + WRAP_MARGIN]`.
#[inline]
pub fn wrap_coord(v: f32, extent: f32) -> f32 {
    let mut v = v;
    if v < -WRAP_MARGIN {
        v = extent + WRAP_MARGIN;
    }
    if v > extent + WRAP_MARGIN {
        v = -WRAP_MARGIN;
    }
    v
}

/// Number of particles for a `width` x `height` surface.
pub fn particle_count(width: u32, height: u32) -> usize {
    let area = width.max(1) as u64 * height.max(1) as u64;
    let n = (area / PARTICLE_AREA_PER_PARTICLE) as usize;
    n.clamp(PARTICLE_COUNT_MIN, PARTICLE_COUNT_MAX)
}

const FLUID_OVERLAY: Label = Label {
    text: FLUID_LABEL,
    rect: [10.0, 10.0, 310.0, 30.0],
    text_pos: [16.0, 32.0],
    box_color: FLUID_LABEL_BOX,
    text_color: FLUID_LABEL_TEXT,
};

/// The particle collection plus the random source used to (re)populate it.
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(rng: StdRng) -> Self {
        Self {
            particles: Vec::new(),
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Replace every particle with a fresh population sized for the surface.
    pub fn init(&mut self, width: u32, height: u32) {
        let count = particle_count(width, height);
        let (w, h) = (width as f32, height as f32);
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, w, h)).collect();
        log::debug!("[fluid] init {} particles for {}x{}", count, width, height);
    }

    pub fn step(&mut self, width: u32, height: u32, t_ms: f64, pointer: &PointerState) {
        let (w, h) = (width as f32, height as f32);
        for p in &mut self.particles {
            p.step(w, h, t_ms, pointer);
        }
    }

    /// Fade the previous frame, then add the particles on top so they leave trails.
    pub fn render(&self, painter: &mut dyn Painter, width: u32, height: u32) {
        painter.set_blend(Blend::SourceOver);
        painter.fill_rect(0.0, 0.0, width as f32, height as f32, FLUID_FADE);
        painter.set_blend(Blend::Lighter);
        for p in &self.particles {
            painter.fill_circle(p.pos.x, p.pos.y, p.radius, FLUID_PARTICLE);
        }
        painter.set_blend(Blend::SourceOver);
        FLUID_OVERLAY.draw(painter, LABEL_FONT);
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(pos: Vec2) -> Particle {
        Particle {
            pos,
            vel: Vec2::ZERO,
            radius: 1.0,
        }
    }

    #[test]
    fn count_scales_with_area_and_clamps() {
        assert_eq!(particle_count(300, 200), 120);
        assert_eq!(particle_count(1200, 900), 120);
        assert_eq!(particle_count(1920, 1080), 230);
        assert_eq!(particle_count(4000, 3000), 800);
        assert_eq!(particle_count(0, 0), 120);
    }

    #[test]
    fn spawn_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::spawn(&mut rng, 640.0, 480.0);
            assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0);
            assert!(p.vel.x.abs() <= PARTICLE_SPAWN_SPEED);
            assert!(p.vel.y.abs() <= PARTICLE_SPAWN_SPEED);
            assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MAX);
        }
    }

    #[test]
    fn wrap_teleports_to_opposite_margin() {
        assert_eq!(wrap_coord(-10.5, 300.0), 310.0);
        assert_eq!(wrap_coord(310.5, 300.0), -10.0);
        assert_eq!(wrap_coord(-10.0, 300.0), -10.0);
        assert_eq!(wrap_coord(310.0, 300.0), 310.0);
        assert_eq!(wrap_coord(150.0, 300.0), 150.0);
    }

    #[test]
    fn flow_force_matches_closed_form() {
        let f = flow_force(Vec2::new(100.0, 50.0), 1000.0);
        let fx = (50.0f64 * 0.008 + 1000.0 * 0.0009).sin() as f32;
        let fy = (100.0f64 * 0.008 - 1000.0 * 0.0012).cos() as f32;
        assert!((f.x - fx).abs() < 1e-6);
        assert!((f.y - fy).abs() < 1e-6);
    }

    #[test]
    fn single_step_applies_flow_damping_and_integration() {
        let mut p = still(Vec2::new(100.0, 100.0));
        let f = flow_force(p.pos, 0.0);
        p.step(800.0, 600.0, 0.0, &PointerState::default());
        let expected_vel = f * FLOW_GAIN * VELOCITY_DAMPING;
        assert!((p.vel - expected_vel).length() < 1e-6);
        assert!((p.pos - (Vec2::new(100.0, 100.0) + expected_vel)).length() < 1e-4);
    }

    #[test]
    fn pointer_impulse_is_zero_at_and_beyond_radius() {
        let mut ptr = PointerState::default();
        ptr.moved(0.0, 0.0);
        let edge = POINTER_RADIUS_SQ.sqrt();
        assert_eq!(pointer_impulse(Vec2::new(edge + 0.01, 0.0), &ptr), Vec2::ZERO);
        assert_eq!(pointer_impulse(Vec2::new(500.0, 500.0), &ptr), Vec2::ZERO);
        assert_eq!(pointer_impulse(Vec2::ZERO, &ptr), Vec2::ZERO);
    }

    #[test]
    fn release_attracts_press_repels() {
        let pos = Vec2::new(60.0, 40.0);
        let mut ptr = PointerState::default();
        ptr.moved(50.0, 50.0);
        let attract = pointer_impulse(pos, &ptr);
        ptr.set_pressed(true);
        let repel = pointer_impulse(pos, &ptr);
        assert_eq!(attract, -repel);
        // offset is (+10, -10): repel pushes further along it
        assert!(repel.x > 0.0 && repel.y < 0.0);
        assert!(attract.x < 0.0 && attract.y > 0.0);
    }

    #[test]
    fn field_init_replaces_population() {
        let mut field = ParticleField::with_seed(1);
        assert!(field.is_empty());
        field.init(4000, 3000);
        assert_eq!(field.len(), 800);
        field.init(300, 200);
        assert_eq!(field.len(), 120);
    }

    #[test]
    fn render_draws_one_circle_per_particle() {
        use crate::painter::RecordingPainter;
        let mut field = ParticleField::with_seed(3);
        field.init(640, 480);
        let mut rec = RecordingPainter::new();
        field.render(&mut rec, 640, 480);
        assert_eq!(rec.circles().count(), field.len());
    }
}
