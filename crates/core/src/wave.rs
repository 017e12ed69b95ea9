//! Gaussian wave packet drifting across the surface.
//!
//! Only the packet center is stateful; every sample is recomputed from it and
//! the animation timestamp each frame. The density is the squared amplitude
//! and is deliberately left unnormalized, so its peak is 1.

use crate::constants::*;
use crate::painter::{Label, Painter, Rgba};

/// One column of the density plot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WaveSample {
    pub x: f32,
    pub density: f32,
}

impl WaveSample {
    /// Bar opacity; brighter where the density is higher.
    #[inline]
    pub fn alpha(&self) -> f32 {
        (WAVE_ALPHA_BASE + self.density * WAVE_ALPHA_GAIN).min(1.0)
    }
}

/// Gaussian envelope width for a surface of `width` pixels.
#[inline]
pub fn sigma_for_width(width: f32) -> f32 {
    width * WAVE_SIGMA_FRACTION
}

/// Number of columns sampled across `width` pixels.
#[inline]
pub fn sample_count(width: u32) -> usize {
    ((width / 2) as usize).clamp(2, WAVE_MAX_SAMPLES)
}

/// `|psi(x)|²` for a packet centered at `center` at time `t_ms`.
#[inline]
pub fn density_at(x: f32, center: f32, sigma: f32, t_ms: f64) -> f32 {
    let dx = (x - center) as f64;
    let sigma = sigma as f64;
    let envelope = (-(dx * dx) / (2.0 * sigma * sigma)).exp();
    let phase = WAVE_NUMBER as f64 * dx - WAVE_ANGULAR_FREQ * t_ms * WAVE_TIME_SCALE;
    let psi = envelope * phase.cos();
    (psi * psi) as f32
}

const QUANTUM_OVERLAY: Label = Label {
    text: QUANTUM_LABEL,
    rect: [12.0, 12.0, 220.0, 36.0],
    text_pos: [18.0, 34.0],
    box_color: QUANTUM_LABEL_BOX,
    text_color: QUANTUM_LABEL_TEXT,
};

#[derive(Clone, Debug, PartialEq)]
pub struct WavePacket {
    pub center: f32,
}

impl Default for WavePacket {
    fn default() -> Self {
        Self {
            center: WAVE_RESET_CENTER,
        }
    }
}

impl WavePacket {
    pub fn reset(&mut self) {
        self.center = WAVE_RESET_CENTER;
    }

    /// Move the packet one frame to the right, wrapping back to the left
    /// margin once it has fully left the surface.
    pub fn advance(&mut self, width: u32) {
        self.center += WAVE_SPEED;
        if self.center > width as f32 + WAVE_WRAP_MARGIN {
            self.center = -WAVE_WRAP_MARGIN;
        }
    }

    /// Evenly spaced samples from `x = 0` to `x = width` inclusive.
    pub fn samples(&self, width: u32, t_ms: f64) -> impl Iterator<Item = WaveSample> + '_ {
        let n = sample_count(width);
        let w = width as f32;
        let sigma = sigma_for_width(w);
        let center = self.center;
        (0..n).map(move |i| {
            let x = i as f32 / (n - 1) as f32 * w;
            WaveSample {
                x,
                density: density_at(x, center, sigma, t_ms),
            }
        })
    }

    /// Advance, then draw the density as vertical bars centered on the mid-line.
    pub fn step_and_render(
        &mut self,
        painter: &mut dyn Painter,
        width: u32,
        height: u32,
        t_ms: f64,
    ) {
        self.advance(width);
        self.render(painter, width, height, t_ms);
    }

    pub fn render(&self, painter: &mut dyn Painter, width: u32, height: u32, t_ms: f64) {
        let (w, h) = (width as f32, height as f32);
        let mid = h * 0.5;
        painter.fill_rect(0.0, 0.0, w, h, QUANTUM_BACKGROUND);
        painter.stroke_line([0.0, mid], [w, mid], QUANTUM_BASELINE);

        let col_w = w / sample_count(width) as f32;
        let [r, g, b] = QUANTUM_BAR_RGB;
        for s in self.samples(width, t_ms) {
            let bar_h = s.density * h * WAVE_HEIGHT_FRACTION;
            let color = Rgba::new(r, g, b, s.alpha());
            painter.fill_rect(s.x - col_w * 0.5, mid - bar_h * 0.5, col_w, bar_h, color);
        }

        QUANTUM_OVERLAY.draw(painter, LABEL_FONT);
    }
}
