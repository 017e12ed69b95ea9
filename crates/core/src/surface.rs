use crate::constants::{MIN_SURFACE_HEIGHT, MIN_SURFACE_WIDTH};

/// Backing-store geometry of the drawing canvas.
///
/// `width`/`height` are device pixels; `scale` is the device pixel ratio used
/// to map logical (CSS) drawing units onto them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: MIN_SURFACE_WIDTH,
            height: MIN_SURFACE_HEIGHT,
            scale: 1.0,
        }
    }
}

impl Surface {
    /// Surface for an element laid out at `css_width` x `css_height`.
    pub fn fit(css_width: f64, css_height: f64, scale: f64) -> Self {
        let mut s = Self::default();
        s.resize(css_width, css_height, scale);
        s
    }

    /// Recompute device-pixel dimensions from the on-screen size.
    ///
    /// Dimensions never drop below the minimum surface, and a scale below 1
    /// (or a non-finite one) is treated as 1. Returns `true` when the backing
    /// store size changed.
    pub fn resize(&mut self, css_width: f64, css_height: f64, scale: f64) -> bool {
        let scale = if scale.is_finite() { scale.max(1.0) } else { 1.0 };
        let width = device_px(css_width, scale).max(MIN_SURFACE_WIDTH);
        let height = device_px(css_height, scale).max(MIN_SURFACE_HEIGHT);
        let changed = width != self.width || height != self.height;
        self.width = width;
        self.height = height;
        self.scale = scale;
        changed
    }

    /// Canvas `setTransform` arguments `(a, b, c, d, e, f)`.
    #[inline]
    pub fn transform(&self) -> [f64; 6] {
        [self.scale, 0.0, 0.0, self.scale, 0.0, 0.0]
    }
}

#[inline]
fn device_px(css: f64, scale: f64) -> u32 {
    let px = (css * scale).floor();
    if px.is_finite() && px > 0.0 {
        px.min(u32::MAX as f64) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_scales_by_pixel_ratio() {
        let mut s = Surface::default();
        assert!(s.resize(800.0, 600.0, 2.0));
        assert_eq!((s.width, s.height), (1600, 1200));
        assert_eq!(s.transform(), [2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn resize_enforces_minimum() {
        let s = Surface::fit(10.0, 0.0, 1.0);
        assert_eq!((s.width, s.height), (MIN_SURFACE_WIDTH, MIN_SURFACE_HEIGHT));
    }

    #[test]
    fn resize_is_idempotent() {
        let mut s = Surface::fit(640.5, 480.9, 1.5);
        let before = s;
        assert!(!s.resize(640.5, 480.9, 1.5));
        assert_eq!(s, before);
    }

    #[test]
    fn fractional_scale_below_one_is_floored() {
        let s = Surface::fit(500.0, 400.0, 0.5);
        assert_eq!(s.scale, 1.0);
        assert_eq!((s.width, s.height), (500, 400));
    }
}
