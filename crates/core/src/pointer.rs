use crate::constants::POINTER_ABSENT;
use glam::Vec2;

/// Last known pointer position (surface units) and button state.
///
/// Written by input handlers, read by the particle step. When the pointer is
/// not over the canvas the position sits far outside any plausible surface so
/// proximity checks never fire.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub pressed: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: Vec2::splat(POINTER_ABSENT),
            pressed: false,
        }
    }
}

impl PointerState {
    #[inline]
    pub fn moved(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
    }

    #[inline]
    pub fn entered(&mut self, x: f32, y: f32) {
        self.moved(x, y);
    }

    /// Park the pointer at the sentinel. The pressed flag is left alone, as a
    /// release may still arrive after the pointer exits.
    #[inline]
    pub fn left(&mut self) {
        self.pos = Vec2::splat(POINTER_ABSENT);
    }

    #[inline]
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    #[inline]
    pub fn is_present(&self) -> bool {
        self.pos.x != POINTER_ABSENT || self.pos.y != POINTER_ABSENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_absent_and_released() {
        let p = PointerState::default();
        assert_eq!(p.pos, Vec2::new(-9999.0, -9999.0));
        assert!(!p.pressed);
        assert!(!p.is_present());
    }

    #[test]
    fn leave_parks_position_but_keeps_press() {
        let mut p = PointerState::default();
        p.entered(10.0, 20.0);
        p.set_pressed(true);
        assert!(p.is_present());
        p.left();
        assert!(!p.is_present());
        assert!(p.pressed);
        p.set_pressed(false);
        assert!(!p.pressed);
    }
}
