//! Renderer capability and color/shape types
//!
//! The simulation core performs no drawing. A display loop supplies a
//! `Renderer` and walks the world; entities dispatch their visual variant
//! through the trait rather than branching on shape codes.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Emitter color palette
pub const PALETTE: [Rgb; 4] = [
    Rgb::new(57, 212, 203),
    Rgb::new(57, 135, 203),
    Rgb::new(57, 212, 121),
    Rgb::new(178, 117, 203),
];

/// Visual variant of a burst particle, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BurstShape {
    Square,
    Circle,
    Streak,
}

/// Drawing capability consumed by the display loop
///
/// `alpha` is an opacity hint in [0, 1]; implementations free to ignore it.
pub trait Renderer {
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgb, alpha: f32);
    fn fill_square(&mut self, center: Vec2, size: f32, color: Rgb);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgb);
}

/// Renderer that only counts primitives
///
/// Used by the headless binary for run summaries and by tests to assert what
/// would have been drawn.
#[derive(Debug, Default, Clone, Copy)]
pub struct RenderStats {
    pub circles: usize,
    pub squares: usize,
    pub lines: usize,
}

impl RenderStats {
    pub fn total(&self) -> usize {
        self.circles + self.squares + self.lines
    }
}

impl Renderer for RenderStats {
    fn fill_circle(&mut self, _center: Vec2, _diameter: f32, _color: Rgb, _alpha: f32) {
        self.circles += 1;
    }

    fn fill_square(&mut self, _center: Vec2, _size: f32, _color: Rgb) {
        self.squares += 1;
    }

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Rgb) {
        self.lines += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_counts() {
        let mut stats = RenderStats::default();
        stats.fill_circle(Vec2::ZERO, 10.0, PALETTE[0], 1.0);
        stats.fill_circle(Vec2::ONE, 5.0, PALETTE[1], 0.5);
        stats.fill_square(Vec2::ZERO, 4.0, PALETTE[2]);
        stats.stroke_line(Vec2::ZERO, Vec2::ONE, PALETTE[3]);
        assert_eq!(stats.circles, 2);
        assert_eq!(stats.squares, 1);
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.total(), 4);
    }
}
