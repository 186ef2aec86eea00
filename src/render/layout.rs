// src/render/layout.rs
// Figure-fraction regions (origin bottom-left, like a plotting figure) and the
// half-pitch frame inside the pitch region.

use crate::data::PITCH_SCALE;

/// Real half-pitch proportions: 52.5 m long, 68 m wide.
pub const HALF_PITCH_LENGTH_M: f64 = 52.5;
pub const PITCH_WIDTH_M: f64 = 68.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

pub const HEADER: Region = Region { left: 0.0, bottom: 0.72, width: 1.0, height: 0.26 };
pub const PITCH: Region = Region { left: 0.05, bottom: 0.14, width: 0.9, height: 0.58 };
pub const STATS: Region = Region { left: 0.0, bottom: 0.03, width: 1.0, height: 0.08 };

impl Region {
    /// Region-relative `(0..1, 0..1)` → canvas pixels (origin top-left).
    pub fn point(&self, ax: f64, ay: f64, canvas: (u32, u32)) -> (i32, i32) {
        let fx = self.left + ax * self.width;
        let fy = self.bottom + ay * self.height;
        (
            (fx * canvas.0 as f64).round() as i32,
            ((1.0 - fy) * canvas.1 as f64).round() as i32,
        )
    }

    /// Pixel rectangle `(left, top, width, height)`.
    pub fn rect(&self, canvas: (u32, u32)) -> (f64, f64, f64, f64) {
        let (w, h) = (canvas.0 as f64, canvas.1 as f64);
        (
            self.left * w,
            (1.0 - self.bottom - self.height) * h,
            self.width * w,
            self.height * h,
        )
    }
}

/// Vertical half pitch, attacking upwards, in Opta coordinates:
/// x runs 50 (halfway) → 100 (goal line, top edge), y runs 100 (left) → 0 (right).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PitchFrame {
    /// Largest frame with real half-pitch proportions centred in `region`.
    pub fn fit(region: &Region, canvas: (u32, u32)) -> Self {
        let (rl, rt, rw, rh) = region.rect(canvas);
        let aspect = HALF_PITCH_LENGTH_M / PITCH_WIDTH_M;
        let (width, height) = if rw * aspect <= rh { (rw, rw * aspect) } else { (rh / aspect, rh) };
        Self {
            left: rl + (rw - width) / 2.0,
            top: rt + (rh - height) / 2.0,
            width,
            height,
        }
    }

    pub fn to_px(&self, x: f64, y: f64) -> (i32, i32) {
        let half = PITCH_SCALE / 2.0;
        (
            (self.left + (PITCH_SCALE - y) / PITCH_SCALE * self.width).round() as i32,
            (self.top + (PITCH_SCALE - x) / half * self.height).round() as i32,
        )
    }

    /// Metres on the real pitch → pixels, for circles and arcs.
    pub fn metres(&self, m: f64) -> f64 {
        m * self.width / PITCH_WIDTH_M
    }
}
