// src/render/pitch.rs
// Half-pitch markings in Opta units.

use std::f64::consts::PI;

use super::layout::PitchFrame;
use super::scene::{Fill, Primitive, Stroke};

const PENALTY_AREA_X: f64 = 83.0;
const PENALTY_AREA_Y: (f64, f64) = (21.1, 78.9);
const SIX_YARD_X: f64 = 94.2;
const SIX_YARD_Y: (f64, f64) = (36.8, 63.2);
const GOAL_Y: (f64, f64) = (45.2, 54.8);
const PENALTY_SPOT_X: f64 = 88.5;
const CIRCLE_RADIUS_M: f64 = 9.15;
const ARC_STEPS: usize = 64;

fn rect(frame: &PitchFrame, x0: f64, x1: f64, y0: f64, y1: f64) -> Vec<(i32, i32)> {
    vec![
        frame.to_px(x0, y0),
        frame.to_px(x1, y0),
        frame.to_px(x1, y1),
        frame.to_px(x0, y1),
    ]
}

/// Arc around `center` for angles in `[from, to]`, screen orientation
/// (positive angles go down).
fn arc(center: (i32, i32), radius: f64, from: f64, to: f64) -> Vec<(i32, i32)> {
    (0..=ARC_STEPS)
        .map(|i| {
            let t = from + (to - from) * i as f64 / ARC_STEPS as f64;
            (
                (center.0 as f64 + radius * t.cos()).round() as i32,
                (center.1 as f64 + radius * t.sin()).round() as i32,
            )
        })
        .collect()
}

pub fn markings(frame: &PitchFrame, line: Stroke, spot_radius: u32) -> Vec<Primitive> {
    let mut out = Vec::new();
    let poly = |points: Vec<(i32, i32)>| Primitive::Polyline { points, stroke: line };

    // Outline, halfway line included as the bottom edge
    let mut outline = rect(frame, 100.0, 50.0, 0.0, 100.0);
    outline.push(outline[0]);
    out.push(poly(outline));

    let box_ = |x: f64, (y0, y1): (f64, f64)| {
        vec![frame.to_px(100.0, y0), frame.to_px(x, y0), frame.to_px(x, y1), frame.to_px(100.0, y1)]
    };
    out.push(poly(box_(PENALTY_AREA_X, PENALTY_AREA_Y)));
    out.push(poly(box_(SIX_YARD_X, SIX_YARD_Y)));

    out.push(Primitive::Polyline {
        points: vec![frame.to_px(100.0, GOAL_Y.0), frame.to_px(100.0, GOAL_Y.1)],
        stroke: Stroke { width: line.width * 3, ..line },
    });

    let radius = frame.metres(CIRCLE_RADIUS_M);

    // Centre circle: only the half above the halfway line is on show
    let centre = frame.to_px(50.0, 50.0);
    out.push(poly(arc(centre, radius, -PI, 0.0)));

    // Penalty arc: the part of the spot's circle outside the area
    let spot = frame.to_px(PENALTY_SPOT_X, 50.0);
    let edge = frame.to_px(PENALTY_AREA_X, 50.0).1;
    let outside: Vec<(i32, i32)> =
        arc(spot, radius, 0.0, PI).into_iter().filter(|p| p.1 >= edge).collect();
    if outside.len() > 1 {
        out.push(poly(outside));
    }

    let dot = |center| Primitive::Circle {
        center,
        radius: spot_radius,
        fill: Some(Fill { color: line.color, alpha: 1.0 }),
        edge: None,
    };
    out.push(dot(spot));
    out.push(dot(centre));
    out
}
