// src/render/scene.rs
//! Pure projection from shots + summary to drawing primitives.
//!
//! Nothing here touches a backend: a [`Scene`] is plain data, so layout can be
//! tested by inspecting it and painted onto any [`Surface`](super::Surface).

use crate::config::{RenderConfig, Rgb, consts::{EDGE_WIDTH_PT, PITCH_LINE_WIDTH_PT}};
use crate::data::{SessionSummary, ShotRecord};
use crate::params::Season;

use super::layout::{HEADER, PITCH, PitchFrame, Region, STATS};
use super::pitch;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    pub alpha: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Baseline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSpec {
    /// Pixel height
    pub size: f64,
    pub color: Rgb,
    pub bold: bool,
    pub h: HAlign,
    pub v: VAlign,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle {
        center: (i32, i32),
        radius: u32,
        fill: Option<Fill>,
        edge: Option<Stroke>,
    },
    Polyline {
        points: Vec<(i32, i32)>,
        stroke: Stroke,
    },
    Text {
        text: String,
        at: (i32, i32),
        spec: TextSpec,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Header,
    Legend,
    Pitch,
    Shots,
    Average,
    Stats,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub layer: Layer,
    pub primitive: Primitive,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub items: Vec<Item>,
}

impl Scene {
    pub fn new(size: (u32, u32), background: Rgb) -> Self {
        Self { width: size.0, height: size.1, background, items: Vec::new() }
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn push(&mut self, layer: Layer, primitive: Primitive) {
        self.items.push(Item { layer, primitive });
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Primitive> + '_ {
        self.items.iter().filter(move |i| i.layer == layer).map(|i| &i.primitive)
    }

    /// All text in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.items.iter().filter_map(|i| match &i.primitive {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Shared sizing helpers bound to one config.
struct Pen<'a> {
    cfg: &'a RenderConfig,
    canvas: (u32, u32),
}

impl Pen<'_> {
    fn px(&self, pt: f64) -> u32 {
        (self.cfg.pt(pt).round() as u32).max(1)
    }

    /// Scatter-style size `s` (pt²): the marker is `sqrt(s)` pt across.
    fn radius(&self, size_pt2: f64) -> u32 {
        (self.cfg.pt(size_pt2.max(0.0).sqrt() / 2.0).round() as u32).max(1)
    }

    fn edge(&self) -> Stroke {
        Stroke { color: self.cfg.ink, width: self.px(EDGE_WIDTH_PT) }
    }

    fn text(&self, size_pt: f64, color: Rgb, bold: bool, h: HAlign) -> TextSpec {
        TextSpec { size: self.cfg.pt(size_pt), color, bold, h, v: VAlign::Baseline }
    }

    fn label(&self, region: &Region, ax: f64, ay: f64, text: impl Into<String>, spec: TextSpec) -> Primitive {
        Primitive::Text { text: text.into(), at: region.point(ax, ay, self.canvas), spec }
    }

    fn marker(&self, center: (i32, i32), area_pt2: f64, fill: Fill) -> Primitive {
        Primitive::Circle {
            center,
            radius: self.radius(area_pt2),
            fill: Some(fill),
            edge: Some(self.edge()),
        }
    }
}

/// Build the full map. `records` must be the set `summary` was computed from.
pub fn compose(
    records: &[ShotRecord],
    summary: &SessionSummary,
    player: &str,
    season: &Season,
    cfg: &RenderConfig,
) -> Scene {
    let canvas = cfg.canvas_size();
    let pen = Pen { cfg, canvas };
    let mut scene = Scene::new(canvas, cfg.background);

    header(&mut scene, &pen, player, season);
    legend(&mut scene, &pen);
    pitch_and_shots(&mut scene, &pen, records, summary);
    stat_strip(&mut scene, &pen, summary);
    scene
}

fn header(scene: &mut Scene, pen: &Pen, player: &str, season: &Season) {
    let ink = pen.cfg.ink;
    scene.push(
        Layer::Header,
        pen.label(&HEADER, 0.5, 0.85, player, pen.text(20.0, ink, true, HAlign::Center)),
    );
    scene.push(
        Layer::Header,
        pen.label(
            &HEADER,
            0.5,
            0.7,
            format!("All shots in the {} season", season.label()),
            pen.text(14.0, ink, true, HAlign::Center),
        ),
    );
}

fn legend(scene: &mut Scene, pen: &Pen) {
    let (ink, bg, goal) = (pen.cfg.ink, pen.cfg.background, pen.cfg.goal);
    let hollow = Fill { color: bg, alpha: 1.0 };

    scene.push(
        Layer::Legend,
        pen.label(&HEADER, 0.25, 0.5, "Low Quality Chance", pen.text(12.0, ink, false, HAlign::Center)),
    );
    for (i, ax) in [0.37, 0.42, 0.48, 0.54, 0.6].into_iter().enumerate() {
        let area = 100.0 * (i + 1) as f64;
        scene.push(Layer::Legend, pen.marker(HEADER.point(ax, 0.53, pen.canvas), area, hollow));
    }
    scene.push(
        Layer::Legend,
        pen.label(&HEADER, 0.75, 0.5, "High Quality Chance", pen.text(12.0, ink, false, HAlign::Center)),
    );

    scene.push(
        Layer::Legend,
        pen.label(&HEADER, 0.45, 0.27, "Goal", pen.text(10.0, ink, false, HAlign::Right)),
    );
    scene.push(
        Layer::Legend,
        pen.marker(
            HEADER.point(0.47, 0.3, pen.canvas),
            100.0,
            Fill { color: goal, alpha: pen.cfg.marker_alpha },
        ),
    );
    scene.push(Layer::Legend, pen.marker(HEADER.point(0.53, 0.3, pen.canvas), 100.0, hollow));
    scene.push(
        Layer::Legend,
        pen.label(&HEADER, 0.55, 0.27, "No Goal", pen.text(10.0, ink, false, HAlign::Left)),
    );
}

/// Pitch-y of the average-distance guide.
const AVERAGE_LINE_Y: f64 = 90.0;

fn pitch_and_shots(scene: &mut Scene, pen: &Pen, records: &[ShotRecord], summary: &SessionSummary) {
    let cfg = pen.cfg;
    let frame = PitchFrame::fit(&PITCH, pen.canvas);
    let line = Stroke { color: cfg.ink, width: pen.px(PITCH_LINE_WIDTH_PT) };

    for p in pitch::markings(&frame, line, pen.radius(8.0)) {
        scene.push(Layer::Pitch, p);
    }

    // Average distance guide: goal line → mean x, then the label below it
    let avg = summary.points_average_distance;
    let top = frame.to_px(100.0, AVERAGE_LINE_Y);
    let end = frame.to_px(avg, AVERAGE_LINE_Y);
    scene.push(
        Layer::Average,
        Primitive::Polyline { points: vec![top, end], stroke: Stroke { color: cfg.ink, width: pen.px(2.0) } },
    );
    scene.push(
        Layer::Average,
        Primitive::Circle {
            center: end,
            radius: pen.radius(100.0),
            fill: Some(Fill { color: cfg.ink, alpha: 1.0 }),
            edge: None,
        },
    );
    let spec = TextSpec { v: VAlign::Top, ..pen.text(10.0, cfg.ink, false, HAlign::Center) };
    let (lx, ly) = frame.to_px(avg - 4.0, AVERAGE_LINE_Y);
    scene.push(
        Layer::Average,
        Primitive::Text { text: s!("Average Distance"), at: (lx, ly), spec },
    );
    scene.push(
        Layer::Average,
        Primitive::Text {
            text: format!("{:.1} yards", summary.actual_average_distance),
            at: (lx, ly + (spec.size * 1.2).round() as i32),
            spec,
        },
    );

    for r in records {
        let fill = Fill {
            color: if r.is_goal() { cfg.goal } else { cfg.background },
            alpha: cfg.marker_alpha,
        };
        let center = frame.to_px(r.pitch_x(), r.pitch_y());
        scene.push(Layer::Shots, pen.marker(center, cfg.marker_area_scale * r.xg, fill));
    }
}

fn stat_strip(scene: &mut Scene, pen: &Pen, summary: &SessionSummary) {
    let (ink, goal) = (pen.cfg.ink, pen.cfg.goal);
    let stats = [
        (0.25, "Shots", summary.total_shots.to_string()),
        (0.38, "Goals", summary.total_goals.to_string()),
        (0.53, "xG", format!("{:.2}", summary.total_xg)),
        (0.63, "xG/Shot", format!("{:.2}", summary.xg_per_shot)),
    ];
    for (ax, name, value) in stats {
        scene.push(Layer::Stats, pen.label(&STATS, ax, 0.5, name, pen.text(20.0, ink, true, HAlign::Left)));
        scene.push(Layer::Stats, pen.label(&STATS, ax, 0.0, value, pen.text(16.0, goal, false, HAlign::Left)));
    }
}
