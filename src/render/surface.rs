// src/render/surface.rs
use std::collections::HashMap;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, register_font};

use crate::config::Rgb;
use crate::config::consts::MAX_CANVAS_SIDE_PX;
use crate::error::{Result, ShotMapError};

use super::scene::{HAlign, Primitive, Scene, VAlign};

/// Anything a [`Scene`] can be painted onto.
pub trait Surface {
    fn clear(&mut self, color: Rgb) -> Result<()>;
    fn draw(&mut self, primitive: &Primitive) -> Result<()>;
}

pub fn paint<S: Surface + ?Sized>(scene: &Scene, surface: &mut S) -> Result<()> {
    surface.clear(scene.background)?;
    for item in &scene.items {
        surface.draw(&item.primitive)?;
    }
    Ok(())
}

fn rgb(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn render_err(e: impl std::fmt::Display) -> ShotMapError {
    ShotMapError::Render(e.to_string())
}

/// plotters bitmap backend over a caller-owned RGB buffer.
pub struct BitmapSurface<'a> {
    area: DrawingArea<BitMapBackend<'a>, Shift>,
    family: String,
}

impl<'a> BitmapSurface<'a> {
    pub fn new(area: DrawingArea<BitMapBackend<'a>, Shift>, family: String) -> Self {
        Self { area, family }
    }

    pub fn present(&self) -> Result<()> {
        self.area.present().map_err(render_err)
    }
}

impl Surface for BitmapSurface<'_> {
    fn clear(&mut self, color: Rgb) -> Result<()> {
        self.area.fill(&rgb(color)).map_err(render_err)
    }

    fn draw(&mut self, primitive: &Primitive) -> Result<()> {
        match primitive {
            Primitive::Circle { center, radius, fill, edge } => {
                if let Some(f) = fill {
                    let style = ShapeStyle { color: rgb(f.color).mix(f.alpha), filled: true, stroke_width: 0 };
                    self.area.draw(&Circle::new(*center, *radius, style)).map_err(render_err)?;
                }
                if let Some(e) = edge {
                    let style = ShapeStyle { color: rgb(e.color).to_rgba(), filled: false, stroke_width: e.width };
                    self.area.draw(&Circle::new(*center, *radius, style)).map_err(render_err)?;
                }
            }
            Primitive::Polyline { points, stroke } => {
                let style = ShapeStyle { color: rgb(stroke.color).to_rgba(), filled: false, stroke_width: stroke.width };
                self.area.draw(&PathElement::new(points.clone(), style)).map_err(render_err)?;
            }
            Primitive::Text { text, at, spec } => {
                let weight = if spec.bold { FontStyle::Bold } else { FontStyle::Normal };
                let h = match spec.h {
                    HAlign::Left => HPos::Left,
                    HAlign::Center => HPos::Center,
                    HAlign::Right => HPos::Right,
                };
                let v = match spec.v {
                    VAlign::Top => VPos::Top,
                    VAlign::Baseline => VPos::Bottom,
                };
                let style = FontDesc::new(FontFamily::Name(&self.family), spec.size, weight)
                    .color(&rgb(spec.color))
                    .pos(Pos::new(h, v));
                self.area.draw_text(text, &style, *at).map_err(render_err)?;
            }
        }
        Ok(())
    }
}

/// Register the TTF at `path` with plotters once per path and return the
/// family name to draw with. The file must exist on every call.
pub fn font_family(path: &Path) -> Result<String> {
    static FAMILIES: OnceLock<Mutex<HashMap<PathBuf, String>>> = OnceLock::new();

    let missing = |reason: String| ShotMapError::MissingResource { path: path.to_path_buf(), reason };
    if !path.is_file() {
        return Err(missing(s!("font file not found")));
    }

    let mut families = FAMILIES
        .get_or_init(Default::default)
        .lock()
        .map_err(|_| ShotMapError::Render(s!("font registry poisoned")))?;
    if let Some(family) = families.get(path) {
        return Ok(family.clone());
    }

    let bytes = std::fs::read(path).map_err(|e| missing(e.to_string()))?;
    // plotters keeps registered fonts for the life of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    let family = format!("shot_map_font_{}", families.len());
    for style in [FontStyle::Normal, FontStyle::Bold] {
        register_font(&family, style, bytes).map_err(|_| missing(s!("not a usable TrueType/OpenType font")))?;
    }
    logd!("Font: registered {} as {}", path.display(), family);
    families.insert(path.to_path_buf(), family.clone());
    Ok(family)
}

/// Paint `scene` in memory and encode it as PNG. Nothing touches the disk.
pub fn rasterize(scene: &Scene, font: &Path) -> Result<Vec<u8>> {
    let (w, h) = scene.size();
    if w > MAX_CANVAS_SIDE_PX || h > MAX_CANVAS_SIDE_PX {
        return Err(ShotMapError::InvalidInput(format!(
            "canvas {w}x{h} exceeds {MAX_CANVAS_SIDE_PX} px per side"
        )));
    }
    let family = font_family(font)?;
    let mut buf = vec![0u8; w as usize * h as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (w, h)).into_drawing_area();
        let mut surface = BitmapSurface::new(root, family);
        paint(scene, &mut surface)?;
        surface.present()?;
    }

    let img = image::RgbImage::from_raw(w, h, buf)
        .ok_or_else(|| ShotMapError::Render(s!("pixel buffer does not match canvas size")))?;
    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_matches;

    #[test]
    fn missing_font_is_a_missing_resource() {
        let path = Path::new("definitely/not/here.ttf");
        assert_matches!(font_family(path), Err(ShotMapError::MissingResource { .. }));
    }

    #[test]
    fn oversized_canvas_is_refused_before_allocating() {
        let scene = Scene::new((3_000_000_000, 2550), Rgb::WHITE);
        assert_matches!(
            rasterize(&scene, Path::new("definitely/not/here.ttf")),
            Err(ShotMapError::InvalidInput(_))
        );
    }

    #[test]
    fn garbage_font_is_a_missing_resource() {
        let mut path = std::env::temp_dir();
        path.push("shot_map_garbage_font.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert_matches!(font_family(&path), Err(ShotMapError::MissingResource { .. }));
    }
}
