use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use kurbo::Shape as _;
use usvg::fontdb;

use crate::config::model::{AvatarConfig, Shape};
use crate::foundation::core::{BezPath, Ellipse, Rect, Rgba8};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::render::canvas::RasterCanvas;
use crate::render::fonts::FontLibrary;
use crate::render::text::TextLayoutEngine;

/// Font bytes loaded once per face, shared by every render that uses the face.
#[derive(Clone)]
struct LoadedFace {
    layout_blob: parley::fontique::Blob<u8>,
    glyph_blob: vello_cpu::peniko::Blob<u8>,
    index: u32,
}

impl LoadedFace {
    /// Outline source for a run, using the exact face (blob + index) the layout shaped it with.
    fn glyph_font(&self, blob_id: u64, bytes: &[u8], index: u32) -> vello_cpu::peniko::FontData {
        let blob = if blob_id == self.layout_blob.id() {
            self.glyph_blob.clone()
        } else {
            vello_cpu::peniko::Blob::from(bytes.to_vec())
        };
        vello_cpu::peniko::FontData::new(blob, index)
    }
}

/// CPU rasterizer: background, shape fill, then a centered line of text.
///
/// Renders are independent and may run concurrently; only the face cache is shared.
pub struct Rasterizer {
    fonts: FontLibrary,
    faces: Mutex<HashMap<fontdb::ID, LoadedFace>>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(FontLibrary::system())
    }
}

impl Rasterizer {
    /// Rasterizer drawing text with faces from `fonts`.
    pub fn new(fonts: FontLibrary) -> Self {
        Self {
            fonts,
            faces: Mutex::new(HashMap::new()),
        }
    }

    /// Fonts available to this rasterizer.
    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Mutable access for registering more fonts.
    pub fn fonts_mut(&mut self) -> &mut FontLibrary {
        // Face ids are only meaningful for the database they came from.
        self.faces
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        &mut self.fonts
    }

    /// Render `content` with `config`.
    #[tracing::instrument(skip(self, config), fields(shape = ?config.shape(), size = %config.size()))]
    pub fn render(&self, config: &AvatarConfig, content: &str) -> AvatarResult<RasterCanvas> {
        config.validate()?;
        let size = config.size();
        let (w, h) = (edge_u16(size.width)?, edge_u16(size.height)?);

        let face = self.load_face(config)?;
        let layout = TextLayoutEngine::new().layout_line(
            content,
            face.layout_blob.clone(),
            face.index,
            config.font().style,
            config.font().pixel_size(),
            config.fore_color(),
        )?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        ctx.set_paint(config.background_color().to_paint());
        ctx.fill_rect(&rect_to_cpu(size.bounds()));

        ctx.set_paint(config.effective_fill(content).to_paint());
        match config.shape() {
            Shape::Rectangle => ctx.fill_rect(&rect_to_cpu(size.bounds())),
            Shape::Ellipse => {
                let path = ellipse_path(size.width, size.height);
                ctx.fill_path(&bezpath_to_cpu(&path));
            }
        }

        let ox = (f64::from(size.width) - f64::from(layout.width())) / 2.0;
        let oy = (f64::from(size.height) - f64::from(layout.height())) / 2.0;
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((ox, oy)));
        draw_layout(&mut ctx, &layout, &face);

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        RasterCanvas::from_premul(size.width, size.height, pixmap.data_as_u8_slice())
    }

    fn load_face(&self, config: &AvatarConfig) -> AvatarResult<LoadedFace> {
        let id = self.fonts.resolve(config.font())?;

        let mut faces = self.faces.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(face) = faces.get(&id) {
            return Ok(face.clone());
        }

        let (bytes, index) = self.fonts.face_data(id)?;
        tracing::debug!(
            family = self.fonts.family_name(id).unwrap_or("?"),
            index,
            bytes = bytes.len(),
            "loaded font face"
        );
        let face = LoadedFace {
            layout_blob: parley::fontique::Blob::from(bytes.clone()),
            glyph_blob: vello_cpu::peniko::Blob::from(bytes),
            index,
        };
        faces.insert(id, face.clone());
        Ok(face)
    }
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    layout: &parley::Layout<Rgba8>,
    face: &LoadedFace,
) {
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let run_font = run.run().font();
            let font = face.glyph_font(run_font.data.id(), run_font.data.data(), run_font.index);
            let font_size = run.run().font_size();
            let synthesis = run.run().synthesis();
            // Faux italic: horizontal shear in glyph space.
            let shear = synthesis.skew().map(|deg| {
                vello_cpu::kurbo::Affine::skew(f64::from(deg.to_radians().tan()), 0.0)
            });
            let glyphs: Vec<vello_cpu::Glyph> = run
                .positioned_glyphs()
                .map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                })
                .collect();

            ctx.set_paint(run.style().brush.to_paint());
            let mut builder = ctx.glyph_run(&font).font_size(font_size);
            if let Some(shear) = shear {
                builder = builder.glyph_transform(shear);
            }
            builder.fill_glyphs(glyphs.iter().cloned());

            // Faux bold: widen outlines by an em/24 stroke.
            if synthesis.embolden() {
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(f64::from(font_size) / 24.0));
                let mut builder = ctx.glyph_run(&font).font_size(font_size);
                if let Some(shear) = shear {
                    builder = builder.glyph_transform(shear);
                }
                builder.stroke_glyphs(glyphs.iter().cloned());
            }
        }
    }
}

fn edge_u16(v: u32) -> AvatarResult<u16> {
    v.try_into()
        .map_err(|_| AvatarError::invalid_input(format!("canvas edge {v} exceeds u16")))
}

/// Ellipse inscribed in `(0,0)..(width-1,height-1)`.
pub(crate) fn ellipse_path(width: u32, height: u32) -> BezPath {
    let bounds = Rect::new(
        0.0,
        0.0,
        f64::from(width.saturating_sub(1)),
        f64::from(height.saturating_sub(1)),
    );
    Ellipse::from_rect(bounds).to_path(0.1)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
