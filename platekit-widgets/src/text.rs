//! Text measuring and painting.
//!
//! Widgets never shape text themselves; they hand strings to a
//! [TextPainter]. [GlyphPainter] is the built-in implementation: it lays
//! glyphs out left to right using the font's own advances.

use platekit_theme::font::FontSpec;
use skrifa::instance::{LocationRef, Size as FontSize};
use skrifa::raw::FileRef;
use skrifa::{FontRef, MetadataProvider};
use vello::kurbo::{Affine, Size};
use vello::peniko::{Color, Fill, FontData, Style};
use vello::{Glyph, Scene};

/// Ratio of average glyph advance to font size, used when no font data is available.
pub const AVERAGE_ADVANCE: f64 = 0.6;
/// Ratio of line height to font size.
pub const LINE_HEIGHT: f64 = 1.2;

/// Measures and paints single lines of text.
pub trait TextPainter {
    /// Size of the line box the text would occupy.
    fn measure(&self, text: &str, font: &FontSpec) -> Size;

    /// Paint `text` with its line box's top-left corner at the origin of `transform`.
    fn draw_text(
        &mut self,
        scene: &mut Scene,
        transform: Affine,
        text: &str,
        font: &FontSpec,
        color: Color,
    );
}

/// Paints glyph runs for fonts that carry data.
///
/// A [FontSpec] resolved by family name only has no data; such text is
/// painted with the fallback font if one was supplied and skipped otherwise.
#[derive(Debug, Clone, Default)]
pub struct GlyphPainter {
    fallback: Option<FontData>,
}

impl GlyphPainter {
    /// A painter without a fallback font.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `font` for every [FontSpec] that has no data of its own.
    pub fn with_fallback(mut self, font: FontData) -> Self {
        self.fallback = Some(font);
        self
    }

    fn resolve<'a>(&'a self, font: &'a FontSpec) -> Option<&'a FontData> {
        font.data().or(self.fallback.as_ref())
    }
}

fn font_ref(data: &FontData) -> Option<FontRef<'_>> {
    match FileRef::new(data.data.as_ref()).ok()? {
        FileRef::Font(font) => Some(font),
        FileRef::Collection(collection) => collection.get(data.index).ok(),
    }
}

fn approximate_size(text: &str, font: &FontSpec) -> Size {
    let size = font.size() as f64;
    Size::new(
        text.chars().count() as f64 * size * AVERAGE_ADVANCE,
        size * LINE_HEIGHT,
    )
}

impl TextPainter for GlyphPainter {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        let Some(font_ref) = self.resolve(font).and_then(font_ref) else {
            return approximate_size(text, font);
        };

        let size = FontSize::new(font.size());
        let metrics = font_ref.glyph_metrics(size, LocationRef::default());
        let charmap = font_ref.charmap();
        let width: f32 = text
            .chars()
            .map(|c| {
                let gid = charmap.map(c).unwrap_or_default();
                metrics.advance_width(gid).unwrap_or_default()
            })
            .sum();

        Size::new(width as f64, font.size() as f64 * LINE_HEIGHT)
    }

    fn draw_text(
        &mut self,
        scene: &mut Scene,
        transform: Affine,
        text: &str,
        font: &FontSpec,
        color: Color,
    ) {
        if text.is_empty() {
            return;
        }

        let Some(data) = self.resolve(font) else {
            log::trace!("No font data for '{}', skipping {:?}", font.family(), text);
            return;
        };
        let Some(font_ref) = font_ref(data) else {
            log::trace!("Unreadable font data for '{}'", font.family());
            return;
        };

        let size = FontSize::new(font.size());
        let line = font_ref.metrics(size, LocationRef::default());
        let glyph_metrics = font_ref.glyph_metrics(size, LocationRef::default());
        let charmap = font_ref.charmap();

        // Center the ascent/descent box inside the line box.
        let leading = font.size() * LINE_HEIGHT as f32 - (line.ascent - line.descent);
        let baseline = leading / 2.0 + line.ascent;
        let mut pen_x = 0.0f32;

        scene
            .draw_glyphs(data)
            .font_size(font.size())
            .transform(transform)
            .brush(color)
            .draw(
                &Style::Fill(Fill::NonZero),
                text.chars().map(|c| {
                    let gid = charmap.map(c).unwrap_or_default();
                    let x = pen_x;
                    pen_x += glyph_metrics.advance_width(gid).unwrap_or_default();
                    Glyph {
                        id: gid.to_u32(),
                        x,
                        y: baseline,
                    }
                }),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_without_data_is_approximate() {
        let painter = GlyphPainter::new();
        let size = painter.measure("ABCD", &FontSpec::regular(10.0));
        assert!((size.width - 24.0).abs() < 1e-9);
        assert!((size.height - 12.0).abs() < 1e-9);
    }

    #[test]
    fn drawing_without_data_leaves_scene_empty() {
        let mut painter = GlyphPainter::new();
        let mut scene = Scene::new();
        painter.draw_text(
            &mut scene,
            Affine::IDENTITY,
            "skipped",
            &FontSpec::bold(12.0),
            Color::BLACK,
        );
        assert!(scene.encoding().resources.glyph_runs.is_empty());
        assert!(scene.encoding().is_empty());
    }
}
