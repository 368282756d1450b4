use platekit_theme::font::FontSpec;
use platekit_theme::icon::Icon;
use platekit_theme::id::WidgetId;
use vello::kurbo::{Affine, Rect, Size, Vec2};
use vello::peniko::Color;
use vello::Scene;

use crate::text::TextPainter;
use crate::widget::{align, local_transform, HorizontalAlignment, VerticalAlignment, Widget};

/// Gap between an icon and the text next to it.
const ICON_TEXT_GAP: f64 = 4.0;

/// A non-interactive line of text, an icon, or both.
///
/// Labels are transparent: only the icon and text are painted.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    icon: Option<Icon>,
    font: FontSpec,
    foreground: Color,
    horizontal_alignment: HorizontalAlignment,
    bounds: Rect,
}

impl Label {
    /// Create a label showing `text` in `font`.
    pub fn new(text: impl ToString, font: FontSpec) -> Self {
        Self {
            text: text.to_string(),
            icon: None,
            font,
            foreground: Color::BLACK,
            horizontal_alignment: HorizontalAlignment::Leading,
            bounds: Rect::ZERO,
        }
    }

    /// Create a label that only shows `icon`.
    pub fn with_icon_only(icon: Icon) -> Self {
        Self::new("", FontSpec::regular(12.0)).with_icon(icon)
    }

    /// Set the icon painted before the text.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the text color.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the horizontal placement of the content.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// The label text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the label text.
    pub fn set_text(&mut self, text: impl ToString) {
        self.text = text.to_string();
    }

    /// The icon, if any.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    /// The text font.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The text color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// The horizontal placement of the content.
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }
}

/// Size of an optional icon followed by optional text.
pub(crate) fn content_size(
    icon: Option<&Icon>,
    text: &str,
    font: &FontSpec,
    painter: &dyn TextPainter,
) -> Size {
    let icon_size = icon
        .map(|icon| Size::new(icon.width() as f64, icon.height() as f64))
        .unwrap_or(Size::ZERO);
    if text.is_empty() {
        return icon_size;
    }

    let text_size = painter.measure(text, font);
    let gap = if icon_size.width > 0.0 { ICON_TEXT_GAP } else { 0.0 };
    Size::new(
        icon_size.width + gap + text_size.width,
        icon_size.height.max(text_size.height),
    )
}

/// Paint an optional icon followed by optional text, aligned inside `area`.
///
/// The icon is centered on the content box; `text_position` places the text
/// at the top, middle or bottom of it.
#[allow(clippy::too_many_arguments)]
pub(crate) fn paint_content(
    scene: &mut Scene,
    transform: Affine,
    area: Rect,
    horizontal: HorizontalAlignment,
    text_position: VerticalAlignment,
    icon: Option<&Icon>,
    text: &str,
    font: &FontSpec,
    color: Color,
    painter: &mut dyn TextPainter,
) {
    let size = content_size(icon, text, font, painter);
    let origin = align(area, size, horizontal, VerticalAlignment::Center);
    let mut x = origin.x;

    if let Some(icon) = icon.filter(|icon| !icon.is_empty()) {
        let y = origin.y + (size.height - icon.height() as f64) / 2.0;
        scene.draw_image(
            &icon.to_image_brush(),
            transform * Affine::translate(Vec2::new(x, y)),
        );
        x += icon.width() as f64 + ICON_TEXT_GAP;
    }

    if !text.is_empty() {
        let text_size = painter.measure(text, font);
        let y = align(
            Rect::from_origin_size(origin, size),
            text_size,
            HorizontalAlignment::Leading,
            text_position,
        )
        .y;
        painter.draw_text(
            scene,
            transform * Affine::translate(Vec2::new(x, y)),
            text,
            font,
            color,
        );
    }
}

impl Widget for Label {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("platekit-widgets", "Label")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn preferred_size(&self, text: &dyn TextPainter) -> Size {
        content_size(self.icon.as_ref(), &self.text, &self.font, text)
    }

    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter) {
        let local = Rect::from_origin_size((0.0, 0.0), self.bounds.size());
        paint_content(
            scene,
            local_transform(transform, self.bounds),
            local,
            self.horizontal_alignment,
            VerticalAlignment::Center,
            self.icon.as_ref(),
            &self.text,
            &self.font,
            self.foreground,
            text,
        );
    }

    fn is_opaque(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::GlyphPainter;
    use image::RgbaImage;

    #[test]
    fn icon_label_prefers_icon_size() {
        let icon = Icon::from_image(RgbaImage::new(32, 16));
        let label = Label::with_icon_only(icon);
        assert_eq!(label.preferred_size(&GlyphPainter::new()), Size::new(32.0, 16.0));
        assert!(label.text().is_empty());
    }

    #[test]
    fn text_label_measures_text() {
        let label = Label::new("AB", FontSpec::regular(10.0));
        let size = label.preferred_size(&GlyphPainter::new());
        assert!((size.width - 12.0).abs() < 1e-9);
        assert!(!label.is_opaque());
    }
}
