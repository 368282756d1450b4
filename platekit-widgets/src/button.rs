use platekit_theme::font::FontSpec;
use platekit_theme::icon::Icon;
use platekit_theme::id::WidgetId;
use vello::kurbo::{Affine, Insets, Rect, Size};
use vello::peniko::{Color, Fill};
use vello::Scene;

use crate::border::RoundedBorder;
use crate::label::{content_size, paint_content};
use crate::text::TextPainter;
use crate::widget::{local_transform, HorizontalAlignment, VerticalAlignment, Widget};

/// Content margin used when the button has no border of its own.
const DEFAULT_MARGIN: Insets = Insets {
    x0: 14.0,
    y0: 2.0,
    x1: 14.0,
    y1: 2.0,
};

/// A push button showing text, an icon, or both.
///
/// The button only describes and paints itself; callers attach behavior.
///
/// ### Painting
/// - `content_area_filled` and `opaque`: fill the bounds with the background color.
/// - `border_painted` with a border: stroke the border in the foreground color.
/// - icon and text are then laid out according to the alignments.
#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    icon: Option<Icon>,
    font: FontSpec,
    foreground: Color,
    background: Color,
    border: Option<RoundedBorder>,
    opaque: bool,
    content_area_filled: bool,
    border_painted: bool,
    focusable: bool,
    horizontal_alignment: HorizontalAlignment,
    vertical_text_position: VerticalAlignment,
    bounds: Rect,
}

impl Button {
    /// Create a button labelled `text`.
    pub fn new(text: impl ToString, font: FontSpec) -> Self {
        Self {
            text: text.to_string(),
            icon: None,
            font,
            foreground: Color::BLACK,
            background: Color::from_rgb8(238, 238, 238),
            border: None,
            opaque: true,
            content_area_filled: true,
            border_painted: true,
            focusable: true,
            horizontal_alignment: HorizontalAlignment::Center,
            vertical_text_position: VerticalAlignment::Center,
            bounds: Rect::ZERO,
        }
    }

    /// Set the icon painted before the text.
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the text (and border) color.
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    /// Set the fill color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Set the border.
    pub fn with_border(mut self, border: RoundedBorder) -> Self {
        self.border = Some(border);
        self
    }

    /// Render without fill, without border and out of the focus chain.
    pub fn flat(mut self) -> Self {
        self.opaque = false;
        self.content_area_filled = false;
        self.border_painted = false;
        self.focusable = false;
        self
    }

    /// Set the horizontal placement of the content.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the vertical position of the text relative to the icon.
    pub fn with_vertical_text_position(mut self, position: VerticalAlignment) -> Self {
        self.vertical_text_position = position;
        self
    }

    /// Set whether the border is painted.
    pub fn with_border_painted(mut self, painted: bool) -> Self {
        self.border_painted = painted;
        self
    }

    /// The button text.
    pub fn text(&self) -> &str {
        &self.text
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

    /// The fill color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The border, if any.
    pub fn border(&self) -> Option<&RoundedBorder> {
        self.border.as_ref()
    }

    /// Whether the content area is filled with the background color.
    pub fn is_content_area_filled(&self) -> bool {
        self.content_area_filled
    }

    /// Whether the border is painted.
    pub fn is_border_painted(&self) -> bool {
        self.border_painted
    }

    /// Whether the button takes keyboard focus.
    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// The horizontal placement of the content.
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    /// The vertical position of the text relative to the icon.
    pub fn vertical_text_position(&self) -> VerticalAlignment {
        self.vertical_text_position
    }

    /// Space between the edge and the content.
    pub fn insets(&self) -> Insets {
        self.border
            .map(|border| border.insets())
            .unwrap_or(DEFAULT_MARGIN)
    }
}

impl Widget for Button {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("platekit-widgets", "Button")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn preferred_size(&self, text: &dyn TextPainter) -> Size {
        let content = content_size(self.icon.as_ref(), &self.text, &self.font, text);
        let insets = self.insets();
        Size::new(
            content.width + insets.x_value(),
            content.height + insets.y_value(),
        )
    }

    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter) {
        let transform = local_transform(transform, self.bounds);
        let local = Rect::from_origin_size((0.0, 0.0), self.bounds.size());

        if self.opaque && self.content_area_filled {
            scene.fill(Fill::NonZero, transform, self.background, None, &local);
        }

        if self.border_painted {
            if let Some(border) = &self.border {
                border.paint(scene, transform, local, self.foreground);
            }
        }

        paint_content(
            scene,
            transform,
            local - self.insets(),
            self.horizontal_alignment,
            self.vertical_text_position,
            self.icon.as_ref(),
            &self.text,
            &self.font,
            self.foreground,
            text,
        );
    }

    fn is_opaque(&self) -> bool {
        self.opaque
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::GlyphPainter;

    #[test]
    fn flat_button_paints_nothing_but_content() {
        let mut button = Button::new("", FontSpec::bold(15.0)).flat();
        button.set_bounds(Rect::new(0.0, 0.0, 40.0, 20.0));

        let mut scene = Scene::new();
        button.render(&mut scene, Affine::IDENTITY, &mut GlyphPainter::new());
        assert!(scene.encoding().is_empty());
        assert!(!button.is_focusable());
    }

    #[test]
    fn rounded_button_paints_fill_and_border() {
        let mut button = Button::new("", FontSpec::regular(15.0)).with_border(RoundedBorder::new(6.0));
        button.set_bounds(Rect::new(0.0, 0.0, 80.0, 30.0));

        let mut scene = Scene::new();
        button.render(&mut scene, Affine::IDENTITY, &mut GlyphPainter::new());
        assert!(!scene.encoding().is_empty());
    }

    /// Records where each line of text would be painted.
    #[derive(Default)]
    struct TextOrigins(Vec<f64>);

    impl TextPainter for TextOrigins {
        fn measure(&self, text: &str, _font: &FontSpec) -> Size {
            Size::new(text.chars().count() as f64 * 5.0, 12.0)
        }

        fn draw_text(&mut self, _: &mut Scene, transform: Affine, _: &str, _: &FontSpec, _: Color) {
            self.0.push(transform.translation().y);
        }
    }

    fn text_y(position: VerticalAlignment) -> f64 {
        let icon = Icon::from_image(image::RgbaImage::new(20, 40));
        let mut button = Button::new("OK", FontSpec::regular(10.0))
            .with_icon(icon)
            .with_vertical_text_position(position);
        button.set_bounds(Rect::new(0.0, 0.0, 100.0, 60.0));

        let mut painter = TextOrigins::default();
        button.render(&mut Scene::new(), Affine::IDENTITY, &mut painter);
        assert_eq!(painter.0.len(), 1);
        painter.0[0]
    }

    #[test]
    fn vertical_text_position_moves_text_along_icon() {
        // 40px icon centered in the 56px area between the 2px margins.
        assert_eq!(text_y(VerticalAlignment::Top), 10.0);
        assert_eq!(text_y(VerticalAlignment::Center), 24.0);
        assert_eq!(text_y(VerticalAlignment::Bottom), 38.0);
    }

    #[test]
    fn preferred_size_includes_border_insets() {
        let button = Button::new("AB", FontSpec::regular(10.0)).with_border(RoundedBorder::new(10.0));
        let size = button.preferred_size(&GlyphPainter::new());
        // 2 chars * 6px + left 12 + right 10
        assert!((size.width - 34.0).abs() < 1e-9);
        // 12px line + top 12 + bottom 13
        assert!((size.height - 37.0).abs() < 1e-9);
    }
}
