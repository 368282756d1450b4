//! Single-line input fields with rounded corners.
//!
//! Both fields share [RoundedField]: it fills and outlines a rounded
//! rectangle instead of using a border, and only accepts points inside that
//! rounded shape so clicks on the clipped corners fall through.

use std::cell::Cell;

use platekit_theme::font::FontSpec;
use platekit_theme::id::WidgetId;
use vello::kurbo::{Affine, Line, Point, Rect, RoundedRect, Shape, Size, Stroke, Vec2};
use vello::peniko::{Color, Fill};
use vello::Scene;

use crate::text::{TextPainter, AVERAGE_ADVANCE, LINE_HEIGHT};
use crate::text_buffer::TextBuffer;
use crate::widget::{local_transform, Widget};

/// Diameter of the field's corner arcs.
pub const FIELD_ARC: f64 = 15.0;
/// Horizontal space between the outline and the text.
const TEXT_MARGIN: f64 = 4.0;
/// Character used to hide password input.
pub const MASK_CHAR: char = '•';

/// The hit-test shape of a field, kept until the field changes size.
#[derive(Debug, Default)]
pub struct ShapeCache {
    cached: Cell<Option<(Size, RoundedRect)>>,
}

impl ShapeCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shape for `size`, rebuilt with `build` if the cached one was made for another size.
    pub fn get_or_update(&self, size: Size, build: impl FnOnce(Size) -> RoundedRect) -> RoundedRect {
        match self.cached.get() {
            Some((cached_size, shape)) if cached_size == size => shape,
            _ => {
                let shape = build(size);
                self.cached.set(Some((size, shape)));
                shape
            },
        }
    }

    /// The last shape built, if any.
    pub fn cached(&self) -> Option<RoundedRect> {
        self.cached.get().map(|(_, shape)| shape)
    }
}

/// The rounded rectangle covering a field of `size`, one pixel short on the
/// right and bottom edges.
pub fn field_outline(size: Size) -> RoundedRect {
    RoundedRect::new(
        0.0,
        0.0,
        (size.width - 1.0).max(0.0),
        (size.height - 1.0).max(0.0),
        FIELD_ARC / 2.0,
    )
}

/// State and painting shared by [RoundedTextField] and [RoundedPasswordField].
#[derive(Debug)]
pub struct RoundedField {
    buffer: TextBuffer,
    columns: u32,
    font: FontSpec,
    foreground: Color,
    background: Color,
    focused: bool,
    bounds: Rect,
    shape: ShapeCache,
}

impl RoundedField {
    /// A field sized for `columns` characters.
    pub fn new(columns: u32, font: FontSpec) -> Self {
        Self {
            buffer: TextBuffer::new(),
            columns,
            font,
            foreground: Color::BLACK,
            background: Color::WHITE,
            focused: false,
            bounds: Rect::ZERO,
            shape: ShapeCache::new(),
        }
    }

    /// The text model.
    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The text model, for editing.
    pub fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// The number of columns the preferred width is based on.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// The text font.
    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    /// The text and outline color.
    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// The fill color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Whether the caret is shown.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Show or hide the caret.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The cached hit-test shape.
    pub fn shape_cache(&self) -> &ShapeCache {
        &self.shape
    }

    fn preferred_size(&self) -> Size {
        let size = self.font.size() as f64;
        Size::new(
            self.columns as f64 * size * AVERAGE_ADVANCE + 2.0 * TEXT_MARGIN,
            size * LINE_HEIGHT * 1.25,
        )
    }

    fn contains(&self, point: Point) -> bool {
        let size = self.bounds.size();
        // A degenerate rounded rect still contains its own corner point.
        if size.is_zero_area() {
            return false;
        }
        self.shape.get_or_update(size, field_outline).contains(point)
    }

    /// Fill, text, caret, outline. `shown` is the text as it should appear.
    fn render(
        &self,
        scene: &mut Scene,
        transform: Affine,
        painter: &mut dyn TextPainter,
        shown: &str,
        shown_before_cursor: &str,
    ) {
        let transform = local_transform(transform, self.bounds);
        let outline = field_outline(self.bounds.size());

        scene.fill(Fill::NonZero, transform, self.background, None, &outline);

        let line = painter.measure(shown, &self.font).height;
        let y = (self.bounds.height() - line) / 2.0;
        painter.draw_text(
            scene,
            transform * Affine::translate(Vec2::new(TEXT_MARGIN, y)),
            shown,
            &self.font,
            self.foreground,
        );

        if self.focused {
            let x = TEXT_MARGIN + painter.measure(shown_before_cursor, &self.font).width;
            scene.stroke(
                &Stroke::new(1.0),
                transform,
                self.foreground,
                None,
                &Line::new((x, y), (x, y + line)),
            );
        }

        scene.stroke(&Stroke::new(1.0), transform, self.foreground, None, &outline);
    }
}

macro_rules! field_accessors {
    () => {
        /// Set the text and outline color.
        pub fn with_foreground(mut self, color: Color) -> Self {
            self.field.foreground = color;
            self
        }

        /// Set the fill color.
        pub fn with_background(mut self, color: Color) -> Self {
            self.field.background = color;
            self
        }

        /// The shared field state.
        pub fn field(&self) -> &RoundedField {
            &self.field
        }

        /// The shared field state, for editing and focus changes.
        pub fn field_mut(&mut self) -> &mut RoundedField {
            &mut self.field
        }

        /// The number of columns the preferred width is based on.
        pub fn columns(&self) -> u32 {
            self.field.columns
        }

        /// The text font.
        pub fn font(&self) -> &FontSpec {
            &self.field.font
        }

        /// The text and outline color.
        pub fn foreground(&self) -> Color {
            self.field.foreground
        }

        /// The fill color.
        pub fn background(&self) -> Color {
            self.field.background
        }
    };
}

macro_rules! field_widget {
    ($name:literal) => {
        fn widget_id(&self) -> WidgetId {
            WidgetId::new("platekit-widgets", $name)
        }

        fn bounds(&self) -> Rect {
            self.field.bounds
        }

        fn set_bounds(&mut self, bounds: Rect) {
            self.field.bounds = bounds;
        }

        fn preferred_size(&self, _text: &dyn TextPainter) -> Size {
            self.field.preferred_size()
        }

        fn is_opaque(&self) -> bool {
            false
        }

        fn contains(&self, point: Point) -> bool {
            self.field.contains(point)
        }
    };
}

/// An editable single-line text field with rounded corners.
#[derive(Debug)]
pub struct RoundedTextField {
    field: RoundedField,
}

impl RoundedTextField {
    /// An empty field sized for `columns` characters.
    pub fn new(columns: u32, font: FontSpec) -> Self {
        Self {
            field: RoundedField::new(columns, font),
        }
    }

    /// Set the initial text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.field.buffer.set_text(text);
        self
    }

    field_accessors!();

    /// The current text.
    pub fn text(&self) -> &str {
        self.field.buffer.text()
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.field.buffer.set_text(text);
    }
}

impl Widget for RoundedTextField {
    field_widget!("RoundedTextField");

    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter) {
        let buffer = &self.field.buffer;
        self.field.render(
            scene,
            transform,
            text,
            buffer.text(),
            buffer.text_before_cursor(),
        );
    }
}

/// A single-line password field with rounded corners. Input is painted masked.
#[derive(Debug)]
pub struct RoundedPasswordField {
    field: RoundedField,
    mask_char: char,
}

impl RoundedPasswordField {
    /// An empty field sized for `columns` characters.
    pub fn new(columns: u32, font: FontSpec) -> Self {
        Self {
            field: RoundedField::new(columns, font),
            mask_char: MASK_CHAR,
        }
    }

    /// Use another mask character.
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    field_accessors!();

    /// The entered password in clear text.
    pub fn password(&self) -> &str {
        self.field.buffer.text()
    }

    /// Replace the password.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.field.buffer.set_text(password);
    }

    /// The password as painted.
    pub fn masked_text(&self) -> String {
        self.mask(self.field.buffer.len())
    }

    fn mask(&self, count: usize) -> String {
        std::iter::repeat(self.mask_char).take(count).collect()
    }
}

impl Widget for RoundedPasswordField {
    field_widget!("RoundedPasswordField");

    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter) {
        let shown = self.masked_text();
        let before_cursor = self.mask(self.field.buffer.cursor().position);
        self.field
            .render(scene, transform, text, &shown, &before_cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::GlyphPainter;

    fn field(width: f64, height: f64) -> RoundedTextField {
        let mut field = RoundedTextField::new(10, FontSpec::regular(16.0));
        field.set_bounds(Rect::new(40.0, 40.0, 40.0 + width, 40.0 + height));
        field
    }

    #[test]
    fn corners_are_outside() {
        let field = field(120.0, 30.0);
        assert!(!field.contains(Point::new(0.0, 0.0)));
        assert!(!field.contains(Point::new(118.5, 28.5)));
        assert!(field.contains(Point::new(60.0, 15.0)));
        assert!(field.contains(Point::new(1.0, 15.0)));
    }

    #[test]
    fn shape_follows_resize() {
        let mut field = field(120.0, 30.0);
        assert!(field.field().shape_cache().cached().is_none());

        field.contains(Point::new(60.0, 15.0));
        let first = field.field().shape_cache().cached().unwrap();
        assert_eq!(first.rect(), Rect::new(0.0, 0.0, 119.0, 29.0));

        field.set_bounds(Rect::new(40.0, 40.0, 240.0, 80.0));
        assert!(field.contains(Point::new(180.0, 35.0)));
        let second = field.field().shape_cache().cached().unwrap();
        assert_eq!(second.rect(), Rect::new(0.0, 0.0, 199.0, 39.0));
    }

    #[test]
    fn moving_keeps_cached_shape() {
        let mut field = field(120.0, 30.0);
        field.contains(Point::new(60.0, 15.0));

        let cache = field.field().shape_cache();
        let rebuilt = cache.get_or_update(Size::new(120.0, 30.0), |_| panic!("shape was rebuilt"));
        assert_eq!(rebuilt.rect(), Rect::new(0.0, 0.0, 119.0, 29.0));

        field.set_bounds(Rect::new(0.0, 0.0, 120.0, 30.0));
        assert!(field.contains(Point::new(60.0, 15.0)));
    }

    #[test]
    fn unsized_field_contains_nothing() {
        let field = RoundedTextField::new(10, FontSpec::regular(16.0));
        assert!(!field.contains(Point::new(0.0, 0.0)));
        assert!(field.field().shape_cache().cached().is_none());

        let mut flat = field;
        flat.set_bounds(Rect::new(10.0, 10.0, 110.0, 10.0));
        assert!(!flat.contains(Point::new(0.0, 0.0)));
        assert!(!flat.contains(Point::new(50.0, 0.0)));
    }

    #[test]
    fn password_is_masked() {
        let mut field = RoundedPasswordField::new(8, FontSpec::regular(16.0));
        field.set_password("hunter2");
        assert_eq!(field.password(), "hunter2");
        assert_eq!(field.masked_text(), "•••••••");

        field.field_mut().buffer_mut().delete_backward();
        assert_eq!(field.masked_text().chars().count(), 6);
    }

    #[test]
    fn fields_are_transparent_and_paint_rounded_fill() {
        let mut field = field(120.0, 30.0);
        assert!(!field.is_opaque());

        let mut scene = Scene::new();
        field.render(&mut scene, Affine::IDENTITY, &mut GlyphPainter::new());
        assert!(!scene.encoding().is_empty());
    }

    #[test]
    fn preferred_width_scales_with_columns() {
        let painter = GlyphPainter::new();
        let narrow = RoundedTextField::new(5, FontSpec::regular(10.0)).preferred_size(&painter);
        let wide = RoundedTextField::new(10, FontSpec::regular(10.0)).preferred_size(&painter);
        assert!((wide.width - narrow.width - 30.0).abs() < 1e-9);
    }
}
