use platekit_theme::font::FontSpec;
use platekit_theme::id::WidgetId;
use vello::kurbo::{Affine, BezPath, Insets, Rect, Size, Vec2};
use vello::peniko::{Color, Fill};
use vello::Scene;

use crate::border::RoundedBorder;
use crate::text::TextPainter;
use crate::widget::{align, local_transform, HorizontalAlignment, VerticalAlignment, Widget};

const ARROW_WIDTH: f64 = 8.0;
const ARROW_HEIGHT: f64 = 4.0;
const ARROW_GAP: f64 = 6.0;
const DEFAULT_INSETS: Insets = Insets {
    x0: 2.0,
    y0: 2.0,
    x1: 2.0,
    y1: 2.0,
};

/// A dropdown selecting one string out of a list.
///
/// Only the closed state is painted here: the selected item and an arrow.
/// Showing the popup list is up to the host.
#[derive(Debug, Clone)]
pub struct ComboBox {
    items: Vec<String>,
    selected: Option<usize>,
    font: FontSpec,
    foreground: Color,
    background: Color,
    border: Option<RoundedBorder>,
    lightweight_popup: bool,
    bounds: Rect,
}

impl ComboBox {
    /// An empty dropdown.
    pub fn new(font: FontSpec) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            font,
            foreground: Color::BLACK,
            background: Color::WHITE,
            border: None,
            lightweight_popup: true,
            bounds: Rect::ZERO,
        }
    }

    /// Set the text and arrow color.
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

    /// Whether the popup should be drawn inside the window rather than as its own surface.
    pub fn with_lightweight_popup(mut self, lightweight: bool) -> Self {
        self.lightweight_popup = lightweight;
        self
    }

    /// Append an item. The first item added becomes the selection.
    pub fn add_item(&mut self, item: impl ToString) {
        self.items.push(item.to_string());
        if self.selected.is_none() {
            self.selected = Some(0);
        }
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.selected = None;
    }

    /// The items in order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the selected item.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected item.
    pub fn selected_item(&self) -> Option<&str> {
        self.selected
            .and_then(|index| self.items.get(index))
            .map(String::as_str)
    }

    /// Select by index; out-of-range indices clear the selection.
    pub fn set_selected_index(&mut self, index: Option<usize>) {
        self.selected = index.filter(|index| *index < self.items.len());
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

    /// Whether the popup is lightweight.
    pub fn is_lightweight_popup(&self) -> bool {
        self.lightweight_popup
    }

    fn insets(&self) -> Insets {
        self.border
            .map(|border| border.insets())
            .unwrap_or(DEFAULT_INSETS)
    }

    fn arrow(&self, area: Rect) -> BezPath {
        let origin = align(
            area,
            Size::new(ARROW_WIDTH, ARROW_HEIGHT),
            HorizontalAlignment::Trailing,
            VerticalAlignment::Center,
        );
        let mut path = BezPath::new();
        path.move_to(origin);
        path.line_to(origin + Vec2::new(ARROW_WIDTH, 0.0));
        path.line_to(origin + Vec2::new(ARROW_WIDTH / 2.0, ARROW_HEIGHT));
        path.close_path();
        path
    }
}

impl Widget for ComboBox {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("platekit-widgets", "ComboBox")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn preferred_size(&self, text: &dyn TextPainter) -> Size {
        let widest = self
            .items
            .iter()
            .map(|item| text.measure(item, &self.font).width)
            .fold(0.0, f64::max);
        let line = text.measure("", &self.font).height;
        let insets = self.insets();
        Size::new(
            widest + ARROW_GAP + ARROW_WIDTH + insets.x_value(),
            line + insets.y_value(),
        )
    }

    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter) {
        let transform = local_transform(transform, self.bounds);
        let local = Rect::from_origin_size((0.0, 0.0), self.bounds.size());
        let content = local - self.insets();

        scene.fill(Fill::NonZero, transform, self.background, None, &local);
        if let Some(border) = &self.border {
            border.paint(scene, transform, local, self.foreground);
        }

        if let Some(item) = self.selected_item() {
            let size = text.measure(item, &self.font);
            let origin = align(
                content,
                size,
                HorizontalAlignment::Leading,
                VerticalAlignment::Center,
            );
            text.draw_text(
                scene,
                transform * Affine::translate(origin.to_vec2()),
                item,
                &self.font,
                self.foreground,
            );
        }

        scene.fill(
            Fill::NonZero,
            transform,
            self.foreground,
            None,
            &self.arrow(content),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_is_selected() {
        let mut combo = ComboBox::new(FontSpec::regular(14.0));
        assert_eq!(combo.selected_item(), None);

        combo.add_item("Compact");
        combo.add_item("SUV");
        assert_eq!(combo.selected_item(), Some("Compact"));

        combo.set_selected_index(Some(1));
        assert_eq!(combo.selected_item(), Some("SUV"));

        combo.set_selected_index(Some(5));
        assert_eq!(combo.selected_index(), None);
    }

    #[test]
    fn clear_drops_selection() {
        let mut combo = ComboBox::new(FontSpec::regular(14.0));
        combo.add_item("Van");
        combo.clear();
        assert!(combo.items().is_empty());
        assert_eq!(combo.selected_item(), None);
    }
}
