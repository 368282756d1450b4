use platekit_theme::id::WidgetId;
use vello::kurbo::{Affine, Point, Rect, Size};
use vello::Scene;

use crate::text::TextPainter;

/// A styled widget that can paint itself into a vello [Scene].
///
/// Bounds are expressed in the parent's coordinate space. Painting and hit
/// testing happen in widget-local coordinates, where the top-left corner of
/// the bounds is the origin.
pub trait Widget {
    /// The widget type identifier.
    fn widget_id(&self) -> WidgetId;

    /// The widget's bounds in its parent's coordinate space.
    fn bounds(&self) -> Rect;

    /// Move or resize the widget.
    fn set_bounds(&mut self, bounds: Rect);

    /// The size the widget would like to have.
    fn preferred_size(&self, text: &dyn TextPainter) -> Size;

    /// Paint the widget. `transform` maps the parent's space to the scene.
    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter);

    /// Whether the widget paints every pixel of its bounds.
    fn is_opaque(&self) -> bool {
        true
    }

    /// Whether a widget-local point belongs to the widget.
    fn contains(&self, point: Point) -> bool {
        let size = self.bounds().size();
        point.x >= 0.0 && point.y >= 0.0 && point.x < size.width && point.y < size.height
    }
}

/// A boxed [Widget].
pub type BoxedWidget = Box<dyn Widget>;

/// Horizontal placement of content inside a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlignment {
    /// Align to the left edge.
    #[default]
    Leading,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    Trailing,
}

/// Vertical placement of content inside a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlignment {
    /// Align to the top edge.
    Top,
    /// Center vertically.
    #[default]
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Position a `content` sized box inside `area`.
pub fn align(
    area: Rect,
    content: Size,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> Point {
    let x = match horizontal {
        HorizontalAlignment::Leading => area.x0,
        HorizontalAlignment::Center => area.x0 + (area.width() - content.width) / 2.0,
        HorizontalAlignment::Trailing => area.x1 - content.width,
    };
    let y = match vertical {
        VerticalAlignment::Top => area.y0,
        VerticalAlignment::Center => area.y0 + (area.height() - content.height) / 2.0,
        VerticalAlignment::Bottom => area.y1 - content.height,
    };
    Point::new(x, y)
}

/// The transform that maps widget-local coordinates to the scene.
pub(crate) fn local_transform(parent: Affine, bounds: Rect) -> Affine {
    parent * Affine::translate(bounds.origin().to_vec2())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_centers_content() {
        let area = Rect::new(10.0, 10.0, 110.0, 50.0);
        let origin = align(
            area,
            Size::new(20.0, 10.0),
            HorizontalAlignment::Center,
            VerticalAlignment::Center,
        );
        assert_eq!(origin, Point::new(50.0, 25.0));
    }

    #[test]
    fn align_trailing_bottom() {
        let area = Rect::new(0.0, 0.0, 100.0, 40.0);
        let origin = align(
            area,
            Size::new(30.0, 10.0),
            HorizontalAlignment::Trailing,
            VerticalAlignment::Bottom,
        );
        assert_eq!(origin, Point::new(70.0, 30.0));
    }
}
