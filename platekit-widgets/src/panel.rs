use platekit_theme::id::WidgetId;
use vello::kurbo::{Affine, Insets, Rect, RoundedRect, Size};
use vello::peniko::{Color, Fill};
use vello::Scene;

use crate::text::TextPainter;
use crate::widget::{local_transform, BoxedWidget, Widget};

/// Diameter of the panel's corner arcs.
pub const PANEL_ARC: f64 = 30.0;

/// A fixed-size container drawn as a filled rounded rectangle.
///
/// The corners outside the rounded shape are painted in `background`, so the
/// rounding only reads correctly when that color matches whatever the panel
/// sits on.
pub struct RoundedPanel {
    preferred_size: Size,
    panel_color: Color,
    background: Color,
    padding: Insets,
    children: Vec<BoxedWidget>,
    bounds: Rect,
}

impl RoundedPanel {
    /// A panel that prefers `size`.
    pub fn new(size: Size, panel_color: Color, background: Color) -> Self {
        Self {
            preferred_size: size,
            panel_color,
            background,
            padding: Insets::ZERO,
            children: Vec::new(),
            bounds: Rect::from_origin_size((0.0, 0.0), size),
        }
    }

    /// Set the padding children are expected to respect.
    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Add a child. Its bounds are relative to the panel.
    pub fn add(&mut self, child: impl Widget + 'static) {
        self.children.push(Box::new(child));
    }

    /// The children, in paint order.
    pub fn children(&self) -> &[BoxedWidget] {
        &self.children
    }

    /// The rounded fill color.
    pub fn panel_color(&self) -> Color {
        self.panel_color
    }

    /// The color painted behind the rounded corners.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The padding.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The area available to children, in panel coordinates.
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size((0.0, 0.0), self.bounds.size()) - self.padding
    }

    /// The rounded fill for the current size.
    pub fn shape(&self) -> RoundedRect {
        let size = self.bounds.size();
        RoundedRect::new(
            0.0,
            0.0,
            (size.width - 1.0).max(0.0),
            (size.height - 1.0).max(0.0),
            PANEL_ARC / 2.0,
        )
    }
}

impl Widget for RoundedPanel {
    fn widget_id(&self) -> WidgetId {
        WidgetId::new("platekit-widgets", "RoundedPanel")
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn preferred_size(&self, _text: &dyn TextPainter) -> Size {
        self.preferred_size
    }

    fn render(&mut self, scene: &mut Scene, transform: Affine, text: &mut dyn TextPainter) {
        let transform = local_transform(transform, self.bounds);
        let local = Rect::from_origin_size((0.0, 0.0), self.bounds.size());

        scene.fill(Fill::NonZero, transform, self.background, None, &local);
        scene.fill(Fill::NonZero, transform, self.panel_color, None, &self.shape());

        for child in &mut self.children {
            child.render(scene, transform, text);
        }
    }
}
