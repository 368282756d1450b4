use vello::kurbo::{Affine, Insets, Rect, RoundedRect, Stroke};
use vello::peniko::Color;
use vello::Scene;

/// A one pixel rounded-rectangle outline whose insets derive from its radius.
///
/// The insets are deliberately asymmetric (more room at the top, left and
/// bottom than at the right) so that text sits visually centered inside the
/// outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedBorder {
    radius: f64,
}

impl RoundedBorder {
    /// A border with corner arcs of diameter `radius`.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// The radius this border was built with.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Space reserved between the widget edge and its content:
    /// top `r + 2`, left `r + 2`, bottom `r + 3`, right `r`.
    pub fn insets(&self) -> Insets {
        let r = self.radius;
        Insets::new(r + 2.0, r + 2.0, r, r + 3.0)
    }

    /// The border never suppresses the widget's own background.
    pub fn is_opaque(&self) -> bool {
        true
    }

    /// The outline for a widget occupying `bounds` (in the space of `transform`).
    pub fn outline(&self, bounds: Rect) -> RoundedRect {
        RoundedRect::new(
            bounds.x0,
            bounds.y0,
            bounds.x0 + (bounds.width() - 1.0).max(0.0),
            bounds.y0 + (bounds.height() - 1.0).max(0.0),
            self.radius / 2.0,
        )
    }

    /// Stroke the outline in `color`.
    pub fn paint(&self, scene: &mut Scene, transform: Affine, bounds: Rect, color: Color) {
        scene.stroke(
            &Stroke::new(1.0),
            transform,
            color,
            None,
            &self.outline(bounds),
        );
    }
}
