#![warn(missing_docs)]

//! Pre-styled, rounded-corner widgets for vello-based desktop UIs.
//!
//! ```rust
//! use platekit::prelude::*;
//!
//! let style = StyleProvider::new();
//! let mut field = style.create_txt_rounded("", style.palette().white, style.palette().black, 12);
//! field.set_bounds(Rect::new(0.0, 0.0, 160.0, 32.0));
//! assert!(!field.contains(Point::new(0.0, 0.0)));
//! ```

pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use platekit_theme as theme;
pub use platekit_widgets as widgets;

/// A "prelude" for users of platekit.
///
/// Importing this module brings into scope the most common types
/// needed to build styled views.
///
/// ```rust
/// use platekit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::theme::config::StyleConfig;
    pub use crate::theme::font::{FontSpec, FontWeight};
    pub use crate::theme::icon::Icon;
    pub use crate::theme::palette::Palette;

    pub use crate::widgets::border::RoundedBorder;
    pub use crate::widgets::button::Button;
    pub use crate::widgets::combo_box::ComboBox;
    pub use crate::widgets::label::Label;
    pub use crate::widgets::panel::RoundedPanel;
    pub use crate::widgets::provider::StyleProvider;
    pub use crate::widgets::rounded_field::{RoundedPasswordField, RoundedTextField};
    pub use crate::widgets::text::{GlyphPainter, TextPainter};
    pub use crate::widgets::widget::{HorizontalAlignment, VerticalAlignment, Widget};

    pub use vello::kurbo::{Affine, Insets, Point, Rect, Size};
    pub use vello::peniko::Color;
    pub use vello::Scene;
}
