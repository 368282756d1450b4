#![warn(missing_docs)]

//! Pre-styled widgets for platekit => See the `platekit` crate for more.
//!
//! Every widget implements [Widget](widget::Widget) and paints itself into a
//! vello scene. The usual entry point is
//! [StyleProvider](provider::StyleProvider), which builds widgets already
//! configured with the stylesheet's fonts and colors.

/// Contains the [border::RoundedBorder] decorator.
pub mod border;
/// Contains the [button::Button] widget.
pub mod button;
/// Contains the [combo_box::ComboBox] widget.
pub mod combo_box;
/// Contains the [label::Label] widget.
pub mod label;
/// Contains the [panel::RoundedPanel] widget.
pub mod panel;
/// Contains the [provider::StyleProvider] widget factory.
pub mod provider;
/// Contains the [rounded_field::RoundedTextField] and [rounded_field::RoundedPasswordField] widgets.
pub mod rounded_field;
/// Contains the [text::TextPainter] trait and [text::GlyphPainter].
pub mod text;
/// Contains the [text_buffer::TextBuffer] used by editable fields.
pub mod text_buffer;
/// Contains the [widget::Widget] trait.
pub mod widget;
