//! # Style Provider
//!
//! [StyleProvider] is the stylesheet of the application: it owns the
//! palette, the default padding, a sample icon and the display font, and
//! builds pre-styled widgets from them.
//!
//! Construct one at startup and pass it by reference to the code building
//! views. Only the plate variants touch shared state (the display font,
//! loaded on first use); every other factory depends on its arguments alone.
//!
//! ```rust
//! use platekit_widgets::provider::StyleProvider;
//!
//! let style = StyleProvider::new();
//! let title = style.create_lbl_h1("Parking", style.palette().deep_sky_blue);
//! let ok = style.create_btn_rounded("OK", style.palette().white, style.palette().black, 10.0);
//! assert_eq!(title.font().size(), 26.0);
//! assert_eq!(ok.text(), "OK");
//! ```

use platekit_theme::config::StyleConfig;
use platekit_theme::font::{DisplayFont, FontSpec};
use platekit_theme::icon::Icon;
use platekit_theme::palette::{default_padding, Palette};
use vello::kurbo::{Insets, Size};
use vello::peniko::Color;

use crate::border::RoundedBorder;
use crate::button::Button;
use crate::combo_box::ComboBox;
use crate::label::Label;
use crate::panel::RoundedPanel;
use crate::rounded_field::{RoundedPasswordField, RoundedTextField};
use crate::widget::{HorizontalAlignment, VerticalAlignment};

/// Palette, fonts and widget factories of the stylesheet.
#[derive(Debug)]
pub struct StyleProvider {
    palette: Palette,
    padding: Insets,
    icon: Icon,
    display_font: DisplayFont,
}

impl StyleProvider {
    /// A provider using the default resource locations.
    pub fn new() -> Self {
        Self::with_config(StyleConfig::default())
    }

    /// A provider using resource locations from the environment.
    pub fn from_env() -> Self {
        Self::with_config(StyleConfig::from_env_or_default())
    }

    /// A provider using the given resource locations.
    ///
    /// The sample icon is loaded immediately; the display font on first use.
    pub fn with_config(config: StyleConfig) -> Self {
        Self {
            palette: Palette::new(),
            padding: default_padding(),
            icon: Icon::load(&config.icon_path),
            display_font: DisplayFont::new(config.font_path),
        }
    }

    /// The stylesheet colors.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Default padding for panels.
    pub fn padding(&self) -> Insets {
        self.padding
    }

    /// The sample icon (empty if it failed to load).
    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// The bold 24pt display font, loading it on first call.
    pub fn display_font(&self) -> &FontSpec {
        self.display_font.get()
    }

    fn label(text: &str, font: FontSpec, color: Color) -> Label {
        Label::new(text, font).with_foreground(color)
    }

    /// A label in the display font.
    pub fn create_lbl_plate(&self, text: &str, color: Color) -> Label {
        Self::label(text, self.display_font().clone(), color)
    }

    /// A level 1 heading: bold 26.
    pub fn create_lbl_h1(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::bold(26.0), color)
    }

    /// A level 2 heading: bold 22.
    pub fn create_lbl_h2(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::bold(22.0), color)
    }

    /// A level 3 heading: bold 18.
    pub fn create_lbl_h3(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::bold(18.0), color)
    }

    /// A level 4 heading: bold 12.
    pub fn create_lbl_h4(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::bold(12.0), color)
    }

    /// A paragraph: regular 16.
    pub fn create_lbl_p(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::regular(16.0), color)
    }

    /// A small paragraph: regular 12.
    pub fn create_lbl_p2(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::regular(12.0), color)
    }

    /// A calendar day number: bold 36.
    pub fn create_lbl_calendar(&self, text: &str, color: Color) -> Label {
        Self::label(text, FontSpec::bold(36.0), color)
    }

    /// A label showing `icon` scaled to exactly `width` x `height`.
    pub fn create_lbl_icon_only(&self, icon: &Icon, width: u32, height: u32) -> Label {
        Label::with_icon_only(icon.scaled(width, height))
    }

    /// A flat, text-only button: bold 15, no fill, no border, not focusable.
    pub fn create_btn_txt_only(&self, text: &str, color: Color) -> Button {
        Button::new(text, FontSpec::bold(15.0))
            .with_foreground(color)
            .flat()
    }

    /// A flat button showing `icon` scaled to exactly `width` x `height`.
    pub fn create_btn_icon_only(&self, icon: &Icon, width: u32, height: u32) -> Button {
        Button::new("", FontSpec::regular(12.0))
            .with_icon(icon.scaled(width, height))
            .flat()
    }

    /// A filled button with a rounded outline and centered text: regular 15.
    pub fn create_btn_rounded(
        &self,
        text: &str,
        background: Color,
        foreground: Color,
        radius: f64,
    ) -> Button {
        Button::new(text, FontSpec::regular(15.0))
            .with_background(background)
            .with_foreground(foreground)
            .with_border(RoundedBorder::new(radius))
            .with_vertical_text_position(VerticalAlignment::Center)
            .with_horizontal_alignment(HorizontalAlignment::Center)
            .with_border_painted(true)
    }

    /// An empty dropdown with a rounded outline: regular 14.
    pub fn create_cmb_rounded(&self, background: Color, foreground: Color, radius: f64) -> ComboBox {
        ComboBox::new(FontSpec::regular(14.0))
            .with_background(background)
            .with_foreground(foreground)
            .with_lightweight_popup(true)
            .with_border(RoundedBorder::new(radius))
    }

    /// A rounded text field in the display font.
    pub fn create_plate_field_rounded(
        &self,
        text: &str,
        background: Color,
        foreground: Color,
        columns: u32,
    ) -> RoundedTextField {
        RoundedTextField::new(columns, self.display_font().clone())
            .with_text(text)
            .with_background(background)
            .with_foreground(foreground)
    }

    /// A rounded text field: regular 16.
    pub fn create_txt_rounded(
        &self,
        text: &str,
        background: Color,
        foreground: Color,
        columns: u32,
    ) -> RoundedTextField {
        RoundedTextField::new(columns, FontSpec::regular(16.0))
            .with_text(text)
            .with_background(background)
            .with_foreground(foreground)
    }

    /// A rounded password field: regular 16.
    pub fn create_pwd_rounded(
        &self,
        background: Color,
        foreground: Color,
        columns: u32,
    ) -> RoundedPasswordField {
        RoundedPasswordField::new(columns, FontSpec::regular(16.0))
            .with_background(background)
            .with_foreground(foreground)
    }

    /// A `width` x `height` panel filled with a rounded rectangle of `panel_color`.
    ///
    /// `background` is painted behind the rounded corners and must match the
    /// color of the container the panel is placed in.
    pub fn create_pnl_rounded(
        &self,
        width: f64,
        height: f64,
        panel_color: Color,
        background: Color,
    ) -> RoundedPanel {
        RoundedPanel::new(Size::new(width, height), panel_color, background)
    }
}

impl Default for StyleProvider {
    fn default() -> Self {
        Self::new()
    }
}
