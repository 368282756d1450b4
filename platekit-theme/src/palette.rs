use vello::kurbo::Insets;
use vello::peniko::Color;

/// The fixed set of colors shared by every styled widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Primary UI color.
    pub pickled_bluewood: Color,
    /// Secondary UI color.
    pub deep_sky_blue: Color,
    /// Tertiary UI color.
    pub celadon: Color,
    /// Primary flat color.
    pub white: Color,
    /// Secondary flat color.
    pub gray: Color,
    /// Tertiary flat color.
    pub light_gray: Color,
    /// Error color.
    pub red: Color,
    /// Contrast color.
    pub black: Color,
}

impl Palette {
    /// The stylesheet palette.
    pub fn new() -> Self {
        Self {
            pickled_bluewood: Color::from_rgb8(44, 62, 80),
            deep_sky_blue: Color::from_rgb8(66, 110, 153),
            celadon: Color::from_rgb8(39, 174, 96),
            white: Color::from_rgb8(255, 255, 255),
            gray: Color::from_rgb8(133, 133, 133),
            light_gray: Color::from_rgb8(237, 238, 240),
            red: Color::from_rgb8(246, 49, 93),
            black: Color::from_rgb8(0, 0, 0),
        }
    }

    /// Alias for [Palette::pickled_bluewood].
    pub fn primary(&self) -> Color {
        self.pickled_bluewood
    }

    /// Alias for [Palette::deep_sky_blue].
    pub fn secondary(&self) -> Color {
        self.deep_sky_blue
    }

    /// Alias for [Palette::celadon].
    pub fn tertiary(&self) -> Color {
        self.celadon
    }

    /// Alias for [Palette::red].
    pub fn error(&self) -> Color {
        self.red
    }

    /// Alias for [Palette::black].
    pub fn contrast(&self) -> Color {
        self.black
    }

    /// The padding panels use with this palette. See [default_padding].
    pub fn padding(&self) -> Insets {
        default_padding()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

/// Default padding for panels: 10 top/bottom, 20 left/right.
pub fn default_padding() -> Insets {
    // kurbo order is left, top, right, bottom.
    Insets::new(20.0, 10.0, 20.0, 10.0)
}
