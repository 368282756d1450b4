#![warn(missing_docs)]

//! # platekit Theme
//!
//! The shared visual vocabulary of the platekit widgets:
//!
//! - **[Palette](palette::Palette)**: the eight fixed stylesheet colors and default padding
//! - **[DisplayFont](font::DisplayFont)**: the lazily loaded plate font with its fallback
//! - **[FontSpec](font::FontSpec)**: family/weight/size descriptions used by widgets
//! - **[Icon](icon::Icon)**: bitmap icons with smooth scaling
//! - **[StyleConfig](config::StyleConfig)**: resource paths from files or the environment
//!
//! ```rust
//! use platekit_theme::palette::Palette;
//! use platekit_theme::font::FontSpec;
//!
//! let palette = Palette::new();
//! let heading = FontSpec::bold(26.0);
//! assert!(heading.is_bold());
//! assert_eq!(palette.secondary(), palette.deep_sky_blue);
//! ```

/// Contains the [config::StyleConfig] struct.
pub mod config;
/// Contains the [error::StyleError] type.
pub mod error;
/// Contains font descriptions and the display font loader.
pub mod font;
/// Contains the [icon::Icon] bitmap type.
pub mod icon;
/// Contains the [id::WidgetId] struct.
pub mod id;
/// Contains the [palette::Palette] struct.
pub mod palette;
