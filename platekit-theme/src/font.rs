//! # Fonts
//!
//! Font descriptions used by the styled widgets and the lazily loaded
//! display ("plate") font.
//!
//! Most widgets name a system family (see [DEFAULT_FAMILY]) and leave glyph
//! lookup to the host toolkit. The plate font is the exception: it is read
//! from a font file the first time it is needed and carries its data with it.
//!
//! ```rust
//! use platekit_theme::font::DisplayFont;
//!
//! let plate = DisplayFont::new("res/fonts/FE-FONT.TTF");
//! // Missing file: a generic bold 24pt font is returned instead.
//! assert_eq!(plate.get().size(), 24.0);
//! ```

use std::cell::OnceCell;
use std::fmt::{Debug, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use skrifa::raw::{FileRef, FontRef, TableProvider};
use skrifa::string::StringId;
use skrifa::MetadataProvider;
use vello::peniko::{Blob, FontData};

use crate::error::{StyleError, StyleResult};

/// Family used by every widget that does not use the display font.
pub const DEFAULT_FAMILY: &str = "Arial";

/// Point size of the display font.
pub const DISPLAY_FONT_SIZE: f32 = 24.0;

/// The weight of a [FontSpec].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Normal weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    /// The numeric OpenType weight.
    pub fn value(self) -> f32 {
        match self {
            FontWeight::Regular => 400.0,
            FontWeight::Bold => 700.0,
        }
    }
}

/// A font family, weight and size, optionally backed by loaded font data.
#[derive(Clone)]
pub struct FontSpec {
    family: String,
    weight: FontWeight,
    size: f32,
    data: Option<FontData>,
}

impl FontSpec {
    /// A font resolved by family name.
    pub fn new(family: impl ToString, weight: FontWeight, size: f32) -> Self {
        Self {
            family: family.to_string(),
            weight,
            size,
            data: None,
        }
    }

    /// Regular [DEFAULT_FAMILY] at the given size.
    pub fn regular(size: f32) -> Self {
        Self::new(DEFAULT_FAMILY, FontWeight::Regular, size)
    }

    /// Bold [DEFAULT_FAMILY] at the given size.
    pub fn bold(size: f32) -> Self {
        Self::new(DEFAULT_FAMILY, FontWeight::Bold, size)
    }

    /// Attach loaded font data.
    pub fn with_data(mut self, data: FontData) -> Self {
        self.data = Some(data);
        self
    }

    /// Derive a copy with another weight and size, keeping family and data.
    pub fn derive(&self, weight: FontWeight, size: f32) -> Self {
        Self {
            weight,
            size,
            ..self.clone()
        }
    }

    /// The family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// The weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Whether the weight is bold.
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    /// The size in points.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// The embedded font data, if this font was loaded from a file.
    pub fn data(&self) -> Option<&FontData> {
        self.data.as_ref()
    }
}

impl PartialEq for FontSpec {
    fn eq(&self, other: &Self) -> bool {
        let same_data = match (&self.data, &other.data) {
            (Some(a), Some(b)) => a.data.id() == b.data.id() && a.index == b.index,
            (None, None) => true,
            _ => false,
        };
        self.family == other.family
            && self.weight == other.weight
            && self.size == other.size
            && same_data
    }
}

impl Debug for FontSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontSpec")
            .field("family", &self.family)
            .field("weight", &self.weight)
            .field("size", &self.size)
            .field("embedded", &self.data.is_some())
            .finish()
    }
}

/// Read and validate a TrueType/OpenType font file.
///
/// Collections are accepted; the first face is used.
pub fn load_font_file(path: impl AsRef<Path>) -> StyleResult<FontData> {
    let path = path.as_ref();
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(StyleError::font_not_found(path));
        },
        Err(err) => return Err(err.into()),
    };

    let font = first_face(&bytes).map_err(|details| StyleError::font_parse(path, details))?;
    let glyphs = font
        .maxp()
        .map_err(|err| StyleError::font_parse(path, err))?
        .num_glyphs();
    if glyphs == 0 {
        return Err(StyleError::font_parse(path, "font contains no glyphs"));
    }

    Ok(FontData::new(Blob::from(bytes), 0))
}

/// The family name recorded in the font's name table.
pub fn family_name(data: &FontData) -> Option<String> {
    let font = first_face(data.data.as_ref()).ok()?;
    font.localized_strings(StringId::FAMILY_NAME)
        .english_or_first()
        .map(|name| name.to_string())
}

fn first_face(bytes: &[u8]) -> Result<FontRef<'_>, String> {
    match FileRef::new(bytes).map_err(|err| err.to_string())? {
        FileRef::Font(font) => Ok(font),
        FileRef::Collection(collection) => collection.get(0).map_err(|err| err.to_string()),
    }
}

/// The display font, loaded from a file on first access.
///
/// The first call to [DisplayFont::get] reads the file. Whatever that call
/// produces (the loaded font or the fallback) is kept for the lifetime of
/// this value, so the file is never read twice.
pub struct DisplayFont {
    path: PathBuf,
    font: OnceCell<FontSpec>,
}

impl DisplayFont {
    /// A display font backed by the given file. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            font: OnceCell::new(),
        }
    }

    /// The configured font file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the font has been resolved yet.
    pub fn is_loaded(&self) -> bool {
        self.font.get().is_some()
    }

    /// The bold 24pt display font, or the bold 24pt fallback if the file
    /// could not be loaded.
    pub fn get(&self) -> &FontSpec {
        self.font.get_or_init(|| self.load())
    }

    fn load(&self) -> FontSpec {
        match load_font_file(&self.path) {
            Ok(data) => {
                let family = family_name(&data).unwrap_or_else(|| {
                    self.path
                        .file_stem()
                        .map(|stem| stem.to_string_lossy().into_owned())
                        .unwrap_or_else(|| DEFAULT_FAMILY.to_string())
                });
                log::debug!("Loaded display font '{}' from {:?}", family, self.path);
                FontSpec::new(family, FontWeight::Bold, DISPLAY_FONT_SIZE).with_data(data)
            },
            Err(err) => {
                log::warn!("{}; falling back to {} bold", err, DEFAULT_FAMILY);
                FontSpec::bold(DISPLAY_FONT_SIZE)
            },
        }
    }
}

impl Debug for DisplayFont {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayFont")
            .field("path", &self.path)
            .field("font", &self.font.get())
            .finish()
    }
}
