use std::path::PathBuf;

/// Sort weight assigned to fonts whose style maps to no known weight
pub const UNKNOWN_WEIGHT_SORT: u16 = 1000;

/// One input font file, as described by its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    /// Raw style label, e.g. "SemiBoldItalic"
    pub style: String,
    /// Canonical weight (100-900), if the style is recognized
    pub weight: Option<u16>,
    /// Whether the style names an italic variant
    pub is_italic: bool,
    /// Absolute path of the source font file
    pub source_path: PathBuf,
    /// Name of this font's data set in the generated asset catalog
    pub data_set_id: String,
}

impl FontEntry {
    pub fn new(
        style: String,
        weight: Option<u16>,
        is_italic: bool,
        source_path: PathBuf,
        data_set_id: String,
    ) -> Self {
        Self {
            style,
            weight,
            is_italic,
            source_path,
            data_set_id,
        }
    }

    /// Ordering key within a family: weight, italics right after their upright
    pub fn sort_key(&self) -> u16 {
        self.weight.unwrap_or(UNKNOWN_WEIGHT_SORT) + u16::from(self.is_italic)
    }

    /// File name of the source font, used inside the data set
    pub fn file_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.data_set_id.clone())
    }
}

/// All fonts sharing a family name, sorted by weight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFamily {
    name: String,
    fonts: Vec<FontEntry>,
}

impl FontFamily {
    /// Build a family, stable-sorting `fonts` by their sort key.
    ///
    /// Returns `None` for an empty font list; a family always has a font.
    pub fn new(name: String, mut fonts: Vec<FontEntry>) -> Option<Self> {
        if fonts.is_empty() {
            return None;
        }
        // `sort_by_key` is stable, so equal keys keep discovery order.
        fonts.sort_by_key(FontEntry::sort_key);
        Some(Self { name, fonts })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fonts(&self) -> &[FontEntry] {
        &self.fonts
    }

    /// Name of the generated package, library, target and accessor type
    pub fn package_name(&self) -> String {
        format!("{}Font", self.name)
    }
}
