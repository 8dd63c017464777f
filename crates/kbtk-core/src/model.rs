use serde::{Deserialize, Serialize};

/// Block-level element kinds a document can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Paragraph,
    ListItem,
}

/// Named paragraph styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParagraphHeading {
    #[default]
    Normal,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Title,
    Subtitle,
}

impl ParagraphHeading {
    pub const fn as_str(self) -> &'static str {
        match self {
            ParagraphHeading::Normal => "normal",
            ParagraphHeading::Heading1 => "heading1",
            ParagraphHeading::Heading2 => "heading2",
            ParagraphHeading::Heading3 => "heading3",
            ParagraphHeading::Heading4 => "heading4",
            ParagraphHeading::Heading5 => "heading5",
            ParagraphHeading::Heading6 => "heading6",
            ParagraphHeading::Title => "title",
            ParagraphHeading::Subtitle => "subtitle",
        }
    }
}

/// List glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphType {
    Bullet,
    HollowBullet,
    SquareBullet,
    Number,
}

/// Character-level attributes applied to a whole element.
///
/// `None` means "inherit from the document default"; only `Some` fields are
/// written when merged through [`TextAttributes::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
}

impl TextAttributes {
    pub fn merge(&mut self, other: &TextAttributes) {
        if let Some(family) = &other.font_family {
            self.font_family = Some(family.clone());
        }
        if other.font_size.is_some() {
            self.font_size = other.font_size;
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.font_family.is_none() && self.font_size.is_none() && self.bold.is_none()
    }
}

/// Bold run within an element's text. Offsets are inclusive char positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoldRange {
    pub start: usize,
    pub end: usize,
}

/// A single block in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    #[serde(default)]
    pub heading: ParagraphHeading,
    #[serde(default, skip_serializing_if = "TextAttributes::is_empty")]
    pub attributes: TextAttributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glyph: Option<GlyphType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nesting_level: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bold_ranges: Vec<BoldRange>,
}

impl Element {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Paragraph,
            text: text.into(),
            heading: ParagraphHeading::Normal,
            attributes: TextAttributes::default(),
            glyph: None,
            nesting_level: None,
            bold_ranges: Vec::new(),
        }
    }

    /// New list item. Defaults to a level-0 bullet, like a freshly inserted
    /// list item in a word processor.
    pub fn list_item(text: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::ListItem,
            glyph: Some(GlyphType::Bullet),
            nesting_level: Some(0),
            ..Self::paragraph(text)
        }
    }

    pub fn is_list_item(&self) -> bool {
        self.kind == ElementKind::ListItem
    }

    /// True when `[start, end]` is fully bold, either through a bold run or
    /// the element-wide `bold` attribute.
    pub fn is_bold_over(&self, start: usize, end: usize) -> bool {
        if self.attributes.bold == Some(true) {
            return true;
        }
        self.bold_ranges.iter().any(|r| r.start <= start && r.end >= end)
    }
}

/// A document as ordered block elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document of plain paragraphs, one per line of `text`.
    pub fn from_lines(text: &str) -> Self {
        Self {
            elements: text.split('\n').map(Element::paragraph).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.elements.iter().map(|e| e.text.as_str()).collect()
    }
}
