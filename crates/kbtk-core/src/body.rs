//! Host document access.
//!
//! [`DocumentBody`] is the narrow surface the extractor and formatter need from
//! a word-processing host. Elements are addressed by their position in the
//! body; any insertion or removal shifts the positions after it.

use thiserror::Error;

use crate::model::{BoldRange, Document, Element, ElementKind, GlyphType, ParagraphHeading, TextAttributes};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BodyError {
    #[error("child index {index} out of range (document has {len} children)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("text range {start}..={end} out of bounds for child {index} ({len} chars)")]
    InvalidRange { index: usize, start: usize, end: usize, len: usize },
    #[error("child {index} is not a list item")]
    NotAListItem { index: usize },
}

/// Location of a literal text match: the containing child and the inclusive
/// char range of the match inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLocator {
    pub index: usize,
    pub start: usize,
    pub end: usize,
}

pub trait DocumentBody {
    fn num_children(&self) -> usize;

    fn child_text(&self, index: usize) -> Result<&str, BodyError>;

    fn insert_paragraph(&mut self, index: usize, text: &str) -> Result<usize, BodyError>;

    fn insert_list_item(&mut self, index: usize, text: &str) -> Result<usize, BodyError>;

    fn append_paragraph(&mut self, text: &str) -> usize;

    fn remove_child(&mut self, index: usize) -> Result<(), BodyError>;

    /// Remove every child.
    fn clear(&mut self);

    fn set_heading(&mut self, index: usize, heading: ParagraphHeading) -> Result<(), BodyError>;

    fn set_attributes(&mut self, index: usize, attributes: &TextAttributes) -> Result<(), BodyError>;

    fn set_glyph_type(&mut self, index: usize, glyph: GlyphType) -> Result<(), BodyError>;

    fn set_nesting_level(&mut self, index: usize, level: u32) -> Result<(), BodyError>;

    /// Set bold over the inclusive char range `[start, end]` of a child's text.
    fn set_bold(&mut self, index: usize, start: usize, end: usize, bold: bool) -> Result<(), BodyError>;

    /// First literal occurrence of `needle` in document order.
    fn find_text(&self, needle: &str) -> Option<TextLocator> {
        if needle.is_empty() {
            return None;
        }
        (0..self.num_children()).find_map(|index| {
            let text = self.child_text(index).ok()?;
            let byte_pos = text.find(needle)?;
            let start = text[..byte_pos].chars().count();
            let end = start + needle.chars().count() - 1;
            Some(TextLocator { index, start, end })
        })
    }

    /// Position of the first child whose whole (trimmed) text is `marker`.
    ///
    /// Duplicate markers are unsupported; the first one wins.
    fn locate_marker(&self, marker: &str) -> Option<usize> {
        (0..self.num_children())
            .find(|&index| matches!(self.child_text(index), Ok(text) if text.trim() == marker))
    }
}

impl Document {
    fn child_mut(&mut self, index: usize) -> Result<&mut Element, BodyError> {
        let len = self.elements.len();
        self.elements
            .get_mut(index)
            .ok_or(BodyError::IndexOutOfRange { index, len })
    }

    fn insert_element(&mut self, index: usize, element: Element) -> Result<usize, BodyError> {
        let len = self.elements.len();
        if index > len {
            return Err(BodyError::IndexOutOfRange { index, len });
        }
        self.elements.insert(index, element);
        Ok(index)
    }
}

impl DocumentBody for Document {
    fn num_children(&self) -> usize {
        self.elements.len()
    }

    fn child_text(&self, index: usize) -> Result<&str, BodyError> {
        self.elements
            .get(index)
            .map(|e| e.text.as_str())
            .ok_or(BodyError::IndexOutOfRange { index, len: self.elements.len() })
    }

    fn insert_paragraph(&mut self, index: usize, text: &str) -> Result<usize, BodyError> {
        self.insert_element(index, Element::paragraph(text))
    }

    fn insert_list_item(&mut self, index: usize, text: &str) -> Result<usize, BodyError> {
        self.insert_element(index, Element::list_item(text))
    }

    fn append_paragraph(&mut self, text: &str) -> usize {
        self.elements.push(Element::paragraph(text));
        self.elements.len() - 1
    }

    fn remove_child(&mut self, index: usize) -> Result<(), BodyError> {
        let len = self.elements.len();
        if index >= len {
            return Err(BodyError::IndexOutOfRange { index, len });
        }
        self.elements.remove(index);
        Ok(())
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn set_heading(&mut self, index: usize, heading: ParagraphHeading) -> Result<(), BodyError> {
        self.child_mut(index)?.heading = heading;
        Ok(())
    }

    fn set_attributes(&mut self, index: usize, attributes: &TextAttributes) -> Result<(), BodyError> {
        self.child_mut(index)?.attributes.merge(attributes);
        Ok(())
    }

    fn set_glyph_type(&mut self, index: usize, glyph: GlyphType) -> Result<(), BodyError> {
        let el = self.child_mut(index)?;
        if el.kind != ElementKind::ListItem {
            return Err(BodyError::NotAListItem { index });
        }
        el.glyph = Some(glyph);
        Ok(())
    }

    fn set_nesting_level(&mut self, index: usize, level: u32) -> Result<(), BodyError> {
        let el = self.child_mut(index)?;
        if el.kind != ElementKind::ListItem {
            return Err(BodyError::NotAListItem { index });
        }
        el.nesting_level = Some(level);
        Ok(())
    }

    fn set_bold(&mut self, index: usize, start: usize, end: usize, bold: bool) -> Result<(), BodyError> {
        let el = self.child_mut(index)?;
        let len = el.text.chars().count();
        if start > end || end >= len {
            return Err(BodyError::InvalidRange { index, start, end, len });
        }

        // Drop the covered span from existing runs, then re-add it when bolding.
        let mut runs = Vec::with_capacity(el.bold_ranges.len() + 1);
        for r in el.bold_ranges.drain(..) {
            if r.end < start || r.start > end {
                runs.push(r);
                continue;
            }
            if r.start < start {
                runs.push(BoldRange { start: r.start, end: start - 1 });
            }
            if r.end > end {
                runs.push(BoldRange { start: end + 1, end: r.end });
            }
        }
        if bold {
            runs.push(BoldRange { start, end });
        }
        runs.sort_by_key(|r| r.start);
        el.bold_ranges = runs;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Document {
        Document {
            elements: lines.iter().map(|t| Element::paragraph(*t)).collect(),
        }
    }

    #[test]
    fn insert_shifts_following_children() {
        let mut d = doc(&["a", "c"]);
        d.insert_paragraph(1, "b").unwrap();
        assert_eq!(d.texts(), vec!["a", "b", "c"]);
    }

    #[test]
    fn insert_past_end_is_rejected() {
        let mut d = doc(&["a"]);
        let err = d.insert_paragraph(3, "x").unwrap_err();
        assert_eq!(err, BodyError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn insert_at_len_appends() {
        let mut d = doc(&["a"]);
        assert_eq!(d.insert_list_item(1, "x").unwrap(), 1);
        assert!(d.elements[1].is_list_item());
    }

    #[test]
    fn glyph_on_paragraph_is_rejected() {
        let mut d = doc(&["a"]);
        assert_eq!(
            d.set_glyph_type(0, GlyphType::Bullet).unwrap_err(),
            BodyError::NotAListItem { index: 0 }
        );
    }

    #[test]
    fn set_bold_splits_and_merges_runs() {
        let mut d = doc(&["abcdefgh"]);
        d.set_bold(0, 0, 7, true).unwrap();
        d.set_bold(0, 2, 3, false).unwrap();
        assert_eq!(
            d.elements[0].bold_ranges,
            vec![BoldRange { start: 0, end: 1 }, BoldRange { start: 4, end: 7 }]
        );
        assert!(!d.elements[0].is_bold_over(0, 7));
        assert!(d.elements[0].is_bold_over(4, 7));
    }

    #[test]
    fn set_bold_counts_chars_not_bytes() {
        let mut d = doc(&["héllo"]);
        d.set_bold(0, 0, 4, true).unwrap();
        assert!(d.set_bold(0, 0, 5, true).is_err());
    }

    #[test]
    fn find_text_reports_char_offsets() {
        let d = doc(&["intro", "ké <rpph> x"]);
        let loc = d.find_text("<rpph>").unwrap();
        assert_eq!(loc, TextLocator { index: 1, start: 3, end: 8 });
    }

    #[test]
    fn locate_marker_requires_whole_text() {
        let d = doc(&["see <rpph> below", "  <rpph>  ", "<rpph>"]);
        assert_eq!(d.locate_marker("<rpph>"), Some(1));
        assert_eq!(d.locate_marker("</rpph>"), None);
    }
}
