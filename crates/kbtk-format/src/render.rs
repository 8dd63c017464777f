//! Line-rendering: one document element per content line.

use kbtk_core::{BodyError, DocumentBody, GlyphType, ParagraphHeading, TextAttributes};
use tracing::debug;

use crate::classify::{LineBody, LineMarker, classify_line};

pub const BODY_FONT_FAMILY: &str = "Arial";
pub const BODY_FONT_SIZE: u16 = 11;

fn list_item_attributes() -> TextAttributes {
    TextAttributes {
        font_family: Some(BODY_FONT_FAMILY.to_string()),
        font_size: Some(BODY_FONT_SIZE),
        bold: Some(false),
    }
}

fn paragraph_attributes() -> TextAttributes {
    TextAttributes {
        font_family: Some(BODY_FONT_FAMILY.to_string()),
        font_size: Some(BODY_FONT_SIZE),
        bold: None,
    }
}

/// State carried across consecutive lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderState {
    /// Position of the most recently inserted list item.
    pub last_list_item: Option<usize>,
    pub nesting_level: u32,
}

impl RenderState {
    fn reset(&mut self) {
        self.last_list_item = None;
        self.nesting_level = 0;
    }
}

/// Render `content` into `body`, inserting line `i` at `start + i`.
///
/// Every line, blank ones included, produces exactly one element, so the
/// block written is always `content.split('\n').count()` elements long.
/// Returns the state after the last line.
pub fn render_lines<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    start: usize,
) -> Result<RenderState, BodyError> {
    let mut state = RenderState::default();

    for (offset, line) in content.split('\n').enumerate() {
        let at = start + offset;
        let classified = classify_line(line);

        match classified.body {
            LineBody::Blank => {
                state.reset();
                body.insert_paragraph(at, "")?;
            }
            LineBody::Bullet { kind, text } => {
                let level = kind.level(state.nesting_level);
                let idx = body.insert_list_item(at, text)?;
                body.set_glyph_type(idx, GlyphType::Bullet)?;
                body.set_nesting_level(idx, level)?;
                body.set_attributes(idx, &list_item_attributes())?;

                state.last_list_item = Some(idx);
                state.nesting_level = level;
            }
            LineBody::Plain(text) => {
                state.reset();
                let idx = body.insert_paragraph(at, text)?;
                body.set_attributes(idx, &paragraph_attributes())?;

                if classified.marker == LineMarker::Heading5 {
                    body.set_heading(idx, ParagraphHeading::Heading5)?;
                }
                let chars = text.chars().count();
                if classified.marker == LineMarker::Bold && chars > 0 {
                    body.set_bold(idx, 0, chars - 1, true)?;
                }
            }
        }
    }

    debug!(start, lines = content.split('\n').count(), "rendered content lines");
    Ok(state)
}
