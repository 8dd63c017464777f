//! Input extraction from tag-delimited blocks.

use kbtk_core::{BodyError, DocumentBody};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::debug;

use crate::vocab::InputTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerSide {
    Start,
    End,
}

impl MarkerSide {
    pub const fn as_str(self) -> &'static str {
        match self {
            MarkerSide::Start => "start",
            MarkerSide::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("missing {} marker for {tag}: add your input between <{tag}> and </{tag}>", side.as_str())]
    MissingMarker { tag: InputTag, side: MarkerSide },
    #[error("cannot read input {tag}: make sure the tags are formatted correctly")]
    NoMatch { tag: InputTag },
    #[error("error extracting {tag}: {source}")]
    Body {
        tag: InputTag,
        #[source]
        source: BodyError,
    },
}

impl ExtractionError {
    pub fn tag(&self) -> InputTag {
        match self {
            ExtractionError::MissingMarker { tag, .. }
            | ExtractionError::NoMatch { tag }
            | ExtractionError::Body { tag, .. } => *tag,
        }
    }
}

static RPPH_PATTERN: Lazy<Regex> = Lazy::new(|| tag_pattern(InputTag::Rpph));
static ACTIVITY_DETAIL_PATTERN: Lazy<Regex> = Lazy::new(|| tag_pattern(InputTag::ActivityDetail));
static ASSESSMENT_PATTERN: Lazy<Regex> = Lazy::new(|| tag_pattern(InputTag::Assessment));
static STORY_TOPIC_PATTERN: Lazy<Regex> = Lazy::new(|| tag_pattern(InputTag::StoryTopic));

fn tag_pattern(tag: InputTag) -> Regex {
    let name = regex::escape(tag.as_str());
    Regex::new(&format!(r"(?s)<{name}>(.*?)</{name}>")).expect("tag pattern regex")
}

fn pattern_for(tag: InputTag) -> &'static Regex {
    match tag {
        InputTag::Rpph => &*RPPH_PATTERN,
        InputTag::ActivityDetail => &*ACTIVITY_DETAIL_PATTERN,
        InputTag::Assessment => &*ASSESSMENT_PATTERN,
        InputTag::StoryTopic => &*STORY_TOPIC_PATTERN,
    }
}

/// Locate both markers of `tag` and return the trimmed text between them.
pub fn extract_input<B: DocumentBody + ?Sized>(body: &B, tag: InputTag) -> Result<String, ExtractionError> {
    let start = body
        .locate_marker(&tag.start_marker())
        .ok_or(ExtractionError::MissingMarker { tag, side: MarkerSide::Start })?;
    let end = body
        .locate_marker(&tag.end_marker())
        .ok_or(ExtractionError::MissingMarker { tag, side: MarkerSide::End })?;

    extract_between(body, tag, start, end)
}

/// Extract the text of `tag` from the inclusive child range `[start, end]`.
///
/// Children are joined with `\n` and matched against `<tag>(.*?)</tag>`
/// (non-greedy, dot matches newline). An inverted range reads nothing and
/// therefore fails to match.
pub fn extract_between<B: DocumentBody + ?Sized>(
    body: &B,
    tag: InputTag,
    start: usize,
    end: usize,
) -> Result<String, ExtractionError> {
    let mut joined = String::new();
    for index in start..=end {
        let text = body
            .child_text(index)
            .map_err(|source| ExtractionError::Body { tag, source })?;
        joined.push_str(text);
        joined.push('\n');
    }

    let captured = pattern_for(tag)
        .captures(&joined)
        .and_then(|c| c.get(1))
        .ok_or(ExtractionError::NoMatch { tag })?;

    let content = captured.as_str().trim().to_string();
    debug!(tag = %tag, start, end, chars = content.chars().count(), "extracted input");
    Ok(content)
}
