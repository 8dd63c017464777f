//! Region resolution: replace a tagged region's interior, or append a new
//! header-stamped block when the region does not exist yet.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use kbtk_core::{BodyError, DocumentBody, ParagraphHeading};
use kbtk_tags::OutputStyleOptions;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::render::render_lines;

/// Asia/Jakarta (WIB) has no daylight saving: a fixed UTC+7.
const JAKARTA_OFFSET_SECS: i32 = 7 * 3600;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("region '{tag}' has a {found} marker but no matching {missing} marker")]
    UnpairedMarker {
        tag: String,
        found: &'static str,
        missing: &'static str,
    },
    #[error("region '{tag}' is inverted: end marker at {end} precedes start marker at {start}")]
    InvertedRegion { tag: String, start: usize, end: usize },
    #[error(transparent)]
    Body(#[from] BodyError),
}

/// What a successful formatting call did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionOutcome {
    /// Interior of an existing region was rewritten. Positions are the
    /// markers after rendering.
    Replaced { start: usize, end: usize, removed: usize },
    /// A new block was written after the fallback position.
    Appended { header_at: usize },
}

pub fn jakarta_now() -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(JAKARTA_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
    Utc::now().with_timezone(&offset)
}

/// `[HH:MM] [{emoji} {header_text}]`, 24-hour clock.
pub fn header_line(options: &OutputStyleOptions, now: DateTime<FixedOffset>) -> String {
    format!(
        "[{}] [{} {}]",
        now.format("%H:%M"),
        options.header_emoji,
        options.header_text
    )
}

/// Best-effort formatting: `false` on any error, which is logged and never
/// propagated. Elements mutated before a failure stay in the document.
pub fn format_output_response<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    fallback_position: usize,
    options: &OutputStyleOptions,
) -> bool {
    format_output_response_at(body, content, fallback_position, options, jakarta_now())
}

pub fn format_output_response_at<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    fallback_position: usize,
    options: &OutputStyleOptions,
    now: DateTime<FixedOffset>,
) -> bool {
    match try_format_output_response_at(body, content, fallback_position, options, now) {
        Ok(outcome) => {
            info!(region = %options.xml_tags, ?outcome, "formatted output");
            true
        }
        Err(e) => {
            error!(region = %options.xml_tags, error = %e, "error in format_output_response");
            false
        }
    }
}

pub fn try_format_output_response<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    fallback_position: usize,
    options: &OutputStyleOptions,
) -> Result<RegionOutcome, FormatError> {
    try_format_output_response_at(body, content, fallback_position, options, jakarta_now())
}

pub fn try_format_output_response_at<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    fallback_position: usize,
    options: &OutputStyleOptions,
    now: DateTime<FixedOffset>,
) -> Result<RegionOutcome, FormatError> {
    let start = body.locate_marker(&options.start_marker());
    let end = body.locate_marker(&options.end_marker());

    match (start, end) {
        (Some(start), Some(end)) => format_within_region(body, content, &options.xml_tags, start, end),
        (None, None) => format_at_position(body, content, fallback_position, options, now),
        (Some(_), None) => Err(FormatError::UnpairedMarker {
            tag: options.xml_tags.clone(),
            found: "start",
            missing: "end",
        }),
        (None, Some(_)) => Err(FormatError::UnpairedMarker {
            tag: options.xml_tags.clone(),
            found: "end",
            missing: "start",
        }),
    }
}

fn format_within_region<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    tag: &str,
    start: usize,
    end: usize,
) -> Result<RegionOutcome, FormatError> {
    if end < start {
        return Err(FormatError::InvertedRegion { tag: tag.to_string(), start, end });
    }

    // Descending, so earlier positions stay valid while removing.
    for index in (start + 1..end).rev() {
        body.remove_child(index)?;
    }
    let removed = end - start - 1;
    debug!(region = tag, start, removed, "cleared region interior");

    render_lines(body, content, start + 1)?;
    let written = content.split('\n').count();

    Ok(RegionOutcome::Replaced { start, end: start + 1 + written, removed })
}

fn format_at_position<B: DocumentBody + ?Sized>(
    body: &mut B,
    content: &str,
    fallback_position: usize,
    options: &OutputStyleOptions,
    now: DateTime<FixedOffset>,
) -> Result<RegionOutcome, FormatError> {
    // An empty body has no element to follow.
    let header_at = if body.num_children() == 0 { 0 } else { fallback_position + 1 };

    let header = body.insert_paragraph(header_at, &header_line(options, now))?;
    body.set_heading(header, ParagraphHeading::Heading1)?;
    body.insert_paragraph(header_at + 1, "")?;

    render_lines(body, content, header_at + 2)?;

    Ok(RegionOutcome::Appended { header_at })
}
