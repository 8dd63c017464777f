//! Fixed tag vocabulary.
//!
//! Marker text is always exactly `<name>` / `</name>` as a standalone block.
//! The names below are matched bit-exactly against document text.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Tags delimiting user-authored input blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputTag {
    Rpph,
    ActivityDetail,
    Assessment,
    StoryTopic,
}

impl InputTag {
    /// Vocabulary order, also the order templates are inserted in.
    pub const ALL: [InputTag; 4] = [
        InputTag::Rpph,
        InputTag::ActivityDetail,
        InputTag::Assessment,
        InputTag::StoryTopic,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            InputTag::Rpph => "input_RPPH",
            InputTag::ActivityDetail => "input_Activity_Detail",
            InputTag::Assessment => "input_Assessment",
            InputTag::StoryTopic => "topik_cerita",
        }
    }

    pub fn start_marker(self) -> String {
        start_marker(self.as_str())
    }

    pub fn end_marker(self) -> String {
        end_marker(self.as_str())
    }
}

impl fmt::Display for InputTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for InputTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InputTag::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = InputTag::ALL.iter().map(|t| t.as_str()).collect();
                format!("unknown input tag '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

pub fn start_marker(name: &str) -> String {
    format!("<{name}>")
}

pub fn end_marker(name: &str) -> String {
    format!("</{name}>")
}

/// How an output region is header-stamped and re-located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputStyleOptions {
    pub header_text: String,
    pub header_emoji: String,
    /// Region tag name, without angle brackets.
    pub xml_tags: String,
}

impl OutputStyleOptions {
    pub fn new(header_text: impl Into<String>, header_emoji: impl Into<String>, xml_tags: impl Into<String>) -> Self {
        Self {
            header_text: header_text.into(),
            header_emoji: header_emoji.into(),
            xml_tags: xml_tags.into(),
        }
    }

    /// Options with the stock sparkle header, for regions outside the
    /// content-type vocabulary.
    pub fn for_region(xml_tags: impl Into<String>) -> Self {
        Self::new("✨ ", "✨", xml_tags)
    }

    pub fn start_marker(&self) -> String {
        start_marker(&self.xml_tags)
    }

    pub fn end_marker(&self) -> String {
        end_marker(&self.xml_tags)
    }
}

/// The four generated content types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Rpph,
    ActivityDetail,
    AssessmentGuide,
    Story,
}

const HEADER_SUFFIX: &str = "KBTK Al Muhajirin";

impl ContentType {
    pub const ALL: [ContentType; 4] = [
        ContentType::Rpph,
        ContentType::ActivityDetail,
        ContentType::AssessmentGuide,
        ContentType::Story,
    ];

    /// Human-readable name used in progress and success messages.
    pub const fn name(self) -> &'static str {
        match self {
            ContentType::Rpph => "RPPH",
            ContentType::ActivityDetail => "Activity Detail",
            ContentType::AssessmentGuide => "Assessment Guide",
            ContentType::Story => "Story",
        }
    }

    /// Kebab-case identifier accepted on the command line.
    pub const fn slug(self) -> &'static str {
        match self {
            ContentType::Rpph => "rpph",
            ContentType::ActivityDetail => "activity-detail",
            ContentType::AssessmentGuide => "assessment-guide",
            ContentType::Story => "story",
        }
    }

    pub const fn required_tags(self) -> &'static [InputTag] {
        match self {
            ContentType::Rpph => &[InputTag::Rpph],
            ContentType::ActivityDetail => &[InputTag::ActivityDetail],
            ContentType::AssessmentGuide => &[InputTag::Assessment],
            ContentType::Story => &[InputTag::StoryTopic],
        }
    }

    /// Output region tag name.
    pub const fn output_tag(self) -> &'static str {
        match self {
            ContentType::Rpph => "rpph",
            ContentType::ActivityDetail => "activity_detail",
            ContentType::AssessmentGuide => "assessment_guide",
            ContentType::Story => "story",
        }
    }

    pub const fn header_emoji(self) -> &'static str {
        match self {
            ContentType::Rpph => "📍📤",
            ContentType::ActivityDetail => "📋",
            ContentType::AssessmentGuide => "📊",
            ContentType::Story => "📖",
        }
    }

    pub fn header_text(self) -> String {
        let title = match self {
            ContentType::Rpph => "RPPH",
            ContentType::ActivityDetail => "Detail Kegiatan",
            ContentType::AssessmentGuide => "Panduan Penilaian",
            ContentType::Story => "Cerita Edukatif",
        };
        format!("{title} - {HEADER_SUFFIX}")
    }

    pub fn output_options(self) -> OutputStyleOptions {
        OutputStyleOptions::new(self.header_text(), self.header_emoji(), self.output_tag())
    }

    pub fn from_output_tag(tag: &str) -> Option<ContentType> {
        ContentType::ALL.into_iter().find(|c| c.output_tag() == tag)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

impl FromStr for ContentType {
    type Err = String;

    /// Accepts the slug (`activity-detail`) or the output tag (`activity_detail`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        ContentType::ALL
            .into_iter()
            .find(|c| c.slug() == needle || c.output_tag() == needle)
            .ok_or_else(|| format!("unknown content type '{s}' (expected rpph, activity-detail, assessment-guide or story)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_markers_are_bit_exact() {
        assert_eq!(InputTag::Rpph.start_marker(), "<input_RPPH>");
        assert_eq!(InputTag::ActivityDetail.end_marker(), "</input_Activity_Detail>");
        assert_eq!(InputTag::StoryTopic.start_marker(), "<topik_cerita>");
    }

    #[test]
    fn every_content_type_maps_to_one_input_and_one_region() {
        let outputs: Vec<&str> = ContentType::ALL.iter().map(|c| c.output_tag()).collect();
        assert_eq!(outputs, vec!["rpph", "activity_detail", "assessment_guide", "story"]);
        for c in ContentType::ALL {
            assert_eq!(c.required_tags().len(), 1);
            assert_eq!(ContentType::from_output_tag(c.output_tag()), Some(c));
        }
    }

    #[test]
    fn content_type_parses_slug_and_tag() {
        assert_eq!("activity-detail".parse::<ContentType>().unwrap(), ContentType::ActivityDetail);
        assert_eq!("assessment_guide".parse::<ContentType>().unwrap(), ContentType::AssessmentGuide);
        assert!("lesson".parse::<ContentType>().is_err());
    }

    #[test]
    fn output_options_carry_header_stamp() {
        let opts = ContentType::Story.output_options();
        assert_eq!(opts.header_text, "Cerita Edukatif - KBTK Al Muhajirin");
        assert_eq!(opts.header_emoji, "📖");
        assert_eq!(opts.start_marker(), "<story>");
        assert_eq!(opts.end_marker(), "</story>");
    }

    #[test]
    fn unknown_input_tag_lists_vocabulary() {
        let err = "input_rpph".parse::<InputTag>().unwrap_err();
        assert!(err.contains("input_RPPH"));
    }
}
