//! `kbtk-io` is the single supported public entrypoint for the KBTK planner:
//! the document model, input extraction, the output formatter, generation
//! providers and the orchestrated `process` flow that ties them together.

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `kbtk_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

/// Document JSON parsing with actionable diagnostics.
pub mod document_json;

/// Extract → generate → format orchestration.
pub mod process;

#[doc(hidden)]
pub mod core {
    pub use kbtk_core::{
        BodyError, BoldRange, Document, DocumentBody, Element, ElementKind, GlyphType, ParagraphHeading,
        TextAttributes, TextLocator,
    };
}

#[doc(hidden)]
pub mod tags {
    pub use kbtk_tags::template::template_body;
    pub use kbtk_tags::{
        ContentType, ExtractionError, InputTag, MarkerSide, OutputStyleOptions, extract_between, extract_input,
        insert_all_templates,
    };
}

#[doc(hidden)]
pub mod format {
    pub use kbtk_format::{
        FormatError, RegionOutcome, RenderState, classify_line, format_output_response, format_output_response_at,
        header_line, jakarta_now, render_lines, try_format_output_response, try_format_output_response_at,
    };
}

#[doc(hidden)]
pub mod generate {
    pub use kbtk_generate::{
        AnthropicClient, CostCalculator, ExtractedInputs, Generation, GenerationError, GenerationProvider,
        GenerationStats, ProviderConfig, ProviderConfigError, TokenCounter, build_prompt,
    };
    pub use kbtk_generate::cost::{approximate_token_count, estimate_input_tokens};
}

/// Convenience prelude for consumers.
pub mod prelude {
    pub use crate::core::{Document, DocumentBody, Element, ElementKind, GlyphType, ParagraphHeading};
    pub use crate::document_json::{DocumentJsonError, parse_document_json_str, to_document_json_string};
    pub use crate::format::{RegionOutcome, format_output_response};
    pub use crate::generate::{AnthropicClient, Generation, GenerationProvider, GenerationStats, ProviderConfig};
    pub use crate::process::{ProcessError, ProcessOutcome, process};
    pub use crate::tags::{ContentType, InputTag, OutputStyleOptions, extract_input, insert_all_templates};
}
