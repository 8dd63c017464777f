//! Extract → generate → format for one content type.

use kbtk_core::DocumentBody;
use kbtk_format::format_output_response;
use kbtk_generate::{ExtractedInputs, Generation, GenerationError, GenerationProvider, build_prompt};
use kbtk_tags::{ContentType, ExtractionError, InputTag, extract_input};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessError {
    #[error("Mohon tambahkan {tag} di antara tag <{tag}> dan </{tag}>")]
    MissingTag { tag: InputTag },
    #[error("input {tag} is empty")]
    EmptyInput { tag: InputTag },
    #[error(transparent)]
    Extraction(ExtractionError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error("failed to format and insert output into <{region}>")]
    Format { region: &'static str },
}

impl From<ExtractionError> for ProcessError {
    fn from(e: ExtractionError) -> Self {
        match e {
            ExtractionError::MissingMarker { tag, .. } => ProcessError::MissingTag { tag },
            other => ProcessError::Extraction(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub content_type: ContentType,
    pub generation: Generation,
}

/// Run the whole flow for `content_type` against `body`.
///
/// `progress` receives `(percentage, message)` synchronously at each
/// milestone. Any failure aborts before the document is touched, except a
/// formatting failure, which may leave partial output behind.
#[instrument(skip_all, fields(content_type = %content_type))]
pub async fn process<B, P, F>(
    body: &mut B,
    content_type: ContentType,
    provider: &P,
    mut progress: F,
) -> Result<ProcessOutcome, ProcessError>
where
    B: DocumentBody + ?Sized,
    P: GenerationProvider + ?Sized,
    F: FnMut(u8, &str),
{
    progress(10, "Initializing process...");
    progress(20, "Validating input tags...");

    let tags = content_type.required_tags();
    let step = 20 / tags.len().max(1);
    let mut inputs = ExtractedInputs::new();
    for (i, &tag) in tags.iter().enumerate() {
        let text = extract_input(body, tag)?;
        if text.is_empty() {
            return Err(ProcessError::EmptyInput { tag });
        }
        inputs.insert(tag, text);
        let pct = 20 + step * (i + 1);
        progress(pct as u8, &format!("Processing {tag} content..."));
    }

    progress(40, "Initiating AI analysis...");
    let prompt = build_prompt(content_type, &inputs);

    progress(50, "Generating content...");
    let generation = provider.generate(&prompt).await?;

    progress(75, "Processing AI response...");
    progress(85, "Formatting output...");

    let fallback = body.num_children().saturating_sub(1);
    let options = content_type.output_options();
    if !format_output_response(body, &generation.text, fallback, &options) {
        return Err(ProcessError::Format { region: content_type.output_tag() });
    }

    progress(100, "Operation completed successfully!");
    info!(
        total_tokens = generation.stats.total_tokens,
        cost_in_rupiah = generation.stats.cost_in_rupiah,
        "content generated"
    );
    Ok(ProcessOutcome { content_type, generation })
}
