use std::sync::Mutex;

use async_trait::async_trait;
use kbtk_io::generate::GenerationError;
use kbtk_io::prelude::*;

struct StubProvider {
    reply: Result<String, GenerationError>,
    prompts: Mutex<Vec<String>>,
}

impl StubProvider {
    fn replying(text: &str) -> Self {
        Self { reply: Ok(text.to_string()), prompts: Mutex::new(Vec::new()) }
    }

    fn failing(err: GenerationError) -> Self {
        Self { reply: Err(err), prompts: Mutex::new(Vec::new()) }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerationProvider for StubProvider {
    async fn generate(&self, prompt: &str) -> Result<Generation, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let text = self.reply.clone()?;
        Ok(Generation {
            text,
            stats: GenerationStats { input_tokens: 10, output_tokens: 5, total_tokens: 15, cost_in_rupiah: 2 },
        })
    }
}

fn document_with_inputs() -> Document {
    Document::from_lines(
        "<input_RPPH>\nTema: Binatang\n</input_RPPH>\n\n<input_Activity_Detail>\nMenggambar kucing\n</input_Activity_Detail>",
    )
}

#[tokio::test]
async fn appends_output_after_document_end() -> anyhow::Result<()> {
    let mut doc = document_with_inputs();
    let before = doc.len();
    let provider = StubProvider::replying("# Judul\n• poin");
    let mut seen = Vec::new();

    let outcome = process(&mut doc, ContentType::Rpph, &provider, |pct, msg| seen.push((pct, msg.to_string())))
        .await?;

    assert_eq!(outcome.generation.stats.total_tokens, 15);
    assert_eq!(
        seen.iter().map(|(p, _)| *p).collect::<Vec<_>>(),
        vec![10, 20, 40, 40, 50, 75, 85, 100]
    );
    assert_eq!(seen[2].1, "Processing input_RPPH content...");

    let header = &doc.elements[before];
    assert_eq!(header.heading, ParagraphHeading::Heading1);
    assert!(header.text.ends_with("] [📍📤 RPPH - KBTK Al Muhajirin]"));
    assert_eq!(doc.elements[before + 1].text, "");
    assert_eq!(doc.elements[before + 2].text, "Judul");
    assert_eq!(doc.elements[before + 2].heading, ParagraphHeading::Heading5);
    assert!(doc.elements[before + 3].is_list_item());

    let prompts = provider.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Tema: Binatang"));
    Ok(())
}

#[tokio::test]
async fn only_the_required_input_reaches_the_prompt() -> anyhow::Result<()> {
    let mut doc = document_with_inputs();
    let provider = StubProvider::replying("isi");

    process(&mut doc, ContentType::ActivityDetail, &provider, |_, _| {}).await?;

    let prompt = &provider.prompts()[0];
    assert!(prompt.contains("Menggambar kucing"));
    assert!(!prompt.contains("Tema: Binatang"));
    assert!(prompt.contains("PETUNJUK PENTING"));
    Ok(())
}

#[tokio::test]
async fn replaces_existing_output_region() -> anyhow::Result<()> {
    let mut doc = Document::from_lines("<topik_cerita>\nKucing\n</topik_cerita>\n<story>\nlama\nlama juga\n</story>\nakhir");
    let provider = StubProvider::replying("Cerita baru");

    process(&mut doc, ContentType::Story, &provider, |_, _| {}).await?;

    assert_eq!(
        doc.texts(),
        vec!["<topik_cerita>", "Kucing", "</topik_cerita>", "<story>", "Cerita baru", "</story>", "akhir"]
    );
    Ok(())
}

#[tokio::test]
async fn missing_tag_stops_before_generation() {
    let mut doc = Document::from_lines("<input_RPPH>\nTema\n</input_RPPH>");
    let provider = StubProvider::replying("unused");

    let err = process(&mut doc, ContentType::AssessmentGuide, &provider, |_, _| {}).await.unwrap_err();

    assert_eq!(err, ProcessError::MissingTag { tag: InputTag::Assessment });
    assert_eq!(
        err.to_string(),
        "Mohon tambahkan input_Assessment di antara tag <input_Assessment> dan </input_Assessment>"
    );
    assert!(provider.prompts().is_empty());
    assert_eq!(doc.len(), 3);
}

#[tokio::test]
async fn empty_input_is_rejected() {
    let mut doc = Document::from_lines("<topik_cerita>\n   \n</topik_cerita>");
    let provider = StubProvider::replying("unused");

    let err = process(&mut doc, ContentType::Story, &provider, |_, _| {}).await.unwrap_err();

    assert_eq!(err, ProcessError::EmptyInput { tag: InputTag::StoryTopic });
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn generation_failure_leaves_document_untouched() {
    let mut doc = Document::from_lines("<topik_cerita>\nKucing\n</topik_cerita>");
    let before = doc.clone();
    let provider = StubProvider::failing(GenerationError::Api("overloaded".into()));
    let mut last = 0;

    let err = process(&mut doc, ContentType::Story, &provider, |pct, _| last = pct).await.unwrap_err();

    assert_eq!(err.to_string(), "API Error: overloaded");
    assert_eq!(last, 50);
    assert_eq!(doc, before);
}

#[tokio::test]
async fn unpaired_output_marker_is_a_format_error() {
    let mut doc = Document::from_lines("<topik_cerita>\nKucing\n</topik_cerita>\n<story>");
    let provider = StubProvider::replying("Cerita");

    let err = process(&mut doc, ContentType::Story, &provider, |_, _| {}).await.unwrap_err();

    assert_eq!(err, ProcessError::Format { region: "story" });
}
