use super::*;
use crate::test::utils::{sample_application, sample_cadet};
use std::sync::Mutex;

/// Generator that replays a fixed reply and records prompts
struct FakeGenerator {
    reply: Option<String>,
    configured: bool,
    prompts: Mutex<Vec<String>>,
}

impl FakeGenerator {
    fn replying(reply: Option<&str>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.map(str::to_string),
            configured: true,
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn unconfigured() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            configured: false,
            prompts: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl NarrativeGenerator for FakeGenerator {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(&self, prompt: &str) -> Result<Option<String>, InternalError> {
        if !self.configured {
            return Err(NarrativeError::NotConfigured.into());
        }
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.reply.clone())
    }
}

#[tokio::test]
async fn test_structured_reply_is_parsed() {
    let fake = FakeGenerator::replying(Some(
        "Here is the assessment:\n```json\n{\"suitability_score\": 8, \"summary\": \"Motivated\", \
\"strengths\": [\"Resilient\"], \"risk_factors\": [], \"recommendations\": [\"Math tutoring\"], \
\"mentorship_focus\": [\"Goal setting\"]}\n```",
    ));
    let provider = NarrativeProvider::new(fake.clone());

    let analysis = provider.analyze_application(&sample_application()).await.unwrap();

    match analysis {
        NarrativeAnalysis::Structured(assessment) => {
            assert_eq!(assessment.suitability_score, Some(8.0));
            assert_eq!(assessment.summary.as_deref(), Some("Motivated"));
            assert_eq!(assessment.strengths, vec!["Resilient".to_string()]);
            assert_eq!(assessment.mentorship_focus, vec!["Goal setting".to_string()]);
        }
        other => panic!("expected structured analysis, got {:?}", other),
    }

    let prompts = fake.prompts.lock().unwrap();
    assert!(prompts[0].contains("Keoni Kahale"));
    assert!(prompts[0].contains("suitability_score"));
}

#[tokio::test]
async fn test_free_text_reply_is_returned_raw() {
    let text = "The cadet is progressing well; keep up the fitness routine.";
    let provider = NarrativeProvider::new(FakeGenerator::replying(Some(text)));

    let analysis = provider.cadet_insights(&sample_cadet()).await.unwrap();

    assert_eq!(analysis, NarrativeAnalysis::Raw(text.to_string()));
}

#[tokio::test]
async fn test_empty_reply_falls_back() {
    let provider = NarrativeProvider::new(FakeGenerator::replying(None));

    let application = provider.analyze_application(&sample_application()).await.unwrap();
    let cadet = provider.cadet_insights(&sample_cadet()).await.unwrap();

    assert_eq!(application, NarrativeAnalysis::Raw(APPLICATION_FALLBACK.to_string()));
    assert_eq!(cadet, NarrativeAnalysis::Raw(CADET_FALLBACK.to_string()));
}

#[tokio::test]
async fn test_unconfigured_generator_errors() {
    let provider = NarrativeProvider::new(FakeGenerator::unconfigured());

    assert!(!provider.is_configured());
    let err = provider.cadet_insights(&sample_cadet()).await.unwrap_err();
    assert!(matches!(err, InternalError::Narrative(NarrativeError::NotConfigured)));
}

#[tokio::test]
async fn test_client_without_key_is_not_configured() {
    let client = ChatCompletionsClient::new(NarrativeSettings::default(), None).unwrap();

    assert!(!client.is_configured());
    let err = client.complete("hello").await.unwrap_err();
    assert!(matches!(err, InternalError::Narrative(NarrativeError::NotConfigured)));
}

#[test]
fn test_parse_reply_handles_broken_json() {
    let text = "{ \"summary\": \"unterminated";
    assert_eq!(parse_reply(text), NarrativeAnalysis::Raw(text.to_string()));

    let braces_only = "Use {curly} braces carefully";
    assert_eq!(parse_reply(braces_only), NarrativeAnalysis::Raw(braces_only.to_string()));
}

#[test]
fn test_parse_reply_ignores_objects_without_known_keys() {
    let text = "{\"unexpected\": true}";
    assert_eq!(parse_reply(text), NarrativeAnalysis::Raw(text.to_string()));
}

#[test]
fn test_cadet_prompt_uses_placeholders() {
    let mut cadet = sample_cadet();
    cadet.notes = None;
    cadet.class_number = None;

    let prompt = cadet_prompt(&cadet);

    assert!(prompt.contains("No additional notes"));
    assert!(prompt.contains("Class: Unassigned"));
    assert!(prompt.contains("Academic: 72%"));
}
