use thiserror::Error;

/// Failures talking to the narrative-generation service
#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Narrative service is not configured: NARRATIVE_API_KEY is missing")]
    NotConfigured,

    #[error("Narrative request failed: {source}")]
    Request {
        #[source]
        source: reqwest::Error,
    },

    #[error("Narrative service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Narrative response could not be decoded: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
