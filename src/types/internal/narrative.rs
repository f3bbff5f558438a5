use serde::Deserialize;

/// Structured assessment extracted from a narrative reply
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StructuredAssessment {
    /// Overall suitability on a 1-10 scale, when the model provided one
    pub suitability_score: Option<f64>,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub mentorship_focus: Vec<String>,
}

/// Narrative reply as returned to staff
///
/// Parsing is best effort: a reply that does not contain a usable JSON
/// object is returned verbatim as `Raw`.
#[derive(Debug, Clone, PartialEq)]
pub enum NarrativeAnalysis {
    Structured(StructuredAssessment),
    Raw(String),
}
