use poem_openapi::{Object, Union};

use crate::types::internal::narrative::{NarrativeAnalysis, StructuredAssessment};

/// Assessment parsed from the model's JSON reply
#[derive(Object, Debug, Clone, PartialEq)]
pub struct StructuredAnalysis {
    /// 1-10, when provided
    pub suitability_score: Option<f64>,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub risk_factors: Vec<String>,
    pub recommendations: Vec<String>,
    pub mentorship_focus: Vec<String>,
}

impl From<StructuredAssessment> for StructuredAnalysis {
    fn from(a: StructuredAssessment) -> Self {
        Self {
            suitability_score: a.suitability_score,
            summary: a.summary,
            strengths: a.strengths,
            risk_factors: a.risk_factors,
            recommendations: a.recommendations,
            mentorship_focus: a.mentorship_focus,
        }
    }
}

/// Reply text that could not be parsed into an assessment
#[derive(Object, Debug, Clone, PartialEq)]
pub struct RawAnalysis {
    pub text: String,
}

/// Narrative analysis, tagged by `kind`
#[derive(Union, Debug, Clone, PartialEq)]
#[oai(discriminator_name = "kind", one_of)]
pub enum NarrativeAnalysisResponse {
    #[oai(mapping = "structured")]
    Structured(StructuredAnalysis),
    #[oai(mapping = "raw")]
    Raw(RawAnalysis),
}

impl From<NarrativeAnalysis> for NarrativeAnalysisResponse {
    fn from(analysis: NarrativeAnalysis) -> Self {
        match analysis {
            NarrativeAnalysis::Structured(a) => Self::Structured(a.into()),
            NarrativeAnalysis::Raw(text) => Self::Raw(RawAnalysis { text }),
        }
    }
}
