use chrono::NaiveDate;

use crate::types::db::cadet;

/// The three staff-entered progress axes plus service hours of one cadet
///
/// Missing values are kept as `None` here and read as zero by the rollup.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressScores {
    pub academic: Option<f64>,
    pub fitness: Option<f64>,
    pub leadership: Option<f64>,
    pub service_hours: Option<i32>,
    pub start_date: Option<NaiveDate>,
}

impl From<&cadet::Model> for ProgressScores {
    fn from(cadet: &cadet::Model) -> Self {
        Self {
            academic: cadet.academic_progress,
            fitness: cadet.fitness_progress,
            leadership: cadet.leadership_progress,
            service_hours: cadet.service_hours,
            start_date: cadet.start_date,
        }
    }
}

/// Axis of the cohort progress display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressAxis {
    Academic,
    Fitness,
    Leadership,
    CommunityService,
}

impl ProgressAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressAxis::Academic => "academic",
            ProgressAxis::Fitness => "fitness",
            ProgressAxis::Leadership => "leadership",
            ProgressAxis::CommunityService => "community_service",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProgressAxis::Academic => "Academic",
            ProgressAxis::Fitness => "Physical Fitness",
            ProgressAxis::Leadership => "Leadership",
            ProgressAxis::CommunityService => "Community Service",
        }
    }
}

/// Mean of one axis across a cohort, rounded to the nearest integer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAverage {
    pub axis: ProgressAxis,
    pub value: i64,
}

/// Cohort rollup; `axes` is empty when the cohort is empty
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CohortProgress {
    pub cohort_size: usize,
    pub axes: Vec<AxisAverage>,
}

/// Display band of a single progress score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressBand {
    Excellent,
    OnTrack,
    NeedsAttention,
    RequiresFocus,
}

impl ProgressBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgressBand::Excellent => "excellent",
            ProgressBand::OnTrack => "on_track",
            ProgressBand::NeedsAttention => "needs_attention",
            ProgressBand::RequiresFocus => "requires_focus",
        }
    }
}

/// One axis of a single cadet's summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScore {
    pub axis: ProgressAxis,
    pub value: f64,
    pub band: ProgressBand,
}

/// Progress summary of a single cadet
#[derive(Debug, Clone, PartialEq)]
pub struct CadetProgressSummary {
    /// Flat mean of the three progress axes
    pub overall: f64,
    pub axes: Vec<AxisScore>,
    pub service_hours: i32,
    pub weeks_in_program: i64,
    /// Share of the residential phase completed, capped at 100
    pub program_completion: f64,
    pub service_hours_complete: bool,
    pub core_components_complete: bool,
}
