use chrono::NaiveDate;

use crate::types::internal::progress::{
    AxisAverage, AxisScore, CadetProgressSummary, CohortProgress, ProgressAxis, ProgressBand,
    ProgressScores,
};

/// Length of the residential phase in weeks
pub const RESIDENTIAL_WEEKS: i64 = 22;

/// Service hours required for the service milestone
pub const SERVICE_HOURS_MILESTONE: i32 = 40;

/// Overall score required for the core components milestone
pub const CORE_COMPONENTS_THRESHOLD: f64 = 80.0;

/// Cohort means per axis, each rounded to the nearest integer
///
/// Community service is the mean of service hours capped at 100.
/// An empty cohort yields no axes.
pub fn cohort_rollup(cohort: &[ProgressScores]) -> CohortProgress {
    if cohort.is_empty() {
        return CohortProgress::default();
    }

    let n = cohort.len() as f64;
    let mean = |f: fn(&ProgressScores) -> f64| cohort.iter().map(f).sum::<f64>() / n;

    let academic = mean(|s| s.academic.unwrap_or(0.0));
    let fitness = mean(|s| s.fitness.unwrap_or(0.0));
    let leadership = mean(|s| s.leadership.unwrap_or(0.0));
    let service = mean(|s| s.service_hours.unwrap_or(0) as f64).min(100.0);

    CohortProgress {
        cohort_size: cohort.len(),
        axes: vec![
            AxisAverage { axis: ProgressAxis::Academic, value: academic.round() as i64 },
            AxisAverage { axis: ProgressAxis::Fitness, value: fitness.round() as i64 },
            AxisAverage { axis: ProgressAxis::Leadership, value: leadership.round() as i64 },
            AxisAverage { axis: ProgressAxis::CommunityService, value: service.round() as i64 },
        ],
    }
}

pub fn band(score: f64) -> ProgressBand {
    if score >= 80.0 {
        ProgressBand::Excellent
    } else if score >= 60.0 {
        ProgressBand::OnTrack
    } else if score >= 40.0 {
        ProgressBand::NeedsAttention
    } else {
        ProgressBand::RequiresFocus
    }
}

/// Flat mean of the three stored axes, missing values read as zero
pub fn overall(scores: &ProgressScores) -> f64 {
    (scores.academic.unwrap_or(0.0) + scores.fitness.unwrap_or(0.0) + scores.leadership.unwrap_or(0.0))
        / 3.0
}

/// Summary of a single cadet as of `today`
pub fn cadet_summary(scores: &ProgressScores, today: NaiveDate) -> CadetProgressSummary {
    let overall = overall(scores);

    let axes = [
        (ProgressAxis::Academic, scores.academic),
        (ProgressAxis::Fitness, scores.fitness),
        (ProgressAxis::Leadership, scores.leadership),
    ]
    .into_iter()
    .map(|(axis, value)| {
        let value = value.unwrap_or(0.0);
        AxisScore { axis, value, band: band(value) }
    })
    .collect();

    let weeks_in_program = scores
        .start_date
        .map(|start| ((today - start).num_days() / 7).max(0))
        .unwrap_or(0);

    let program_completion =
        (weeks_in_program as f64 / RESIDENTIAL_WEEKS as f64 * 100.0).min(100.0);

    let service_hours = scores.service_hours.unwrap_or(0);

    CadetProgressSummary {
        overall,
        axes,
        service_hours,
        weeks_in_program,
        program_completion,
        service_hours_complete: service_hours >= SERVICE_HOURS_MILESTONE,
        core_components_complete: overall >= CORE_COMPONENTS_THRESHOLD,
    }
}
