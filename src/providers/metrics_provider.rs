use crate::types::internal::metrics::{CohortCounts, DashboardMetrics};

/// Reduce raw cohort counts into the dashboard report
///
/// Graduation rate is `100 * graduated / total` rounded to one decimal
/// place, and 0 when no cadets are in scope.
pub fn aggregate(counts: &CohortCounts) -> DashboardMetrics {
    let graduation_rate = if counts.total_cadets == 0 {
        0.0
    } else {
        round_one_decimal(counts.graduated_cadets as f64 * 100.0 / counts.total_cadets as f64)
    };

    DashboardMetrics {
        active_cadets: counts.active_cadets,
        graduation_rate,
        service_hours: counts.service_hours.max(0),
        pending_applications: counts.pending_applications,
    }
}

/// Round half away from zero to one decimal place
pub(crate) fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scope_has_zero_graduation_rate() {
        let metrics = aggregate(&CohortCounts::default());
        assert_eq!(metrics.graduation_rate, 0.0);
        assert_eq!(metrics.active_cadets, 0);
        assert_eq!(metrics.service_hours, 0);
    }

    #[test]
    fn test_two_active_one_graduated() {
        let metrics = aggregate(&CohortCounts {
            total_cadets: 3,
            active_cadets: 2,
            graduated_cadets: 1,
            service_hours: 55,
            pending_applications: 4,
        });

        assert_eq!(metrics.active_cadets, 2);
        assert_eq!(metrics.graduation_rate, 33.3);
        assert_eq!(metrics.service_hours, 55);
        assert_eq!(metrics.pending_applications, 4);
    }

    #[test]
    fn test_rate_rounds_half_up() {
        // 2/3 = 66.666...
        let metrics = aggregate(&CohortCounts {
            total_cadets: 3,
            graduated_cadets: 2,
            ..Default::default()
        });
        assert_eq!(metrics.graduation_rate, 66.7);
    }

    #[test]
    fn test_everyone_graduated() {
        let metrics = aggregate(&CohortCounts {
            total_cadets: 7,
            graduated_cadets: 7,
            ..Default::default()
        });
        assert_eq!(metrics.graduation_rate, 100.0);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(72.25), 72.3);
        assert_eq!(round_one_decimal(73.0), 73.0);
        assert_eq!(round_one_decimal(31.818), 31.8);
    }
}
