/// Raw aggregate counts read from the persistence layer for one campus scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CohortCounts {
    /// Cadets in scope regardless of status
    pub total_cadets: u64,
    pub active_cadets: u64,
    pub graduated_cadets: u64,
    /// Sum of service hours with missing values counted as zero
    pub service_hours: i64,
    /// Pending applications scoped by preferred campus
    pub pending_applications: u64,
}

/// Fixed-shape dashboard report
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardMetrics {
    pub active_cadets: u64,
    /// Percentage rounded to one decimal place
    pub graduation_rate: f64,
    pub service_hours: i64,
    pub pending_applications: u64,
}
