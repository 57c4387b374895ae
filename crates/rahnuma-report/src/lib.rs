mod analytics;
mod metrics;

pub use analytics::{
    AnalyticsReport, DEFAULT_HISTOGRAM_BINS, HistogramBin, UniversityAverage,
    average_tuition_by_university, programs_by_city, tuition_histogram, university_type_counts,
};
pub use metrics::DashboardMetrics;
