use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info, info_span};

use rahnuma_catalog::{Catalog, default_data_root};
use rahnuma_model::{Percentage, ProgramId};
use rahnuma_query::{AnnualExtras, CostBasis, FilterCriteria, compute_cost, filter};
use rahnuma_report::{AnalyticsReport, DashboardMetrics};
use rahnuma_session::Session;

use crate::cli::{FeesArgs, FilterArgs, OverviewArgs};
use crate::types::{FeeQuote, OverviewResult, ProgramRow, SearchResult};

/// How many matching programs the overview features.
pub const FEATURED_LIMIT: usize = 3;

/// The dashboard's "no filter" dropdown value.
const ALL_SENTINEL: &str = "All";

pub fn load_catalog(data_dir: Option<&Path>) -> Result<Catalog> {
    let root = data_dir.map_or_else(default_data_root, Path::to_path_buf);
    Catalog::load(&root).with_context(|| format!("load catalog from {}", root.display()))
}

/// Translate the sidebar flags into engine criteria.
///
/// Absent flags, blank values, and the `All` sentinel all mean "no
/// predicate"; only the engine sees `Option::None`.
pub fn criteria_from_args(args: &FilterArgs) -> Result<FilterCriteria> {
    let mut criteria = FilterCriteria::new();
    if let Some(city) = sidebar_value(args.city.as_deref()) {
        criteria = criteria.with_city(city);
    }
    if let Some(degree) = sidebar_value(args.degree.as_deref()) {
        criteria = criteria.with_degree_type(degree);
    }
    if let Some(max_tuition) = args.max_tuition {
        criteria = criteria.with_max_tuition(max_tuition);
    }
    if let Some(percentage) = args.percentage {
        let percentage =
            Percentage::new(percentage).context("--percentage must be between 0 and 100")?;
        criteria = criteria.with_min_percentage_allowed(percentage);
    }
    if let Some(name) = &args.name {
        criteria = criteria.with_name_contains(name.as_str());
    }
    Ok(criteria)
}

fn sidebar_value(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL_SENTINEL))
}

pub fn run_search(catalog: &Catalog, args: &FilterArgs) -> Result<SearchResult> {
    let span = info_span!("search");
    let _guard = span.enter();
    let criteria = criteria_from_args(args)?;
    debug!(?criteria, "applying filters");
    let matched = filter(catalog.details(), &criteria);
    info!(
        matched = matched.len(),
        total = catalog.details().len(),
        "search complete"
    );
    Ok(SearchResult {
        criteria,
        count: matched.len(),
        programs: matched.into_iter().map(ProgramRow::from).collect(),
    })
}

pub fn run_overview(catalog: &Catalog, args: &OverviewArgs) -> Result<OverviewResult> {
    let span = info_span!("overview");
    let _guard = span.enter();

    // The --saved flags seed this invocation's session; duplicate flags
    // collapse through the idempotent save.
    let mut session = Session::new();
    for id in &args.saved {
        session.saved.save(ProgramId::new(*id));
    }

    let criteria = criteria_from_args(&args.filter)?;
    let matched = filter(catalog.details(), &criteria);
    let metrics = DashboardMetrics::new(catalog, matched.len(), session.saved.len());
    let featured = matched
        .iter()
        .take(FEATURED_LIMIT)
        .map(|detail| ProgramRow::from(*detail))
        .collect();
    info!(
        matches = metrics.matches,
        saved = metrics.saved,
        "overview complete"
    );
    Ok(OverviewResult { metrics, featured })
}

pub fn run_fees(catalog: &Catalog, args: &FeesArgs) -> Result<FeeQuote> {
    let span = info_span!("fees", program = args.program);
    let _guard = span.enter();
    let detail = catalog
        .program_detail(ProgramId::new(args.program))
        .ok_or_else(|| anyhow!("program {} not found in catalog", args.program))?;
    let extras = AnnualExtras {
        books: args.books,
        transport: args.transport,
        misc: args.misc,
    };
    let cost = compute_cost(&CostBasis::from(detail), &extras)
        .with_context(|| format!("compute cost for program {}", args.program))?;
    info!(
        annual_cost = cost.annual_cost,
        total_cost = cost.total_cost,
        "fee quote complete"
    );
    Ok(FeeQuote {
        program: ProgramRow::from(detail),
        website: detail.website.clone(),
        cost,
    })
}

pub fn run_analytics(catalog: &Catalog) -> AnalyticsReport {
    let span = info_span!("analytics");
    let _guard = span.enter();
    let report = AnalyticsReport::build(catalog);
    info!(
        universities = catalog.universities().len(),
        programs = catalog.programs().len(),
        "analytics complete"
    );
    report
}
