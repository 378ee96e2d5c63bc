use axum::{
    Json,
    extract::{Query, State},
};

use crate::{
    AppState,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    models::{
        DashboardCounts, DateRangeQuery, DetailedRecordsQuery, DetailedReport, ExpenseSummary,
    },
};

const KNOWN_CATEGORIES: [&str; 4] = ["fuel", "reparation", "maintenance", "purchases"];

fn validate_window(start: chrono::NaiveDate, end: chrono::NaiveDate) -> ApiResult<()> {
    if end < start {
        return Err(ApiError::Validation(
            "end_date must not precede start_date".to_string(),
        ));
    }
    Ok(())
}

fn parse_categories(raw: Option<&str>) -> ApiResult<Vec<String>> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };
    let mut categories = Vec::new();
    for part in raw.split(',') {
        let name = part.trim().to_lowercase();
        if name.is_empty() {
            continue;
        }
        if !KNOWN_CATEGORIES.contains(&name.as_str()) {
            return Err(ApiError::Validation(format!(
                "Unknown expense category: {name}"
            )));
        }
        categories.push(name);
    }
    Ok(categories)
}

/// expense_summary
///
/// [Authenticated Route] Aggregate fleet spend over an inclusive date
/// window: per-category totals plus a zero-filled monthly breakdown covering
/// every month of the window.
#[utoipa::path(
    get,
    path = "/analytics/expense-summary",
    params(DateRangeQuery),
    responses(
        (status = 200, description = "Expense summary", body = ExpenseSummary),
        (status = 400, description = "Inverted date window")
    )
)]
pub async fn expense_summary(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<DateRangeQuery>,
) -> ApiResult<Json<ExpenseSummary>> {
    validate_window(query.start_date, query.end_date)?;
    let summary = state
        .repo
        .expense_summary(query.start_date, query.end_date)
        .await?;
    Ok(Json(summary))
}

/// detailed_expense_records
///
/// [Authenticated Route] Per-record expense listings backing the exportable
/// report. `categories` is a comma-separated subset of fuel, reparation,
/// maintenance and purchases; all four when omitted.
#[utoipa::path(
    get,
    path = "/analytics/detailed-expense-records",
    params(DetailedRecordsQuery),
    responses(
        (status = 200, description = "Detailed records", body = DetailedReport),
        (status = 400, description = "Inverted window or unknown category")
    )
)]
pub async fn detailed_expense_records(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(query): Query<DetailedRecordsQuery>,
) -> ApiResult<Json<DetailedReport>> {
    validate_window(query.start_date, query.end_date)?;
    let categories = parse_categories(query.categories.as_deref())?;
    let report = state
        .repo
        .detailed_records(query.start_date, query.end_date, &categories)
        .await?;
    Ok(Json(report))
}

/// dashboard
///
/// [Authenticated Route] Counter set for the admin dashboard header.
#[utoipa::path(
    get,
    path = "/analytics/dashboard",
    responses((status = 200, description = "Dashboard counters", body = DashboardCounts))
)]
pub async fn dashboard(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardCounts>> {
    let counts = state.repo.dashboard_counts().await?;
    Ok(Json(counts))
}

#[cfg(test)]
mod tests {
    use super::parse_categories;

    #[test]
    fn parses_comma_separated_categories() {
        let parsed = parse_categories(Some("fuel, Maintenance")).unwrap();
        assert_eq!(parsed, vec!["fuel".to_string(), "maintenance".to_string()]);
    }

    #[test]
    fn empty_input_means_all_categories() {
        assert!(parse_categories(None).unwrap().is_empty());
        assert!(parse_categories(Some("")).unwrap().is_empty());
    }

    #[test]
    fn rejects_unknown_category() {
        assert!(parse_categories(Some("fuel,insurance")).is_err());
    }
}
