use chrono::{NaiveDate, Utc};
use fleetdash::{
    error::ApiError,
    models::{
        DashboardCounts, ExpiringQuery, FuelUpdate, LookupKind, PageFilter, UserAccount,
        VehicleStatusCount, account_status, fuel::compute_cost, trip_status,
    },
    repository::{month_label, month_span},
};

// --- Serialization contracts ---

#[test]
fn test_user_account_never_serializes_password() {
    let user = UserAccount {
        id: 1,
        username: "fleet_admin".to_string(),
        email: "admin@example.com".to_string(),
        password: "$2b$12$secret-hash".to_string(),
        status: account_status::ACTIVE.to_string(),
        created_at: Utc::now(),
    };

    let json_output = serde_json::to_string(&user).unwrap();
    assert!(!json_output.contains("password"));
    assert!(!json_output.contains("secret-hash"));
    assert!(json_output.contains(r#""username":"fleet_admin""#));
}

#[test]
fn test_fuel_update_omits_absent_fields() {
    let update = FuelUpdate {
        quantity: Some(40.0),
        ..Default::default()
    };

    let json_output = serde_json::to_string(&update).unwrap();
    assert!(json_output.contains(r#""quantity":40.0"#));
    assert!(!json_output.contains("price_per_liter"));
    assert!(!json_output.contains("vehicle_id"));
}

// --- Derived values ---

#[test]
fn test_compute_cost_rounds_to_cents() {
    assert_eq!(compute_cost(40.0, 1.5), 60.0);
    assert_eq!(compute_cost(33.333, 1.499), 49.97);
    assert_eq!(compute_cost(0.0, 2.0), 0.0);
}

#[test]
fn test_page_filter_clamps_limit_and_skip() {
    let filter = PageFilter {
        limit: Some(10_000),
        skip: Some(-5),
        search: None,
    };
    assert_eq!(filter.limit(), 1000);
    assert_eq!(filter.skip(), 0);

    let defaults = PageFilter::default();
    assert_eq!(defaults.limit(), 100);
    assert_eq!(defaults.skip(), 0);
}

// --- Analytics helpers ---

#[test]
fn test_month_label_format() {
    assert_eq!(month_label(2025, 1), "Jan '25");
    assert_eq!(month_label(2024, 12), "Dec '24");
    assert_eq!(month_label(2009, 6), "Jun '09");
}

#[test]
fn test_month_span_covers_window_inclusive() {
    let start = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
    assert_eq!(
        month_span(start, end),
        vec![(2024, 11), (2024, 12), (2025, 1), (2025, 2)]
    );
}

#[test]
fn test_month_span_single_month_and_inverted_window() {
    let day = NaiveDate::from_ymd_opt(2025, 7, 10).unwrap();
    assert_eq!(month_span(day, day), vec![(2025, 7)]);

    let earlier = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    assert!(month_span(day, earlier).is_empty());
}

// --- Error mapping ---

#[test]
fn test_error_status_codes() {
    use axum::http::StatusCode;

    assert_eq!(
        ApiError::NotFound("x".into()).status(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
    assert_eq!(
        ApiError::Validation("x".into()).status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        ApiError::Forbidden("x".into()).status(),
        StatusCode::FORBIDDEN
    );
}

// --- Lookup slugs ---

#[test]
fn test_lookup_slug_round_trip() {
    for kind in LookupKind::ALL {
        assert_eq!(LookupKind::from_slug(kind.slug()), Some(kind));
    }
    assert_eq!(LookupKind::from_slug("unknown-table"), None);
}

#[test]
fn test_lookup_identifiers_are_sql_safe() {
    for kind in LookupKind::ALL {
        for ident in [kind.table(), kind.column()] {
            assert!(
                ident.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "{ident} contains unexpected characters"
            );
        }
    }
}

#[test]
fn test_account_status_recognition() {
    assert!(account_status::is_known(account_status::ACTIVE));
    assert!(account_status::is_known(account_status::PENDING_APPROVAL));
    assert!(!account_status::is_known("banned"));
}

#[test]
fn test_trip_status_recognition() {
    for status in [
        trip_status::PLANNED,
        trip_status::ONGOING,
        trip_status::COMPLETED,
        trip_status::CANCELLED,
    ] {
        assert!(trip_status::is_known(status));
    }
    assert!(!trip_status::is_known("finished"));
    assert!(!trip_status::is_known("Planned"));
    assert!(!trip_status::is_known(""));
}

// --- Expiry horizon ---

#[test]
fn test_expiring_query_horizon_defaults_and_clamps() {
    assert_eq!(ExpiringQuery::default().horizon_days(), 30);
    assert_eq!(ExpiringQuery { days: Some(7) }.horizon_days(), 7);
    assert_eq!(ExpiringQuery { days: Some(-10) }.horizon_days(), 0);
    // Values past the i32 range cap instead of wrapping to a tiny window.
    assert_eq!(
        ExpiringQuery {
            days: Some(4_294_967_296)
        }
        .horizon_days(),
        i32::MAX as i64
    );
}

// --- Dashboard breakdown ---

#[test]
fn test_dashboard_counts_serialize_status_breakdown() {
    let counts = DashboardCounts {
        total_vehicles: 3,
        vehicles_by_status: vec![
            VehicleStatusCount {
                status: "available".to_string(),
                count: 2,
            },
            VehicleStatusCount {
                status: "in_maintenance".to_string(),
                count: 1,
            },
        ],
        ..Default::default()
    };

    let json_output = serde_json::to_string(&counts).unwrap();
    assert!(json_output.contains(
        r#""vehicles_by_status":[{"status":"available","count":2},{"status":"in_maintenance","count":1}]"#
    ));
    assert!(!json_output.contains("available_vehicles"));
}
