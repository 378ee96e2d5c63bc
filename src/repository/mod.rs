use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

mod analytics;
mod documents;
mod drivers;
mod fuel;
mod incidents;
mod lookups;
mod maintenance;
mod trips;
mod users;
mod vehicles;

pub use analytics::{AnalyticsStore, month_label, month_span};
pub use documents::DocumentStore;
pub use drivers::DriverStore;
pub use fuel::FuelStore;
pub use incidents::IncidentStore;
pub use lookups::LookupStore;
pub use maintenance::MaintenanceStore;
pub use trips::TripStore;
pub use users::UserStore;
pub use vehicles::VehicleStore;

/// Repository
///
/// The abstract persistence contract, composed from one store trait per
/// domain so each concern keeps its own module. Handlers depend on the trait
/// object, never on Postgres directly.
///
/// **Send + Sync + async_trait** on the component traits make the trait
/// object (`Arc<dyn Repository>`) safely shareable across Axum's
/// asynchronous task boundaries.
pub trait Repository:
    UserStore
    + DriverStore
    + VehicleStore
    + TripStore
    + FuelStore
    + MaintenanceStore
    + IncidentStore
    + DocumentStore
    + LookupStore
    + AnalyticsStore
{
}

/// The concrete type used to share the persistence layer across the application state.
pub type RepositoryState = Arc<dyn Repository>;

/// PostgresRepository
///
/// The single concrete implementation, backed by a `sqlx` connection pool.
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Repository for PostgresRepository {}

/// Widens an inclusive calendar-date window to a half-open timestamp range
/// covering the whole days, for filtering TIMESTAMPTZ columns: compare with
/// `>= start` and `< end`.
pub(crate) fn day_bounds(start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let lower = start.and_time(NaiveTime::MIN).and_utc();
    let upper = end
        .checked_add_days(Days::new(1))
        .unwrap_or(end)
        .and_time(NaiveTime::MIN)
        .and_utc();
    (lower, upper)
}

/// Lower bound of a single day, for one-sided `created_at >= ...` filters.
pub(crate) fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Exclusive upper bound of a single day, for `created_at < ...` filters.
pub(crate) fn day_end_exclusive(date: NaiveDate) -> DateTime<Utc> {
    date.checked_add_days(Days::new(1))
        .unwrap_or(date)
        .and_time(NaiveTime::MIN)
        .and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_day_bounds_single_day_spans_whole_day() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let (lower, upper) = day_bounds(day, day);
        assert_eq!(lower, Utc.with_ymd_and_hms(2025, 3, 15, 0, 0, 0).unwrap());
        assert_eq!(upper, Utc.with_ymd_and_hms(2025, 3, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_day_bounds_window_is_inclusive_of_end_date() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let (lower, upper) = day_bounds(start, end);
        assert_eq!(lower, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
        // A record written 23:59:59 on the end date still falls inside.
        assert_eq!(upper, Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_day_start_and_end_bracket_one_day() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(
            day_start(day),
            Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()
        );
        assert_eq!(
            day_end_exclusive(day),
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
        );
    }
}
