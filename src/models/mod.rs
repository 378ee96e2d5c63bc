use serde::Deserialize;
use utoipa::IntoParams;

// Entity schemas, grouped the way the admin SPA consumes them.
pub mod analytics;
pub mod document;
pub mod driver;
pub mod fuel;
pub mod incident;
pub mod lookup;
pub mod maintenance;
pub mod trip;
pub mod user;
pub mod vehicle;

pub use analytics::*;
pub use document::*;
pub use driver::*;
pub use fuel::*;
pub use incident::*;
pub use lookup::*;
pub use maintenance::*;
pub use trip::*;
pub use user::*;
pub use vehicle::*;

/// PageFilter
///
/// The shared query-parameter set for every list endpoint: `limit`/`skip`
/// pagination plus an optional free-text `search` term. Each repository method
/// decides which columns the search term applies to.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct PageFilter {
    pub limit: Option<i64>,
    pub skip: Option<i64>,
    pub search: Option<String>,
}

impl PageFilter {
    /// Effective page size, clamped to the 1..=1000 range the original API enforced.
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(100).clamp(1, 1000)
    }

    /// Effective row offset, never negative.
    pub fn skip(&self) -> i64 {
        self.skip.unwrap_or(0).max(0)
    }
}
