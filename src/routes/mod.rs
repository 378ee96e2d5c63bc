/// Router Module Index
///
/// Organizes the routing logic into security-segregated modules so access
/// control is applied explicitly at the module level (via Axum layers).
///
/// Routes accessible without a session: health check, login, registration
/// and the static HTML shells of the admin SPA.
pub mod public;

/// Routes protected by the `AuthUser` extractor middleware.
/// Requires a validated, active account.
pub mod authenticated;
