use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, patch, put},
};

/// Authenticated Router Module
///
/// Every fleet-management endpoint lives here: the whole administrative API
/// requires a validated, active account. The `AuthUser` extractor middleware
/// on the layer above this module guarantees that no handler runs without
/// one, and each handler additionally takes `AuthUser` so the requirement is
/// visible in its signature.
pub fn authenticated_routes() -> Router<AppState> {
    Router::<AppState>::new()
        // --- Session ---
        // GET /me
        // The account behind the presented token.
        .route("/me", get(handlers::users::get_me))
        // --- User management ---
        .route("/users", get(handlers::users::list_users))
        .route(
            "/users/{id}",
            get(handlers::users::get_user)
                .put(handlers::users::update_user)
                .delete(handlers::users::delete_user),
        )
        // --- Drivers ---
        .route(
            "/drivers",
            get(handlers::drivers::list_drivers).post(handlers::drivers::create_driver),
        )
        .route(
            "/drivers/{id}",
            get(handlers::drivers::get_driver)
                .put(handlers::drivers::update_driver)
                .delete(handlers::drivers::delete_driver),
        )
        // --- Vehicles ---
        .route(
            "/vehicles",
            get(handlers::vehicles::list_vehicles).post(handlers::vehicles::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(handlers::vehicles::get_vehicle)
                .put(handlers::vehicles::update_vehicle)
                .delete(handlers::vehicles::delete_vehicle),
        )
        // PATCH /vehicles/{id}/status
        // Status-only quick action from the vehicle table.
        .route(
            "/vehicles/{id}/status",
            patch(handlers::vehicles::set_vehicle_status),
        )
        // --- Trips ---
        .route(
            "/trips",
            get(handlers::trips::list_trips).post(handlers::trips::create_trip),
        )
        .route(
            "/trips/{id}",
            get(handlers::trips::get_trip)
                .put(handlers::trips::update_trip)
                .delete(handlers::trips::delete_trip),
        )
        .route("/trips/{id}/status", patch(handlers::trips::set_trip_status))
        // --- Fuel ---
        .route(
            "/fuel",
            get(handlers::fuel::list_fuel).post(handlers::fuel::create_fuel),
        )
        .route(
            "/fuel/{id}",
            get(handlers::fuel::get_fuel)
                .put(handlers::fuel::update_fuel)
                .delete(handlers::fuel::delete_fuel),
        )
        // --- Maintenance ---
        .route(
            "/maintenance",
            get(handlers::maintenance::list_maintenance)
                .post(handlers::maintenance::create_maintenance),
        )
        .route(
            "/maintenance/{id}",
            get(handlers::maintenance::get_maintenance)
                .put(handlers::maintenance::update_maintenance)
                .delete(handlers::maintenance::delete_maintenance),
        )
        // --- Pannes and reparations ---
        .route(
            "/pannes",
            get(handlers::incidents::list_pannes).post(handlers::incidents::create_panne),
        )
        .route(
            "/pannes/{id}",
            get(handlers::incidents::get_panne)
                .put(handlers::incidents::update_panne)
                .delete(handlers::incidents::delete_panne),
        )
        .route(
            "/reparations",
            get(handlers::incidents::list_reparations)
                .post(handlers::incidents::create_reparation),
        )
        .route(
            "/reparations/{id}",
            get(handlers::incidents::get_reparation)
                .put(handlers::incidents::update_reparation)
                .delete(handlers::incidents::delete_reparation),
        )
        // --- Vehicle documents ---
        .route(
            "/document-categories",
            get(handlers::documents::list_document_categories)
                .post(handlers::documents::create_document_category),
        )
        .route(
            "/document-categories/{id}",
            put(handlers::documents::update_document_category)
                .delete(handlers::documents::delete_document_category),
        )
        .route(
            "/documents",
            get(handlers::documents::list_documents).post(handlers::documents::create_document),
        )
        // Registered before /documents/{id} for clarity; Axum matches the
        // literal segment over the parameter either way.
        .route(
            "/documents/expiring",
            get(handlers::documents::list_expiring_documents),
        )
        .route(
            "/documents/{id}",
            get(handlers::documents::get_document)
                .put(handlers::documents::update_document)
                .delete(handlers::documents::delete_document),
        )
        // --- Lookup tables ---
        // One route family serves all eight single-column reference tables,
        // addressed by slug (vehicle-types, garages, fuel-types, ...).
        .route(
            "/lookups/{kind}",
            get(handlers::lookups::list_lookup).post(handlers::lookups::create_lookup),
        )
        .route(
            "/lookups/{kind}/{id}",
            get(handlers::lookups::get_lookup)
                .put(handlers::lookups::update_lookup)
                .delete(handlers::lookups::delete_lookup),
        )
        // --- Analytics ---
        .route(
            "/analytics/expense-summary",
            get(handlers::analytics::expense_summary),
        )
        .route(
            "/analytics/detailed-expense-records",
            get(handlers::analytics::detailed_expense_records),
        )
        .route("/analytics/dashboard", get(handlers::analytics::dashboard))
}
