// One handler module per admin screen, mirroring the router layout.
pub mod analytics;
pub mod auth;
pub mod documents;
pub mod drivers;
pub mod fuel;
pub mod incidents;
pub mod lookups;
pub mod maintenance;
pub mod trips;
pub mod users;
pub mod vehicles;
