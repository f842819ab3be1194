pub mod admin_routes;
pub mod audit_routes;
pub mod booking_routes;
pub mod parking_routes;
pub mod partner_routes;
pub mod problem_routes;
pub mod user_routes;
