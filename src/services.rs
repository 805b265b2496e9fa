pub mod access_service;
pub mod auth;
pub mod booking_service;
pub mod commission_service;
pub mod dashboard_service;
pub mod pricing_service;
pub mod scope_service;
