pub mod auth;
pub mod booking;
pub mod dashboard;
pub mod pricing;
pub mod promoter;
pub mod rbac;
pub mod venue;
