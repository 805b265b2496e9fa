pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod payouts;
pub mod pricing;
pub mod promoters;
pub mod venues;
