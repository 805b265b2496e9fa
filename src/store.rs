pub mod seed;

pub mod user_store;
pub use user_store::UserStore;
pub mod venue_store;
pub use venue_store::VenueStore;
pub mod booking_store;
pub use booking_store::BookingStore;
pub mod promoter_store;
pub use promoter_store::PromoterStore;
pub mod pricing_store;
pub use pricing_store::PricingStore;
