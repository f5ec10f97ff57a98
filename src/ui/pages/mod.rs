//! Routed pages: home (`/`), Fleet Pro (`/fleetpro`) and the 404 fallback

mod fleet_pro;
pub(crate) mod home;
mod not_found;

pub use fleet_pro::FleetProPage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
