pub mod cards;
pub mod contact;
pub mod count_up;
pub mod footer;
pub mod links;
pub mod navbar;
pub mod pages;
pub mod particles;
pub mod reveal;

pub use contact::{FetchTransport, StartProject};
pub use pages::{FleetProPage, HomePage, NotFoundPage};
pub use reveal::use_reveal;
