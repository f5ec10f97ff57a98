//! Site state machines, content and style derivations, free of any DOM access

pub mod config;
pub mod content;
pub mod count_up;
pub mod palette;
pub mod particles;
pub mod reveal;
pub mod style;
pub mod submission;

pub use config::SiteConfig;
pub use reveal::{ObservationHandle, ObserveError, RevealController, RevealPhase, Threshold};
pub use submission::{
    ContactError, ContactField, ContactFields, ContactForm, ContactTransport, FormStore,
    SubmissionPhase,
};
