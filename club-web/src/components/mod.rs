//! UI Components

pub mod event_gallery;
pub mod event_modal;
pub mod footer;
pub mod navbar;
pub mod particles;
pub mod registration_form;
pub mod typewriter;

pub use event_gallery::EventGallery;
pub use event_modal::EventModal;
pub use footer::Footer;
pub use navbar::Navbar;
pub use particles::Particles;
pub use registration_form::RegistrationModal;
pub use typewriter::HeroTypewriter;
