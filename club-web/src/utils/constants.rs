//! Application constants

/// Registration endpoint, overridable at build time.
pub const REGISTRATION_URL: &str = match option_env!("CLUB_REGISTRATION_URL") {
    Some(url) => url,
    None => "http://localhost:8000/register",
};

// Footer contact details
pub const CONTACT_EMAIL: &str = "programmingclub@example.com";
pub const CONTACT_PHONE: &str = "+1234567890";
pub const CONTACT_PHONE_LABEL: &str = "+1 (234) 567-890";
pub const CONTACT_ADDRESS: &str = "123 Tech Lane, Innovation City";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "https://twitter.com/"),
    ("LinkedIn", "https://linkedin.com/in/"),
    ("GitHub", "https://github.com/"),
    ("WhatsApp", "https://whatsapp.com/send?phone=8002350236"),
];

pub const CLUB_NAME: &str = "APC Programming Club";
