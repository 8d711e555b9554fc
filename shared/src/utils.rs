//! # Shared Utility Functions
//!
//! Display helpers used by both the landing page and the registration endpoint.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{attended_label, short_date};
//!
//! assert_eq!(short_date("June 20-22, 2025"), "June 20-22");
//! assert_eq!(attended_label(true), "Yes");
//! ```

/// Drop everything from the first comma on, leaving the month/day part of a
/// display date.
///
/// Dates without a comma are returned unchanged.
///
/// # Examples
///
/// ```rust
/// use shared::utils::short_date;
///
/// assert_eq!(short_date("May 18, 2025"), "May 18");
/// assert_eq!(short_date("Full day"), "Full day");
/// ```
pub fn short_date(date: &str) -> &str {
    date.split(',').next().unwrap_or(date)
}

/// Render the "attended before" flag the way the registrations sheet stores it.
pub fn attended_label(attended_before: bool) -> &'static str {
    if attended_before {
        "Yes"
    } else {
        "No"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("June 20-22, 2025"), "June 20-22");
        assert_eq!(short_date("April 25, 2025"), "April 25");
        assert_eq!(short_date(""), "");
    }

    #[test]
    fn test_attended_label() {
        assert_eq!(attended_label(true), "Yes");
        assert_eq!(attended_label(false), "No");
    }
}
