//! Minimal RFC 4180 writer for registration rows.

use std::io::{self, Write};

use lib_core::model::store::Registration;

pub const HEADER: [&str; 10] = [
    "FullName",
    "Email",
    "Phone",
    "Year",
    "Branch",
    "Programming_Experience",
    "Interests",
    "GitHub_Profile",
    "Attended_Before",
    "Timestamp",
];

/// Quote a field when it contains a delimiter, quote or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_record<W: Write>(out: &mut W, fields: &[&str]) -> io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(out, "{}", line.join(","))
}

pub fn write_registrations<W: Write>(out: &mut W, rows: &[Registration]) -> io::Result<()> {
    write_record(out, &HEADER)?;
    for r in rows {
        write_record(
            out,
            &[
                &r.full_name,
                &r.email,
                &r.phone,
                &r.year,
                &r.branch,
                &r.programming_experience,
                &r.interests,
                &r.github_profile,
                &r.attended_before,
                &r.created_at,
            ],
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, interests: &str) -> Registration {
        Registration {
            id: 1,
            full_name: name.to_string(),
            email: "ann@x.co".to_string(),
            phone: "555-123-4567".to_string(),
            year: "2nd".to_string(),
            branch: "CS".to_string(),
            programming_experience: "beginner".to_string(),
            interests: interests.to_string(),
            github_profile: String::new(),
            attended_before: "No".to_string(),
            created_at: "2025-08-01 09:30:00".to_string(),
        }
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field("AI/ML, Web Dev"), "\"AI/ML, Web Dev\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_writes_header_and_rows() {
        let mut out = Vec::new();
        write_registrations(&mut out, &[row("Ann", "AI/ML, Web Dev")]).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HEADER.join(","));
        assert_eq!(
            lines[1],
            "Ann,ann@x.co,555-123-4567,2nd,CS,beginner,\"AI/ML, Web Dev\",,No,2025-08-01 09:30:00"
        );
    }
}
