//! Static per-field descriptor table.
//!
//! Each profile field has exactly one descriptor carrying its display label,
//! the input kind the UI should render, and an optional shape check for
//! non-empty values. Both the renderer and the validator consult this table,
//! so per-field behavior lives in one place.

use crate::models::FieldKey;

/// Kind of input control a field renders as.
#[derive(Debug, Clone, Copy, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Select,
    Date,
    Url,
    /// Gesture-based webcam capture; the value is an opaque image token.
    Camera,
}

/// Shape check applied to a trimmed, non-empty raw value. Returns a short
/// machine-readable reason on rejection.
pub type ShapeCheck = fn(&str) -> Result<(), &'static str>;

pub struct FieldDescriptor {
    pub key: FieldKey,
    pub label: &'static str,
    pub input: InputKind,
    /// Choices for `Select` inputs; empty otherwise.
    pub options: &'static [&'static str],
    pub shape: Option<ShapeCheck>,
}

static DESCRIPTORS: [FieldDescriptor; 8] = [
    FieldDescriptor {
        key: FieldKey::FullName,
        label: "Full Name",
        input: InputKind::Text,
        options: &[],
        shape: None,
    },
    FieldDescriptor {
        key: FieldKey::PhotoProfile,
        label: "Photo Profile",
        input: InputKind::Camera,
        options: &[],
        // The capture collaborator is trusted to hand back a well-formed
        // token or nothing at all.
        shape: None,
    },
    FieldDescriptor {
        key: FieldKey::Gender,
        label: "Gender",
        input: InputKind::Select,
        options: &["male", "female", "other"],
        shape: None,
    },
    FieldDescriptor {
        key: FieldKey::Domicile,
        label: "Domicile",
        input: InputKind::Text,
        options: &[],
        shape: None,
    },
    FieldDescriptor {
        key: FieldKey::Email,
        label: "Email",
        input: InputKind::Email,
        options: &[],
        shape: Some(check_email),
    },
    FieldDescriptor {
        key: FieldKey::PhoneNumber,
        label: "Phone Number",
        input: InputKind::Tel,
        options: &[],
        shape: None,
    },
    FieldDescriptor {
        key: FieldKey::LinkedinLink,
        label: "LinkedIn",
        input: InputKind::Url,
        options: &[],
        shape: Some(check_http_url),
    },
    FieldDescriptor {
        key: FieldKey::DateOfBirth,
        label: "Date of Birth",
        input: InputKind::Date,
        options: &[],
        shape: None,
    },
];

/// Look up the descriptor for a field key.
pub fn descriptor(key: FieldKey) -> &'static FieldDescriptor {
    DESCRIPTORS
        .iter()
        .find(|d| d.key == key)
        .expect("every FieldKey has a descriptor")
}

/// `localpart@domain.tld`: no internal whitespace, exactly one `@`, at least
/// one `.` in the domain portion.
fn check_email(value: &str) -> Result<(), &'static str> {
    if value.chars().any(char::is_whitespace) {
        return Err("email must not contain whitespace");
    }
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err("email must contain exactly one @"),
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err("email domain must contain a dot");
    }
    Ok(())
}

fn check_http_url(value: &str) -> Result<(), &'static str> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err("url must start with http:// or https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_catalog_key_has_a_descriptor() {
        for key in crate::models::FIELD_CATALOG {
            assert_eq!(descriptor(key).key, key);
        }
    }

    #[test]
    fn email_shapes() {
        assert!(check_email("ana@x.co").is_ok());
        assert!(check_email("a.b@mail.example.com").is_ok());
        assert!(check_email("ana@x").is_err());
        assert!(check_email("ana x@x.co").is_err());
        assert!(check_email("ana@@x.co").is_err());
        assert!(check_email("@x.co").is_err());
        assert!(check_email("ana@").is_err());
    }

    #[test]
    fn url_shapes() {
        assert!(check_http_url("https://linkedin.com/in/ana").is_ok());
        assert!(check_http_url("http://x").is_ok());
        assert!(check_http_url("ftp://x").is_err());
        assert!(check_http_url("linkedin.com/in/ana").is_err());
    }
}
