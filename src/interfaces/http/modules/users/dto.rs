//! User DTOs

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::shared::{is_present, is_valid_email};

pub const MISSING_FIELDS_MESSAGE: &str = "Name and email are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format";

/// Create/update user request
///
/// Both fields are required; `role` cannot be set through the API.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[schema(example = json!({"name": "Ana", "email": "ana@x.com"}))]
pub struct UserPayload {
    /// Display name (`nom` accepted for older clients)
    #[serde(default, alias = "nom")]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserPayload {
    /// Validated fields. Only meaningful after `validate()` succeeded.
    pub fn fields(&self) -> (&str, &str) {
        (
            self.name.as_deref().unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
        )
    }
}

fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

impl Validate for UserPayload {
    /// Presence is checked before format; a missing field hides a bad email.
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name_ok = is_present(self.name.as_deref());
        let email_ok = is_present(self.email.as_deref());
        if !name_ok {
            errors.add("name", error_with_message("required", MISSING_FIELDS_MESSAGE));
        }
        if !email_ok {
            errors.add("email", error_with_message("required", MISSING_FIELDS_MESSAGE));
        }
        if name_ok && email_ok && !is_valid_email(self.fields().1) {
            errors.add("email", error_with_message("email", INVALID_EMAIL_MESSAGE));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, email: Option<&str>) -> UserPayload {
        UserPayload {
            name: name.map(String::from),
            email: email.map(String::from),
        }
    }

    #[test]
    fn complete_payload_is_valid() {
        assert!(payload(Some("Ana"), Some("ana@x.com")).validate().is_ok());
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        for p in [
            payload(None, Some("ana@x.com")),
            payload(Some("Ana"), None),
            payload(Some(""), Some("ana@x.com")),
            payload(Some("Ana"), Some("")),
        ] {
            let errors = p.validate().unwrap_err();
            let codes: Vec<_> = errors
                .field_errors()
                .values()
                .flat_map(|errs| errs.iter().map(|e| e.code.to_string()))
                .collect();
            assert_eq!(codes, vec!["required".to_string()]);
        }
    }

    #[test]
    fn bad_email_format_is_rejected() {
        let errors = payload(Some("Ana"), Some("bad-email")).validate().unwrap_err();
        assert!(errors.field_errors().values().any(|errs| errs
            .iter()
            .any(|e| e.message.as_deref() == Some(INVALID_EMAIL_MESSAGE))));
    }

    #[test]
    fn legacy_nom_key_is_accepted() {
        let p: UserPayload = serde_json::from_str(r#"{"nom": "Ana", "email": "ana@x.com"}"#).unwrap();
        assert_eq!(p.fields(), ("Ana", "ana@x.com"));
    }
}
