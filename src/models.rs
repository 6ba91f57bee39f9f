use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub email: String,
}

/// Request body for create and update. Both fields are required and
/// must be non-empty.
#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub firstname: String,
    pub email: String,
}

impl UserPayload {
    pub fn validate(&self) -> Result<(), Error> {
        if self.firstname.trim().is_empty() {
            return Err(Error::Validation("firstname must not be empty".into()));
        }
        if self.email.trim().is_empty() {
            return Err(Error::Validation("email must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UserPayload;
    use crate::error::Error;

    #[test]
    fn payload_with_both_fields_is_valid() {
        let payload = UserPayload {
            firstname: "Ada".into(),
            email: "ada@x.com".into(),
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn empty_firstname_is_rejected() {
        let payload = UserPayload {
            firstname: "  ".into(),
            email: "ada@x.com".into(),
        };
        assert!(matches!(payload.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn empty_email_is_rejected() {
        let payload = UserPayload {
            firstname: "Ada".into(),
            email: String::new(),
        };
        assert!(matches!(payload.validate(), Err(Error::Validation(_))));
    }

    #[test]
    fn missing_field_fails_deserialization() {
        let result: Result<UserPayload, _> = serde_json::from_str(r#"{"firstname":"Ada"}"#);
        assert!(result.is_err());
    }
}
