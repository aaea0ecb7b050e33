use crate::fields::{self, FieldError};
use crate::users::{dto::CreateUserRequest, repo_types::NewUser};

/// Capability flags derived from the submitted role string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleFlags {
    pub is_employer: bool,
    pub is_employee: bool,
}

impl RoleFlags {
    pub fn from_role(role: &str) -> Self {
        Self {
            is_employer: role == "employer",
            is_employee: role == "employee",
        }
    }
}

/// Validate and coerce a creation request.
pub fn new_user_from_request(req: CreateUserRequest) -> Result<NewUser, FieldError> {
    let name = fields::required_text("name", req.name)?;
    let email = fields::required_text("email", req.email)?;
    let password = fields::required_text("password", req.password)?;
    let role = fields::required_text("role", req.role)?;
    let flags = RoleFlags::from_role(&role);

    Ok(NewUser {
        name,
        email,
        password,
        is_employer: flags.is_employer,
        is_employee: flags.is_employee,
        photo_path: fields::text("photo_path", req.photo_path)?,
        address: fields::text("address", req.address)?,
        phone_number: fields::text("phone_number", req.phone_number)?,
        cv: fields::text("cv", req.cv)?,
    })
}

/// Exact comparison against the stored value. Credentials are kept in plaintext.
pub fn credentials_match(supplied: &str, stored: &str) -> bool {
    supplied == stored
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn request() -> CreateUserRequest {
        CreateUserRequest {
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            password: Some("secret".into()),
            role: Some("employer".into()),
            photo_path: None,
            address: Some("Calle Mayor 1".into()),
            phone_number: None,
            cv: None,
        }
    }

    #[test]
    fn role_sets_at_most_one_flag() {
        assert_eq!(
            RoleFlags::from_role("employer"),
            RoleFlags { is_employer: true, is_employee: false }
        );
        assert_eq!(
            RoleFlags::from_role("employee"),
            RoleFlags { is_employer: false, is_employee: true }
        );
        assert_eq!(
            RoleFlags::from_role("admin"),
            RoleFlags { is_employer: false, is_employee: false }
        );
        // case sensitive
        assert_eq!(
            RoleFlags::from_role("Employer"),
            RoleFlags { is_employer: false, is_employee: false }
        );
    }

    #[test]
    fn builds_new_user_with_optional_fields() {
        let user = new_user_from_request(request()).expect("valid request");
        assert_eq!(user.name, "Ana");
        assert!(user.is_employer);
        assert!(!user.is_employee);
        assert_eq!(user.address.as_deref(), Some("Calle Mayor 1"));
        assert_eq!(user.cv, None);
    }

    #[test]
    fn every_required_field_is_enforced() {
        let mut r = request();
        r.name = None;
        assert_eq!(new_user_from_request(r).unwrap_err(), FieldError::Missing);

        let mut r = request();
        r.email = Some(json!(""));
        assert_eq!(new_user_from_request(r).unwrap_err(), FieldError::Missing);

        let mut r = request();
        r.password = Some(json!("  "));
        assert_eq!(new_user_from_request(r).unwrap_err(), FieldError::Missing);

        let mut r = request();
        r.role = Some(Value::Null);
        assert_eq!(new_user_from_request(r).unwrap_err(), FieldError::Missing);
    }

    #[test]
    fn numeric_optional_fields_are_stored_as_text() {
        let mut r = request();
        r.phone_number = Some(json!(600111222));
        let user = new_user_from_request(r).expect("numeric phone is usable");
        assert_eq!(user.phone_number.as_deref(), Some("600111222"));
    }

    #[test]
    fn structured_values_are_invalid_not_missing() {
        let mut r = request();
        r.cv = Some(json!({ "pages": 2 }));
        assert_eq!(
            new_user_from_request(r).unwrap_err(),
            FieldError::Invalid("cv")
        );
    }

    #[test]
    fn credentials_compare_exactly() {
        assert!(credentials_match("secret", "secret"));
        assert!(!credentials_match("Secret", "secret"));
        assert!(!credentials_match("secret ", "secret"));
    }
}
