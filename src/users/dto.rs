use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for account creation. Fields stay raw JSON until
/// `services::new_user_from_request` coerces them.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub password: Option<Value>,
    pub role: Option<Value>,
    pub photo_path: Option<Value>,
    pub address: Option<Value>,
    pub phone_number: Option<Value>,
    pub cv: Option<Value>,
}

/// Request body for authentication.
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    pub email: Option<Value>,
    pub password: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

/// `{"authenticated": true, "id": n}` on success, `{"authenticated": -1}` otherwise.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AuthenticateResponse {
    Accepted { authenticated: bool, id: i64 },
    Rejected { authenticated: i8 },
}

impl AuthenticateResponse {
    pub fn accepted(id: i64) -> Self {
        Self::Accepted {
            authenticated: true,
            id,
        }
    }

    pub fn rejected() -> Self {
        Self::Rejected { authenticated: -1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn authenticate_response_shapes() {
        assert_eq!(
            serde_json::to_value(AuthenticateResponse::accepted(7)).unwrap(),
            json!({ "authenticated": true, "id": 7 })
        );
        assert_eq!(
            serde_json::to_value(AuthenticateResponse::rejected()).unwrap(),
            json!({ "authenticated": -1 })
        );
    }
}
