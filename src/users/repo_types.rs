use serde::Serialize;
use sqlx::FromRow;

/// Public view of a `USERS` row. The stored credential is never selected into it.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub is_employer: bool,
    pub is_employee: bool,
    pub photo_path: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub cv: Option<String>,
}

/// What authentication needs from a row.
#[derive(Debug, FromRow)]
pub struct StoredCredential {
    pub id: i64,
    pub hashed_password: String,
}

/// Insert payload, already validated.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub is_employer: bool,
    pub is_employee: bool,
    pub photo_path: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub cv: Option<String>,
}
