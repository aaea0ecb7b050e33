use anyhow::Context;
use sqlx::SqlitePool;

use crate::users::repo_types::{NewUser, StoredCredential, User};

impl User {
    /// Insert a user and return the generated id.
    pub async fn create(db: &SqlitePool, new: &NewUser) -> anyhow::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO USERS (name, email, hashed_password, is_employer, is_employee,
                               photo_path, address, phone_number, cv)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.password)
        .bind(new.is_employer)
        .bind(new.is_employee)
        .bind(&new.photo_path)
        .bind(&new.address)
        .bind(&new.phone_number)
        .bind(&new.cv)
        .execute(db)
        .await
        .context("insert user")?;
        Ok(result.last_insert_rowid())
    }

    /// Find a user by id, without the credential.
    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, is_employer, is_employee, photo_path, address, phone_number, cv
            FROM USERS
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("select user by id")?;
        Ok(user)
    }

    /// Stored credential for an email. The oldest account wins when an email repeats.
    pub async fn find_credential(
        db: &SqlitePool,
        email: &str,
    ) -> anyhow::Result<Option<StoredCredential>> {
        let row = sqlx::query_as::<_, StoredCredential>(
            r#"
            SELECT id, hashed_password
            FROM USERS
            WHERE email = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("select credential by email")?;
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            name: "Luis".into(),
            email: email.into(),
            password: password.into(),
            is_employer: false,
            is_employee: true,
            photo_path: Some("/img/luis.png".into()),
            address: None,
            phone_number: Some("600000000".into()),
            cv: None,
        }
    }

    #[tokio::test]
    async fn create_then_find_by_id() {
        let db = db::in_memory().await.expect("db");
        let id = User::create(&db, &new_user("luis@example.com", "pw"))
            .await
            .expect("insert");

        let user = User::find_by_id(&db, id).await.expect("query").expect("row");
        assert_eq!(user.id, id);
        assert_eq!(user.email, "luis@example.com");
        assert!(user.is_employee);
        assert!(!user.is_employer);
        assert_eq!(user.photo_path.as_deref(), Some("/img/luis.png"));
        assert_eq!(user.address, None);

        assert!(User::find_by_id(&db, id + 1).await.expect("query").is_none());
    }

    #[tokio::test]
    async fn credential_lookup_prefers_oldest_row() {
        let db = db::in_memory().await.expect("db");
        let first = User::create(&db, &new_user("dup@example.com", "one"))
            .await
            .expect("insert");
        User::create(&db, &new_user("dup@example.com", "two"))
            .await
            .expect("insert");

        let cred = User::find_credential(&db, "dup@example.com")
            .await
            .expect("query")
            .expect("row");
        assert_eq!(cred.id, first);
        assert_eq!(cred.hashed_password, "one");

        assert!(User::find_credential(&db, "nobody@example.com")
            .await
            .expect("query")
            .is_none());
    }
}
