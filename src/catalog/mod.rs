//! Fixed reference lists the frontend uses to populate its pickers.

use axum::{routing::get, Json, Router};

use crate::state::AppState;

pub const CATEGORIES: [&str; 6] = [
    "Cleaning",
    "Gardening",
    "Tutoring",
    "Pet care",
    "Maintenance",
    "Other",
];

pub const TAGS: [&str; 2] = ["Exotic animal", "Difficult plantcare"];

pub const PRICES: [u32; 5] = [1000, 2000, 3000, 4000, 5000];

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(categories))
        .route("/tags", get(tags))
        .route("/prices", get(prices))
}

pub async fn categories() -> Json<[&'static str; 6]> {
    Json(CATEGORIES)
}

pub async fn tags() -> Json<[&'static str; 2]> {
    Json(TAGS)
}

pub async fn prices() -> Json<[u32; 5]> {
    Json(PRICES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_serialize_as_plain_arrays() {
        let Json(c) = categories().await;
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"["Cleaning","Gardening","Tutoring","Pet care","Maintenance","Other"]"#
        );
        let Json(p) = prices().await;
        assert_eq!(serde_json::to_string(&p).unwrap(), "[1000,2000,3000,4000,5000]");
    }
}
