use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::extract::required;
use crate::fields::{self, FieldError};
use crate::offers::repo_types::{NewOffer, OfferFilter};

/// Request body for offer creation, coerced by `into_new_offer`.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOfferRequest {
    pub employer: Option<Value>,
    pub employee: Option<Value>,
    pub tags: Option<Value>,
    pub address: Option<Value>,
    pub title: Option<Value>,
    pub category: Option<Value>,
    pub additional_info: Option<Value>,
    pub price: Option<Value>,
    pub timetable: Option<Value>,
}

impl CreateOfferRequest {
    /// User references may arrive as `"e1"` or as `12`; `price` may be a numeric string.
    pub fn into_new_offer(self) -> Result<NewOffer, FieldError> {
        Ok(NewOffer {
            employer: fields::required_text("employer", self.employer)?,
            tags: fields::required_text("tags", self.tags)?,
            address: fields::required_text("address", self.address)?,
            title: fields::required_text("title", self.title)?,
            category: fields::required_text("category", self.category)?,
            employee: fields::text("employee", self.employee)?,
            additional_info: fields::text("additional_info", self.additional_info)?,
            price: fields::number("price", self.price)?,
            timetable: fields::text("timetable", self.timetable)?,
        })
    }
}

/// Query string of `GET /offers`.
#[derive(Debug, Default, Deserialize)]
pub struct OfferQuery {
    pub tags: Option<String>,
    pub category: Option<String>,
    pub price: Option<String>,
    pub title: Option<String>,
    pub employer: Option<String>,
    pub employee: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("price must be a number")]
pub struct InvalidPrice;

impl TryFrom<OfferQuery> for OfferFilter {
    type Error = InvalidPrice;

    fn try_from(q: OfferQuery) -> Result<Self, Self::Error> {
        let price_min = match required(q.price) {
            Some(p) => Some(fields::parse_number(&p).ok_or(InvalidPrice)?),
            None => None,
        };
        Ok(OfferFilter {
            tags: required(q.tags),
            category: required(q.category),
            price_min,
            title: required(q.title),
            employer: required(q.employer),
            employee: required(q.employee),
            address: required(q.address),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct UpdatedResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: &'static str,
}
