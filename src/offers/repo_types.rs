use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;
use thiserror::Error;

use crate::fields;

/// Full `OFFERS` row.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub employee: Option<String>,
    pub employer: String,
    pub tags: String,
    pub address: String,
    pub additional_info: Option<String>,
    pub price: Option<f64>,
    pub timetable: Option<String>,
    pub title: String,
    pub category: String,
}

/// Insert payload, already validated.
#[derive(Debug)]
pub struct NewOffer {
    pub employee: Option<String>,
    pub employer: String,
    pub tags: String,
    pub address: String,
    pub additional_info: Option<String>,
    pub price: Option<f64>,
    pub timetable: Option<String>,
    pub title: String,
    pub category: String,
}

/// Columns a client may change through a partial update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferColumn {
    Employee,
    Employer,
    Tags,
    Address,
    AdditionalInfo,
    Price,
    Timetable,
    Title,
    Category,
}

impl OfferColumn {
    pub fn from_key(key: &str) -> Option<Self> {
        let column = match key {
            "employee" => Self::Employee,
            "employer" => Self::Employer,
            "tags" => Self::Tags,
            "address" => Self::Address,
            "additional_info" => Self::AdditionalInfo,
            "price" => Self::Price,
            "timetable" => Self::Timetable,
            "title" => Self::Title,
            "category" => Self::Category,
            _ => return None,
        };
        Some(column)
    }

    /// SQL identifier. These are the only strings ever spliced into an UPDATE.
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Employer => "employer",
            Self::Tags => "tags",
            Self::Address => "address",
            Self::AdditionalInfo => "additional_info",
            Self::Price => "price",
            Self::Timetable => "timetable",
            Self::Title => "title",
            Self::Category => "category",
        }
    }

    fn is_nullable(self) -> bool {
        matches!(
            self,
            Self::Employee | Self::AdditionalInfo | Self::Price | Self::Timetable
        )
    }

    /// Same coercion as offer creation. Required text columns also reject null and blank.
    fn value_from_json(self, value: Value) -> Option<ColumnValue> {
        let key = self.as_sql();
        match self {
            Self::Price => fields::number(key, Some(value)).ok().map(ColumnValue::Number),
            c if c.is_nullable() => fields::text(key, Some(value)).ok().map(ColumnValue::Text),
            _ => fields::required_text(key, Some(value))
                .ok()
                .map(|s| ColumnValue::Text(Some(s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Text(Option<String>),
    Number(Option<f64>),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeError {
    #[error("No fields to update")]
    Empty,
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Invalid value for field: {0}")]
    InvalidValue(String),
}

/// Validated set of column assignments for an offer update. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferChanges(Vec<(OfferColumn, ColumnValue)>);

impl OfferChanges {
    pub fn assignments(&self) -> &[(OfferColumn, ColumnValue)] {
        &self.0
    }
}

impl TryFrom<Map<String, Value>> for OfferChanges {
    type Error = ChangeError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if fields.is_empty() {
            return Err(ChangeError::Empty);
        }
        let mut assignments = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            let column =
                OfferColumn::from_key(&key).ok_or_else(|| ChangeError::UnknownField(key.clone()))?;
            let value = column
                .value_from_json(value)
                .ok_or(ChangeError::InvalidValue(key))?;
            assignments.push((column, value));
        }
        Ok(Self(assignments))
    }
}

/// Listing filters after blank values have been dropped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct OfferFilter {
    pub tags: Option<String>,
    pub category: Option<String>,
    pub price_min: Option<f64>,
    pub title: Option<String>,
    pub employer: Option<String>,
    pub employee: Option<String>,
    pub address: Option<String>,
}

/// `%value%` with LIKE wildcards in `value` escaped by `\`.
pub fn contains_pattern(value: &str) -> String {
    let mut pattern = String::with_capacity(value.len() + 2);
    pattern.push('%');
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
