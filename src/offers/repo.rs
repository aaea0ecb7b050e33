use anyhow::Context;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::offers::repo_types::{
    contains_pattern, ColumnValue, NewOffer, Offer, OfferChanges, OfferFilter,
};

const SELECT_OFFER: &str = r#"
    SELECT id, employee, employer, tags, address, additional_info, price, timetable, title, category
    FROM OFFERS
"#;

impl Offer {
    /// Insert an offer and return the generated id.
    pub async fn create(db: &SqlitePool, new: &NewOffer) -> anyhow::Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO OFFERS (employee, employer, tags, address, additional_info,
                                price, timetable, title, category)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.employee)
        .bind(&new.employer)
        .bind(&new.tags)
        .bind(&new.address)
        .bind(&new.additional_info)
        .bind(new.price)
        .bind(&new.timetable)
        .bind(&new.title)
        .bind(&new.category)
        .execute(db)
        .await
        .context("insert offer")?;
        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Offer>> {
        let offer = sqlx::query_as::<_, Offer>(&format!("{SELECT_OFFER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(db)
            .await
            .context("select offer by id")?;
        Ok(offer)
    }

    pub async fn exists(db: &SqlitePool, id: i64) -> anyhow::Result<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT id FROM OFFERS WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
            .context("check offer exists")?;
        Ok(found.is_some())
    }

    /// Apply validated changes. Only allow-listed identifiers reach the SQL text;
    /// every value is a bound parameter.
    pub async fn update(db: &SqlitePool, id: i64, changes: &OfferChanges) -> anyhow::Result<u64> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new("UPDATE OFFERS SET ");
        let mut set = qb.separated(", ");
        for (column, value) in changes.assignments() {
            set.push(column.as_sql());
            set.push_unseparated(" = ");
            match value {
                ColumnValue::Text(v) => set.push_bind_unseparated(v.clone()),
                ColumnValue::Number(v) => set.push_bind_unseparated(*v),
            };
        }
        qb.push(" WHERE id = ").push_bind(id);

        let result = qb
            .build()
            .execute(db)
            .await
            .context("update offer")?;
        Ok(result.rows_affected())
    }

    /// Delete by id. Returns how many rows went away (0 or 1).
    pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM OFFERS WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("delete offer")?;
        Ok(result.rows_affected())
    }

    /// Offers matching every supplied filter, ordered by id.
    pub async fn list(db: &SqlitePool, filter: &OfferFilter) -> anyhow::Result<Vec<Offer>> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(SELECT_OFFER);
        qb.push(" WHERE 1 = 1");

        let like_filters = [
            ("tags", &filter.tags),
            ("category", &filter.category),
            ("title", &filter.title),
            ("address", &filter.address),
        ];
        for (column, value) in like_filters {
            if let Some(v) = value {
                qb.push(format!(" AND {column} LIKE "))
                    .push_bind(contains_pattern(v))
                    .push(" ESCAPE '\\'");
            }
        }
        if let Some(min) = filter.price_min {
            qb.push(" AND price >= ").push_bind(min);
        }
        let exact_filters = [("employer", &filter.employer), ("employee", &filter.employee)];
        for (column, value) in exact_filters {
            if let Some(v) = value {
                qb.push(format!(" AND {column} = ")).push_bind(v.clone());
            }
        }
        qb.push(" ORDER BY id");

        let offers = qb
            .build_query_as::<Offer>()
            .fetch_all(db)
            .await
            .context("list offers")?;
        Ok(offers)
    }
}
