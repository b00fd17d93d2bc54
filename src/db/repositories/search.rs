use crate::entities::{city_searches, prelude::*};
use crate::models::search::SearchRecord;
use anyhow::Result;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Set};

/// Repository for the per-city search counter
pub struct SearchRepository {
    conn: DatabaseConnection,
}

impl SearchRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Inserts the city with a count of 1, or bumps the existing count, in a
    /// single statement so concurrent searches never lose an increment.
    pub async fn record(&self, city: &str) -> Result<()> {
        let active_model = city_searches::ActiveModel {
            city: Set(city.to_string()),
            count: Set(1),
        };

        CitySearches::insert(active_model)
            .on_conflict(
                OnConflict::column(city_searches::Column::City)
                    .value(
                        city_searches::Column::Count,
                        Expr::col((CitySearches, city_searches::Column::Count)).add(1),
                    )
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;

        Ok(())
    }

    pub async fn stats(&self) -> Result<Vec<SearchRecord>> {
        let rows = CitySearches::find()
            .order_by_desc(city_searches::Column::Count)
            .order_by_asc(city_searches::Column::City)
            .all(&self.conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| SearchRecord {
                city: r.city,
                count: r.count,
            })
            .collect())
    }

    pub async fn count_for(&self, city: &str) -> Result<Option<i64>> {
        let row = CitySearches::find_by_id(city.to_string())
            .one(&self.conn)
            .await?;

        Ok(row.map(|r| r.count))
    }
}
