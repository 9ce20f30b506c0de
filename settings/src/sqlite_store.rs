use std::str::FromStr;

use async_trait::async_trait;
use model::{AnalysisStep, Settings, Subject};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use sqlx::{Row, SqlitePool};

use crate::store::{SettingsStore, StoreError};

/// SQLite-backed reference implementation of `SettingsStore`, matching the
/// schema `user_states(chat_id PK, min_diff REAL, max_sum REAL, step TEXT)`.
pub struct SqliteSettingsStore {
    pool: SqlitePool,
}

impl SqliteSettingsStore {
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn new(path: &str) -> anyhow::Result<Self> {
        let pool = SqlitePool::connect(path).await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS user_states (
                chat_id INTEGER PRIMARY KEY,
                min_diff REAL NOT NULL,
                max_sum REAL NOT NULL,
                step TEXT NOT NULL
            );
        "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl SettingsStore for SqliteSettingsStore {
    async fn get(&self, subject: Subject) -> Result<Option<Settings>, StoreError> {
        let row = sqlx::query("SELECT min_diff, max_sum, step FROM user_states WHERE chat_id = ?")
            .bind(subject)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };

        let min_diff: f64 = row.get("min_diff");
        let max_sum: f64 = row.get("max_sum");
        let step: String = row.get("step");

        let settings = Settings {
            min_diff: Decimal::try_from(min_diff)
                .map_err(|e| StoreError::Unavailable(e.to_string()))?,
            max_sum: Decimal::try_from(max_sum)
                .map_err(|e| StoreError::Unavailable(e.to_string()))?,
            step: AnalysisStep::from_str(&step).map_err(StoreError::Unavailable)?,
        };

        Ok(Some(settings))
    }

    async fn set(&self, subject: Subject, settings: Settings) -> Result<(), StoreError> {
        let min_diff = settings
            .min_diff
            .to_f64()
            .ok_or_else(|| StoreError::Unavailable("min_diff out of f64 range".into()))?;
        let max_sum = settings
            .max_sum
            .to_f64()
            .ok_or_else(|| StoreError::Unavailable("max_sum out of f64 range".into()))?;

        sqlx::query(
            r#"
            INSERT INTO user_states (chat_id, min_diff, max_sum, step)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(chat_id) DO UPDATE SET
                min_diff = excluded.min_diff,
                max_sum = excluded.max_sum,
                step = excluded.step;
        "#,
        )
        .bind(subject)
        .bind(min_diff)
        .bind(max_sum)
        .bind(settings.step.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, subject: Subject) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM user_states WHERE chat_id = ?")
            .bind(subject)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    async fn store() -> SqliteSettingsStore {
        SqliteSettingsStore::new("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn missing_subject_returns_none_not_error() {
        let store = store().await;
        assert!(store.get(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let store = store().await;
        let settings = Settings {
            min_diff: dec!(1.5),
            max_sum: dec!(1000),
            step: AnalysisStep::ReadyToRun,
        };
        store.set(1, settings.clone()).await.unwrap();
        let fetched = store.get(1).await.unwrap().unwrap();
        assert_eq!(fetched, settings);
    }

    #[tokio::test]
    async fn set_twice_upserts() {
        let store = store().await;
        store
            .set(
                1,
                Settings {
                    min_diff: dec!(1),
                    max_sum: dec!(10),
                    step: AnalysisStep::WaitingInput,
                },
            )
            .await
            .unwrap();
        store
            .set(
                1,
                Settings {
                    min_diff: dec!(2),
                    max_sum: dec!(20),
                    step: AnalysisStep::ReadyToRun,
                },
            )
            .await
            .unwrap();

        let fetched = store.get(1).await.unwrap().unwrap();
        assert_eq!(fetched.min_diff, dec!(2));
        assert_eq!(fetched.step, AnalysisStep::ReadyToRun);
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = store().await;
        store
            .set(
                1,
                Settings {
                    min_diff: dec!(1),
                    max_sum: dec!(10),
                    step: AnalysisStep::ReadyToRun,
                },
            )
            .await
            .unwrap();
        store.delete(1).await.unwrap();
        assert!(store.get(1).await.unwrap().is_none());
    }
}
