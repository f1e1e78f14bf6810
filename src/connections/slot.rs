use std::{collections::HashMap, future::Future, sync::Mutex};

use sqlx::SqlitePool;

use crate::AppResult;

/// A durable string-valued cell addressed by key.
pub trait Slot {
    fn read(&self, key: &str) -> impl Future<Output = AppResult<Option<String>>> + Send;
    fn write(&self, key: &str, value: &str) -> impl Future<Output = AppResult<()>> + Send;
}

/// Process-local slot, handy for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemorySlot {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySlot {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let slot = Self::default();
        slot.put(key, value);
        slot
    }

    fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_owned(), value.to_owned());
    }

    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }
}

impl Slot for MemorySlot {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.get(key))
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        self.put(key, value);
        Ok(())
    }
}

/// Slot backed by a single `kv` table.
#[derive(Debug, Clone)]
pub struct SqliteSlot {
    db_pool: SqlitePool,
}

impl SqliteSlot {
    pub async fn open(db_pool: SqlitePool) -> AppResult<Self> {
        sqlx::query("CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY NOT NULL, value TEXT NOT NULL)")
            .execute(&db_pool)
            .await?;
        Ok(Self { db_pool })
    }
}

impl Slot for SqliteSlot {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = sqlx::query_as::<_, (String,)>("SELECT value FROM kv WHERE key=?")
            .bind(key)
            .fetch_optional(&self.db_pool)
            .await?
            .map(|(value,)| value);
        Ok(value)
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        sqlx::query("INSERT INTO kv (key,value) VALUES (?,?) ON CONFLICT(key) DO UPDATE SET value=excluded.value")
            .bind(key)
            .bind(value)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn sqlite_slot_overwrites_in_place() {
        let slot = SqliteSlot::open(memory_pool().await).await.unwrap();
        assert_eq!(slot.read("k").await.unwrap(), None);

        slot.write("k", "[1]").await.unwrap();
        slot.write("k", "[2]").await.unwrap();
        slot.write("other", "x").await.unwrap();

        assert_eq!(slot.read("k").await.unwrap().as_deref(), Some("[2]"));
        assert_eq!(slot.read("other").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn sqlite_slot_reopens_existing_table() {
        let pool = memory_pool().await;
        SqliteSlot::open(pool.clone()).await.unwrap().write("k", "v").await.unwrap();

        let reopened = SqliteSlot::open(pool).await.unwrap();
        assert_eq!(reopened.read("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn memory_slot_round_trips() {
        let slot = MemorySlot::with_entry("a", "1");
        slot.write("b", "2").await.unwrap();
        assert_eq!(slot.read("a").await.unwrap().as_deref(), Some("1"));
        assert_eq!(slot.read("b").await.unwrap().as_deref(), Some("2"));
        assert_eq!(slot.read("c").await.unwrap(), None);
    }
}
