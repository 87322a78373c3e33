//! Portfolio repository: explicit storage interface for editor records.
//!
//! The site generator never touches this module; handlers load a record here
//! and pass the in-memory value to the generator.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::portfolio::models::PortfolioRecord;

/// Storage backend for portfolio records.
///
/// Carried in `AppState` as `Arc<dyn PortfolioStore>`.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<PortfolioRecord>, AppError>;

    /// Inserts or replaces by id. Returns the stored record with its
    /// identity and timestamps filled in.
    async fn put(&self, record: PortfolioRecord) -> Result<PortfolioRecord, AppError>;

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PortfolioRecord>, AppError>;

    /// Returns `false` when no record had this id.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}

#[derive(Default)]
struct Inner {
    records: HashMap<String, PortfolioRecord>,
    // Insertion order of ids, so listings are stable.
    order: Vec<String>,
}

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryPortfolioStore {
    inner: RwLock<Inner>,
}

impl InMemoryPortfolioStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PortfolioStore for InMemoryPortfolioStore {
    async fn get(&self, id: &str) -> Result<Option<PortfolioRecord>, AppError> {
        Ok(self.inner.read().await.records.get(id).cloned())
    }

    async fn put(&self, mut record: PortfolioRecord) -> Result<PortfolioRecord, AppError> {
        let now = Utc::now();
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let mut inner = self.inner.write().await;
        let created_at = inner
            .records
            .get(&id)
            .and_then(|existing| existing.created_at)
            .or(record.created_at)
            .unwrap_or(now);

        record.id = Some(id.clone());
        record.created_at = Some(created_at);
        record.updated_at = Some(now);

        if inner.records.insert(id.clone(), record.clone()).is_none() {
            inner.order.push(id.clone());
            info!("Stored new portfolio {id}");
        } else {
            info!("Updated portfolio {id}");
        }

        Ok(record)
    }

    async fn list_for_user(&self, user_id: &str) -> Result<Vec<PortfolioRecord>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id))
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.write().await;
        if inner.records.remove(id).is_none() {
            return Ok(false);
        }
        inner.order.retain(|existing| existing != id);
        info!("Deleted portfolio {id}");
        Ok(true)
    }
}
