use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use super::Repository;
use crate::errors::ServiceError;
use crate::models::Entity;

/// Concurrent in-process table keyed by primary key.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    rows: DashMap<i64, E>,
    next_id: AtomicI64,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seeds rows that already carry their ids.
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        let repository = Self::new();
        let mut max_id = 0;
        for row in rows {
            max_id = max_id.max(row.id());
            repository.rows.insert(row.id(), row);
        }
        repository.next_id.store(max_id + 1, Ordering::SeqCst);
        repository
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn get(&self, id: i64) -> Result<Option<E>, ServiceError> {
        Ok(self.rows.get(&id).map(|row| row.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        let mut rows: Vec<E> = self.rows.iter().map(|row| row.value().clone()).collect();
        rows.sort_by_key(|row| row.id());
        Ok(rows)
    }

    async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError> {
        Ok(self
            .rows
            .iter()
            .any(|row| row.value().unique_key() == unique_key))
    }

    async fn save(&self, mut entity: E) -> Result<E, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        entity.set_id(id);
        self.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, ServiceError> {
        match self.rows.get_mut(&entity.id()) {
            Some(mut row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(ServiceError::ResourceNotFound {
                kind: E::KIND,
                id: entity.id(),
            }),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.rows
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::ResourceNotFound { kind: E::KIND, id })
    }
}
