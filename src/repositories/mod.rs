use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::models::Entity;

pub mod in_memory;

pub use in_memory::InMemoryRepository;

/// Persistence collaborator for one entity type.
///
/// Each call is expected to be atomic on its own; callers get no guarantee
/// across calls.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    async fn get(&self, id: i64) -> Result<Option<E>, ServiceError>;

    async fn get_all(&self) -> Result<Vec<E>, ServiceError>;

    /// Whether any row already holds `unique_key` in its unique field.
    async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError>;

    /// Stores a new row and returns it with its assigned id.
    async fn save(&self, entity: E) -> Result<E, ServiceError>;

    async fn update(&self, entity: E) -> Result<E, ServiceError>;

    /// Removes the row; a missing id is `ResourceNotFound`.
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

#[cfg(test)]
pub(crate) mod mocks {
    use super::*;
    use crate::models::{Buyer, Locality, ProductType, Section, Warehouse};
    use mockall::mock;

    mock! {
        pub BuyerRepository {}
        #[async_trait]
        impl Repository<Buyer> for BuyerRepository {
            async fn get(&self, id: i64) -> Result<Option<Buyer>, ServiceError>;
            async fn get_all(&self) -> Result<Vec<Buyer>, ServiceError>;
            async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError>;
            async fn save(&self, entity: Buyer) -> Result<Buyer, ServiceError>;
            async fn update(&self, entity: Buyer) -> Result<Buyer, ServiceError>;
            async fn delete(&self, id: i64) -> Result<(), ServiceError>;
        }
    }

    mock! {
        pub LocalityRepository {}
        #[async_trait]
        impl Repository<Locality> for LocalityRepository {
            async fn get(&self, id: i64) -> Result<Option<Locality>, ServiceError>;
            async fn get_all(&self) -> Result<Vec<Locality>, ServiceError>;
            async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError>;
            async fn save(&self, entity: Locality) -> Result<Locality, ServiceError>;
            async fn update(&self, entity: Locality) -> Result<Locality, ServiceError>;
            async fn delete(&self, id: i64) -> Result<(), ServiceError>;
        }
    }

    mock! {
        pub ProductTypeRepository {}
        #[async_trait]
        impl Repository<ProductType> for ProductTypeRepository {
            async fn get(&self, id: i64) -> Result<Option<ProductType>, ServiceError>;
            async fn get_all(&self) -> Result<Vec<ProductType>, ServiceError>;
            async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError>;
            async fn save(&self, entity: ProductType) -> Result<ProductType, ServiceError>;
            async fn update(&self, entity: ProductType) -> Result<ProductType, ServiceError>;
            async fn delete(&self, id: i64) -> Result<(), ServiceError>;
        }
    }

    mock! {
        pub SectionRepository {}
        #[async_trait]
        impl Repository<Section> for SectionRepository {
            async fn get(&self, id: i64) -> Result<Option<Section>, ServiceError>;
            async fn get_all(&self) -> Result<Vec<Section>, ServiceError>;
            async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError>;
            async fn save(&self, entity: Section) -> Result<Section, ServiceError>;
            async fn update(&self, entity: Section) -> Result<Section, ServiceError>;
            async fn delete(&self, id: i64) -> Result<(), ServiceError>;
        }
    }

    mock! {
        pub WarehouseRepository {}
        #[async_trait]
        impl Repository<Warehouse> for WarehouseRepository {
            async fn get(&self, id: i64) -> Result<Option<Warehouse>, ServiceError>;
            async fn get_all(&self) -> Result<Vec<Warehouse>, ServiceError>;
            async fn exists(&self, unique_key: &str) -> Result<bool, ServiceError>;
            async fn save(&self, entity: Warehouse) -> Result<Warehouse, ServiceError>;
            async fn update(&self, entity: Warehouse) -> Result<Warehouse, ServiceError>;
            async fn delete(&self, id: i64) -> Result<(), ServiceError>;
        }
    }
}
