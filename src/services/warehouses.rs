use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing, update_checked, DependencyRef};
use crate::errors::ServiceError;
use crate::models::{CreateWarehouseRequest, Locality, Warehouse, WarehousePatch};

#[derive(Clone)]
pub struct WarehouseService {
    warehouses: Repo<Warehouse>,
    localities: Repo<Locality>,
}

impl WarehouseService {
    pub fn new(warehouses: Repo<Warehouse>, localities: Repo<Locality>) -> Self {
        Self {
            warehouses,
            localities,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Warehouse>, ServiceError> {
        self.warehouses.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Warehouse, ServiceError> {
        find_existing(self.warehouses.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateWarehouseRequest) -> Result<Warehouse, ServiceError> {
        let dependencies = vec![DependencyRef::new(
            request.locality_id,
            self.localities.as_ref(),
        )];
        create_checked(self.warehouses.as_ref(), Warehouse::from(request), dependencies).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: WarehousePatch) -> Result<Warehouse, ServiceError> {
        update_checked(self.warehouses.as_ref(), id, &patch, |warehouse| {
            vec![DependencyRef::new(
                warehouse.locality_id,
                self.localities.as_ref(),
            )]
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        find_existing(self.warehouses.as_ref(), id).await?;
        self.warehouses.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Patch;
    use crate::repositories::mocks::{MockLocalityRepository, MockWarehouseRepository};
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;
    use mockall::predicate::eq;
    use std::sync::Arc;

    fn request(code: &str, locality_id: i64) -> CreateWarehouseRequest {
        CreateWarehouseRequest {
            warehouse_code: code.into(),
            address: "Rua 4".into(),
            telephone: "+5500123456789".into(),
            minimum_capacity: 10,
            minimum_temperature: -5.0,
            locality_id,
        }
    }

    #[tokio::test]
    async fn missing_locality_blocks_create_before_save() {
        let mut warehouses = MockWarehouseRepository::new();
        warehouses
            .expect_exists()
            .withf(|key| key == "W-1")
            .times(1)
            .returning(|_| Ok(false));
        warehouses.expect_save().times(0);

        let mut localities = MockLocalityRepository::new();
        localities
            .expect_get()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let service = WarehouseService::new(Arc::new(warehouses), Arc::new(localities));
        let result = service.create(request("W-1", 99)).await;

        assert_matches!(
            result,
            Err(ServiceError::DependentResourceNotFound {
                kind: crate::models::ResourceKind::Locality,
                id: 99
            })
        );
    }

    #[tokio::test]
    async fn update_keeps_own_code_and_rechecks_locality() {
        let localities = InMemoryRepository::with_rows(vec![Locality {
            id: 1,
            locality_name: "Campinas".into(),
            province_name: "SP".into(),
            country_name: "Brasil".into(),
        }]);
        let service = WarehouseService::new(
            Arc::new(InMemoryRepository::<Warehouse>::new()),
            Arc::new(localities),
        );
        let warehouse = service.create(request("W-1", 1)).await.unwrap();

        let patch = WarehousePatch {
            warehouse_code: Patch::Present("W-1".into()),
            minimum_capacity: Patch::Present(25),
            ..Default::default()
        };
        let updated = service.update(warehouse.id, patch).await.unwrap();
        assert_eq!(updated.minimum_capacity, 25);

        let patch = WarehousePatch {
            locality_id: Patch::Present(3),
            ..Default::default()
        };
        assert_matches!(
            service.update(warehouse.id, patch).await,
            Err(ServiceError::DependentResourceNotFound { id: 3, .. })
        );
        assert_eq!(service.get(warehouse.id).await.unwrap().locality_id, 1);
    }
}
