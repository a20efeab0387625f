use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing, update_checked, DependencyRef};
use crate::errors::ServiceError;
use crate::models::{CreateSectionRequest, ProductType, Section, SectionPatch, Warehouse};

/// Sections reference a warehouse and then a product type, checked in that order.
#[derive(Clone)]
pub struct SectionService {
    sections: Repo<Section>,
    warehouses: Repo<Warehouse>,
    product_types: Repo<ProductType>,
}

impl SectionService {
    pub fn new(
        sections: Repo<Section>,
        warehouses: Repo<Warehouse>,
        product_types: Repo<ProductType>,
    ) -> Self {
        Self {
            sections,
            warehouses,
            product_types,
        }
    }

    fn dependencies(&self, warehouse_id: i64, product_type_id: i64) -> Vec<DependencyRef<'_>> {
        vec![
            DependencyRef::new(warehouse_id, self.warehouses.as_ref()),
            DependencyRef::new(product_type_id, self.product_types.as_ref()),
        ]
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Section>, ServiceError> {
        self.sections.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Section, ServiceError> {
        find_existing(self.sections.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateSectionRequest) -> Result<Section, ServiceError> {
        let dependencies = self.dependencies(request.warehouse_id, request.product_type_id);
        create_checked(self.sections.as_ref(), Section::from(request), dependencies).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: SectionPatch) -> Result<Section, ServiceError> {
        update_checked(self.sections.as_ref(), id, &patch, |section| {
            self.dependencies(section.warehouse_id, section.product_type_id)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        find_existing(self.sections.as_ref(), id).await?;
        self.sections.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::Patch;
    use crate::models::ResourceKind;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn request(section_number: i64, warehouse_id: i64, product_type_id: i64) -> CreateSectionRequest {
        CreateSectionRequest {
            section_number,
            current_temperature: 2.0,
            minimum_temperature: -4.0,
            current_capacity: 40,
            minimum_capacity: 10,
            maximum_capacity: 100,
            warehouse_id,
            product_type_id,
        }
    }

    fn service() -> SectionService {
        SectionService::new(
            Arc::new(InMemoryRepository::<Section>::new()),
            Arc::new(InMemoryRepository::with_rows(vec![Warehouse {
                id: 1,
                warehouse_code: "W-1".into(),
                address: "Rua 5".into(),
                telephone: "+5500123456789".into(),
                minimum_capacity: 10,
                minimum_temperature: -5.0,
                locality_id: 1,
            }])),
            Arc::new(InMemoryRepository::with_rows(vec![ProductType {
                id: 1,
                description: "frozen".into(),
            }])),
        )
    }

    #[tokio::test]
    async fn warehouse_is_reported_before_product_type() {
        let service = service();
        assert_matches!(
            service.create(request(1, 8, 9)).await,
            Err(ServiceError::DependentResourceNotFound {
                kind: ResourceKind::Warehouse,
                id: 8
            })
        );
        assert_matches!(
            service.create(request(1, 1, 9)).await,
            Err(ServiceError::DependentResourceNotFound {
                kind: ResourceKind::ProductType,
                id: 9
            })
        );
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_may_resend_its_own_section_number() {
        let service = service();
        let section = service.create(request(12, 1, 1)).await.unwrap();
        service.create(request(13, 1, 1)).await.unwrap();

        let patch = SectionPatch {
            section_number: Patch::Present(12),
            current_capacity: Patch::Present(55),
            ..Default::default()
        };
        let updated = service.update(section.id, patch).await.unwrap();
        assert_eq!(updated.current_capacity, 55);

        let patch = SectionPatch {
            section_number: Patch::Present(13),
            ..Default::default()
        };
        assert_matches!(
            service.update(section.id, patch).await,
            Err(ServiceError::ResourceAlreadyExists { ref value, .. }) if value == "13"
        );
    }
}
