use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing};
use crate::errors::ServiceError;
use crate::models::{CreateProductTypeRequest, ProductType};

#[derive(Clone)]
pub struct ProductTypeService {
    product_types: Repo<ProductType>,
}

impl ProductTypeService {
    pub fn new(product_types: Repo<ProductType>) -> Self {
        Self { product_types }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ProductType>, ServiceError> {
        self.product_types.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<ProductType, ServiceError> {
        find_existing(self.product_types.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        request: CreateProductTypeRequest,
    ) -> Result<ProductType, ServiceError> {
        create_checked(
            self.product_types.as_ref(),
            ProductType::from(request),
            Vec::new(),
        )
        .await
    }
}
