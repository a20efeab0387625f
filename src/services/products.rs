use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing, update_checked, DependencyRef};
use crate::errors::ServiceError;
use crate::models::{CreateProductRequest, Product, ProductPatch, ProductType, Seller};

#[derive(Clone)]
pub struct ProductService {
    products: Repo<Product>,
    product_types: Repo<ProductType>,
    sellers: Repo<Seller>,
}

impl ProductService {
    pub fn new(
        products: Repo<Product>,
        product_types: Repo<ProductType>,
        sellers: Repo<Seller>,
    ) -> Self {
        Self {
            products,
            product_types,
            sellers,
        }
    }

    fn dependencies(&self, product_type_id: i64, seller_id: i64) -> Vec<DependencyRef<'_>> {
        vec![
            DependencyRef::new(product_type_id, self.product_types.as_ref()),
            DependencyRef::new(seller_id, self.sellers.as_ref()),
        ]
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        self.products.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Product, ServiceError> {
        find_existing(self.products.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateProductRequest) -> Result<Product, ServiceError> {
        let dependencies = self.dependencies(request.product_type_id, request.seller_id);
        create_checked(self.products.as_ref(), Product::from(request), dependencies).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, ServiceError> {
        update_checked(self.products.as_ref(), id, &patch, |product| {
            self.dependencies(product.product_type_id, product.seller_id)
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        find_existing(self.products.as_ref(), id).await?;
        self.products.delete(id).await
    }
}
