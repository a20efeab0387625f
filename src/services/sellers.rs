use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing, update_checked, DependencyRef};
use crate::errors::ServiceError;
use crate::models::{CreateSellerRequest, Locality, Seller, SellerPatch};

#[derive(Clone)]
pub struct SellerService {
    sellers: Repo<Seller>,
    localities: Repo<Locality>,
}

impl SellerService {
    pub fn new(sellers: Repo<Seller>, localities: Repo<Locality>) -> Self {
        Self {
            sellers,
            localities,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Seller>, ServiceError> {
        self.sellers.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Seller, ServiceError> {
        find_existing(self.sellers.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateSellerRequest) -> Result<Seller, ServiceError> {
        let dependencies = vec![DependencyRef::new(
            request.locality_id,
            self.localities.as_ref(),
        )];
        create_checked(self.sellers.as_ref(), Seller::from(request), dependencies).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: SellerPatch) -> Result<Seller, ServiceError> {
        update_checked(self.sellers.as_ref(), id, &patch, |seller| {
            vec![DependencyRef::new(seller.locality_id, self.localities.as_ref())]
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        find_existing(self.sellers.as_ref(), id).await?;
        self.sellers.delete(id).await
    }
}
