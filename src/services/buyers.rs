use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing, update_checked};
use crate::errors::ServiceError;
use crate::models::{Buyer, BuyerPatch, CreateBuyerRequest};

/// Buyers have no foreign keys; writes only check `card_number_id`.
#[derive(Clone)]
pub struct BuyerService {
    buyers: Repo<Buyer>,
}

impl BuyerService {
    pub fn new(buyers: Repo<Buyer>) -> Self {
        Self { buyers }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Buyer>, ServiceError> {
        self.buyers.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Buyer, ServiceError> {
        find_existing(self.buyers.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateBuyerRequest) -> Result<Buyer, ServiceError> {
        create_checked(self.buyers.as_ref(), Buyer::from(request), Vec::new()).await
    }

    #[instrument(skip(self))]
    pub async fn update(&self, id: i64, patch: BuyerPatch) -> Result<Buyer, ServiceError> {
        update_checked(self.buyers.as_ref(), id, &patch, |_| Vec::new()).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        find_existing(self.buyers.as_ref(), id).await?;
        self.buyers.delete(id).await
    }
}
