use tracing::instrument;

use super::Repo;
use crate::dependency::{create_checked, find_existing};
use crate::errors::ServiceError;
use crate::models::{CreateLocalityRequest, Locality, LocalitySellersReport, Seller};

/// Localities are lookup targets: create, read and the sellers report.
#[derive(Clone)]
pub struct LocalityService {
    localities: Repo<Locality>,
    sellers: Repo<Seller>,
}

impl LocalityService {
    pub fn new(localities: Repo<Locality>, sellers: Repo<Seller>) -> Self {
        Self {
            localities,
            sellers,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Locality>, ServiceError> {
        self.localities.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<Locality, ServiceError> {
        find_existing(self.localities.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: CreateLocalityRequest) -> Result<Locality, ServiceError> {
        create_checked(self.localities.as_ref(), Locality::from(request), Vec::new()).await
    }

    #[instrument(skip(self))]
    pub async fn sellers_report(&self, id: i64) -> Result<LocalitySellersReport, ServiceError> {
        let locality = find_existing(self.localities.as_ref(), id).await?;
        let sellers_count = self
            .sellers
            .get_all()
            .await?
            .iter()
            .filter(|seller| seller.locality_id == locality.id)
            .count();

        Ok(LocalitySellersReport {
            locality_id: locality.id,
            locality_name: locality.locality_name,
            sellers_count,
        })
    }
}
