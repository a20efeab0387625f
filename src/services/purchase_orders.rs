use tracing::instrument;

use super::{parse_order_date, Repo};
use crate::dependency::{create_checked, find_existing, DependencyRef, WriteStage};
use crate::errors::ServiceError;
use crate::models::{Buyer, CreatePurchaseOrderRequest, Product, PurchaseOrder, ResourceKind};

#[derive(Clone)]
pub struct PurchaseOrderService {
    orders: Repo<PurchaseOrder>,
    buyers: Repo<Buyer>,
    products: Repo<Product>,
}

impl PurchaseOrderService {
    pub fn new(orders: Repo<PurchaseOrder>, buyers: Repo<Buyer>, products: Repo<Product>) -> Self {
        Self {
            orders,
            buyers,
            products,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<PurchaseOrder>, ServiceError> {
        self.orders.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<PurchaseOrder, ServiceError> {
        find_existing(self.orders.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        request: CreatePurchaseOrderRequest,
    ) -> Result<PurchaseOrder, ServiceError> {
        WriteStage::MergingOrBuilding.enter(ResourceKind::PurchaseOrder);
        let order = PurchaseOrder {
            id: 0,
            order_date: parse_order_date(&request.order_date)?,
            order_number: request.order_number,
            tracking_code: request.tracking_code,
            buyer_id: request.buyer_id,
            product_id: request.product_id,
        };

        let dependencies = vec![
            DependencyRef::new(order.buyer_id, self.buyers.as_ref()),
            DependencyRef::new(order.product_id, self.products.as_ref()),
        ];
        create_checked(self.orders.as_ref(), order, dependencies).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn request(order_date: &str, buyer_id: i64) -> CreatePurchaseOrderRequest {
        CreatePurchaseOrderRequest {
            order_number: "PO-1".into(),
            order_date: order_date.into(),
            tracking_code: "TRK".into(),
            buyer_id,
            product_id: 1,
        }
    }

    fn service() -> PurchaseOrderService {
        PurchaseOrderService::new(
            Arc::new(InMemoryRepository::<PurchaseOrder>::new()),
            Arc::new(InMemoryRepository::with_rows(vec![Buyer {
                id: 1,
                card_number_id: "123".into(),
                first_name: "Ana".into(),
                last_name: "Lima".into(),
            }])),
            Arc::new(InMemoryRepository::<Product>::new()),
        )
    }

    #[tokio::test]
    async fn unparseable_date_is_a_format_error() {
        assert_matches!(
            service().create(request("2021-13-45 99:00:00", 1)).await,
            Err(ServiceError::InvalidFormat {
                field: "order_date",
                ..
            })
        );
    }

    #[tokio::test]
    async fn buyer_is_checked_before_product() {
        let service = service();
        assert_matches!(
            service.create(request("2021-04-04 12:30:00", 2)).await,
            Err(ServiceError::DependentResourceNotFound {
                kind: ResourceKind::Buyer,
                id: 2
            })
        );
        assert_matches!(
            service.create(request("2021-04-04 12:30:00", 1)).await,
            Err(ServiceError::DependentResourceNotFound {
                kind: ResourceKind::Product,
                id: 1
            })
        );
    }

    #[test]
    fn parsed_date_keeps_seconds() {
        let parsed = parse_order_date("2021-04-04 12:30:15").unwrap();
        assert_eq!(
            parsed,
            NaiveDate::from_ymd_opt(2021, 4, 4)
                .unwrap()
                .and_hms_opt(12, 30, 15)
                .unwrap()
        );
    }
}
