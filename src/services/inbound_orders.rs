use tracing::instrument;

use super::{parse_order_date, Repo};
use crate::dependency::{create_checked, find_existing, DependencyRef, WriteStage};
use crate::errors::ServiceError;
use crate::models::{CreateInboundOrderRequest, Employee, InboundOrder, ResourceKind, Warehouse};

#[derive(Clone)]
pub struct InboundOrderService {
    orders: Repo<InboundOrder>,
    employees: Repo<Employee>,
    warehouses: Repo<Warehouse>,
}

impl InboundOrderService {
    pub fn new(
        orders: Repo<InboundOrder>,
        employees: Repo<Employee>,
        warehouses: Repo<Warehouse>,
    ) -> Self {
        Self {
            orders,
            employees,
            warehouses,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<InboundOrder>, ServiceError> {
        self.orders.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<InboundOrder, ServiceError> {
        find_existing(self.orders.as_ref(), id).await
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        request: CreateInboundOrderRequest,
    ) -> Result<InboundOrder, ServiceError> {
        WriteStage::MergingOrBuilding.enter(ResourceKind::InboundOrder);
        let order = InboundOrder {
            id: 0,
            order_date: parse_order_date(&request.order_date)?,
            order_number: request.order_number,
            employee_id: request.employee_id,
            warehouse_id: request.warehouse_id,
        };

        let dependencies = vec![
            DependencyRef::new(order.employee_id, self.employees.as_ref()),
            DependencyRef::new(order.warehouse_id, self.warehouses.as_ref()),
        ];
        create_checked(self.orders.as_ref(), order, dependencies).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::InMemoryRepository;
    use assert_matches::assert_matches;
    use std::sync::Arc;

    #[tokio::test]
    async fn missing_warehouse_blocks_inbound_order() {
        let service = InboundOrderService::new(
            Arc::new(InMemoryRepository::<InboundOrder>::new()),
            Arc::new(InMemoryRepository::with_rows(vec![Employee {
                id: 2,
                card_number_id: "E-2".into(),
                first_name: "Rui".into(),
                last_name: "Costa".into(),
                warehouse_id: 3,
            }])),
            Arc::new(InMemoryRepository::<Warehouse>::new()),
        );
        let request = CreateInboundOrderRequest {
            order_number: "IN-7".into(),
            order_date: "2022-01-10 08:00:00".into(),
            employee_id: 2,
            warehouse_id: 3,
        };

        assert_matches!(
            service.create(request).await,
            Err(ServiceError::DependentResourceNotFound {
                kind: ResourceKind::Warehouse,
                id: 3
            })
        );
        assert_matches!(
            service.get(1).await,
            Err(ServiceError::ResourceNotFound {
                kind: ResourceKind::InboundOrder,
                id: 1
            })
        );
    }
}
