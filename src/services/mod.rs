//! One service per resource. Every write goes through
//! [`crate::dependency`] so the check order is the same everywhere.

use chrono::NaiveDateTime;
use std::sync::Arc;

use crate::errors::ServiceError;
use crate::models::{
    Buyer, Employee, InboundOrder, Locality, Product, ProductType, PurchaseOrder, Section, Seller,
    Warehouse,
};
use crate::repositories::{InMemoryRepository, Repository};
use crate::validation::messages::DATETIME_PATTERN;
use crate::validation::rules::parse_datetime;

pub mod buyers;
pub mod employees;
pub mod inbound_orders;
pub mod localities;
pub mod product_types;
pub mod products;
pub mod purchase_orders;
pub mod sections;
pub mod sellers;
pub mod warehouses;

pub use buyers::BuyerService;
pub use employees::EmployeeService;
pub use inbound_orders::InboundOrderService;
pub use localities::LocalityService;
pub use product_types::ProductTypeService;
pub use products::ProductService;
pub use purchase_orders::PurchaseOrderService;
pub use sections::SectionService;
pub use sellers::SellerService;
pub use warehouses::WarehouseService;

pub type Repo<E> = Arc<dyn Repository<E>>;

/// One repository per entity, shared by every service that reads it.
#[derive(Clone)]
pub struct Repositories {
    pub buyers: Repo<Buyer>,
    pub employees: Repo<Employee>,
    pub inbound_orders: Repo<InboundOrder>,
    pub localities: Repo<Locality>,
    pub product_types: Repo<ProductType>,
    pub products: Repo<Product>,
    pub purchase_orders: Repo<PurchaseOrder>,
    pub sections: Repo<Section>,
    pub sellers: Repo<Seller>,
    pub warehouses: Repo<Warehouse>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            buyers: Arc::new(InMemoryRepository::<Buyer>::new()),
            employees: Arc::new(InMemoryRepository::<Employee>::new()),
            inbound_orders: Arc::new(InMemoryRepository::<InboundOrder>::new()),
            localities: Arc::new(InMemoryRepository::<Locality>::new()),
            product_types: Arc::new(InMemoryRepository::<ProductType>::new()),
            products: Arc::new(InMemoryRepository::<Product>::new()),
            purchase_orders: Arc::new(InMemoryRepository::<PurchaseOrder>::new()),
            sections: Arc::new(InMemoryRepository::<Section>::new()),
            sellers: Arc::new(InMemoryRepository::<Seller>::new()),
            warehouses: Arc::new(InMemoryRepository::<Warehouse>::new()),
        }
    }
}

/// Wires every service against one set of repositories.
#[derive(Clone)]
pub struct AppServices {
    pub buyers: BuyerService,
    pub employees: EmployeeService,
    pub inbound_orders: InboundOrderService,
    pub localities: LocalityService,
    pub product_types: ProductTypeService,
    pub products: ProductService,
    pub purchase_orders: PurchaseOrderService,
    pub sections: SectionService,
    pub sellers: SellerService,
    pub warehouses: WarehouseService,
}

impl AppServices {
    pub fn new(repos: &Repositories) -> Self {
        Self {
            buyers: BuyerService::new(repos.buyers.clone()),
            employees: EmployeeService::new(repos.employees.clone(), repos.warehouses.clone()),
            inbound_orders: InboundOrderService::new(
                repos.inbound_orders.clone(),
                repos.employees.clone(),
                repos.warehouses.clone(),
            ),
            localities: LocalityService::new(repos.localities.clone(), repos.sellers.clone()),
            product_types: ProductTypeService::new(repos.product_types.clone()),
            products: ProductService::new(
                repos.products.clone(),
                repos.product_types.clone(),
                repos.sellers.clone(),
            ),
            purchase_orders: PurchaseOrderService::new(
                repos.purchase_orders.clone(),
                repos.buyers.clone(),
                repos.products.clone(),
            ),
            sections: SectionService::new(
                repos.sections.clone(),
                repos.warehouses.clone(),
                repos.product_types.clone(),
            ),
            sellers: SellerService::new(repos.sellers.clone(), repos.localities.clone()),
            warehouses: WarehouseService::new(repos.warehouses.clone(), repos.localities.clone()),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(&Repositories::in_memory())
    }
}

/// Order dates arrive as text; a value the parser rejects is a format
/// problem, never a lookup miss.
pub(crate) fn parse_order_date(raw: &str) -> Result<NaiveDateTime, ServiceError> {
    parse_datetime(raw).ok_or(ServiceError::InvalidFormat {
        field: "order_date",
        expected: DATETIME_PATTERN,
    })
}
