pub mod buyer;
pub mod employee;
pub mod inbound_order;
pub mod locality;
pub mod product;
pub mod product_type;
pub mod purchase_order;
pub mod section;
pub mod seller;
pub mod warehouse;

pub use buyer::{Buyer, BuyerPatch, CreateBuyerRequest};
pub use employee::{CreateEmployeeRequest, Employee, EmployeePatch};
pub use inbound_order::{CreateInboundOrderRequest, InboundOrder};
pub use locality::{CreateLocalityRequest, Locality, LocalitySellersReport};
pub use product::{CreateProductRequest, Product, ProductPatch};
pub use product_type::{CreateProductTypeRequest, ProductType};
pub use purchase_order::{CreatePurchaseOrderRequest, PurchaseOrder};
pub use section::{CreateSectionRequest, Section, SectionPatch};
pub use seller::{CreateSellerRequest, Seller, SellerPatch};
pub use warehouse::{CreateWarehouseRequest, Warehouse, WarehousePatch};

use serde::Serialize;
use strum::Display;

/// Kind of row, used to name resources in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    #[strum(serialize = "buyer")]
    Buyer,
    #[strum(serialize = "employee")]
    Employee,
    #[strum(serialize = "inbound order")]
    InboundOrder,
    #[strum(serialize = "locality")]
    Locality,
    #[strum(serialize = "product")]
    Product,
    #[strum(serialize = "product type")]
    ProductType,
    #[strum(serialize = "purchase order")]
    PurchaseOrder,
    #[strum(serialize = "section")]
    Section,
    #[strum(serialize = "seller")]
    Seller,
    #[strum(serialize = "warehouse")]
    Warehouse,
}

/// A persisted row with an integer primary key and one uniqueness-checked field.
pub trait Entity: Clone + Send + Sync + 'static {
    const KIND: ResourceKind;
    /// Wire key of the field that must be unique across rows.
    const UNIQUE_FIELD: &'static str;

    fn id(&self) -> i64;
    fn set_id(&mut self, id: i64);
    fn unique_key(&self) -> String;
}

/// Serde adapter for `yyyy-MM-dd HH:mm:ss` timestamps.
pub mod order_date {
    use crate::validation::rules::{parse_datetime, DATETIME_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw).ok_or_else(|| D::Error::custom(format!("invalid order date '{}'", raw)))
    }
}
