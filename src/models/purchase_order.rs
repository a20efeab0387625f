use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::validation::{FieldSpec, FieldType, Format, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: i64,
    pub order_number: String,
    #[serde(with = "super::order_date")]
    pub order_date: NaiveDateTime,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_id: i64,
}

impl Entity for PurchaseOrder {
    const KIND: ResourceKind = ResourceKind::PurchaseOrder;
    const UNIQUE_FIELD: &'static str = "order_number";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.order_number.clone()
    }
}

/// `order_date` stays textual until the service parses it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePurchaseOrderRequest {
    pub order_number: String,
    pub order_date: String,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_id: i64,
}

lazy_static! {
    static ref CREATE_SHAPE: RequestShape = RequestShape::create(
        "create purchase order",
        vec![
            FieldSpec::new("order_number", FieldType::String),
            FieldSpec::new("order_date", FieldType::String).format(Format::DateTime),
            FieldSpec::new("tracking_code", FieldType::String),
            FieldSpec::new("buyer_id", FieldType::Integer),
            FieldSpec::new("product_id", FieldType::Integer),
        ],
    );
}

impl Shaped for CreatePurchaseOrderRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}
