use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::validation::{FieldSpec, FieldType, Format, RequestShape, Shaped};

/// Stock received into a warehouse by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundOrder {
    pub id: i64,
    pub order_number: String,
    #[serde(with = "super::order_date")]
    pub order_date: NaiveDateTime,
    pub employee_id: i64,
    pub warehouse_id: i64,
}

impl Entity for InboundOrder {
    const KIND: ResourceKind = ResourceKind::InboundOrder;
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

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateInboundOrderRequest {
    pub order_number: String,
    pub order_date: String,
    pub employee_id: i64,
    pub warehouse_id: i64,
}

lazy_static! {
    static ref CREATE_SHAPE: RequestShape = RequestShape::create(
        "create inbound order",
        vec![
            FieldSpec::new("order_number", FieldType::String),
            FieldSpec::new("order_date", FieldType::String).format(Format::DateTime),
            FieldSpec::new("employee_id", FieldType::Integer),
            FieldSpec::new("warehouse_id", FieldType::Integer),
        ],
    );
}

impl Shaped for CreateInboundOrderRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}
