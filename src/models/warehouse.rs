use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::merge::patch_struct;
use crate::validation::{FieldSpec, FieldType, Format, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warehouse {
    pub id: i64,
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i64,
    pub minimum_temperature: f64,
    pub locality_id: i64,
}

impl Entity for Warehouse {
    const KIND: ResourceKind = ResourceKind::Warehouse;
    const UNIQUE_FIELD: &'static str = "warehouse_code";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.warehouse_code.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateWarehouseRequest {
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i64,
    pub minimum_temperature: f64,
    pub locality_id: i64,
}

impl From<CreateWarehouseRequest> for Warehouse {
    fn from(request: CreateWarehouseRequest) -> Self {
        Self {
            id: 0,
            warehouse_code: request.warehouse_code,
            address: request.address,
            telephone: request.telephone,
            minimum_capacity: request.minimum_capacity,
            minimum_temperature: request.minimum_temperature,
            locality_id: request.locality_id,
        }
    }
}

patch_struct! {
    /// Partial update for [`Warehouse`].
    pub struct WarehousePatch for Warehouse {
        warehouse_code: String,
        address: String,
        telephone: String,
        minimum_capacity: i64,
        minimum_temperature: f64,
        locality_id: i64,
    }
}

lazy_static! {
    static ref FIELDS: Vec<FieldSpec> = vec![
        FieldSpec::new("warehouse_code", FieldType::String),
        FieldSpec::new("address", FieldType::String),
        FieldSpec::new("telephone", FieldType::String).format(Format::PhoneE164),
        FieldSpec::new("minimum_capacity", FieldType::Integer),
        FieldSpec::new("minimum_temperature", FieldType::Number),
        FieldSpec::new("locality_id", FieldType::Integer),
    ];
    static ref CREATE_SHAPE: RequestShape = RequestShape::create("create warehouse", FIELDS.clone());
    static ref UPDATE_SHAPE: RequestShape = RequestShape::update("update warehouse", FIELDS.clone());
}

impl Shaped for CreateWarehouseRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}

impl Shaped for WarehousePatch {
    fn shape() -> &'static RequestShape {
        &UPDATE_SHAPE
    }
}
