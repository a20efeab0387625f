use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::merge::patch_struct;
use crate::validation::{FieldSpec, FieldType, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: i64,
    pub section_number: i64,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i64,
    pub minimum_capacity: i64,
    pub maximum_capacity: i64,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

impl Entity for Section {
    const KIND: ResourceKind = ResourceKind::Section;
    const UNIQUE_FIELD: &'static str = "section_number";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.section_number.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateSectionRequest {
    pub section_number: i64,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i64,
    pub minimum_capacity: i64,
    pub maximum_capacity: i64,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

impl From<CreateSectionRequest> for Section {
    fn from(request: CreateSectionRequest) -> Self {
        Self {
            id: 0,
            section_number: request.section_number,
            current_temperature: request.current_temperature,
            minimum_temperature: request.minimum_temperature,
            current_capacity: request.current_capacity,
            minimum_capacity: request.minimum_capacity,
            maximum_capacity: request.maximum_capacity,
            warehouse_id: request.warehouse_id,
            product_type_id: request.product_type_id,
        }
    }
}

patch_struct! {
    pub struct SectionPatch for Section {
        section_number: i64,
        current_temperature: f64,
        minimum_temperature: f64,
        current_capacity: i64,
        minimum_capacity: i64,
        maximum_capacity: i64,
        warehouse_id: i64,
        product_type_id: i64,
    }
}

lazy_static! {
    static ref FIELDS: Vec<FieldSpec> = vec![
        FieldSpec::new("section_number", FieldType::Integer),
        FieldSpec::new("current_temperature", FieldType::Number),
        FieldSpec::new("minimum_temperature", FieldType::Number),
        FieldSpec::new("current_capacity", FieldType::Integer),
        FieldSpec::new("minimum_capacity", FieldType::Integer),
        FieldSpec::new("maximum_capacity", FieldType::Integer),
        FieldSpec::new("warehouse_id", FieldType::Integer),
        FieldSpec::new("product_type_id", FieldType::Integer),
    ];
    static ref CREATE_SHAPE: RequestShape = RequestShape::create("create section", FIELDS.clone());
    static ref UPDATE_SHAPE: RequestShape = RequestShape::update("update section", FIELDS.clone());
}

impl Shaped for CreateSectionRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}

impl Shaped for SectionPatch {
    fn shape() -> &'static RequestShape {
        &UPDATE_SHAPE
    }
}
