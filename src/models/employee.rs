use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::merge::patch_struct;
use crate::validation::{FieldSpec, FieldType, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

impl Entity for Employee {
    const KIND: ResourceKind = ResourceKind::Employee;
    const UNIQUE_FIELD: &'static str = "card_number_id";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.card_number_id.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateEmployeeRequest {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

impl From<CreateEmployeeRequest> for Employee {
    fn from(request: CreateEmployeeRequest) -> Self {
        Self {
            id: 0,
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
            warehouse_id: request.warehouse_id,
        }
    }
}

patch_struct! {
    pub struct EmployeePatch for Employee {
        card_number_id: String,
        first_name: String,
        last_name: String,
        warehouse_id: i64,
    }
}

lazy_static! {
    static ref FIELDS: Vec<FieldSpec> = vec![
        FieldSpec::new("card_number_id", FieldType::String),
        FieldSpec::new("first_name", FieldType::String),
        FieldSpec::new("last_name", FieldType::String),
        FieldSpec::new("warehouse_id", FieldType::Integer),
    ];
    static ref CREATE_SHAPE: RequestShape = RequestShape::create("create employee", FIELDS.clone());
    static ref UPDATE_SHAPE: RequestShape = RequestShape::update("update employee", FIELDS.clone());
}

impl Shaped for CreateEmployeeRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}

impl Shaped for EmployeePatch {
    fn shape() -> &'static RequestShape {
        &UPDATE_SHAPE
    }
}
