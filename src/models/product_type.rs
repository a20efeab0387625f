use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::validation::{FieldSpec, FieldType, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub description: String,
}

impl Entity for ProductType {
    const KIND: ResourceKind = ResourceKind::ProductType;
    const UNIQUE_FIELD: &'static str = "description";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.description.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateProductTypeRequest {
    pub description: String,
}

impl From<CreateProductTypeRequest> for ProductType {
    fn from(request: CreateProductTypeRequest) -> Self {
        Self {
            id: 0,
            description: request.description,
        }
    }
}

lazy_static! {
    static ref CREATE_SHAPE: RequestShape = RequestShape::create(
        "create product type",
        vec![FieldSpec::new("description", FieldType::String)],
    );
}

impl Shaped for CreateProductTypeRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}
