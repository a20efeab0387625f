use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::validation::{FieldSpec, FieldType, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    pub id: i64,
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

impl Entity for Locality {
    const KIND: ResourceKind = ResourceKind::Locality;
    const UNIQUE_FIELD: &'static str = "locality_name";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.locality_name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateLocalityRequest {
    pub locality_name: String,
    pub province_name: String,
    pub country_name: String,
}

impl From<CreateLocalityRequest> for Locality {
    fn from(request: CreateLocalityRequest) -> Self {
        Self {
            id: 0,
            locality_name: request.locality_name,
            province_name: request.province_name,
            country_name: request.country_name,
        }
    }
}

/// Number of sellers registered against one locality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalitySellersReport {
    pub locality_id: i64,
    pub locality_name: String,
    pub sellers_count: usize,
}

lazy_static! {
    static ref CREATE_SHAPE: RequestShape = RequestShape::create(
        "create locality",
        vec![
            FieldSpec::new("locality_name", FieldType::String),
            FieldSpec::new("province_name", FieldType::String),
            FieldSpec::new("country_name", FieldType::String),
        ],
    );
}

impl Shaped for CreateLocalityRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}
