use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::merge::patch_struct;
use crate::validation::{FieldSpec, FieldType, Format, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    pub id: i64,
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

impl Entity for Seller {
    const KIND: ResourceKind = ResourceKind::Seller;
    const UNIQUE_FIELD: &'static str = "cid";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.cid.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateSellerRequest {
    pub cid: i64,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

impl From<CreateSellerRequest> for Seller {
    fn from(request: CreateSellerRequest) -> Self {
        Self {
            id: 0,
            cid: request.cid,
            company_name: request.company_name,
            address: request.address,
            telephone: request.telephone,
            locality_id: request.locality_id,
        }
    }
}

patch_struct! {
    pub struct SellerPatch for Seller {
        cid: i64,
        company_name: String,
        address: String,
        telephone: String,
        locality_id: i64,
    }
}

lazy_static! {
    static ref FIELDS: Vec<FieldSpec> = vec![
        FieldSpec::new("cid", FieldType::Integer),
        FieldSpec::new("company_name", FieldType::String),
        FieldSpec::new("address", FieldType::String),
        FieldSpec::new("telephone", FieldType::String).format(Format::PhoneE164),
        FieldSpec::new("locality_id", FieldType::Integer),
    ];
    static ref CREATE_SHAPE: RequestShape = RequestShape::create("create seller", FIELDS.clone());
    static ref UPDATE_SHAPE: RequestShape = RequestShape::update("update seller", FIELDS.clone());
}

impl Shaped for CreateSellerRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}

impl Shaped for SellerPatch {
    fn shape() -> &'static RequestShape {
        &UPDATE_SHAPE
    }
}
