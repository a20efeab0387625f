use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::merge::patch_struct;
use crate::validation::{FieldSpec, FieldType, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i64,
    pub seller_id: i64,
}

impl Entity for Product {
    const KIND: ResourceKind = ResourceKind::Product;
    const UNIQUE_FIELD: &'static str = "product_code";

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn unique_key(&self) -> String {
        self.product_code.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreateProductRequest {
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i64,
    pub seller_id: i64,
}

impl From<CreateProductRequest> for Product {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            id: 0,
            product_code: request.product_code,
            description: request.description,
            width: request.width,
            height: request.height,
            length: request.length,
            net_weight: request.net_weight,
            expiration_rate: request.expiration_rate,
            recommended_freezing_temperature: request.recommended_freezing_temperature,
            freezing_rate: request.freezing_rate,
            product_type_id: request.product_type_id,
            seller_id: request.seller_id,
        }
    }
}

patch_struct! {
    pub struct ProductPatch for Product {
        product_code: String,
        description: String,
        width: f64,
        height: f64,
        length: f64,
        net_weight: f64,
        expiration_rate: f64,
        recommended_freezing_temperature: f64,
        freezing_rate: f64,
        product_type_id: i64,
        seller_id: i64,
    }
}

lazy_static! {
    static ref FIELDS: Vec<FieldSpec> = vec![
        FieldSpec::new("product_code", FieldType::String),
        FieldSpec::new("description", FieldType::String),
        FieldSpec::new("width", FieldType::Number),
        FieldSpec::new("height", FieldType::Number),
        FieldSpec::new("length", FieldType::Number),
        FieldSpec::new("net_weight", FieldType::Number),
        FieldSpec::new("expiration_rate", FieldType::Number),
        FieldSpec::new("recommended_freezing_temperature", FieldType::Number),
        FieldSpec::new("freezing_rate", FieldType::Number),
        FieldSpec::new("product_type_id", FieldType::Integer),
        FieldSpec::new("seller_id", FieldType::Integer),
    ];
    static ref CREATE_SHAPE: RequestShape = RequestShape::create("create product", FIELDS.clone());
    static ref UPDATE_SHAPE: RequestShape = RequestShape::update("update product", FIELDS.clone());
}

impl Shaped for CreateProductRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}

impl Shaped for ProductPatch {
    fn shape() -> &'static RequestShape {
        &UPDATE_SHAPE
    }
}
