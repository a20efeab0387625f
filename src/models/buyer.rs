use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use super::{Entity, ResourceKind};
use crate::merge::patch_struct;
use crate::validation::{FieldSpec, FieldType, RequestShape, Shaped};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buyer {
    pub id: i64,
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Entity for Buyer {
    const KIND: ResourceKind = ResourceKind::Buyer;
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
pub struct CreateBuyerRequest {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<CreateBuyerRequest> for Buyer {
    fn from(request: CreateBuyerRequest) -> Self {
        Self {
            id: 0,
            card_number_id: request.card_number_id,
            first_name: request.first_name,
            last_name: request.last_name,
        }
    }
}

patch_struct! {
    /// Partial update for [`Buyer`].
    pub struct BuyerPatch for Buyer {
        card_number_id: String,
        first_name: String,
        last_name: String,
    }
}

lazy_static! {
    static ref FIELDS: Vec<FieldSpec> = vec![
        FieldSpec::new("card_number_id", FieldType::String),
        FieldSpec::new("first_name", FieldType::String),
        FieldSpec::new("last_name", FieldType::String),
    ];
    static ref CREATE_SHAPE: RequestShape = RequestShape::create("create buyer", FIELDS.clone());
    static ref UPDATE_SHAPE: RequestShape = RequestShape::update("update buyer", FIELDS.clone());
}

impl Shaped for CreateBuyerRequest {
    fn shape() -> &'static RequestShape {
        &CREATE_SHAPE
    }
}

impl Shaped for BuyerPatch {
    fn shape() -> &'static RequestShape {
        &UPDATE_SHAPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{Mergeable, Patch};

    #[test]
    fn patch_overwrites_only_supplied_names() {
        let existing = Buyer {
            id: 1,
            card_number_id: "123".into(),
            first_name: "Teste".into(),
            last_name: "Teste".into(),
        };
        let patch = BuyerPatch {
            card_number_id: Patch::Present("123".into()),
            first_name: Patch::Present("Cleber".into()),
            ..Default::default()
        };

        assert_eq!(
            existing.merge(&patch),
            Buyer {
                id: 1,
                card_number_id: "123".into(),
                first_name: "Cleber".into(),
                last_name: "Teste".into(),
            }
        );
    }

    #[test]
    fn update_shape_allows_any_subset() {
        let shape = BuyerPatch::shape();
        assert!(shape.fields().iter().all(|field| !field.is_required()));
        assert!(CreateBuyerRequest::shape()
            .fields()
            .iter()
            .all(|field| field.is_required()));
    }
}
