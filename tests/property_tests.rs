//! Property-based tests for partial-update merging and request validation.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use warehouse_api::merge::{Mergeable, Patch, PatchSet};
use warehouse_api::models::{Buyer, BuyerPatch, Section, SectionPatch};
use warehouse_api::validation::{Shaped, ValidationStatus, Validator};

fn patch_of<T: std::fmt::Debug + Clone + 'static>(
    value: impl Strategy<Value = T>,
) -> impl Strategy<Value = Patch<T>> {
    prop_oneof![Just(Patch::Absent), value.prop_map(Patch::Present)]
}

fn buyer_strategy() -> impl Strategy<Value = Buyer> {
    (1i64..10_000, "[0-9]{3,10}", "[A-Za-z]{1,12}", "[A-Za-z]{1,12}").prop_map(
        |(id, card_number_id, first_name, last_name)| Buyer {
            id,
            card_number_id,
            first_name,
            last_name,
        },
    )
}

fn buyer_patch_strategy() -> impl Strategy<Value = BuyerPatch> {
    (
        patch_of("[0-9]{3,10}"),
        patch_of("[A-Za-z]{1,12}"),
        patch_of("[A-Za-z]{1,12}"),
    )
        .prop_map(|(card_number_id, first_name, last_name)| BuyerPatch {
            card_number_id,
            first_name,
            last_name,
        })
}

fn section_strategy() -> impl Strategy<Value = Section> {
    (
        (1i64..1_000, 1i64..500),
        (-40.0f64..40.0, -40.0f64..40.0),
        (0i64..100, 0i64..100, 100i64..1_000),
        (1i64..50, 1i64..50),
    )
        .prop_map(
            |(
                (id, section_number),
                (current_temperature, minimum_temperature),
                (current_capacity, minimum_capacity, maximum_capacity),
                (warehouse_id, product_type_id),
            )| Section {
                id,
                section_number,
                current_temperature,
                minimum_temperature,
                current_capacity,
                minimum_capacity,
                maximum_capacity,
                warehouse_id,
                product_type_id,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn present_fields_win_and_absent_fields_keep(existing in buyer_strategy(), patch in buyer_patch_strategy()) {
        let merged = existing.merge(&patch);

        prop_assert_eq!(merged.id, existing.id);
        prop_assert_eq!(&merged.card_number_id, patch.card_number_id.as_ref().into_option().unwrap_or(&existing.card_number_id));
        prop_assert_eq!(&merged.first_name, patch.first_name.as_ref().into_option().unwrap_or(&existing.first_name));
        prop_assert_eq!(&merged.last_name, patch.last_name.as_ref().into_option().unwrap_or(&existing.last_name));
    }

    #[test]
    fn merging_the_same_patch_twice_is_idempotent(existing in buyer_strategy(), patch in buyer_patch_strategy()) {
        let once = existing.merge(&patch);
        prop_assert_eq!(once.merge(&patch), once);
    }

    #[test]
    fn empty_patch_is_identity(existing in section_strategy()) {
        let patch = SectionPatch::default();
        prop_assert!(patch.is_blank());
        prop_assert_eq!(existing.merge(&patch), existing);
    }

    #[test]
    fn merge_leaves_the_original_untouched(existing in section_strategy(), capacity in 0i64..1_000) {
        let before = existing.clone();
        let patch = SectionPatch {
            current_capacity: Patch::Present(capacity),
            ..Default::default()
        };
        let merged = existing.merge(&patch);

        prop_assert_eq!(&existing, &before);
        prop_assert_eq!(merged.current_capacity, capacity);
        prop_assert_eq!(merged.maximum_capacity, before.maximum_capacity);
    }

    #[test]
    fn update_payload_with_any_present_field_is_not_blank(
        fields in proptest::sample::subsequence(vec!["card_number_id", "first_name", "last_name"], 1..=3),
        value in "[A-Za-z0-9]{1,8}",
    ) {
        let body: Map<String, Value> = fields
            .iter()
            .map(|key| ((*key).to_string(), json!(value)))
            .collect();
        let raw = serde_json::to_vec(&body).unwrap();

        let patch: BuyerPatch = Validator::default()
            .validate(BuyerPatch::shape(), &raw)
            .unwrap();
        prop_assert!(!patch.is_blank());
    }

    #[test]
    fn required_failures_follow_declaration_order(
        present in proptest::sample::subsequence(vec!["card_number_id", "first_name", "last_name"], 0..3),
    ) {
        let body: Map<String, Value> = present
            .iter()
            .map(|key| ((*key).to_string(), json!("x")))
            .collect();
        let raw = serde_json::to_vec(&body).unwrap();

        let errors = Validator::default()
            .validate::<warehouse_api::models::CreateBuyerRequest>(
                <warehouse_api::models::CreateBuyerRequest as Shaped>::shape(),
                &raw,
            )
            .unwrap_err();
        let expected: Vec<&str> = ["card_number_id", "first_name", "last_name"]
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect();

        prop_assert_eq!(errors.status(), ValidationStatus::Unprocessable);
        prop_assert_eq!(errors.fields(), expected);
    }
}
