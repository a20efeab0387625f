//! Sparse partial updates.
//!
//! A patch mirrors an entity with every field wrapped in [`Patch`]. Merging
//! copies present fields and keeps everything else from the existing entity.
//! Patch structs and their merge implementations are generated per entity by
//! [`patch_struct!`], so a field type mismatch is a compile error.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field that was either supplied by the client or left out.
///
/// `null` on the wire decodes to `Absent`; clearing a field is not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Absent,
    Present(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> Patch<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Patch::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    pub fn as_ref(&self) -> Patch<&T> {
        match self {
            Patch::Present(value) => Patch::Present(value),
            Patch::Absent => Patch::Absent,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Patch::Present(value) => Some(value),
            Patch::Absent => None,
        }
    }
}

impl<T: Clone> Patch<T> {
    /// The supplied value, or a copy of `current` when absent.
    pub fn or_keep(&self, current: &T) -> T {
        match self {
            Patch::Present(value) => value.clone(),
            Patch::Absent => current.clone(),
        }
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Patch::Present(value),
            None => Patch::Absent,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Patch::from)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Patch::Present(value) => serializer.serialize_some(value),
            Patch::Absent => serializer.serialize_none(),
        }
    }
}

/// Patch struct whose fields are all [`Patch`] values.
pub trait PatchSet {
    /// True when no field is present.
    fn is_blank(&self) -> bool;
}

/// Entity that can absorb a sparse patch.
pub trait Mergeable: Clone {
    type Patch: PatchSet;

    /// Returns a new entity; `self` is left untouched.
    fn merge(&self, patch: &Self::Patch) -> Self;
}

pub fn merge<T: Mergeable>(existing: &T, patch: &T::Patch) -> T {
    existing.merge(patch)
}

/// Declares the patch struct for an entity and implements [`Mergeable`] for it.
///
/// Fields not listed (the primary key) are always carried over from the
/// existing entity.
macro_rules! patch_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $patch:ident for $entity:ident {
            $( $field:ident : $ty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $patch {
            $(
                #[serde(skip_serializing_if = "crate::merge::Patch::is_absent")]
                pub $field: $crate::merge::Patch<$ty>,
            )+
        }

        impl $crate::merge::PatchSet for $patch {
            fn is_blank(&self) -> bool {
                true $( && self.$field.is_absent() )+
            }
        }

        impl $crate::merge::Mergeable for $entity {
            type Patch = $patch;

            fn merge(&self, patch: &$patch) -> Self {
                Self {
                    $( $field: patch.$field.or_keep(&self.$field), )+
                    ..self.clone()
                }
            }
        }
    };
}

pub(crate) use patch_struct;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Shelf {
        id: i64,
        label: String,
        capacity: i64,
        temperature: f64,
    }

    patch_struct! {
        struct ShelfPatch for Shelf {
            label: String,
            capacity: i64,
            temperature: f64,
        }
    }

    fn shelf() -> Shelf {
        Shelf {
            id: 4,
            label: "A-1".into(),
            capacity: 10,
            temperature: -2.5,
        }
    }

    #[test]
    fn present_fields_overwrite_and_absent_fields_survive() {
        let patch = ShelfPatch {
            capacity: Patch::Present(25),
            ..Default::default()
        };
        let merged = shelf().merge(&patch);
        assert_eq!(
            merged,
            Shelf {
                capacity: 25,
                ..shelf()
            }
        );
    }

    #[test]
    fn blank_patch_is_identity() {
        let patch = ShelfPatch::default();
        assert!(patch.is_blank());
        assert_eq!(merge(&shelf(), &patch), shelf());
    }

    #[test]
    fn merge_leaves_existing_untouched() {
        let existing = shelf();
        let patch = ShelfPatch {
            label: Patch::Present("B-7".into()),
            temperature: Patch::Present(4.0),
            ..Default::default()
        };
        let merged = existing.merge(&patch);
        assert_eq!(existing, shelf());
        assert_eq!(merged.label, "B-7");
        assert_eq!(merged.temperature, 4.0);
        assert_eq!(merged.id, existing.id);
    }

    #[test]
    fn missing_and_null_keys_decode_as_absent() {
        let patch: ShelfPatch =
            serde_json::from_str(r#"{"label":null,"capacity":12}"#).unwrap();
        assert_eq!(patch.label, Patch::Absent);
        assert_eq!(patch.capacity, Patch::Present(12));
        assert_eq!(patch.temperature, Patch::Absent);
        assert!(!patch.is_blank());
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let patch = ShelfPatch {
            capacity: Patch::Present(3),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"capacity":3}"#);
    }
}
