//! Shape-driven request validation.
//!
//! Every write endpoint declares a [`RequestShape`] once, at startup. The
//! [`Validator`] checks a raw JSON body against that shape in three passes:
//!
//! 1. decoding and primitive types (single-shot, the first problem wins),
//! 2. required fields and format rules (collected, every failure is reported),
//! 3. the blank-update check for update shapes that must carry at least one field.
//!
//! Only a payload that survives all three passes is decoded into the target type.

pub mod extract;
pub mod messages;
pub mod rules;

use axum::http::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};
use std::fmt;

pub use extract::{Shaped, ValidatedJson};
pub use messages::Locale;

use messages::Detail;

/// Primitive JSON type a field must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Integer,
    Number,
    Boolean,
}

impl FieldType {
    pub fn name(self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Integer => value.is_i64(),
            FieldType::Number => value.is_number(),
            FieldType::Boolean => value.is_boolean(),
        }
    }
}

/// Format constraint checked on a present value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    PhoneE164,
    DateTime,
    /// A tag this validator does not implement. Always reported, never skipped.
    Unrecognized(&'static str),
}

/// One field of a request shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: &'static str,
    wire_key: &'static str,
    field_type: FieldType,
    required: bool,
    format: Option<Format>,
}

impl FieldSpec {
    pub fn new(wire_key: &'static str, field_type: FieldType) -> Self {
        Self {
            name: wire_key,
            wire_key,
            field_type,
            required: false,
            format: None,
        }
    }

    /// Overrides the internal name used in logs; messages always use the wire key.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn wire_key(&self) -> &'static str {
        self.wire_key
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Create,
    Update { can_be_blank: bool },
}

/// Ordered set of fields expected by one endpoint.
#[derive(Debug, Clone)]
pub struct RequestShape {
    name: &'static str,
    kind: ShapeKind,
    fields: Vec<FieldSpec>,
}

impl RequestShape {
    /// Create shapes require every field.
    pub fn create(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            kind: ShapeKind::Create,
            fields: fields.into_iter().map(FieldSpec::required).collect(),
        }
    }

    /// Update shapes make every field optional and reject an entirely blank payload.
    pub fn update(name: &'static str, fields: Vec<FieldSpec>) -> Self {
        Self {
            name,
            kind: ShapeKind::Update {
                can_be_blank: false,
            },
            fields: fields
                .into_iter()
                .map(|field| FieldSpec {
                    required: false,
                    ..field
                })
                .collect(),
        }
    }

    pub fn allow_blank(mut self) -> Self {
        if let ShapeKind::Update { can_be_blank } = &mut self.kind {
            *can_be_blank = true;
        }
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn wire_keys(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.wire_key).collect()
    }

    fn rejects_blank(&self) -> bool {
        matches!(
            self.kind,
            ShapeKind::Update {
                can_be_blank: false
            }
        )
    }
}

/// Rule a failure violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    Syntax,
    Type,
    Required,
    PhoneE164,
    DateTime,
    UnknownRule,
    NotBlank,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    /// Wire key of the offending field; empty when the failure concerns the whole body.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub field: String,
    pub rule: Rule,
    pub message: String,
}

/// Response class a set of failures maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Unprocessable,
    BadRequest,
}

impl ValidationStatus {
    pub fn status_code(self) -> StatusCode {
        match self {
            ValidationStatus::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationStatus::BadRequest => StatusCode::BAD_REQUEST,
        }
    }
}

/// Non-empty, ordered list of failures for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    status: ValidationStatus,
    failures: Vec<ValidationFailure>,
}

impl ValidationErrors {
    fn unprocessable(failures: Vec<ValidationFailure>) -> Self {
        Self {
            status: ValidationStatus::Unprocessable,
            failures,
        }
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }

    pub fn fields(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for failure in &self.failures {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(&failure.message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates raw payloads against request shapes, rendering messages in one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    locale: Locale,
}

impl Validator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Validates `raw` against `shape` and decodes it into `T`.
    pub fn validate<T: DeserializeOwned>(
        &self,
        shape: &RequestShape,
        raw: &[u8],
    ) -> Result<T, ValidationErrors> {
        let value: Value = serde_json::from_slice(raw).map_err(|err| {
            self.single(
                "",
                Rule::Syntax,
                &Detail::Syntax {
                    line: err.line(),
                    column: err.column(),
                },
            )
        })?;

        let object = match value.as_object() {
            Some(object) => object,
            None => return Err(self.single("", Rule::Type, &Detail::NotAnObject)),
        };

        self.check_types(shape, object)?;
        self.check_rules(shape, object)?;
        self.check_blank(shape, object)?;

        serde_json::from_value(value).map_err(|err| {
            self.single(
                "",
                Rule::Type,
                &Detail::Decode {
                    reason: err.to_string(),
                },
            )
        })
    }

    /// Failure for a body that could not be read off the wire at all.
    pub fn unreadable(&self, reason: impl Into<String>) -> ValidationErrors {
        self.single(
            "",
            Rule::Syntax,
            &Detail::Unreadable {
                reason: reason.into(),
            },
        )
    }

    fn check_types(
        &self,
        shape: &RequestShape,
        object: &Map<String, Value>,
    ) -> Result<(), ValidationErrors> {
        for field in shape.fields() {
            if let Some(value) = present(object, field.wire_key) {
                if !field.field_type.accepts(value) {
                    tracing::debug!(
                        shape = shape.name,
                        field = field.name,
                        expected = field.field_type.name(),
                        "type mismatch"
                    );
                    return Err(self.single(
                        field.wire_key,
                        Rule::Type,
                        &Detail::Type {
                            field: field.wire_key,
                            expected: field.field_type.name(),
                        },
                    ));
                }
            }
        }
        Ok(())
    }

    fn check_rules(
        &self,
        shape: &RequestShape,
        object: &Map<String, Value>,
    ) -> Result<(), ValidationErrors> {
        let mut failures = Vec::new();

        for field in shape.fields() {
            let key = field.wire_key;
            let value = match present(object, key) {
                Some(value) => value,
                None => {
                    if field.required {
                        failures.push(self.failure(
                            key,
                            Rule::Required,
                            &Detail::Required { field: key },
                        ));
                    }
                    continue;
                }
            };

            match field.format {
                None => {}
                Some(Format::PhoneE164) => {
                    if !value.as_str().map(rules::is_e164).unwrap_or(false) {
                        failures.push(self.failure(
                            key,
                            Rule::PhoneE164,
                            &Detail::PhoneE164 { field: key },
                        ));
                    }
                }
                Some(Format::DateTime) => {
                    if value.as_str().and_then(rules::parse_datetime).is_none() {
                        failures.push(self.failure(
                            key,
                            Rule::DateTime,
                            &Detail::DateTime { field: key },
                        ));
                    }
                }
                Some(Format::Unrecognized(tag)) => {
                    tracing::warn!(shape = shape.name, field = field.name, tag, "unknown validation rule");
                    failures.push(self.failure(
                        key,
                        Rule::UnknownRule,
                        &Detail::UnknownRule { field: key, tag },
                    ));
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::unprocessable(failures))
        }
    }

    fn check_blank(
        &self,
        shape: &RequestShape,
        object: &Map<String, Value>,
    ) -> Result<(), ValidationErrors> {
        if !shape.rejects_blank() {
            return Ok(());
        }
        let blank = shape
            .fields()
            .iter()
            .all(|field| present(object, field.wire_key).is_none());
        if !blank {
            return Ok(());
        }

        let fields = shape.wire_keys().join(", ");
        Err(ValidationErrors {
            status: ValidationStatus::BadRequest,
            failures: vec![self.failure("", Rule::NotBlank, &Detail::Blank { fields })],
        })
    }

    fn failure(&self, field: &str, rule: Rule, detail: &Detail<'_>) -> ValidationFailure {
        ValidationFailure {
            field: field.to_string(),
            rule,
            message: self.locale.render(detail),
        }
    }

    fn single(&self, field: &str, rule: Rule, detail: &Detail<'_>) -> ValidationErrors {
        ValidationErrors::unprocessable(vec![self.failure(field, rule, detail)])
    }
}

/// Absent and `null` are treated alike.
fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}
