use serde::{Deserialize, Serialize};

/// Example shown to clients whose phone number fails the E.164 rule.
pub const PHONE_EXAMPLE: &str = "+5500123456789";

/// Human-readable rendering of the accepted date-time pattern.
pub const DATETIME_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Message catalog used to render validation failures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR", alias = "pt-br", alias = "pt_br")]
    PtBr,
}

/// Structured description of a failure before it is rendered.
#[derive(Debug, Clone)]
pub(crate) enum Detail<'a> {
    Syntax { line: usize, column: usize },
    NotAnObject,
    Type { field: &'a str, expected: &'a str },
    Decode { reason: String },
    Unreadable { reason: String },
    Required { field: &'a str },
    PhoneE164 { field: &'a str },
    DateTime { field: &'a str },
    UnknownRule { field: &'a str, tag: &'a str },
    Blank { fields: String },
}

impl Locale {
    pub(crate) fn render(self, detail: &Detail<'_>) -> String {
        match self {
            Locale::En => render_en(detail),
            Locale::PtBr => render_pt_br(detail),
        }
    }
}

fn render_en(detail: &Detail<'_>) -> String {
    match detail {
        Detail::Syntax { line, column } => {
            format!("malformed JSON at line {}, column {}", line, column)
        }
        Detail::NotAnObject => "request body must be a JSON object".to_string(),
        Detail::Type { field, expected } => format!("field '{}' must be '{}'", field, expected),
        Detail::Decode { reason } => format!("request body could not be decoded: {}", reason),
        Detail::Unreadable { reason } => format!("request body could not be read: {}", reason),
        Detail::Required { field } => format!("field '{}' is required", field),
        Detail::PhoneE164 { field } => format!(
            "field '{}' must be a phone number in E.164 format, e.g. {}",
            field, PHONE_EXAMPLE
        ),
        Detail::DateTime { field } => {
            format!("field '{}' must match the format {}", field, DATETIME_PATTERN)
        }
        Detail::UnknownRule { field, tag } => {
            format!("field '{}' failed unknown validation rule '{}'", field, tag)
        }
        Detail::Blank { fields } => format!("at least one of: {} must be provided", fields),
    }
}

fn render_pt_br(detail: &Detail<'_>) -> String {
    match detail {
        Detail::Syntax { line, column } => {
            format!("JSON malformado na linha {}, coluna {}", line, column)
        }
        Detail::NotAnObject => "o corpo da requisição deve ser um objeto JSON".to_string(),
        Detail::Type { field, expected } => {
            format!("o campo '{}' deve ser '{}'", field, expected)
        }
        Detail::Decode { reason } => {
            format!("não foi possível decodificar o corpo da requisição: {}", reason)
        }
        Detail::Unreadable { reason } => {
            format!("não foi possível ler o corpo da requisição: {}", reason)
        }
        Detail::Required { field } => format!("o campo '{}' é obrigatório", field),
        Detail::PhoneE164 { field } => format!(
            "o campo '{}' deve ser um telefone no formato E.164, ex.: {}",
            field, PHONE_EXAMPLE
        ),
        Detail::DateTime { field } => {
            format!("o campo '{}' deve seguir o formato {}", field, DATETIME_PATTERN)
        }
        Detail::UnknownRule { field, tag } => format!(
            "o campo '{}' falhou na regra de validação desconhecida '{}'",
            field, tag
        ),
        Detail::Blank { fields } => format!("informe ao menos um dos campos: {}", fields),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_message_carries_example_in_every_locale() {
        for locale in [Locale::En, Locale::PtBr] {
            let message = locale.render(&Detail::PhoneE164 { field: "telephone" });
            assert!(message.contains(PHONE_EXAMPLE), "{}", message);
            assert!(message.contains("telephone"));
        }
    }

    #[test]
    fn locale_deserializes_from_config_spellings() {
        let locale: Locale = serde_json::from_str("\"pt_br\"").unwrap();
        assert_eq!(locale, Locale::PtBr);
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
    }
}
