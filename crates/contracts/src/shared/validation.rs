//! Декларативная валидация форм.
//!
//! Правила описываются цепочкой вызовов [`Validator`]; каждое нарушение
//! превращается в [`FieldError`] с идентификатором сообщения для i18n и
//! текстом по умолчанию.
//!
//! ```rust
//! use contracts::shared::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "", "company.requiredName", "Name is required")
//!     .min("userId", 0, 1, "company.requiredClient", "Client is required")
//!     .finish();
//! assert_eq!(result.unwrap_err().len(), 2);
//! ```

use serde::{Deserialize, Serialize};

/// Ошибка одного поля формы
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message_id: String,
    pub default_message: String,
}

impl FieldError {
    pub fn new(
        field: impl Into<String>,
        message_id: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message_id: message_id.into(),
            default_message: default_message.into(),
        }
    }
}

/// Набор ошибок формы. Не более одной ошибки на поле, порядок правил сохраняется.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить ошибку, если для поля ещё нет ошибки
    pub fn push(&mut self, error: FieldError) {
        if self.get(&error.field).is_none() {
            self.errors.push(error);
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

/// Построитель правил валидации
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Строка обязательна (пробелы не считаются значением)
    pub fn required(mut self, field: &str, value: &str, message_id: &str, default: &str) -> Self {
        if value.trim().is_empty() {
            self.errors.push(FieldError::new(field, message_id, default));
        }
        self
    }

    /// Числовое значение не меньше `min`
    pub fn min<N: PartialOrd>(
        mut self,
        field: &str,
        value: N,
        min: N,
        message_id: &str,
        default: &str,
    ) -> Self {
        if value < min {
            self.errors.push(FieldError::new(field, message_id, default));
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_passes() {
        let result = Validator::new()
            .required("titleRU", "Штука", "unit.requiredTitleRU", "Required")
            .min("userId", 3, 1, "company.requiredClient", "Client is required")
            .finish();
        assert!(result.is_ok());
    }

    #[test]
    fn test_blank_string_is_missing() {
        let errors = Validator::new()
            .required("name", "   ", "company.requiredName", "Name is required")
            .finish()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name").unwrap().message_id, "company.requiredName");
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let errors = Validator::new()
            .min("basePrice", -1.0, 0.0, "equipment.negativePrice", "Negative price")
            .min("basePrice", -1.0, 10.0, "equipment.other", "Other")
            .required("code", "", "equipment.requiredCode", "Code is required")
            .finish()
            .unwrap_err();

        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["basePrice", "code"]);
        assert_eq!(errors.get("basePrice").unwrap().message_id, "equipment.negativePrice");
        assert_eq!(errors.to_string(), "validation failed for 2 field(s)");
    }
}
