//! GraphQL envelope types shared by every query and mutation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::validation::FieldError;

/// Тело POST-запроса к GraphQL endpoint
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn new(query: &'a str, variables: V) -> Self {
        Self { query, variables }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// Ответ сервера: `data` и/или `errors`
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Ошибки GraphQL имеют приоритет над частичными данными
    pub fn into_result(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            return Err(ApiError::Graphql(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data.ok_or(ApiError::EmptyData)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{}", .0.join("; "))]
    Graphql(Vec<String>),
    #[error("response contains no data")]
    EmptyData,
    #[error("access denied")]
    PermissionDenied,
}

/// Результат мутации add/update: `{ <entity>, field, message }`
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MutationPayload<T> {
    #[serde(
        default,
        alias = "category",
        alias = "equipment",
        alias = "unit",
        alias = "company"
    )]
    pub item: Option<T>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T> {
    Saved(T),
    /// Сервер отклонил данные; `field` указывает поле формы, если известно
    Rejected {
        field: Option<String>,
        message: String,
    },
}

impl<T> MutationPayload<T> {
    pub fn into_outcome(self) -> MutationOutcome<T> {
        match self.item {
            Some(item) => MutationOutcome::Saved(item),
            None => MutationOutcome::Rejected {
                field: self.field,
                message: self.message.unwrap_or_else(|| "app.error".to_string()),
            },
        }
    }
}

impl<T> MutationOutcome<T> {
    /// Ошибка отклонения в форме ошибки поля (сообщение сервера служит и ID, и текстом)
    pub fn field_error(&self) -> Option<FieldError> {
        match self {
            MutationOutcome::Saved(_) => None,
            MutationOutcome::Rejected { field, message } => Some(FieldError::new(
                field.clone().unwrap_or_default(),
                message.clone(),
                "Error",
            )),
        }
    }
}

/// Результат мутации удаления
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeletePayload {
    pub status: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Переменные списочных запросов
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PermissionVars {
    pub permissions: Vec<String>,
}

impl PermissionVars {
    pub fn new(permissions: &[&str]) -> Self {
        Self {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Переменные запроса одной записи
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemVars {
    pub permissions: Vec<String>,
    pub id: Option<String>,
}

impl ItemVars {
    pub fn new(permissions: &[&str], id: Option<String>) -> Self {
        Self {
            permissions: permissions.iter().map(|p| p.to_string()).collect(),
            id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdVars {
    pub id: String,
}

/// Результат `checkPermissions`: явный отказ превращается в ошибку
pub fn ensure_permitted(check_permissions: Option<bool>) -> Result<(), ApiError> {
    match check_permissions {
        Some(false) => Err(ApiError::PermissionDenied),
        _ => Ok(()),
    }
}

/// Данные мутации содержат единственное корневое поле (`addUnit`, `deleteCompany`, ...)
pub fn single_root<T>(data: HashMap<String, T>) -> Result<T, ApiError> {
    data.into_values().next().ok_or(ApiError::EmptyData)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_errors_take_priority() {
        let response: GraphQlResponse<serde_json::Value> = serde_json::from_str(
            r#"{"data":{"units":[]},"errors":[{"message":"a"},{"message":"b"}]}"#,
        )
        .unwrap();
        let err = response.into_result().unwrap_err();
        assert_eq!(err, ApiError::Graphql(vec!["a".into(), "b".into()]));
        assert_eq!(err.to_string(), "a; b");
    }

    #[test]
    fn test_missing_data_is_error() {
        let response: GraphQlResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert_eq!(response.into_result().unwrap_err(), ApiError::EmptyData);
    }

    #[test]
    fn test_mutation_payload_saved() {
        let payload: MutationPayload<Item> =
            serde_json::from_str(r#"{"unit":{"id":"7"},"field":null,"message":null}"#).unwrap();
        assert_eq!(payload.into_outcome(), MutationOutcome::Saved(Item { id: "7".into() }));
    }

    #[test]
    fn test_mutation_payload_rejected() {
        let payload: MutationPayload<Item> = serde_json::from_str(
            r#"{"company":null,"field":"name","message":"company.nameExists"}"#,
        )
        .unwrap();
        let outcome = payload.into_outcome();
        assert_eq!(
            outcome,
            MutationOutcome::Rejected {
                field: Some("name".into()),
                message: "company.nameExists".into()
            }
        );
        let err = outcome.field_error().unwrap();
        assert_eq!(err.field, "name");
        assert_eq!(err.message_id, "company.nameExists");
    }

    #[test]
    fn test_request_serialization() {
        let request = GraphQlRequest::new("query q { x }", PermissionVars::new(&["admin"]));
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"query": "query q { x }", "variables": {"permissions": ["admin"]}})
        );
    }

    #[test]
    fn test_single_root() {
        let data: HashMap<String, DeletePayload> =
            serde_json::from_str(r#"{"deleteUnit":{"status":true,"message":null}}"#).unwrap();
        assert_eq!(
            single_root(data).unwrap(),
            DeletePayload { status: true, message: None }
        );
        assert_eq!(
            single_root::<DeletePayload>(HashMap::new()).unwrap_err(),
            ApiError::EmptyData
        );
    }

    #[test]
    fn test_ensure_permitted() {
        assert!(ensure_permitted(Some(true)).is_ok());
        assert!(ensure_permitted(None).is_ok());
        assert_eq!(ensure_permitted(Some(false)), Err(ApiError::PermissionDenied));
    }
}
