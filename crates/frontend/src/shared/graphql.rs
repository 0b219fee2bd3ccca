use contracts::shared::graphql::{ApiError, GraphQlRequest, GraphQlResponse};
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

/// HTTP-клиент GraphQL API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphQlClient {
    endpoint: String,
}

impl GraphQlClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Выполнить запрос или мутацию и вернуть поле `data` ответа
    pub async fn execute<V, T>(&self, document: &str, variables: &V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest::new(document, variables);

        let response = Request::post(&self.endpoint)
            .header("Accept", "application/json")
            .json(&body)
            .map_err(|e| ApiError::Transport(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(ApiError::Transport(format!("HTTP {}", response.status())));
        }

        response
            .json::<GraphQlResponse<T>>()
            .await
            .map_err(|e| ApiError::Transport(format!("Failed to parse response: {}", e)))?
            .into_result()
    }
}
