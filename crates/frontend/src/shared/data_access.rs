//! Доступ к данным: GraphQL-клиент и кэш запросов, передаваемые через контекст.

use contracts::shared::graphql::ApiError;
use leptos::prelude::*;
use serde::{de::DeserializeOwned, Serialize};

use crate::shared::graphql::GraphQlClient;
use crate::shared::query_cache::QueryCache;

#[derive(Clone, Copy)]
pub struct DataAccess {
    client: StoredValue<GraphQlClient>,
    cache: StoredValue<QueryCache>,
}

impl DataAccess {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: StoredValue::new(GraphQlClient::new(endpoint)),
            cache: StoredValue::new(QueryCache::new()),
        }
    }

    /// Запрос с приоритетом кэша: сеть используется только при промахе
    pub async fn query<V, T>(&self, document: &'static str, variables: V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: Serialize + DeserializeOwned,
    {
        if let Some(cached) = self
            .cache
            .with_value(|c| c.read_query::<V, T>(document, &variables))
        {
            return Ok(cached);
        }

        self.fetch(document, variables).await
    }

    /// Запрос в сеть без чтения кэша; результат сохраняется в кэш
    pub async fn fetch<V, T>(&self, document: &'static str, variables: V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: Serialize + DeserializeOwned,
    {
        let client = self.client.get_value();
        let data: T = client.execute(document, &variables).await.map_err(|e| {
            log::error!("query to {} failed: {}", client.endpoint(), e);
            e
        })?;
        self.cache
            .update_value(|c| c.write_query(document, &variables, &data));
        Ok(data)
    }

    /// Мутация всегда выполняется на сервере; кэш обновляет вызывающий код
    pub async fn mutate<V, T>(&self, document: &'static str, variables: V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let client = self.client.get_value();
        client.execute(document, &variables).await.map_err(|e| {
            log::error!("mutation failed: {}", e);
            e
        })
    }

    pub fn update_cached<V, T, F>(&self, document: &'static str, variables: &V, f: F) -> bool
    where
        V: Serialize,
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let mut updated = false;
        self.cache
            .update_value(|c| updated = c.update_query(document, variables, f));
        updated
    }
}

pub fn provide_data_access(endpoint: String) {
    log::debug!("GraphQL endpoint: {}", endpoint);
    provide_context(DataAccess::new(endpoint));
}

pub fn use_data_access() -> DataAccess {
    use_context::<DataAccess>().expect("DataAccess not found in context")
}
