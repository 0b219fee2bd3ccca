//! Кэш результатов GraphQL-запросов.
//!
//! Ключ: текст документа и сериализованные переменные. Значения хранятся
//! как JSON и читаются в нужный тип при обращении.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    document: String,
    variables: String,
}

impl CacheKey {
    pub fn new<V: Serialize>(document: &str, variables: &V) -> Self {
        Self {
            document: document.to_string(),
            variables: serde_json::to_string(variables).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<CacheKey, Value>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_query<V, T>(&self, document: &str, variables: &V) -> Option<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let value = self.entries.get(&CacheKey::new(document, variables))?;
        match serde_json::from_value(value.clone()) {
            Ok(data) => Some(data),
            Err(e) => {
                log::warn!("cached query result has unexpected shape: {}", e);
                None
            }
        }
    }

    pub fn write_query<V, T>(&mut self, document: &str, variables: &V, data: &T)
    where
        V: Serialize,
        T: Serialize,
    {
        match serde_json::to_value(data) {
            Ok(value) => {
                self.entries.insert(CacheKey::new(document, variables), value);
            }
            Err(e) => log::warn!("failed to cache query result: {}", e),
        }
    }

    /// Изменить закэшированный результат. Возвращает false, если запрос ещё не кэширован.
    pub fn update_query<V, T, F>(&mut self, document: &str, variables: &V, f: F) -> bool
    where
        V: Serialize,
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut T),
    {
        let Some(mut data) = self.read_query::<V, T>(document, variables) else {
            return false;
        };
        f(&mut data);
        self.write_query(document, variables, &data);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_unit::aggregate::{Unit, UnitsData};
    use contracts::domain::a003_unit::graphql::QUERY_ITEMS;
    use contracts::domain::common::{remove_by_id, upsert_by_id};
    use contracts::shared::graphql::PermissionVars;
    use contracts::shared::permissions::MASTER_ROLES;

    fn unit(id: &str, title: &str) -> Unit {
        Unit {
            id: id.into(),
            title_ru: title.into(),
            title_en: title.into(),
            created_at: None,
        }
    }

    fn seeded() -> (QueryCache, PermissionVars) {
        let vars = PermissionVars::new(MASTER_ROLES);
        let mut cache = QueryCache::new();
        let data = UnitsData {
            check_permissions: Some(true),
            units: vec![unit("1", "kg"), unit("2", "pcs")],
        };
        cache.write_query(QUERY_ITEMS, &vars, &data);
        (cache, vars)
    }

    #[test]
    fn test_read_is_keyed_by_variables() {
        let (cache, vars) = seeded();
        let data: UnitsData = cache.read_query(QUERY_ITEMS, &vars).unwrap();
        assert_eq!(data.units.len(), 2);

        let other = PermissionVars::new(&["admin"]);
        assert!(cache.read_query::<_, UnitsData>(QUERY_ITEMS, &other).is_none());
    }

    #[test]
    fn test_update_after_delete() {
        let (mut cache, vars) = seeded();
        assert!(cache.update_query(QUERY_ITEMS, &vars, |d: &mut UnitsData| {
            remove_by_id(&mut d.units, "1");
        }));
        let data: UnitsData = cache.read_query(QUERY_ITEMS, &vars).unwrap();
        assert_eq!(data.units, vec![unit("2", "pcs")]);
    }

    #[test]
    fn test_update_after_save_merges_by_id() {
        let (mut cache, vars) = seeded();
        cache.update_query(QUERY_ITEMS, &vars, |d: &mut UnitsData| {
            upsert_by_id(&mut d.units, unit("2", "piece"));
            upsert_by_id(&mut d.units, unit("3", "m"));
        });
        let data: UnitsData = cache.read_query(QUERY_ITEMS, &vars).unwrap();
        let titles: Vec<&str> = data.units.iter().map(|u| u.title_en.as_str()).collect();
        assert_eq!(titles, vec!["kg", "piece", "m"]);
    }

    #[test]
    fn test_update_of_missing_entry_is_noop() {
        let mut cache = QueryCache::new();
        let vars = PermissionVars::new(MASTER_ROLES);
        let updated = cache.update_query(QUERY_ITEMS, &vars, |d: &mut UnitsData| d.units.clear());
        assert!(!updated);
        assert!(cache.read_query::<_, UnitsData>(QUERY_ITEMS, &vars).is_none());
    }
}
