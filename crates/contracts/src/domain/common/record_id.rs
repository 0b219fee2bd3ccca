/// Трейт для записей с идентификатором (GraphQL `ID`)
pub trait HasId {
    fn id(&self) -> &str;
}

/// Удалить запись из списка по ID. Возвращает true, если запись была найдена.
pub fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Вставить запись или заменить существующую с тем же ID (позиция сохраняется)
pub fn upsert_by_id<T: HasId>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| existing.id() == item.id()) {
        Some(idx) => items[idx] = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(&'static str, u32);

    impl HasId for Row {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_remove_by_id() {
        let mut rows = vec![Row("1", 0), Row("2", 0), Row("3", 0)];
        assert!(remove_by_id(&mut rows, "2"));
        assert_eq!(rows, vec![Row("1", 0), Row("3", 0)]);
        assert!(!remove_by_id(&mut rows, "42"));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut rows = vec![Row("1", 0), Row("2", 0)];
        upsert_by_id(&mut rows, Row("1", 7));
        assert_eq!(rows, vec![Row("1", 7), Row("2", 0)]);

        upsert_by_id(&mut rows, Row("3", 1));
        assert_eq!(rows, vec![Row("1", 7), Row("2", 0), Row("3", 1)]);
    }
}
