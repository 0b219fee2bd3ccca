//! Универсальные утилиты сортировки списков.
//!
//! Состояние сортировки ([`SortState`]) никогда не изменяется на месте:
//! каждый клик по заголовку колонки порождает новое значение. Сортировка
//! стабильна и не трогает исходный список.
//!
//! Политика сравнения значений (по возрастанию):
//! `Missing < Number < Text`. Числа сравниваются численно (`-0` равен `0`),
//! строки посимвольно с учётом регистра. Убывание есть точная инверсия
//! возрастания.
//!
//! Число и строка в одной колонке не сравниваются как строки: порядок
//! задаёт тип значения. Так сравнение остаётся полным порядком, без
//! которого `sort_by` не гарантирует осмысленный результат.

use serde_json::Value;
use std::cmp::Ordering;

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn flip(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }

    /// Применить направление к результату сравнения по возрастанию
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Активная сортировка списка: поле и направление
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub field: String,
    pub direction: Direction,
}

impl SortState {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    /// Следующее состояние после клика по колонке `field`:
    /// та же колонка меняет направление, новая сортируется по возрастанию.
    pub fn request_sort(&self, field: &str) -> SortState {
        if self.field == field {
            SortState {
                field: self.field.clone(),
                direction: self.direction.flip(),
            }
        } else {
            SortState::new(field)
        }
    }

    pub fn is_active(&self, field: &str) -> bool {
        self.field == field
    }

    /// Индикатор сортировки для заголовка
    pub fn indicator(&self, field: &str) -> &'static str {
        if !self.is_active(field) {
            return " ⇅";
        }
        match self.direction {
            Direction::Ascending => " ▲",
            Direction::Descending => " ▼",
        }
    }

    /// CSS-класс индикатора
    pub fn indicator_class(&self, field: &str) -> &'static str {
        if self.is_active(field) {
            "sort-icon active"
        } else {
            "sort-icon"
        }
    }
}

/// Значение поля записи, подготовленное для сравнения
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    /// Поле отсутствует или не задано
    Missing,
    Number(f64),
    Text(String),
}

impl SortValue {
    pub fn text(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }

    /// Строка, которую нужно сравнивать как число (ID, метки времени).
    /// Пустая строка даёт отсутствующее значение, нечисловая остаётся текстом.
    pub fn numeric(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return SortValue::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => SortValue::Number(n),
            _ => SortValue::Text(value.to_string()),
        }
    }

    pub fn optional_text(value: Option<&str>) -> Self {
        value.map(SortValue::text).unwrap_or(SortValue::Missing)
    }

    pub fn optional_numeric(value: Option<&str>) -> Self {
        value.map(SortValue::numeric).unwrap_or(SortValue::Missing)
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }

    /// Сравнение по возрастанию
    pub fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            // +0.0 приводит -0.0 к 0.0: total_cmp их различает
            (SortValue::Number(a), SortValue::Number(b)) => (a + 0.0).total_cmp(&(b + 0.0)),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl<T: Into<SortValue>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(SortValue::Missing)
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Значение поля по ключу (ключ может быть составным: `parent.titleEN`).
    /// Неизвестное поле или разорванная цепочка дают [`SortValue::Missing`].
    fn sort_value(&self, field: &str) -> SortValue;
}

/// Записи без схемы: путь через точку по вложенным объектам.
/// Массивы и объекты считаются отсутствующими значениями, для них
/// нужен собственный компаратор.
impl Sortable for Value {
    fn sort_value(&self, field: &str) -> SortValue {
        let mut current = self;
        for segment in field.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => return SortValue::Missing,
            }
        }
        match current {
            Value::Number(n) => n.as_f64().map(SortValue::Number).unwrap_or(SortValue::Missing),
            Value::String(s) => SortValue::Text(s.clone()),
            Value::Bool(b) => SortValue::Number(if *b { 1.0 } else { 0.0 }),
            Value::Null | Value::Array(_) | Value::Object(_) => SortValue::Missing,
        }
    }
}

/// Собственное сравнение для поля (по возрастанию)
pub type FieldComparator<T> = fn(&T, &T) -> Ordering;

/// Компаратор для поля с учётом направления.
/// Если задан `custom`, он заменяет стандартную политику сравнения.
pub fn comparator<'a, T: Sortable + 'a>(
    order: Direction,
    field: &'a str,
    custom: Option<FieldComparator<T>>,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    move |a, b| {
        let ordering = match custom {
            Some(cmp) => cmp(a, b),
            None => a.sort_value(field).compare(&b.sort_value(field)),
        };
        order.apply(ordering)
    }
}

pub fn compare<'a, T: Sortable + 'a>(
    order: Direction,
    field: &'a str,
) -> impl Fn(&T, &T) -> Ordering + 'a {
    comparator(order, field, None)
}

/// Сортирует список по указанному полю. Возвращает новый вектор,
/// равные элементы сохраняют исходный порядок.
pub fn sort_list<T: Sortable + Clone>(records: &[T], order: Direction, field: &str) -> Vec<T> {
    let mut sorted = records.to_vec();
    sorted.sort_by(compare(order, field));
    sorted
}

/// Сортировка произвольным компаратором (по возрастанию) с учётом направления
pub fn sort_list_by<T, F>(records: &[T], order: Direction, cmp: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| order.apply(cmp(a, b)));
    sorted
}

/// Сортировка по состоянию списка; `custom`: компараторы отдельных полей
pub fn sort_by_state<T: Sortable + Clone>(
    records: &[T],
    state: &SortState,
    custom: &[(&str, FieldComparator<T>)],
) -> Vec<T> {
    let field_cmp = custom
        .iter()
        .find(|(field, _)| *field == state.field)
        .map(|(_, cmp)| *cmp);
    let field = state.field.as_str();
    sort_list_by(records, state.direction, |a, b| match field_cmp {
        Some(cmp) => cmp(a, b),
        None => a.sort_value(field).compare(&b.sort_value(field)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(records: &[Value]) -> Vec<i64> {
        records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Raw(&'static str);

    impl Sortable for Raw {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "number" => SortValue::numeric(self.0),
                "text" => SortValue::text(self.0),
                _ => SortValue::Missing,
            }
        }
    }

    #[test]
    fn test_request_sort_toggles_same_field() {
        let state = SortState::new("title");
        let next = state.request_sort("title");
        assert_eq!(next.field, "title");
        assert_eq!(next.direction, Direction::Descending);
        assert_eq!(next.request_sort("title").direction, Direction::Ascending);
        // исходное значение не изменилось
        assert_eq!(state.direction, Direction::Ascending);
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        let records = vec![json!({"id": 1, "v": 0.0}), json!({"id": 2, "v": -0.0})];
        assert_eq!(ids(&sort_list(&records, Direction::Ascending, "v")), vec![1, 2]);
        assert_eq!(ids(&sort_list(&records, Direction::Descending, "v")), vec![1, 2]);
        assert_eq!(
            SortValue::numeric("-0").compare(&SortValue::numeric("0")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_request_sort_switches_field() {
        let state = SortState {
            field: "title".into(),
            direction: Direction::Descending,
        };
        assert_eq!(state.request_sort("id"), SortState::new("id"));
    }

    #[test]
    fn test_descending_is_exact_inverse() {
        let records = vec![
            json!({"v": 1}),
            json!({"v": 2.5}),
            json!({"v": "a"}),
            json!({"v": "B"}),
            json!({"v": null}),
            json!({}),
            json!({"v": true}),
        ];
        let asc = compare::<Value>(Direction::Ascending, "v");
        let desc = compare::<Value>(Direction::Descending, "v");
        for a in &records {
            for b in &records {
                assert_eq!(desc(a, b), asc(a, b).reverse(), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let records = vec![
            json!({"id": 1, "v": "a"}),
            json!({"id": 2, "v": "a"}),
            json!({"id": 3, "v": "b"}),
        ];
        assert_eq!(ids(&sort_list(&records, Direction::Ascending, "v")), vec![1, 2, 3]);
        assert_eq!(ids(&sort_list(&records, Direction::Descending, "v")), vec![3, 1, 2]);
    }

    #[test]
    fn test_numeric_vs_lexicographic() {
        let records = vec![Raw("10"), Raw("2"), Raw("1")];

        let by_number = sort_list(&records, Direction::Ascending, "number");
        assert_eq!(by_number, vec![Raw("1"), Raw("2"), Raw("10")]);

        let by_text = sort_list(&records, Direction::Ascending, "text");
        assert_eq!(by_text, vec![Raw("1"), Raw("10"), Raw("2")]);
    }

    #[test]
    fn test_text_is_case_sensitive() {
        let records = vec![json!({"id": 1, "t": "b"}), json!({"id": 2, "t": "B"}), json!({"id": 3, "t": "a"})];
        assert_eq!(ids(&sort_list(&records, Direction::Ascending, "t")), vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_values_first_ascending_last_descending() {
        let records = vec![
            json!({"id": 1, "parent": {"title": "B"}}),
            json!({"id": 2, "parent": null}),
            json!({"id": 3, "parent": {"title": "A"}}),
            json!({"id": 4}),
        ];
        assert_eq!(
            ids(&sort_list(&records, Direction::Ascending, "parent.title")),
            vec![2, 4, 3, 1]
        );
        assert_eq!(
            ids(&sort_list(&records, Direction::Descending, "parent.title")),
            vec![1, 3, 2, 4]
        );
    }

    #[test]
    fn test_numbers_sort_before_text() {
        assert_eq!(SortValue::numeric("5").compare(&SortValue::text("5")), Ordering::Less);
        assert_eq!(SortValue::numeric(" ").compare(&SortValue::from(0)), Ordering::Less);
        assert_eq!(SortValue::numeric("abc"), SortValue::text("abc"));
        assert_eq!(SortValue::from(None::<i64>), SortValue::Missing);
    }

    #[test]
    fn test_idempotent() {
        let records = vec![json!({"id": 3}), json!({"id": 1}), json!({"id": 2})];
        let once = sort_list(&records, Direction::Descending, "id");
        let twice = sort_list(&once, Direction::Descending, "id");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_input_not_mutated() {
        let records = vec![json!({"id": 3}), json!({"id": 1}), json!({"id": 2})];
        let snapshot = records.clone();
        let _ = sort_list(&records, Direction::Ascending, "id");
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_custom_comparator_replaces_default_policy() {
        fn by_length(a: &Value, b: &Value) -> Ordering {
            let len = |v: &Value| v["tags"].as_array().map(|t| t.len()).unwrap_or(0);
            len(a).cmp(&len(b))
        }

        let records = vec![
            json!({"id": 1, "tags": ["x", "y", "z"]}),
            json!({"id": 2, "tags": []}),
            json!({"id": 3, "tags": ["x"]}),
        ];
        let mut state = SortState::new("tags");
        let custom: &[(&str, FieldComparator<Value>)] = &[("tags", by_length)];

        assert_eq!(ids(&sort_by_state(&records, &state, custom)), vec![2, 3, 1]);
        state = state.request_sort("tags");
        assert_eq!(ids(&sort_by_state(&records, &state, custom)), vec![1, 3, 2]);
    }

    #[test]
    fn test_sort_list_by() {
        let values = vec![3, 1, 2];
        assert_eq!(sort_list_by(&values, Direction::Descending, |a, b| a.cmp(b)), vec![3, 2, 1]);
    }

    #[test]
    fn test_list_view_scenario() {
        let records = vec![
            json!({"id": 3, "title": "C"}),
            json!({"id": 1, "title": "A"}),
            json!({"id": 2, "title": "B"}),
        ];
        let titles = |rows: Vec<Value>| -> Vec<String> {
            rows.iter().map(|r| r["title"].as_str().unwrap().to_string()).collect()
        };

        let state = SortState::new("id");
        assert_eq!(ids(&sort_by_state(&records, &state, &[])), vec![1, 2, 3]);

        let state = state.request_sort("title");
        assert_eq!(state, SortState::new("title"));
        assert_eq!(titles(sort_by_state(&records, &state, &[])), vec!["A", "B", "C"]);

        let state = state.request_sort("title");
        assert_eq!(state.direction, Direction::Descending);
        assert_eq!(titles(sort_by_state(&records, &state, &[])), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_indicator() {
        let state = SortState::new("id");
        assert_eq!(state.indicator("id"), " ▲");
        assert_eq!(state.request_sort("id").indicator("id"), " ▼");
        assert_eq!(state.indicator("title"), " ⇅");
        assert_eq!(state.indicator_class("title"), "sort-icon");
    }
}
