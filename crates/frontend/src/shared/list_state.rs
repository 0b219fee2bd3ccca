use contracts::domain::common::{HasId, Locale};
use contracts::shared::graphql::{ApiError, DeletePayload};
use leptos::prelude::*;

use crate::shared::i18n::{message, t};
use crate::shared::list_utils::{sort_by_state, FieldComparator, SortState, Sortable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnackbarVariation {
    Success,
    Error,
}

impl SnackbarVariation {
    pub fn class(self) -> &'static str {
        match self {
            SnackbarVariation::Success => "snackbar snackbar--success",
            SnackbarVariation::Error => "snackbar snackbar--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snackbar {
    pub open: bool,
    pub message: String,
    pub variation: SnackbarVariation,
}

impl Snackbar {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            variation: SnackbarVariation::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            open: true,
            message: message.into(),
            variation: SnackbarVariation::Error,
        }
    }
}

impl Default for Snackbar {
    fn default() -> Self {
        Self {
            open: false,
            message: String::new(),
            variation: SnackbarVariation::Success,
        }
    }
}

/// Состояние списочной формы: сортировка, удалённые за сессию записи, уведомление
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub sort: SortState,
    /// ID записей, удалённых в этой форме; скрываются поверх загруженного списка
    pub deleted: Vec<String>,
    pub snackbar: Snackbar,
}

impl ListState {
    pub fn new(default_sort_field: &str) -> Self {
        Self {
            sort: SortState::new(default_sort_field),
            deleted: Vec::new(),
            snackbar: Snackbar::default(),
        }
    }

    pub fn request_sort(&mut self, field: &str) {
        self.sort = self.sort.request_sort(field);
    }

    pub fn mark_deleted(&mut self, id: &str) {
        if !self.is_deleted(id) {
            self.deleted.push(id.to_string());
        }
    }

    pub fn is_deleted(&self, id: &str) -> bool {
        self.deleted.iter().any(|d| d == id)
    }

    /// Строки для отображения: отсортированный список без удалённых записей
    pub fn visible_rows<T>(&self, records: &[T], custom: &[(&str, FieldComparator<T>)]) -> Vec<T>
    where
        T: Sortable + HasId + Clone,
    {
        sort_by_state(records, &self.sort, custom)
            .into_iter()
            .filter(|r| !self.is_deleted(r.id()))
            .collect()
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.snackbar = Snackbar::success(message);
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.snackbar = Snackbar::error(message);
    }

    pub fn close_snackbar(&mut self) {
        self.snackbar.open = false;
    }

    /// Результат мутации удаления: скрыть запись и показать уведомление
    pub fn apply_delete_result(
        &mut self,
        locale: Locale,
        id: &str,
        result: Result<DeletePayload, ApiError>,
    ) {
        match result {
            Ok(payload) if payload.status => {
                self.mark_deleted(id);
                self.show_success(t(locale, "app.deletedSuccessfully"));
            }
            Ok(payload) => {
                let message_id = payload.message.as_deref().unwrap_or("app.error");
                self.show_error(message(locale, message_id, "Error occurred"));
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }
}

pub fn create_state(default_sort_field: &str) -> RwSignal<ListState> {
    RwSignal::new(ListState::new(default_sort_field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{Direction, SortValue};

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        title: &'static str,
    }

    impl HasId for Row {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl Sortable for Row {
        fn sort_value(&self, field: &str) -> SortValue {
            match field {
                "id" => SortValue::numeric(&self.id),
                "title" => SortValue::text(self.title),
                _ => SortValue::Missing,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { id: "10".into(), title: "C" },
            Row { id: "2".into(), title: "A" },
            Row { id: "1".into(), title: "B" },
        ]
    }

    fn visible_ids(state: &ListState, records: &[Row]) -> Vec<String> {
        state.visible_rows(records, &[]).into_iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_default_sort_by_numeric_id() {
        let state = ListState::new("id");
        assert_eq!(visible_ids(&state, &rows()), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_deleted_rows_hidden_without_touching_source() {
        let records = rows();
        let mut state = ListState::new("id");
        state.mark_deleted("2");
        state.mark_deleted("2");

        assert_eq!(state.deleted, vec!["2".to_string()]);
        assert_eq!(visible_ids(&state, &records), vec!["1", "10"]);
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_request_sort_replaces_state() {
        let mut state = ListState::new("id");
        state.request_sort("title");
        assert_eq!(visible_ids(&state, &rows()), vec!["2", "1", "10"]);

        state.request_sort("title");
        assert_eq!(state.sort.direction, Direction::Descending);
        assert_eq!(visible_ids(&state, &rows()), vec!["10", "1", "2"]);
    }

    #[test]
    fn test_snackbar() {
        let mut state = ListState::new("id");
        state.show_error("boom");
        assert!(state.snackbar.open);
        assert_eq!(state.snackbar.variation, SnackbarVariation::Error);

        state.close_snackbar();
        assert!(!state.snackbar.open);
        assert_eq!(state.snackbar.message, "boom");

        state.show_success("ok");
        assert_eq!(state.snackbar.variation, SnackbarVariation::Success);
    }

    #[test]
    fn test_apply_delete_result() {
        let mut state = ListState::new("id");

        let ok = DeletePayload { status: true, message: None };
        state.apply_delete_result(Locale::En, "2", Ok(ok));
        assert!(state.is_deleted("2"));
        assert_eq!(state.snackbar.message, "Deleted successfully");

        let refused = DeletePayload {
            status: false,
            message: Some("category.hasChildren".into()),
        };
        state.apply_delete_result(Locale::En, "1", Ok(refused));
        assert!(!state.is_deleted("1"));
        assert_eq!(state.snackbar.variation, SnackbarVariation::Error);
        assert_eq!(state.snackbar.message, "Error occurred");

        state.apply_delete_result(Locale::Ru, "3", Err(ApiError::PermissionDenied));
        assert!(!state.is_deleted("3"));
        assert_eq!(state.snackbar.message, "access denied");
    }
}
