//! Обработка результата сохранения формы, общая для всех форм редактирования.

use contracts::domain::common::Locale;
use contracts::shared::graphql::{ApiError, MutationOutcome};
use contracts::shared::validation::FieldError;

use crate::shared::i18n::message;

/// Что форма делает после ответа на мутацию сохранения
#[derive(Debug, Clone, PartialEq)]
pub enum SaveResult<T> {
    /// Запись создана: переход на страницу новой записи
    Created(String),
    /// Запись обновлена: форма перечитывается, показывается уведомление
    Updated(T),
    /// Сервер отклонил значение поля
    FieldRejected(FieldError),
    /// Ошибка без привязки к полю: текст для уведомления
    Failed(String),
}

pub fn route_save_result<T>(
    locale: Locale,
    id_of: impl Fn(&T) -> String,
    is_new: bool,
    result: Result<MutationOutcome<T>, ApiError>,
) -> SaveResult<T> {
    match result {
        Ok(MutationOutcome::Saved(saved)) if is_new => SaveResult::Created(id_of(&saved)),
        Ok(MutationOutcome::Saved(saved)) => SaveResult::Updated(saved),
        Ok(MutationOutcome::Rejected { field: Some(field), message: message_id })
            if !field.is_empty() =>
        {
            SaveResult::FieldRejected(FieldError::new(field, message_id, "Error"))
        }
        Ok(MutationOutcome::Rejected { message: message_id, .. }) => {
            SaveResult::Failed(message(locale, &message_id, "Error occurred"))
        }
        Err(e) => SaveResult::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_unit::aggregate::Unit;

    fn unit() -> Unit {
        Unit {
            id: "7".into(),
            title_ru: "шт".into(),
            title_en: "pcs".into(),
            created_at: None,
        }
    }

    fn route(is_new: bool, result: Result<MutationOutcome<Unit>, ApiError>) -> SaveResult<Unit> {
        route_save_result(Locale::En, |u: &Unit| u.id.clone(), is_new, result)
    }

    #[test]
    fn test_saved_new_record_navigates() {
        assert_eq!(
            route(true, Ok(MutationOutcome::Saved(unit()))),
            SaveResult::Created("7".into())
        );
    }

    #[test]
    fn test_saved_existing_record_updates_form() {
        assert_eq!(route(false, Ok(MutationOutcome::Saved(unit()))), SaveResult::Updated(unit()));
    }

    #[test]
    fn test_rejection_with_field_becomes_field_error() {
        let outcome = MutationOutcome::Rejected {
            field: Some("titleEN".into()),
            message: "unit.requiredTitleEN".into(),
        };
        match route(false, Ok(outcome)) {
            SaveResult::FieldRejected(error) => {
                assert_eq!(error.field, "titleEN");
                assert_eq!(error.message_id, "unit.requiredTitleEN");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_rejection_without_field_becomes_snackbar_text() {
        let known = MutationOutcome::Rejected {
            field: None,
            message: "app.accessDenied".into(),
        };
        assert_eq!(route(true, Ok(known)), SaveResult::Failed("Access denied".into()));

        let unknown = MutationOutcome::Rejected {
            field: Some(String::new()),
            message: "unit.somethingElse".into(),
        };
        assert_eq!(route(true, Ok(unknown)), SaveResult::Failed("Error occurred".into()));
    }

    #[test]
    fn test_transport_error_becomes_snackbar_text() {
        assert_eq!(
            route(false, Err(ApiError::PermissionDenied)),
            SaveResult::Failed("access denied".into())
        );
    }
}
