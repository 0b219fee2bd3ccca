//! Локализованные сообщения интерфейса.
//!
//! Неизвестный идентификатор (например, код ошибки от сервера) заменяется
//! текстом по умолчанию, переданным вызывающим кодом.

use contracts::domain::common::Locale;
use contracts::shared::validation::FieldError;
use leptos::prelude::*;

/// (id, en, ru)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("app.save", "Save", "Сохранить"),
    ("app.cancel", "Cancel", "Отмена"),
    ("app.add", "Add", "Добавить"),
    ("app.create", "Create", "Создать"),
    ("app.back", "Back", "Назад"),
    ("app.edit", "Edit", "Изменить"),
    ("app.delete", "Delete", "Удалить"),
    ("app.refresh", "Refresh", "Обновить"),
    ("app.no", "No", "Нет"),
    ("app.empty", "Nothing here yet", "Записей нет"),
    ("app.loading", "Loading...", "Загрузка..."),
    ("app.error", "Error occurred", "Произошла ошибка"),
    ("app.accessDenied", "Access denied", "Доступ запрещён"),
    ("app.confirmDelete", "Delete this record?", "Удалить запись?"),
    ("app.deletedSuccessfully", "Deleted successfully", "Успешно удалено"),
    ("app.updatedSuccessfully", "Updated successfully", "Успешно обновлено"),
    ("app.createdAt", "Created at", "Создано"),
    ("app.notFound", "Page not found", "Страница не найдена"),
    ("app.title", "Catalog admin", "Администрирование каталога"),
    ("app.toggleNavigation", "Toggle navigation", "Показать/скрыть навигацию"),
    ("categories.title", "Categories", "Категории"),
    ("categories.name", "Title", "Наименование"),
    ("categories.parent", "Parent category", "Родительская категория"),
    ("category.create", "Create category", "Новая категория"),
    ("category.update", "Update category", "Редактирование категории"),
    ("category.titleRU", "Name on russian", "Наименование на русском"),
    ("category.titleEN", "Name on english", "Наименование на английском"),
    ("category.requiredTitleRU", "Name on russian is required", "Введите наименование на русском"),
    ("category.requiredTitleEN", "Name on english is required", "Введите наименование на английском"),
    ("equipment.title", "Equipment", "Оборудование"),
    ("equipment.name", "Title", "Наименование"),
    ("equipment.vendorCode", "Vendor code", "Артикул"),
    ("equipment.code", "Code", "Код"),
    ("equipment.basePrice", "Base price", "Базовая цена"),
    ("equipment.currency", "Currency", "Валюта"),
    ("equipment.kits", "Kits", "Комплекты"),
    ("units.title", "Units", "Единицы измерения"),
    ("units.name", "Title", "Наименование"),
    ("unit.create", "Create unit", "Новая единица измерения"),
    ("unit.update", "Update unit", "Редактирование единицы измерения"),
    ("unit.titleRU", "Name on russian", "Наименование на русском"),
    ("unit.titleEN", "Name on english", "Наименование на английском"),
    ("unit.requiredTitleRU", "Name on russian is required", "Введите наименование на русском"),
    ("unit.requiredTitleEN", "Name on english is required", "Введите наименование на английском"),
    ("companies.title", "Companies", "Компании"),
    ("company.create", "Create company", "Новая компания"),
    ("company.update", "Update company", "Редактирование компании"),
    ("company.name", "Name", "Наименование"),
    ("company.country", "Country", "Страна"),
    ("company.city", "City", "Город"),
    ("company.address", "Address", "Адрес"),
    ("company.position", "Position", "Должность"),
    ("company.client", "Client", "Клиент"),
    ("company.requiredName", "Name is required", "Введите наименование"),
    ("company.requiredCountry", "Country is required", "Введите страну"),
    ("company.requiredCity", "City is required", "Введите город"),
    ("company.requiredAddress", "Address is required", "Введите адрес"),
    ("company.requiredPosition", "Position is required", "Введите должность"),
    ("company.requiredClient", "Client is required", "Выберите клиента"),
];

pub fn lookup(locale: Locale, id: &str) -> Option<&'static str> {
    MESSAGES
        .iter()
        .find(|(key, _, _)| *key == id)
        .map(|(_, en, ru)| match locale {
            Locale::En => *en,
            Locale::Ru => *ru,
        })
}

/// Сообщение по ID; неизвестный ID заменяется текстом `default`
pub fn message(locale: Locale, id: &str, default: &str) -> String {
    lookup(locale, id).unwrap_or(default).to_string()
}

/// Сообщение по ID, известному интерфейсу
pub fn t(locale: Locale, id: &str) -> String {
    lookup(locale, id).map(str::to_string).unwrap_or_else(|| id.to_string())
}

pub fn field_error_text(locale: Locale, error: &FieldError) -> String {
    message(locale, &error.message_id, &error.default_message)
}

/// Глобальное состояние приложения: язык интерфейса и видимость навигации
#[derive(Clone, Copy)]
pub struct AppContext {
    pub locale: RwSignal<Locale>,
    pub sidebar_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwSignal::new(locale),
            sidebar_open: RwSignal::new(true),
        }
    }

    pub fn set_locale(&self, locale: Locale) {
        log::debug!("locale: {}", locale);
        self.locale.set(locale);
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }
}

/// Язык браузера, если доступен
pub fn browser_locale() -> Locale {
    web_sys::window()
        .and_then(|w| w.navigator().language())
        .map(|code| Locale::from_code(&code))
        .unwrap_or_default()
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext not found in context")
}

pub fn use_locale() -> Signal<Locale> {
    let ctx = use_app_context();
    Signal::derive(move || ctx.locale.get())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_locale() {
        assert_eq!(t(Locale::En, "app.save"), "Save");
        assert_eq!(t(Locale::Ru, "app.save"), "Сохранить");
        assert_eq!(t(Locale::En, "nope.unknown"), "nope.unknown");
    }

    #[test]
    fn test_server_message_falls_back_to_default() {
        let error = FieldError::new("name", "company.nameExists", "Error");
        assert_eq!(field_error_text(Locale::Ru, &error), "Error");

        let known = FieldError::new("name", "company.requiredName", "Name is required");
        assert_eq!(field_error_text(Locale::Ru, &known), "Введите наименование");
    }

    #[test]
    fn test_message_ids_unique() {
        for (i, (id, _, _)) in MESSAGES.iter().enumerate() {
            assert!(
                MESSAGES[i + 1..].iter().all(|(other, _, _)| other != id),
                "duplicate message id {id}"
            );
        }
    }
}
