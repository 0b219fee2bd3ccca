use serde::{Deserialize, Serialize};

use crate::domain::common::{HasId, Locale, LocalizedTitle};
use crate::shared::timestamp::parse_millis;
use crate::shared::validation::{ValidationErrors, Validator};

// ============================================================================
// Record
// ============================================================================

/// Категория каталога (может иметь родительскую категорию)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(rename = "titleRU", default)]
    pub title_ru: String,
    #[serde(rename = "titleEN", default)]
    pub title_en: String,
    #[serde(default)]
    pub parent: Option<LocalizedTitle>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Category {
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ru => &self.title_ru,
            Locale::En => &self.title_en,
        }
    }

    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.created_at.as_deref().and_then(parse_millis)
    }
}

impl HasId for Category {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Ответ запроса списка категорий
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Ответ запроса одной категории (для формы: список возможных родителей)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(default)]
    pub categories: Vec<LocalizedTitle>,
    #[serde(default)]
    pub category: Option<Category>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: Option<String>,
    #[serde(rename = "titleRU")]
    pub title_ru: String,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

impl CategoryDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("titleRU", &self.title_ru, "category.requiredTitleRU", "Name on russian is required")
            .required("titleEN", &self.title_en, "category.requiredTitleEN", "Name on english is required")
            .finish()
    }
}

impl From<&Category> for CategoryDto {
    fn from(c: &Category) -> Self {
        Self {
            id: Some(c.id.clone()),
            title_ru: c.title_ru.clone(),
            title_en: c.title_en.clone(),
            parent_id: c.parent.as_ref().map(|p| p.id.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_list() {
        let data: CategoriesData = serde_json::from_str(
            r#"{
                "checkPermissions": true,
                "categories": [
                    {"id": "1", "titleRU": "Насосы", "titleEN": "Pumps", "parent": null, "createdAt": "1571234567890"},
                    {"id": "2", "titleRU": "Дренаж", "titleEN": "Drainage", "parent": {"id": "1", "titleRU": "Насосы", "titleEN": "Pumps"}, "createdAt": "1571234567999"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(data.check_permissions, Some(true));
        assert_eq!(data.categories.len(), 2);
        assert!(data.categories[0].parent.is_none());
        assert_eq!(data.categories[1].parent.as_ref().unwrap().title(Locale::En), "Pumps");
        assert_eq!(data.categories[1].title(Locale::Ru), "Дренаж");
        assert!(data.categories[0].created_at_utc().is_some());
    }

    #[test]
    fn test_validate() {
        let mut dto = CategoryDto::default();
        let errors = dto.validate().unwrap_err();
        assert_eq!(errors.len(), 2);

        dto.title_ru = "Насосы".into();
        dto.title_en = "Pumps".into();
        assert!(dto.validate().is_ok());
    }
}
