use serde::{Deserialize, Serialize};

use crate::domain::common::{HasId, Locale};
use crate::shared::timestamp::parse_millis;
use crate::shared::validation::{ValidationErrors, Validator};

/// Единица измерения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: String,
    #[serde(rename = "titleRU", default)]
    pub title_ru: String,
    #[serde(rename = "titleEN", default)]
    pub title_en: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Unit {
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

impl HasId for Unit {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitsData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(default)]
    pub units: Vec<Unit>,
}

/// Ответ запроса формы: в режиме создания `unit` отсутствует
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnitData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(default)]
    pub unit: Option<Unit>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitDto {
    pub id: Option<String>,
    #[serde(rename = "titleRU")]
    pub title_ru: String,
    #[serde(rename = "titleEN")]
    pub title_en: String,
}

impl UnitDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("titleRU", &self.title_ru, "unit.requiredTitleRU", "Name on russian is required")
            .required("titleEN", &self.title_en, "unit.requiredTitleEN", "Name on english is required")
            .finish()
    }
}

impl From<&Unit> for UnitDto {
    fn from(u: &Unit) -> Self {
        Self {
            id: Some(u.id.clone()),
            title_ru: u.title_ru.clone(),
            title_en: u.title_en.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mode_has_no_unit() {
        let data: UnitData = serde_json::from_str(r#"{"checkPermissions": true}"#).unwrap();
        assert!(data.unit.is_none());
    }

    #[test]
    fn test_dto_from_unit() {
        let unit = Unit {
            id: "4".into(),
            title_ru: "кг".into(),
            title_en: "kg".into(),
            created_at: None,
        };
        let dto = UnitDto::from(&unit);
        assert_eq!(dto.id.as_deref(), Some("4"));
        assert!(dto.validate().is_ok());

        let blank = UnitDto { title_en: " ".into(), ..dto };
        let errors = blank.validate().unwrap_err();
        assert_eq!(errors.get("titleEN").unwrap().message_id, "unit.requiredTitleEN");
    }
}
