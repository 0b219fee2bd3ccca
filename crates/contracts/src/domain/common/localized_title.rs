use serde::{Deserialize, Serialize};

use super::{HasId, Locale};

/// Краткая ссылка на запись с двуязычным наименованием
/// (родительская категория, элемент комплекта и т.п.)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedTitle {
    pub id: String,
    #[serde(rename = "titleRU", default)]
    pub title_ru: String,
    #[serde(rename = "titleEN", default)]
    pub title_en: String,
}

impl LocalizedTitle {
    pub fn title(&self, locale: Locale) -> &str {
        match locale {
            Locale::Ru => &self.title_ru,
            Locale::En => &self.title_en,
        }
    }

    /// Значение поля по ключу схемы API (`id`, `titleRU`, `titleEN`)
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "id" => Some(&self.id),
            "titleRU" => Some(&self.title_ru),
            "titleEN" => Some(&self.title_en),
            _ => None,
        }
    }
}

impl HasId for LocalizedTitle {
    fn id(&self) -> &str {
        &self.id
    }
}
