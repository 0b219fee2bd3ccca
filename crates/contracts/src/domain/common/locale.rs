use serde::{Deserialize, Serialize};

/// Язык интерфейса. Определяет суффикс локализованных полей (`titleRU`, `titleEN`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "ru")]
    Ru,
    #[default]
    #[serde(rename = "en")]
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
        }
    }

    /// Суффикс поля в схеме API
    pub fn suffix(&self) -> &'static str {
        match self {
            Locale::Ru => "RU",
            Locale::En => "EN",
        }
    }

    /// Разбор кода языка браузера ("ru-RU", "en-US", "ru")
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("ru") {
            Locale::Ru
        } else {
            Locale::En
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("ru-RU"), Locale::Ru);
        assert_eq!(Locale::from_code("RU"), Locale::Ru);
        assert_eq!(Locale::from_code("en_GB"), Locale::En);
        assert_eq!(Locale::from_code("de"), Locale::En);
        assert_eq!(Locale::from_code(""), Locale::En);
    }

    #[test]
    fn test_suffix() {
        assert_eq!(Locale::Ru.suffix(), "RU");
        assert_eq!(Locale::En.suffix(), "EN");
    }
}
