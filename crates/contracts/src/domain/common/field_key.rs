use super::Locale;

/// Ключ поля записи, по которому сортируется список.
///
/// Может быть составным (`parent.titleEN`): каждый сегмент через точку
/// указывает на поле вложенной связи.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Локализованное поле: `localized("title", Locale::En)` -> `titleEN`
    pub fn localized(base: &str, locale: Locale) -> Self {
        Self(format!("{}{}", base, locale.suffix()))
    }

    /// Поле связанной записи: `nested("parent", "titleEN")` -> `parent.titleEN`
    pub fn nested(relation: &str, key: &str) -> Self {
        Self(format!("{}.{}", relation, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Сегменты пути
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_and_nested() {
        let title = FieldKey::localized("title", Locale::Ru);
        assert_eq!(title.as_str(), "titleRU");

        let parent = FieldKey::nested("parent", title.as_str());
        assert_eq!(parent.as_str(), "parent.titleRU");
        assert_eq!(parent.segments().collect::<Vec<_>>(), vec!["parent", "titleRU"]);
    }
}
