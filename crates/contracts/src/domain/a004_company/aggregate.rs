use serde::{Deserialize, Serialize};

use crate::domain::common::HasId;
use crate::shared::timestamp::parse_millis;
use crate::shared::validation::{ValidationErrors, Validator};

/// Пользователь-клиент, за которым закреплена компания
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRef {
    pub id: String,
    #[serde(default)]
    pub email: String,
}

/// Компания клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub user: Option<ClientRef>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

impl Company {
    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.created_at.as_deref().and_then(parse_millis)
    }
}

impl HasId for Company {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompaniesData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(default)]
    pub companies: Vec<Company>,
}

/// Ответ запроса формы компании: список клиентов для выбора владельца
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(default)]
    pub clients: Vec<ClientRef>,
    #[serde(default)]
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDto {
    pub id: Option<String>,
    pub name: String,
    pub country: String,
    pub city: String,
    pub address: String,
    pub position: String,
    /// 0, если клиент не выбран
    #[serde(rename = "userId")]
    pub user_id: i64,
}

impl CompanyDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name, "company.requiredName", "Name is required")
            .required("country", &self.country, "company.requiredCountry", "Country is required")
            .required("city", &self.city, "company.requiredCity", "City is required")
            .required("address", &self.address, "company.requiredAddress", "Address is required")
            .required("position", &self.position, "company.requiredPosition", "Position is required")
            .min("userId", self.user_id, 1, "company.requiredClient", "Client is required")
            .finish()
    }

    /// Текстовое поле формы по ключу; для неизвестного ключа пустая строка
    pub fn text(&self, field: &str) -> &str {
        match field {
            "name" => &self.name,
            "country" => &self.country,
            "city" => &self.city,
            "address" => &self.address,
            "position" => &self.position,
            _ => "",
        }
    }

    pub fn set_text(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.name,
            "country" => &mut self.country,
            "city" => &mut self.city,
            "address" => &mut self.address,
            "position" => &mut self.position,
            _ => return,
        };
        *slot = value;
    }
}

impl From<&Company> for CompanyDto {
    fn from(c: &Company) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            country: c.country.clone(),
            city: c.city.clone(),
            address: c.address.clone(),
            position: c.position.clone(),
            user_id: c
                .user
                .as_ref()
                .and_then(|u| u.id.parse().ok())
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = CompanyDto::default().validate().unwrap_err();
        let ids: Vec<&str> = errors.iter().map(|e| e.message_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "company.requiredName",
                "company.requiredCountry",
                "company.requiredCity",
                "company.requiredAddress",
                "company.requiredPosition",
                "company.requiredClient",
            ]
        );
    }

    #[test]
    fn test_dto_from_company() {
        let company: Company = serde_json::from_str(
            r#"{"id": "2", "name": "Agro", "country": "RU", "city": "Kazan",
                "address": "Lenina 1", "position": "CEO",
                "user": {"id": "15", "email": "a@b.c"}, "createdAt": "1571234567890"}"#,
        )
        .unwrap();
        let dto = CompanyDto::from(&company);
        assert_eq!(dto.user_id, 15);
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_text_fields_by_key() {
        let mut dto = CompanyDto::default();
        dto.set_text("city", "Kazan".into());
        dto.set_text("unknown", "ignored".into());

        assert_eq!(dto.city, "Kazan");
        assert_eq!(dto.text("city"), "Kazan");
        assert_eq!(dto.text("unknown"), "");
    }
}
