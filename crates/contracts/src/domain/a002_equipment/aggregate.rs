use serde::{Deserialize, Serialize};

use crate::domain::common::{HasId, Locale, LocalizedTitle};
use crate::shared::timestamp::parse_millis;
use crate::shared::validation::{ValidationErrors, Validator};

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamValue {
    #[serde(rename = "paramId")]
    pub param_id: String,
    pub value: String,
}

/// Элемент комплекта: другое оборудование в указанном количестве
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kit {
    pub id: String,
    pub quantity: i64,
    pub child: Option<LocalizedTitle>,
}

/// Единица оборудования каталога
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    #[serde(rename = "titleRU", default)]
    pub title_ru: String,
    #[serde(rename = "titleEN", default)]
    pub title_en: String,
    #[serde(rename = "vendorCode", default)]
    pub vendor_code: Option<i64>,
    #[serde(default)]
    pub code: String,
    #[serde(rename = "basePrice", default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub margin: Option<i64>,
    #[serde(rename = "priceType", default)]
    pub price_type: String,
    #[serde(default)]
    pub groups: Vec<GroupRef>,
    #[serde(rename = "paramValues", default)]
    pub param_values: Vec<ParamValue>,
    #[serde(default)]
    pub currency: Option<Currency>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub kits: Vec<Kit>,
}

impl Equipment {
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

impl HasId for Equipment {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EquipmentListData {
    #[serde(rename = "checkPermissions", default)]
    pub check_permissions: Option<bool>,
    #[serde(rename = "equipments", alias = "equipment", default)]
    pub items: Vec<Equipment>,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Значение параметра в переменных мутации (`EquipmentParam`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentParamInput {
    #[serde(rename = "paramId")]
    pub param_id: i64,
    pub value: String,
}

/// Элемент комплекта в переменных мутации (`EquipmentKit`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentKitInput {
    #[serde(rename = "childId")]
    pub child_id: i64,
    pub quantity: i64,
}

/// Переменные мутаций addEquipment / updateEquipment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "titleRU")]
    pub title_ru: String,
    #[serde(rename = "titleEN")]
    pub title_en: String,
    #[serde(rename = "vendorCode")]
    pub vendor_code: i64,
    pub code: String,
    #[serde(rename = "currencyId")]
    pub currency_id: i64,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    pub margin: Option<i64>,
    #[serde(rename = "priceType")]
    pub price_type: String,
    pub groups: Vec<i64>,
    pub params: Vec<EquipmentParamInput>,
    pub kits: Vec<EquipmentKitInput>,
}

impl EquipmentDto {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("titleRU", &self.title_ru, "equipment.requiredTitleRU", "Name on russian is required")
            .required("titleEN", &self.title_en, "equipment.requiredTitleEN", "Name on english is required")
            .min("vendorCode", self.vendor_code, 1, "equipment.requiredVendorCode", "Vendor code is required")
            .required("code", &self.code, "equipment.requiredCode", "Code is required")
            .min("currencyId", self.currency_id, 1, "equipment.requiredCurrency", "Currency is required")
            .min("basePrice", self.base_price, 0.0, "equipment.negativePrice", "Price can not be negative")
            .required("priceType", &self.price_type, "equipment.requiredPriceType", "Price type is required")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> EquipmentDto {
        EquipmentDto {
            id: None,
            title_ru: "Насос".into(),
            title_en: "Pump".into(),
            vendor_code: 1001,
            code: "P-1".into(),
            currency_id: 1,
            base_price: 120.5,
            margin: Some(15),
            price_type: "retail".into(),
            groups: vec![3],
            params: vec![],
            kits: vec![EquipmentKitInput { child_id: 5, quantity: 2 }],
        }
    }

    #[test]
    fn test_validate() {
        assert!(valid_dto().validate().is_ok());

        let dto = EquipmentDto {
            vendor_code: 0,
            base_price: -1.0,
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["vendorCode", "basePrice"]);
    }

    #[test]
    fn test_dto_variables_omit_id_on_create() {
        let json = serde_json::to_value(valid_dto()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["vendorCode"], 1001);
        assert_eq!(json["kits"][0]["childId"], 5);
    }

    #[test]
    fn test_deserialize_record() {
        let item: Equipment = serde_json::from_str(
            r#"{
                "id": "12", "titleRU": "Насос", "titleEN": "Pump", "vendorCode": 1001,
                "code": "P-1", "basePrice": 99.9, "margin": null, "priceType": "retail",
                "groups": [{"id": "3"}], "paramValues": [{"paramId": "1", "value": "220V"}],
                "currency": {"id": "1", "title": "USD"}, "createdAt": "1571234567890",
                "kits": [{"id": "8", "quantity": 2, "child": {"id": "5", "titleRU": "Шланг", "titleEN": "Hose"}}]
            }"#,
        )
        .unwrap();
        assert_eq!(item.currency.as_ref().unwrap().title, "USD");
        assert_eq!(item.kits[0].child.as_ref().unwrap().title(Locale::En), "Hose");
        assert_eq!(item.margin, None);
    }
}
