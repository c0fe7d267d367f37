//! Read-only reference entities used to populate selectors.
//!
//! All of them are id/name pairs served by the backend; nothing here is
//! persisted on the client.

use crate::shared::serde_helpers;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Anything that can be rendered as an `<option>`.
pub trait SelectOption {
    fn option_value(&self) -> String;
    fn option_label(&self) -> String;
}

/// `(value, label)` tuples in the shape the `Select` widget expects.
pub fn to_options<T: SelectOption>(items: &[T]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|item| (item.option_value(), item.option_label()))
        .collect()
}

/// Agencia. Stored requests reference agencies by `id_agencia`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Agency {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_text")]
    pub id_agencia: Option<String>,
}

impl Agency {
    pub fn key(&self) -> &str {
        self.id_agencia.as_deref().unwrap_or(&self.id)
    }
}

impl SelectOption for Agency {
    fn option_value(&self) -> String {
        self.key().to_string()
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Bank {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_text")]
    pub id_banco: Option<String>,
}

impl SelectOption for Bank {
    fn option_value(&self) -> String {
        self.id.clone()
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AccountType {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_text")]
    pub id_tipo_cuenta: Option<String>,
}

impl SelectOption for AccountType {
    fn option_value(&self) -> String {
        self.id.clone()
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

/// Usuario who may pick up cash at an agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct User {
    #[serde(default, deserialize_with = "serde_helpers::text")]
    pub id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_text")]
    pub id_usuario: Option<String>,
}

impl SelectOption for User {
    fn option_value(&self) -> String {
        self.id.clone()
    }

    fn option_label(&self) -> String {
        self.name.clone()
    }
}

/// Socio: account holder that can receive internal deposits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Member {
    #[serde(default, deserialize_with = "serde_helpers::int")]
    pub id_socio: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(default, deserialize_with = "serde_helpers::opt_text")]
    pub numero_identificacion: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: Option<String>,
    #[serde(rename = "telefono", default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Member {
    /// Text placed in the search box once the member is chosen.
    pub fn search_label(&self) -> String {
        format!("{} - {}", self.id_socio, self.name)
    }
}

/// Cuenta de socio. Field names follow the core-banking service verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MemberAccount {
    #[serde(rename = "NumeroCuenta", deserialize_with = "serde_helpers::int")]
    pub number: i64,
    #[serde(rename = "Producto", default)]
    pub product: String,
    #[serde(rename = "Estado", default)]
    pub status: String,
}

impl MemberAccount {
    /// `"114A.AHORRO.DISPONIBLE"` -> `"Ahorro Disponible"`.
    pub fn product_name(&self) -> String {
        product_display_name(&self.product)
    }
}

impl SelectOption for MemberAccount {
    fn option_value(&self) -> String {
        self.number.to_string()
    }

    fn option_label(&self) -> String {
        format!("{} - {} ({})", self.number, self.product_name(), self.status)
    }
}

/// Readable product name: drops the leading product code and title-cases the rest.
pub fn product_display_name(product: &str) -> String {
    if product.is_empty() {
        return "Cuenta".to_string();
    }
    let parts: Vec<&str> = product.split('.').collect();
    if parts.len() < 2 {
        return product.to_string();
    }
    parts[1..]
        .join(" ")
        .to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Id -> name map used by the detail view to print readable names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    names: HashMap<String, String>,
}

impl Catalog {
    pub fn from_options<T: SelectOption>(items: &[T]) -> Self {
        Self {
            names: items
                .iter()
                .map(|item| (normalize_id(&item.option_value()), item.option_label()))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.names.get(&normalize_id(id)).map(String::as_str)
    }

    /// Name for `id`, or `"{prefix} {id}"` when the id is unknown.
    pub fn name_or(&self, id: &str, prefix: &str) -> String {
        match self.get(id) {
            Some(name) => name.to_string(),
            None => format!("{} {}", prefix, normalize_id(id)),
        }
    }
}

/// `" 7 "`, `"7.0"` and `"7"` address the same catalog entry.
fn normalize_id(id: &str) -> String {
    let trimmed = id.trim();
    match trimmed.parse::<f64>() {
        Ok(n) if n.fract() == 0.0 && n.is_finite() => format!("{}", n as i64),
        _ => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_display_name() {
        assert_eq!(product_display_name("114A.AHORRO.DISPONIBLE"), "Ahorro Disponible");
        assert_eq!(product_display_name("201.PLAZO FIJO"), "Plazo Fijo");
        assert_eq!(product_display_name("MONETARIA"), "MONETARIA");
        assert_eq!(product_display_name(""), "Cuenta");
    }

    #[test]
    fn test_agency_key_prefers_id_agencia() {
        let agency: Agency =
            serde_json::from_str(r#"{"id": "A-1", "nombre": "Central", "id_agencia": 12}"#).unwrap();
        assert_eq!(agency.key(), "12");
        assert_eq!(agency.option_value(), "12");

        let plain: Agency = serde_json::from_str(r#"{"id": 3, "nombre": "Norte"}"#).unwrap();
        assert_eq!(plain.key(), "3");
    }

    #[test]
    fn test_member_account_uses_backend_casing() {
        let account: MemberAccount = serde_json::from_str(
            r#"{"NumeroCuenta": "1140021", "Producto": "114A.AHORRO.DISPONIBLE", "Estado": "Activo"}"#,
        )
        .unwrap();
        assert_eq!(account.number, 1140021);
        assert_eq!(account.option_label(), "1140021 - Ahorro Disponible (Activo)");
    }

    #[test]
    fn test_catalog_fallback() {
        let banks = vec![
            Bank {
                id: "1".into(),
                name: "Banrural".into(),
                id_banco: None,
            },
            Bank {
                id: "2".into(),
                name: "BI".into(),
                id_banco: None,
            },
        ];
        let catalog = Catalog::from_options(&banks);
        assert_eq!(catalog.name_or("2", "Banco"), "BI");
        assert_eq!(catalog.name_or(" 1.0", "Banco"), "Banrural");
        assert_eq!(catalog.name_or("9", "Banco"), "Banco 9");
    }

    #[test]
    fn test_member_search_label() {
        let member = Member {
            id_socio: 5521,
            name: "Ana López".into(),
            ..Default::default()
        };
        assert_eq!(member.search_label(), "5521 - Ana López");
    }
}
