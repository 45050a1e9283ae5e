// src/config/item.rs
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

// Known field keys, as they appear in the catalog data
pub const CPU: &str = "cpu";
pub const RAM: &str = "ram";
pub const SSD: &str = "ssd";
pub const SCREEN: &str = "tela";
pub const GPU: &str = "gpu";
pub const OS: &str = "so";
pub const PROS: &str = "positivos";
pub const CONS: &str = "negativos";
pub const DESCRIPTION: &str = "descricao";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{}", n),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ItemId {
    fn from(n: i64) -> Self {
        ItemId::Number(n)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId::Text(s.to_string())
    }
}

/// One catalog entry.
///
/// Identity, name, profiles and image are typed; every other key of the
/// source object lands in `fields` untouched so the comparison can union
/// whatever attributes the records carry. Only `id` is required: a missing or
/// oddly typed name, profile list or image renders blank instead of failing
/// the whole catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    #[serde(rename = "nome", alias = "name", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(
        rename = "uso_indicado",
        alias = "recommendedProfiles",
        default,
        deserialize_with = "lenient_list"
    )]
    pub recommended_profiles: Vec<String>,
    #[serde(rename = "imagem", alias = "imageRef", default, deserialize_with = "lenient_optional_text")]
    pub image_ref: Option<String>,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl ItemRecord {
    /// Display text for a field, `None` when absent, null or empty.
    pub fn field_text(&self, key: &str) -> Option<String> {
        self.fields.get(key).and_then(value_text)
    }

    pub fn cpu(&self) -> Option<String> {
        self.field_text(CPU)
    }

    pub fn ram(&self) -> Option<String> {
        self.field_text(RAM)
    }

    pub fn ssd(&self) -> Option<String> {
        self.field_text(SSD)
    }

    pub fn screen(&self) -> Option<String> {
        self.field_text(SCREEN)
    }

    pub fn gpu(&self) -> Option<String> {
        self.field_text(GPU)
    }

    pub fn os(&self) -> Option<String> {
        self.field_text(OS)
    }

    pub fn has_profile_matching(&self, needle_lower: &str) -> bool {
        self.recommended_profiles
            .iter()
            .any(|profile| profile.to_lowercase().contains(needle_lower))
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_optional_text(deserializer)?.unwrap_or_default())
}

fn lenient_optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(value_text(&Value::deserialize(deserializer)?))
}

// A lone string counts as a one-entry list
fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let labels = match Value::deserialize(deserializer)? {
        Value::Array(values) => values.iter().filter_map(value_text).collect(),
        other => value_text(&other).into_iter().collect(),
    };
    Ok(labels)
}

fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(values) => values
            .iter()
            .filter_map(value_text)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    };

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_keys_are_typed() {
        let item: ItemRecord = serde_json::from_value(json!({
            "id": 7,
            "nome": "Aspire 5",
            "cpu": "Ryzen 5",
            "uso_indicado": ["Estudo", "Trabalho"],
            "imagem": "img/aspire.png"
        }))
        .unwrap();

        assert_eq!(item.id, ItemId::Number(7));
        assert_eq!(item.name, "Aspire 5");
        assert_eq!(item.recommended_profiles, vec!["Estudo", "Trabalho"]);
        assert_eq!(item.image_ref.as_deref(), Some("img/aspire.png"));
        assert_eq!(item.fields.keys().collect::<Vec<_>>(), vec!["cpu"]);
        assert_eq!(item.cpu().as_deref(), Some("Ryzen 5"));
    }

    #[test]
    fn test_english_aliases() {
        let item: ItemRecord = serde_json::from_value(json!({
            "id": "nb-1",
            "name": "A",
            "recommendedProfiles": ["Gamer"]
        }))
        .unwrap();

        assert_eq!(item.id, ItemId::from("nb-1"));
        assert_eq!(item.name, "A");
        assert_eq!(item.recommended_profiles, vec!["Gamer"]);
        assert!(item.image_ref.is_none());
    }

    #[test]
    fn test_field_text_formats_values() {
        let item: ItemRecord = serde_json::from_value(json!({
            "id": 1,
            "nome": "A",
            "ram": 16,
            "so": "",
            "positivos": ["Leve", "Bateria"],
            "gpu": null
        }))
        .unwrap();

        assert_eq!(item.ram().as_deref(), Some("16"));
        assert_eq!(item.os(), None);
        assert_eq!(item.gpu(), None);
        assert_eq!(item.field_text(PROS).as_deref(), Some("Leve, Bateria"));
        assert_eq!(item.field_text("missing"), None);
    }

    #[test]
    fn test_malformed_known_fields_render_blank() {
        let missing: ItemRecord = serde_json::from_value(json!({"id": 2, "cpu": "i7"})).unwrap();
        assert_eq!(missing.name, "");
        assert!(missing.recommended_profiles.is_empty());
        assert!(missing.image_ref.is_none());

        let odd: ItemRecord = serde_json::from_value(json!({
            "id": 3,
            "nome": 5,
            "uso_indicado": "Jogos",
            "imagem": null
        }))
        .unwrap();
        assert_eq!(odd.name, "5");
        assert_eq!(odd.recommended_profiles, vec!["Jogos"]);
        assert!(odd.image_ref.is_none());

        let null_name: ItemRecord =
            serde_json::from_value(json!({"id": 4, "nome": null, "uso_indicado": null})).unwrap();
        assert_eq!(null_name.name, "");
        assert!(null_name.recommended_profiles.is_empty());
    }

    #[test]
    fn test_profile_match_is_substring() {
        let item: ItemRecord = serde_json::from_value(json!({
            "id": 1,
            "nome": "A",
            "uso_indicado": ["Gamer"]
        }))
        .unwrap();

        assert!(item.has_profile_matching("gam"));
        assert!(!item.has_profile_matching("estudo"));
    }
}
