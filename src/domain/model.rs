use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Numeric id of a cost center. The index file is a JSON array of these,
/// presented to the user sorted ascending.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CostCenter(pub u32);

impl fmt::Display for CostCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// One inventory row. The JSON field names are fixed by the published
/// datasets; values may arrive as strings or numbers, so every field goes
/// through the scalar deserializer. Only the equipment name is required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(rename = "Centro de Custo", default, deserialize_with = "scalar")]
    pub cost_center: String,

    #[serde(rename = "Inventarios", default, deserialize_with = "scalar")]
    pub inventory: String,

    #[serde(rename = "Equipamentos", deserialize_with = "scalar")]
    pub equipment: String,

    #[serde(rename = "Area", default, deserialize_with = "scalar")]
    pub area: String,

    #[serde(rename = "cdinventarios", default, deserialize_with = "scalar")]
    pub inventory_code: String,
}

impl InventoryItem {
    /// Case-insensitive substring match on the equipment name only.
    /// `term` must already be lowercased; the empty term matches everything.
    pub fn matches_equipment(&self, term: &str) -> bool {
        self.equipment.to_lowercase().contains(term)
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_row() {
        let json = serde_json::json!({
            "Centro de Custo": 4711,
            "Inventarios": "2024-01",
            "Equipamentos": "Compressor de Ar",
            "Area": "Manutenção",
            "cdinventarios": "INV-0042"
        });

        let item: InventoryItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.cost_center, "4711");
        assert_eq!(item.inventory, "2024-01");
        assert_eq!(item.equipment, "Compressor de Ar");
        assert_eq!(item.area, "Manutenção");
        assert_eq!(item.inventory_code, "INV-0042");
    }

    #[test]
    fn test_deserialize_missing_optional_fields() {
        let json = serde_json::json!({ "Equipamentos": "Torno CNC" });

        let item: InventoryItem = serde_json::from_value(json).unwrap();
        assert_eq!(item.equipment, "Torno CNC");
        assert_eq!(item.cost_center, "");
        assert_eq!(item.area, "");
    }

    #[test]
    fn test_deserialize_missing_equipment_fails() {
        let json = serde_json::json!({ "Centro de Custo": 1, "Area": "Oficina" });
        assert!(serde_json::from_value::<InventoryItem>(json).is_err());
    }

    #[test]
    fn test_matches_equipment_is_case_insensitive() {
        let item = InventoryItem {
            cost_center: "101".to_string(),
            inventory: String::new(),
            equipment: "Furadeira de Bancada".to_string(),
            area: String::new(),
            inventory_code: String::new(),
        };

        assert!(item.matches_equipment("furadeira"));
        assert!(item.matches_equipment("bancada"));
        assert!(item.matches_equipment(""));
        assert!(!item.matches_equipment("compressor"));
    }

    #[test]
    fn test_cost_center_ordering() {
        let mut centers = vec![CostCenter(300), CostCenter(9), CostCenter(101)];
        centers.sort();
        assert_eq!(centers, vec![CostCenter(9), CostCenter(101), CostCenter(300)]);
    }
}
