// ============================================================
// FIELD MATCHING RULES
// ============================================================
// Declarative header-to-column binding for laptop datasets

use std::collections::HashMap;

/// Logical fields a dataset column can bind to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    TypeName,
    Inches,
    ScreenResolution,
    Cpu,
    Ram,
    Memory,
    Gpu,
    OpSys,
    Weight,
    Price,
}

/// Ordered rule table: for each logical field, the header substrings that
/// claim a column. Matching is case-insensitive "contains"; per field the
/// first header token matching any substring wins.
///
/// Overlaps are intentional and must stay: a dataset with a single "Memory"
/// column binds it to both `Ram` and `Memory`, and a "Cost" header satisfies
/// `OpSys` through the "os" substring. Changing either is a behavior change,
/// not a cleanup.
pub const FIELD_RULES: &[(Field, &[&str])] = &[
    (Field::Company, &["company", "brand", "manufacturer"]),
    (Field::TypeName, &["typename", "type", "model"]),
    (Field::Inches, &["inch", "size"]),
    (
        Field::ScreenResolution,
        &["screenresolution", "resolution", "display"],
    ),
    (Field::Cpu, &["cpu", "processor"]),
    (Field::Ram, &["ram", "memory"]),
    (Field::Memory, &["memory", "storage", "hdd", "ssd"]),
    (Field::Gpu, &["gpu", "graphics"]),
    (Field::OpSys, &["opsys", "os", "operating"]),
    (Field::Weight, &["weight", "kg"]),
    (Field::Price, &["price", "mrp", "cost", "amount"]),
];

/// Field-name -> column-index mapping derived once per ingestion call from
/// the header row. Fields without a matching token are simply absent.
#[derive(Debug)]
pub struct HeaderMap {
    bindings: HashMap<Field, usize>,
}

impl HeaderMap {
    /// Build the map from lowercased header tokens. Tokens are scanned left
    /// to right per field; blank tokens participate (they keep their column
    /// position but match nothing).
    pub fn from_headers(headers: &[String]) -> Self {
        let mut bindings = HashMap::new();

        for (field, substrings) in FIELD_RULES {
            let hit = headers
                .iter()
                .position(|token| substrings.iter().any(|s| token.contains(s)));
            if let Some(index) = hit {
                bindings.insert(*field, index);
            }
        }

        Self { bindings }
    }

    pub fn get(&self, field: Field) -> Option<usize> {
        self.bindings.get(&field).copied()
    }

    /// Company and price are mandatory; without both, ingestion aborts.
    pub fn has_required_fields(&self) -> bool {
        self.get(Field::Company).is_some() && self.get(Field::Price).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_lowercase()).collect()
    }

    #[test]
    fn test_first_matching_token_wins() {
        let map = HeaderMap::from_headers(&headers(&["brand", "company"]));
        assert_eq!(map.get(Field::Company), Some(0));
    }

    #[test]
    fn test_single_memory_column_binds_ram_and_storage() {
        let map = HeaderMap::from_headers(&headers(&["company", "memory", "price"]));
        assert_eq!(map.get(Field::Ram), Some(1));
        assert_eq!(map.get(Field::Memory), Some(1));
    }

    #[test]
    fn test_distinct_ram_and_storage_columns() {
        let map = HeaderMap::from_headers(&headers(&["company", "ram", "storage", "price"]));
        assert_eq!(map.get(Field::Ram), Some(1));
        assert_eq!(map.get(Field::Memory), Some(2));
    }

    #[test]
    fn test_cost_header_satisfies_op_sys_via_os_substring() {
        let map = HeaderMap::from_headers(&headers(&["company", "cost"]));
        assert_eq!(map.get(Field::OpSys), Some(1));
        assert_eq!(map.get(Field::Price), Some(1));
    }

    #[test]
    fn test_absent_fields_are_unbound() {
        let map = HeaderMap::from_headers(&headers(&["company", "price"]));
        assert_eq!(map.get(Field::Gpu), None);
        assert_eq!(map.get(Field::Weight), None);
        assert!(map.has_required_fields());
    }

    #[test]
    fn test_required_fields_missing() {
        assert!(!HeaderMap::from_headers(&headers(&["price", "ram"])).has_required_fields());
        assert!(!HeaderMap::from_headers(&headers(&["company", "ram"])).has_required_fields());
    }

    #[test]
    fn test_blank_tokens_keep_positions() {
        let map = HeaderMap::from_headers(&headers(&["", "company", "", "price"]));
        assert_eq!(map.get(Field::Company), Some(1));
        assert_eq!(map.get(Field::Price), Some(3));
    }
}
