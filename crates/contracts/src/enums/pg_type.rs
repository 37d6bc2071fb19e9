use serde::{Deserialize, Serialize};

/// Who a PG accepts as residents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PgType {
    Male,
    Female,
    Unisex,
}

impl PgType {
    /// Code used in the listing data and by the type selector
    pub fn code(&self) -> &'static str {
        match self {
            PgType::Male => "male",
            PgType::Female => "female",
            PgType::Unisex => "unisex",
        }
    }

    /// Human readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            PgType::Male => "Male",
            PgType::Female => "Female",
            PgType::Unisex => "Unisex",
        }
    }

    pub fn all() -> Vec<PgType> {
        vec![PgType::Male, PgType::Female, PgType::Unisex]
    }

    /// Exact code lookup. No case folding and no prefix matching.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "male" => Some(PgType::Male),
            "female" => Some(PgType::Female),
            "unisex" => Some(PgType::Unisex),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_roundtrips_all() {
        for t in PgType::all() {
            assert_eq!(PgType::from_code(t.code()), Some(t));
        }
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(PgType::from_code("Female"), None);
        assert_eq!(PgType::from_code("fem"), None);
        assert_eq!(PgType::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&PgType::Unisex).unwrap();
        assert_eq!(json, "\"unisex\"");
        let parsed: PgType = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(parsed, PgType::Female);
    }
}
