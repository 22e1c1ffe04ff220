use serde::{Deserialize, Serialize};
use std::fmt;

/// Audience a summary or answer is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Doctor,
    Patient,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Doctor => "doctor",
            ViewType::Patient => "patient",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_type_wire_format() {
        let view: ViewType = serde_json::from_str("\"doctor\"").unwrap();
        assert_eq!(view, ViewType::Doctor);
        assert_eq!(serde_json::to_string(&ViewType::Patient).unwrap(), "\"patient\"");
        assert!(serde_json::from_str::<ViewType>("\"nurse\"").is_err());
    }
}
