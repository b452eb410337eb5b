use serde::{Deserialize, Serialize};

/// The two directions of a time-punch event.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Direction {
    #[serde(rename = "entree")]
    Entree,
    #[serde(rename = "sortie")]
    Sortie,
}

impl Direction {
    /// Parse the `type` query parameter of a scan URL.
    /// Only the exact strings `entree` and `sortie` are accepted.
    pub fn from_param(s: &str) -> Option<Self> {
        match s {
            "entree" => Some(Self::Entree),
            "sortie" => Some(Self::Sortie),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Entree => "entree",
            Direction::Sortie => "sortie",
        }
    }

    /// Human-readable French label, as shown on the QR screen.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Entree => "Entrée",
            Direction::Sortie => "Sortie",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, Direction::Entree)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Direction::Sortie)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_exact_wire_values() {
        assert_eq!(Direction::from_param("entree"), Some(Direction::Entree));
        assert_eq!(Direction::from_param("sortie"), Some(Direction::Sortie));
        assert_eq!(Direction::from_param("depart"), None);
        assert_eq!(Direction::from_param("Entree"), None);
        assert_eq!(Direction::from_param(""), None);
    }

    #[test]
    fn serializes_to_wire_value() {
        assert_eq!(
            serde_json::to_string(&Direction::Entree).unwrap(),
            "\"entree\""
        );
        assert_eq!(
            serde_json::to_string(&Direction::Sortie).unwrap(),
            "\"sortie\""
        );
    }
}
