use std::fmt;

use serde::{Deserialize, Serialize};

/// An entity inside a [`FlatRecord`], carrying both its token span and surface text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatEntity {
    pub start_idx: usize,
    pub end_idx: usize,
    /// Upper-cased entity type.
    #[serde(rename = "type")]
    pub entity_type: String,
    /// Tokens `start_idx..=end_idx` joined by single spaces.
    pub entity: String,
}

/// One sentence of a source document, ready for training.
///
/// Field order is the on-disk key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub doc_key: String,
    /// Sentence tokens joined by single spaces.
    pub text: String,
    pub entities: Vec<FlatEntity>,
}

impl FlatRecord {
    /// Iterates over the entity types of this record, in entity order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.entity_type.as_str())
    }
}

impl fmt::Display for FlatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlatRecord({:?}, {:?}", self.doc_key, self.text)?;
        for entity in &self.entities {
            write!(f, ", {}={:?}", entity.entity_type, entity.entity)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FlatRecord {
        FlatRecord {
            doc_key: "ge/train/0001".into(),
            text: "IL-2 gene".into(),
            entities: vec![FlatEntity {
                start_idx: 0,
                end_idx: 1,
                entity_type: "DNA".into(),
                entity: "IL-2 gene".into(),
            }],
        }
    }

    #[test]
    fn serializes_with_wire_names_in_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"doc_key":"ge/train/0001","text":"IL-2 gene","entities":[{"start_idx":0,"end_idx":1,"type":"DNA","entity":"IL-2 gene"}]}"#
        );
    }

    #[test]
    fn labels_follow_entity_order() {
        let mut record = sample();
        record.entities.push(FlatEntity {
            start_idx: 0,
            end_idx: 0,
            entity_type: "PROTEIN".into(),
            entity: "IL-2".into(),
        });
        assert_eq!(record.labels().collect::<Vec<_>>(), vec!["DNA", "PROTEIN"]);
    }

    #[test]
    fn display_includes_entities() {
        let display = sample().to_string();
        assert!(display.contains("ge/train/0001"));
        assert!(display.contains("DNA=\"IL-2 gene\""));
    }
}
