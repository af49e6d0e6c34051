//! Dataset citation models.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub identifier: CitationIdentifier,
    #[serde(default)]
    pub creators: Vec<CitationCreator>,
    #[serde(default)]
    pub titles: Vec<String>,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub publication_year: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationIdentifier {
    pub id: String,
    #[serde(default)]
    pub identifier_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationCreator {
    pub creator_name: String,
}

impl Citation {
    /// Creators joined for one-line display.
    pub fn creators_list(&self) -> String {
        self.creators
            .iter()
            .map(|creator| creator.creator_name.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creators_join_with_semicolons() {
        let citation = Citation {
            identifier: CitationIdentifier {
                id: "10.5072/example".to_string(),
                identifier_type: "DOI".to_string(),
            },
            creators: vec![
                CitationCreator { creator_name: "Doe, Jane".to_string() },
                CitationCreator { creator_name: "Roe, Riley".to_string() },
            ],
            titles: vec!["Example dataset".to_string()],
            publisher: "Earth System Grid Federation".to_string(),
            publication_year: 2020,
        };
        assert_eq!(citation.creators_list(), "Doe, Jane; Roe, Riley");
    }
}
