//! URL-embedded state for route segments.

use std::{fmt::Display, str::FromStr};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde::{Deserialize, Serialize};


/// Serializable state carried inside a route segment, encoded as
/// url-safe base64 over cbor. Any type used in a route path needs Display,
/// FromStr and Default; this wrapper supplies them for serde types.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut encoded = Vec::new();
        if ciborium::into_writer(self, &mut encoded).is_ok() {
            write!(f, "{}", URL_SAFE.encode(encoded))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum UrlParamParseError {
    Decode(base64::DecodeError),
    Deserialize(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "Failed to decode base64: {}", err),
            Self::Deserialize(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(UrlParamParseError::Decode)?;
        ciborium::from_reader(std::io::Cursor::new(decoded)).map_err(UrlParamParseError::Deserialize)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::search_query::SearchQuery;

    #[test]
    fn query_roundtrips_through_the_url_segment() {
        let mut query = SearchQuery::for_project("CMIP6");
        query.text_inputs = vec!["temperature".to_string()];
        query
            .active_facets
            .insert("data_node".to_string(), vec!["aims3.llnl.gov".to_string()]);

        let segment = UrlParam::from(query.clone()).to_string();
        let parsed: UrlParam<SearchQuery> = segment.parse().unwrap();
        assert_eq!(parsed.into_inner(), query);
    }

    #[test]
    fn garbage_segment_is_an_error() {
        let parsed: Result<UrlParam<SearchQuery>, _> = "not-base64!!!".parse();
        assert!(parsed.is_err());
    }
}
