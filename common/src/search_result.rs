use serde::{Deserialize, Serialize};

use crate::{facets::ParsedFacets, search_query::SearchQuery};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSearchResults {
    pub query: SearchQuery,
    pub page: u64,
    pub num_found: u64,
    pub datasets: Vec<Dataset>,
    pub facets: ParsedFacets,
}

/// One dataset record as returned by the search API. Fields beyond `id`
/// default so partial records from older index versions still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub data_node: String,
    #[serde(default)]
    pub number_of_files: u64,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub access: Vec<String>,
    #[serde(default)]
    pub citation_url: Option<Vec<String>>,
}

impl Dataset {
    pub fn citation_link(&self) -> Option<&str> {
        self.citation_url
            .as_ref()
            .and_then(|urls| urls.first())
            .map(|url| url.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSearchResults {
    pub dataset_id: String,
    pub num_found: u64,
    pub files: Vec<DatasetFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetFile {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: Vec<String>,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub checksum: Option<String>,
}

impl DatasetFile {
    /// Plain download endpoint from the "url|mime|service" triplet list.
    pub fn http_download_url(&self) -> Option<&str> {
        self.url.iter().find_map(|entry| {
            let mut parts = entry.split('|');
            let url = parts.next()?;
            let service = parts.nth(1)?;
            (service == "HTTPServer").then_some(url)
        })
    }
}

const BYTE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human readable byte count, one decimal place past kilobytes.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, BYTE_UNITS[unit])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_download_url_picks_the_http_server_entry() {
        let file = DatasetFile {
            id: "f1".to_string(),
            title: "f1.nc".to_string(),
            url: vec![
                "gsiftp://host/f1.nc|application/gridftp|GridFTP".to_string(),
                "http://host/f1.nc|application/netcdf|HTTPServer".to_string(),
            ],
            size: 10,
            checksum: None,
        };
        assert_eq!(file.http_download_url(), Some("http://host/f1.nc"));
    }

    #[test]
    fn http_download_url_absent_when_no_http_service() {
        let file = DatasetFile {
            id: "f1".to_string(),
            title: "f1.nc".to_string(),
            url: vec!["gsiftp://host/f1.nc|application/gridftp|GridFTP".to_string()],
            size: 10,
            checksum: None,
        };
        assert_eq!(file.http_download_url(), None);
    }

    #[test]
    fn format_bytes_scales_units() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }
}
