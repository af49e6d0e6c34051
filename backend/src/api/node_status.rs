//! Data node health endpoint.

use common::node_status::{NodeStatus, NodeStatusArray};
use serde::{Deserialize, Serialize};

use crate::http_utils::{api_routes::ApiRoutes, json_fetch::get_json};


#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStatusEnvelope {
    data: RawStatusData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStatusData {
    result: Vec<RawStatusResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStatusResult {
    metric: RawStatusMetric,
    /// Sample pair: epoch seconds plus "1"/"0" for up/down.
    value: (f64, String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawStatusMetric {
    instance: String,
}

pub async fn fetch_node_status(routes: &ApiRoutes) -> anyhow::Result<NodeStatusArray> {
    let raw: RawStatusEnvelope = get_json(&routes.node_status).await?;
    Ok(parse_status_envelope(raw))
}

fn parse_status_envelope(raw: RawStatusEnvelope) -> NodeStatusArray {
    raw.data
        .result
        .into_iter()
        .map(|sample| NodeStatus {
            name: sample.metric.instance,
            is_online: sample.value.1 == "1",
            timestamp: sample.value.0,
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_samples_map_to_node_statuses() {
        let raw: RawStatusEnvelope = serde_json::from_value(json!({
            "data": {
                "result": [
                    { "metric": { "instance": "aims3.llnl.gov" }, "value": [1609459200.0, "1"] },
                    { "metric": { "instance": "esgf.ceda.ac.uk" }, "value": [1609459200.0, "0"] },
                ]
            }
        }))
        .unwrap();
        let statuses = parse_status_envelope(raw);
        assert_eq!(statuses.len(), 2);
        assert!(statuses[0].is_online);
        assert_eq!(statuses[0].name, "aims3.llnl.gov");
        assert!(!statuses[1].is_online);
    }
}
