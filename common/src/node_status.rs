//! Data node health models.

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub name: String,
    pub is_online: bool,
    /// Seconds since the epoch at which the status was sampled.
    pub timestamp: f64,
}

pub type NodeStatusArray = Vec<NodeStatus>;

/// Status entry for a data node, if the monitor knows about it.
pub fn lookup_node_status<'a>(statuses: &'a [NodeStatus], data_node: &str) -> Option<&'a NodeStatus> {
    statuses.iter().find(|status| status.name == data_node)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_matches_exact_node_name() {
        let statuses = vec![
            NodeStatus { name: "aims3.llnl.gov".to_string(), is_online: true, timestamp: 1.0 },
            NodeStatus { name: "esgf.ceda.ac.uk".to_string(), is_online: false, timestamp: 1.0 },
        ];
        assert!(lookup_node_status(&statuses, "aims3.llnl.gov").unwrap().is_online);
        assert!(!lookup_node_status(&statuses, "esgf.ceda.ac.uk").unwrap().is_online);
        assert!(lookup_node_status(&statuses, "unknown.node").is_none());
    }
}
