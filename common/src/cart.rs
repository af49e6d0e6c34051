//! User cart models.

use serde::{Deserialize, Serialize};

use crate::search_result::Dataset;


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserCart {
    pub items: Vec<Dataset>,
}

impl UserCart {
    pub fn contains(&self, dataset_id: &str) -> bool {
        self.items.iter().any(|item| item.id == dataset_id)
    }

    /// Add a dataset; already-carted ids are kept once.
    pub fn add(&mut self, dataset: Dataset) {
        if !self.contains(&dataset.id) {
            self.items.push(dataset);
        }
    }

    pub fn remove(&mut self, dataset_id: &str) {
        self.items.retain(|item| item.id != dataset_id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(id: &str) -> Dataset {
        Dataset {
            id: id.to_string(),
            title: id.to_string(),
            data_node: "aims3.llnl.gov".to_string(),
            number_of_files: 1,
            size: 100,
            version: "20200101".to_string(),
            access: vec!["HTTPServer".to_string()],
            citation_url: None,
        }
    }

    #[test]
    fn add_is_idempotent_per_dataset_id() {
        let mut cart = UserCart::default();
        cart.add(dataset("d1"));
        cart.add(dataset("d1"));
        cart.add(dataset("d2"));
        assert_eq!(cart.len(), 2);
        assert!(cart.contains("d1"));
    }

    #[test]
    fn remove_by_id() {
        let mut cart = UserCart { items: vec![dataset("d1"), dataset("d2")] };
        cart.remove("d1");
        assert_eq!(cart.len(), 1);
        assert!(!cart.contains("d1"));
        cart.remove("d3");
        assert_eq!(cart.len(), 1);
    }
}
