//! Item catalog collaborators.
//!
//! These feed the core pipeline its plain name sequences: a CSV loader for
//! stash export files and field-predicate filtering/sorting over the loaded
//! records. None of this runs inside the generation pipeline itself.

pub mod filter;
pub mod loader;

use serde::{Deserialize, Serialize};

/// One row of a stash export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub tab: String,
    pub quantity: i64,
    pub total: f64,
}

impl ItemRecord {
    /// Unit price, or zero when the quantity is non-positive.
    pub fn unit_price(&self) -> f64 {
        if self.quantity <= 0 {
            0.0
        } else {
            self.total / self.quantity as f64
        }
    }
}
