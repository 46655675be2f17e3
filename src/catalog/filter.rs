//! Record filtering, sorting, and top/bottom-N selection.
//!
//! Every comparison chain carries a full tie-break sequence so that records
//! with equal primary keys still come out in one reproducible order.

use std::cmp::Ordering;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::ItemRecord;

/// Predicates applied to a record list, all optional.
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    /// Keep only records from these tabs (empty set = all tabs).
    pub tabs: FxHashSet<String>,
    /// Case-folded substring match against the name.
    pub name_query: Option<String>,
    pub min_total: Option<f64>,
    pub max_total: Option<f64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_quantity: Option<i64>,
    pub max_quantity: Option<i64>,
    /// Keep only the N records with the highest totals.
    pub top_n: Option<usize>,
    /// Keep only the N records with the lowest totals.
    pub bottom_n: Option<usize>,
}

/// Apply `spec` to `items`, preserving input order except for the
/// top/bottom-N steps which sort by total with deterministic tie-breaks.
pub fn filter_items(items: &[ItemRecord], spec: &FilterSpec) -> Vec<ItemRecord> {
    let mut filtered: Vec<ItemRecord> = items
        .iter()
        .filter(|item| {
            (spec.tabs.is_empty() || spec.tabs.contains(&item.tab))
                && spec.name_query.as_deref().is_none_or(|query| {
                    item.name.to_lowercase().contains(&query.to_lowercase())
                })
                && spec.min_total.is_none_or(|min| item.total >= min)
                && spec.max_total.is_none_or(|max| item.total <= max)
                && spec.min_price.is_none_or(|min| item.unit_price() >= min)
                && spec.max_price.is_none_or(|max| item.unit_price() <= max)
                && spec.min_quantity.is_none_or(|min| item.quantity >= min)
                && spec.max_quantity.is_none_or(|max| item.quantity <= max)
        })
        .cloned()
        .collect();

    if let Some(n) = spec.top_n {
        filtered.sort_by(by_total_descending);
        filtered.truncate(n);
    }

    if let Some(n) = spec.bottom_n {
        filtered.sort_by(by_total);
        filtered.truncate(n);
    }

    filtered
}

fn by_total(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    a.total
        .total_cmp(&b.total)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.tab.cmp(&b.tab))
        .then_with(|| a.quantity.cmp(&b.quantity))
}

// Highest total first, but tied records stay in ascending name/tab/quantity
// order rather than having the whole chain reversed.
fn by_total_descending(a: &ItemRecord, b: &ItemRecord) -> Ordering {
    b.total
        .total_cmp(&a.total)
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.tab.cmp(&b.tab))
        .then_with(|| a.quantity.cmp(&b.quantity))
}

/// Field a record list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Tab,
    Quantity,
    Total,
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "tab" => Ok(Self::Tab),
            "quantity" => Ok(Self::Quantity),
            "total" => Ok(Self::Total),
            other => Err(format!("Unsupported sort field: {other}")),
        }
    }
}

/// Sort specification: primary field plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub ascending: bool,
}

/// Sort records by `spec` with full tie-break chains.
pub fn sort_items(items: &[ItemRecord], spec: SortSpec) -> Vec<ItemRecord> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match spec.field {
            SortField::Name => a
                .name
                .cmp(&b.name)
                .then_with(|| a.tab.cmp(&b.tab))
                .then_with(|| a.quantity.cmp(&b.quantity))
                .then_with(|| a.total.total_cmp(&b.total)),
            SortField::Tab => a
                .tab
                .cmp(&b.tab)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.quantity.cmp(&b.quantity))
                .then_with(|| a.total.total_cmp(&b.total)),
            SortField::Quantity => a
                .quantity
                .cmp(&b.quantity)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.tab.cmp(&b.tab))
                .then_with(|| a.total.total_cmp(&b.total)),
            SortField::Total => by_total(a, b),
        };
        if spec.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
    sorted
}
