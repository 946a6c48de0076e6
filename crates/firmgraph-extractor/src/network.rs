//! Shared decision-maker network
//!
//! Two decision-makers are connected when they sit on the same company. The
//! edge weight counts the companies they share.

use firmgraph_domain::{DecisionEdge, DecisionPersonRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Thresholds applied to the built edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeFilter {
    /// Drop edges sharing fewer companies than this
    #[serde(default = "default_threshold")]
    pub min_weight: usize,

    /// Drop persons with fewer remaining edges than this, with their edges
    #[serde(default = "default_threshold")]
    pub min_degree: usize,
}

fn default_threshold() -> usize {
    1
}

impl Default for EdgeFilter {
    /// Keeps every edge
    fn default() -> Self {
        Self {
            min_weight: default_threshold(),
            min_degree: default_threshold(),
        }
    }
}

impl EdgeFilter {
    /// Apply the thresholds, keeping the input order
    ///
    /// Degrees are counted once, after the weight threshold.
    pub fn apply(&self, edges: Vec<DecisionEdge>) -> Vec<DecisionEdge> {
        let edges: Vec<DecisionEdge> = edges
            .into_iter()
            .filter(|e| e.weight >= self.min_weight)
            .collect();

        let mut degree: HashMap<String, usize> = HashMap::new();
        for edge in &edges {
            *degree.entry(edge.person_a.clone()).or_default() += 1;
            *degree.entry(edge.person_b.clone()).or_default() += 1;
        }
        let keeps = |id: &str| degree.get(id).copied().unwrap_or(0) >= self.min_degree;

        edges
            .into_iter()
            .filter(|e| keeps(&e.person_a) && keeps(&e.person_b))
            .collect()
    }
}

/// Display name of a person: first and last name, or the id when both are blank
fn person_label(person: &DecisionPersonRecord, person_id: &str) -> String {
    let first = person.first_name.as_deref().unwrap_or("");
    let last = person.last_name.as_deref().unwrap_or("");
    let label = format!("{} {}", first, last);
    let label = label.trim();
    if label.is_empty() {
        person_id.to_string()
    } else {
        label.to_string()
    }
}

/// Build weighted co-membership edges from primary decision-maker rows
///
/// Rows without a person id are ignored and a person listed twice on one
/// company counts once. A person's label comes from their first row. Edges
/// are sorted by descending weight, then by ids.
pub fn build_decision_edges(persons: &[DecisionPersonRecord]) -> Vec<DecisionEdge> {
    let mut company_order: Vec<&str> = Vec::new();
    let mut members: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    let mut labels: HashMap<&str, String> = HashMap::new();

    for person in persons {
        let Some(person_id) = person.decision_person_id.as_deref().filter(|id| !id.is_empty())
        else {
            continue;
        };
        labels
            .entry(person_id)
            .or_insert_with(|| person_label(person, person_id));
        members
            .entry(person.business_id.as_str())
            .or_insert_with(|| {
                company_order.push(person.business_id.as_str());
                BTreeSet::new()
            })
            .insert(person_id);
    }

    let mut pairs: BTreeMap<(&str, &str), Vec<&str>> = BTreeMap::new();
    for company in company_order {
        let ids: Vec<&str> = members
            .get(company)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                pairs.entry((*a, *b)).or_default().push(company);
            }
        }
    }

    let label_of = |id: &str| labels.get(id).cloned().unwrap_or_else(|| id.to_string());
    let mut edges: Vec<DecisionEdge> = pairs
        .into_iter()
        .map(|((a, b), companies)| DecisionEdge {
            person_a: a.to_string(),
            person_a_label: label_of(a),
            person_b: b.to_string(),
            person_b_label: label_of(b),
            weight: companies.len(),
            business_ids: companies.into_iter().map(str::to_string).collect(),
        })
        .collect();

    edges.sort_by(|x, y| {
        y.weight
            .cmp(&x.weight)
            .then_with(|| x.person_a.cmp(&y.person_a))
            .then_with(|| x.person_b.cmp(&y.person_b))
    });
    edges
}
