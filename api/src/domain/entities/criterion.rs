//! Rubric criterion domain entity
//!
//! A criterion is one line item of the active rubric. Criteria are grouped by
//! their `domain` label for display.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default maximum score when a rubric entry does not specify one
pub const DEFAULT_MAX_SCORE: f64 = 5.0;

/// Default weight when a rubric entry does not specify one
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One normalized rubric line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: String,
    pub title: String,
    pub domain: String,
    pub description: String,
    pub max_score: f64,
    pub weight: f64,
}

impl Criterion {
    /// Identifier used when a rubric entry has no explicit `id`
    pub fn default_id(title: &str) -> String {
        title.to_lowercase().replace(' ', "_")
    }
}

/// Criteria sharing the same domain label, in source order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainGroup {
    pub domain: String,
    pub criteria: Vec<Criterion>,
}

/// Partition criteria by domain.
///
/// Groups appear in the order their domain is first seen; criteria keep
/// their relative order inside each group.
pub fn group_by_domain(criteria: Vec<Criterion>) -> Vec<DomainGroup> {
    let mut groups: Vec<DomainGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for criterion in criteria {
        match index.get(&criterion.domain) {
            Some(&i) => groups[i].criteria.push(criterion),
            None => {
                index.insert(criterion.domain.clone(), groups.len());
                groups.push(DomainGroup {
                    domain: criterion.domain.clone(),
                    criteria: vec![criterion],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(title: &str, domain: &str) -> Criterion {
        Criterion {
            id: Criterion::default_id(title),
            title: title.to_string(),
            domain: domain.to_string(),
            description: String::new(),
            max_score: DEFAULT_MAX_SCORE,
            weight: DEFAULT_WEIGHT,
        }
    }

    #[test]
    fn default_id_lowercases_and_underscores() {
        assert_eq!(Criterion::default_id("Thesis Clarity"), "thesis_clarity");
        assert_eq!(Criterion::default_id("Use of  Evidence"), "use_of__evidence");
    }

    #[test]
    fn group_empty_input() {
        assert!(group_by_domain(Vec::new()).is_empty());
    }

    #[test]
    fn group_preserves_first_seen_domain_order() {
        let input = vec![
            criterion("Thesis", "Writing"),
            criterion("Slides", "Delivery"),
            criterion("Grammar", "Writing"),
            criterion("Sources", "Research"),
            criterion("Pacing", "Delivery"),
        ];

        let groups = group_by_domain(input);

        let domains: Vec<&str> = groups.iter().map(|g| g.domain.as_str()).collect();
        assert_eq!(domains, vec!["Writing", "Delivery", "Research"]);

        let writing: Vec<&str> = groups[0].criteria.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(writing, vec!["Thesis", "Grammar"]);

        let delivery: Vec<&str> = groups[1].criteria.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(delivery, vec!["Slides", "Pacing"]);
    }

    #[test]
    fn group_is_a_partition_of_the_input() {
        let input = vec![
            criterion("A", "x"),
            criterion("B", "y"),
            criterion("C", "x"),
            criterion("C", "x"),
            criterion("D", "z"),
        ];

        let groups = group_by_domain(input.clone());

        let total: usize = groups.iter().map(|g| g.criteria.len()).sum();
        assert_eq!(total, input.len());
        for group in &groups {
            assert!(group.criteria.iter().all(|c| c.domain == group.domain));
        }
        // duplicates are kept
        assert_eq!(groups[0].criteria.len(), 3);
    }

    #[test]
    fn group_key_is_exact_string_equality() {
        let groups = group_by_domain(vec![
            criterion("A", "Writing"),
            criterion("B", "writing"),
        ]);
        assert_eq!(groups.len(), 2);
    }
}
