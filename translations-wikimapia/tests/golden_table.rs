//! Golden comparison of the compiled rule table against the harvested data.

use rstest::{fixture, rstest};
use serde::Deserialize;
use translations_wikimapia::{CategoryRules, lookup};

#[derive(Debug, Deserialize)]
struct GoldenRule {
    label: String,
    tags: Vec<(String, String)>,
    occurrences: u64,
}

#[fixture]
fn golden() -> Vec<GoldenRule> {
    let raw = include_str!("fixtures/wikimapia_rules.json");
    serde_json::from_str(raw).unwrap_or_else(|err| panic!("parse golden rules: {err}"))
}

#[rstest]
fn every_golden_label_resolves_to_its_tags(golden: Vec<GoldenRule>) {
    for expected in &golden {
        let rule = lookup(&expected.label)
            .unwrap_or_else(|| panic!("missing rule for {:?}", expected.label));
        let actual: Vec<(&str, &str)> = rule.tag_pairs().to_vec();
        let wanted: Vec<(&str, &str)> = expected
            .tags
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        assert_eq!(actual, wanted, "tags differ for {:?}", expected.label);
        assert_eq!(
            rule.occurrences(),
            expected.occurrences,
            "occurrences differ for {:?}",
            expected.label
        );
    }
}

#[rstest]
fn table_order_and_size_match_golden(golden: Vec<GoldenRule>) {
    let rules = CategoryRules::wikimapia();
    assert_eq!(rules.len(), golden.len());
    let labels: Vec<&str> = rules.iter().map(|rule| rule.label()).collect();
    let golden_labels: Vec<&str> = golden.iter().map(|rule| rule.label.as_str()).collect();
    assert_eq!(labels, golden_labels);
}

#[rstest]
fn labels_are_unique(golden: Vec<GoldenRule>) {
    let mut seen = std::collections::HashSet::new();
    for rule in &golden {
        assert!(seen.insert(rule.label.as_str()), "duplicate {:?}", rule.label);
    }
    assert_eq!(seen.len(), CategoryRules::wikimapia().len());
}
