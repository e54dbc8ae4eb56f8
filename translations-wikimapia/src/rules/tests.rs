//! Unit coverage for the category rule table.

use rstest::rstest;

use super::*;

static DUPLICATED: &[CategoryRule] = &[
    CategoryRule::new("pier", &[("man_made", "pier")], 10),
    CategoryRule::new("jetty", &[("man_made", "pier")], 9),
    CategoryRule::new("pier", &[("man_made", "jetty")], 8),
];

#[rstest]
#[case("school", &[("amenity", "school")])]
#[case("hospital", &[("amenity", "hospital")])]
#[case("lake", &[("natural", "water"), ("water", "lake")])]
#[case("nonresidential building", &[("building", "yes"), ("residential", "no")])]
#[case("VORTAC", &[("navigationaid", "vortac")])]
#[case("1910_construction", &[("historic:period", "1910_construction")])]
fn known_labels_return_their_tags(#[case] label: &str, #[case] expected: &[(&str, &str)]) {
    let rule = lookup(label).unwrap_or_else(|| panic!("{label:?} should be in the table"));
    assert_eq!(rule.tag_pairs(), expected);
    assert_eq!(rule.label(), label);
}

#[rstest]
#[case("not a real category")]
#[case("School")]
#[case(" school")]
#[case("school ")]
#[case("")]
#[case("do not draw title")]
fn unknown_labels_are_absent(#[case] label: &str) {
    assert!(lookup(label).is_none());
    assert!(lookup_tags(label).is_none());
}

#[rstest]
fn table_holds_every_active_rule_once() {
    let rules = CategoryRules::wikimapia();
    assert_eq!(rules.as_slice().len(), 2997);
    assert_eq!(rules.len(), rules.as_slice().len());
    assert!(!rules.is_empty());
    assert!(std::ptr::eq(rules.as_slice(), super::rules()));
}

#[rstest]
fn retired_rules_are_kept_aside() {
    let retired: Vec<&str> = CategoryRules::wikimapia()
        .retired()
        .iter()
        .map(CategoryRule::label)
        .collect();
    assert_eq!(retired, ["do not draw title", "draw only border", "society"]);
    assert_eq!(retired_rules().len(), retired.len());
    assert!(retired.iter().all(|label| lookup(label).is_none()));
}

#[rstest]
fn duplicate_labels_keep_the_last_rule() {
    let rules = CategoryRules::from_rules(DUPLICATED);
    assert_eq!(rules.len(), 2);
    let pier = rules.get("pier").expect("pier is indexed");
    assert_eq!(pier.tag("man_made"), Some("jetty"));
    assert_eq!(pier.occurrences(), 8);
    assert!(rules.retired().is_empty());
}

#[rstest]
fn synonyms_share_tags_but_stay_distinct() {
    let school = lookup("school").expect("school");
    let schooling = lookup("schooling").expect("schooling");
    assert_eq!(school.tags(), schooling.tags());
    assert_ne!(school, schooling);
}

#[rstest]
fn lookups_do_not_disturb_the_table() {
    let rules = CategoryRules::wikimapia();
    let before = (rules.as_slice().as_ptr(), rules.len());
    let first = lookup_tags("water");
    for _ in 0..1_000 {
        assert_eq!(lookup_tags("water"), first);
    }
    assert_eq!((rules.as_slice().as_ptr(), rules.len()), before);
    assert!(std::ptr::eq(rules, CategoryRules::wikimapia()));
}

#[rstest]
#[case("heritage railway")]
#[case("National Trust property (UK)")]
#[case("search and rescue / SAR")]
#[case("children's zoo")]
fn raw_markers_echo_the_label(#[case] label: &str) {
    let rule = lookup(label).expect("raw-marked label");
    assert!(rule.is_unresolved());
    assert_eq!(rule.tag(RAW_CATEGORY_KEY), Some(raw_category_value(label).as_str()));
    assert_eq!(rule.tags(), raw_category_tags(label));
}

#[rstest]
fn mapped_rules_are_not_unresolved() {
    assert!(!lookup("school").expect("school").is_unresolved());
}

#[rstest]
fn upstream_inconsistencies_are_preserved() {
    let macedonian =
        lookup("Macedonian Orthodox Church - Ohrid Archbishopric").expect("fused rule");
    assert_eq!(macedonian.tag("amenity''place_of_worship"), Some(""));
    assert_eq!(macedonian.tag("amenity"), None);
    assert_eq!(macedonian.tag("denomination"), Some("macedonian_orthodox"));

    let junction = lookup("junction - Do not use this category, the category is under cleanup")
        .expect("comma in raw value");
    assert_eq!(
        junction.tag(RAW_CATEGORY_KEY),
        Some("junction_-_Do_not_use_this_category,_the_category_is_under_cleanup")
    );

    let lighting = lookup("lighting shop").expect("lighting shop");
    assert_eq!(lighting.tag(RAW_CATEGORY_KEY), Some("lamps"));

    assert!(lookup("McDonald&#039;s").is_some());
    assert!(lookup("McDonald's").is_none());
}

#[cfg(feature = "serde")]
#[rstest]
fn rules_serialise_tags_as_a_map() {
    let rule = lookup("lake").expect("lake");
    let json = serde_json::to_value(rule).expect("serialise rule");
    assert_eq!(
        json,
        serde_json::json!({
            "label": "lake",
            "tags": {"natural": "water", "water": "lake"},
            "occurrences": 428_926
        })
    );
}
