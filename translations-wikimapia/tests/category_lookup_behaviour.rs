//! Behavioural coverage for exact category lookups.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use translations_core::Tags;
use translations_wikimapia::CategoryRules;

/// World state for lookup scenarios.
#[derive(Debug, Default)]
struct LookupWorld {
    rules: RefCell<Option<&'static CategoryRules>>,
    result: RefCell<Option<Option<Tags>>>,
}

#[fixture]
fn world() -> LookupWorld {
    LookupWorld::default()
}

#[given("the Wikimapia category table")]
fn given_table(world: &LookupWorld) {
    world.rules.replace(Some(CategoryRules::wikimapia()));
}

#[when("I look up the category {label}")]
fn when_lookup(world: &LookupWorld, label: String) {
    let clean_label = label.trim_matches('"');
    let rules = world
        .rules
        .borrow()
        .unwrap_or_else(|| panic!("rule table should be loaded"));
    let tags = rules.get(clean_label).map(|rule| rule.tags());
    world.result.replace(Some(tags));
}

#[then("the tags are {key}={value}")]
fn then_tags(world: &LookupWorld, key: String, value: String) {
    let borrowed = world.result.borrow();
    let Some(Some(tags)) = borrowed.as_ref() else {
        panic!("expected a mapping to be found");
    };
    let expected = Tags::from([(key, value)]);
    assert_eq!(tags, &expected);
}

#[then("no mapping is found")]
fn then_absent(world: &LookupWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref() {
        Some(None) => {}
        Some(Some(tags)) => panic!("expected no mapping, found {tags:?}"),
        None => panic!("lookup result should be recorded"),
    }
}

#[scenario(path = "tests/features/category_lookup.feature", index = 0)]
fn school_maps_to_amenity(world: LookupWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/category_lookup.feature", index = 1)]
fn hospital_maps_to_amenity(world: LookupWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/category_lookup.feature", index = 2)]
fn unknown_category_is_absent(world: LookupWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/category_lookup.feature", index = 3)]
fn unmapped_category_is_flagged(world: LookupWorld) {
    let _ = world;
}
