//! Behavioural coverage for the NAVTEQ adapter.

use std::cell::RefCell;
use std::sync::Arc;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use translations_core::Attributes;
use translations_core::test_support::{RecordingTranslator, TranslateCall};
use translations_navteq::{NavteqAdapter, TranslatorAvailability};

/// World state shared by adapter scenarios.
#[derive(Debug, Default)]
struct AdapterWorld {
    adapter: RefCell<NavteqAdapter>,
    translator: RefCell<Option<Arc<RecordingTranslator>>>,
    result: RefCell<Option<Attributes>>,
}

#[fixture]
fn world() -> AdapterWorld {
    AdapterWorld::default()
}

fn single(key: &str, value: &str) -> Attributes {
    Attributes::from([(key.to_owned(), value.to_owned())])
}

#[given("no NAVTEQ translator is installed")]
fn given_no_translator(world: &AdapterWorld) {
    world.adapter.replace(NavteqAdapter::new(None));
}

#[given("a NAVTEQ translator that answers {key}={value}")]
fn given_translator(world: &AdapterWorld, key: String, value: String) {
    let translator = Arc::new(RecordingTranslator::returning(single(&key, &value)));
    world
        .adapter
        .replace(NavteqAdapter::new(Some(translator.clone())));
    world.translator.replace(Some(translator));
}

#[when("I translate the record {key}={value} from {layer} as a {geometry}")]
fn when_translate(
    world: &AdapterWorld,
    key: String,
    value: String,
    layer: String,
    geometry: String,
) {
    let translated = world
        .adapter
        .borrow()
        .translate_to_osm(single(&key, &value), &layer, &geometry);
    world.result.replace(Some(translated));
}

#[then("the result is {key}={value}")]
fn then_result(world: &AdapterWorld, key: String, value: String) {
    let borrowed = world.result.borrow();
    let result = borrowed
        .as_ref()
        .unwrap_or_else(|| panic!("translation result should be recorded"));
    assert_eq!(result, &single(&key, &value));
}

#[then("the adapter reports the translator as missing")]
fn then_missing(world: &AdapterWorld) {
    assert_eq!(world.adapter.borrow().initialize(), TranslatorAvailability::Missing);
}

#[then("the translator received {key}={value} from {layer} as a {geometry}")]
fn then_received(
    world: &AdapterWorld,
    key: String,
    value: String,
    layer: String,
    geometry: String,
) {
    let borrowed = world.translator.borrow();
    let translator = borrowed
        .as_ref()
        .unwrap_or_else(|| panic!("translator should be installed"));
    assert_eq!(
        translator.calls(),
        [TranslateCall {
            attrs: single(&key, &value),
            layer_name: layer,
            geometry_type: geometry,
        }]
    );
}

#[scenario(path = "tests/features/navteq_adapter.feature", index = 0)]
fn passes_through_without_translator(world: AdapterWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/navteq_adapter.feature", index = 1)]
fn delegates_to_translator(world: AdapterWorld) {
    let _ = world;
}
