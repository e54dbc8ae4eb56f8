//! Apply the category table to Wikimapia attribute records.
//!
//! A Wikimapia place lists its categories in one attribute, separated by
//! [`CATEGORY_SEPARATOR`]. Each label that has a rule contributes that
//! rule's tags; labels without a rule, and rules that flag their label
//! themselves, are collected under
//! [`RAW_CATEGORY_KEY`](crate::RAW_CATEGORY_KEY) so a reviewer can find them.

use log::debug;
use translations_core::{Attributes, Tags, Translator};

use crate::rules::{CategoryRules, RAW_CATEGORY_KEY, raw_category_value};

/// Attribute holding the category list when none is configured.
pub const DEFAULT_CATEGORY_ATTRIBUTE: &str = "category";

/// Separator between labels in a category list.
pub const CATEGORY_SEPARATOR: char = ';';

/// Outcome of translating a list of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    /// Labels whose rule fully resolved them, in input order.
    pub matched: Vec<String>,
    /// Labels without a rule or with a rule flagged for review, in input
    /// order.
    pub unresolved: Vec<String>,
}

impl CategoryReport {
    /// Report whether every label was fully resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Split a category list into labels.
///
/// A `;` that closes an HTML entity such as `&#039;` belongs to the label
/// rather than separating two labels, since Wikimapia returns apostrophes in
/// that form. Empty pieces are dropped; nothing is trimmed.
///
/// # Examples
/// ```
/// use translations_wikimapia::split_categories;
///
/// let labels = split_categories("school;McDonald&#039;s;park");
/// assert_eq!(labels, ["school", "McDonald&#039;s", "park"]);
/// ```
#[must_use]
pub fn split_categories(value: &str) -> Vec<&str> {
    let mut labels = Vec::new();
    let mut start = 0;
    for (position, ch) in value.char_indices() {
        if ch != CATEGORY_SEPARATOR {
            continue;
        }
        let Some(piece) = value.get(start..position) else {
            continue;
        };
        if ends_with_entity_prefix(piece) {
            continue;
        }
        if !piece.is_empty() {
            labels.push(piece);
        }
        start = position + ch.len_utf8();
    }
    if let Some(rest) = value.get(start..)
        && !rest.is_empty()
    {
        labels.push(rest);
    }
    labels
}

/// Named entities Wikimapia escapes in category labels.
const NAMED_ENTITIES: [&str; 5] = ["amp", "quot", "lt", "gt", "apos"];

/// Report whether `piece` ends in an unterminated entity: one of
/// [`NAMED_ENTITIES`], `&#123` or `&#x7b`.
fn ends_with_entity_prefix(piece: &str) -> bool {
    let Some(ampersand) = piece.rfind('&') else {
        return false;
    };
    let Some(body) = piece.get(ampersand + 1..) else {
        return false;
    };
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return !hex.is_empty() && hex.chars().all(|ch| ch.is_ascii_hexdigit());
    }
    if let Some(digits) = body.strip_prefix('#') {
        return !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_digit());
    }
    NAMED_ENTITIES.contains(&body)
}

/// [`Translator`] that replaces a category attribute with OSM tags.
///
/// Other attributes pass through unchanged unless a category tag shares
/// their key, in which case the category tag wins. Tags from later
/// categories overwrite tags from earlier ones.
#[derive(Debug, Clone)]
pub struct CategoryTranslator {
    rules: &'static CategoryRules,
    attribute: String,
}

impl Default for CategoryTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryTranslator {
    /// Translator backed by the Wikimapia table, reading `category`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(CategoryRules::wikimapia())
    }

    /// Translator backed by a custom rule set.
    #[must_use]
    pub fn with_rules(rules: &'static CategoryRules) -> Self {
        Self {
            rules,
            attribute: DEFAULT_CATEGORY_ATTRIBUTE.to_owned(),
        }
    }

    /// Read the category list from `attribute` instead of `category`.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    /// Name of the attribute holding the category list.
    #[must_use]
    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    /// Merge the tags for `labels` and report which labels matched.
    ///
    /// A label is unresolved when the table has no rule for it or its rule
    /// carries the [`RAW_CATEGORY_KEY`](crate::RAW_CATEGORY_KEY) marker. The
    /// raw values of every unresolved label are joined with `;` under that
    /// key in input order, so no flagged category is lost when several are
    /// merged. Other tags from a flagged rule are still applied.
    ///
    /// # Examples
    /// ```
    /// use translations_wikimapia::CategoryTranslator;
    ///
    /// let translator = CategoryTranslator::new();
    /// let (tags, report) =
    ///     translator.translate_categories(["lake", "stone circle", "no such label"]);
    /// assert_eq!(tags.get("water").map(String::as_str), Some("lake"));
    /// assert_eq!(
    ///     tags.get("rawWmCategory").map(String::as_str),
    ///     Some("stone_circle;no_such_label")
    /// );
    /// assert_eq!(report.matched, ["lake"]);
    /// assert_eq!(report.unresolved, ["stone circle", "no such label"]);
    /// ```
    pub fn translate_categories<'a, I>(&self, labels: I) -> (Tags, CategoryReport)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tags = Tags::new();
        let mut report = CategoryReport::default();
        let mut raw: Vec<String> = Vec::new();
        for label in labels {
            let flagged = match self.rules.get(label) {
                Some(rule) => {
                    tags.extend(
                        rule.tag_pairs()
                            .iter()
                            .filter(|(key, _)| *key != RAW_CATEGORY_KEY)
                            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned())),
                    );
                    rule.tag(RAW_CATEGORY_KEY).map(str::to_owned)
                }
                None => {
                    debug!("No Wikimapia rule for category {label:?}");
                    Some(raw_category_value(label))
                }
            };
            match flagged {
                Some(value) => {
                    report.unresolved.push(label.to_owned());
                    if !raw.contains(&value) {
                        raw.push(value);
                    }
                }
                None => report.matched.push(label.to_owned()),
            }
        }
        if !raw.is_empty() {
            tags.insert(RAW_CATEGORY_KEY.to_owned(), raw.join(";"));
        }
        (tags, report)
    }

    /// Translate the category list stored in `value`.
    ///
    /// The whole value is tried as a single label first, so labels that
    /// contain the separator still match.
    pub fn translate_value(&self, value: &str) -> (Tags, CategoryReport) {
        if self.rules.contains(value) {
            return self.translate_categories([value]);
        }
        self.translate_categories(split_categories(value))
    }
}

impl Translator for CategoryTranslator {
    fn to_osm(&self, mut attrs: Attributes, layer_name: &str, _geometry_type: &str) -> Attributes {
        let Some(value) = attrs.remove(&self.attribute) else {
            debug!(
                "Layer {layer_name:?} record has no {:?} attribute",
                self.attribute
            );
            return attrs;
        };
        let (tags, _report) = self.translate_value(&value);
        attrs.extend(tags);
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn translator() -> CategoryTranslator {
        CategoryTranslator::new()
    }

    #[rstest]
    #[case("school", &["school"])]
    #[case("school;park", &["school", "park"])]
    #[case(";school;;park;", &["school", "park"])]
    #[case("Wendy&#039;s;lake", &["Wendy&#039;s", "lake"])]
    #[case("Kohl&#039;s;Arby&#039;s", &["Kohl&#039;s", "Arby&#039;s"])]
    #[case("R&D;school", &["R&D", "school"])]
    #[case("B&B;hotel", &["B&B", "hotel"])]
    #[case("Fish &amp; Chips;cafe", &["Fish &amp; Chips", "cafe"])]
    #[case("&#x27;quoted&#x27;;park", &["&#x27;quoted&#x27;", "park"])]
    #[case("", &[])]
    fn splits_category_lists(#[case] value: &str, #[case] expected: &[&str]) {
        assert_eq!(split_categories(value), expected);
    }

    #[rstest]
    fn merges_tags_from_every_label(translator: CategoryTranslator) {
        let (tags, report) = translator.translate_categories(["lake", "park"]);
        assert_eq!(tags.get("natural").map(String::as_str), Some("water"));
        assert_eq!(tags.get("water").map(String::as_str), Some("lake"));
        assert_eq!(tags.get("leisure").map(String::as_str), Some("park"));
        assert!(report.is_complete());
        assert_eq!(report.matched, ["lake", "park"]);
    }

    #[rstest]
    fn later_categories_overwrite_earlier_tags(translator: CategoryTranslator) {
        let (tags, _) = translator.translate_categories(["house", "apartments"]);
        assert_eq!(tags.get("building").map(String::as_str), Some("apartments"));
    }

    #[rstest]
    fn unresolved_labels_join_into_raw_marker(translator: CategoryTranslator) {
        let (tags, report) =
            translator.translate_categories(["school", "made up one", "giant's shed"]);
        assert_eq!(tags.get("amenity").map(String::as_str), Some("school"));
        assert_eq!(
            tags.get(RAW_CATEGORY_KEY).map(String::as_str),
            Some("made_up_one;giants_shed")
        );
        assert_eq!(report.unresolved, ["made up one", "giant's shed"]);
    }

    #[rstest]
    fn flagged_rules_keep_every_raw_marker(translator: CategoryTranslator) {
        let (tags, report) =
            translator.translate_categories(["stone circle", "school", "cenotaph", "made up"]);
        assert_eq!(
            tags.get(RAW_CATEGORY_KEY).map(String::as_str),
            Some("stone_circle;cenotaph;made_up")
        );
        assert_eq!(tags.get("amenity").map(String::as_str), Some("school"));
        assert_eq!(report.matched, ["school"]);
        assert_eq!(report.unresolved, ["stone circle", "cenotaph", "made up"]);
    }

    #[rstest]
    fn flagged_rules_still_contribute_their_tags(translator: CategoryTranslator) {
        let (tags, report) = translator.translate_categories(["Durga temple"]);
        assert_eq!(
            tags.get("amenity").map(String::as_str),
            Some("place_of_worship")
        );
        assert_eq!(
            tags.get(RAW_CATEGORY_KEY).map(String::as_str),
            Some("Durga_temple")
        );
        assert_eq!(report.unresolved, ["Durga temple"]);
    }

    #[rstest]
    fn ampersand_without_entity_still_splits(translator: CategoryTranslator) {
        let (tags, report) = translator.translate_value("R&D;school");
        assert_eq!(tags.get("amenity").map(String::as_str), Some("school"));
        assert_eq!(report.matched, ["school"]);
        assert_eq!(report.unresolved, ["R&D"]);
    }

    #[rstest]
    fn whole_value_matches_before_splitting(translator: CategoryTranslator) {
        let (tags, report) = translator.translate_value("McDonald&#039;s");
        assert_eq!(tags.get("brand").map(String::as_str), Some("McDonald's"));
        assert_eq!(report.matched, ["McDonald&#039;s"]);
    }

    #[rstest]
    fn translator_replaces_category_attribute(translator: CategoryTranslator) {
        let attrs = Attributes::from([
            ("category".to_owned(), "hospital;school".to_owned()),
            ("name".to_owned(), "St Mary".to_owned()),
        ]);
        let tags = translator.to_osm(attrs, "places", "Area");
        assert!(!tags.contains_key("category"));
        assert_eq!(tags.get("amenity").map(String::as_str), Some("school"));
        assert_eq!(tags.get("name").map(String::as_str), Some("St Mary"));
    }

    #[rstest]
    fn translator_reads_configured_attribute(translator: CategoryTranslator) {
        let custom = translator.with_attribute("wm_cats");
        let attrs = Attributes::from([("wm_cats".to_owned(), "village".to_owned())]);
        let tags = custom.to_osm(attrs, "places", "Point");
        assert_eq!(tags.get("place").map(String::as_str), Some("village"));
    }

    #[rstest]
    fn records_without_categories_pass_through(translator: CategoryTranslator) {
        let attrs = Attributes::from([("name".to_owned(), "Nowhere".to_owned())]);
        let tags = translator.to_osm(attrs.clone(), "places", "Point");
        assert_eq!(tags, attrs);
    }
}
