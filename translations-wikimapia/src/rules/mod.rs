//! The Wikimapia category rule table.
//!
//! Rules are compiled into the binary as a literal slice and indexed by
//! label on first use. The table is never mutated after that.

use std::collections::HashMap;
use std::sync::LazyLock;

use translations_core::{Tags, tags::tags_from_pairs};

mod table;

/// Tag key marking a category that has no settled OSM equivalent yet.
///
/// The value carries the label itself (see [`raw_category_value`]) so the
/// category can be resolved by hand later.
pub const RAW_CATEGORY_KEY: &str = "rawWmCategory";

static WIKIMAPIA: LazyLock<CategoryRules> =
    LazyLock::new(|| CategoryRules::from_rules(table::ACTIVE).with_retired(table::RETIRED));

/// A single category-to-tags rule.
///
/// Tags are kept exactly as the upstream table spells them, including the
/// occasional misspelt key or fused fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CategoryRule {
    label: &'static str,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_tag_pairs"))]
    tags: &'static [(&'static str, &'static str)],
    occurrences: u64,
}

impl CategoryRule {
    /// Define a rule for `label`.
    ///
    /// `occurrences` records how many places carried the category when the
    /// table was harvested.
    #[must_use]
    pub const fn new(
        label: &'static str,
        tags: &'static [(&'static str, &'static str)],
        occurrences: u64,
    ) -> Self {
        Self {
            label,
            tags,
            occurrences,
        }
    }

    /// Category label exactly as Wikimapia spells it.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Tag pairs in table order.
    #[must_use]
    pub const fn tag_pairs(&self) -> &'static [(&'static str, &'static str)] {
        self.tags
    }

    /// Number of places using the category at harvest time.
    #[must_use]
    pub const fn occurrences(&self) -> u64 {
        self.occurrences
    }

    /// Return the value stored for `key`, if any.
    #[must_use]
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .rev()
            .find_map(|(candidate, value)| (*candidate == key).then_some(*value))
    }

    /// Materialise the rule's tags as an owned map.
    #[must_use]
    pub fn tags(&self) -> Tags {
        tags_from_pairs(self.tags.iter().copied())
    }

    /// Report whether the rule only flags the category for review.
    #[must_use]
    pub fn is_unresolved(&self) -> bool {
        self.tag(RAW_CATEGORY_KEY).is_some()
    }
}

#[cfg(feature = "serde")]
fn serialize_tag_pairs<S>(
    tags: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(tags.iter().copied())
}

/// Label-indexed view over a slice of [`CategoryRule`] values.
///
/// When two rules share a label the later one wins.
#[derive(Debug, Clone)]
pub struct CategoryRules {
    rules: &'static [CategoryRule],
    retired: &'static [CategoryRule],
    index: HashMap<&'static str, &'static CategoryRule>,
}

impl CategoryRules {
    /// The curated Wikimapia table.
    ///
    /// # Examples
    /// ```
    /// use translations_wikimapia::CategoryRules;
    ///
    /// let rules = CategoryRules::wikimapia();
    /// let hospital = rules.get("hospital").expect("known category");
    /// assert_eq!(hospital.tag("amenity"), Some("hospital"));
    /// ```
    #[must_use]
    pub fn wikimapia() -> &'static Self {
        &WIKIMAPIA
    }

    /// Index `rules`, keeping the last rule seen for each label.
    #[must_use]
    pub fn from_rules(rules: &'static [CategoryRule]) -> Self {
        let mut index = HashMap::with_capacity(rules.len());
        for rule in rules {
            index.insert(rule.label, rule);
        }
        Self {
            rules,
            retired: &[],
            index,
        }
    }

    /// Attach rules withdrawn from the table, kept for provenance only.
    #[must_use]
    pub fn with_retired(mut self, retired: &'static [CategoryRule]) -> Self {
        self.retired = retired;
        self
    }

    /// Return the rule registered for `label`.
    ///
    /// Matching is exact: no trimming, case folding or entity decoding.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&'static CategoryRule> {
        self.index.get(label).copied()
    }

    /// Report whether `label` has a rule.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Number of distinct labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Report whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterate over the rules in definition order.
    pub fn iter(&self) -> std::slice::Iter<'static, CategoryRule> {
        self.rules.iter()
    }

    /// The rules in definition order, duplicates included.
    #[must_use]
    pub const fn as_slice(&self) -> &'static [CategoryRule] {
        self.rules
    }

    /// Rules that were withdrawn from the table and never match a lookup.
    #[must_use]
    pub const fn retired(&self) -> &'static [CategoryRule] {
        self.retired
    }
}

/// Look up `label` in the Wikimapia table.
#[must_use]
pub fn lookup(label: &str) -> Option<&'static CategoryRule> {
    CategoryRules::wikimapia().get(label)
}

/// Every active Wikimapia rule, in table order.
#[must_use]
pub fn rules() -> &'static [CategoryRule] {
    CategoryRules::wikimapia().as_slice()
}

/// Rules withdrawn from the active Wikimapia table.
#[must_use]
pub fn retired_rules() -> &'static [CategoryRule] {
    CategoryRules::wikimapia().retired()
}

/// Look up `label` and return an owned copy of its tags.
#[must_use]
pub fn lookup_tags(label: &str) -> Option<Tags> {
    lookup(label).map(CategoryRule::tags)
}

/// Normalise a label into the value used with [`RAW_CATEGORY_KEY`].
///
/// Spaces become underscores and apostrophes are dropped, the way the table
/// spells its own raw markers.
///
/// # Examples
/// ```
/// use translations_wikimapia::raw_category_value;
///
/// assert_eq!(raw_category_value("children's zoo"), "childrens_zoo");
/// assert_eq!(raw_category_value("Chicago Transit Authority (CTA)"),
///            "Chicago_Transit_Authority_(CTA)");
/// ```
#[must_use]
pub fn raw_category_value(label: &str) -> String {
    label
        .chars()
        .filter(|ch| *ch != '\'')
        .map(|ch| if ch == ' ' { '_' } else { ch })
        .collect()
}

/// Build the single-tag marker flagging `label` for manual review.
#[must_use]
pub fn raw_category_tags(label: &str) -> Tags {
    Tags::from([(RAW_CATEGORY_KEY.to_owned(), raw_category_value(label))])
}

#[cfg(test)]
mod tests;
