//! Test doubles for [`Translator`] consumers.

use std::sync::{Mutex, PoisonError};

use crate::{Attributes, Translator};

/// Arguments received by a [`RecordingTranslator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateCall {
    /// Attribute record passed to the translator.
    pub attrs: Attributes,
    /// Layer name passed to the translator.
    pub layer_name: String,
    /// Geometry type passed to the translator.
    pub geometry_type: String,
}

/// Translator that records every call and answers with a fixed record.
#[derive(Debug, Default)]
pub struct RecordingTranslator {
    response: Attributes,
    calls: Mutex<Vec<TranslateCall>>,
}

impl RecordingTranslator {
    /// Create a translator that always returns `response`.
    #[must_use]
    pub fn returning(response: Attributes) -> Self {
        Self {
            response,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Return the calls observed so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<TranslateCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Translator for RecordingTranslator {
    fn to_osm(&self, attrs: Attributes, layer_name: &str, geometry_type: &str) -> Attributes {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(TranslateCall {
                attrs,
                layer_name: layer_name.to_owned(),
                geometry_type: geometry_type.to_owned(),
            });
        self.response.clone()
    }
}

/// Build an [`Attributes`] record from borrowed pairs.
pub fn attributes<'a, I>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    crate::tags::tags_from_pairs(pairs)
}
