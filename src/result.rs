//! Result types for extraction output.
//!
//! An [`ExtractionRecord`] holds every field parsed from one page. A
//! [`ResultRow`] is its projection onto the fields the caller asked for, and
//! is what a batch returns, one per input URL.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::Error;
use crate::fields::{dedup_fields, Field, FieldValue, URL_LABEL};

/// Everything extracted from one HTML document.
///
/// Absent tags leave the corresponding field empty; lengths are derived from
/// the trimmed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionRecord {
    /// Identifying URL: the final URL after redirects if it differs from the
    /// request URL, otherwise the caller's input string.
    pub url: String,

    /// Text of the first `<h1>`.
    pub h1: String,

    /// Texts of all non-empty `<h2>` elements, joined with `" | "`.
    pub h2: String,

    /// Text of the `<title>` element.
    pub meta_title: String,

    /// `content` of `<meta name="description">`.
    pub meta_description: String,

    /// `href` of `<link rel="canonical">`.
    pub canonical: String,

    /// `content` of `<meta name="robots">`.
    pub meta_robots: String,
}

impl ExtractionRecord {
    /// Character count of the meta title.
    #[must_use]
    pub fn meta_title_length(&self) -> usize {
        self.meta_title.chars().count()
    }

    /// Character count of the meta description.
    #[must_use]
    pub fn meta_description_length(&self) -> usize {
        self.meta_description.chars().count()
    }

    /// Value of a single field.
    #[must_use]
    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::H1 => FieldValue::Text(self.h1.clone()),
            Field::H2 => FieldValue::Text(self.h2.clone()),
            Field::MetaTitle => FieldValue::Text(self.meta_title.clone()),
            Field::MetaTitleLength => FieldValue::Count(self.meta_title_length()),
            Field::MetaDescription => FieldValue::Text(self.meta_description.clone()),
            Field::MetaDescriptionLength => FieldValue::Count(self.meta_description_length()),
            Field::Canonical => FieldValue::Text(self.canonical.clone()),
            Field::MetaRobots => FieldValue::Text(self.meta_robots.clone()),
        }
    }

    /// Project onto `fields`, preserving their order.
    #[must_use]
    pub fn project(&self, fields: &[Field]) -> ResultRow {
        ResultRow {
            url: self.url.clone(),
            values: dedup_fields(fields)
                .into_iter()
                .map(|field| (field, self.value(field)))
                .collect(),
            error: None,
        }
    }
}

/// One output row: the identifying URL plus the requested fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    /// Identifying URL (see [`ExtractionRecord::url`]); the raw input on failure.
    pub url: String,

    /// Requested fields in the caller's order.
    pub values: Vec<(Field, FieldValue)>,

    /// Set when the URL failed; every value then holds the error sentinel.
    pub error: Option<Error>,
}

impl ResultRow {
    /// Row for a failed URL: each requested field holds the error's sentinel.
    #[must_use]
    pub fn failed(input: &str, fields: &[Field], error: Error) -> Self {
        let kind = error.kind();
        Self {
            url: input.to_string(),
            values: dedup_fields(fields)
                .into_iter()
                .map(|field| (field, FieldValue::Error(kind)))
                .collect(),
            error: Some(error),
        }
    }

    /// Whether this row carries error sentinels.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Value of `field`, if it was requested.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldValue> {
        self.values.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    /// Fields in this row, in order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.values.iter().map(|(f, _)| *f)
    }

    /// Column labels: `URL` followed by the requested fields.
    #[must_use]
    pub fn labels(&self) -> Vec<&'static str> {
        std::iter::once(URL_LABEL)
            .chain(self.fields().map(Field::label))
            .collect()
    }
}

impl Serialize for ResultRow {
    /// Serializes as an ordered map: `URL` first, then each requested label.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry(URL_LABEL, &self.url)?;
        for (field, value) in &self.values {
            map.serialize_entry(field.label(), value)?;
        }
        map.end()
    }
}
