//! Field vocabulary and cell values.
//!
//! The set of extractable fields is fixed at compile time; callers build
//! their field pickers from [`Field::ALL`].

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::ErrorKind;

/// Label of the identifying column present in every row.
pub const URL_LABEL: &str = "URL";

/// A selectable on-page SEO field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    H1,
    H2,
    MetaTitle,
    MetaTitleLength,
    MetaDescription,
    MetaDescriptionLength,
    Canonical,
    MetaRobots,
}

impl Field {
    /// Every field, in display order.
    pub const ALL: [Self; 8] = [
        Self::H1,
        Self::H2,
        Self::MetaTitle,
        Self::MetaTitleLength,
        Self::MetaDescription,
        Self::MetaDescriptionLength,
        Self::Canonical,
        Self::MetaRobots,
    ];

    /// Column label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::H1 => "H1",
            Self::H2 => "H2",
            Self::MetaTitle => "Meta title",
            Self::MetaTitleLength => "Meta title length",
            Self::MetaDescription => "Meta description",
            Self::MetaDescriptionLength => "Meta description length",
            Self::Canonical => "Canonical",
            Self::MetaRobots => "Meta robots",
        }
    }

    /// Whether the field holds a character count rather than text.
    #[must_use]
    pub const fn is_length(self) -> bool {
        matches!(self, Self::MetaTitleLength | Self::MetaDescriptionLength)
    }

    /// Parse a comma-separated field list, keeping first occurrences in order.
    ///
    /// ```
    /// use rs_seo_extractor::Field;
    ///
    /// let fields = Field::parse_list("h1, meta-title, H1").unwrap();
    /// assert_eq!(fields, vec![Field::H1, Field::MetaTitle]);
    /// ```
    pub fn parse_list(list: &str) -> Result<Vec<Self>, UnknownField> {
        let parsed = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Self>, _>>()?;
        Ok(dedup_fields(&parsed))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A field name outside the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field `{0}`")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    /// Accepts the column label or a kebab/snake-case alias, case-insensitively
    /// (`"Meta title"`, `"meta-title"`, `"meta_title"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '_' => ' ',
                c => c.to_ascii_lowercase(),
            })
            .collect();
        let key = key.split_whitespace().collect::<Vec<_>>().join(" ");

        Self::ALL
            .into_iter()
            .find(|field| field.label().to_ascii_lowercase() == key)
            .ok_or_else(|| UnknownField(s.trim().to_string()))
    }
}

/// Remove repeated fields, keeping the first occurrence of each.
#[must_use]
pub fn dedup_fields(fields: &[Field]) -> Vec<Field> {
    let mut out = Vec::with_capacity(fields.len());
    for field in fields {
        if !out.contains(field) {
            out.push(*field);
        }
    }
    out
}

/// Value of one cell in a [`ResultRow`](crate::ResultRow).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Extracted text; empty when the tag is absent.
    Text(String),
    /// Character count; zero when the tag is absent.
    Count(usize),
    /// The URL failed; rendered as the kind's sentinel.
    Error(ErrorKind),
}

impl FieldValue {
    /// Whether this cell carries an error sentinel.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Text content, if this is a text cell.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Count, if this is a length cell.
    #[must_use]
    pub const fn as_count(&self) -> Option<usize> {
        match self {
            Self::Count(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Count(n) => write!(f, "{n}"),
            Self::Error(kind) => f.write_str(kind.sentinel()),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Count(n) => serializer.serialize_u64(*n as u64),
            Self::Error(kind) => serializer.serialize_str(kind.sentinel()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.label().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn aliases_are_accepted() {
        assert_eq!("meta-description".parse::<Field>(), Ok(Field::MetaDescription));
        assert_eq!("META_ROBOTS".parse::<Field>(), Ok(Field::MetaRobots));
        assert_eq!("  meta  title length ".parse::<Field>(), Ok(Field::MetaTitleLength));
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert_eq!("URL".parse::<Field>(), Err(UnknownField("URL".to_string())));
        assert!(Field::parse_list("h1,og:title").is_err());
    }

    #[test]
    fn parse_list_skips_blanks() {
        assert_eq!(Field::parse_list("h2,,canonical,").unwrap(), vec![Field::H2, Field::Canonical]);
        assert!(Field::parse_list("").unwrap().is_empty());
    }

    #[test]
    fn value_serialization() {
        assert_eq!(serde_json::to_string(&FieldValue::Count(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&FieldValue::Text("a".into())).unwrap(), "\"a\"");
        assert_eq!(
            serde_json::to_string(&FieldValue::Error(ErrorKind::RequestError)).unwrap(),
            "\"ERROR: RequestError\""
        );
    }

    #[test]
    fn only_length_fields_are_counts() {
        let lengths: Vec<_> = Field::ALL.into_iter().filter(|f| f.is_length()).collect();
        assert_eq!(lengths, vec![Field::MetaTitleLength, Field::MetaDescriptionLength]);
    }
}
