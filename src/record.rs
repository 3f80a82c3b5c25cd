//! The normalized resume record.
//!
//! A [`ResumeRecord`] is built exactly once from a decoded field map. Building it
//! never fails: every field that is absent, not a string, or the empty string
//! in the source map is replaced with a fixed fallback, so downstream code can rely on every
//! field being a non-empty string.

use serde_json::{Map, Value};

/// A field of a resume record.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Linkedin,
    Github,
    Summary,
    Experience,
    Skills,
    Education,
}

/// Every field, the key it is read from and its fallback value.
pub const FIELD_DEFAULTS: [(Field, &str, &str); 9] = [
    (Field::Name, "name", "No name provided."),
    (Field::Email, "email", "No email provided."),
    (Field::Phone, "phone", "No phone provided."),
    (Field::Linkedin, "linkedin", "https://www.linkedin.com"),
    (Field::Github, "github", "https://github.com"),
    (Field::Summary, "summary_section", "No summary provided."),
    (Field::Experience, "experience_section", "No experience provided."),
    (Field::Skills, "skills_section", "No skills provided."),
    (Field::Education, "education_section", "No education provided."),
];

impl Field {
    /// All fields, in declaration order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Linkedin,
        Field::Github,
        Field::Summary,
        Field::Experience,
        Field::Skills,
        Field::Education,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The key this field is read from in the source map.
    pub fn key(self) -> &'static str {
        FIELD_DEFAULTS[self.index()].1
    }

    /// The value used when the source map has no usable value for this field.
    pub fn default_value(self) -> &'static str {
        FIELD_DEFAULTS[self.index()].2
    }
}

/// A resume with every field guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResumeRecord {
    values: [String; 9],
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self::from_map(&Map::new())
    }
}

impl ResumeRecord {
    /// Build a record from a decoded field map.
    ///
    /// Keys are matched case-sensitively. A value is taken over verbatim if it is
    /// a non-empty string, anything else falls back to the field's default.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let values = FIELD_DEFAULTS.map(|(_, key, default)| {
            match map.get(key).and_then(Value::as_str) {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => default.to_string(),
            }
        });

        Self { values }
    }

    /// Return the value of a field.
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    /// Whether a field holds its fallback value.
    pub fn is_default(&self, field: Field) -> bool {
        self.get(field) == field.default_value()
    }

    /// The name of the person.
    pub fn name(&self) -> &str {
        self.get(Field::Name)
    }

    /// The email address.
    pub fn email(&self) -> &str {
        self.get(Field::Email)
    }

    /// The phone number.
    pub fn phone(&self) -> &str {
        self.get(Field::Phone)
    }

    /// The LinkedIn profile URL.
    pub fn linkedin_url(&self) -> &str {
        self.get(Field::Linkedin)
    }

    /// The GitHub profile URL.
    pub fn github_url(&self) -> &str {
        self.get(Field::Github)
    }

    /// The summary section body.
    pub fn summary(&self) -> &str {
        self.get(Field::Summary)
    }

    /// The experience section body.
    pub fn experience(&self) -> &str {
        self.get(Field::Experience)
    }

    /// The skills section body.
    pub fn skills(&self) -> &str {
        self.get(Field::Skills)
    }

    /// The education section body.
    pub fn education(&self) -> &str {
        self.get(Field::Education)
    }
}

impl From<&Map<String, Value>> for ResumeRecord {
    fn from(value: &Map<String, Value>) -> Self {
        Self::from_map(value)
    }
}
