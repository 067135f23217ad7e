//! Scan result data model

use crate::category::Category;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One finding reported by the scan service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub filepath: String,
    pub line: u32,
    /// Offending symbol or function
    pub name: String,
}

impl Issue {
    pub fn new(filepath: impl Into<String>, line: u32, name: impl Into<String>) -> Self {
        Self {
            filepath: filepath.into(),
            line,
            name: name.into(),
        }
    }
}

/// Categorized issues for one repository scan.
///
/// Entries keep insertion order, which for sets built from a scan response is
/// the enumeration order of [`Category::KNOWN`]. Serialized as a JSON object
/// keyed by category key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanResultSet {
    entries: Vec<(Category, Vec<Issue>)>,
}

impl ScanResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ScanResultSet::insert`]
    pub fn with_category(mut self, category: Category, issues: Vec<Issue>) -> Self {
        self.insert(category, issues);
        self
    }

    /// Add a category. A repeated category replaces the earlier issues in place.
    pub fn insert(&mut self, category: Category, issues: Vec<Issue>) {
        match self.entries.iter().position(|(existing, _)| *existing == category) {
            Some(index) => self.entries[index].1 = issues,
            None => self.entries.push((category, issues)),
        }
    }

    pub fn get(&self, category: &Category) -> Option<&[Issue]> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == category)
            .map(|(_, issues)| issues.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Category, &[Issue])> {
        self.entries
            .iter()
            .map(|(category, issues)| (category, issues.as_slice()))
    }

    /// Number of category entries, empty ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of issue counts over every category
    pub fn total_issues(&self) -> usize {
        self.entries.iter().map(|(_, issues)| issues.len()).sum()
    }

    /// True when no category holds an issue
    pub fn is_clean(&self) -> bool {
        self.total_issues() == 0
    }
}

impl FromIterator<(Category, Vec<Issue>)> for ScanResultSet {
    fn from_iter<T: IntoIterator<Item = (Category, Vec<Issue>)>>(iter: T) -> Self {
        let mut set = ScanResultSet::new();
        for (category, issues) in iter {
            set.insert(category, issues);
        }
        set
    }
}

impl Serialize for ScanResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (category, issues) in &self.entries {
            map.serialize_entry(category.key(), issues)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ScanResultSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultSetVisitor;

        impl<'de> Visitor<'de> for ResultSetVisitor {
            type Value = ScanResultSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category keys to issue lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = ScanResultSet::new();
                while let Some((key, issues)) = access.next_entry::<String, Option<Vec<Issue>>>()? {
                    set.insert(Category::from(key), issues.unwrap_or_default());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(ResultSetVisitor)
    }
}

/// Outcome of a successful scan
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub results: ScanResultSet,
    /// Estimated monthly savings in USD, when the service reports one
    #[serde(default)]
    pub savings: Option<f64>,
}
