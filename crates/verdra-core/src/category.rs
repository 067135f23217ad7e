//! Issue categories and their presentation

use serde::{Deserialize, Serialize};

/// Class of finding reported by the scan service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Database calls inside loops
    DbLoops,
    /// Logging calls inside loops
    LoggingLoops,
    /// Imports that are never used
    UnusedImports,
    /// Heavy imports
    LargeImports,
    /// Functions that are never called
    UnusedFunctions,
    /// Key outside the known set, kept verbatim
    Other(String),
}

/// Static presentation attributes for a category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Key used in result sets
    pub key: &'static str,
    /// Field name in the scan API response
    pub wire_field: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    /// Accent color (hex) for icons
    pub accent: &'static str,
    /// Tailwind border class for section and row accents
    pub border_class: &'static str,
    pub description: &'static str,
}

/// Known categories in display order. The first entry is the most severe.
pub static CATEGORY_TABLE: [CategoryStyle; 5] = [
    CategoryStyle {
        key: "dbLoops",
        wire_field: "db_calls_in_loops",
        title: "DB Calls in Loops",
        icon: "🗄️",
        accent: "#d32f2f",
        border_class: "border-red-600",
        description: "Queries issued once per iteration instead of once per batch.",
    },
    CategoryStyle {
        key: "loggingLoops",
        wire_field: "logging_in_loops",
        title: "Logging in Loops",
        icon: "📝",
        accent: "#ed6c02",
        border_class: "border-orange-500",
        description: "Log statements that multiply with every loop iteration.",
    },
    CategoryStyle {
        key: "unusedImports",
        wire_field: "unused_imports",
        title: "Unused Imports",
        icon: "📦",
        accent: "#0288d1",
        border_class: "border-sky-600",
        description: "Modules loaded at cold start that nothing references.",
    },
    CategoryStyle {
        key: "largeImports",
        wire_field: "large_imports",
        title: "Large Imports",
        icon: "🐞",
        accent: "#ed6c02",
        border_class: "border-orange-500",
        description: "Heavy dependencies that inflate package size and startup time.",
    },
    CategoryStyle {
        key: "unusedFunctions",
        wire_field: "unused_functions",
        title: "Unused Functions",
        icon: "ƒ",
        accent: "#0288d1",
        border_class: "border-sky-600",
        description: "Dead code that still ships with every deployment.",
    },
];

/// Presentation for keys outside the known set. The title is replaced by the raw key.
pub static DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    key: "",
    wire_field: "",
    title: "",
    icon: "💻",
    accent: "#039956",
    border_class: "border-emerald-600",
    description: "",
};

impl Category {
    /// Known categories in enumeration order
    pub const KNOWN: [Category; 5] = [
        Category::DbLoops,
        Category::LoggingLoops,
        Category::UnusedImports,
        Category::LargeImports,
        Category::UnusedFunctions,
    ];

    pub fn from_key(key: &str) -> Self {
        match CATEGORY_TABLE.iter().position(|style| style.key == key) {
            Some(index) => Category::KNOWN[index].clone(),
            None => Category::Other(key.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Category::Other(key) => key.as_str(),
            _ => self.style().key,
        }
    }

    /// Human-readable name; unknown categories use their raw key
    pub fn title(&self) -> &str {
        match self {
            Category::Other(key) => key.as_str(),
            _ => self.style().title,
        }
    }

    pub fn style(&self) -> &'static CategoryStyle {
        match self.index() {
            Some(index) => &CATEGORY_TABLE[index],
            None => &DEFAULT_STYLE,
        }
    }

    pub fn is_known(&self) -> bool {
        self.index().is_some()
    }

    fn index(&self) -> Option<usize> {
        match self {
            Category::DbLoops => Some(0),
            Category::LoggingLoops => Some(1),
            Category::UnusedImports => Some(2),
            Category::LargeImports => Some(3),
            Category::UnusedFunctions => Some(4),
            Category::Other(_) => None,
        }
    }
}

impl From<String> for Category {
    fn from(key: String) -> Self {
        Category::from_key(&key)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.key().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys_resolve() {
        for (category, style) in Category::KNOWN.iter().zip(CATEGORY_TABLE.iter()) {
            assert_eq!(&Category::from_key(style.key), category);
            assert_eq!(category.key(), style.key);
            assert!(category.is_known());
        }
    }

    #[test]
    fn test_db_loops_presentation() {
        let category = Category::DbLoops;
        assert_eq!(category.title(), "DB Calls in Loops");
        assert_eq!(category.style().accent, "#d32f2f");
        assert_eq!(category.style().wire_field, "db_calls_in_loops");
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let category = Category::from_key("mysteryCategory");
        assert_eq!(category, Category::Other("mysteryCategory".to_string()));
        assert_eq!(category.title(), "mysteryCategory");
        assert_eq!(category.key(), "mysteryCategory");
        assert_eq!(category.style(), &DEFAULT_STYLE);
        assert!(!category.is_known());
    }

    #[test]
    fn test_serde_uses_key() {
        let json = serde_json::to_string(&Category::UnusedImports).unwrap();
        assert_eq!(json, "\"unusedImports\"");

        let parsed: Category = serde_json::from_str("\"largeImports\"").unwrap();
        assert_eq!(parsed, Category::LargeImports);
    }
}
