//! Display model for scan results
//!
//! Built fresh from a [`ScanResultSet`] on every render, so counts always
//! match the set being shown.

use crate::category::Category;
use crate::model::{Issue, ScanResultSet};

/// One collapsible section of the results panel
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub category: Category,
    pub title: String,
    pub icon: &'static str,
    pub accent: &'static str,
    pub border_class: &'static str,
    /// Whether the section starts open
    pub expanded: bool,
    pub issues: Vec<Issue>,
}

impl SectionView {
    pub fn count(&self) -> usize {
        self.issues.len()
    }

    /// Element id prefix, e.g. `dbLoops` for `dbLoops-header`/`dbLoops-content`
    pub fn anchor(&self) -> &str {
        self.category.key()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub total: usize,
    pub sections: Vec<SectionView>,
}

impl ResultsView {
    /// Sections for every non-empty category, in set order.
    ///
    /// The first section, the most severe kind present, starts expanded.
    pub fn build(set: &ScanResultSet) -> Self {
        let sections: Vec<SectionView> = set
            .iter()
            .filter(|(_, issues)| !issues.is_empty())
            .enumerate()
            .map(|(position, (category, issues))| {
                let style = category.style();
                SectionView {
                    category: category.clone(),
                    title: category.title().to_string(),
                    icon: style.icon,
                    accent: style.accent,
                    border_class: style.border_class,
                    expanded: position == 0,
                    issues: issues.to_vec(),
                }
            })
            .collect();

        Self {
            total: set.total_issues(),
            sections,
        }
    }

    /// Nothing to show: render the empty-state message instead of sections
    pub fn is_clean(&self) -> bool {
        self.total == 0
    }

    /// Header chip text, e.g. `1 issue found` / `3 issues found`
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "issue" } else { "issues" };
        format!("{} {} found", self.total, noun)
    }
}

/// Savings banner amount, two decimals
pub fn format_savings(amount: f64) -> String {
    format!("${:.2}", amount)
}
