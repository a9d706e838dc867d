// src/aggregate/categories.rs

#[cfg(test)]
#[path = "categories_test.rs"]
mod tests;

/// Category for criteria outside the table.
pub const OTHER: &str = "Other";

/// Criterion prefix (`principle.guideline`) to report category.
const PREFIXES: &[(&str, &str)] = &[
    ("1.1", "Text Alternatives"),
    ("1.3", "Structure"),
    ("1.4", "Visual Presentation"),
    ("2.1", "Keyboard"),
    ("2.4", "Navigation"),
    ("3.2", "Consistency"),
    ("3.3", "Input Assistance"),
];

/// Every category, in presentation order. All are present in a report.
pub const CATEGORIES: &[&str] = &[
    "Text Alternatives",
    "Structure",
    "Visual Presentation",
    "Keyboard",
    "Navigation",
    "Consistency",
    "Input Assistance",
    OTHER,
];

#[must_use]
pub fn category_for(criterion: &str) -> &'static str {
    let mut parts = criterion.split('.');
    let (Some(principle), Some(guideline)) = (parts.next(), parts.next()) else {
        return OTHER;
    };
    PREFIXES
        .iter()
        .find(|(prefix, _)| prefix.split_once('.') == Some((principle, guideline)))
        .map_or(OTHER, |(_, category)| *category)
}
