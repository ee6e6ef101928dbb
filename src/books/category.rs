use std::fmt;

use serde::{Deserialize, Serialize};

/// Chart color used for categories without a dedicated entry.
pub const DEFAULT_CATEGORY_COLOR: &str = "#94A3B8";

/// Fixed set of expense categories used for grouping and reporting.
///
/// Serialized under the human-readable name ("Office Supplies", ...).
/// Unknown or missing names decode to [`ExpenseCategory::Other`] so that old
/// or hand-edited snapshots keep loading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum ExpenseCategory {
    OfficeSupplies,
    Rent,
    Utilities,
    Salaries,
    Marketing,
    Equipment,
    Software,
    Travel,
    #[default]
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::OfficeSupplies,
        ExpenseCategory::Rent,
        ExpenseCategory::Utilities,
        ExpenseCategory::Salaries,
        ExpenseCategory::Marketing,
        ExpenseCategory::Equipment,
        ExpenseCategory::Software,
        ExpenseCategory::Travel,
        ExpenseCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::OfficeSupplies => "Office Supplies",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Utilities => "Utilities",
            ExpenseCategory::Salaries => "Salaries",
            ExpenseCategory::Marketing => "Marketing",
            ExpenseCategory::Equipment => "Equipment",
            ExpenseCategory::Software => "Software",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Other => "Other",
        }
    }

    /// Maps a stored name onto a category, falling back to `Other`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == name)
            .unwrap_or(ExpenseCategory::Other)
    }

    /// Presentation color for charts. Cosmetic only.
    pub fn color(&self) -> &'static str {
        match self {
            ExpenseCategory::OfficeSupplies => "#3B82F6",
            ExpenseCategory::Rent => "#8B5CF6",
            ExpenseCategory::Utilities => "#EC4899",
            ExpenseCategory::Salaries => "#F59E0B",
            ExpenseCategory::Marketing => "#10B981",
            ExpenseCategory::Equipment => "#6366F1",
            ExpenseCategory::Software => "#14B8A6",
            ExpenseCategory::Travel => "#F97316",
            ExpenseCategory::Other => DEFAULT_CATEGORY_COLOR,
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ExpenseCategory {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ExpenseCategory> for String {
    fn from(category: ExpenseCategory) -> Self {
        category.as_str().to_string()
    }
}
