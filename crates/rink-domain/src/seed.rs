//! Starter expense tree for a new scenario.

use crate::expense::{Expense, ExpenseCategory};

type SeedLine = (&'static str, f64, &'static str);

const STAFF: [SeedLine; 4] = [
    ("Supervisors", 100_000.0, "Rink supervisors and management staff"),
    ("Ticket Office", 100_000.0, "Ticket office and customer service staff"),
    ("Maintenance", 100_000.0, "Maintenance and cleaning staff"),
    ("Security", 100_000.0, "Security personnel"),
];

const UTILITIES: [SeedLine; 4] = [
    (
        "Electricity for Refrigeration",
        80_000.0,
        "Power consumption for ice rink cooling system",
    ),
    ("Lighting", 40_000.0, "Facility lighting costs"),
    ("Heating", 40_000.0, "Building heating expenses"),
    ("Water", 20_000.0, "Water consumption and sewage"),
];

const MAINTENANCE: [SeedLine; 3] = [
    ("Ice Resurfacing", 40_000.0, "Ice maintenance and resurfacing equipment"),
    ("Equipment Repairs", 40_000.0, "Regular equipment maintenance and repairs"),
    ("General Maintenance", 40_000.0, "Building and facility maintenance"),
];

const INSURANCE: [SeedLine; 2] = [
    ("Insurance", 40_000.0, "Liability and property insurance"),
    ("Licenses", 20_000.0, "Operating licenses and permits"),
];

const MARKETING: [SeedLine; 2] = [
    ("Advertising", 25_000.0, "Digital and traditional advertising"),
    ("Promotions", 15_000.0, "Special events and promotional activities"),
];

const MISCELLANEOUS: [SeedLine; 2] = [
    ("Office Supplies", 20_000.0, "General office supplies and equipment"),
    ("Contingency", 30_000.0, "Emergency and unexpected expenses"),
];

/// Builds the default categories with fresh identifiers.
pub fn initial_expenses() -> Vec<ExpenseCategory> {
    [
        ("Staff", &STAFF[..]),
        ("Utilities", &UTILITIES[..]),
        ("Maintenance", &MAINTENANCE[..]),
        ("Insurance and Licenses", &INSURANCE[..]),
        ("Marketing", &MARKETING[..]),
        ("Miscellaneous", &MISCELLANEOUS[..]),
    ]
    .into_iter()
    .map(|(name, lines)| {
        let expenses = lines
            .iter()
            .map(|&(name, amount, description)| Expense::seeded(name, amount, description))
            .collect();
        ExpenseCategory::new(name).with_expenses(expenses)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_totals_match_category_budgets() {
        let categories = initial_expenses();
        let totals: Vec<(&str, f64)> = categories
            .iter()
            .map(|category| (category.name.as_str(), category.total_amount()))
            .collect();
        assert_eq!(
            totals,
            [
                ("Staff", 400_000.0),
                ("Utilities", 180_000.0),
                ("Maintenance", 120_000.0),
                ("Insurance and Licenses", 60_000.0),
                ("Marketing", 40_000.0),
                ("Miscellaneous", 50_000.0),
            ]
        );
    }

    #[test]
    fn seed_identifiers_are_unique() {
        let categories = initial_expenses();
        let mut ids: Vec<_> = categories
            .iter()
            .flat_map(|category| category.expenses.iter().map(|expense| expense.id))
            .collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }
}
