//! Expense editing and yearly/monthly aggregation.

use tracing::debug;
use uuid::Uuid;

use rink_domain::{
    Amounted, Expense, ExpenseCategory, ExpenseUpdate, Identifiable, NamedEntity, ScenarioSnapshot,
};

use crate::{rounding::whole_units, CoreError};

/// Rounded expense figures for the projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseTotals {
    /// Unrounded sum of every category.
    pub total_yearly: f64,
    pub yearly: i64,
    pub monthly: i64,
}

/// Provides validated operations over the scenario's expense categories.
///
/// Category totals are never stored, so every edit here keeps them in step.
pub struct ExpenseService;

impl ExpenseService {
    /// Sum of every category's total.
    pub fn total_yearly(categories: &[ExpenseCategory]) -> f64 {
        categories.iter().map(Amounted::amount).sum()
    }

    /// Yearly total and its flat monthly equivalent, both rounded.
    pub fn totals(categories: &[ExpenseCategory]) -> Result<ExpenseTotals, CoreError> {
        let total_yearly = Self::total_yearly(categories);
        Ok(ExpenseTotals {
            total_yearly,
            yearly: whole_units(total_yearly, "yearly expenses")?,
            monthly: whole_units(total_yearly / 12.0, "monthly expenses")?,
        })
    }

    /// Adds an empty category and returns its identifier.
    pub fn add_category(
        scenario: &mut ScenarioSnapshot,
        name: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let name = name.into();
        Self::validate_category_name(scenario, None, &name)?;
        let category = ExpenseCategory::new(name.trim());
        let id = category.id;
        debug!(category = %category.name, "expense category added");
        scenario.expenses.push(category);
        Ok(id)
    }

    pub fn rename_category(
        scenario: &mut ScenarioSnapshot,
        category_id: Uuid,
        name: impl Into<String>,
    ) -> Result<(), CoreError> {
        let name = name.into();
        Self::validate_category_name(scenario, Some(category_id), &name)?;
        let category = scenario
            .category_mut(category_id)
            .ok_or(CoreError::CategoryNotFound(category_id))?;
        category.name = name.trim().to_string();
        Ok(())
    }

    /// Removes a category together with all of its expenses.
    pub fn remove_category(
        scenario: &mut ScenarioSnapshot,
        category_id: Uuid,
    ) -> Result<ExpenseCategory, CoreError> {
        let position = scenario
            .expenses
            .iter()
            .position(|category| category.id == category_id)
            .ok_or(CoreError::CategoryNotFound(category_id))?;
        let removed = scenario.expenses.remove(position);
        debug!(
            category = %removed.name,
            expenses = removed.expenses.len(),
            "expense category removed"
        );
        Ok(removed)
    }

    /// Adds an expense with a fresh identifier to the given category.
    pub fn add_expense(
        scenario: &mut ScenarioSnapshot,
        category_id: Uuid,
        name: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Uuid, CoreError> {
        let expense = Expense::new(name, amount, description)?;
        let category = scenario
            .category_mut(category_id)
            .ok_or(CoreError::CategoryNotFound(category_id))?;
        let id = category.add_expense(expense);
        debug!(category = %category.name, total = category.total_amount(), "expense added");
        Ok(id)
    }

    /// Applies a single-field edit to an expense.
    pub fn update_expense(
        scenario: &mut ScenarioSnapshot,
        category_id: Uuid,
        expense_id: Uuid,
        update: ExpenseUpdate,
    ) -> Result<(), CoreError> {
        let category = scenario
            .category_mut(category_id)
            .ok_or(CoreError::CategoryNotFound(category_id))?;
        let expense = category
            .expense_mut(expense_id)
            .ok_or(CoreError::ExpenseNotFound(expense_id))?;
        expense.apply(update)?;
        Ok(())
    }

    pub fn remove_expense(
        scenario: &mut ScenarioSnapshot,
        category_id: Uuid,
        expense_id: Uuid,
    ) -> Result<Expense, CoreError> {
        let category = scenario
            .category_mut(category_id)
            .ok_or(CoreError::CategoryNotFound(category_id))?;
        category
            .remove_expense(expense_id)
            .ok_or(CoreError::ExpenseNotFound(expense_id))
    }

    fn validate_category_name(
        scenario: &ScenarioSnapshot,
        exclude: Option<Uuid>,
        candidate: &str,
    ) -> Result<(), CoreError> {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(CoreError::Validation(
                "Category name must not be empty".into(),
            ));
        }
        let duplicate = scenario.expenses.iter().any(|category| {
            exclude != Some(category.id()) && category.name().trim().to_lowercase() == normalized
        });
        if duplicate {
            Err(CoreError::Validation(format!(
                "Category `{}` already exists",
                candidate.trim()
            )))
        } else {
            Ok(())
        }
    }
}
