//! Itemised yearly operating expenses grouped by category.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::*, error::ValidationError};

/// A single yearly cost line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExpenseParts")]
pub struct Expense {
    pub id: Uuid,
    pub name: String,
    amount: f64,
    pub description: String,
}

/// Wire shape of an [`Expense`]; the amount is checked before it is accepted.
#[derive(Deserialize)]
struct ExpenseParts {
    id: Uuid,
    name: String,
    amount: f64,
    #[serde(default)]
    description: String,
}

impl TryFrom<ExpenseParts> for Expense {
    type Error = ValidationError;

    fn try_from(parts: ExpenseParts) -> Result<Self, Self::Error> {
        let mut expense = Self {
            id: parts.id,
            name: parts.name,
            amount: 0.0,
            description: parts.description,
        };
        expense.set_amount(parts.amount)?;
        Ok(expense)
    }
}

impl Expense {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let mut expense = Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount: 0.0,
            description: description.into(),
        };
        expense.set_amount(amount)?;
        Ok(expense)
    }

    /// Builds a seed line whose amount is a known non-negative constant.
    pub(crate) fn seeded(name: &str, amount: f64, description: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn set_amount(&mut self, amount: f64) -> Result<(), ValidationError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ValidationError::NegativeAmount(amount));
        }
        self.amount = amount;
        Ok(())
    }

    /// Applies a single-field edit.
    pub fn apply(&mut self, update: ExpenseUpdate) -> Result<(), ValidationError> {
        match update {
            ExpenseUpdate::Name(name) => self.name = name,
            ExpenseUpdate::Amount(amount) => self.set_amount(amount)?,
            ExpenseUpdate::Description(description) => self.description = description,
        }
        Ok(())
    }
}

impl Identifiable for Expense {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Edits accepted by an expense row.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseUpdate {
    Name(String),
    Amount(f64),
    Description(String),
}

/// Named group of expenses. The category total is always derived from its lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCategory {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl ExpenseCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            expenses: Vec::new(),
        }
    }

    pub fn with_expenses(mut self, expenses: Vec<Expense>) -> Self {
        self.expenses = expenses;
        self
    }

    /// Sum of every expense in the category.
    pub fn total_amount(&self) -> f64 {
        self.expenses.iter().map(Amounted::amount).sum()
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    /// Removes the expense and returns it, if it belonged to this category.
    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let position = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(position))
    }
}

impl Identifiable for ExpenseCategory {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for ExpenseCategory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Amounted for ExpenseCategory {
    fn amount(&self) -> f64 {
        self.total_amount()
    }
}
