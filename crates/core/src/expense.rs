//! Expense input validation.
//!
//! Both creation and partial-update paths funnel through [`validate_expense`]
//! so a merged update is held to the same rules as a fresh record.

use rust_decimal::Decimal;
use thiserror::Error;

use finbook_shared::Category;

/// A validated expense draft, ready to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Trimmed, non-empty description.
    pub description: String,
    /// Non-negative amount.
    pub amount: Decimal,
    /// Parsed category.
    pub category: Category,
}

/// Validation failures for expense input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseValidationError {
    /// Description is empty after trimming.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Amount is below zero.
    #[error("amount must be at least 0")]
    NegativeAmount,

    /// Category is not in the fixed set.
    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Validates expense fields and normalizes them into a draft.
///
/// The description is trimmed; a whitespace-only description is rejected the
/// same as an empty one.
///
/// # Errors
///
/// Returns the first failing rule among description, amount, and category.
pub fn validate_expense(
    description: &str,
    amount: Decimal,
    category: &str,
) -> Result<ExpenseDraft, ExpenseValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ExpenseValidationError::EmptyDescription);
    }

    if amount < Decimal::ZERO {
        return Err(ExpenseValidationError::NegativeAmount);
    }

    let category = category
        .parse::<Category>()
        .map_err(|e| ExpenseValidationError::UnknownCategory(e.0))?;

    Ok(ExpenseDraft {
        description: description.to_string(),
        amount,
        category,
    })
}
