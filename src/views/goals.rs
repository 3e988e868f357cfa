//! Goals view
//!
//! Progress cards for each saving goal, and the goal actions the panel
//! dispatches (create, quick contribution, delete).

use chrono::NaiveDate;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{GoalId, Money, SavingGoal};
use crate::store::FinanceStore;

/// One goal as presented on the goals panel
#[derive(Debug, Clone, PartialEq)]
pub struct GoalCard {
    pub id: GoalId,
    pub name: String,
    pub current: Money,
    pub target: Money,
    pub remaining: Money,
    /// Width of the progress bar, within `[0, 100]`
    pub progress_percent: f64,
    /// Unclamped `current / target`; `None` for a zero target
    pub progress_ratio: Option<f64>,
    pub deadline: NaiveDate,
    /// Negative once the deadline has passed
    pub days_left: i64,
    pub complete: bool,
}

impl GoalCard {
    pub fn from_goal(goal: &SavingGoal, today: NaiveDate) -> Self {
        Self {
            id: goal.id.clone(),
            name: goal.name.clone(),
            current: goal.current_amount,
            target: goal.target_amount,
            remaining: goal.remaining(),
            progress_percent: goal.progress_percent(),
            progress_ratio: goal.progress_ratio(),
            deadline: goal.deadline,
            days_left: goal.days_until_deadline(today),
            complete: goal.is_complete(),
        }
    }

    pub fn is_overdue(&self) -> bool {
        !self.complete && self.days_left < 0
    }
}

/// Presentation data for the goals tab
#[derive(Debug, Clone, PartialEq)]
pub struct GoalsView {
    pub cards: Vec<GoalCard>,
    pub total_saved: Money,
    pub total_target: Money,
}

impl GoalsView {
    pub fn build(store: &FinanceStore, today: NaiveDate) -> Self {
        let goals = store.saving_goals();
        Self {
            cards: goals.iter().map(|g| GoalCard::from_goal(g, today)).collect(),
            total_saved: goals.iter().map(|g| g.current_amount).sum(),
            total_target: goals.iter().map(|g| g.target_amount).sum(),
        }
    }
}

/// Raw form fields of the "New Goal" dialog
#[derive(Debug, Clone, Default)]
pub struct NewGoalForm {
    pub name: String,
    pub target_amount: String,
    /// `YYYY-MM-DD`
    pub deadline: String,
}

impl NewGoalForm {
    /// Validate the form fields and build a goal with a fresh id
    pub fn parse(&self) -> FinanceResult<SavingGoal> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FinanceError::Validation("Goal name is required".into()));
        }

        let target = Money::parse(&self.target_amount)
            .map_err(|e| FinanceError::Validation(format!("Target amount: {}", e)))?;

        let deadline = NaiveDate::parse_from_str(self.deadline.trim(), "%Y-%m-%d").map_err(|_| {
            FinanceError::Validation(format!(
                "Deadline must be a date like 2025-12-31 (got '{}')",
                self.deadline.trim()
            ))
        })?;

        let goal = SavingGoal::new(name, target, deadline);
        goal.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(goal)
    }
}

/// Create a goal from the dialog fields and add it to the store
pub fn create_goal(store: &mut FinanceStore, form: &NewGoalForm) -> FinanceResult<GoalId> {
    let goal = form.parse()?;
    let id = goal.id.clone();
    store.add_saving_goal(goal)?;
    Ok(id)
}

/// The fixed-amount "Add" button on a goal card
pub fn quick_contribute(
    store: &mut FinanceStore,
    id: &GoalId,
    amount: Money,
    today: NaiveDate,
) -> FinanceResult<GoalCard> {
    let goal = store.update_saving_goal(id, amount)?;
    Ok(GoalCard::from_goal(goal, today))
}
