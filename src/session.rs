use crate::models::{Goal, GoalKey};
use crate::remote::RemoteError;
use chrono::NaiveDate;

pub const LOAD_ERROR_MESSAGE: &str = "Connection error.";
pub const SAVE_ERROR_MESSAGE: &str = "Failed to save goal.";

/// Everything the view needs for the selected day.
///
/// Goals are replaced wholesale by loads and mutated one entry at a time by
/// add/toggle/delete. At most one goal exists per [`GoalKey`].
#[derive(Debug, Clone)]
pub struct SessionState {
    pub date: NaiveDate,
    pub goals: Vec<Goal>,
    pub loading: bool,
    pub error: Option<String>,
    /// Server ids whose delete call failed since the last successful load.
    pub failed_deletes: Vec<i64>,
    load_generation: u64,
}

impl SessionState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            goals: Vec::new(),
            loading: false,
            error: None,
            failed_deletes: Vec::new(),
            load_generation: 0,
        }
    }

    /// Switches the selected day. Goals of the previous day are dropped.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.goals.clear();
        self.failed_deletes.clear();
    }

    /// Marks a load as issued and returns its generation.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Applies a load outcome if it belongs to the most recently issued load.
    ///
    /// Returns `false` when the outcome was superseded and discarded.
    pub fn finish_load(
        &mut self,
        generation: u64,
        outcome: Result<Vec<Goal>, RemoteError>,
    ) -> bool {
        if generation != self.load_generation {
            return false;
        }

        self.loading = false;
        match outcome {
            Ok(goals) => {
                self.goals = goals;
                self.error = None;
                self.failed_deletes.clear();
            }
            Err(_) => {
                self.error = Some(LOAD_ERROR_MESSAGE.to_string());
            }
        }
        true
    }

    pub fn goal(&self, key: GoalKey) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.key == key)
    }

    pub fn goal_mut(&mut self, key: GoalKey) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|goal| goal.key == key)
    }

    pub fn push_goal(&mut self, goal: Goal) {
        self.goals.retain(|existing| existing.key != goal.key);
        self.goals.push(goal);
    }

    /// Swaps the entry at `key` for `goal`, keeping its position.
    ///
    /// If `goal.key` is already present elsewhere (a reload delivered it
    /// first) the entry at `key` is dropped instead. Returns `false` when
    /// `key` is no longer in the list.
    pub fn replace_goal(&mut self, key: GoalKey, goal: Goal) -> bool {
        let Some(index) = self.goals.iter().position(|existing| existing.key == key) else {
            return false;
        };

        if goal.key != key && self.goal(goal.key).is_some() {
            self.goals.remove(index);
        } else {
            self.goals[index] = goal;
        }
        true
    }

    pub fn remove_goal(&mut self, key: GoalKey) -> Option<Goal> {
        let index = self.goals.iter().position(|goal| goal.key == key)?;
        Some(self.goals.remove(index))
    }
}
