use crate::calendar::{format_for_display, today, DisplayLocale};
use crate::models::Goal;
use crate::session::SessionState;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub date: NaiveDate,
    pub label: String,
    pub goals: Vec<Goal>,
    pub total: usize,
    pub completed: usize,
    pub progress: u8,
    pub loading: bool,
    pub error: Option<String>,
    /// Set only on the view answering the operation that raised it.
    pub alert: Option<String>,
    pub failed_deletes: Vec<i64>,
}

/// Incomplete goals first, completed last; order within each group is kept.
pub fn sorted_goals(goals: &[Goal]) -> Vec<Goal> {
    let mut sorted = goals.to_vec();
    sorted.sort_by_key(|goal| goal.completed);
    sorted
}

/// Share of completed goals as a whole percentage, rounded half up.
///
/// Integer arithmetic, so exact halves like 29/200 round up to 15.
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((200 * completed + total) / (2 * total)) as u8
}

pub fn build_view(state: &SessionState, locale: DisplayLocale) -> SessionView {
    build_view_at(today(), state, locale)
}

pub fn build_view_at(
    today: NaiveDate,
    state: &SessionState,
    locale: DisplayLocale,
) -> SessionView {
    let total = state.goals.len();
    let completed = state.goals.iter().filter(|goal| goal.completed).count();

    SessionView {
        date: state.date,
        label: format_for_display(state.date, today, locale),
        goals: sorted_goals(&state.goals),
        total,
        completed,
        progress: progress_percent(completed, total),
        loading: state.loading,
        error: state.error.clone(),
        alert: None,
        failed_deletes: state.failed_deletes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalKey, RemoteMeta};

    fn goal(id: i64, completed: bool) -> Goal {
        Goal::from(RemoteMeta {
            id,
            title: format!("goal {id}"),
            category: "Rotina".to_string(),
            completed,
        })
    }

    #[test]
    fn sorted_goals_partitions_stably() {
        let goals = vec![
            goal(1, true),
            goal(2, false),
            goal(3, true),
            goal(4, false),
            goal(5, false),
        ];
        let ids: Vec<_> = sorted_goals(&goals).iter().map(|goal| goal.key).collect();
        assert_eq!(
            ids,
            [2, 4, 5, 1, 3].map(GoalKey::Remote).to_vec()
        );
    }

    #[test]
    fn sorted_goals_leaves_input_untouched() {
        let goals = vec![goal(1, true), goal(2, false)];
        let _ = sorted_goals(&goals);
        assert_eq!(goals[0].key, GoalKey::Remote(1));
    }

    #[test]
    fn progress_percent_rounds_and_handles_empty() {
        assert_eq!(progress_percent(0, 0), 0);
        assert_eq!(progress_percent(1, 4), 25);
        assert_eq!(progress_percent(1, 3), 33);
        assert_eq!(progress_percent(2, 3), 67);
        assert_eq!(progress_percent(1, 8), 13);
        assert_eq!(progress_percent(5, 5), 100);
    }

    #[test]
    fn progress_percent_rounds_exact_halves_up() {
        assert_eq!(progress_percent(29, 200), 15);
        assert_eq!(progress_percent(57, 200), 29);
        assert_eq!(progress_percent(1, 200), 1);
        assert_eq!(progress_percent(199, 200), 100);
    }

    #[test]
    fn view_counts_and_labels_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let mut state = SessionState::new(date);
        state.push_goal(goal(1, true));
        state.push_goal(goal(2, false));

        let view = build_view_at(date, &state, DisplayLocale::En);
        assert_eq!(view.label, "Today");
        assert_eq!(view.total, 2);
        assert_eq!(view.completed, 1);
        assert_eq!(view.progress, 50);
        assert_eq!(view.goals[0].key, GoalKey::Remote(2));
    }
}
