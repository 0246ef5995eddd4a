//! Goal list session controller.
//!
//! Mutations are applied to the local [`SessionState`] first and confirmed
//! against the [`RemoteStore`] afterwards. The state lock is never held
//! across a remote call, so overlapping operations interleave only at
//! network boundaries.
//!
//! - create: provisional `Local` entry, replaced by the server goal on
//!   success; marked `Failed` and fully reloaded on failure, with the alert
//!   returned to the submitter by [`GoalSession::submit_goal`].
//! - toggle: flipped locally, `Pending` until the store answers, `Failed`
//!   (not reverted) when it doesn't.
//! - delete: removed locally after confirmation; failures are recorded in
//!   `failed_deletes`, not reverted.

use crate::calendar::{self, DisplayLocale};
use crate::models::{CreateMetaRequest, Goal, GoalKey, SyncState};
use crate::progress::{build_view, SessionView};
use crate::remote::{RemoteError, RemoteStore};
use crate::session::{SessionState, SAVE_ERROR_MESSAGE};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

pub const DELETE_PROMPT: &str = "Delete goal?";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("goal {0:?} has not been confirmed by the store yet")]
    Unconfirmed(GoalKey),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub struct GoalSession<S> {
    store: S,
    state: Mutex<SessionState>,
    next_local: AtomicU64,
    locale: DisplayLocale,
}

impl<S: RemoteStore> GoalSession<S> {
    pub fn new(store: S, date: NaiveDate, locale: DisplayLocale) -> Self {
        Self {
            store,
            state: Mutex::new(SessionState::new(date)),
            next_local: AtomicU64::new(1),
            locale,
        }
    }

    pub fn starting_today(store: S, locale: DisplayLocale) -> Self {
        Self::new(store, calendar::today(), locale)
    }

    pub async fn view(&self) -> SessionView {
        let state = self.state.lock().await;
        build_view(&state, self.locale)
    }

    /// Replaces the goal list with the store's goals for the current date.
    ///
    /// Failures keep the previous list and set the connection error. When
    /// loads overlap, only the most recently issued one is applied.
    pub async fn load_goals(&self) {
        let (generation, date) = {
            let mut state = self.state.lock().await;
            (state.begin_load(), state.date)
        };

        let outcome = self
            .store
            .list(date)
            .await
            .map(|metas| metas.into_iter().map(Goal::from).collect::<Vec<_>>());
        match &outcome {
            Ok(goals) => debug!(%date, count = goals.len(), "loaded goals"),
            Err(err) => warn!(%date, "failed to load goals: {err}"),
        }

        let mut state = self.state.lock().await;
        if !state.finish_load(generation, outcome) {
            debug!(%date, generation, "discarded superseded load");
        }
    }

    pub async fn shift_day(&self, delta: i64) -> NaiveDate {
        let date = {
            let mut state = self.state.lock().await;
            let date = calendar::shift_day(state.date, delta);
            state.set_date(date);
            date
        };
        info!(%date, delta, "selected day");
        self.load_goals().await;
        date
    }

    /// Adds a goal for the current date.
    ///
    /// Returns `Ok(None)` for a blank title (nothing changes, nothing is
    /// sent) and the server key once the store confirms. On failure the
    /// provisional entry is marked `Failed` and the list reloaded before the
    /// error is returned.
    pub async fn add_goal(&self, title: &str) -> Result<Option<GoalKey>, SessionError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(None);
        }

        let local = GoalKey::Local(self.next_local.fetch_add(1, Ordering::Relaxed));
        let request = {
            let mut state = self.state.lock().await;
            state.push_goal(Goal::provisional(local, title));
            CreateMetaRequest::new(title, state.date)
        };

        match self.store.create(&request).await {
            Ok(meta) => {
                let goal = Goal::from(meta);
                let key = goal.key;
                let mut state = self.state.lock().await;
                if state.replace_goal(local, goal) {
                    debug!(?local, ?key, "confirmed goal");
                } else {
                    debug!(?local, ?key, "provisional goal gone before confirmation");
                }
                Ok(Some(key))
            }
            Err(err) => {
                error!(date = %request.date, "failed to create goal: {err}");
                if let Some(goal) = self.state.lock().await.goal_mut(local) {
                    goal.sync = SyncState::Failed;
                }
                self.load_goals().await;
                Err(err.into())
            }
        }
    }

    /// Adds a goal and returns the view for whoever submitted it.
    ///
    /// A failed create carries [`SAVE_ERROR_MESSAGE`] as the alert of this
    /// view only; no other caller ever sees it.
    pub async fn submit_goal(&self, title: &str) -> Result<SessionView, SessionError> {
        let alert = match self.add_goal(title).await {
            Ok(_) => None,
            Err(SessionError::Remote(_)) => Some(SAVE_ERROR_MESSAGE.to_string()),
            Err(err) => return Err(err),
        };
        let mut view = self.view().await;
        view.alert = alert;
        Ok(view)
    }

    /// Sets `completed` to `!current_completed` and sends it to the store.
    ///
    /// Unknown keys are ignored. Provisional goals are rejected.
    pub async fn toggle_goal(
        &self,
        key: GoalKey,
        current_completed: bool,
    ) -> Result<(), SessionError> {
        let id = key.remote_id().ok_or(SessionError::Unconfirmed(key))?;
        let completed = !current_completed;

        {
            let mut state = self.state.lock().await;
            let Some(goal) = state.goal_mut(key) else {
                return Ok(());
            };
            goal.completed = completed;
            goal.sync = SyncState::Pending;
        }

        let sync = match self.store.set_completed(id, completed).await {
            Ok(()) => SyncState::Synced,
            Err(err) => {
                warn!(id, completed, "failed to update goal: {err}");
                SyncState::Failed
            }
        };

        if let Some(goal) = self.state.lock().await.goal_mut(key) {
            goal.sync = sync;
        }
        Ok(())
    }

    /// Removes a goal once `confirm` accepts [`DELETE_PROMPT`].
    ///
    /// Returns whether the goal was removed locally. Unknown keys are ignored
    /// without prompting. Provisional goals are rejected.
    pub async fn delete_goal(
        &self,
        key: GoalKey,
        confirm: impl FnOnce(&str) -> bool,
    ) -> Result<bool, SessionError> {
        let id = key.remote_id().ok_or(SessionError::Unconfirmed(key))?;

        if self.state.lock().await.goal(key).is_none() {
            return Ok(false);
        }
        if !confirm(DELETE_PROMPT) {
            return Ok(false);
        }
        if self.state.lock().await.remove_goal(key).is_none() {
            return Ok(false);
        }

        if let Err(err) = self.store.delete(id).await {
            warn!(id, "failed to delete goal: {err}");
            self.state.lock().await.failed_deletes.push(id);
        }
        Ok(true)
    }
}
