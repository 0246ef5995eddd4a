use crate::controller::GoalSession;
use crate::remote::HttpRemoteStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<GoalSession<HttpRemoteStore>>,
}

impl AppState {
    pub fn new(session: GoalSession<HttpRemoteStore>) -> Self {
        Self {
            session: Arc::new(session),
        }
    }
}
