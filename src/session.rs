use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::error::Result;
use crate::render;
use crate::seed::Dataset;
use crate::state::{reduce, Action, DashboardState, Notice};

/// What the host shows after one action: an optional alert and the fully
/// re-rendered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub notice: Option<Notice>,
    pub document: String,
}

/// Drives the reducer one action at a time and re-renders after each.
#[derive(Debug, Clone)]
pub struct Session {
    state: DashboardState,
    config: DashboardConfig,
}

impl Session {
    pub fn new(data: Dataset, config: DashboardConfig) -> Self {
        Self {
            state: DashboardState::new(data),
            config,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn render(&self) -> String {
        render::render_document(&self.state, &self.config)
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Frame> {
        self.dispatch_at(action, Utc::now())
    }

    /// Validation failures become alerts and leave the state as it was;
    /// lookup misses are returned as errors, also without a state change.
    pub fn dispatch_at(&mut self, action: Action, now: DateTime<Utc>) -> Result<Frame> {
        debug!(action = action.name(), "dispatching");
        let notice = match reduce(&self.state, &action, now) {
            Ok(transition) => {
                self.state = transition.state;
                transition.notice
            }
            Err(error) if error.is_validation() => {
                warn!(action = action.name(), %error, "action rejected");
                Some(Notice::Alert(error.to_string()))
            }
            Err(error) => {
                warn!(action = action.name(), %error, "action failed");
                return Err(error);
            }
        };

        Ok(Frame {
            notice,
            document: self.render(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use crate::models::{Page, Role};
    use crate::seed;

    fn session() -> Session {
        Session::new(seed::dataset().unwrap(), DashboardConfig::default())
    }

    #[test]
    fn every_action_rerenders_the_document() {
        let mut session = session();
        let frame = session.dispatch(Action::NavigateTo(Page::Syllabus)).unwrap();
        assert!(frame.document.contains("<h2>Syllabus Tracker</h2>"));
        assert_eq!(frame.document, session.render());
    }

    #[test]
    fn validation_failure_alerts_without_mutation() {
        let mut session = session();
        let before = session.state().clone();
        let frame = session
            .dispatch(Action::AddTopic { name: String::new() })
            .unwrap();
        assert_eq!(frame.notice, Some(Notice::Alert("Please enter a topic name".to_string())));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn lookup_miss_is_returned_and_state_kept() {
        let mut session = session();
        let before = session.state().clone();
        let err = session
            .dispatch(Action::ToggleTopic { subject_id: 1, topic_id: 1234 })
            .unwrap_err();
        assert_eq!(err, DashboardError::TopicNotFound { subject_id: 1, topic_id: 1234 });
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn role_switch_keeps_unknown_page_on_dashboard() {
        let mut session = session();
        session.dispatch(Action::NavigateTo(Page::Syllabus)).unwrap();
        let frame = session.dispatch(Action::SwitchRole(Role::Student)).unwrap();
        assert_eq!(session.state().page, Page::Syllabus);
        assert!(frame.document.contains("<h2>Student Dashboard</h2>"));
    }
}
