use chrono::{DateTime, Utc};

use crate::error::{DashboardError, Result};
use crate::models::{Assignment, ClassStats, Modal, Page, Role, Subject, Topic};
use crate::seed::Dataset;

pub const EDIT_TOPIC_NOTICE: &str = "Edit functionality would open a modal with the topic details.";
pub const DELETE_TOPIC_PROMPT: &str = "Are you sure you want to delete this topic?";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub role: Role,
    pub page: Page,
    /// Id of the subject shown on the syllabus tracker.
    pub selected_subject: Option<u32>,
    pub subjects: Vec<Subject>,
    pub assignments: Vec<Assignment>,
    pub class_stats: ClassStats,
    pub modal: Option<Modal>,
    pub sidebar_open: bool,
}

impl DashboardState {
    pub fn new(data: Dataset) -> Self {
        let selected_subject = data.subjects.first().map(|s| s.id);
        Self {
            role: Role::Teacher,
            page: Page::Dashboard,
            selected_subject,
            subjects: data.subjects,
            assignments: data.assignments,
            class_stats: data.class_stats,
            modal: None,
            sidebar_open: false,
        }
    }

    pub fn subject(&self, id: u32) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn selected(&self) -> Option<&Subject> {
        self.selected_subject.and_then(|id| self.subject(id))
    }

    fn subject_mut(&mut self, id: u32) -> Result<&mut Subject> {
        self.subjects
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DashboardError::SubjectNotFound(id))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SwitchRole(Role),
    NavigateTo(Page),
    SelectSubject(u32),
    ToggleTopic { subject_id: u32, topic_id: i64 },
    DeleteTopic { subject_id: u32, topic_id: i64, confirmed: bool },
    EditTopic { topic_id: i64 },
    AddTopic { name: String },
    CreateAssignment { title: String, subject: String, due_date: String },
    OpenModal(Modal),
    CloseModal,
    ToggleSidebar,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SwitchRole(_) => "switch_role",
            Action::NavigateTo(_) => "navigate",
            Action::SelectSubject(_) => "select_subject",
            Action::ToggleTopic { .. } => "toggle_topic",
            Action::DeleteTopic { .. } => "delete_topic",
            Action::EditTopic { .. } => "edit_topic",
            Action::AddTopic { .. } => "add_topic",
            Action::CreateAssignment { .. } => "create_assignment",
            Action::OpenModal(_) => "open_modal",
            Action::CloseModal => "close_modal",
            Action::ToggleSidebar => "toggle_sidebar",
        }
    }
}

/// Blocking message the host shows after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Alert(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Alert(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: DashboardState,
    pub notice: Option<Notice>,
}

impl Transition {
    fn quiet(state: DashboardState) -> Self {
        Self { state, notice: None }
    }

    fn alert(state: DashboardState, text: impl Into<String>) -> Self {
        Self {
            state,
            notice: Some(Notice::Alert(text.into())),
        }
    }
}

/// Applies one user action. The input state is never modified; an error
/// means no transition took place.
pub fn reduce(state: &DashboardState, action: &Action, now: DateTime<Utc>) -> Result<Transition> {
    let mut next = state.clone();

    match action {
        Action::SwitchRole(role) => {
            next.role = *role;
        }
        Action::NavigateTo(page) => {
            next.page = page.clone();
            next.sidebar_open = false;
        }
        Action::SelectSubject(id) => {
            next.selected_subject = state.subject(*id).map(|s| s.id);
        }
        Action::ToggleTopic {
            subject_id,
            topic_id,
        } => {
            let topic = find_topic(next.subject_mut(*subject_id)?, *subject_id, *topic_id)?;
            topic.completed = !topic.completed;
            topic.date = topic.completed.then(|| now.date_naive());
        }
        Action::DeleteTopic {
            subject_id,
            topic_id,
            confirmed,
        } => {
            if !confirmed {
                return Ok(Transition::quiet(next));
            }
            let subject = next.subject_mut(*subject_id)?;
            find_topic(subject, *subject_id, *topic_id)?;
            subject.topics.retain(|t| t.id != *topic_id);
        }
        Action::EditTopic { .. } => {
            return Ok(Transition::alert(next, EDIT_TOPIC_NOTICE));
        }
        Action::AddTopic { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Err(DashboardError::EmptyTopicName);
            }
            let subject_id = state
                .selected()
                .map(|s| s.id)
                .ok_or(DashboardError::NoSubjectSelected)?;
            let subject = next.subject_mut(subject_id)?;
            let id = fresh_topic_id(subject, now.timestamp_millis());
            subject.topics.push(Topic {
                id,
                name: name.to_string(),
                completed: false,
                date: None,
            });
            next.modal = None;
        }
        Action::CreateAssignment {
            title,
            subject,
            due_date,
        } => {
            if [title, subject, due_date].iter().any(|field| field.trim().is_empty()) {
                return Err(DashboardError::MissingAssignmentFields);
            }
            // Nothing is stored; the assignment list stays as seeded.
            next.modal = None;
            return Ok(Transition::alert(
                next,
                format!("Assignment \"{}\" created successfully!", title.trim()),
            ));
        }
        Action::OpenModal(modal) => {
            next.modal = Some(*modal);
        }
        Action::CloseModal => {
            next.modal = None;
        }
        Action::ToggleSidebar => {
            next.sidebar_open = !next.sidebar_open;
        }
    }

    Ok(Transition::quiet(next))
}

fn find_topic(subject: &mut Subject, subject_id: u32, topic_id: i64) -> Result<&mut Topic> {
    subject
        .topics
        .iter_mut()
        .find(|t| t.id == topic_id)
        .ok_or(DashboardError::TopicNotFound {
            subject_id,
            topic_id,
        })
}

fn fresh_topic_id(subject: &Subject, candidate: i64) -> i64 {
    let mut id = candidate;
    while subject.topics.iter().any(|t| t.id == id) {
        id += 1;
    }
    id
}
