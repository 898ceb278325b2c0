//! CSV action scripts for replaying a sequence of user interactions.
//!
//! Columns: `action,subject_id,topic_id,text,subject,due_date,confirm`.
//! `text` carries the role, page, topic name, modal or assignment title
//! depending on the action.

use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, bail, Context};
use serde::Deserialize;

use crate::models::{Modal, Page, Role};
use crate::state::Action;

#[derive(Debug, Deserialize)]
struct ScriptRow {
    action: String,
    subject_id: Option<u32>,
    topic_id: Option<i64>,
    text: Option<String>,
    subject: Option<String>,
    due_date: Option<String>,
    confirm: Option<bool>,
}

impl ScriptRow {
    fn subject_id(&self) -> anyhow::Result<u32> {
        self.subject_id.context("subject_id is required")
    }

    fn topic_id(&self) -> anyhow::Result<i64> {
        self.topic_id.context("topic_id is required")
    }

    fn text(&self) -> &str {
        self.text.as_deref().unwrap_or_default()
    }

    fn into_action(self) -> anyhow::Result<Action> {
        let name = self.action.trim().to_string();
        let action = match name.as_str() {
            "switch_role" => Action::SwitchRole(self.text().parse::<Role>().map_err(|e| anyhow!(e))?),
            "navigate" => Action::NavigateTo(Page::from(self.text())),
            "select_subject" => Action::SelectSubject(self.subject_id()?),
            "toggle_topic" => Action::ToggleTopic {
                subject_id: self.subject_id()?,
                topic_id: self.topic_id()?,
            },
            "delete_topic" => Action::DeleteTopic {
                subject_id: self.subject_id()?,
                topic_id: self.topic_id()?,
                confirmed: self.confirm.unwrap_or(false),
            },
            "edit_topic" => Action::EditTopic {
                topic_id: self.topic_id()?,
            },
            "add_topic" => Action::AddTopic {
                name: self.text().to_string(),
            },
            "create_assignment" => Action::CreateAssignment {
                title: self.text().to_string(),
                subject: self.subject.unwrap_or_default(),
                due_date: self.due_date.unwrap_or_default(),
            },
            "open_modal" => Action::OpenModal(self.text().parse::<Modal>().map_err(|e| anyhow!(e))?),
            "close_modal" => Action::CloseModal,
            "toggle_sidebar" => Action::ToggleSidebar,
            other => bail!("unknown action '{other}'"),
        };
        Ok(action)
    }
}

pub fn parse_actions<R: Read>(input: R) -> anyhow::Result<Vec<Action>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut actions = Vec::new();

    for (index, result) in reader.deserialize::<ScriptRow>().enumerate() {
        // Row 1 is the header.
        let line = index + 2;
        let row = result.with_context(|| format!("row {line}: malformed record"))?;
        let action = row
            .into_action()
            .with_context(|| format!("row {line}"))?;
        actions.push(action);
    }

    Ok(actions)
}

pub fn load_actions(path: &Path) -> anyhow::Result<Vec<Action>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open script {}", path.display()))?;
    parse_actions(file)
}
