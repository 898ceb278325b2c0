use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Teacher,
    Student,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Role::Teacher => "Teacher Command Center",
            Role::Student => "Student Command Center",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Page identifier as carried by navigation bindings.
///
/// Navigation never validates the id against the current role, so ids that no
/// navigation set knows about are kept verbatim in `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Syllabus,
    Assignments,
    Attendance,
    Grades,
    Opportunities,
    Unknown(String),
}

impl Page {
    pub fn id(&self) -> &str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Syllabus => "syllabus",
            Page::Assignments => "assignments",
            Page::Attendance => "attendance",
            Page::Grades => "grades",
            Page::Opportunities => "opportunities",
            Page::Unknown(id) => id,
        }
    }
}

impl From<&str> for Page {
    fn from(value: &str) -> Self {
        match value.trim() {
            "dashboard" => Page::Dashboard,
            "syllabus" => Page::Syllabus,
            "assignments" => Page::Assignments,
            "attendance" => Page::Attendance,
            "grades" => Page::Grades,
            "opportunities" => Page::Opportunities,
            other => Page::Unknown(other.to_string()),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: u32,
    pub name: String,
    pub code: String,
    pub progress: u32,
    pub attendance: u32,
    pub topics: Vec<Topic>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: u32,
    pub title: String,
    /// Subject name as free text; not checked against the subject list.
    pub subject: String,
    pub due_date: NaiveDate,
    pub submissions: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassStats {
    pub total_classes: u32,
    pub completed_classes: u32,
    pub pending_classes: u32,
    pub syllabus_progress: u32,
    pub total_students: u32,
    pub average_attendance: u32,
    pub pending_assignments: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub icon: &'static str,
    pub label: &'static str,
    pub page: Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    AddTopic,
    CreateAssignment,
}

impl FromStr for Modal {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "add_topic" => Ok(Modal::AddTopic),
            "create_assignment" => Ok(Modal::CreateAssignment),
            other => Err(format!("unknown modal '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_round_trip_through_str() {
        for id in ["dashboard", "syllabus", "assignments", "attendance", "grades", "opportunities"] {
            assert_eq!(Page::from(id).id(), id);
        }
    }

    #[test]
    fn unrecognized_page_is_kept_verbatim() {
        let page = Page::from("calendar");
        assert_eq!(page, Page::Unknown("calendar".to_string()));
        assert_eq!(page.to_string(), "calendar");
    }

    #[test]
    fn role_parses_lowercase_names() {
        assert_eq!("teacher".parse::<Role>(), Ok(Role::Teacher));
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert!("admin".parse::<Role>().is_err());
    }
}
