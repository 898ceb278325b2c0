use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Assignment, ClassStats, NavItem, Page, Role, Subject, Topic};

/// The mock collections a dashboard session starts from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub subjects: Vec<Subject>,
    pub assignments: Vec<Assignment>,
    pub class_stats: ClassStats,
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {year}-{month:02}-{day:02}"))
}

fn done(id: i64, name: &str, completed_on: NaiveDate) -> Topic {
    Topic {
        id,
        name: name.to_string(),
        completed: true,
        date: Some(completed_on),
    }
}

fn open(id: i64, name: &str) -> Topic {
    Topic {
        id,
        name: name.to_string(),
        completed: false,
        date: None,
    }
}

pub fn dataset() -> anyhow::Result<Dataset> {
    let subjects = vec![
        Subject {
            id: 1,
            name: "Data Structures".to_string(),
            code: "CS201".to_string(),
            progress: 80,
            attendance: 85,
            topics: vec![
                done(1, "Arrays and Linked Lists", date(2024, 2, 10)?),
                done(2, "Stacks and Queues", date(2024, 2, 15)?),
                done(3, "Trees and Graphs", date(2024, 2, 20)?),
                open(4, "Hash Tables"),
                open(5, "Heaps and Priority Queues"),
                open(6, "Advanced Tree Structures"),
            ],
        },
        Subject {
            id: 2,
            name: "Algorithms".to_string(),
            code: "CS301".to_string(),
            progress: 65,
            attendance: 78,
            topics: vec![
                done(7, "Sorting Algorithms", date(2024, 2, 12)?),
                done(8, "Searching Algorithms", date(2024, 2, 18)?),
                open(9, "Dynamic Programming"),
                open(10, "Greedy Algorithms"),
                open(11, "Graph Algorithms"),
            ],
        },
        Subject {
            id: 3,
            name: "Database Systems".to_string(),
            code: "CS202".to_string(),
            progress: 90,
            attendance: 88,
            topics: vec![
                done(12, "ER Modeling", date(2024, 2, 5)?),
                done(13, "SQL Basics", date(2024, 2, 10)?),
                done(14, "Normalization", date(2024, 2, 15)?),
                done(15, "Transactions", date(2024, 2, 20)?),
                open(16, "Indexing"),
            ],
        },
    ];

    let assignments = vec![
        (1, "Binary Search Tree Implementation", "Data Structures", date(2024, 3, 25)?, 42, 65),
        (2, "Sorting Algorithm Analysis", "Algorithms", date(2024, 3, 22)?, 38, 65),
        (3, "Database Normalization", "Database Systems", date(2024, 3, 20)?, 55, 65),
    ]
    .into_iter()
    .map(|(id, title, subject, due_date, submissions, total)| Assignment {
        id,
        title: title.to_string(),
        subject: subject.to_string(),
        due_date,
        submissions,
        total,
    })
    .collect();

    Ok(Dataset {
        subjects,
        assignments,
        class_stats: ClassStats {
            total_classes: 45,
            completed_classes: 38,
            pending_classes: 7,
            syllabus_progress: 75,
            total_students: 65,
            average_attendance: 82,
            pending_assignments: 3,
        },
    })
}

pub fn nav_items(role: Role) -> Vec<NavItem> {
    let item = |icon, label, page| NavItem { icon, label, page };
    match role {
        Role::Teacher => vec![
            item("fa-home", "Dashboard", Page::Dashboard),
            item("fa-book-open", "Syllabus Tracker", Page::Syllabus),
            item("fa-tasks", "Assignments", Page::Assignments),
            item("fa-users", "Class Overview", Page::Attendance),
        ],
        Role::Student => vec![
            item("fa-home", "Dashboard", Page::Dashboard),
            item("fa-calendar", "Attendance", Page::Attendance),
            item("fa-trophy", "Grades & GPA", Page::Grades),
            item("fa-tasks", "Assignments", Page::Assignments),
            item("fa-briefcase", "Opportunities", Page::Opportunities),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_ids_are_unique_within_each_subject() {
        let data = dataset().unwrap();
        for subject in &data.subjects {
            let mut ids: Vec<i64> = subject.topics.iter().map(|t| t.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), subject.topics.len(), "{}", subject.name);
        }
    }

    #[test]
    fn completion_dates_match_completion_flags() {
        let data = dataset().unwrap();
        for topic in data.subjects.iter().flat_map(|s| s.topics.iter()) {
            assert_eq!(topic.completed, topic.date.is_some(), "{}", topic.name);
        }
    }

    #[test]
    fn navigation_sets_differ_by_role() {
        let teacher: Vec<Page> = nav_items(Role::Teacher).into_iter().map(|i| i.page).collect();
        let student: Vec<Page> = nav_items(Role::Student).into_iter().map(|i| i.page).collect();
        assert_eq!(teacher.len(), 4);
        assert_eq!(student.len(), 5);
        assert!(teacher.contains(&Page::Syllabus));
        assert!(!student.contains(&Page::Syllabus));
        assert!(student.contains(&Page::Grades));
    }
}
