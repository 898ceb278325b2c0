use crate::models::{Assignment, Subject};

pub fn completed_topics(subject: &Subject) -> usize {
    subject.topics.iter().filter(|t| t.completed).count()
}

pub fn pending_topics(subject: &Subject) -> usize {
    subject.topics.len() - completed_topics(subject)
}

/// Share of completed topics as a rounded whole percentage.
///
/// A subject without topics reports 0.
pub fn topic_progress(subject: &Subject) -> u32 {
    let total = subject.topics.len();
    if total == 0 {
        return 0;
    }
    ((completed_topics(subject) as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Pending,
    Completed,
}

impl AssignmentStatus {
    pub fn of(assignment: &Assignment) -> Self {
        if assignment.submissions < assignment.total {
            AssignmentStatus::Pending
        } else {
            AssignmentStatus::Completed
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "status-pending",
            AssignmentStatus::Completed => "status-completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceFlag {
    Clear,
    Yellow,
    Red,
}

pub fn attendance_flag(percent: u32) -> AttendanceFlag {
    match percent {
        0..=74 => AttendanceFlag::Red,
        75..=79 => AttendanceFlag::Yellow,
        _ => AttendanceFlag::Clear,
    }
}

impl AttendanceFlag {
    pub fn color(self) -> &'static str {
        match self {
            AttendanceFlag::Clear => "#10b981",
            AttendanceFlag::Yellow => "#f59e0b",
            AttendanceFlag::Red => "#ef4444",
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            AttendanceFlag::Clear => None,
            AttendanceFlag::Yellow => Some("Yellow Flag - Below 80%"),
            AttendanceFlag::Red => Some("Red Flag - Below 75%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Topic;
    use chrono::NaiveDate;

    fn subject_with(flags: &[bool]) -> Subject {
        Subject {
            id: 1,
            name: "Data Structures".to_string(),
            code: "CS201".to_string(),
            progress: 80,
            attendance: 85,
            topics: flags
                .iter()
                .enumerate()
                .map(|(index, completed)| Topic {
                    id: index as i64 + 1,
                    name: format!("Topic {}", index + 1),
                    completed: *completed,
                    date: completed.then(|| NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()),
                })
                .collect(),
        }
    }

    #[test]
    fn progress_rounds_to_nearest_percent() {
        assert_eq!(topic_progress(&subject_with(&[true, true, true, false, false, false])), 50);
        assert_eq!(topic_progress(&subject_with(&[true, false, false])), 33);
        assert_eq!(topic_progress(&subject_with(&[true, true, false])), 67);
        assert_eq!(topic_progress(&subject_with(&[true, true, true, true, false])), 80);
    }

    #[test]
    fn empty_subject_reports_zero_progress() {
        let subject = subject_with(&[]);
        assert_eq!(topic_progress(&subject), 0);
        assert_eq!(pending_topics(&subject), 0);
    }

    #[test]
    fn counts_split_completed_and_pending() {
        let subject = subject_with(&[true, false, true, false, false]);
        assert_eq!(completed_topics(&subject), 2);
        assert_eq!(pending_topics(&subject), 3);
    }

    #[test]
    fn assignment_is_pending_until_everyone_submits() {
        let mut assignment = Assignment {
            id: 1,
            title: "Binary Search Tree Implementation".to_string(),
            subject: "Data Structures".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 25).unwrap(),
            submissions: 42,
            total: 65,
        };
        assert_eq!(AssignmentStatus::of(&assignment), AssignmentStatus::Pending);
        assignment.submissions = 65;
        assert_eq!(AssignmentStatus::of(&assignment), AssignmentStatus::Completed);
    }

    #[test]
    fn attendance_flags_follow_thresholds() {
        assert_eq!(attendance_flag(72), AttendanceFlag::Red);
        assert_eq!(attendance_flag(75), AttendanceFlag::Yellow);
        assert_eq!(attendance_flag(77), AttendanceFlag::Yellow);
        assert_eq!(attendance_flag(80), AttendanceFlag::Clear);
    }
}
