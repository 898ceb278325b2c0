use std::fmt::Write;

use crate::charts::{ATTENDANCE_CANVAS, SYLLABUS_CANVAS};
use crate::models::{Assignment, Subject};
use crate::progress::{self, AssignmentStatus};
use crate::render::esc;
use crate::state::{DashboardState, DELETE_TOPIC_PROMPT};

/// Students per attendance band, highest band first.
const ATTENDANCE_DISTRIBUTION: [(u32, &str); 4] = [
    (45, "Above 85%"),
    (12, "75-85%"),
    (6, "65-75%"),
    (2, "Below 65%"),
];

fn page_header(output: &mut String, title: &str, button: Option<(&str, &str)>) {
    let _ = writeln!(output, r#"<div class="page-header">"#);
    let _ = writeln!(output, "    <h2>{}</h2>", esc(title));
    if let Some((onclick, label)) = button {
        let _ = writeln!(output, r#"    <button class="btn-primary" onclick="{onclick}">"#);
        let _ = writeln!(output, r#"        <i class="fas fa-plus"></i>"#);
        let _ = writeln!(output, "        {label}");
        let _ = writeln!(output, "    </button>");
    }
    let _ = writeln!(output, "</div>");
}

fn stat_card(output: &mut String, color: &str, icon: &str, label: &str, value: &str, subtext: Option<&str>) {
    let _ = writeln!(output, r#"    <div class="stat-card">"#);
    let _ = writeln!(output, r#"        <div class="stat-icon {color}"><i class="fas {icon}"></i></div>"#);
    let _ = writeln!(output, r#"        <div class="stat-info">"#);
    let _ = writeln!(output, "            <h4>{label}</h4>");
    let _ = writeln!(output, r#"            <div class="stat-value">{value}</div>"#);
    if let Some(subtext) = subtext {
        let _ = writeln!(output, r#"            <div class="stat-subtext">{subtext}</div>"#);
    }
    let _ = writeln!(output, "        </div>");
    let _ = writeln!(output, "    </div>");
}

fn assignment_table(
    output: &mut String,
    assignments: &[Assignment],
    first_column: &str,
    pending_label: &str,
    actions: &str,
) {
    let _ = writeln!(output, r#"<div class="table-container">"#);
    let _ = writeln!(output, "<table>");
    let _ = writeln!(output, "    <thead>");
    let _ = writeln!(
        output,
        "        <tr><th>{first_column}</th><th>Subject</th><th>Due Date</th><th>Submissions</th><th>Status</th><th>Actions</th></tr>"
    );
    let _ = writeln!(output, "    </thead>");
    let _ = writeln!(output, "    <tbody>");
    for assignment in assignments {
        let status = AssignmentStatus::of(assignment);
        let label = match status {
            AssignmentStatus::Pending => pending_label,
            AssignmentStatus::Completed => "Completed",
        };
        let _ = writeln!(output, "        <tr>");
        let _ = writeln!(output, "            <td>{}</td>", esc(&assignment.title));
        let _ = writeln!(output, "            <td>{}</td>", esc(&assignment.subject));
        let _ = writeln!(output, "            <td>{}</td>", assignment.due_date);
        let _ = writeln!(
            output,
            "            <td>{}/{}</td>",
            assignment.submissions, assignment.total
        );
        let _ = writeln!(
            output,
            r#"            <td><span class="status-badge {}">{label}</span></td>"#,
            status.css_class()
        );
        let _ = writeln!(output, "            <td>{actions}</td>");
        let _ = writeln!(output, "        </tr>");
    }
    let _ = writeln!(output, "    </tbody>");
    let _ = writeln!(output, "</table>");
    let _ = writeln!(output, "</div>");
}

fn progress_bar(output: &mut String, percent: u32, extra_style: &str) {
    let _ = writeln!(output, r#"<div class="progress-bar"{extra_style}>"#);
    let _ = writeln!(
        output,
        r#"    <div class="progress-fill" style="width: {percent}%"></div>"#
    );
    let _ = writeln!(output, "</div>");
}

pub fn dashboard(state: &DashboardState) -> String {
    let stats = &state.class_stats;
    let mut output = String::new();

    page_header(
        &mut output,
        "Teacher Dashboard",
        Some(("openAssignmentModal()", "New Assignment")),
    );

    let _ = writeln!(output, r#"<div class="stats-grid">"#);
    stat_card(
        &mut output,
        "purple",
        "fa-book-open",
        "Syllabus Progress",
        &format!("{}%", stats.syllabus_progress),
        None,
    );
    stat_card(
        &mut output,
        "yellow",
        "fa-clock",
        "Pending Classes",
        &stats.pending_classes.to_string(),
        Some(&format!("out of {} total", stats.total_classes)),
    );
    stat_card(
        &mut output,
        "green",
        "fa-users",
        "Average Attendance",
        &format!("{}%", stats.average_attendance),
        None,
    );
    stat_card(
        &mut output,
        "blue",
        "fa-check-circle",
        "Active Assignments",
        &stats.pending_assignments.to_string(),
        None,
    );
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="grid-2">"#);
    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header">"#);
    let _ = writeln!(output, "        <h3>Subject Progress Overview</h3>");
    let _ = writeln!(
        output,
        r##"        <a href="#" onclick="navigateTo('syllabus')">View All</a>"##
    );
    let _ = writeln!(output, "    </div>");
    for subject in &state.subjects {
        let _ = writeln!(output, r#"    <div class="subject-progress">"#);
        let _ = writeln!(output, r#"        <div class="subject-info">"#);
        let _ = writeln!(
            output,
            r#"            <span class="subject-name">{}</span>"#,
            esc(&subject.name)
        );
        let _ = writeln!(
            output,
            r#"            <span class="subject-code">{}</span>"#,
            esc(&subject.code)
        );
        let _ = writeln!(output, "        </div>");
        progress_bar(&mut output, subject.progress, "");
        let _ = writeln!(output, r#"        <div class="progress-stats">"#);
        let _ = writeln!(output, "            <span>Progress: {}%</span>", subject.progress);
        let _ = writeln!(output, "            <span>Attendance: {}%</span>", subject.attendance);
        let _ = writeln!(output, "        </div>");
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header"><h3>Syllabus Coverage</h3></div>"#);
    let _ = writeln!(
        output,
        r#"    <div class="chart-container"><canvas id="{SYLLABUS_CANVAS}"></canvas></div>"#
    );
    let _ = writeln!(output, r#"    <div class="coverage-summary">"#);
    let _ = writeln!(
        output,
        r#"        <div class="coverage-value">{}%</div>"#,
        stats.syllabus_progress
    );
    let _ = writeln!(output, r#"        <div class="coverage-label">Overall Progress</div>"#);
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header"><h3>Attendance Trend</h3></div>"#);
    let _ = writeln!(
        output,
        r#"    <div class="chart-container"><canvas id="{ATTENDANCE_CANVAS}"></canvas></div>"#
    );
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="card" style="margin-top: 1.5rem;">"#);
    let _ = writeln!(output, r#"    <div class="card-header">"#);
    let _ = writeln!(output, "        <h3>Recent Assignments</h3>");
    let _ = writeln!(
        output,
        r##"        <a href="#" onclick="navigateTo('assignments')">View All</a>"##
    );
    let _ = writeln!(output, "    </div>");
    assignment_table(
        &mut output,
        &state.assignments,
        "Assignment",
        "Pending",
        r##"<a href="#" class="action-link">View Details</a>"##,
    );
    let _ = writeln!(output, "</div>");

    output
}

fn subject_entry(output: &mut String, subject: &Subject, active: bool) {
    let completed = progress::completed_topics(subject);
    let percent = progress::topic_progress(subject);
    let class = if active { "subject-item active" } else { "subject-item" };
    let _ = writeln!(
        output,
        r#"<div class="{class}" onclick="selectSubject({})">"#,
        subject.id
    );
    let _ = writeln!(output, "    <h4>{}</h4>", esc(&subject.name));
    let _ = writeln!(output, "    <p>{}</p>", esc(&subject.code));
    progress_bar(output, percent, r#" style="margin-bottom: 0.5rem;""#);
    let _ = writeln!(output, r#"    <div class="subject-meta">"#);
    let _ = writeln!(output, "        <span>Progress: {percent}%</span>");
    let _ = writeln!(
        output,
        "        <span>{completed}/{} topics</span>",
        subject.topics.len()
    );
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</div>");
}

fn topic_panel(output: &mut String, subject: &Subject) {
    let _ = writeln!(output, r#"<div class="topic-header">"#);
    let _ = writeln!(output, "    <div>");
    let _ = writeln!(output, "        <h3>{}</h3>", esc(&subject.name));
    let _ = writeln!(output, r#"        <p class="topic-code">{}</p>"#, esc(&subject.code));
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, r#"    <button class="btn-secondary" onclick="openTopicModal()">"#);
    let _ = writeln!(output, r#"        <i class="fas fa-plus"></i>"#);
    let _ = writeln!(output, "        Add Topic");
    let _ = writeln!(output, "    </button>");
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, "<div>");
    for topic in &subject.topics {
        let (icon, name_class) = if topic.completed {
            ("fa-check-circle completed", "completed")
        } else {
            ("fa-circle pending", "")
        };
        let _ = writeln!(output, r#"    <div class="topic-item">"#);
        let _ = writeln!(output, r#"        <div class="topic-check">"#);
        let _ = writeln!(
            output,
            r#"            <i class="fas {icon}" onclick="toggleTopic({}, {})"></i>"#,
            subject.id, topic.id
        );
        let _ = writeln!(
            output,
            r#"            <span class="{name_class}">{}</span>"#,
            esc(&topic.name)
        );
        if let Some(date) = topic.date.filter(|_| topic.completed) {
            let _ = writeln!(
                output,
                r#"            <span class="topic-date">Completed: {date}</span>"#
            );
        }
        let _ = writeln!(output, "        </div>");
        let _ = writeln!(output, r#"        <div class="topic-actions">"#);
        let _ = writeln!(
            output,
            r#"            <i class="fas fa-edit" onclick="editTopic({})"></i>"#,
            topic.id
        );
        let _ = writeln!(
            output,
            r#"            <i class="fas fa-trash" onclick="if (confirm('{}')) deleteTopic({}, {})"></i>"#,
            esc(DELETE_TOPIC_PROMPT),
            subject.id,
            topic.id
        );
        let _ = writeln!(output, "        </div>");
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");

    let completed = progress::completed_topics(subject);
    let pending = progress::pending_topics(subject);
    let summary = [
        ("Total Topics", subject.topics.len().to_string(), ""),
        ("Completed", completed.to_string(), " completed"),
        ("Pending", pending.to_string(), " pending"),
        ("Progress", format!("{}%", progress::topic_progress(subject)), ""),
    ];
    let _ = writeln!(output, r#"<div class="summary-box">"#);
    for (label, value, modifier) in summary {
        let _ = writeln!(output, r#"    <div class="summary-item">"#);
        let _ = writeln!(output, r#"        <div class="summary-label">{label}</div>"#);
        let _ = writeln!(
            output,
            r#"        <div class="summary-value{modifier}">{value}</div>"#
        );
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");
}

pub fn syllabus_tracker(state: &DashboardState) -> String {
    let mut output = String::new();
    page_header(&mut output, "Syllabus Tracker", Some(("openModal()", "Add New Topic")));

    let _ = writeln!(output, r#"<div class="syllabus-container">"#);
    let _ = writeln!(output, r#"<div class="subject-list">"#);
    let _ = writeln!(output, "<h3>Subjects</h3>");
    for subject in &state.subjects {
        subject_entry(&mut output, subject, state.selected_subject == Some(subject.id));
    }
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="topic-list">"#);
    match state.selected() {
        Some(subject) => topic_panel(&mut output, subject),
        None => {
            let _ = writeln!(output, "<p>Select a subject to view topics</p>");
        }
    }
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</div>");
    output
}

pub fn assignments(state: &DashboardState) -> String {
    let mut output = String::new();
    page_header(
        &mut output,
        "Assignments",
        Some(("openAssignmentModal()", "Create Assignment")),
    );
    let _ = writeln!(output, r#"<div class="card">"#);
    assignment_table(
        &mut output,
        &state.assignments,
        "Title",
        "Active",
        r##"<a href="#" class="action-link">Edit</a> | <a href="#" class="action-link">View</a>"##,
    );
    let _ = writeln!(output, "</div>");
    output
}

pub fn class_overview(state: &DashboardState) -> String {
    let stats = &state.class_stats;
    let mut output = String::new();
    page_header(&mut output, "Class Overview", None);

    let _ = writeln!(output, r#"<div class="stats-grid">"#);
    stat_card(
        &mut output,
        "purple",
        "fa-users",
        "Total Students",
        &stats.total_students.to_string(),
        None,
    );
    stat_card(
        &mut output,
        "green",
        "fa-chart-line",
        "Avg. Attendance",
        &format!("{}%", stats.average_attendance),
        None,
    );
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="grid-2">"#);
    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header"><h3>Subject-wise Attendance</h3></div>"#);
    for subject in &state.subjects {
        let _ = writeln!(output, r#"    <div class="subject-progress">"#);
        let _ = writeln!(output, r#"        <div class="subject-info">"#);
        let _ = writeln!(
            output,
            r#"            <span class="subject-name">{}</span>"#,
            esc(&subject.name)
        );
        let _ = writeln!(output, "            <span>{}%</span>", subject.attendance);
        let _ = writeln!(output, "        </div>");
        progress_bar(&mut output, subject.attendance, "");
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header"><h3>Attendance Distribution</h3></div>"#);
    let _ = writeln!(output, r#"    <div class="attendance-grid">"#);
    for (count, band) in ATTENDANCE_DISTRIBUTION {
        let _ = writeln!(output, r#"        <div class="attendance-item">"#);
        let _ = writeln!(output, r#"            <div class="attendance-value">{count}</div>"#);
        let _ = writeln!(output, r#"            <div class="attendance-label">{band}</div>"#);
        let _ = writeln!(output, "        </div>");
    }
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</div>");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::state::{reduce, Action};
    use chrono::Utc;

    fn initial() -> DashboardState {
        DashboardState::new(seed::dataset().unwrap())
    }

    #[test]
    fn syllabus_shows_topic_progress_per_subject() {
        let html = syllabus_tracker(&initial());
        assert!(html.contains("<span>Progress: 50%</span>"));
        assert!(html.contains("<span>3/6 topics</span>"));
        assert!(html.contains("<span>Progress: 40%</span>"));
        assert!(html.contains("<span>2/5 topics</span>"));
        assert!(html.contains("<span>Progress: 80%</span>"));
        assert!(html.contains("<span>4/5 topics</span>"));
    }

    #[test]
    fn syllabus_lists_selected_subject_topics() {
        let html = syllabus_tracker(&initial());
        assert!(html.contains(r#"<div class="subject-item active" onclick="selectSubject(1)">"#));
        assert!(html.contains(r#"onclick="toggleTopic(1, 4)""#));
        assert!(html.contains("Completed: 2024-02-10"));
        assert!(html.contains(r#"<div class="summary-value">6</div>"#));
        assert!(html.contains(r#"<div class="summary-value completed">3</div>"#));
        assert!(html.contains(r#"<div class="summary-value pending">3</div>"#));
        assert!(html.contains(r#"<div class="summary-value">50%</div>"#));
    }

    #[test]
    fn syllabus_without_selection_shows_placeholder() {
        let state = reduce(&initial(), &Action::SelectSubject(404), Utc::now())
            .unwrap()
            .state;
        let html = syllabus_tracker(&state);
        assert!(html.contains("<p>Select a subject to view topics</p>"));
        assert!(!html.contains("subject-item active"));
    }

    #[test]
    fn topic_names_are_escaped() {
        let mut state = initial();
        state.subjects[0].topics[0].name = "<script>alert(1)</script>".to_string();
        let html = syllabus_tracker(&state);
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>alert(1)"));
    }

    #[test]
    fn dashboard_shows_static_class_stats() {
        let html = dashboard(&initial());
        assert!(html.contains(r#"<div class="stat-value">75%</div>"#));
        assert!(html.contains(r#"<div class="stat-subtext">out of 45 total</div>"#));
        assert!(html.contains(r#"<div class="stat-value">82%</div>"#));
        assert!(html.contains("<span>Progress: 80%</span>"));
        assert!(html.contains("<span>Attendance: 85%</span>"));
        assert!(html.contains("<td>42/65</td>"));
        assert!(html.contains(r#"<span class="status-badge status-pending">Pending</span>"#));
    }

    #[test]
    fn assignments_page_labels_open_work_active() {
        let html = assignments(&initial());
        assert!(html.contains("<th>Title</th>"));
        assert!(html.contains("<td>Sorting Algorithm Analysis</td>"));
        assert!(html.contains("<td>2024-03-22</td>"));
        assert!(html.contains(r#"<span class="status-badge status-pending">Active</span>"#));
    }

    #[test]
    fn class_overview_lists_attendance() {
        let html = class_overview(&initial());
        assert!(html.contains(r#"<div class="stat-value">65</div>"#));
        assert!(html.contains("<span>78%</span>"));
        assert!(html.contains(r#"<div class="attendance-label">Below 65%</div>"#));
    }
}
