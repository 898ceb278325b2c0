//! Markup generation for the dashboard.
//!
//! Every function here is a pure function of the dashboard state: the whole
//! document is rebuilt after each action and nothing is cached between calls.

use std::fmt::Write;

use crate::charts;
use crate::config::DashboardConfig;
use crate::models::{Modal, Page, Role};
use crate::seed;
use crate::state::DashboardState;
use crate::student_views;
use crate::teacher_views;

/// The nine views reachable from a (role, page) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    TeacherDashboard,
    SyllabusTracker,
    TeacherAssignments,
    ClassOverview,
    StudentDashboard,
    StudentAttendance,
    Grades,
    StudentAssignments,
    Opportunities,
}

/// Pages outside a role's navigation set fall back to that role's dashboard.
pub fn resolve_view(role: Role, page: &Page) -> View {
    match (role, page) {
        (Role::Teacher, Page::Dashboard) => View::TeacherDashboard,
        (Role::Teacher, Page::Syllabus) => View::SyllabusTracker,
        (Role::Teacher, Page::Assignments) => View::TeacherAssignments,
        (Role::Teacher, Page::Attendance) => View::ClassOverview,
        (Role::Teacher, _) => View::TeacherDashboard,
        (Role::Student, Page::Dashboard) => View::StudentDashboard,
        (Role::Student, Page::Attendance) => View::StudentAttendance,
        (Role::Student, Page::Grades) => View::Grades,
        (Role::Student, Page::Assignments) => View::StudentAssignments,
        (Role::Student, Page::Opportunities) => View::Opportunities,
        (Role::Student, _) => View::StudentDashboard,
    }
}

pub fn render_view(view: View, state: &DashboardState) -> String {
    match view {
        View::TeacherDashboard => teacher_views::dashboard(state),
        View::SyllabusTracker => teacher_views::syllabus_tracker(state),
        View::TeacherAssignments => teacher_views::assignments(state),
        View::ClassOverview => teacher_views::class_overview(state),
        View::StudentDashboard => student_views::dashboard(),
        View::StudentAttendance => student_views::attendance(),
        View::Grades => student_views::grades(),
        View::StudentAssignments => student_views::assignments(),
        View::Opportunities => student_views::opportunities(),
    }
}

/// Markup for the content area.
pub fn render_content(state: &DashboardState) -> String {
    render_view(resolve_view(state.role, &state.page), state)
}

pub fn render_navigation(state: &DashboardState) -> String {
    let mut output = String::new();
    for item in seed::nav_items(state.role) {
        let active = if item.page == state.page { " active" } else { "" };
        let _ = writeln!(
            output,
            r#"<div class="nav-item{active}" onclick="navigateTo('{page}')">"#,
            page = esc(item.page.id())
        );
        let _ = writeln!(output, r#"    <i class="fas {}"></i>"#, item.icon);
        let _ = writeln!(output, "    <span>{}</span>", esc(item.label));
        let _ = writeln!(output, "</div>");
    }
    output
}

/// The full host document: shell, navigation, content, modals and charts.
pub fn render_document(state: &DashboardState, config: &DashboardConfig) -> String {
    let view = resolve_view(state.role, &state.page);
    let profile = config.profile(state.role);
    let mut output = String::new();

    let _ = writeln!(output, "<!DOCTYPE html>");
    let _ = writeln!(output, r#"<html lang="en">"#);
    let _ = writeln!(output, "<head>");
    let _ = writeln!(output, r#"<meta charset="UTF-8">"#);
    let _ = writeln!(
        output,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    );
    let _ = writeln!(output, "<title>{}</title>", esc(&config.page_title));
    let _ = writeln!(output, r#"<link rel="stylesheet" href="{}">"#, esc(&config.stylesheet));
    let _ = writeln!(output, r#"<link rel="stylesheet" href="{}">"#, esc(&config.icon_stylesheet));
    let _ = writeln!(output, r#"<script src="{}"></script>"#, esc(&config.chart_library));
    let _ = writeln!(output, "</head>");
    let _ = writeln!(output, "<body>");

    let sidebar_class = if state.sidebar_open { "sidebar active" } else { "sidebar" };
    let _ = writeln!(output, r#"<aside class="{sidebar_class}" id="sidebar">"#);
    let _ = writeln!(output, r#"<div class="role-switch">"#);
    for role in [Role::Teacher, Role::Student] {
        let active = if role == state.role { " active" } else { "" };
        let label = match role {
            Role::Teacher => "Teacher",
            Role::Student => "Student",
        };
        let _ = writeln!(
            output,
            r#"<button class="role-btn{active}" onclick="switchRole('{}')">{label}</button>"#,
            role.as_str()
        );
    }
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, r#"<nav id="sidebar-nav">"#);
    output.push_str(&render_navigation(state));
    let _ = writeln!(output, "</nav>");
    let _ = writeln!(output, r#"<div class="user-details">"#);
    let _ = writeln!(output, "<h4>{}</h4>", esc(&profile.name));
    let _ = writeln!(output, "<p>{}</p>", esc(&profile.title));
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</aside>");

    let _ = writeln!(output, r#"<main class="main-content">"#);
    let _ = writeln!(output, r#"<header class="top-bar">"#);
    let _ = writeln!(
        output,
        r#"<button class="menu-toggle" id="menuToggle"><i class="fas fa-bars"></i></button>"#
    );
    let _ = writeln!(output, r#"<h1 id="role-title">{}</h1>"#, state.role.title());
    let _ = writeln!(output, "</header>");
    let _ = writeln!(output, r#"<div class="content-area" id="contentArea">"#);
    output.push_str(&render_view(view, state));
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</main>");

    output.push_str(&render_topic_modal(state.modal == Some(Modal::AddTopic)));
    output.push_str(&render_assignment_modal(
        state,
        state.modal == Some(Modal::CreateAssignment),
    ));

    if view == View::TeacherDashboard {
        let specs = charts::dashboard_charts(&state.class_stats);
        output.push_str(&charts::init_script(&specs, config.chart_delay_ms));
    }

    let _ = writeln!(output, "</body>");
    let _ = writeln!(output, "</html>");
    output
}

fn modal_class(open: bool) -> &'static str {
    if open {
        "modal active"
    } else {
        "modal"
    }
}

fn render_topic_modal(open: bool) -> String {
    let mut output = String::new();
    let _ = writeln!(output, r#"<div class="{}" id="addTopicModal">"#, modal_class(open));
    let _ = writeln!(output, r#"    <div class="modal-content">"#);
    let _ = writeln!(output, "        <h3>Add New Topic</h3>");
    let _ = writeln!(
        output,
        r#"        <input type="text" id="topicName" placeholder="Topic name">"#
    );
    let _ = writeln!(output, r#"        <div class="modal-actions">"#);
    let _ = writeln!(
        output,
        r#"            <button class="btn-secondary" onclick="closeModal()">Cancel</button>"#
    );
    let _ = writeln!(
        output,
        r#"            <button class="btn-primary" onclick="addTopic()">Add Topic</button>"#
    );
    let _ = writeln!(output, "        </div>");
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</div>");
    output
}

fn render_assignment_modal(state: &DashboardState, open: bool) -> String {
    let mut output = String::new();
    let _ = writeln!(output, r#"<div class="{}" id="addAssignmentModal">"#, modal_class(open));
    let _ = writeln!(output, r#"    <div class="modal-content">"#);
    let _ = writeln!(output, "        <h3>Create Assignment</h3>");
    let _ = writeln!(
        output,
        r#"        <input type="text" id="assignmentTitle" placeholder="Assignment title">"#
    );
    let _ = writeln!(output, r#"        <select id="assignmentSubject">"#);
    let _ = writeln!(output, r#"            <option value="">Select subject</option>"#);
    for subject in &state.subjects {
        let _ = writeln!(
            output,
            r#"            <option value="{name}">{name}</option>"#,
            name = esc(&subject.name)
        );
    }
    let _ = writeln!(output, "        </select>");
    let _ = writeln!(output, r#"        <input type="date" id="assignmentDueDate">"#);
    let _ = writeln!(output, r#"        <div class="modal-actions">"#);
    let _ = writeln!(
        output,
        r#"            <button class="btn-secondary" onclick="closeAssignmentModal()">Cancel</button>"#
    );
    let _ = writeln!(
        output,
        r#"            <button class="btn-primary" onclick="createAssignment()">Create</button>"#
    );
    let _ = writeln!(output, "        </div>");
    let _ = writeln!(output, "    </div>");
    let _ = writeln!(output, "</div>");
    output
}

/// Escapes text for use in element content and quoted attribute values.
pub fn esc(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{reduce, Action};
    use chrono::Utc;

    fn initial() -> DashboardState {
        DashboardState::new(seed::dataset().unwrap())
    }

    fn after(state: &DashboardState, action: Action) -> DashboardState {
        reduce(state, &action, Utc::now()).unwrap().state
    }

    #[test]
    fn every_teacher_page_resolves() {
        assert_eq!(resolve_view(Role::Teacher, &Page::Dashboard), View::TeacherDashboard);
        assert_eq!(resolve_view(Role::Teacher, &Page::Syllabus), View::SyllabusTracker);
        assert_eq!(resolve_view(Role::Teacher, &Page::Assignments), View::TeacherAssignments);
        assert_eq!(resolve_view(Role::Teacher, &Page::Attendance), View::ClassOverview);
    }

    #[test]
    fn every_student_page_resolves() {
        assert_eq!(resolve_view(Role::Student, &Page::Dashboard), View::StudentDashboard);
        assert_eq!(resolve_view(Role::Student, &Page::Attendance), View::StudentAttendance);
        assert_eq!(resolve_view(Role::Student, &Page::Grades), View::Grades);
        assert_eq!(resolve_view(Role::Student, &Page::Assignments), View::StudentAssignments);
        assert_eq!(resolve_view(Role::Student, &Page::Opportunities), View::Opportunities);
    }

    #[test]
    fn pages_outside_role_fall_back_to_dashboard() {
        assert_eq!(resolve_view(Role::Teacher, &Page::Grades), View::TeacherDashboard);
        assert_eq!(resolve_view(Role::Student, &Page::Syllabus), View::StudentDashboard);
        assert_eq!(
            resolve_view(Role::Student, &Page::Unknown("calendar".to_string())),
            View::StudentDashboard
        );
    }

    #[test]
    fn navigation_marks_current_page() {
        let state = after(&initial(), Action::NavigateTo(Page::Syllabus));
        let nav = render_navigation(&state);
        assert!(nav.contains(r#"<div class="nav-item active" onclick="navigateTo('syllabus')">"#));
        assert!(nav.contains(r#"<div class="nav-item" onclick="navigateTo('dashboard')">"#));
        assert!(nav.contains("Syllabus Tracker"));
    }

    #[test]
    fn student_navigation_lists_student_pages() {
        let state = after(&initial(), Action::SwitchRole(Role::Student));
        let nav = render_navigation(&state);
        assert!(nav.contains("Grades &amp; GPA"));
        assert!(nav.contains("navigateTo('opportunities')"));
        assert!(!nav.contains("navigateTo('syllabus')"));
    }

    #[test]
    fn document_reflects_role_labels() {
        let config = DashboardConfig::default();
        let teacher = render_document(&initial(), &config);
        assert!(teacher.contains(r#"<h1 id="role-title">Teacher Command Center</h1>"#));
        assert!(teacher.contains("<h4>Dr. Sarah Johnson</h4>"));
        assert!(teacher.contains("<p>Professor</p>"));

        let state = after(&initial(), Action::SwitchRole(Role::Student));
        let student = render_document(&state, &config);
        assert!(student.contains(r#"<h1 id="role-title">Student Command Center</h1>"#));
        assert!(student.contains("<h4>John Doe</h4>"));
        assert!(student.contains("<p>Computer Science Student</p>"));
        assert!(student.contains(r#"<button class="role-btn active" onclick="switchRole('student')">"#));
    }

    #[test]
    fn chart_script_only_on_teacher_dashboard() {
        let config = DashboardConfig::default();
        let dashboard = render_document(&initial(), &config);
        assert!(dashboard.contains("setTimeout(function () {"));
        assert!(dashboard.contains(r#"<canvas id="syllabusChart"></canvas>"#));

        let syllabus = after(&initial(), Action::NavigateTo(Page::Syllabus));
        assert!(!render_document(&syllabus, &config).contains("setTimeout"));

        let student = after(&initial(), Action::SwitchRole(Role::Student));
        assert!(!render_document(&student, &config).contains("setTimeout"));
    }

    #[test]
    fn open_modal_is_marked_active() {
        let config = DashboardConfig::default();
        let closed = render_document(&initial(), &config);
        assert!(closed.contains(r#"<div class="modal" id="addTopicModal">"#));

        let state = after(&initial(), Action::OpenModal(Modal::AddTopic));
        let open = render_document(&state, &config);
        assert!(open.contains(r#"<div class="modal active" id="addTopicModal">"#));
        assert!(open.contains(r#"<div class="modal" id="addAssignmentModal">"#));
    }

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(esc(r#"<b>"Trees" & 'Graphs'</b>"#), "&lt;b&gt;&quot;Trees&quot; &amp; &#39;Graphs&#39;&lt;/b&gt;");
    }
}
