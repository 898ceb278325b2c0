use std::fmt::Write;

use crate::progress::attendance_flag;
use crate::render::esc;

/// The signed-in student's attendance in subjects that need attention.
const ATTENDANCE_WATCHLIST: [(&str, u32); 2] = [("Data Structures", 77), ("Algorithms", 72)];

const UPCOMING_DEADLINES: [(&str, &str, &str); 3] = [
    ("Binary Tree Implementation", "Data Structures", "Due Tomorrow"),
    ("Sorting Algorithm Analysis", "Algorithms", "Due in 3 days"),
    ("Database Project", "Database Systems", "Due in 5 days"),
];

struct Card {
    color: &'static str,
    icon: &'static str,
    label: &'static str,
    value: &'static str,
    subtext: &'static str,
}

const SUMMARY_CARDS: [Card; 4] = [
    Card {
        color: "purple",
        icon: "fa-calendar-check",
        label: "Current Attendance",
        value: "82%",
        subtext: "Safe to skip: 2 classes",
    },
    Card {
        color: "green",
        icon: "fa-trophy",
        label: "Current CGPA",
        value: "3.6",
        subtext: "Target: 3.8",
    },
    Card {
        color: "yellow",
        icon: "fa-tasks",
        label: "Pending Tasks",
        value: "4",
        subtext: "2 due this week",
    },
    Card {
        color: "blue",
        icon: "fa-briefcase",
        label: "Opportunities",
        value: "6",
        subtext: "New internships",
    },
];

pub fn dashboard() -> String {
    let mut output = String::new();
    let _ = writeln!(output, r#"<div class="page-header">"#);
    let _ = writeln!(output, "    <h2>Student Dashboard</h2>");
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="stats-grid">"#);
    for card in &SUMMARY_CARDS {
        let _ = writeln!(output, r#"    <div class="stat-card">"#);
        let _ = writeln!(
            output,
            r#"        <div class="stat-icon {}"><i class="fas {}"></i></div>"#,
            card.color, card.icon
        );
        let _ = writeln!(output, r#"        <div class="stat-info">"#);
        let _ = writeln!(output, "            <h4>{}</h4>", card.label);
        let _ = writeln!(output, r#"            <div class="stat-value">{}</div>"#, card.value);
        let _ = writeln!(output, r#"            <div class="stat-subtext">{}</div>"#, card.subtext);
        let _ = writeln!(output, "        </div>");
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="grid-2">"#);
    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header"><h3>Attendance Alert</h3></div>"#);
    for (subject, percent) in ATTENDANCE_WATCHLIST {
        let flag = attendance_flag(percent);
        let color = flag.color();
        let _ = writeln!(output, r#"    <div class="attendance-alert">"#);
        let _ = writeln!(output, r#"        <div class="alert-row">"#);
        let _ = writeln!(output, "            <span>{}</span>", esc(subject));
        let _ = writeln!(output, r#"            <span style="color: {color};">{percent}%</span>"#);
        let _ = writeln!(output, "        </div>");
        let _ = writeln!(output, r#"        <div class="progress-bar">"#);
        let _ = writeln!(
            output,
            r#"            <div class="progress-fill" style="width: {percent}%; background-color: {color};"></div>"#
        );
        let _ = writeln!(output, "        </div>");
        if let Some(message) = flag.message() {
            let _ = writeln!(
                output,
                r#"        <div class="alert-flag" style="color: {color};">&#9888;&#65039; {message}</div>"#
            );
        }
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");

    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, r#"    <div class="card-header"><h3>Upcoming Deadlines</h3></div>"#);
    for (title, subject, due) in UPCOMING_DEADLINES {
        let _ = writeln!(output, r#"    <div class="deadline">"#);
        let _ = writeln!(output, r#"        <div class="deadline-title">{}</div>"#, esc(title));
        let _ = writeln!(
            output,
            r#"        <div class="deadline-meta">{} - {due}</div>"#,
            esc(subject)
        );
        let _ = writeln!(output, "    </div>");
    }
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, "</div>");
    output
}

fn placeholder(title: &str, body: &str) -> String {
    let mut output = String::new();
    let _ = writeln!(output, r#"<div class="page-header">"#);
    let _ = writeln!(output, "    <h2>{}</h2>", esc(title));
    let _ = writeln!(output, "</div>");
    let _ = writeln!(output, r#"<div class="card">"#);
    let _ = writeln!(output, "    <p>{body}</p>");
    let _ = writeln!(output, "</div>");
    output
}

pub fn attendance() -> String {
    placeholder(
        "Attendance Tracker",
        "Student attendance tracking interface will be displayed here.",
    )
}

pub fn grades() -> String {
    placeholder(
        "Grades & GPA",
        "Grades and GPA tracking interface will be displayed here.",
    )
}

pub fn assignments() -> String {
    placeholder(
        "My Assignments",
        "Student assignments interface will be displayed here.",
    )
}

pub fn opportunities() -> String {
    placeholder(
        "Opportunities",
        "Internships and career opportunities will be displayed here.",
    )
}
