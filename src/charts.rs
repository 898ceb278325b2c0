use std::fmt::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::models::ClassStats;

pub const SYLLABUS_CANVAS: &str = "syllabusChart";
pub const ATTENDANCE_CANVAS: &str = "attendanceChart";

/// Class average attendance for the last six weeks.
pub const WEEKLY_ATTENDANCE: [u32; 6] = [88, 85, 82, 80, 78, 82];

/// A chart handed to the charting library, bound to a canvas by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub canvas_id: &'static str,
    pub config: Value,
}

pub fn syllabus_chart(stats: &ClassStats) -> ChartSpec {
    let completed = stats.syllabus_progress.min(100);
    ChartSpec {
        canvas_id: SYLLABUS_CANVAS,
        config: json!({
            "type": "doughnut",
            "data": {
                "labels": ["Completed", "Pending"],
                "datasets": [{
                    "data": [completed, 100 - completed],
                    "backgroundColor": ["#10b981", "#ef4444"],
                    "borderWidth": 0
                }]
            },
            "options": {
                "cutout": "70%",
                "plugins": { "legend": { "display": false } }
            }
        }),
    }
}

pub fn attendance_chart() -> ChartSpec {
    let labels: Vec<String> = (1..=WEEKLY_ATTENDANCE.len())
        .map(|week| format!("Week {week}"))
        .collect();
    ChartSpec {
        canvas_id: ATTENDANCE_CANVAS,
        config: json!({
            "type": "line",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Class Average Attendance",
                    "data": WEEKLY_ATTENDANCE,
                    "borderColor": "#4f46e5",
                    "backgroundColor": "rgba(79, 70, 229, 0.1)",
                    "tension": 0.4,
                    "fill": true
                }]
            },
            "options": {
                "responsive": true,
                "maintainAspectRatio": false,
                "plugins": { "legend": { "display": false } },
                "scales": { "y": { "beginAtZero": true, "max": 100 } }
            }
        }),
    }
}

pub fn dashboard_charts(stats: &ClassStats) -> Vec<ChartSpec> {
    vec![syllabus_chart(stats), attendance_chart()]
}

/// Script that builds the charts once, after the markup has been attached.
pub fn init_script(charts: &[ChartSpec], delay_ms: u64) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "<script>");
    let _ = writeln!(output, "setTimeout(function () {{");
    for chart in charts {
        // JSON is valid JS; escape "</" so the config cannot close the script tag.
        let config = chart.config.to_string().replace("</", "<\\/");
        let _ = writeln!(
            output,
            "    var {id}Ctx = document.getElementById('{id}');",
            id = chart.canvas_id
        );
        let _ = writeln!(
            output,
            "    if ({id}Ctx) {{ new Chart({id}Ctx, {config}); }}",
            id = chart.canvas_id
        );
    }
    let _ = writeln!(output, "}}, {delay_ms});");
    let _ = writeln!(output, "</script>");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn doughnut_splits_completed_and_pending() {
        let stats = seed::dataset().unwrap().class_stats;
        let chart = syllabus_chart(&stats);
        assert_eq!(chart.config["type"], "doughnut");
        assert_eq!(chart.config["data"]["datasets"][0]["data"], json!([75, 25]));
        assert_eq!(chart.config["options"]["cutout"], "70%");
    }

    #[test]
    fn attendance_line_has_six_weekly_samples() {
        let chart = attendance_chart();
        assert_eq!(chart.config["type"], "line");
        assert_eq!(chart.config["data"]["labels"][0], "Week 1");
        assert_eq!(chart.config["data"]["labels"][5], "Week 6");
        assert_eq!(chart.config["data"]["datasets"][0]["data"], json!([88, 85, 82, 80, 78, 82]));
        assert_eq!(chart.config["options"]["scales"]["y"]["max"], 100);
    }

    #[test]
    fn init_script_defers_chart_construction() {
        let stats = seed::dataset().unwrap().class_stats;
        let script = init_script(&dashboard_charts(&stats), 100);
        assert!(script.starts_with("<script>"));
        assert!(script.contains("document.getElementById('syllabusChart')"));
        assert!(script.contains("document.getElementById('attendanceChart')"));
        assert!(script.contains("}, 100);"));
        assert!(script.contains("\"type\":\"doughnut\""));
    }
}
