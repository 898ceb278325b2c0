use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::models::Role;

pub const CONFIG_ENV: &str = "TEACHERNAV_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_title: String,
    pub stylesheet: String,
    pub icon_stylesheet: String,
    /// URL of the charting library script.
    pub chart_library: String,
    /// Delay before the dashboard charts are built, in milliseconds.
    pub chart_delay_ms: u64,
    pub teacher: Profile,
    pub student: Profile,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: "Academic Command Center".to_string(),
            stylesheet: "styles.css".to_string(),
            icon_stylesheet:
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                    .to_string(),
            chart_library: "https://cdn.jsdelivr.net/npm/chart.js".to_string(),
            chart_delay_ms: 100,
            teacher: Profile {
                name: "Dr. Sarah Johnson".to_string(),
                title: "Professor".to_string(),
            },
            student: Profile {
                name: "John Doe".to_string(),
                title: "Computer Science Student".to_string(),
            },
        }
    }
}

impl DashboardConfig {
    pub fn profile(&self, role: Role) -> &Profile {
        match role {
            Role::Teacher => &self.teacher,
            Role::Student => &self.student,
        }
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        serde_json::from_str(contents).context("invalid dashboard config")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json(&contents).with_context(|| format!("in {}", path.display()))
    }

    /// Loads the explicit path, then `TEACHERNAV_CONFIG`, else the defaults.
    pub fn resolve(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Self::load(Path::new(&path)),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = DashboardConfig::from_json(
            r#"{ "chart_delay_ms": 250, "teacher": { "name": "Dr. Ada Byron", "title": "Lecturer" } }"#,
        )
        .unwrap();
        assert_eq!(config.chart_delay_ms, 250);
        assert_eq!(config.profile(Role::Teacher).name, "Dr. Ada Byron");
        assert_eq!(config.profile(Role::Student).name, "John Doe");
        assert_eq!(config.stylesheet, "styles.css");
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(DashboardConfig::from_json("{ chart_delay_ms: }").is_err());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!(
            "teachernav-config-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "page_title": "CS Department" }"#).unwrap();
        let config = DashboardConfig::resolve(Some(&path)).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(config.page_title, "CS Department");
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join("teachernav-config-does-not-exist.json");
        assert!(DashboardConfig::load(&path).is_err());
    }
}
