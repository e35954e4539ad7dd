use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Durations and thresholds driving every timed behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub submit_latency_ms: u64,
    pub success_display_ms: u64,
    pub slide_interval_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_frame_ms: u64,
    pub resize_debounce_ms: u64,
    pub mobile_breakpoint_px: u32,
    pub header_scroll_threshold_px: u32,
    pub reveal_threshold: f64,
    pub counter_threshold: f64,
    pub portfolio_show_delay_ms: u64,
    pub portfolio_hide_delay_ms: u64,
}

impl Timings {
    pub const SUBMIT_LATENCY_MS: u64 = 2000;
    pub const SUCCESS_DISPLAY_MS: u64 = 3000;
    pub const SLIDE_INTERVAL_MS: u64 = 5000;
    pub const COUNTER_DURATION_MS: u64 = 2000;
    pub const COUNTER_FRAME_MS: u64 = 16;
    pub const RESIZE_DEBOUNCE_MS: u64 = 250;
    pub const MOBILE_BREAKPOINT_PX: u32 = 768;
    pub const HEADER_SCROLL_THRESHOLD_PX: u32 = 100;
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const COUNTER_THRESHOLD: f64 = 0.5;
    pub const PORTFOLIO_SHOW_DELAY_MS: u64 = 100;
    pub const PORTFOLIO_HIDE_DELAY_MS: u64 = 300;

    fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("submit_latency_ms", self.submit_latency_ms),
            ("success_display_ms", self.success_display_ms),
            ("slide_interval_ms", self.slide_interval_ms),
            ("counter_duration_ms", self.counter_duration_ms),
            ("counter_frame_ms", self.counter_frame_ms),
        ];
        for (setting, value) in intervals {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    setting,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        for (setting, value) in [
            ("reveal_threshold", self.reveal_threshold),
            ("counter_threshold", self.counter_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid {
                    setting,
                    reason: format!("{value} is outside (0, 1]"),
                });
            }
        }

        Ok(())
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            submit_latency_ms: Self::SUBMIT_LATENCY_MS,
            success_display_ms: Self::SUCCESS_DISPLAY_MS,
            slide_interval_ms: Self::SLIDE_INTERVAL_MS,
            counter_duration_ms: Self::COUNTER_DURATION_MS,
            counter_frame_ms: Self::COUNTER_FRAME_MS,
            resize_debounce_ms: Self::RESIZE_DEBOUNCE_MS,
            mobile_breakpoint_px: Self::MOBILE_BREAKPOINT_PX,
            header_scroll_threshold_px: Self::HEADER_SCROLL_THRESHOLD_PX,
            reveal_threshold: Self::REVEAL_THRESHOLD,
            counter_threshold: Self::COUNTER_THRESHOLD,
            portfolio_show_delay_ms: Self::PORTFOLIO_SHOW_DELAY_MS,
            portfolio_hide_delay_ms: Self::PORTFOLIO_HIDE_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub id: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub id: String,
    pub target: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub id: String,
    pub filter: String,
}

/// Portfolio card; `category` may list several space-separated categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    pub id: String,
    pub category: String,
}

/// Which interactive elements a page carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Path of the page being viewed, used for active-link highlighting
    pub location_path: String,
    pub nav_links: Vec<NavLink>,
    pub contact_form: bool,
    pub reveal_targets: Vec<String>,
    pub counters: Vec<CounterSpec>,
    pub testimonials: usize,
    pub filter_buttons: Vec<FilterButton>,
    pub projects: Vec<ProjectCard>,
    pub faqs: Vec<String>,
}

impl Default for PageLayout {
    fn default() -> Self {
        let nav_links = ["index", "about", "services", "portfolio", "contact"]
            .into_iter()
            .map(|page| NavLink {
                id: format!("nav-{page}"),
                href: format!("{page}.html"),
            })
            .collect();

        let filter_buttons = ["all", "branding", "web", "print"]
            .into_iter()
            .map(|filter| FilterButton {
                id: format!("filter-{filter}"),
                filter: filter.to_string(),
            })
            .collect();

        let projects = [
            ("project-1", "branding"),
            ("project-2", "web"),
            ("project-3", "print branding"),
            ("project-4", "web"),
        ]
        .into_iter()
        .map(|(id, category)| ProjectCard {
            id: id.to_string(),
            category: category.to_string(),
        })
        .collect();

        let counters = [("stat-projects", 150), ("stat-clients", 85), ("stat-years", 12)]
            .into_iter()
            .map(|(id, target)| CounterSpec {
                id: id.to_string(),
                target,
            })
            .collect();

        Self {
            location_path: "/index.html".to_string(),
            nav_links,
            contact_form: true,
            reveal_targets: vec!["hero".to_string(), "services".to_string()],
            counters,
            testimonials: 3,
            filter_buttons,
            projects,
            faqs: vec!["1".to_string(), "2".to_string(), "3".to_string()],
        }
    }
}

/// Full site configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub timings: Timings,
    pub layout: PageLayout,
}

impl SiteConfig {
    /// Parses and validates a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timings.validate()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Configuration is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid setting `{setting}`: {reason}")]
    Invalid {
        setting: &'static str,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_literal_timings() {
        let timings = Timings::default();
        assert_eq!(timings.submit_latency_ms, 2000);
        assert_eq!(timings.success_display_ms, 3000);
        assert_eq!(timings.slide_interval_ms, 5000);
        assert_eq!(timings.resize_debounce_ms, 250);
        assert_eq!(timings.reveal_threshold, 0.1);
        assert_eq!(timings.counter_threshold, 0.5);
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [timings]
            slide_interval_ms = 7000

            [layout]
            location_path = "/about.html"
            testimonials = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.timings.slide_interval_ms, 7000);
        assert_eq!(config.timings.submit_latency_ms, 2000);
        assert_eq!(config.layout.location_path, "/about.html");
        assert_eq!(config.layout.testimonials, 5);
        assert!(config.layout.contact_form);
    }

    #[test]
    fn layout_lists_parse() {
        let config = SiteConfig::from_toml_str(
            r#"
            [layout]
            faqs = ["pricing"]

            [[layout.projects]]
            id = "p1"
            category = "web branding"
            "#,
        )
        .unwrap();

        assert_eq!(config.layout.faqs, vec!["pricing".to_string()]);
        assert_eq!(config.layout.projects.len(), 1);
        assert_eq!(config.layout.projects[0].category, "web branding");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = SiteConfig::from_toml_str("[timings]\nslide_interval_ms = 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                setting: "slide_interval_ms",
                ..
            }
        ));
    }

    #[test]
    fn threshold_out_of_range_is_rejected() {
        let err = SiteConfig::from_toml_str("[timings]\ncounter_threshold = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                setting: "counter_threshold",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("[timings\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SiteConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
