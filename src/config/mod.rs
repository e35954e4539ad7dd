//! Configuration module for site-interactions
//!
//! Timings, thresholds and the page layout the widgets attach to. Every
//! setting has a built-in default, and a TOML file can override any subset.

pub mod site;

pub use site::{
    ConfigError, CounterSpec, FilterButton, NavLink, PageLayout, ProjectCard, SiteConfig, Timings,
};
