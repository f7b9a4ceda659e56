use crate::core::questions::{Questionnaire, VettingQuestion};
use crate::models::QuestionEntry;
use crate::report::render::{ReportOptions, DEFAULT_DISCLAIMER, DEFAULT_PROTOCOL_INTRO, DEFAULT_TITLE};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub report: ReportSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

/// Spec sheet content. Every field has a built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSettings {
    #[serde(default)]
    pub questionnaire: Questionnaire,
    /// Replaces the built-in questionnaire when set
    pub vetting_questions: Option<Vec<String>>,
    pub title: Option<String>,
    pub protocol_intro: Option<String>,
    pub disclaimer: Option<String>,
    /// Omit the closing disclaimer line
    #[serde(default)]
    pub hide_disclaimer: bool,
}

impl ReportSettings {
    /// Questions handed to the renderer, in order
    pub fn vetting_questions(&self) -> Vec<String> {
        match &self.vetting_questions {
            Some(custom) => custom.clone(),
            None => self.questionnaire.questions(),
        }
    }

    /// Numbered entries for display. Custom lists carry no phase.
    pub fn question_entries(&self) -> Vec<QuestionEntry> {
        match &self.vetting_questions {
            Some(custom) => custom
                .iter()
                .enumerate()
                .map(|(i, text)| QuestionEntry {
                    number: i + 1,
                    phase: None,
                    text: text.clone(),
                })
                .collect(),
            None => self
                .questionnaire
                .entries()
                .into_iter()
                .enumerate()
                .map(|(i, VettingQuestion { phase, text })| QuestionEntry {
                    number: i + 1,
                    phase: Some(phase),
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        let disclaimer = if self.hide_disclaimer {
            None
        } else {
            Some(self.disclaimer.clone().unwrap_or_else(|| DEFAULT_DISCLAIMER.to_string()))
        };

        ReportOptions {
            title: self.title.clone().unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            protocol_intro: Some(
                self.protocol_intro
                    .clone()
                    .unwrap_or_else(|| DEFAULT_PROTOCOL_INTRO.to_string()),
            ),
            disclaimer,
            ..ReportOptions::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with EI_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., EI__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("EI")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
