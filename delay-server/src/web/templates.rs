//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::{DelayStatus, ServiceRecord};

/// HTML delay board over all configured stations.
#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardPageTemplate {
    pub generated_at: String,
    pub stations: Vec<StationBoardView>,
}

/// One station's section of the HTML board.
#[derive(Debug, Clone)]
pub struct StationBoardView {
    pub name: String,
    pub services: Vec<RecordView>,
    pub error: Option<String>,
}

/// Service view model for templates.
#[derive(Debug, Clone)]
pub struct RecordView {
    pub number: String,
    pub label: String,
    pub status_text: String,
    pub delayed: bool,
}

impl RecordView {
    /// Create from a domain record.
    pub fn from_record(record: &ServiceRecord) -> Self {
        Self {
            number: record.number.clone(),
            label: record.label.clone(),
            status_text: record.status().to_string(),
            delayed: matches!(record.status(), DelayStatus::Delayed(_)),
        }
    }
}
