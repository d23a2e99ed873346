use crate::config::StyleFinderConfig;
use crate::model::StyleRecord;
use std::path::PathBuf;

pub mod compare;
pub mod config;
pub mod detail;
pub mod favorite;
pub mod filter;
pub mod list;
pub mod theme;

pub use compare::CompareView;
pub use detail::DetailView;
pub use filter::{GridView, ToneCount};

#[derive(Debug, Clone)]
pub struct StyleFinderPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_styles: Vec<StyleRecord>,
    /// Result-count readout, empty when no search is active.
    pub summary: String,
    pub tone_counts: Vec<ToneCount>,
    pub detail: Option<DetailView>,
    pub compare: Option<CompareView>,
    pub config: Option<StyleFinderConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_styles(mut self, styles: Vec<StyleRecord>) -> Self {
        self.listed_styles = styles;
        self
    }

    pub fn with_summary(mut self, summary: String) -> Self {
        self.summary = summary;
        self
    }

    pub fn with_tone_counts(mut self, counts: Vec<ToneCount>) -> Self {
        self.tone_counts = counts;
        self
    }

    pub fn with_detail(mut self, detail: DetailView) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_compare(mut self, compare: CompareView) -> Self {
        self.compare = Some(compare);
        self
    }

    pub fn with_config(mut self, config: StyleFinderConfig) -> Self {
        self.config = Some(config);
        self
    }
}
