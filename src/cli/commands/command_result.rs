use super::super::exit_status::ExitStatus;
use crate::core::{Locale, ValueType};
use crate::issues::Issue;
use crate::sections::SectionName;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Get(GetSummary),
    List(ListSummary),
    Keys(KeysSummary),
    Render(RenderSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct GetSummary {
    pub path: String,
    pub locale: Locale,
    pub text: String,
    /// True when the path did not name a string and `text` is the path.
    pub fell_back: bool,
}

#[derive(Debug)]
pub struct ListSummary {
    pub path: String,
    pub locale: Locale,
    pub items: Vec<String>,
}

#[derive(Debug)]
pub struct KeysSummary {
    pub locale: Locale,
    /// Leaf paths in file order.
    pub entries: Vec<(String, ValueType)>,
}

#[derive(Debug)]
pub struct RenderSummary {
    pub section: SectionName,
    pub locale: Locale,
    pub text: String,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
    pub error: Option<String>,
}

/// Result of running karto commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of files that failed to load.
    pub parse_error_count: usize,
    /// Number of source files (TSX/JSX/TS/JS) that were checked.
    pub source_files_checked: usize,
    /// Number of locale message files (JSON) that were checked.
    pub locale_files_checked: usize,
}

impl CommandResult {
    /// Result of a command that only prints what it looked up.
    pub fn output(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            warning_count: 0,
            exit_on_errors: true,
            issues: Vec::new(),
            parse_error_count: 0,
            source_files_checked: 0,
            locale_files_checked: 0,
        }
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.exit_on_errors && self.error_count > 0 {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}
