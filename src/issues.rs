//! Issue types produced by `karto check`.
//!
//! Each issue is self-contained: it carries everything the reporter needs
//! to print a location, a message and the related notes.

use enum_dispatch::enum_dispatch;

use crate::core::{
    Accessor, Locale, LocaleTypeMismatch, MessageContext, SourceContext, SourceLocation,
    ValueType,
};

// ============================================================
// Severity and Rule
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    MissingKey,
    AccessorMismatch,
    ReplicaLag,
    OrphanKey,
    TypeMismatch,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MissingKey => write!(f, "missing-key"),
            Rule::AccessorMismatch => write!(f, "accessor-mismatch"),
            Rule::ReplicaLag => write!(f, "replica-lag"),
            Rule::OrphanKey => write!(f, "orphan-key"),
            Rule::TypeMismatch => write!(f, "type-mismatch"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Issue Types - Source Code (SourceContext)
// ============================================================

/// Path used at a call site but absent from one or more locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub context: SourceContext,
    pub key: String,
    pub accessor: Accessor,
    /// Locales without the path, in locale order.
    pub missing_in: Vec<Locale>,
}

impl MissingKeyIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MissingKey
    }
}

/// `t()` on an array leaf, or `ta()` on a string leaf. The lookup can
/// only ever return its fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorMismatchIssue {
    pub context: SourceContext,
    pub key: String,
    pub accessor: Accessor,
    /// What the path holds in the primary locale ("string", "array", "object").
    pub found: &'static str,
    pub primary_locale: Locale,
    pub hint: Option<String>,
}

impl AccessorMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::AccessorMismatch
    }
}

// ============================================================
// Issue Types - Message Files (MessageContext)
// ============================================================

/// Leaf in the primary locale missing from replica locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplicaLagIssue {
    pub context: MessageContext,
    pub primary_locale: Locale,
    pub missing_in: Vec<Locale>,
    /// Call sites using this path.
    pub usages: Vec<SourceLocation>,
}

impl ReplicaLagIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ReplicaLag
    }
}

/// Leaf in a replica locale that the primary locale does not have.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanKeyIssue {
    pub context: MessageContext,
    pub locale: Locale,
}

impl OrphanKeyIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::OrphanKey
    }
}

/// Leaf whose value type differs between the primary and replicas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeMismatchIssue {
    pub context: MessageContext,
    pub expected_type: ValueType,
    pub primary_locale: Locale,
    pub mismatched_in: Vec<LocaleTypeMismatch>,
    pub usages: Vec<SourceLocation>,
}

impl TypeMismatchIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::TypeMismatch
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MissingKey(MissingKeyIssue),
    AccessorMismatch(AccessorMismatchIssue),
    ReplicaLag(ReplicaLagIssue),
    OrphanKey(OrphanKeyIssue),
    TypeMismatch(TypeMismatchIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        self.report_severity()
    }

    pub fn rule(&self) -> Rule {
        self.report_rule()
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// Message file location.
    Message(&'a MessageContext),
    /// File-level only.
    File { path: &'a str },
}

#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (key, error text).
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    fn hint(&self) -> Option<&str> {
        None
    }

    /// Text for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }

    /// Call sites for the "= used:" lines.
    fn usages(&self) -> &[SourceLocation] {
        &[]
    }

    /// Whether "= used:" should be printed even when there are no usages.
    fn shows_usages(&self) -> bool {
        false
    }
}

fn join_locales(locales: &[Locale]) -> String {
    locales
        .iter()
        .map(|locale| locale.code())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for MissingKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("missing in: {}", join_locales(&self.missing_in)))
    }
}

impl Report for AccessorMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "{}() expects {}, but '{}' has {}",
            self.accessor,
            self.accessor.expected_type(),
            self.primary_locale,
            self.found
        ))
    }
}

impl Report for ReplicaLagIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "(\"{}\") missing in: {}",
            self.context.value,
            join_locales(&self.missing_in)
        ))
    }

    fn usages(&self) -> &[SourceLocation] {
        &self.usages
    }

    fn shows_usages(&self) -> bool {
        true
    }
}

impl Report for OrphanKeyIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("in {} (\"{}\")", self.locale, self.context.value))
    }
}

impl Report for TypeMismatchIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.context)
    }

    fn message(&self) -> String {
        self.context.key.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mismatches: Vec<String> = self
            .mismatched_in
            .iter()
            .map(|m| format!("{} ({})", m.locale, m.actual_type))
            .collect();
        Some(format!(
            "expected {}, got: {}",
            self.expected_type,
            mismatches.join(", ")
        ))
    }

    fn usages(&self) -> &[SourceLocation] {
        &self.usages
    }

    fn shows_usages(&self) -> bool {
        true
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Issue {
    /// (file, line, col) used to order issues.
    pub fn sort_position(&self) -> (&str, usize, usize) {
        match self.location() {
            ReportLocation::Source(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::Message(ctx) => (ctx.file_path(), ctx.line(), ctx.col()),
            ReportLocation::File { path } => (path, 0, 0),
        }
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_position()
            .cmp(&other.sort_position())
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
