use std::fmt;

use super::message::ValueType;

/// Pure position information in source code files (TSX/JSX/TS/JS).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position plus the source line, for report context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Translation accessor used at a call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Accessor {
    /// `t("path")`, expects a string leaf.
    Scalar,
    /// `ta("path")`, expects an array leaf.
    List,
}

impl Accessor {
    pub fn expected_type(self) -> ValueType {
        match self {
            Accessor::Scalar => ValueType::String,
            Accessor::List => ValueType::StringArray,
        }
    }

    pub fn fn_name(self) -> &'static str {
        match self {
            Accessor::Scalar => "t",
            Accessor::List => "ta",
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fn_name())
    }
}

/// A literal lookup path found at a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyUsage {
    pub context: SourceContext,
    pub key: String,
    pub accessor: Accessor,
}
