//! File parsers for message tables and source code.
//!
//! - `json`: locale JSON tables (typed tree + line-annotated index)
//! - `calls`: literal `t()` / `ta()` call sites in TSX/JSX/TS/JS sources

pub mod calls;
pub mod json;
