//! Core data types shared by the resolver and the checker.
//!
//! ## Module Structure
//!
//! - `tree`: typed translation tree (Node, Branch)
//! - `message`: message file types (LocaleMessages, MessageEntry, ValueType)
//! - `source`: source code locations and call-site key usages

pub mod message;
pub mod source;
pub mod tree;

pub use message::{
    AllLocaleMessages, LocaleMessages, LocaleTypeMismatch, MessageContext, MessageEntry,
    MessageLocation, ValueType,
};
pub use source::{Accessor, KeyUsage, SourceContext, SourceLocation};
pub use tree::{Branch, Node};
