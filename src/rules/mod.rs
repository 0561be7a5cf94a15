//! Rule implementations for `karto check`.
//!
//! Each rule is a pure function over the inputs it needs (call sites,
//! the catalog, precomputed shape drift), with a thin wrapper that pulls
//! those inputs from a [`CheckContext`](crate::core::CheckContext).
//!
//! ## Module Structure
//!
//! - `helpers`: key usage map shared by message-file rules
//! - `missing`: call-site paths absent from a locale
//! - `accessor`: `t()` on a list or `ta()` on a string
//! - `replica_lag`: primary leaves missing from replica locales
//! - `orphan`: replica leaves the primary does not have
//! - `type_mismatch`: leaves whose value type differs between locales

pub mod accessor;
pub mod helpers;
pub mod missing;
pub mod orphan;
pub mod replica_lag;
pub mod type_mismatch;

pub use helpers::{KeyUsageMap, build_key_usage_map};
