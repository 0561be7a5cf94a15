//! Literal `t("...")` / `ta("...")` call-site extraction.
//!
//! Only string literals (double, single or backtick quotes without `${`)
//! are recognised; a dynamic argument is not a lookup path that can be
//! checked. The call must open and close on one line.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::{Accessor, KeyUsage, SourceContext, SourceLocation};

static TRANSLATION_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^\w.$])(ta|t)\(\s*(?:"([^"\\]*)"|'([^'\\]*)'|`([^`\\$]*)`)\s*[,)]"#)
        .unwrap()
});

/// Find every literal translation call in `source`.
pub fn extract_key_usages(file_path: &str, source: &str) -> Vec<KeyUsage> {
    let mut usages = Vec::new();

    for (index, line) in source.lines().enumerate() {
        for caps in TRANSLATION_CALL_REGEX.captures_iter(line) {
            let Some(name) = caps.get(1) else {
                continue;
            };
            let Some(key) = caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4)) else {
                continue;
            };
            let accessor = if name.as_str() == "ta" {
                Accessor::List
            } else {
                Accessor::Scalar
            };
            // 1-based column in characters, pointing at the function name
            let col = line[..name.start()].chars().count() + 1;

            usages.push(KeyUsage {
                context: SourceContext::new(
                    SourceLocation::new(file_path, index + 1, col),
                    line,
                ),
                key: key.as_str().to_string(),
                accessor,
            });
        }
    }

    usages
}
