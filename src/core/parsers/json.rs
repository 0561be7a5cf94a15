use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::core::{
    AllLocaleMessages, Branch, I18nError, Locale, LocaleMessages, MessageContext, MessageEntry,
    MessageLocation, Node,
};

/// A warning from scanning message files.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    pub messages: AllLocaleMessages,
    pub warnings: Vec<MessageScanWarning>,
}

pub fn parse_json_file(path: &Path, locale: Locale) -> Result<LocaleMessages> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    parse_messages(&content, locale, &path.to_string_lossy())
}

/// Parse one locale's JSON table.
///
/// `file_label` is what diagnostics show as the file path; for embedded
/// tables it is a virtual path.
pub fn parse_messages(content: &str, locale: Locale, file_label: &str) -> Result<LocaleMessages> {
    let json: Value = serde_json::from_str(content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", file_label))?;

    let Value::Object(map) = json else {
        bail!("Top level of {:?} must be an object", file_label);
    };

    let mut root = Branch::new();
    for (key, value) in map {
        let node = to_node(value, &key, locale)?;
        root.insert(key, node);
    }

    let key_lines = index_key_lines(content);
    let mut messages = LocaleMessages::new(locale, file_label);
    for (path, node) in root.leaves() {
        let Some(value_type) = node.value_type() else {
            continue;
        };
        let value = match node {
            Node::Text(text) => text.clone(),
            Node::List(items) => items.join(", "),
            Node::Branch(_) => continue,
        };
        let line = key_lines.get(&path).copied().unwrap_or(1);
        let context = MessageContext::new(
            MessageLocation::with_line(file_label, line),
            path.clone(),
            value,
        );
        messages
            .entries
            .insert(path, MessageEntry { context, value_type });
    }
    messages.root = root;

    tracing::debug!(
        locale = %locale,
        file = file_label,
        leaves = messages.len(),
        "parsed message table"
    );
    Ok(messages)
}

fn to_node(value: Value, path: &str, locale: Locale) -> Result<Node, I18nError> {
    let invalid = |found: &'static str| I18nError::InvalidValue {
        locale: locale.to_string(),
        path: path.to_string(),
        found,
    };

    match value {
        Value::String(text) => Ok(Node::Text(text)),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(text) => Ok(text),
                _ => Err(invalid("an array with non-string items")),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Node::List),
        Value::Object(map) => {
            let mut branch = Branch::new();
            for (key, child) in map {
                let child_path = format!("{}.{}", path, key);
                let node = to_node(child, &child_path, locale)?;
                branch.insert(key, node);
            }
            Ok(Node::Branch(branch))
        }
        Value::Number(_) => Err(invalid("a number")),
        Value::Bool(_) => Err(invalid("a boolean")),
        Value::Null => Err(invalid("null")),
    }
}

enum Frame {
    Object(Option<String>),
    Array,
}

/// Map every object key path to the 1-based line its key is written on.
///
/// Tracks nesting while lexing, so a key is matched at its own level and
/// text inside string values is never mistaken for a key. Keys below an
/// array are skipped; tables never nest objects in arrays.
fn index_key_lines(content: &str) -> HashMap<String, usize> {
    let mut lines = HashMap::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut line = 1;
    let mut chars = content.char_indices().peekable();

    while let Some((open, c)) = chars.next() {
        match c {
            '\n' => line += 1,
            '{' => stack.push(Frame::Object(None)),
            '[' => stack.push(Frame::Array),
            '}' | ']' => {
                stack.pop();
            }
            '"' => {
                let start_line = line;
                let mut close = content.len();
                while let Some((i, c)) = chars.next() {
                    match c {
                        '"' => {
                            close = i + 1;
                            break;
                        }
                        '\\' => {
                            chars.next();
                        }
                        '\n' => line += 1,
                        _ => {}
                    }
                }
                // Decode escapes (`\uXXXX` included) the way the tree was built.
                let raw = &content[open..close];
                let text = serde_json::from_str::<String>(raw)
                    .unwrap_or_else(|_| raw.trim_matches('"').to_string());

                // A string followed by ':' is a key.
                let mut is_key = false;
                while let Some(&(_, next)) = chars.peek() {
                    if next == '\n' {
                        line += 1;
                    } else if next == ':' {
                        is_key = true;
                        chars.next();
                        break;
                    } else if !next.is_whitespace() {
                        break;
                    }
                    chars.next();
                }
                if !is_key {
                    continue;
                }

                let in_array = stack.iter().any(|frame| matches!(frame, Frame::Array));
                if let Some(Frame::Object(current)) = stack.last_mut() {
                    *current = Some(text);
                }
                if in_array {
                    continue;
                }
                let path = stack
                    .iter()
                    .filter_map(|frame| match frame {
                        Frame::Object(Some(key)) => Some(key.as_str()),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                lines.entry(path).or_insert(start_line);
            }
            _ => {}
        }
    }

    lines
}

pub fn extract_locale(path: impl AsRef<Path>) -> Option<String> {
    path.as_ref()
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Load every `<locale>.json` in `message_dir`.
///
/// Files that fail to parse, or whose stem is not a supported locale, are
/// reported as warnings instead of failing the whole scan.
pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();
    let mut result = ScanMessagesResult::default();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .kartorc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(message_dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    for path in paths {
        let Some(stem) = extract_locale(&path) else {
            continue;
        };
        let file_path = path.to_string_lossy().to_string();
        let locale = match stem.parse::<Locale>() {
            Ok(locale) => locale,
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path,
                    error: e.to_string(),
                });
                continue;
            }
        };
        match parse_json_file(&path, locale) {
            Ok(messages) => {
                result.messages.insert(locale, messages);
            }
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
