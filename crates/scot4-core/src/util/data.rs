//! YAML data handling utilities.
//!
//! Loading goes straight through `serde_yaml`. Writing uses [`to_block_yaml`],
//! which emits block style with every nested collection indented two spaces
//! past its parent key. Plain `serde_yaml::to_string` writes sequences under
//! a mapping key at the key's own column.

use scot4_types::{Scot4Error, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Indentation step for nested block collections.
pub const INDENT: usize = 2;

/// Load YAML from string.
pub fn load_yaml(content: &str) -> Result<Value> {
    serde_yaml::from_str(content).map_err(Scot4Error::Yaml)
}

/// Load YAML from file.
pub fn load_yaml_file(path: impl AsRef<Path>) -> Result<Value> {
    let content = super::fs::slurp(path)?;
    load_yaml(&content)
}

/// Save YAML to file, creating or truncating it.
pub fn save_yaml_file(path: impl AsRef<Path>, data: &Value) -> Result<()> {
    let path = path.as_ref();
    let yaml = to_block_yaml(data)?;
    super::fs::write_file(path, &yaml)?;
    tracing::debug!("Wrote {} bytes to {}", yaml.len(), path.display());
    Ok(())
}

/// Render a value as block-style YAML, preserving mapping key order.
pub fn to_block_yaml(value: &Value) -> Result<String> {
    let mut out = String::new();
    match value {
        Value::Mapping(map) if !map.is_empty() => emit_mapping(map, 0, &mut out)?,
        Value::Sequence(seq) if !seq.is_empty() => emit_sequence(seq, 0, &mut out)?,
        other => {
            out.push_str(&render_inline(other, INDENT)?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn emit_mapping(map: &Mapping, indent: usize, out: &mut String) -> Result<()> {
    let pad = " ".repeat(indent);

    for (key, value) in map {
        if matches!(key, Value::Mapping(_) | Value::Sequence(_)) {
            return Err(Scot4Error::Other(format!(
                "Cannot write complex mapping key: {:?}",
                key
            )));
        }
        let key = render_inline(key, indent + INDENT)?;

        match value {
            Value::Mapping(nested) if !nested.is_empty() => {
                out.push_str(&format!("{}{}:\n", pad, key));
                emit_mapping(nested, indent + INDENT, out)?;
            }
            Value::Sequence(nested) if !nested.is_empty() => {
                out.push_str(&format!("{}{}:\n", pad, key));
                emit_sequence(nested, indent + INDENT, out)?;
            }
            scalar => {
                let rendered = render_inline(scalar, indent + INDENT)?;
                out.push_str(&format!("{}{}: {}\n", pad, key, rendered));
            }
        }
    }

    Ok(())
}

fn emit_sequence(seq: &[Value], indent: usize, out: &mut String) -> Result<()> {
    let pad = " ".repeat(indent);
    let item_indent = indent + INDENT;

    for item in seq {
        let nested = match item {
            Value::Mapping(map) if !map.is_empty() => {
                let mut nested = String::new();
                emit_mapping(map, item_indent, &mut nested)?;
                Some(nested)
            }
            Value::Sequence(items) if !items.is_empty() => {
                let mut nested = String::new();
                emit_sequence(items, item_indent, &mut nested)?;
                Some(nested)
            }
            _ => None,
        };

        match nested {
            // The first nested line shares the "- " marker line.
            Some(nested) => {
                out.push_str(&pad);
                out.push_str("- ");
                out.push_str(&nested[item_indent..]);
            }
            None => {
                let rendered = render_inline(item, item_indent)?;
                out.push_str(&format!("{}- {}\n", pad, rendered));
            }
        }
    }

    Ok(())
}

/// Render a scalar (or empty collection) with serde_yaml's own quoting.
///
/// Strings holding line breaks or other control characters are written as
/// double-quoted flow scalars, so leading spaces and trailing blank lines
/// come back unchanged. Continuation lines of any other multi-line output
/// are shifted to `child_indent`.
fn render_inline(value: &Value, child_indent: usize) -> Result<String> {
    if let Value::String(s) = value {
        if s.chars().any(char::is_control) {
            return Ok(double_quoted(s));
        }
    }

    let rendered = serde_yaml::to_string(value)?;
    let rendered = rendered.strip_suffix('\n').unwrap_or(&rendered);

    let continuation = format!("\n{}", " ".repeat(child_indent));
    Ok(rendered.replace('\n', &continuation))
}

fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
