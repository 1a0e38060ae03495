//! Plain text form of an instance.
//!
//! ```text
//! <capacity>
//! <name>,<cost>,<value>
//! ...
//! ```
//!
//! Every line ends in `\n`. Names are alphabetic, so the comma needs no escaping.

use std::io::Write;

use crate::error::{ParseError, Result};
use crate::instance::{Instance, Item};

/// Writes `instance` to `writer` in its [`Display`](std::fmt::Display) form.
/// The caller owns buffering and flushing.
pub fn write_instance<W: Write>(instance: &Instance, mut writer: W) -> Result<()> {
    write!(writer, "{instance}")?;
    Ok(())
}

/// Reads an instance back from its text form.
///
/// Blank lines are skipped and surrounding whitespace is trimmed, matching
/// what the solvers reading this format tolerate.
pub fn parse_instance(text: &str) -> std::result::Result<Instance, ParseError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (limit_line, limit) = lines.next().ok_or(ParseError::MissingLimit)?;
    let capacity = match limit.parse::<u64>() {
        Ok(capacity) if capacity > 0 => capacity,
        _ => return Err(ParseError::InvalidLimit { line: limit_line }),
    };

    let items = lines
        .map(|(line, text)| parse_item(line, text))
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(Instance { capacity, items })
}

fn parse_item(line: usize, text: &str) -> std::result::Result<Item, ParseError> {
    let invalid = |reason: String| ParseError::InvalidItem { line, reason };

    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    let [name, cost, value] = fields.as_slice() else {
        return Err(invalid(format!(
            "expected <name>,<cost>,<value> but found {} field(s)",
            fields.len()
        )));
    };
    if name.is_empty() {
        return Err(invalid("empty item name".to_string()));
    }
    let cost = cost
        .parse::<u64>()
        .map_err(|_| invalid(format!("cost `{cost}` is not an integer")))?;
    let value = value
        .parse::<u64>()
        .map_err(|_| invalid(format!("value `{value}` is not an integer")))?;

    Ok(Item {
        name: name.to_string(),
        cost,
        value,
    })
}
