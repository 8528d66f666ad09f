//! Dataset text reader.

use std::collections::HashMap;
use std::path::Path;

use log::debug;

use super::{BlockKind, Dataset, ResultBlock};
use crate::error::{QucsimError, Result};
use crate::netlist::is_word_char;

/// Scan text for `<KIND NAME TYPE> ... </KIND>` blocks.
///
/// Anything outside a well-formed block is ignored, and so is any body token
/// that does not parse as a float.
pub fn read_dataset(text: &str) -> Dataset {
    let mut dataset = Dataset::new();
    let mut pos = 0;

    while let Some(rel) = text[pos..].find('<') {
        let start = pos + rel;
        match read_block(&text[start..]) {
            Some((block, consumed)) => {
                dataset.push(block);
                pos = start + consumed;
            }
            None => pos = start + 1,
        }
    }

    debug!("read {} dataset blocks", dataset.blocks.len());
    dataset
}

/// Decode dataset text into name -> values.
pub fn decode(text: &str) -> HashMap<String, Vec<f64>> {
    read_dataset(text).into_map()
}

/// Decode a dataset file; a missing file is an error.
pub fn decode_file(path: &Path) -> Result<HashMap<String, Vec<f64>>> {
    if !path.exists() {
        return Err(QucsimError::missing_file(path));
    }
    let content = std::fs::read_to_string(path).map_err(|e| QucsimError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(decode(&content))
}

/// Read one block at the start of `src`, returning it with the bytes consumed.
fn read_block(src: &str) -> Option<(ResultBlock, usize)> {
    let rest = src.strip_prefix('<')?;
    let (kind, rest) = if let Some(rest) = rest.strip_prefix("indep") {
        (BlockKind::Independent, rest)
    } else if let Some(rest) = rest.strip_prefix("dep") {
        (BlockKind::Dependent, rest)
    } else {
        return None;
    };

    let rest = skip_space(rest)?;
    let (name, rest) = take_word(rest)?;
    let rest = skip_space(rest)?;
    let (type_tag, rest) = take_word(rest)?;
    let body = rest.strip_prefix('>')?;

    let closing = format!("</{}>", kind.tag());
    let end = body.find(&closing)?;
    let values = body[..end]
        .split_whitespace()
        .filter_map(|token| token.parse::<f64>().ok())
        .collect();

    let consumed = src.len() - body.len() + end + closing.len();
    Some((
        ResultBlock {
            kind,
            name: name.to_string(),
            type_tag: type_tag.to_string(),
            values,
        },
        consumed,
    ))
}

/// Skip one or more whitespace characters.
fn skip_space(s: &str) -> Option<&str> {
    let trimmed = s.trim_start();
    (trimmed.len() < s.len()).then_some(trimmed)
}

/// Split off a non-empty run of word characters.
fn take_word(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|ch: char| !is_word_char(ch)).unwrap_or(s.len());
    (end > 0).then(|| s.split_at(end))
}
