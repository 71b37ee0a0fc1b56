//! Plain-text graph descriptions.
//!
//! Format: lines are trimmed, blank lines and `#` comments are skipped.
//! The first surviving line lists every node name; each later line is one
//! undirected edge as `name name weight`. Tokens are separated by any run
//! of non-word characters, so `A B 3`, `A,B,3` and `A -- B -- 3` all parse
//! the same way.

use std::path::Path;

use regex::Regex;
use tracing::warn;

use crate::error::{Result, RouteGraphError};
use crate::types::{EdgeSpec, GraphDescription};

/// Token separator: one or more non-word characters.
const TOKEN_SPLIT: &str = r"\W+";

/// Parse a description from text.
///
/// An input with no content lines at all parses to the empty description
/// (and an empty graph downstream) rather than failing.
pub fn parse(text: &str) -> Result<GraphDescription> {
    let splitter = Regex::new(TOKEN_SPLIT).expect("token pattern is a valid regex");

    // (1-based line number, content) with blanks and comments dropped
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect();

    let Some(((_, node_line), edge_lines)) = lines.split_first() else {
        warn!("graph description is empty");
        return Ok(GraphDescription::default());
    };

    let nodes: Vec<String> = splitter
        .split(node_line)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();

    let mut edges = Vec::with_capacity(edge_lines.len());
    for (line, content) in edge_lines {
        let tokens: Vec<&str> = splitter
            .split(content)
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.len() < 3 {
            return Err(RouteGraphError::MalformedDescription {
                line: *line,
                reason: "two node names and a weight are required for each edge".to_string(),
            });
        }
        let weight: u64 =
            tokens[2]
                .parse()
                .map_err(|_| RouteGraphError::MalformedDescription {
                    line: *line,
                    reason: format!("invalid edge weight '{}'", tokens[2]),
                })?;
        edges.push(EdgeSpec {
            a: tokens[0].to_string(),
            b: tokens[1].to_string(),
            weight,
        });
    }

    Ok(GraphDescription { nodes, edges })
}

/// Read and parse a description file.
pub fn load(path: impl AsRef<Path>) -> Result<GraphDescription> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
