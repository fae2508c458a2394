//! Plain-text digraph format.
//!
//! Whitespace-separated non-negative integers: the vertex count `V`, the edge
//! count `E`, then `E` pairs `v w`, each meaning `v -> w`. Line breaks carry no
//! meaning, so one edge per line and everything on one line both parse.
//! Tokens after the last edge pair are ignored.
//!
//! ```text
//! 4
//! 3
//! 0 1
//! 1 2
//! 2 0
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{InfluenceError, Result};
use crate::graph::Digraph;

/// Tokens tagged with their 1-based line number.
struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let inner = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self { inner: Box::new(inner), last_line: 1 }
    }

    fn next_usize(&mut self, what: &str) -> Result<(usize, usize)> {
        let Some((line, tok)) = self.inner.next() else {
            return Err(InfluenceError::Parse {
                line: self.last_line,
                message: format!("unexpected end of input, expected {what}"),
            });
        };
        self.last_line = line;
        let value = tok.parse::<usize>().map_err(|_| InfluenceError::Parse {
            line,
            message: format!("expected {what} as a non-negative integer, found `{tok}`"),
        })?;
        Ok((line, value))
    }
}

/// Parse the text format from a string.
pub fn parse_digraph(text: &str) -> Result<Digraph> {
    let mut tokens = Tokens::new(text);
    let (count_line, node_count) = tokens.next_usize("vertex count")?;
    let mut graph = Digraph::try_new(node_count).map_err(|err| InfluenceError::Parse {
        line: count_line,
        message: format!("cannot allocate {node_count} vertices: {err}"),
    })?;
    let (_, edge_count) = tokens.next_usize("edge count")?;

    for _ in 0..edge_count {
        let (line, from) = tokens.next_usize("edge source")?;
        let (_, to) = tokens.next_usize("edge target")?;
        if let Err(err) = graph.add_edge(from, to) {
            return Err(InfluenceError::Parse { line, message: err.to_string() });
        }
    }
    Ok(graph)
}

/// Read the text format from any reader.
pub fn read_digraph<R: Read>(mut reader: R) -> Result<Digraph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_digraph(&text)
}

/// Read the text format from a file.
pub fn load_digraph<P: AsRef<Path>>(path: P) -> Result<Digraph> {
    read_digraph(File::open(path)?)
}

impl FromStr for Digraph {
    type Err = InfluenceError;

    fn from_str(s: &str) -> Result<Self> {
        parse_digraph(s)
    }
}
