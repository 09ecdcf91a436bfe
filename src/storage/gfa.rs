//! GFA 1.0 loader for [`MemoryGraph`].
//!
//! Reads `S` (segment), `L` (link) and `P` (path) records. Headers and other
//! record types are skipped. Segment names must be positive integers, as in
//! graphs produced by `odgi view` or `vg view`.

use std::io::BufRead;

use tracing::warn;

use crate::model::{MAX_NODE_ID, NodeHandle, NodeId};
use crate::{Error, Result};
use super::MemoryGraph;

/// Parse a GFA document into a new graph.
///
/// Segments are created first, then links, then paths, so records may
/// appear in any order.
pub fn parse(reader: impl BufRead) -> Result<MemoryGraph> {
    let mut segments: Vec<(NodeId, String, usize)> = Vec::new();
    let mut links: Vec<(NodeHandle, NodeHandle, usize)> = Vec::new();
    let mut paths: Vec<(String, Vec<NodeHandle>, usize)> = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match fields[0] {
            "S" => {
                let [_, name, seq, ..] = fields[..] else {
                    return Err(parse_error(line_no, "segment needs a name and a sequence"));
                };
                segments.push((parse_id(name, line_no)?, seq.to_owned(), line_no));
            }
            "L" => {
                let [_, from, from_orient, to, to_orient, ..] = fields[..] else {
                    return Err(parse_error(line_no, "link needs two oriented segments"));
                };
                let from = oriented(from, from_orient, line_no)?;
                let to = oriented(to, to_orient, line_no)?;
                links.push((from, to, line_no));
            }
            "P" => {
                let [_, name, steps, ..] = fields[..] else {
                    return Err(parse_error(line_no, "path needs a name and a step list"));
                };
                let steps = steps
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .map(|s| parse_step(s, line_no))
                    .collect::<Result<Vec<_>>>()?;
                paths.push((name.to_owned(), steps, line_no));
            }
            "H" => {}
            other => warn!(line = line_no, record = other, "skipping unsupported GFA record"),
        }
    }

    let mut graph = MemoryGraph::new();
    for (id, seq, line_no) in segments {
        graph.create_handle(seq, id).map_err(|e| parse_error(line_no, e))?;
    }
    for (from, to, line_no) in links {
        graph.create_edge(from, to).map_err(|e| parse_error(line_no, e))?;
    }
    for (name, steps, line_no) in paths {
        let path = graph.create_path(name).map_err(|e| parse_error(line_no, e))?;
        for step in steps {
            graph.append_step(path, step).map_err(|e| parse_error(line_no, e))?;
        }
    }
    Ok(graph)
}

fn parse_error(line: usize, message: impl ToString) -> Error {
    Error::Parse { line, message: message.to_string() }
}

fn parse_id(name: &str, line: usize) -> Result<NodeId> {
    match name.parse::<NodeId>() {
        Ok(id) if id > MAX_NODE_ID => Err(parse_error(line, format!("segment id {id} exceeds {MAX_NODE_ID}"))),
        Ok(id) if id > 0 => Ok(id),
        _ => Err(parse_error(line, format!("segment name '{name}' is not a positive integer"))),
    }
}

fn oriented(name: &str, orient: &str, line: usize) -> Result<NodeHandle> {
    let is_reverse = match orient {
        "+" => false,
        "-" => true,
        other => return Err(parse_error(line, format!("bad orientation '{other}'"))),
    };
    Ok(NodeHandle::new(parse_id(name, line)?, is_reverse))
}

fn parse_step(step: &str, line: usize) -> Result<NodeHandle> {
    let split = step.len().saturating_sub(1);
    if !step.is_char_boundary(split) || split == 0 {
        return Err(parse_error(line, format!("bad path step '{step}'")));
    }
    let (name, orient) = step.split_at(split);
    oriented(name, orient, line)
}
