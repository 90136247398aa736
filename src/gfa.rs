//! GFA 1 input.
//!
//! Reads the segment (`S`), link (`L`), and path (`P`) records of a GFA 1
//! file into a [`SimplePathGraph`]. Other record types are ignored. Links and
//! paths may refer to segments defined later in the file, so they are applied
//! after all segments have been read.

use crate::simple_graph::SimplePathGraph;
use crate::utils;

use gbwt::Orientation;
use gbwt::support;

use std::io::BufRead;
use std::path::Path;

#[cfg(test)]
mod tests;

//-----------------------------------------------------------------------------

/// Reads a GFA 1 graph from the file, which may be gzip-compressed.
pub fn load_gfa<P: AsRef<Path>>(filename: P) -> Result<SimplePathGraph, String> {
    let reader = utils::open_file(filename)?;
    parse_gfa(reader)
}

/// Reads a GFA 1 graph from the reader.
pub fn parse_gfa<R: BufRead>(reader: R) -> Result<SimplePathGraph, String> {
    let mut graph = SimplePathGraph::new();
    let mut links: Vec<(usize, usize)> = Vec::new();
    let mut paths: Vec<(String, Vec<usize>)> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line.map_err(|x| x.to_string())?;
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        match fields[0] {
            "S" => {
                let (id, sequence) = parse_segment(&fields)
                    .map_err(|x| format!("Line {}: {}", number + 1, x))?;
                graph.add_node(id, sequence)
                    .map_err(|x| format!("Line {}: {}", number + 1, x))?;
            }
            "L" => {
                let link = parse_link(&fields)
                    .map_err(|x| format!("Line {}: {}", number + 1, x))?;
                links.push(link);
            }
            "P" => {
                let path = parse_path(&fields)
                    .map_err(|x| format!("Line {}: {}", number + 1, x))?;
                paths.push(path);
            }
            _ => (),
        }
    }

    for (from, to) in links {
        graph.add_edge(from, to)?;
    }
    for (name, steps) in paths {
        graph.add_path(&name, steps)?;
    }
    Ok(graph)
}

//-----------------------------------------------------------------------------

fn parse_segment(fields: &[&str]) -> Result<(usize, Vec<u8>), String> {
    if fields.len() < 3 {
        return Err(String::from("Segment record with too few fields"));
    }
    let id = fields[1].parse::<usize>()
        .map_err(|_| format!("Invalid segment name {}", fields[1]))?;
    let sequence = if fields[2] == "*" {
        Vec::new()
    } else {
        fields[2].as_bytes().to_vec()
    };
    Ok((id, sequence))
}

fn parse_link(fields: &[&str]) -> Result<(usize, usize), String> {
    if fields.len() < 5 {
        return Err(String::from("Link record with too few fields"));
    }
    let from = parse_handle(fields[1], fields[2])?;
    let to = parse_handle(fields[3], fields[4])?;
    Ok((from, to))
}

fn parse_path(fields: &[&str]) -> Result<(String, Vec<usize>), String> {
    if fields.len() < 3 {
        return Err(String::from("Path record with too few fields"));
    }
    let name = fields[1].to_string();
    let mut steps = Vec::new();
    if fields[2] != "*" {
        for token in fields[2].split(',') {
            steps.push(parse_step(token)?);
        }
    }
    Ok((name, steps))
}

// A segment name with a separate orientation field, as in link records.
fn parse_handle(name: &str, orientation: &str) -> Result<usize, String> {
    let id = name.parse::<usize>()
        .map_err(|_| format!("Invalid segment name {}", name))?;
    let orientation = match orientation {
        "+" => Orientation::Forward,
        "-" => Orientation::Reverse,
        _ => return Err(format!("Invalid orientation {}", orientation)),
    };
    Ok(support::encode_node(id, orientation))
}

// A path step token of the form `id+` or `id-`.
fn parse_step(token: &str) -> Result<usize, String> {
    if token.len() < 2 {
        return Err(format!("Invalid path step {}", token));
    }
    let (name, orientation) = token.split_at(token.len() - 1);
    parse_handle(name, orientation)
}

//-----------------------------------------------------------------------------
