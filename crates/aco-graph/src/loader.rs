//! Problem-file loader.
//!
//! # File format
//!
//! One whitespace-separated parameter line followed by an `N × N` weight
//! matrix:
//!
//! ```text
//! numNodes nestNode alpha beta delta eta rho gamma colonySize horizon
//! w11 w12 ... w1N
//! ...
//! wN1 wN2 ... wNN
//! ```
//!
//! The matrix must be symmetric with non-negative integer entries and a zero
//! diagonal; `0` means "no edge".  Any deviation is reported as a
//! [`GraphError`] naming the offending line or cell, and nothing else is
//! built.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use aco_core::{NodeId, SimParams, params::DEFAULT_OBSERVATIONS};

use crate::{AdjacencyGraph, GraphBuilder, GraphError, GraphResult, MAX_NODES};

// ── ProblemHeader ─────────────────────────────────────────────────────────────

/// The parameter line of a problem file.
#[derive(Clone, Debug, PartialEq)]
pub struct ProblemHeader {
    pub node_count:  usize,
    pub nest:        NodeId,
    pub alpha:       f64,
    pub beta:        f64,
    pub delta:       f64,
    pub eta:         f64,
    pub rho:         f64,
    pub gamma:       f64,
    pub colony_size: usize,
    pub horizon:     f64,
}

impl ProblemHeader {
    /// Combine with a run seed into full simulation parameters.
    pub fn into_params(self, seed: u64) -> SimParams {
        SimParams {
            nest:         self.nest,
            alpha:        self.alpha,
            beta:         self.beta,
            delta:        self.delta,
            eta:          self.eta,
            rho:          self.rho,
            gamma:        self.gamma,
            colony_size:  self.colony_size,
            horizon:      self.horizon,
            seed,
            observations: DEFAULT_OBSERVATIONS,
        }
    }

    fn parse(line: &str) -> GraphResult<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 10 {
            return Err(GraphError::Header {
                line:    1,
                message: format!("expected 10 parameters, found {}", tokens.len()),
            });
        }
        Ok(Self {
            node_count:  field(&tokens, 0, "numNodes")?,
            nest:        NodeId(field(&tokens, 1, "nestNode")?),
            alpha:       field(&tokens, 2, "alpha")?,
            beta:        field(&tokens, 3, "beta")?,
            delta:       field(&tokens, 4, "delta")?,
            eta:         field(&tokens, 5, "eta")?,
            rho:         field(&tokens, 6, "rho")?,
            gamma:       field(&tokens, 7, "gamma")?,
            colony_size: field(&tokens, 8, "colonySize")?,
            horizon:     field(&tokens, 9, "horizon")?,
        })
    }
}

fn field<T: FromStr>(tokens: &[&str], i: usize, name: &str) -> GraphResult<T> {
    tokens[i].parse().map_err(|_| GraphError::Header {
        line:    1,
        message: format!("{name} has invalid value `{}`", tokens[i]),
    })
}

// ── Problem ───────────────────────────────────────────────────────────────────

/// A parsed problem file: parameters plus the graph.
#[derive(Clone, Debug)]
pub struct Problem {
    pub header: ProblemHeader,
    pub graph:  AdjacencyGraph,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a problem file from disk.
pub fn load_problem(path: &Path) -> GraphResult<Problem> {
    let file = File::open(path)?;
    load_problem_reader(BufReader::new(file))
}

/// Like [`load_problem`] but accepts any `BufRead` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_problem_reader<R: BufRead>(reader: R) -> GraphResult<Problem> {
    let mut lines = reader.lines();

    let header_line = lines.next().transpose()?.ok_or_else(|| GraphError::Header {
        line:    1,
        message: "file is empty".into(),
    })?;
    let header = ProblemHeader::parse(&header_line)?;
    let n = header.node_count;
    if n > MAX_NODES {
        return Err(GraphError::Header {
            line:    1,
            message: format!("numNodes {n} exceeds the limit of {MAX_NODES}"),
        });
    }

    // ── Weight matrix ─────────────────────────────────────────────────────
    let mut matrix: Vec<Vec<u64>> = Vec::new();
    for row in 0..n {
        let line = lines
            .next()
            .transpose()?
            .ok_or(GraphError::MissingRows { expected: n, got: row })?;
        matrix.push(parse_row(&line, row, n)?);
    }

    let graph = graph_from_matrix(&matrix)?;
    Ok(Problem { header, graph })
}

fn parse_row(line: &str, row: usize, n: usize) -> GraphResult<Vec<u64>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != n {
        return Err(GraphError::RowLength { row: row + 1, expected: n, got: tokens.len() });
    }
    tokens
        .iter()
        .enumerate()
        .map(|(col, token)| {
            let value: i64 = token.parse().map_err(|_| GraphError::NotInteger {
                row:   row + 1,
                col:   col + 1,
                token: (*token).to_owned(),
            })?;
            u64::try_from(value).map_err(|_| GraphError::NegativeWeight { row: row + 1, col: col + 1 })
        })
        .collect()
}

/// Build a graph from a square, symmetric, zero-diagonal weight matrix.
pub fn graph_from_matrix(matrix: &[Vec<u64>]) -> GraphResult<AdjacencyGraph> {
    let n = matrix.len();
    let mut builder = GraphBuilder::try_new(n)?;
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(GraphError::RowLength { row: i + 1, expected: n, got: row.len() });
        }
        if row[i] != 0 {
            return Err(GraphError::SelfLoop(NodeId::from_slot(i)));
        }
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix[i][j] != matrix[j][i] {
                return Err(GraphError::Asymmetric { row: i + 1, col: j + 1 });
            }
            if matrix[i][j] != 0 {
                builder.add_edge(NodeId::from_slot(i), NodeId::from_slot(j), matrix[i][j])?;
            }
        }
    }
    Ok(builder.build())
}
