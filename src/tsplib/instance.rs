//! TSPLIB EUC_2D instance parser.

use std::path::Path;

use crate::distance::DistanceMatrix;
use crate::error::{AcsError, AcsResult};

/// A TSPLIB problem instance with its precomputed distance matrix.
///
/// Only symmetric `TYPE: TSP` problems with `EDGE_WEIGHT_TYPE: EUC_2D`
/// are accepted. Node ids in the file are 1-based and converted to
/// 0-based indices.
///
/// # Examples
///
/// ```
/// use acs_tsp::tsplib::TsplibInstance;
///
/// let text = "\
/// NAME : tiny
/// TYPE : TSP
/// DIMENSION : 3
/// EDGE_WEIGHT_TYPE : EUC_2D
/// NODE_COORD_SECTION
/// 1 0.0 0.0
/// 2 3.0 4.0
/// 3 0.0 8.0
/// EOF
/// ";
/// let instance = TsplibInstance::parse(text).unwrap();
/// assert_eq!(instance.name(), "tiny");
/// assert_eq!(instance.dimension(), 3);
/// assert!((instance.matrix().get(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct TsplibInstance {
    name: String,
    comment: String,
    dimension: usize,
    matrix: DistanceMatrix,
}

impl TsplibInstance {
    /// Parses TSPLIB file content.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::Parse`] with a 1-based line number for a
    /// non-TSP type, a non-EUC_2D edge weight type, malformed coordinate
    /// lines, or a node count that disagrees with `DIMENSION`.
    pub fn parse(content: &str) -> AcsResult<Self> {
        let mut name = String::new();
        let mut comment = String::new();
        let mut dimension = 0usize;
        let mut coords: Vec<(f64, f64)> = Vec::new();
        let mut in_coord_section = false;

        for (index, raw) in content.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with("EOF") {
                break;
            }

            if in_coord_section {
                coords.push(parse_coord_line(line, line_no)?);
                continue;
            }

            if line.starts_with("NODE_COORD_SECTION") {
                in_coord_section = true;
                continue;
            }

            let (key, value) = match line.split_once(':') {
                Some((key, value)) => (key.trim(), value.trim()),
                None => (line, ""),
            };
            match key {
                "NAME" => name = value.to_string(),
                "COMMENT" => comment = value.to_string(),
                "TYPE" => {
                    if !value.contains("TSP") {
                        return Err(AcsError::Parse {
                            line: line_no,
                            message: format!("not a TSP problem: TYPE is {value}"),
                        });
                    }
                }
                "EDGE_WEIGHT_TYPE" => {
                    if !value.contains("EUC_2D") {
                        return Err(AcsError::Parse {
                            line: line_no,
                            message: format!("unsupported edge weight type: {value}"),
                        });
                    }
                }
                "DIMENSION" => {
                    dimension = value.parse().map_err(|_| AcsError::Parse {
                        line: line_no,
                        message: format!("invalid dimension: {value}"),
                    })?;
                }
                // DISPLAY_DATA_TYPE and similar keys carry nothing we need
                _ => {}
            }
        }

        if dimension != coords.len() {
            return Err(AcsError::Parse {
                line: content.lines().count(),
                message: format!(
                    "DIMENSION is {dimension} but {} node coordinates were read",
                    coords.len()
                ),
            });
        }

        Ok(Self {
            name,
            comment,
            dimension,
            matrix: DistanceMatrix::from_points(&coords),
        })
    }

    /// Reads and parses a TSPLIB file.
    ///
    /// # Errors
    ///
    /// Returns [`AcsError::Io`] if the file cannot be read, otherwise the
    /// same errors as [`TsplibInstance::parse`].
    pub fn from_file<Q: AsRef<Path>>(path: Q) -> AcsResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Instance name from the NAME header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text COMMENT header.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Number of nodes.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The precomputed distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Consumes the instance, returning the distance matrix.
    pub fn into_matrix(self) -> DistanceMatrix {
        self.matrix
    }
}

fn parse_coord_line(line: &str, line_no: usize) -> AcsResult<(f64, f64)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.len() < 3 {
        return Err(AcsError::Parse {
            line: line_no,
            message: format!("expected 'id x y', got: {line}"),
        });
    }
    // Some instances pad ids; take the last three fields.
    let x = parts[parts.len() - 2].parse().map_err(|_| AcsError::Parse {
        line: line_no,
        message: format!("invalid x coordinate: {}", parts[parts.len() - 2]),
    })?;
    let y = parts[parts.len() - 1].parse().map_err(|_| AcsError::Parse {
        line: line_no,
        message: format!("invalid y coordinate: {}", parts[parts.len() - 1]),
    })?;
    Ok((x, y))
}
