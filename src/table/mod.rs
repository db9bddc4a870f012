//! Marching-cubes case table (Deep Fried Edition)
//!
//! The 256-entry lookup from corner-sign code to triangle fan, loaded from a
//! nested JSON asset and validated up front. Each entry holds 0-5 triangles;
//! each triangle vertex is a cube-edge midpoint in half-voxel lattice units
//! with components in {-1, 0, +1}.
//!
//! A table is built once and read-only afterwards. The copy shipped with the
//! crate is parsed a single time behind a `OnceLock`; shared read access from
//! concurrent mesh builds is safe.
//!
//! # Deep Fried Optimizations
//! - **Load Once**: the bundled table is parsed a single time behind `OnceLock`.
//! - **Slice Lookup**: `lookup` indexes by `u8`, so the bounds check folds away.
//! - **Streaming I/O**: `load` reads through `BufReader` with `serde_json::from_reader`.
//!
//! Author: Moroya Sakamoto

use glam::IVec3;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

/// Case-table loading and validation errors
#[derive(Error, Debug)]
pub enum TableError {
    /// Table asset file does not exist
    #[error("case table not found: {path}")]
    NotFound {
        /// Path that was probed
        path: String,
    },

    /// I/O error other than a missing file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset is not well-formed JSON
    #[error("case table parse error: {0}")]
    Parse(String),

    /// Asset parsed but deviates from the [256][<=5][3][3] shape
    #[error("case table shape error: {0}")]
    Shape(String),
}

/// Upper bound on triangles per case in a valid table
const MAX_CASE_TRIANGLES: usize = 5;

/// One triangle of a marching-cubes case
///
/// Vertices are cell-local lattice offsets in half-voxel units. Vertex order
/// is the winding order and survives unchanged through welding and assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseTriangle {
    /// Three cube-edge midpoints, components in {-1, 0, +1}
    pub vertices: [IVec3; 3],
}

/// Immutable 256-entry marching-cubes lookup table
///
/// Index is the 8-bit corner-sign code (bit `l` set when corner `l` samples
/// outside); the entry is the ordered triangle fan for that configuration.
#[derive(Debug, Clone)]
pub struct CaseTable {
    cases: Box<[Vec<CaseTriangle>; 256]>,
}

/// Table component that tolerates textually encoded integers ("0", "-1")
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt {
    Num(i64),
    Text(String),
}

impl RawInt {
    fn as_lattice(&self) -> Option<i32> {
        let n = match self {
            RawInt::Num(n) => *n,
            RawInt::Text(s) => s.trim().parse::<i64>().ok()?,
        };
        (-1..=1).contains(&n).then_some(n as i32)
    }
}

/// An edge midpoint has exactly one zero component (components pre-checked to {-1,0,+1})
fn is_edge_midpoint(p: IVec3) -> bool {
    (p.x == 0) as u8 + (p.y == 0) as u8 + (p.z == 0) as u8 == 1
}

impl CaseTable {
    /// Parse a table from a JSON string
    ///
    /// The source must be a nested array shaped [256][≤5][3][3]; leaf values
    /// may be JSON numbers or textually encoded integers.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: Vec<Vec<Vec<Vec<RawInt>>>> =
            serde_json::from_str(json).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse a table from a reader (Streaming)
    pub fn from_reader(reader: impl Read) -> Result<Self, TableError> {
        let raw: Vec<Vec<Vec<Vec<RawInt>>>> =
            serde_json::from_reader(reader).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Load a table from a JSON asset file
    ///
    /// A missing file maps to [`TableError::NotFound`]; meshing cannot run
    /// without a table, so callers treat this as fatal.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TableError::NotFound {
                    path: path.display().to_string(),
                }
            } else {
                TableError::Io(e)
            }
        })?;
        let table = Self::from_reader(BufReader::new(file))?;
        debug!(
            "loaded case table from {}: {} triangles over {} populated cases",
            path.display(),
            table.triangle_count(),
            table.populated_cases()
        );
        Ok(table)
    }

    /// The table bundled with the crate, parsed once per process
    ///
    /// # Panics
    /// Panics if the embedded asset fails validation, which only happens when
    /// the shipped `assets/marching_cube_table.json` is corrupted.
    #[must_use]
    pub fn bundled() -> &'static CaseTable {
        static BUNDLED: OnceLock<CaseTable> = OnceLock::new();
        BUNDLED.get_or_init(|| {
            CaseTable::from_json_str(include_str!("../../assets/marching_cube_table.json"))
                .expect("bundled marching-cube table is valid")
        })
    }

    /// Triangles for one corner-sign code
    ///
    /// Total by construction: the code carries exactly 8 corner bits, so every
    /// `u8` is a valid index.
    #[inline]
    #[must_use]
    pub fn lookup(&self, code: u8) -> &[CaseTriangle] {
        &self.cases[code as usize]
    }

    /// Number of codes with at least one triangle (254 for the classic table)
    #[must_use]
    pub fn populated_cases(&self) -> usize {
        self.cases.iter().filter(|c| !c.is_empty()).count()
    }

    /// Total triangle count across all codes (820 for the classic table)
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.cases.iter().map(Vec::len).sum()
    }

    /// Largest triangle fan over all codes
    #[must_use]
    pub fn max_triangles(&self) -> usize {
        self.cases.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn from_raw(raw: Vec<Vec<Vec<Vec<RawInt>>>>) -> Result<Self, TableError> {
        if raw.len() != 256 {
            return Err(TableError::Shape(format!(
                "expected 256 cases, found {}",
                raw.len()
            )));
        }

        let mut cases: Vec<Vec<CaseTriangle>> = Vec::with_capacity(256);
        for (code, tris) in raw.into_iter().enumerate() {
            if tris.len() > MAX_CASE_TRIANGLES {
                return Err(TableError::Shape(format!(
                    "case {code}: {} triangles exceeds the maximum of {MAX_CASE_TRIANGLES}",
                    tris.len()
                )));
            }
            let mut fan = Vec::with_capacity(tris.len());
            for (t, tri) in tris.into_iter().enumerate() {
                if tri.len() != 3 {
                    return Err(TableError::Shape(format!(
                        "case {code}, triangle {t}: expected 3 vertices, found {}",
                        tri.len()
                    )));
                }
                let mut vertices = [IVec3::ZERO; 3];
                for (v, vert) in tri.into_iter().enumerate() {
                    if vert.len() != 3 {
                        return Err(TableError::Shape(format!(
                            "case {code}, triangle {t}, vertex {v}: expected 3 components, found {}",
                            vert.len()
                        )));
                    }
                    let mut comps = [0i32; 3];
                    for (c, raw_c) in vert.into_iter().enumerate() {
                        comps[c] = raw_c.as_lattice().ok_or_else(|| {
                            TableError::Shape(format!(
                                "case {code}, triangle {t}, vertex {v}, component {c}: expected an integer in -1..=1"
                            ))
                        })?;
                    }
                    let p = IVec3::from_array(comps);
                    if !is_edge_midpoint(p) {
                        return Err(TableError::Shape(format!(
                            "case {code}, triangle {t}, vertex {v}: {p} is not a cube-edge midpoint"
                        )));
                    }
                    vertices[v] = p;
                }
                fan.push(CaseTriangle { vertices });
            }
            cases.push(fan);
        }

        let cases: Box<[Vec<CaseTriangle>; 256]> = cases
            .into_boxed_slice()
            .try_into()
            .map_err(|_| TableError::Shape("expected 256 cases".to_string()))?;
        Ok(CaseTable { cases })
    }
}
