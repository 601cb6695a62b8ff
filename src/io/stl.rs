//! STL (stereolithography) files.
//!
//! Both encodings are supported and detected automatically when reading:
//!
//! ```text
//! binary:  UINT8[80] header, UINT32 triangle count, then per triangle
//!          REAL32[3] normal, REAL32[3] × 3 vertices, UINT16 attribute byte count
//!
//! ascii:   solid name
//!            facet normal nx ny nz
//!              outer loop
//!                vertex x y z   (× 3)
//!              endloop
//!            endfacet
//!          endsolid name
//! ```
//!
//! Normals are ignored when reading and recomputed from the winding when writing.

use crate::math::{Point, Real, Vector};
use crate::shape::{TriMesh, TriMeshBuilderError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER_SIZE: usize = 80;
const TRIANGLE_SIZE: usize = 50;
const SOLID_NAME: &str = "gridsplit";

/// The encoding of an STL file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum StlFormat {
    /// Compact little-endian encoding.
    #[default]
    Binary,
    /// Human-readable encoding.
    Ascii,
}

/// Errors that can occur when reading or writing an STL file.
#[derive(thiserror::Error, Debug)]
pub enum StlError {
    /// The underlying file could not be read or written.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A line of an ASCII file is malformed.
    #[error("line {line}: {message}")]
    Parse {
        /// The 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
    /// A binary file is shorter than its header announces.
    #[error("the binary file should be {expected} bytes long but is {actual} bytes long.")]
    Truncated {
        /// The length implied by the triangle count.
        expected: usize,
        /// The actual length.
        actual: usize,
    },
    /// The file does not describe any non-degenerate triangle.
    #[error("the file contains no triangle.")]
    NoTriangles,
    /// A vertex has a NaN or infinite coordinate.
    #[error("the triangle {triangle} has a non-finite coordinate.")]
    NonFiniteCoordinate {
        /// The 0-based index of the triangle in the file.
        triangle: usize,
    },
    /// An ASCII file contains more than one `solid` block.
    #[error("the file contains more than one solid.")]
    MultipleSolids,
}

/// Loads a triangle mesh from an STL file, binary or ASCII.
///
/// Identical vertices of adjacent triangles are merged.
pub fn load_stl(path: impl AsRef<Path>) -> Result<TriMesh, StlError> {
    let bytes = std::fs::read(path)?;
    read_stl(&bytes)
}

/// Parses a triangle mesh from the content of an STL file, binary or ASCII.
pub fn read_stl(bytes: &[u8]) -> Result<TriMesh, StlError> {
    let triangles = if is_binary(bytes) {
        parse_binary(bytes)?
    } else {
        parse_ascii(bytes)?
    };

    if let Some(triangle) = triangles
        .iter()
        .position(|tri| !tri.iter().all(|pt| pt.coords.iter().all(|c| c.is_finite())))
    {
        return Err(StlError::NonFiniteCoordinate { triangle });
    }

    TriMesh::from_triangles(triangles).map_err(|e| match e {
        TriMeshBuilderError::EmptyIndices | TriMeshBuilderError::IndexOutOfBounds { .. } => {
            StlError::NoTriangles
        }
    })
}

/// Saves a triangle mesh to an STL file, creating or truncating it.
pub fn save_stl(path: impl AsRef<Path>, mesh: &TriMesh, format: StlFormat) -> Result<(), StlError> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_stl(&mut writer, mesh, format)?;
    writer.flush()?;
    Ok(())
}

/// Writes a triangle mesh in the STL format.
pub fn write_stl<W: Write>(writer: &mut W, mesh: &TriMesh, format: StlFormat) -> io::Result<()> {
    match format {
        StlFormat::Binary => write_binary(writer, mesh),
        StlFormat::Ascii => write_ascii(writer, mesh),
    }
}

/// A binary file is recognized by its size matching the triangle count of its header, since
/// some binary headers start with `solid` as well.
fn is_binary(bytes: &[u8]) -> bool {
    if bytes.len() >= HEADER_SIZE + 4 {
        let count = read_u32(&bytes[HEADER_SIZE..]) as usize;
        if HEADER_SIZE + 4 + count * TRIANGLE_SIZE == bytes.len() {
            return true;
        }
    }

    let start = bytes.iter().position(|b| !b.is_ascii_whitespace());
    !start.is_some_and(|start| bytes[start..].starts_with(b"solid"))
}

fn parse_binary(bytes: &[u8]) -> Result<Vec<[Point<Real>; 3]>, StlError> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(StlError::Truncated {
            expected: HEADER_SIZE + 4,
            actual: bytes.len(),
        });
    }

    let count = read_u32(&bytes[HEADER_SIZE..]) as usize;
    let expected = HEADER_SIZE + 4 + count * TRIANGLE_SIZE;
    if bytes.len() < expected {
        return Err(StlError::Truncated {
            expected,
            actual: bytes.len(),
        });
    }

    Ok(bytes[HEADER_SIZE + 4..expected]
        .chunks_exact(TRIANGLE_SIZE)
        // Skip the normal.
        .map(|tri| [read_point(&tri[12..]), read_point(&tri[24..]), read_point(&tri[36..])])
        .collect())
}

fn read_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn read_f32(bytes: &[u8]) -> f32 {
    f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

fn read_point(bytes: &[u8]) -> Point<Real> {
    Point::new(
        read_f32(bytes) as Real,
        read_f32(&bytes[4..]) as Real,
        read_f32(&bytes[8..]) as Real,
    )
}

fn parse_ascii(bytes: &[u8]) -> Result<Vec<[Point<Real>; 3]>, StlError> {
    let text = String::from_utf8_lossy(bytes);
    let mut triangles = vec![];
    let mut facet = Vec::with_capacity(3);
    let mut num_solids = 0;

    for (i, line) in text.lines().enumerate() {
        let line_number = i + 1;
        let parse_error = |message: &str| StlError::Parse {
            line: line_number,
            message: message.to_string(),
        };

        let mut words = line.split_whitespace();
        match words.next() {
            Some("solid") => {
                num_solids += 1;
                if num_solids > 1 {
                    return Err(StlError::MultipleSolids);
                }
            }
            Some("outer") => facet.clear(),
            Some("vertex") => {
                let mut coords = [0.0; 3];
                for c in &mut coords {
                    *c = words
                        .next()
                        .ok_or_else(|| parse_error("missing vertex coordinate"))?
                        .parse::<Real>()
                        .map_err(|e| parse_error(&format!("invalid vertex coordinate: {e}")))?;
                }
                facet.push(Point::from(coords));
            }
            Some("endloop") => {
                let tri: [Point<Real>; 3] = facet
                    .as_slice()
                    .try_into()
                    .map_err(|_| parse_error("a facet must have exactly three vertices"))?;
                triangles.push(tri);
                facet.clear();
            }
            Some("facet" | "endfacet" | "endsolid") | None => {}
            Some(word) => return Err(parse_error(&format!("unexpected keyword `{word}`"))),
        }
    }

    Ok(triangles)
}

fn facet_normal([a, b, c]: &[Point<Real>; 3]) -> Vector<Real> {
    (b - a)
        .cross(&(c - a))
        .try_normalize(0.0)
        .unwrap_or_else(Vector::zeros)
}

fn write_binary<W: Write>(writer: &mut W, mesh: &TriMesh) -> io::Result<()> {
    let mut header = [0u8; HEADER_SIZE];
    header[..SOLID_NAME.len()].copy_from_slice(SOLID_NAME.as_bytes());
    writer.write_all(&header)?;
    writer.write_all(&(mesh.num_triangles() as u32).to_le_bytes())?;

    for tri in mesh.triangles() {
        let normal = facet_normal(&tri);
        for c in normal.iter().chain(tri.iter().flat_map(|pt| pt.coords.iter())) {
            writer.write_all(&(*c as f32).to_le_bytes())?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

fn write_ascii<W: Write>(writer: &mut W, mesh: &TriMesh) -> io::Result<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;

    for tri in mesh.triangles() {
        let n = facet_normal(&tri);
        writeln!(writer, "  facet normal {:e} {:e} {:e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for pt in &tri {
            writeln!(writer, "      vertex {:e} {:e} {:e}", pt.x, pt.y, pt.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {SOLID_NAME}")
}
