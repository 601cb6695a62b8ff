use super::polygon::Polygon;
use super::EPS;
use crate::math::{Point, Real, Vector};
use smallvec::SmallVec;

const COPLANAR: u8 = 0;
const FRONT: u8 = 1;
const BACK: u8 = 2;
const SPANNING: u8 = 3;

/// An oriented plane: the points `p` with `normal · p = bias`.
///
/// The front side is the side `normal` points to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(super) struct Plane {
    pub normal: Vector<Real>,
    pub bias: Real,
}

/// Where a polygon ended up after being split by a plane.
pub(super) enum PolygonSplit {
    /// On the plane, facing the same way.
    CoplanarFront(Polygon),
    /// On the plane, facing the opposite way.
    CoplanarBack(Polygon),
    Front(Polygon),
    Back(Polygon),
    /// Crossing the plane. A piece is `None` if it degenerated to less than three vertices.
    Spanning {
        front: Option<Polygon>,
        back: Option<Polygon>,
    },
}

impl Plane {
    /// The plane through `a`, `b`, `c`, facing the side from which they appear counter-clockwise.
    ///
    /// Returns `None` if the three points are (almost) collinear.
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Plane> {
        let normal = (b - a).cross(&(c - a)).try_normalize(1.0e-12)?;
        Some(Plane {
            normal,
            bias: normal.dot(&a.coords),
        })
    }

    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.bias = -self.bias;
    }

    pub fn split_polygon(&self, polygon: Polygon) -> PolygonSplit {
        let mut polygon_type = COPLANAR;
        let types: SmallVec<[u8; 8]> = polygon
            .vertices
            .iter()
            .map(|v| {
                let dist = self.normal.dot(&v.coords) - self.bias;
                let vtype = if dist < -EPS {
                    BACK
                } else if dist > EPS {
                    FRONT
                } else {
                    COPLANAR
                };
                polygon_type |= vtype;
                vtype
            })
            .collect();

        match polygon_type {
            COPLANAR => {
                if self.normal.dot(&polygon.plane.normal) > 0.0 {
                    PolygonSplit::CoplanarFront(polygon)
                } else {
                    PolygonSplit::CoplanarBack(polygon)
                }
            }
            FRONT => PolygonSplit::Front(polygon),
            BACK => PolygonSplit::Back(polygon),
            _ => {
                let n = polygon.vertices.len();
                let mut front = SmallVec::new();
                let mut back = SmallVec::new();

                for i in 0..n {
                    let j = (i + 1) % n;
                    let (ti, tj) = (types[i], types[j]);
                    let (vi, vj) = (polygon.vertices[i], polygon.vertices[j]);

                    if ti != BACK {
                        front.push(vi);
                    }
                    if ti != FRONT {
                        back.push(vi);
                    }
                    if ti | tj == SPANNING {
                        let dir = vj - vi;
                        let t = (self.bias - self.normal.dot(&vi.coords)) / self.normal.dot(&dir);
                        let v = vi + dir * t;
                        front.push(v);
                        back.push(v);
                    }
                }

                PolygonSplit::Spanning {
                    front: Polygon::with_plane(front, polygon.plane),
                    back: Polygon::with_plane(back, polygon.plane),
                }
            }
        }
    }
}
