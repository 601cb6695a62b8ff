/*!
gridsplit
=========

**gridsplit** cuts a triangle mesh too large for a 3D printer into a grid of
smaller pieces, optionally keyed together with dovetail joints, written with
the rust programming language.

The pipeline is:

1. load the mesh ([`io::stl`]),
2. optionally flip it upside-down ([`split::flip`]),
3. plan the cutting grid ([`split::plan_axis`], [`split::extents`]),
4. optionally carve dovetail joints at the interior cut planes
   ([`split::add_joints`]),
5. intersect the mesh with every grid cell ([`split::Partitioner`]) and export
   each non-empty fragment.

[`split::Splitter`] runs the whole pipeline from a [`split::SplitConfig`].
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod io;
pub mod shape;
pub mod split;
pub mod transformation;

mod real {
    /// The scalar type used throughout this crate.
    ///
    /// Boolean operations on millimeter-scale models need the extra precision of `f64`.
    pub use f64 as Real;
}

/// Aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Isometry3, Point3, Translation3, Vector3};

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The transformation matrix type.
    pub use Isometry3 as Isometry;

    /// The translation type.
    pub use Translation3 as Translation;
}
