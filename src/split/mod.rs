//! Cutting a mesh into a grid of printable parts.
//!
//! The steps of the pipeline are usable on their own:
//!
//! - [`flip`] turns the model upside-down,
//! - [`plan_axis`], [`extents`] and [`SplitPlan`] compute the cutting grid,
//! - [`add_joints`] carves dovetail joints at the interior cut planes,
//! - [`Partitioner`] yields the fragment of the model inside each grid cell.
//!
//! [`Splitter`] chains them, from an STL file to one STL file per part.

pub use self::config::SplitConfig;
pub use self::joints::{add_joints, DovetailParams, JointPair, SplitAxis};
pub use self::orientation::flip;
pub use self::partitioner::{GridCell, Partitioner};
pub use self::planner::{extents, plan_axis, SplitPlan, MAX_DIVISIONS};
pub use self::split_error::SplitError;
pub use self::splitter::{part_file_name, SplitReport, Splitter};

mod config;
mod joints;
mod orientation;
mod partitioner;
mod planner;
mod split_error;
mod splitter;
