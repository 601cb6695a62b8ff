use super::{add_joints, flip, Partitioner, SplitAxis, SplitConfig, SplitError, SplitPlan};
use crate::io::{self, StlError};
use crate::math::{Real, Vector};
use crate::shape::TriMesh;
use std::path::{Path, PathBuf};

/// The name of the `part`-th part (1-based) of a model split into at most `num_cells` parts.
///
/// The part number is padded to two digits, or to the number of digits of `num_cells` if more
/// than 99 parts are possible.
///
/// # Example
///
/// ```
/// use gridsplit3d::split::part_file_name;
///
/// assert_eq!(part_file_name("box", 3, 4), "box_splt-03.stl");
/// assert_eq!(part_file_name("box", 7, 150), "box_splt-007.stl");
/// ```
pub fn part_file_name(stem: &str, part: usize, num_cells: usize) -> String {
    let width = num_cells.to_string().len().max(2);
    format!("{stem}_splt-{part:0width$}.stl")
}

/// Summary of a completed split.
#[derive(Clone, Debug)]
pub struct SplitReport {
    /// Dimensions of the model, after the optional flip and before any joint.
    pub model_size: Vector<Real>,
    /// The cutting grid.
    pub plan: SplitPlan,
    /// The files written, in part order.
    pub parts: Vec<PathBuf>,
}

/// Runs the whole split pipeline.
///
/// ```no_run
/// use gridsplit3d::split::{SplitConfig, Splitter};
///
/// let config = SplitConfig {
///     max_x: Some(100.0),
///     max_y: Some(100.0),
///     dovetail: true,
///     ..SplitConfig::default()
/// };
/// let report = Splitter::new(config)?.run("model.stl")?;
/// println!("{} parts", report.parts.len());
/// # Ok::<(), gridsplit3d::split::SplitError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Splitter {
    config: SplitConfig,
}

impl Splitter {
    /// A splitter for `config`, once validated.
    pub fn new(config: SplitConfig) -> Result<Self, SplitError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration of this splitter.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Loads the model, flipping it if configured.
    pub fn load(&self, input: impl AsRef<Path>) -> Result<TriMesh, SplitError> {
        let mesh = io::load_stl(input).map_err(SplitError::InvalidInput)?;
        Ok(if self.config.flip { flip(mesh) } else { mesh })
    }

    /// Plans the cutting grid of `mesh` and reports it.
    pub fn plan(&self, mesh: &TriMesh) -> Result<SplitPlan, SplitError> {
        let aabb = mesh.local_aabb();
        let size = aabb.extents();
        let plan = SplitPlan::new(aabb, &self.config)?;

        log::info!(
            "Model size: {:.2} x {:.2} x {:.2} mm",
            size.x,
            size.y,
            size.z
        );
        log::info!("Divisions: {} x {}", plan.xsplit, plan.ysplit);
        log::info!(
            "Segment size: {:.2} x {:.2} x {:.2} mm",
            plan.segment_size.x,
            plan.segment_size.y,
            plan.segment_size.z
        );

        Ok(plan)
    }

    /// Adds the dovetail joints to `mesh`, if configured.
    ///
    /// All the joints along `x` are added first, then those along `y`.
    pub fn add_joints(&self, mesh: TriMesh, plan: &SplitPlan) -> Result<TriMesh, SplitError> {
        if !self.config.dovetail {
            return Ok(mesh);
        }

        let depth = plan.segment_size.x.min(plan.segment_size.y) / 2.0;
        let params = self.config.dovetail_params(depth);
        log::debug!("dovetail: {params:?}");

        let mesh = add_joints(mesh, SplitAxis::X, plan.xsplit, &params)?;
        add_joints(mesh, SplitAxis::Y, plan.ysplit, &params)
    }

    /// Loads and plans, without cutting anything.
    pub fn dry_run(&self, input: impl AsRef<Path>) -> Result<SplitPlan, SplitError> {
        let mesh = self.load(input)?;
        self.plan(&mesh)
    }

    /// Splits the STL file `input` and writes one STL file per non-empty part.
    ///
    /// The parts are named after `input` and written to the configured output directory, or
    /// next to `input`.
    pub fn run(&self, input: impl AsRef<Path>) -> Result<SplitReport, SplitError> {
        let input = input.as_ref();
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());
        let output_dir = match &self.config.output_dir {
            Some(dir) => dir.clone(),
            None => input
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf),
        };

        let mesh = self.load(input)?;
        self.split(mesh, &stem, &output_dir)
    }

    /// Splits an already loaded (and flipped) mesh and writes its parts to `output_dir`, named
    /// after `stem`.
    pub fn split(
        &self,
        mesh: TriMesh,
        stem: &str,
        output_dir: &Path,
    ) -> Result<SplitReport, SplitError> {
        let model_size = mesh.local_aabb().extents();
        let plan = self.plan(&mesh)?;
        let mesh = self.add_joints(mesh, &plan)?;

        std::fs::create_dir_all(output_dir).map_err(|e| SplitError::Export {
            path: output_dir.to_path_buf(),
            source: StlError::Io(e),
        })?;

        let num_cells = plan.num_cells();
        let mut parts = vec![];
        let partitioner = Partitioner::new(
            &mesh,
            &plan.x_extent,
            &plan.y_extent,
            plan.z_min,
            plan.z_max,
        );

        for fragment in partitioner {
            let (_, fragment) = fragment?;
            let path = output_dir.join(part_file_name(stem, parts.len() + 1, num_cells));

            io::save_stl(&path, &fragment, self.config.stl_format).map_err(|source| {
                SplitError::Export {
                    path: path.clone(),
                    source,
                }
            })?;
            log::info!("Saved: {}", path.display());
            parts.push(path);
        }

        Ok(SplitReport {
            model_size,
            plan,
            parts,
        })
    }
}
