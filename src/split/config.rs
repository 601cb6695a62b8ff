use super::{DovetailParams, SplitError};
use crate::io::StlFormat;
use crate::math::Real;
use std::path::PathBuf;

/// Parameters of a split.
///
/// The default configuration cuts nothing: one part, no joint, written as binary STL next to
/// the input file.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde-serialize",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct SplitConfig {
    /// Explicit number of divisions along `x`.
    pub xsplit: Option<u32>,
    /// Explicit number of divisions along `y`.
    pub ysplit: Option<u32>,
    /// Maximum part size along `x` (mm). Ignored if `xsplit` is set.
    pub max_x: Option<Real>,
    /// Maximum part size along `y` (mm). Ignored if `ysplit` is set.
    pub max_y: Option<Real>,
    /// Rotate the model by 180° about the `x` axis before splitting.
    pub flip: bool,
    /// Add dovetail joints at the interior cut planes.
    pub dovetail: bool,
    /// Width of the base of a dovetail (mm).
    pub dovetail_width: Real,
    /// Height of a dovetail (mm).
    pub dovetail_height: Real,
    /// Taper of the sides of a dovetail (radians).
    pub dovetail_angle: Real,
    /// Where the parts are written. Defaults to the directory of the input file.
    pub output_dir: Option<PathBuf>,
    /// Encoding of the parts.
    pub stl_format: StlFormat,
}

impl Default for SplitConfig {
    fn default() -> Self {
        let dovetail = DovetailParams::default();
        Self {
            xsplit: None,
            ysplit: None,
            max_x: None,
            max_y: None,
            flip: false,
            dovetail: false,
            dovetail_width: dovetail.width,
            dovetail_height: dovetail.height,
            dovetail_angle: dovetail.angle,
            output_dir: None,
            stl_format: StlFormat::Binary,
        }
    }
}

impl SplitConfig {
    /// Checks that every size and angle is in range.
    ///
    /// A maximum part size is only checked on an axis without an explicit number of divisions,
    /// since it is ignored otherwise.
    pub fn validate(&self) -> Result<(), SplitError> {
        let max_sizes = [
            ("max_x", self.xsplit, self.max_x),
            ("max_y", self.ysplit, self.max_y),
        ];

        for (name, splits, max) in max_sizes {
            if let (None, Some(max)) = (splits, max) {
                check_positive(name, max)?;
            }
        }

        self.dovetail_params(1.0).validate()
    }

    /// The dovetail parameters of this configuration, with the given depth.
    pub fn dovetail_params(&self, depth: Real) -> DovetailParams {
        DovetailParams {
            width: self.dovetail_width,
            height: self.dovetail_height,
            depth,
            angle: self.dovetail_angle,
        }
    }
}

pub(super) fn check_positive(name: &str, value: Real) -> Result<(), SplitError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SplitError::InvalidConfiguration(format!(
            "`{name}` must be a positive number, got {value}"
        )))
    }
}
