use super::{SplitConfig, SplitError};
use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector};

/// The largest number of divisions of one axis.
pub const MAX_DIVISIONS: u32 = 10_000;

/// Number of divisions of one axis of the model.
///
/// An explicit count wins over a maximum part size. With a maximum part size only, this is
/// the smallest count such that the parts are no longer than `max_printable`. The result is
/// at least 1 on every path, and an error if it exceeds [`MAX_DIVISIONS`].
///
/// # Example
///
/// ```
/// use gridsplit3d::split::plan_axis;
///
/// assert_eq!(plan_axis(200.0, None, Some(90.0)).unwrap(), 3);
/// assert_eq!(plan_axis(200.0, Some(5), Some(90.0)).unwrap(), 5);
/// assert_eq!(plan_axis(200.0, None, None).unwrap(), 1);
/// assert!(plan_axis(200.0, None, Some(-5.0)).is_err());
/// ```
pub fn plan_axis(
    model_size: Real,
    explicit_splits: Option<u32>,
    max_printable: Option<Real>,
) -> Result<u32, SplitError> {
    let splits = match (explicit_splits, max_printable) {
        (Some(splits), _) => splits,
        (None, Some(max)) => {
            if !(max > 0.0 && max.is_finite()) {
                return Err(SplitError::InvalidConfiguration(format!(
                    "the maximum part size must be a positive number, got {max}"
                )));
            }
            if !model_size.is_finite() {
                return Err(SplitError::InvalidConfiguration(format!(
                    "the model size must be finite, got {model_size}"
                )));
            }
            if model_size / max > MAX_DIVISIONS as Real {
                return Err(SplitError::InvalidConfiguration(format!(
                    "a maximum part size of {max} needs more than {MAX_DIVISIONS} divisions \
                     of a model of size {model_size}"
                )));
            }

            min_divisions(model_size, max)
        }
        (None, None) => 1,
    };

    if splits > MAX_DIVISIONS {
        return Err(SplitError::InvalidConfiguration(format!(
            "{splits} divisions exceed the limit of {MAX_DIVISIONS}"
        )));
    }

    Ok(splits.max(1))
}

fn min_divisions(size: Real, max: Real) -> u32 {
    let mut n = (size / max).ceil().max(1.0) as u32;
    // Correct the rounding of the division.
    while n > 1 && (n - 1) as Real * max >= size {
        n -= 1;
    }
    while (n as Real) * max < size {
        n += 1;
    }
    n
}

/// The `splits + 1` equally spaced cut coordinates from `min_bound` to `max_bound`.
///
/// The first coordinate is exactly `min_bound` and the last one exactly `max_bound`.
pub fn extents(min_bound: Real, max_bound: Real, splits: u32) -> Vec<Real> {
    let splits = splits.max(1);
    let length = max_bound - min_bound;

    (0..=splits)
        .map(|i| {
            if i == splits {
                max_bound
            } else {
                min_bound + length * (i as Real / splits as Real)
            }
        })
        .collect()
}

/// The cutting grid of a model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SplitPlan {
    /// Number of divisions along `x`.
    pub xsplit: u32,
    /// Number of divisions along `y`.
    pub ysplit: u32,
    /// The `xsplit + 1` cut coordinates along `x`.
    pub x_extent: Vec<Real>,
    /// The `ysplit + 1` cut coordinates along `y`.
    pub y_extent: Vec<Real>,
    /// Bottom of every cell. The model is never cut along `z`.
    pub z_min: Real,
    /// Top of every cell.
    pub z_max: Real,
    /// Dimensions of one cell.
    pub segment_size: Vector<Real>,
}

impl SplitPlan {
    /// Plans the cutting grid of a model with the bounding box `aabb`.
    pub fn new(aabb: &Aabb, config: &SplitConfig) -> Result<Self, SplitError> {
        let size = aabb.extents();
        let xsplit = plan_axis(size.x, config.xsplit, config.max_x)?;
        let ysplit = plan_axis(size.y, config.ysplit, config.max_y)?;

        Ok(Self {
            xsplit,
            ysplit,
            x_extent: extents(aabb.mins.x, aabb.maxs.x, xsplit),
            y_extent: extents(aabb.mins.y, aabb.maxs.y, ysplit),
            z_min: aabb.mins.z,
            z_max: aabb.maxs.z,
            segment_size: Vector::new(size.x / xsplit as Real, size.y / ysplit as Real, size.z),
        })
    }

    /// The number of grid cells, i.e., the maximum number of parts.
    pub fn num_cells(&self) -> usize {
        self.xsplit as usize * self.ysplit as usize
    }
}
