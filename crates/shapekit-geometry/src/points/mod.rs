//! Polyline pipeline: generation, minimum-distance merging, corner
//! interpolation, then tangents, mitred normals and arc lengths.

mod curve;
mod data;
mod generators;
mod list;

pub use curve::{CurveGenerator, CurvePoint, CurveSegment, DEFAULT_CURVE_DIVISIONS};
pub use data::{MAX_MITRE_LENGTH, PointsData, PointsDirtyFlags, set_line_data};
pub(crate) use data::mitred_normal;
pub use generators::{
    AngleLineGenerator, GearGenerator, GeneratePoints, LineGraphGenerator, PointsGenerator,
    RadialGraphGenerator, RectGenerator, RoundGenerator, StarGenerator,
};
pub use list::PointListProperties;
