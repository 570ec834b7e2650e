//! Declarative shape parameters and the derived values computed from them
//! once per rebuild.

/// Implement `TryFrom<i32>` for a closed enum, numbering variants in
/// declaration order. Hosts that store modes as integers go through this.
macro_rules! impl_try_from_i32 {
    ($ty:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        impl TryFrom<i32> for $ty {
            type Error = $crate::error::GeometryError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok($ty::$variant),)+
                    _ => Err($crate::error::GeometryError::OutOfRange {
                        what: stringify!($ty),
                        value,
                    }),
                }
            }
        }
    };
}

pub(crate) use impl_try_from_i32;

mod anti_aliasing;
mod arc;
mod ellipse;
mod line;
mod outline;
mod polygon;
mod rounded;
mod rounding;
mod shadows;
mod shape;

pub use anti_aliasing::AntiAliasingProperties;
pub use arc::{AdjustedArc, ArcDirection, ArcProperties};
pub use ellipse::{EllipseFitting, EllipseProperties};
pub use line::{LineCap, LineProperties};
pub use outline::{LineType, OutlineProperties};
pub use polygon::{CutoutProperties, PolygonCenter, PolygonProperties};
pub use rounded::{AdjustedRounded, Corner, RoundedProperties, RoundedResolution, RoundedType};
pub use rounding::{AdjustedRounding, ResolutionMode, RoundingProperties};
pub use shadows::{ShadowPass, ShadowProperties, ShadowsProperties};
pub use shape::{OutlineShapeProperties, ShapeProperties};
