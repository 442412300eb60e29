pub mod bounds;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod host;
pub mod numeric;
pub mod points;
pub mod reconcile;
pub mod scale;
pub mod transforms;

pub use bounds::{AxisRange, PanBounds};
pub use config::{InitialPosition, PinchZoomConfig};
pub use engine::PinchZoom;
pub use error::ConfigError;
pub use geometry::{element_dimensions, pinch_center, pinch_length, relative_coords};
pub use gesture::{Gesture, PanFrame, PinchFrame};
pub use host::{prevent_default_if_cancelable, Element, Layout, TouchInput};
pub use numeric::{clamp, negate, snap_to_target};
pub use points::{dims_equal, Dims, Origin, Rect, TouchPoint};
pub use reconcile::{correct, settle, Constraints, Settle};
pub use scale::{base_scale, fit_scale, MinScale, ScaleLimits};
pub use transforms::{is_same_transform, Transform};
