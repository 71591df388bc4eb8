pub mod glyph;
pub mod hit;
pub mod lint;
pub mod model;
pub mod scene;
pub mod transform;
pub mod variant;

pub use hit::hit_test;
pub use lint::{LintDiagnostic, LintSeverity, lint_scene};
pub use model::*;
pub use scene::{Scene, Surface};
pub use transform::CentroidScale;
pub use variant::{Background, DesignVariant, FitMode};

// Re-export kurbo geometry so downstream crates agree on one point/rect type
pub use kurbo::{Point, Rect};
