//! Lint diagnostics for drawn scenes.
//!
//! Reports structural issues without modifying the scene. The canvas logs
//! findings before rasterizing; they never stop a render.

use crate::model::Shape;
use crate::scene::Scene;
use kurbo::Rect;

// ─── Diagnostic types ────────────────────────────────────────────────────

/// Severity of a lint finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Likely a mistake in the vertex tables.
    Warning,
    /// Informational, e.g. content that will be clipped.
    Info,
}

/// A single lint diagnostic for one shape.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Index of the shape in the scene (0 = bottom-most).
    pub shape: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity level.
    pub severity: LintSeverity,
    /// Short rule identifier (e.g. "too-few-vertices", "outside-extent").
    pub rule: &'static str,
}

// ─── Public API ───────────────────────────────────────────────────────────

/// Run all lint rules over the scene for a canvas covering `extent`.
#[must_use]
pub fn lint_scene(scene: &Scene, extent: Rect) -> Vec<LintDiagnostic> {
    let mut diags = Vec::new();
    for (idx, shape) in scene.shapes().iter().enumerate() {
        if lint_non_finite(idx, shape, &mut diags) {
            // Remaining rules assume finite coordinates.
            continue;
        }
        if let Shape::Polygon(poly) = shape {
            if poly.points.len() < 3 {
                diags.push(LintDiagnostic {
                    shape: idx,
                    message: format!(
                        "Polygon #{idx} has {} vertices; at least 3 are needed to enclose an area.",
                        poly.points.len()
                    ),
                    severity: LintSeverity::Warning,
                    rule: "too-few-vertices",
                });
            } else if poly.signed_area().abs() < f64::EPSILON {
                diags.push(LintDiagnostic {
                    shape: idx,
                    message: format!("Polygon #{idx} has zero area and will not be visible."),
                    severity: LintSeverity::Warning,
                    rule: "degenerate-area",
                });
            }
        }
        lint_outside_extent(idx, shape, extent, &mut diags);
    }
    diags
}

// ─── Rules ────────────────────────────────────────────────────────────────

/// Returns true when a diagnostic was pushed.
fn lint_non_finite(idx: usize, shape: &Shape, diags: &mut Vec<LintDiagnostic>) -> bool {
    let finite = match shape {
        Shape::Circle(c) => c.center.is_finite() && c.radius.is_finite(),
        Shape::Polygon(p) => p.points.iter().all(|pt| pt.is_finite()),
    };
    if !finite {
        diags.push(LintDiagnostic {
            shape: idx,
            message: format!("{} #{idx} has a NaN or infinite coordinate.", shape.kind_name()),
            severity: LintSeverity::Warning,
            rule: "non-finite",
        });
    }
    !finite
}

fn lint_outside_extent(idx: usize, shape: &Shape, extent: Rect, diags: &mut Vec<LintDiagnostic>) {
    let b = shape.bounding_box();
    let inside =
        b.x0 >= extent.x0 && b.y0 >= extent.y0 && b.x1 <= extent.x1 && b.y1 <= extent.y1;
    if !inside {
        diags.push(LintDiagnostic {
            shape: idx,
            message: format!(
                "{} #{idx} spans ({}, {})–({}, {}) and is clipped by the canvas extent.",
                shape.kind_name(),
                b.x0,
                b.y0,
                b.x1,
                b.y1
            ),
            severity: LintSeverity::Info,
            rule: "outside-extent",
        });
    }
}
