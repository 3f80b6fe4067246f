//! Pure coordinate math for the free-position list.
//!
//! Converts pixel measurements into container-relative percentages and
//! clamps them so a task's rendered box never leaves its container on the
//! right or bottom edge, while the left and top edges stay at or above 0.
//! Nothing here reads or writes board state.

use taskboard_model::{Delta, Position, Rect};

/// Inputs for [`resolve_free_position`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreePlacement {
    /// The dragged element's box at drag start.
    ///
    /// A zero-sized box (`Rect::point`) is accepted when the element was
    /// never measured; its footprint then counts as 0.
    pub element: Rect,
    /// Displacement over the whole gesture.
    pub delta: Delta,
    /// The destination container's box.
    pub container: Rect,
}

/// Clamps a percentage into `[min, max]`.
///
/// When `max < min` (a task larger than its container) the result is
/// `min`, so the left/top edge stays inside. NaN clamps to `min`.
#[must_use]
pub fn clamp_percent(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || max < min {
        return min;
    }
    value.clamp(min, max)
}

/// Converts a pixel coordinate into a percentage of a container axis.
///
/// Returns `0.0` for a container that is not yet measured (size not
/// strictly positive and finite). Callers must treat that as "keep the
/// previous position" rather than as a real coordinate.
#[must_use]
pub fn to_container_percent(point_px: f64, origin_px: f64, size_px: f64) -> f64 {
    if !size_px.is_finite() || size_px <= 0.0 {
        return 0.0;
    }
    (point_px - origin_px) / (size_px / 100.0)
}

/// Computes where a dragged task lands inside the free-position container.
///
/// The end-of-drag top-left corner is `element + delta`, expressed in
/// percent of the container and clamped to
/// `x ∈ [0, 100 − width%]`, `y ∈ [0, 100 − height%]`.
///
/// Returns `None` if the container is unmeasured.
#[must_use]
pub fn resolve_free_position(input: &FreePlacement) -> Option<Position> {
    let container = input.container;
    if !container.is_measured() {
        return None;
    }

    let end = input.element.translate(input.delta);
    let x = to_container_percent(end.left, container.left, container.width);
    let y = to_container_percent(end.top, container.top, container.height);

    let width_pct = footprint_percent(input.element.width, container.width);
    let height_pct = footprint_percent(input.element.height, container.height);

    Some(Position::new(
        clamp_percent(x, 0.0, 100.0 - width_pct),
        clamp_percent(y, 0.0, 100.0 - height_pct),
    ))
}

/// Converts a container-relative percentage position back into a pixel
/// point inside `container`.
#[must_use]
pub fn position_to_px(position: Position, container: Rect) -> Rect {
    Rect::point(
        container.left + position.x * container.width / 100.0,
        container.top + position.y * container.height / 100.0,
    )
}

/// An element extent as percent of the container extent; unmeasured or
/// negative sizes count as 0.
fn footprint_percent(element_px: f64, container_px: f64) -> f64 {
    if !element_px.is_finite() || element_px <= 0.0 {
        return 0.0;
    }
    to_container_percent(element_px, 0.0, container_px)
}
