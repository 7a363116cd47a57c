//! Viewport-aware placement of a floating panel relative to its trigger.
//!
//! Every pass is a pure function of the measured geometry: the same inputs
//! always produce the same placement, so recomputing on every resize or
//! scroll event cannot oscillate.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size, ViewportGeometry};

/// Which edge of the trigger the panel attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }

    /// Top and bottom panels align along the horizontal axis.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }
}

/// Where the panel sits along the attached edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

impl Align {
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

/// The outcome of one positioning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverlayPlacement {
    pub side: Side,
    pub align: Align,
}

/// What the host asked for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub side: Side,
    pub align: Align,
    /// Gap between trigger and panel, in pixels.
    pub offset: f64,
}

impl Default for PlacementRequest {
    fn default() -> Self {
        Self {
            side: Side::Bottom,
            align: Align::Start,
            offset: 4.0,
        }
    }
}

/// Axes on which the panel cannot fit and must scroll internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overflow {
    pub vertical: bool,
    pub horizontal: bool,
}

/// Placement plus the information needed to style a clipped panel.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedPlacement {
    pub placement: OverlayPlacement,
    pub overflow: Overflow,
    /// Space available on the resolved side, along the side's axis.
    pub max_extent: f64,
}

/// Resolve the side and alignment that keep `panel` inside `viewport`.
///
/// A flip only happens when the opposite side actually has room; when
/// neither side fits (or the panel is larger than the viewport) the
/// requested side is kept and the panel scrolls internally.
pub fn compute_placement(
    trigger: &Rect,
    panel: Size,
    viewport: Size,
    side: Side,
    align: Align,
    offset: f64,
) -> OverlayPlacement {
    let side = resolve_side(trigger, panel, viewport, side, offset);
    let align = if side.is_vertical() {
        resolve_align(trigger.left, trigger.right, panel.width, viewport.width, align)
    } else {
        resolve_align(trigger.top, trigger.bottom, panel.height, viewport.height, align)
    };

    OverlayPlacement { side, align }
}

/// Run [`compute_placement`] and derive overflow and the available extent.
pub fn resolve_placement(geometry: &ViewportGeometry, request: &PlacementRequest) -> ResolvedPlacement {
    let ViewportGeometry {
        viewport,
        trigger,
        panel,
    } = *geometry;
    let placement = compute_placement(
        &trigger,
        panel,
        viewport,
        request.side,
        request.align,
        request.offset,
    );

    let max_extent = match placement.side {
        Side::Bottom => viewport.height - trigger.bottom - request.offset,
        Side::Top => trigger.top - request.offset,
        Side::Right => viewport.width - trigger.right - request.offset,
        Side::Left => trigger.left - request.offset,
    }
    .max(0.0);

    let overflow = if placement.side.is_vertical() {
        Overflow {
            vertical: panel.height > max_extent,
            horizontal: cross_overflows(
                trigger.left,
                trigger.right,
                panel.width,
                viewport.width,
                placement.align,
            ),
        }
    } else {
        Overflow {
            vertical: cross_overflows(
                trigger.top,
                trigger.bottom,
                panel.height,
                viewport.height,
                placement.align,
            ),
            horizontal: panel.width > max_extent,
        }
    };

    if placement.side != request.side || placement.align != request.align {
        tracing::debug!(
            requested_side = request.side.as_str(),
            requested_align = request.align.as_str(),
            side = placement.side.as_str(),
            align = placement.align.as_str(),
            "overlay placement flipped to stay in viewport"
        );
    }

    ResolvedPlacement {
        placement,
        overflow,
        max_extent,
    }
}

fn fits_after(edge: f64, extent: f64, offset: f64, limit: f64) -> bool {
    edge + extent + offset <= limit
}

fn fits_before(edge: f64, extent: f64, offset: f64) -> bool {
    edge - extent - offset >= 0.0
}

fn resolve_side(trigger: &Rect, panel: Size, viewport: Size, side: Side, offset: f64) -> Side {
    match side {
        Side::Bottom | Side::Top if panel.height > viewport.height => side,
        Side::Left | Side::Right if panel.width > viewport.width => side,
        Side::Bottom => {
            if !fits_after(trigger.bottom, panel.height, offset, viewport.height)
                && fits_before(trigger.top, panel.height, offset)
            {
                Side::Top
            } else {
                Side::Bottom
            }
        }
        Side::Top => {
            if !fits_before(trigger.top, panel.height, offset)
                && fits_after(trigger.bottom, panel.height, offset, viewport.height)
            {
                Side::Bottom
            } else {
                Side::Top
            }
        }
        Side::Right => {
            if !fits_after(trigger.right, panel.width, offset, viewport.width)
                && fits_before(trigger.left, panel.width, offset)
            {
                Side::Left
            } else {
                Side::Right
            }
        }
        Side::Left => {
            if !fits_before(trigger.left, panel.width, offset)
                && fits_after(trigger.right, panel.width, offset, viewport.width)
            {
                Side::Right
            } else {
                Side::Left
            }
        }
    }
}

/// Alignment along one axis. `start`/`end` are the trigger's edges on that
/// axis, `extent` the panel's size and `limit` the viewport's size.
fn resolve_align(start: f64, end: f64, extent: f64, limit: f64, align: Align) -> Align {
    if extent > limit {
        return align;
    }

    let start_fits = start + extent <= limit;
    let end_fits = end - extent >= 0.0;

    match align {
        Align::Start if !start_fits => Align::End,
        Align::End if !end_fits => Align::Start,
        Align::Center => {
            let centered = (start + end) / 2.0 - extent / 2.0;
            if centered < 0.0 {
                if start_fits {
                    Align::Start
                } else if end_fits {
                    Align::End
                } else {
                    Align::Center
                }
            } else if centered + extent > limit {
                if end_fits {
                    Align::End
                } else if start_fits {
                    Align::Start
                } else {
                    Align::Center
                }
            } else {
                Align::Center
            }
        }
        other => other,
    }
}

fn cross_overflows(start: f64, end: f64, extent: f64, limit: f64, align: Align) -> bool {
    let origin = match align {
        Align::Start => start,
        Align::End => end - extent,
        Align::Center => (start + end) / 2.0 - extent / 2.0,
    };
    origin < 0.0 || origin + extent > limit
}
