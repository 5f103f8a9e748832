mod types;

pub use types::*;

use crate::config::ViewportConfig;
use crate::error::{Error, InvalidGraph, Result};
use crate::ir::Node;

/// Zoom factor applied on top of the fitted scale, clamped to configured limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom(f64);

impl Zoom {
    pub const IDENTITY: Zoom = Zoom(1.0);

    /// Clamps `value` to the default slider range; non-finite input resets to 1.
    pub fn new(value: f64) -> Self {
        let config = ViewportConfig::default();
        Self::clamped(value, config.min_zoom, config.max_zoom)
    }

    /// Clamps `value` to `[min, max]`. Unusable limits (non-finite, not
    /// positive, or `min > max`) and non-finite values give `IDENTITY`.
    pub fn clamped(value: f64, min: f64, max: f64) -> Self {
        if value.is_finite() && zoom_limits_valid(min, max) {
            Zoom(value.clamp(min, max))
        } else {
            Zoom::IDENTITY
        }
    }

    pub fn from_config(config: &ViewportConfig) -> Self {
        Self::clamped(config.zoom, config.min_zoom, config.max_zoom)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Rounded percentage, as shown next to the zoom control.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Zoom::IDENTITY
    }
}

/// Fits `nodes` into a `width` x `height` viewport with the default 10% margin.
pub fn scale_to_viewport(nodes: &[Node], width: f64, height: f64) -> Result<ScaledGraph> {
    scale_to_viewport_with(nodes, width, height, &ViewportConfig::default())
}

/// Fits `nodes` into the viewport using `config.padding_ratio` as margin.
///
/// One scale factor is used for both axes so the plan is never stretched.
/// An axis whose padded extent is zero does not constrain the scale; when
/// both are zero the scale is 1.
///
/// Nodes with non-finite coordinates are rejected, as is a node set whose
/// padded extent overflows `f64`.
pub fn scale_to_viewport_with(
    nodes: &[Node],
    width: f64,
    height: f64,
    config: &ViewportConfig,
) -> Result<ScaledGraph> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(Error::InvalidViewport { width, height });
    }
    check_padding_ratio(config.padding_ratio)?;
    if let Some((idx, node)) = nodes.iter().enumerate().find(|(_, node)| !node.is_finite()) {
        return Err(InvalidGraph::NonFiniteCoordinate {
            node: idx,
            x: node.x,
            y: node.y,
        }
        .into());
    }
    let Some(raw) = Bounds::from_nodes(nodes) else {
        return Ok(ScaledGraph::default());
    };

    let bounds = raw.padded(config.padding_ratio);
    if ![bounds.min_x, bounds.min_y, bounds.max_x, bounds.max_y, bounds.width(), bounds.height()]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(Error::UnboundedExtent {
            width: bounds.width(),
            height: bounds.height(),
        });
    }
    let scale_x = axis_scale(width, bounds.width());
    let scale_y = axis_scale(height, bounds.height());
    let base_scale = match (scale_x, scale_y) {
        (Some(sx), Some(sy)) => sx.min(sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 1.0,
    };
    tracing::trace!(
        nodes = nodes.len(),
        width,
        height,
        base_scale,
        degenerate_x = scale_x.is_none(),
        degenerate_y = scale_y.is_none(),
        "scaled node set to viewport"
    );

    let scaled_nodes = nodes
        .iter()
        .map(|node| ScaledNode {
            node: node.clone(),
            scaled_x: (node.x - bounds.min_x) * base_scale,
            scaled_y: (node.y - bounds.min_y) * base_scale,
        })
        .collect();

    Ok(ScaledGraph {
        scaled_nodes,
        bounds: Some(bounds),
        base_scale: Some(base_scale),
    })
}

/// Padding must be a finite, non-negative share of the axis extent.
pub fn check_padding_ratio(ratio: f64) -> Result<()> {
    if ratio.is_finite() && ratio >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidPadding { ratio })
    }
}

pub(crate) fn zoom_limits_valid(min: f64, max: f64) -> bool {
    min.is_finite() && max.is_finite() && min > 0.0 && min <= max
}

fn axis_scale(target: f64, extent: f64) -> Option<f64> {
    (extent > 0.0).then(|| target / extent)
}
