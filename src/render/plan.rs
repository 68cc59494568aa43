use crate::foundation::core::{Point, Rect, Rgb8};

/// Horizontal anchoring of drawn text relative to its position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TextAnchor {
    /// The left edge of the text sits at the position.
    #[default]
    Start,
    /// The text is centered on the position.
    Middle,
    /// The right edge of the text sits at the position.
    End,
}

/// A single draw command consumed by a [`DrawSurface`](crate::DrawSurface).
///
/// Ops are plain data: coordinates are final screen-space pixels with the
/// origin at the top-left corner, colors are resolved, and nothing references
/// chart state. A plan can therefore be serialized, diffed, or replayed onto
/// any surface.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum DrawOp {
    /// Clear a rectangle to a solid color.
    Clear {
        /// Region to clear.
        region: Rect,
        /// Fill color.
        color: Rgb8,
    },
    /// Stroke a straight line segment.
    StrokeLine {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke width in pixels.
        width: f64,
        /// Stroke color.
        color: Rgb8,
    },
    /// Fill a circle and outline it with a one-pixel border.
    FillCircle {
        /// Circle center.
        center: Point,
        /// Radius in pixels.
        radius: f64,
        /// Interior color.
        fill: Rgb8,
        /// Border color.
        border: Rgb8,
    },
    /// Draw a single line of text.
    Text {
        /// Anchor position; rotation is applied about this point.
        pos: Point,
        /// The text to draw.
        content: String,
        /// Horizontal anchoring relative to `pos`.
        anchor: TextAnchor,
        /// Clockwise rotation in radians.
        rotation_rad: f64,
    },
}

/// Draw commands for one chart layer, in paint order.
///
/// Next to the ops, the plan reports which entities could not be drawn this
/// frame (no record at the planned z index) so hosts can surface data gaps
/// without re-resolving the frame.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FramePlan {
    /// Commands in paint order.
    pub ops: Vec<DrawOp>,
    /// Entity ids skipped this frame, in sorted order.
    pub missing: Vec<String>,
}

impl FramePlan {
    /// True when the plan draws nothing and skipped nothing.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.missing.is_empty()
    }

    /// Append `other`'s ops after this plan's, merging the missing sets.
    pub fn extend(&mut self, other: FramePlan) {
        self.ops.extend(other.ops);
        self.missing.extend(other.missing);
        self.missing.sort();
        self.missing.dedup();
    }
}
