use serde::{Deserialize, Serialize};

/// A client-space rectangle in CSS pixels, shaped like `DOMRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rectangle from its origin and extent.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// Horizontal midpoint.
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical midpoint.
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Width and height in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Everything the placement pass measures: the viewport, the trigger's
/// bounding box and the panel's rendered size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportGeometry {
    pub viewport: Size,
    pub trigger: Rect,
    pub panel: Size,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_new_derives_edges() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right, 110.0);
        assert_eq!(r.bottom, 70.0);
        assert_eq!(r.center_x(), 60.0);
        assert_eq!(r.center_y(), 45.0);
    }

    #[test]
    fn geometry_deserializes_from_measurement_json() {
        let json = r#"{
            "viewport": {"width": 320, "height": 800},
            "trigger": {"top": 10, "left": 20, "right": 120, "bottom": 40, "width": 100, "height": 30},
            "panel": {"width": 200, "height": 150}
        }"#;
        let geo: ViewportGeometry = serde_json::from_str(json).unwrap();
        assert_eq!(geo.viewport, Size::new(320.0, 800.0));
        assert_eq!(geo.trigger, Rect::new(20.0, 10.0, 100.0, 30.0));
        assert_eq!(geo.panel.height, 150.0);
    }
}
