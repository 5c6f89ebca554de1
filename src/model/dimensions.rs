#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height of the suspension top.
pub const SUSPENSION_TOP: f64 = 0.1;
/// Height of the diaphragm apex at rest.
pub const DIAPHRAGM_APEX: f64 = 0.15;

/// Driver dimensions in metres.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeakerDimensions {
    pub coil_radius: f64,
    pub coil_height: f64,
    pub diaphragm_radius: f64,
    pub magnet_width: f64,
    pub magnet_height: f64,
    pub frame_width: f64,
    pub frame_height: f64,
}

impl Default for SpeakerDimensions {
    fn default() -> Self {
        Self {
            coil_radius: 0.02,
            coil_height: 0.01,
            diaphragm_radius: 0.1,
            magnet_width: 0.1,
            magnet_height: 0.03,
            frame_width: 0.24,
            frame_height: 0.01,
        }
    }
}

impl SpeakerDimensions {
    /// Coil centre height with no drive applied.
    pub fn coil_rest(&self) -> f64 {
        self.coil_height / 2.0
    }
}

/// Axis-aligned rectangle anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Closed polygon with a fixed vertex count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon<const N: usize> {
    pub vertices: [(f64, f64); N],
}

impl<const N: usize> Polygon<N> {
    pub fn new(vertices: [(f64, f64); N]) -> Self {
        Self { vertices }
    }

    /// Edges including the closing edge from the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = ((f64, f64), (f64, f64))> + '_ {
        (0..N).map(move |i| (self.vertices[i], self.vertices[(i + 1) % N]))
    }
}

/// Every part of the cross-section in its rest position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeakerShapes {
    pub magnet: Rectangle,
    pub frame_top: Rectangle,
    pub frame_bottom: Rectangle,
    pub suspension: Polygon<4>,
    pub coil: Circle,
    pub diaphragm: Polygon<3>,
}

impl SpeakerShapes {
    pub fn new(dims: &SpeakerDimensions) -> Self {
        let half_magnet = dims.magnet_width / 2.0;
        let half_frame = dims.frame_width / 2.0;
        let coil_rest = dims.coil_rest();

        Self {
            magnet: Rectangle {
                x: -half_magnet,
                y: 0.0,
                width: dims.magnet_width,
                height: dims.magnet_height,
            },
            frame_top: Rectangle {
                x: -half_frame,
                y: dims.magnet_height,
                width: dims.frame_width,
                height: dims.frame_height,
            },
            frame_bottom: Rectangle {
                x: -half_frame,
                y: -dims.frame_height,
                width: dims.frame_width,
                height: dims.frame_height,
            },
            suspension: Polygon::new([
                (-half_magnet, dims.magnet_height),
                (-half_magnet, SUSPENSION_TOP),
                (half_magnet, SUSPENSION_TOP),
                (half_magnet, dims.magnet_height),
            ]),
            coil: Circle {
                x: 0.0,
                y: coil_rest,
                radius: dims.coil_radius,
            },
            diaphragm: Polygon::new([
                (-dims.diaphragm_radius, coil_rest),
                (0.0, DIAPHRAGM_APEX),
                (dims.diaphragm_radius, coil_rest),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_shapes_follow_dimensions() {
        let dims = SpeakerDimensions::default();
        let shapes = SpeakerShapes::new(&dims);

        assert_eq!(shapes.magnet.x, -0.05);
        assert_eq!(shapes.magnet.width, 0.1);
        assert_eq!(shapes.frame_top.y, 0.03);
        assert_eq!(shapes.frame_bottom.y, -0.01);
        assert_eq!(shapes.frame_bottom.x, -0.12);
        assert_eq!(shapes.coil.y, 0.005);
        assert_eq!(shapes.coil.radius, 0.02);
        assert_eq!(shapes.diaphragm.vertices[1], (0.0, 0.15));
        assert_eq!(shapes.suspension.vertices[2], (0.05, 0.1));
    }

    #[test]
    fn polygon_edges_close_the_shape() {
        let triangle = Polygon::new([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        let edges: Vec<_> = triangle.edges().collect();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[2], ((0.0, 1.0), (0.0, 0.0)));
    }
}
