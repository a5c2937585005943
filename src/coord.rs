//! Type-safe coordinate system for cursor positioning.
//!
//! Positions move between two main spaces:
//!
//! ```text
//! ViewportSpace → ViewportUVSpace → CanvasSpace
//! ```
//!
//! Each coordinate space is a phantom type that prevents mixing coordinates
//! from different spaces at compile time. The proxy cursor maps OS pointer
//! pixels into a fixed reference canvas; the reticle maps its canvas-anchored
//! position back out to viewport pixels.

use std::ops::{Add, Div, Mul, Sub};

/// Runtime viewport/window pixel coordinates.
/// `(0, 0)` is the top-left of the viewport.
/// Used for raw OS pointer positions and for screen-space query results.
#[derive(Default, Clone, Copy, Debug)]
pub struct ViewportSpace;

/// Normalized viewport coordinates (0.0-1.0 UV space).
/// Intermediate space that makes canvas mappings resolution independent.
#[derive(Default, Clone, Copy, Debug)]
pub struct ViewportUVSpace;

/// Reference UI canvas coordinates.
/// `(0, 0)` is the top-left of the canvas; the canvas has a fixed design
/// resolution (1920x1080 by default) regardless of the runtime viewport.
#[derive(Default, Clone, Copy, Debug)]
pub struct CanvasSpace;

/// A 2D coordinate with an associated coordinate space.
///
/// The phantom type `TSpace` ensures coordinates from different spaces
/// cannot be mixed without explicit conversion.
#[derive(Clone, Copy, Debug, Default)]
pub struct Coord<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: std::marker::PhantomData<TSpace>,
}

impl<TSpace: Default> Coord<TSpace> {
    /// Create a new coordinate in the specified space.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: std::marker::PhantomData,
        }
    }

    /// Create a coordinate from a tuple.
    pub fn from_tuple(xy: (f64, f64)) -> Self {
        Self::new(xy.0, xy.1)
    }

    /// Create a coordinate from i32 values.
    pub fn from_i32(x: i32, y: i32) -> Self {
        Self::new(x as f64, y as f64)
    }

    /// Convert to a tuple.
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Convert to f32 tuple.
    pub fn as_f32(&self) -> (f32, f32) {
        (self.x as f32, self.y as f32)
    }

    /// Clamp coordinates to a range.
    pub fn clamp(self, min: Coord<TSpace>, max: Coord<TSpace>) -> Self {
        Self::new(self.x.clamp(min.x, max.x), self.y.clamp(min.y, max.y))
    }

    /// Linear interpolation between two coordinates.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Get the distance to another coordinate.
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

// Arithmetic operations that preserve the coordinate space

impl<T: Default> Add for Coord<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Default> Sub for Coord<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Default> Mul<f64> for Coord<T> {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl<T: Default> Div<f64> for Coord<T> {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl<T: Default> Mul<Coord<T>> for Coord<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl<T: Default> Div<Coord<T>> for Coord<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Size in a specific coordinate space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Size<TSpace> {
    pub width: f64,
    pub height: f64,
    _space: std::marker::PhantomData<TSpace>,
}

impl<TSpace: Default> Size<TSpace> {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            _space: std::marker::PhantomData,
        }
    }

    pub fn from_u32(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    pub fn as_coord(&self) -> Coord<TSpace> {
        Coord::new(self.width, self.height)
    }

    /// Center point of a region with this size anchored at the origin.
    pub fn center(&self) -> Coord<TSpace> {
        Coord::new(self.width / 2.0, self.height / 2.0)
    }
}

// ============================================================================
// Coordinate Space Conversions
// ============================================================================

impl Coord<ViewportSpace> {
    /// Convert to normalized UV coordinates.
    pub fn to_uv(&self, viewport: Size<ViewportSpace>) -> Coord<ViewportUVSpace> {
        Coord::new(self.x / viewport.width, self.y / viewport.height)
    }

    /// Convert directly to canvas space (common for proxy cursor positions).
    pub fn to_canvas(
        &self,
        viewport: Size<ViewportSpace>,
        canvas: Size<CanvasSpace>,
    ) -> Coord<CanvasSpace> {
        self.to_uv(viewport).to_canvas(canvas)
    }
}

impl Coord<ViewportUVSpace> {
    /// Scale normalized coordinates into a canvas of the given size.
    pub fn to_canvas(&self, canvas: Size<CanvasSpace>) -> Coord<CanvasSpace> {
        Coord::new(self.x * canvas.width, self.y * canvas.height)
    }

    /// Scale normalized coordinates back to viewport pixels.
    pub fn to_viewport(&self, viewport: Size<ViewportSpace>) -> Coord<ViewportSpace> {
        Coord::new(self.x * viewport.width, self.y * viewport.height)
    }
}

impl Coord<CanvasSpace> {
    /// Convert a canvas-anchored position to viewport pixel coordinates by
    /// the ratio `anchored * viewport / canvas`, independently per axis.
    ///
    /// This is NOT a canvas-overlays-viewport identity: the canvas keeps its
    /// own design resolution, so the ratio mapping is required even when the
    /// canvas visually fills the camera viewport.
    pub fn to_viewport(
        &self,
        viewport: Size<ViewportSpace>,
        canvas: Size<CanvasSpace>,
    ) -> Coord<ViewportSpace> {
        Coord::new(
            self.x * viewport.width / canvas.width,
            self.y * viewport.height / canvas.height,
        )
    }

    /// Convert to normalized position within the canvas (0-1).
    pub fn to_normalized(&self, canvas: Size<CanvasSpace>) -> Coord<CanvasSpace> {
        Coord::new(self.x / canvas.width, self.y / canvas.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_to_canvas_identity_resolution() {
        // Pointer at the center of a viewport that matches the reference
        // resolution maps 1:1 onto the canvas.
        let viewport = Size::<ViewportSpace>::new(1920.0, 1080.0);
        let canvas = Size::<CanvasSpace>::new(1920.0, 1080.0);

        let pointer = Coord::<ViewportSpace>::new(960.0, 540.0);
        let on_canvas = pointer.to_canvas(viewport, canvas);
        assert!((on_canvas.x - 960.0).abs() < 0.001);
        assert!((on_canvas.y - 540.0).abs() < 0.001);
    }

    #[test]
    fn test_viewport_to_canvas_scaled_resolution() {
        // Same pointer pixel in a half-size viewport lands at the canvas
        // corner opposite the origin: position is decoupled from viewport size.
        let viewport = Size::<ViewportSpace>::new(960.0, 540.0);
        let canvas = Size::<CanvasSpace>::new(1920.0, 1080.0);

        let pointer = Coord::<ViewportSpace>::new(960.0, 540.0);
        let on_canvas = pointer.to_canvas(viewport, canvas);
        assert!((on_canvas.x - 1920.0).abs() < 0.001);
        assert!((on_canvas.y - 1080.0).abs() < 0.001);
    }

    #[test]
    fn test_canvas_to_viewport_ratio() {
        let viewport = Size::<ViewportSpace>::new(1280.0, 720.0);
        let canvas = Size::<CanvasSpace>::new(1920.0, 1080.0);

        let anchored = Coord::<CanvasSpace>::new(960.0, 540.0);
        let on_screen = anchored.to_viewport(viewport, canvas);
        assert!((on_screen.x - 640.0).abs() < 0.001);
        assert!((on_screen.y - 360.0).abs() < 0.001);
    }

    #[test]
    fn test_canvas_to_viewport_inverse_linear_in_canvas_size() {
        // Doubling canvas width while holding anchored position halves x.
        let viewport = Size::<ViewportSpace>::new(1920.0, 1080.0);
        let anchored = Coord::<CanvasSpace>::new(800.0, 400.0);

        let narrow = anchored.to_viewport(viewport, Size::new(1920.0, 1080.0));
        let wide = anchored.to_viewport(viewport, Size::new(3840.0, 1080.0));
        assert!((wide.x - narrow.x / 2.0).abs() < 0.001);
        assert!((wide.y - narrow.y).abs() < 0.001);
    }

    #[test]
    fn test_uv_round_trip() {
        let viewport = Size::<ViewportSpace>::new(2560.0, 1440.0);
        let pointer = Coord::<ViewportSpace>::new(640.0, 1080.0);

        let uv = pointer.to_uv(viewport);
        assert!((uv.x - 0.25).abs() < 1e-10);
        assert!((uv.y - 0.75).abs() < 1e-10);

        let back = uv.to_viewport(viewport);
        assert!((back.x - 640.0).abs() < 1e-9);
        assert!((back.y - 1080.0).abs() < 1e-9);
    }

    #[test]
    fn test_coord_arithmetic() {
        let a = Coord::<CanvasSpace>::new(10.0, 20.0);
        let b = Coord::<CanvasSpace>::new(5.0, 10.0);

        let sum = a + b;
        assert!((sum.x - 15.0).abs() < 0.001);
        assert!((sum.y - 30.0).abs() < 0.001);

        let diff = a - b;
        assert!((diff.x - 5.0).abs() < 0.001);
        assert!((diff.y - 10.0).abs() < 0.001);

        let scaled = a * 2.0;
        assert!((scaled.x - 20.0).abs() < 0.001);
        assert!((scaled.y - 40.0).abs() < 0.001);

        let component = a * b;
        assert!((component.x - 50.0).abs() < 0.001);
        assert!((component.y - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp() {
        let a = Coord::<CanvasSpace>::new(0.0, 0.0);
        let b = Coord::<CanvasSpace>::new(100.0, 100.0);

        let mid = a.lerp(b, 0.5);
        assert!((mid.x - 50.0).abs() < 0.001);
        assert!((mid.y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_size_center() {
        let canvas = Size::<CanvasSpace>::new(1000.0, 800.0);
        let center = canvas.center();
        assert!((center.x - 500.0).abs() < 0.001);
        assert!((center.y - 400.0).abs() < 0.001);
    }
}
