use crate::{
    core::{
        event::EventDelegate,
        math::{delta_angle, vec2, Matrix, Vector2},
        traits::Real,
    },
    error::{GeometryError, Result},
    shape::{Polygon, ShapeOps},
};

/// View onto the world for a canvas of a given pixel size.
///
/// The camera matrix maps world coordinates into camera space (camera position at the origin)
/// and the canvas matrix maps camera space onto the canvas: y is flipped, the origin moved to the
/// canvas center and everything scaled so that a `target_w` x `target_h` world area fits the
/// canvas. The camera does not own a canvas, call [Camera::resize] when its size changes.
///
/// # Examples
///
/// ```
/// # use impulse2d::scene::Camera;
/// # use impulse2d::core::math::vec2;
/// // 800x600 canvas showing at least 400x300 world units centered on (10, 0)
/// let camera = Camera::new(800.0, 600.0, 10.0, 0.0, 400.0, 300.0);
/// assert_eq!(camera.world_to_canvas(vec2(10.0, 0.0)), vec2(400.0, 300.0));
/// assert_eq!(camera.world_to_canvas(vec2(11.0, 1.0)), vec2(402.0, 298.0));
/// assert_eq!(camera.canvas_to_world(vec2(400.0, 300.0)).unwrap(), vec2(10.0, 0.0));
/// ```
#[derive(Debug)]
pub struct Camera<T = f64>
where
    T: Real,
{
    camera_matrix: Matrix<T>,
    canvas_matrix: Matrix<T>,
    canvas_w: T,
    canvas_h: T,
    target_w: T,
    target_h: T,
    w: T,
    h: T,
    /// Extra world units added to each side of [Camera::viewport] when asked for.
    pub viewport_margin: T,
    pub moved: EventDelegate<()>,
    pub rotated: EventDelegate<()>,
    pub zoomed: EventDelegate<()>,
}

impl<T> Camera<T>
where
    T: Real,
{
    /// Camera centered on `(x, y)` for a `canvas_w` x `canvas_h` canvas showing at least a
    /// `target_w` x `target_h` world area.
    pub fn new(canvas_w: T, canvas_h: T, x: T, y: T, target_w: T, target_h: T) -> Self {
        let mut camera = Camera {
            camera_matrix: Matrix::from_translation(-x, -y),
            canvas_matrix: Matrix::identity(),
            canvas_w,
            canvas_h,
            target_w,
            target_h,
            w: target_w,
            h: target_h,
            viewport_margin: T::zero(),
            moved: EventDelegate::new(),
            rotated: EventDelegate::new(),
            zoomed: EventDelegate::new(),
        };
        camera.update_canvas_values();
        camera
    }

    #[inline]
    pub fn with_viewport_margin(mut self, margin: T) -> Self {
        self.viewport_margin = margin;
        self
    }

    fn update_canvas_values(&mut self) {
        let zoom = num_traits::real::Real::min(
            self.canvas_w / self.target_w,
            self.canvas_h / self.target_h,
        );
        self.w = self.canvas_w / zoom;
        self.h = self.canvas_h / zoom;
        self.canvas_matrix = Matrix::new(
            zoom,
            T::zero(),
            T::zero(),
            -zoom,
            self.canvas_w / T::two(),
            self.canvas_h / T::two(),
        );
        log::debug!(
            "camera canvas {}x{}, world viewport {}x{}",
            self.canvas_w,
            self.canvas_h,
            self.w,
            self.h
        );
        self.zoomed.dispatch(&());
    }

    /// Update for a new canvas size, dispatches `zoomed`.
    pub fn resize(&mut self, canvas_w: T, canvas_h: T) {
        self.canvas_w = canvas_w;
        self.canvas_h = canvas_h;
        self.update_canvas_values();
    }

    /// World to camera space transform.
    #[inline]
    pub fn matrix(&self) -> &Matrix<T> {
        &self.camera_matrix
    }

    /// World to canvas transform.
    #[inline]
    pub fn render_matrix(&self) -> Matrix<T> {
        self.camera_matrix.combined(&self.canvas_matrix)
    }

    /// Size of the visible world area (without margin).
    #[inline]
    pub fn viewport_size(&self) -> Vector2<T> {
        vec2(self.w, self.h)
    }

    #[inline]
    pub fn position(&self) -> Vector2<T> {
        vec2(-self.camera_matrix.e, -self.camera_matrix.f)
    }

    pub fn set_position(&mut self, position: Vector2<T>) {
        self.camera_matrix.e = -position.x;
        self.camera_matrix.f = -position.y;
        self.moved.dispatch(&());
    }

    /// Move the camera by `delta` world units.
    pub fn translate(&mut self, delta: Vector2<T>) {
        self.camera_matrix.pre_translate(-delta.x, -delta.y);
        self.moved.dispatch(&());
    }

    #[inline]
    pub fn rotation(&self) -> T {
        self.camera_matrix.rotation()
    }

    /// Rotate the view counter clockwise about the camera center.
    pub fn rotate(&mut self, angle: T) {
        self.camera_matrix.rotate(angle);
        self.rotated.dispatch(&());
    }

    pub fn set_rotation(&mut self, angle: T) {
        let delta = delta_angle(self.rotation(), angle);
        self.rotate(delta);
    }

    /// Current zoom factor relative to the canvas fit.
    #[inline]
    pub fn zoom_factor(&self) -> T {
        self.camera_matrix.scale_factors().x
    }

    /// Set the absolute zoom factor.
    pub fn set_zoom(&mut self, zoom: T) {
        let current = self.zoom_factor();
        self.camera_matrix.pre_scale(zoom / current);
        self.zoomed.dispatch(&());
    }

    /// Multiply the zoom factor by `zoom`.
    pub fn zoom(&mut self, zoom: T) {
        self.camera_matrix.pre_scale(zoom);
        self.zoomed.dispatch(&());
    }

    /// World position under the canvas pixel `point`.
    pub fn canvas_to_world(&self, point: Vector2<T>) -> Result<Vector2<T>> {
        let inverse = self
            .render_matrix()
            .inverse()
            .ok_or(GeometryError::SingularMatrix)?;
        Ok(inverse.transform_point(point))
    }

    #[inline]
    pub fn world_to_canvas(&self, point: Vector2<T>) -> Vector2<T> {
        self.render_matrix().transform_point(point)
    }

    /// Visible world area as a polygon, grown by `viewport_margin` on every side if `use_margin`.
    pub fn viewport(&self, use_margin: bool) -> Result<Polygon<T>> {
        let margin = if use_margin {
            self.viewport_margin
        } else {
            T::zero()
        };
        let hw = self.w / T::two() + margin;
        let hh = self.h / T::two() + margin;
        let inverse = self
            .camera_matrix
            .inverse()
            .ok_or(GeometryError::SingularMatrix)?;

        let mut viewport = Polygon::new(vec![
            vec2(-hw, hh),
            vec2(hw, hh),
            vec2(hw, -hh),
            vec2(-hw, -hh),
        ])?;
        viewport.apply_transform(&inverse)?;
        Ok(viewport)
    }
}
