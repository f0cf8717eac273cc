use super::EntityId;
use crate::{
    core::{
        event::EventDelegate,
        math::{delta_angle, Matrix, Vector2},
        traits::Real,
    },
    error::Result,
    shape::{Shape, ShapeOps},
};

/// Something placed in a scene: a collidable shape template moved around by a local transform.
///
/// The template is kept in entity space; [Entity::collidable_with] produces the world space
/// shape. Movement dispatches `moved` with the translation delta and rotation dispatches
/// `rotated` with the angle delta (radians).
#[derive(Debug)]
pub struct Entity<T = f64>
where
    T: Real,
{
    collidable: Shape<T>,
    matrix: Matrix<T>,
    scale: T,
    flags: u32,
    parent: Option<EntityId>,
    pub moved: EventDelegate<Vector2<T>>,
    pub rotated: EventDelegate<T>,
}

impl<T> Entity<T>
where
    T: Real,
{
    /// Create an entity at `position` with no flags and no parent.
    pub fn new(collidable: impl Into<Shape<T>>, position: Vector2<T>) -> Self {
        Entity {
            collidable: collidable.into(),
            matrix: Matrix::from_translation(position.x, position.y),
            scale: T::one(),
            flags: 0,
            parent: None,
            moved: EventDelegate::new(),
            rotated: EventDelegate::new(),
        }
    }

    #[inline]
    pub fn with_flags(mut self, flags: u32) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub fn with_parent(mut self, parent: EntityId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The untransformed collidable shape.
    #[inline]
    pub fn collidable_template(&self) -> &Shape<T> {
        &self.collidable
    }

    #[inline]
    pub fn set_collidable(&mut self, collidable: impl Into<Shape<T>>) {
        self.collidable = collidable.into();
    }

    /// Copy of the template transformed by `world`, normally the matrix returned by
    /// [SceneGraph::world_matrix](super::SceneGraph::world_matrix).
    pub fn collidable_with(&self, world: &Matrix<T>) -> Result<Shape<T>> {
        let mut shape = self.collidable.clone();
        shape.apply_transform(world)?;
        Ok(shape)
    }

    /// Local transform relative to the parent.
    #[inline]
    pub fn matrix(&self) -> &Matrix<T> {
        &self.matrix
    }

    #[inline]
    pub fn flags(&self) -> u32 {
        self.flags
    }

    #[inline]
    pub fn set_flags(&mut self, flags: u32) {
        self.flags = flags;
    }

    #[inline]
    pub fn parent(&self) -> Option<EntityId> {
        self.parent
    }

    #[inline]
    pub fn set_parent(&mut self, parent: Option<EntityId>) {
        self.parent = parent;
    }

    #[inline]
    pub fn position(&self) -> Vector2<T> {
        self.matrix.translation()
    }

    #[inline]
    pub fn rotation(&self) -> T {
        self.matrix.rotation()
    }

    #[inline]
    pub fn scale(&self) -> T {
        self.scale
    }

    pub fn set_position(&mut self, position: Vector2<T>) {
        let delta = position - self.position();
        self.translate(delta);
    }

    /// Move by `delta` in parent space.
    pub fn translate(&mut self, delta: Vector2<T>) {
        self.matrix.pre_translate(delta.x, delta.y);
        self.moved.dispatch(&delta);
    }

    /// Move by `delta` given in the entity's own rotated frame, ignoring its scale.
    pub fn translate_local(&mut self, delta: Vector2<T>) {
        let m = &self.matrix;
        let s = self.scale;
        let world_delta = Vector2::new(
            (m.a * delta.x + m.c * delta.y) / s,
            (m.b * delta.x + m.d * delta.y) / s,
        );
        self.translate(world_delta);
    }

    /// Move `distance` along the facing direction (the rotated +x axis).
    pub fn move_forward(&mut self, distance: T) {
        let s = self.scale;
        let dir = Vector2::new(self.matrix.a / s, self.matrix.b / s);
        self.translate(dir.scale(distance));
    }

    /// Move `distance` to the right of the facing direction.
    pub fn strafe_right(&mut self, distance: T) {
        let s = self.scale;
        let right = Vector2::new(self.matrix.b / s, -self.matrix.a / s);
        self.translate(right.scale(distance));
    }

    /// Rotate counter clockwise by `angle` radians about the entity origin.
    pub fn rotate(&mut self, angle: T) {
        self.matrix.pre_rotate(angle);
        self.rotated.dispatch(&angle);
    }

    pub fn set_rotation(&mut self, angle: T) {
        let delta = delta_angle(self.rotation(), angle);
        self.rotate(delta);
    }

    /// Rotate so the facing direction points at `target`.
    pub fn face(&mut self, target: Vector2<T>) {
        if target == self.position() {
            return;
        }

        let angle = self.position().angle_to(target);
        self.set_rotation(angle);
    }

    /// Set the uniform scale of the local transform, no event is dispatched.
    pub fn set_scale(&mut self, scale: T) {
        self.matrix.pre_scale(scale / self.scale);
        self.scale = scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{math::vec2, traits::FuzzyEq},
        shape::Rect,
    };
    use std::{cell::RefCell, f64::consts::PI, rc::Rc};

    fn entity() -> Entity {
        Entity::new(Rect::new(-1.0, 1.0, 2.0, 2.0), vec2(0.0, 0.0))
    }

    #[test]
    fn moved_reports_delta() {
        let mut e = entity();
        let deltas = Rc::new(RefCell::new(Vec::new()));
        let d = deltas.clone();
        e.moved.add(move |delta| d.borrow_mut().push(*delta));

        e.set_position(vec2(3.0, 4.0));
        e.translate(vec2(-1.0, 0.0));
        assert_eq!(*deltas.borrow(), vec![vec2(3.0, 4.0), vec2(-1.0, 0.0)]);
        assert_eq!(e.position(), vec2(2.0, 4.0));
    }

    #[test]
    fn forward_and_strafe() {
        let mut e = entity();
        e.rotate(PI / 2.0);
        e.move_forward(2.0);
        assert_fuzzy_eq!(e.position(), vec2(0.0, 2.0));
        e.strafe_right(1.0);
        assert_fuzzy_eq!(e.position(), vec2(1.0, 2.0));
    }

    #[test]
    fn scale_does_not_change_step_length() {
        let mut e = entity();
        e.set_scale(3.0);
        e.move_forward(1.0);
        assert_fuzzy_eq!(e.position(), vec2(1.0, 0.0));
        e.translate_local(vec2(0.0, 1.0));
        assert_fuzzy_eq!(e.position(), vec2(1.0, 1.0));
        assert_fuzzy_eq!(e.matrix().scale_factors(), vec2(3.0, 3.0));
    }

    #[test]
    fn face_and_set_rotation() {
        let mut e = entity();
        let angles = Rc::new(RefCell::new(Vec::new()));
        let a = angles.clone();
        e.rotated.add(move |angle| a.borrow_mut().push(*angle));

        e.face(vec2(0.0, -5.0));
        assert_fuzzy_eq!(e.rotation(), -PI / 2.0);
        e.set_rotation(PI / 4.0);
        assert_fuzzy_eq!(e.rotation(), PI / 4.0);

        let angles = angles.borrow();
        assert_eq!(angles.len(), 2);
        assert_fuzzy_eq!(angles[0], -PI / 2.0);
        assert_fuzzy_eq!(angles[1], 3.0 * PI / 4.0);
    }
}
