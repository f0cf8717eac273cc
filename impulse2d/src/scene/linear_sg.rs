use super::{
    graph::{accumulate_mtv, center_of, is_candidate, resolve_target, EntityStore},
    Entity, EntityId, FlagFilter, QueryTarget, SceneGraph,
};
use crate::{
    core::{math::Vector2, traits::Real},
    error::Result,
    intersect::{shape_vs_shape, shape_vs_shape_sat},
    shape::Shape,
};

/// Scene graph that tests every stored entity on each query.
///
/// # Examples
///
/// ```
/// # use impulse2d::scene::*;
/// # use impulse2d::shape::*;
/// # use impulse2d::core::math::*;
/// let mut sg = LinearSG::new();
/// let a = sg.add_entity(Entity::new(Circle::new(0.0, 0.0, 1.0), vec2(0.0, 0.0)));
/// let b = sg.add_entity(Entity::new(Circle::new(0.0, 0.0, 1.0), vec2(1.5, 0.0)).with_flags(0b1));
/// assert_eq!(sg.query_intersect_with(a.into(), FlagFilter::default()).unwrap(), vec![b]);
/// assert_eq!(sg.query(FlagFilter::any(0b1)), vec![b]);
/// ```
#[derive(Debug)]
pub struct LinearSG<T = f64>
where
    T: Real,
{
    store: EntityStore<T>,
}

impl<T> LinearSG<T>
where
    T: Real,
{
    pub fn new() -> Self {
        LinearSG {
            store: EntityStore::new(),
        }
    }

    /// Ids of candidate entities whose world collidable satisfies `test`.
    fn scan<F>(
        &self,
        exclude: Option<EntityId>,
        filter: FlagFilter,
        mut test: F,
    ) -> Result<Vec<EntityId>>
    where
        F: FnMut(&Shape<T>) -> bool,
    {
        let mut result = Vec::new();
        for (id, entity) in self.store.iter() {
            if !is_candidate(id, entity, exclude, filter) {
                continue;
            }

            if test(&self.collidable(id)?) {
                result.push(id);
            }
        }

        Ok(result)
    }
}

impl<T> Default for LinearSG<T>
where
    T: Real,
{
    fn default() -> Self {
        LinearSG::new()
    }
}

impl<T> SceneGraph<T> for LinearSG<T>
where
    T: Real,
{
    fn add_entity(&mut self, entity: Entity<T>) -> EntityId {
        self.store.add(entity)
    }

    fn remove_entity(&mut self, id: EntityId) -> Option<Entity<T>> {
        self.store.remove(id)
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity<T>> {
        self.store.get(id)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity<T>> {
        self.store.get_mut(id)
    }

    fn entity_ids(&self) -> Vec<EntityId> {
        self.store.ids()
    }

    fn query(&self, filter: FlagFilter) -> Vec<EntityId> {
        self.store.query(filter)
    }

    fn query_intersect_with(
        &self,
        target: QueryTarget<'_, T>,
        filter: FlagFilter,
    ) -> Result<Vec<EntityId>> {
        let (shape, exclude) = resolve_target(self, target)?;
        self.scan(exclude, filter, |other| shape_vs_shape(&shape, other))
    }

    fn query_center_in(
        &self,
        target: QueryTarget<'_, T>,
        filter: FlagFilter,
    ) -> Result<Vec<EntityId>> {
        let (shape, exclude) = resolve_target(self, target)?;
        let center = center_of(&shape);
        self.scan(exclude, filter, |other| shape_vs_shape(&center, other))
    }

    fn get_mtv(&self, target: QueryTarget<'_, T>, filter: FlagFilter) -> Result<Vector2<T>> {
        let (shape, exclude) = resolve_target(self, target)?;
        let mut sum = Vector2::zero();
        for (id, entity) in self.store.iter() {
            if is_candidate(id, entity, exclude, filter) {
                let other = self.collidable(id)?;
                accumulate_mtv(&mut sum, id, shape_vs_shape_sat(&shape, &other));
            }
        }

        Ok(sum)
    }
}
