use super::{Entity, FlagFilter, QueryTarget};
use crate::{
    core::{
        math::{Matrix, Vector2},
        traits::Real,
    },
    error::{GeometryError, Result},
    shape::{Shape, ShapeOps},
};
use std::fmt;

/// Handle of an entity stored in a scene graph, allocated on insertion and never reused by the
/// same graph.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Storage and spatial queries over a set of entities.
///
/// Entities are kept in insertion order and every query returns ids in that order, so two
/// implementations holding the same entities return identical results. Entity parents are
/// looked up by id in the same graph.
pub trait SceneGraph<T = f64>
where
    T: Real,
{
    /// Take ownership of `entity` and return its new id.
    fn add_entity(&mut self, entity: Entity<T>) -> EntityId;

    /// Remove and return the entity, `None` if it is not stored here. Children keep their
    /// (now dangling) parent id.
    fn remove_entity(&mut self, id: EntityId) -> Option<Entity<T>>;

    fn clear(&mut self);

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entity(&self, id: EntityId) -> Option<&Entity<T>>;

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity<T>>;

    /// Ids of every stored entity in insertion order.
    fn entity_ids(&self) -> Vec<EntityId>;

    /// Local matrix of the entity composed with the matrices of all its ancestors.
    ///
    /// Composition is `local.combined(parent_world)`: the entity's own transform maps into the
    /// parent frame first, then the parent's world transform applies (not
    /// `parent_world.combined(local)`).
    ///
    /// A parent id that is not stored in the graph ends the chain. Fails with
    /// [GeometryError::UnknownEntity] if `id` itself is not stored and with
    /// [GeometryError::ParentCycle] if the parent chain loops.
    fn world_matrix(&self, id: EntityId) -> Result<Matrix<T>> {
        let entity = self.entity(id).ok_or(GeometryError::UnknownEntity(id))?;
        let mut world = *entity.matrix();
        let mut next = entity.parent();
        let mut depth = 0;
        while let Some(parent_id) = next {
            depth += 1;
            if depth > self.len() {
                return Err(GeometryError::ParentCycle(id));
            }

            match self.entity(parent_id) {
                Some(parent) => {
                    world.combine(parent.matrix());
                    next = parent.parent();
                }
                None => {
                    log::warn!("entity {id} has missing ancestor {parent_id}, chain ends there");
                    break;
                }
            }
        }

        Ok(world)
    }

    /// World space collidable of the entity.
    fn collidable(&self, id: EntityId) -> Result<Shape<T>> {
        let world = self.world_matrix(id)?;
        self.entity(id)
            .ok_or(GeometryError::UnknownEntity(id))?
            .collidable_with(&world)
    }

    /// Ids of all entities whose flags match `filter`.
    fn query(&self, filter: FlagFilter) -> Vec<EntityId>;

    /// Ids of matching entities whose collidable overlaps the target.
    fn query_intersect_with(
        &self,
        target: QueryTarget<'_, T>,
        filter: FlagFilter,
    ) -> Result<Vec<EntityId>>;

    /// Ids of matching entities whose collidable contains the center of the target.
    fn query_center_in(
        &self,
        target: QueryTarget<'_, T>,
        filter: FlagFilter,
    ) -> Result<Vec<EntityId>>;

    /// Ids of matching entities whose collidable lies completely inside the target.
    fn query_contained_in(
        &self,
        _target: QueryTarget<'_, T>,
        _filter: FlagFilter,
    ) -> Result<Vec<EntityId>> {
        Err(GeometryError::NotImplemented("query_contained_in"))
    }

    /// Ids of matching entities whose collidable lies completely outside the target.
    fn query_outside_of(
        &self,
        _target: QueryTarget<'_, T>,
        _filter: FlagFilter,
    ) -> Result<Vec<EntityId>> {
        Err(GeometryError::NotImplemented("query_outside_of"))
    }

    /// Sum of the MTVs that move the target out of each matching entity it overlaps.
    fn get_mtv(&self, target: QueryTarget<'_, T>, filter: FlagFilter) -> Result<Vector2<T>>;
}

/// Query shape in world space and the entity to leave out of the results.
pub(crate) fn resolve_target<T, G>(
    graph: &G,
    target: QueryTarget<'_, T>,
) -> Result<(Shape<T>, Option<EntityId>)>
where
    T: Real,
    G: SceneGraph<T> + ?Sized,
{
    match target {
        QueryTarget::Shape(shape) => Ok((shape.clone(), None)),
        QueryTarget::Entity(id) => Ok((graph.collidable(id)?, Some(id))),
    }
}

/// Insertion ordered entity storage shared by the scene graph implementations.
#[derive(Debug)]
pub(crate) struct EntityStore<T>
where
    T: Real,
{
    entries: Vec<(EntityId, Entity<T>)>,
    next_id: u64,
}

impl<T> EntityStore<T>
where
    T: Real,
{
    pub fn new() -> Self {
        EntityStore {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    pub fn add(&mut self, entity: Entity<T>) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, entity));
        id
    }

    fn position(&self, id: EntityId) -> Option<usize> {
        self.entries.iter().position(|(i, _)| *i == id)
    }

    pub fn remove(&mut self, id: EntityId) -> Option<Entity<T>> {
        let index = self.position(id)?;
        Some(self.entries.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity<T>> {
        self.entries
            .iter()
            .find(|(i, _)| *i == id)
            .map(|(_, entity)| entity)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity<T>> {
        self.entries
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, entity)| entity)
    }

    /// Entry at insertion position `index`.
    pub fn at(&self, index: usize) -> (EntityId, &Entity<T>) {
        let (id, entity) = &self.entries[index];
        (*id, entity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity<T>)> + '_ {
        self.entries.iter().map(|(id, entity)| (*id, entity))
    }

    pub fn ids(&self) -> Vec<EntityId> {
        self.entries.iter().map(|(id, _)| *id).collect()
    }

    /// Ids of entities whose flags match `filter`.
    pub fn query(&self, filter: FlagFilter) -> Vec<EntityId> {
        self.iter()
            .filter(|(_, entity)| filter.matches(entity.flags()))
            .map(|(id, _)| id)
            .collect()
    }
}

/// Entity at `id` may be tested against a query that excludes `exclude` and uses `filter`.
#[inline]
pub(crate) fn is_candidate<T>(
    id: EntityId,
    entity: &Entity<T>,
    exclude: Option<EntityId>,
    filter: FlagFilter,
) -> bool
where
    T: Real,
{
    Some(id) != exclude && filter.matches(entity.flags())
}

/// Adds `mtv` to the running total `sum`.
#[inline]
pub(crate) fn accumulate_mtv<T>(sum: &mut Vector2<T>, id: EntityId, mtv: Option<Vector2<T>>)
where
    T: Real,
{
    if let Some(mtv) = mtv {
        log::trace!("mtv {mtv} against entity {id}");
        *sum += mtv;
    }
}

/// Center of the query shape as a point shape.
#[inline]
pub(crate) fn center_of<T>(shape: &Shape<T>) -> Shape<T>
where
    T: Real,
{
    Shape::Vector(shape.center())
}
