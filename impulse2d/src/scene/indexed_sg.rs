use super::{
    graph::{accumulate_mtv, center_of, is_candidate, resolve_target, EntityStore},
    Entity, EntityId, FlagFilter, QueryTarget, SceneGraph,
};
use crate::{
    core::{math::Vector2, traits::Real},
    error::{GeometryError, Result},
    intersect::{shape_vs_shape, shape_vs_shape_sat},
    shape::{Shape, ShapeOps},
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder, AABB};
use std::cell::RefCell;

/// World space collidables of every stored entity (in insertion order) and the spatial index of
/// their bounding boxes.
struct BroadPhase<T>
where
    T: Real,
{
    collidables: Vec<Shape<T>>,
    index: StaticAABB2DIndex<T>,
}

impl<T> BroadPhase<T>
where
    T: Real,
{
    fn build<G>(graph: &G, store: &EntityStore<T>) -> Result<Self>
    where
        G: SceneGraph<T>,
    {
        let mut collidables = Vec::with_capacity(store.len());
        let mut builder = StaticAABB2DIndexBuilder::new(store.len());
        for (id, _) in store.iter() {
            let shape = graph.collidable(id)?;
            let bb = shape.bounding_box();
            builder.add(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
            collidables.push(shape);
        }

        let index = builder
            .build()
            .map_err(|e| GeometryError::SpatialIndex(e.to_string()))?;
        log::debug!("rebuilt broad phase index over {} entities", collidables.len());
        Ok(BroadPhase { collidables, index })
    }

    /// Insertion positions of entities whose bounding box overlaps `bb`, in insertion order.
    fn candidates(&self, bb: &AABB<T>) -> Vec<usize> {
        let mut result = self.index.query(bb.min_x, bb.min_y, bb.max_x, bb.max_y);
        result.sort_unstable();
        result
    }
}

/// Scene graph with a bounding box broad phase.
///
/// Entity collidables and their bounding boxes are indexed with a [StaticAABB2DIndex] that is
/// rebuilt lazily on the first query after any mutable access. Queries then only run the exact
/// intersection test against entities whose bounding box overlaps the query shape's. Results
/// are identical to [LinearSG](super::LinearSG).
pub struct IndexedSG<T = f64>
where
    T: Real,
{
    store: EntityStore<T>,
    broad_phase: RefCell<Option<BroadPhase<T>>>,
}

impl<T> IndexedSG<T>
where
    T: Real,
{
    pub fn new() -> Self {
        IndexedSG {
            store: EntityStore::new(),
            broad_phase: RefCell::new(None),
        }
    }

    #[inline]
    fn invalidate(&mut self) {
        *self.broad_phase.get_mut() = None;
    }

    fn with_broad_phase<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&BroadPhase<T>) -> R,
    {
        let cached = self.broad_phase.borrow_mut().take();
        let broad_phase = match cached {
            Some(bp) => bp,
            None => BroadPhase::build(self, &self.store)?,
        };

        let result = f(&broad_phase);
        *self.broad_phase.borrow_mut() = Some(broad_phase);
        Ok(result)
    }

    /// Ids of candidate entities overlapping `bb` whose world collidable satisfies `test`.
    fn scan<F>(
        &self,
        bb: &AABB<T>,
        exclude: Option<EntityId>,
        filter: FlagFilter,
        mut test: F,
    ) -> Result<Vec<EntityId>>
    where
        F: FnMut(&Shape<T>) -> bool,
    {
        self.with_broad_phase(|bp| {
            bp.candidates(bb)
                .into_iter()
                .filter_map(|i| {
                    let (id, entity) = self.store.at(i);
                    (is_candidate(id, entity, exclude, filter) && test(&bp.collidables[i]))
                        .then_some(id)
                })
                .collect()
        })
    }
}

impl<T> Default for IndexedSG<T>
where
    T: Real,
{
    fn default() -> Self {
        IndexedSG::new()
    }
}

impl<T> SceneGraph<T> for IndexedSG<T>
where
    T: Real,
{
    fn add_entity(&mut self, entity: Entity<T>) -> EntityId {
        self.invalidate();
        self.store.add(entity)
    }

    fn remove_entity(&mut self, id: EntityId) -> Option<Entity<T>> {
        self.invalidate();
        self.store.remove(id)
    }

    fn clear(&mut self) {
        self.invalidate();
        self.store.clear();
    }

    fn len(&self) -> usize {
        self.store.len()
    }

    fn entity(&self, id: EntityId) -> Option<&Entity<T>> {
        self.store.get(id)
    }

    fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity<T>> {
        self.invalidate();
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
        self.scan(&shape.bounding_box(), exclude, filter, |other| {
            shape_vs_shape(&shape, other)
        })
    }

    fn query_center_in(
        &self,
        target: QueryTarget<'_, T>,
        filter: FlagFilter,
    ) -> Result<Vec<EntityId>> {
        let (shape, exclude) = resolve_target(self, target)?;
        let center = center_of(&shape);
        self.scan(&center.bounding_box(), exclude, filter, |other| {
            shape_vs_shape(&center, other)
        })
    }

    fn get_mtv(&self, target: QueryTarget<'_, T>, filter: FlagFilter) -> Result<Vector2<T>> {
        let (shape, exclude) = resolve_target(self, target)?;
        self.with_broad_phase(|bp| {
            let mut sum = Vector2::zero();
            for i in bp.candidates(&shape.bounding_box()) {
                let (id, entity) = self.store.at(i);
                if is_candidate(id, entity, exclude, filter) {
                    accumulate_mtv(&mut sum, id, shape_vs_shape_sat(&shape, &bp.collidables[i]));
                }
            }
            sum
        })
    }
}

impl<T> std::fmt::Debug for IndexedSG<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedSG")
            .field("store", &self.store)
            .field("indexed", &self.broad_phase.borrow().is_some())
            .finish()
    }
}
