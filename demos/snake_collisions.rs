//! Headless snake game loop: a head that steers toward food, a tail that follows and a
//! camera that tracks the head. Run with `RUST_LOG=debug` to see the scene graph rebuild its
//! broad phase index.

use impulse2d::{
    core::math::{vec2, Vector2},
    error::Result,
    scene::*,
    shape::{Circle, Rect, Shape},
};
use std::{cell::RefCell, rc::Rc};

const SEGMENT: u32 = 0b001;
const FOOD: u32 = 0b010;
const WALL: u32 = 0b100;

const SEGMENT_SIZE: f64 = 20.0;
const ARENA: f64 = 400.0;

fn main() -> Result<()> {
    env_logger::init();

    let mut sg = IndexedSG::new();
    let camera = Rc::new(RefCell::new(Camera::new(
        640.0, 480.0, 0.0, 0.0, ARENA, ARENA,
    )));

    add_walls(&mut sg);
    let head = sg.add_entity(segment(vec2(0.0, 0.0)));
    {
        let camera = camera.clone();
        let entity = sg.entity(head).expect("head was just added");
        entity
            .moved
            .add(move |delta: &Vector2| camera.borrow_mut().translate(*delta));
    }

    let mut tail: Vec<EntityId> = Vec::new();
    let foods = [vec2(100.0, 0.0), vec2(100.0, 120.0), vec2(-60.0, 120.0)];
    let mut food = sg.add_entity(food_at(foods[0]));
    let mut next_food = 1;

    for tick in 0..200 {
        let target = sg.entity(food).expect("food exists").position();
        let head_pos = step_head(&mut sg, head, target);
        log::trace!("tick {tick}: head left {head_pos}");
        follow(&mut sg, &tail, head_pos);

        let eaten = sg.query_intersect_with(head.into(), FlagFilter::any(FOOD))?;
        if !eaten.is_empty() {
            println!("tick {tick}: ate food at {target}");
            sg.remove_entity(food);
            let last = tail.last().copied().unwrap_or(head);
            let pos = sg.entity(last).expect("segment exists").position();
            tail.push(sg.add_entity(segment(pos)));

            if next_food == foods.len() {
                break;
            }
            food = sg.add_entity(food_at(foods[next_food]));
            next_food += 1;
        }

        let walls = sg.query_intersect_with(head.into(), FlagFilter::any(WALL))?;
        if !walls.is_empty() {
            let push = sg.get_mtv(head.into(), FlagFilter::any(WALL))?;
            log::warn!("tick {tick}: hit wall, pushed back by {push}");
            if let Some(e) = sg.entity_mut(head) {
                e.translate(push);
            }
        }
    }

    let camera = camera.borrow();
    let view: Shape = camera.viewport(true)?.into();
    let visible = sg.query_intersect_with((&view).into(), FlagFilter::any(SEGMENT))?;
    println!(
        "snake length {}, camera at {}, {} segments visible",
        tail.len() + 1,
        camera.position(),
        visible.len()
    );
    Ok(())
}

fn segment(position: Vector2) -> Entity {
    let half = SEGMENT_SIZE / 2.0;
    Entity::new(
        Rect::new(-half, half, SEGMENT_SIZE, SEGMENT_SIZE),
        position,
    )
    .with_flags(SEGMENT)
}

fn food_at(position: Vector2) -> Entity {
    Entity::new(Circle::new(0.0, 0.0, 4.0), position).with_flags(FOOD)
}

fn add_walls<G: SceneGraph>(sg: &mut G) {
    let half = ARENA / 2.0;
    let t = 10.0;
    let walls = [
        (Rect::new(-half, t / 2.0, ARENA, t), vec2(0.0, half)),
        (Rect::new(-half, t / 2.0, ARENA, t), vec2(0.0, -half)),
        (Rect::new(-t / 2.0, half, t, ARENA), vec2(half, 0.0)),
        (Rect::new(-t / 2.0, half, t, ARENA), vec2(-half, 0.0)),
    ];
    for (rect, position) in walls {
        sg.add_entity(Entity::new(rect, position).with_flags(WALL));
    }
}

/// Turn toward `target` in right angles and advance one segment, returns the old head position.
fn step_head<G: SceneGraph>(sg: &mut G, head: EntityId, target: Vector2) -> Vector2 {
    let e = sg.entity_mut(head).expect("head exists");
    let pos = e.position();
    let d = target - pos;
    let dir = if d.x.abs() >= d.y.abs() {
        vec2(d.x.signum(), 0.0)
    } else {
        vec2(0.0, d.y.signum())
    };
    e.face(pos + dir);
    e.move_forward(SEGMENT_SIZE);
    pos
}

/// Every tail segment moves to where the one in front of it was.
fn follow<G: SceneGraph>(sg: &mut G, tail: &[EntityId], head_pos: Vector2) {
    let mut next = head_pos;
    for &id in tail {
        if let Some(e) = sg.entity_mut(id) {
            let pos = e.position();
            e.set_position(next);
            next = pos;
        }
    }
}
