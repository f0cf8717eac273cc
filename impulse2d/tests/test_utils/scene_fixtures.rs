use impulse2d::{
    core::math::vec2,
    polygon,
    scene::{Entity, EntityId, SceneGraph},
    shape::{Circle, Rect},
};

pub const FLAG_PLAYER: u32 = 0b0001;
pub const FLAG_WALL: u32 = 0b0010;
pub const FLAG_PICKUP: u32 = 0b0100;

/// Ids of the entities added by [populate], in insertion order.
#[derive(Debug, Copy, Clone)]
pub struct Populated {
    pub player: EntityId,
    pub wall: EntityId,
    pub pickup: EntityId,
    pub crate_: EntityId,
    pub far: EntityId,
}

/// Adds a small mixed scene:
///
/// - player: unit circle at (0, 0)
/// - wall: 10x2 rect centered at (0, -2)
/// - pickup: radius 0.5 circle at (1.2, 0)
/// - crate: triangle around (-1, 1), flagged wall and pickup
/// - far: rect far away at (100, 100)
pub fn populate<G>(sg: &mut G) -> Populated
where
    G: SceneGraph + ?Sized,
{
    let player = sg.add_entity(
        Entity::new(Circle::new(0.0, 0.0, 1.0), vec2(0.0, 0.0)).with_flags(FLAG_PLAYER),
    );
    let wall = sg.add_entity(
        Entity::new(Rect::new(-5.0, 1.0, 10.0, 2.0), vec2(0.0, -2.0)).with_flags(FLAG_WALL),
    );
    let pickup = sg.add_entity(
        Entity::new(Circle::new(0.0, 0.0, 0.5), vec2(1.2, 0.0)).with_flags(FLAG_PICKUP),
    );
    let triangle = polygon![(-1.0, -1.0), (1.0, -1.0), (0.0, 1.0)].unwrap();
    let crate_ = sg.add_entity(
        Entity::new(triangle, vec2(-1.0, 1.0)).with_flags(FLAG_WALL | FLAG_PICKUP),
    );
    let far = sg.add_entity(
        Entity::new(Rect::new(-1.0, 1.0, 2.0, 2.0), vec2(100.0, 100.0)).with_flags(FLAG_WALL),
    );

    Populated {
        player,
        wall,
        pickup,
        crate_,
        far,
    }
}
