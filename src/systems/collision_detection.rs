// src/systems/collision_detection.rs

use itertools::Itertools;
use log::{debug, trace};

use crate::components::{CollisionEvent, Position, Shape, Velocity};
use crate::ecs::{EcsError, Entity, Frame, System, World};
use crate::geometry::{sat, Vector2};

/// グループの中の全ペアで当たり判定をして、衝突イベントを World のキューに積むシステムだよ！💥
///
/// 空間分割はしてないので、全部の組み合わせ (n(n-1)/2 ペア) を調べる。
/// 判定は形の種類の組み合わせで4通りに分かれるよ。
///
/// イベントは「動けるほう」(`Velocity` を持ってるほう) のために作る。
/// 両方動けるなら両方にイベントが出て、どっちも押し出しベクトルを丸ごと受け取る。
pub struct CollisionDetectionSystem {
    group: String,
}

impl CollisionDetectionSystem {
    pub fn new(group: impl Into<String>) -> Self {
        Self { group: group.into() }
    }
}

/// ワールド座標に置いた形どうしの押し出しベクトル (`a` から `b` へ向く向き)。
pub fn resolve_shapes(a: &Shape, b: &Shape) -> Option<Vector2> {
    match (a, b) {
        (Shape::Poly(pa), Shape::Poly(pb)) => sat::polygon_vs_polygon(pa, pb),
        (Shape::Poly(polygon), Shape::Circle(circle)) => sat::polygon_vs_circle(polygon, circle),
        // ポリゴン→円の結果をひっくり返せば、円→ポリゴンの向きになる
        (Shape::Circle(circle), Shape::Poly(polygon)) => sat::polygon_vs_circle(polygon, circle).map(|mtv| -mtv),
        (Shape::Circle(ca), Shape::Circle(cb)) => sat::circle_vs_circle(ca, cb),
    }
}

/// エンティティの形をワールド座標に置いたもの。
fn world_shape(world: &World, entity: Entity) -> Option<Shape> {
    let shape = world.get_component::<Shape>(entity)?;
    let offset = world.get_component::<Position>(entity).map_or(Vector2::ZERO, |p| p.0);
    Some(shape.translated(offset))
}

impl System for CollisionDetectionSystem {
    fn name(&self) -> &'static str {
        "CollisionDetectionSystem"
    }

    fn run(&mut self, world: &mut World, _frame: &Frame<'_>) -> Result<(), EcsError> {
        let Some(members) = world.get_group(&self.group) else {
            debug!("CollisionDetectionSystem: グループ '{}' がないのでスキップ", self.group);
            return Ok(());
        };
        let bodies: Vec<(Entity, Shape)> = members
            .iter()
            .copied()
            .unique()
            .filter_map(|entity| world_shape(world, entity).map(|shape| (entity, shape)))
            .collect();

        let mut events = Vec::new();
        for ((first, first_shape), (second, second_shape)) in bodies.iter().tuple_combinations() {
            let Some(mtv) = resolve_shapes(first_shape, second_shape) else {
                continue;
            };
            trace!(
                "CollisionDetectionSystem: {:?}({:?}) と {:?}({:?}) が衝突 mtv={:?}",
                first,
                first_shape.kind(),
                second,
                second_shape.kind(),
                mtv
            );
            if world.has_component::<Velocity>(*first) {
                events.push(CollisionEvent {
                    subject: *first,
                    other: *second,
                    vector: -mtv,
                });
            }
            if world.has_component::<Velocity>(*second) {
                events.push(CollisionEvent {
                    subject: *second,
                    other: *first,
                    vector: mtv,
                });
            }
        }

        for event in events {
            world.push_collision_event(event);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components;
    use crate::geometry::{Circle, Polygon};
    use crate::input::InputState;

    const GROUP: &str = "COLLISION_BODIES";

    fn body(world: &mut World, x: f32, y: f32, shape: Shape, moving: bool) -> Entity {
        let e = world.create_entity();
        world.add_component(e, Position::new(x, y)).unwrap();
        world.add_component(e, shape).unwrap();
        if moving {
            world.add_component(e, Velocity::zero()).unwrap();
        }
        world.add_to_group(e, GROUP).unwrap();
        e
    }

    fn new_world() -> World {
        let mut world = World::new();
        components::register_all(&mut world);
        world.create_group(GROUP);
        world
    }

    fn detect(world: &mut World) {
        let input = InputState::default();
        CollisionDetectionSystem::new(GROUP).run(world, &Frame::new(0.016, &input)).unwrap();
    }

    #[test]
    fn only_moving_side_gets_an_event() {
        let mut world = new_world();
        let mover = body(&mut world, 0.0, 0.0, Shape::Poly(Polygon::rectangle(50.0, 50.0)), true);
        let wall = body(&mut world, 40.0, 0.0, Shape::Poly(Polygon::rectangle(50.0, 50.0)), false);
        detect(&mut world);

        let events = world.pending_collision_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].subject, mover);
        assert_eq!(events[0].other, wall);
        // mover は左にいるので左に押し戻される
        assert!((events[0].vector.x + 10.0).abs() < 1e-4, "got {:?}", events[0].vector);
    }

    #[test]
    fn two_movers_get_opposite_events() {
        let mut world = new_world();
        let a = body(&mut world, 0.0, 0.0, Shape::Circle(Circle::new(Vector2::ZERO, 5.0)), true);
        let b = body(&mut world, 8.0, 0.0, Shape::Circle(Circle::new(Vector2::ZERO, 4.0)), true);
        detect(&mut world);

        let events = world.pending_collision_events();
        assert_eq!(events.len(), 2);
        let for_a = events.iter().find(|e| e.subject == a).unwrap();
        let for_b = events.iter().find(|e| e.subject == b).unwrap();
        assert!((for_a.vector.x + 1.0).abs() < 1e-4);
        assert!((for_b.vector.x - 1.0).abs() < 1e-4);
    }

    #[test]
    fn circle_and_polygon_dispatch_both_ways() {
        let square = Shape::Poly(Polygon::rectangle(2.0, 2.0).translated(Vector2::new(-1.0, -1.0)));
        let circle = Shape::Circle(Circle::new(Vector2::new(1.5, 0.0), 1.0));
        let poly_first = resolve_shapes(&square, &circle).unwrap();
        let circle_first = resolve_shapes(&circle, &square).unwrap();
        assert!((poly_first.x - 0.5).abs() < 1e-4);
        assert!((circle_first.x + 0.5).abs() < 1e-4);
    }

    #[test]
    fn separated_bodies_and_bodies_without_shape_are_skipped() {
        let mut world = new_world();
        body(&mut world, 0.0, 0.0, Shape::Poly(Polygon::rectangle(10.0, 10.0)), true);
        body(&mut world, 100.0, 0.0, Shape::Poly(Polygon::rectangle(10.0, 10.0)), true);
        let ghost = world.create_entity();
        world.add_component(ghost, Position::new(0.0, 0.0)).unwrap();
        world.add_to_group(ghost, GROUP).unwrap();

        detect(&mut world);
        assert!(world.pending_collision_events().is_empty());
    }
}
