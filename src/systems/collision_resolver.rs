// src/systems/collision_resolver.rs

use log::trace;

use crate::components::Position;
use crate::ecs::{EcsError, Frame, System, World};

/// キューに積まれた衝突イベントを全部使い切るシステムだよ！🧹
///
/// 各イベントの押し出しベクトルを subject の位置に足すだけ。
/// 終わったらキューは空っぽ。次の tick にイベントが残ることはないよ。
pub struct CollisionResolverSystem;

impl CollisionResolverSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CollisionResolverSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for CollisionResolverSystem {
    fn name(&self) -> &'static str {
        "CollisionResolverSystem"
    }

    fn run(&mut self, world: &mut World, _frame: &Frame<'_>) -> Result<(), EcsError> {
        for event in world.drain_collision_events() {
            match world.get_component_mut::<Position>(event.subject) {
                Some(position) => position.0 += event.vector,
                None => trace!("CollisionResolverSystem: {:?} はもう位置を持ってない", event.subject),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{self, CollisionEvent};
    use crate::geometry::Vector2;
    use crate::input::InputState;

    #[test]
    fn applies_every_event_and_leaves_none() {
        let mut world = World::new();
        components::register_all(&mut world);
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Position::new(0.0, 0.0)).unwrap();
        world.add_component(b, Position::new(10.0, 0.0)).unwrap();

        world.push_collision_event(CollisionEvent { subject: a, other: b, vector: Vector2::new(-1.0, 0.0) });
        world.push_collision_event(CollisionEvent { subject: b, other: a, vector: Vector2::new(1.0, 0.0) });
        world.push_collision_event(CollisionEvent { subject: a, other: b, vector: Vector2::new(0.0, -2.0) });
        let entities_before = world.entity_count();

        let input = InputState::default();
        CollisionResolverSystem::new().run(&mut world, &Frame::new(0.016, &input)).unwrap();

        assert_eq!(world.get_component::<Position>(a), Some(&Position::new(-1.0, -2.0)));
        assert_eq!(world.get_component::<Position>(b), Some(&Position::new(11.0, 0.0)));
        assert!(world.pending_collision_events().is_empty());
        assert_eq!(world.entity_count(), entities_before);
    }
}
