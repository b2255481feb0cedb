// src/systems/movement.rs

use crate::components::{Position, Velocity};
use crate::ecs::{EcsError, Frame, System, World};

/// 速度を位置に足し込むシステムだよ！🏃 `position += velocity * dt`
///
/// `Velocity` を持ってても `Position` がないエンティティは何もしない。
pub struct MovementSystem;

impl MovementSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MovementSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl System for MovementSystem {
    fn name(&self) -> &'static str {
        "MovementSystem"
    }

    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError> {
        // 先に速度をコピーしておいてから、位置を書き換える
        let moves: Vec<_> = match world.components::<Velocity>() {
            Some(velocities) => velocities.iter().map(|(entity, velocity)| (*entity, velocity.0)).collect(),
            None => return Ok(()),
        };

        for (entity, velocity) in moves {
            if let Some(position) = world.get_component_mut::<Position>(entity) {
                position.0 += velocity * frame.dt;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components;
    use crate::input::InputState;

    #[test]
    fn integrates_velocity_by_dt() {
        let mut world = World::new();
        components::register_all(&mut world);
        let e = world.create_entity();
        world.add_component(e, Position::new(10.0, 10.0)).unwrap();
        world.add_component(e, Velocity::new(20.0, -40.0)).unwrap();
        let no_position = world.create_entity();
        world.add_component(no_position, Velocity::new(1.0, 1.0)).unwrap();

        let input = InputState::default();
        MovementSystem::new().run(&mut world, &Frame::new(0.5, &input)).unwrap();

        assert_eq!(world.get_component::<Position>(e), Some(&Position::new(20.0, -10.0)));
        assert!(world.get_component::<Position>(no_position).is_none());
    }
}
