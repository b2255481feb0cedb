// src/systems/accel_control.rs

use log::debug;

use crate::components::{Acceleration, Velocity};
use crate::ecs::{EcsError, Frame, System, World};
use crate::geometry::Vector2;
use crate::input::KeyCode;

/// サンドボックス用の操作システム。矢印キーで速度を直接決めるだけのシンプル版！🕹️
///
/// タグのエンティティの `Velocity` を「押されてる方向 × `Acceleration`」で上書きする。
/// 何も押してなければ止まるよ。
pub struct AccelControlSystem {
    tag: String,
}

impl AccelControlSystem {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl System for AccelControlSystem {
    fn name(&self) -> &'static str {
        "AccelControlSystem"
    }

    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError> {
        let Some(entity) = world.get_by_tag(&self.tag) else {
            debug!("AccelControlSystem: タグ '{}' がいない", self.tag);
            return Ok(());
        };
        let Some(Acceleration(speed)) = world.get_component::<Acceleration>(entity).copied() else {
            return Ok(());
        };

        let input = frame.input;
        let mut direction = Vector2::ZERO;
        if input.is_held(KeyCode::Up) {
            direction.y -= 1.0;
        }
        if input.is_held(KeyCode::Down) {
            direction.y += 1.0;
        }
        if input.is_held(KeyCode::Left) {
            direction.x -= 1.0;
        }
        if input.is_held(KeyCode::Right) {
            direction.x += 1.0;
        }

        if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
            velocity.0 = direction * speed;
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
    fn arrows_set_velocity_scaled_by_acceleration() {
        let mut world = World::new();
        components::register_all(&mut world);
        let player = world.create_entity();
        world.add_component(player, Velocity::zero()).unwrap();
        world.add_component(player, Acceleration(60.0)).unwrap();
        world.add_tag(player, "PLAYER").unwrap();

        let mut input = InputState::default();
        input.press(KeyCode::Right, 0.0);
        input.press(KeyCode::Up, 0.0);
        let mut system = AccelControlSystem::new("PLAYER");
        system.run(&mut world, &Frame::new(0.1, &input)).unwrap();
        assert_eq!(world.get_component::<Velocity>(player), Some(&Velocity::new(60.0, -60.0)));

        input.release(KeyCode::Right);
        input.release(KeyCode::Up);
        system.run(&mut world, &Frame::new(0.1, &input)).unwrap();
        assert_eq!(world.get_component::<Velocity>(player), Some(&Velocity::zero()));
    }
}
