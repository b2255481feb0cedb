// src/systems/gravity.rs

use itertools::Itertools;
use log::debug;

use crate::components::Velocity;
use crate::ecs::{EcsError, Frame, System, World};

/// グループに入ってるエンティティを下向きに加速させるシステムだよ！🍎
///
/// `Velocity` がないメンバー (ダッシュ中とか) は飛ばす。エラーじゃないよ。
pub struct GravitySystem {
    group: String,
    /// 重力加速度 (px/s^2)
    strength: f32,
}

impl GravitySystem {
    pub fn new(group: impl Into<String>, strength: f32) -> Self {
        Self {
            group: group.into(),
            strength,
        }
    }
}

impl System for GravitySystem {
    fn name(&self) -> &'static str {
        "GravitySystem"
    }

    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError> {
        let Some(members) = world.get_group(&self.group) else {
            debug!("GravitySystem: グループ '{}' がないのでスキップ", self.group);
            return Ok(());
        };
        // 同じエンティティが2回入ってても加速は1回だけ
        let bodies: Vec<_> = members.iter().copied().unique().collect();

        let delta = self.strength * frame.dt;
        for entity in bodies {
            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                velocity.0.y += delta;
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
    fn accelerates_group_members_with_velocity_only() {
        let mut world = World::new();
        components::register_all(&mut world);
        world.create_group("PLAYERS");

        let falling = world.create_entity();
        world.add_component(falling, Velocity::zero()).unwrap();
        world.add_to_group(falling, "PLAYERS").unwrap();
        world.add_to_group(falling, "PLAYERS").unwrap();

        let dashing = world.create_entity();
        world.add_to_group(dashing, "PLAYERS").unwrap();

        let outsider = world.create_entity();
        world.add_component(outsider, Velocity::zero()).unwrap();

        let input = InputState::default();
        GravitySystem::new("PLAYERS", 600.0).run(&mut world, &Frame::new(0.1, &input)).unwrap();

        let vy = world.get_component::<Velocity>(falling).unwrap().0.y;
        assert!((vy - 60.0).abs() < 1e-4, "got {}", vy);
        assert!(world.get_component::<Velocity>(dashing).is_none());
        assert_eq!(world.get_component::<Velocity>(outsider), Some(&Velocity::zero()));
    }

    #[test]
    fn missing_group_is_not_an_error() {
        let mut world = World::new();
        components::register_all(&mut world);
        let input = InputState::default();
        assert!(GravitySystem::new("NOPE", 600.0).run(&mut world, &Frame::new(0.1, &input)).is_ok());
    }
}
