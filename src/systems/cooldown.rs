// src/systems/cooldown.rs

use crate::components::Cooldown;
use crate::ecs::{EcsError, Frame, System, World};

/// クールダウンを dt ずつ減らすシステム。⏳
/// まだプラスの時だけ減らして、0 で止める (マイナスにどんどん沈んでいかないように)。
pub struct CooldownSystem;

impl CooldownSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CooldownSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn tick_down(timer: &mut f32, dt: f32) {
    if *timer > 0.0 {
        *timer = (*timer - dt).max(0.0);
    }
}

impl System for CooldownSystem {
    fn name(&self) -> &'static str {
        "CooldownSystem"
    }

    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError> {
        if let Some(cooldowns) = world.components_mut::<Cooldown>() {
            for cooldown in cooldowns.values_mut() {
                tick_down(&mut cooldown.jump, frame.dt);
                tick_down(&mut cooldown.dash, frame.dt);
            }
        }
        Ok(())
    }
}
