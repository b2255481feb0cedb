// src/systems/boundary.rs

use itertools::Itertools;
use log::debug;

use crate::components::{Extent, Position};
use crate::config::ArenaSize;
use crate::ecs::{EcsError, Frame, System, World};

/// アリーナの端っこの処理だよ！🧱
///
/// - 床: 箱の下端が床を超えたら床の上に戻す
/// - 天井: y がマイナスになったら 0 に戻す
/// - 左右の壁: 完全に外に出たら反対側から出てくる (ループ)
///
/// 対象はグループのメンバーで、`Position` と `Extent` を両方持ってるものだけ。
pub struct BoundarySystem {
    group: String,
    arena: ArenaSize,
}

impl BoundarySystem {
    pub fn new(group: impl Into<String>, arena: ArenaSize) -> Self {
        Self {
            group: group.into(),
            arena,
        }
    }

    fn confine(&self, position: &mut Position, extent: &Extent) {
        let p = &mut position.0;
        if p.y + extent.height > self.arena.height {
            p.y = self.arena.height - extent.height;
        }
        if p.y < 0.0 {
            p.y = 0.0;
        }
        if p.x > self.arena.width {
            p.x = -extent.width;
        } else if p.x + extent.width < 0.0 {
            p.x = self.arena.width;
        }
    }
}

impl System for BoundarySystem {
    fn name(&self) -> &'static str {
        "BoundarySystem"
    }

    fn run(&mut self, world: &mut World, _frame: &Frame<'_>) -> Result<(), EcsError> {
        let Some(members) = world.get_group(&self.group) else {
            debug!("BoundarySystem: グループ '{}' がないのでスキップ", self.group);
            return Ok(());
        };
        let members: Vec<_> = members.iter().copied().unique().collect();

        for entity in members {
            let Some(extent) = world.get_component::<Extent>(entity).copied() else {
                continue;
            };
            if let Some(position) = world.get_component_mut::<Position>(entity) {
                self.confine(position, &extent);
            }
        }
        Ok(())
    }
}
