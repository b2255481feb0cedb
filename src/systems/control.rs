// src/systems/control.rs

use log::{debug, info};

use crate::components::{Cooldown, Dash, Extent, Invulnerable, Position, Render, Score, Velocity};
use crate::config::{ControlTuning, DashTuning, PlayerSetup};
use crate::ecs::{EcsError, Entity, Frame, System, World};
use crate::geometry::Vector2;
use crate::input::{InputState, KeyCode};

/// プレイヤーをキー入力で動かすシステムだよ！🎮
///
/// プレイヤーごとに (タグ、キー割り当て) を持ってて、毎 tick こんな順番で見る:
///
/// 1. ダブルタップのコンボ (上・右・左) → ダッシュ開始。`Velocity` を外して `Dash` を付ける
/// 2. 上キーが押されててジャンプのクールダウンが明けてたらジャンプ
/// 3. 左右キーで横移動 (床に立ってたらボーナス付き)
/// 4. 下キー「だけ」を押してたら無敵、それ以外なら無敵解除
///
/// `Velocity` を持ってない (= ダッシュ中の) プレイヤーは操作を受け付けないよ。
pub struct ControlCharSystem {
    players: Vec<PlayerSetup>,
    control: ControlTuning,
    dash: DashTuning,
    /// 床の y 座標
    floor_y: f32,
}

/// コンボ1つ分: どのキーを2回叩いたら、どっちの向きにダッシュするか。
struct DashCombo {
    key: KeyCode,
    interrupts: [KeyCode; 3],
    direction: Vector2,
}

impl ControlCharSystem {
    pub fn new(players: Vec<PlayerSetup>, control: ControlTuning, dash: DashTuning, floor_y: f32) -> Self {
        Self {
            players,
            control,
            dash,
            floor_y,
        }
    }

    fn combos(setup: &PlayerSetup) -> [DashCombo; 3] {
        [
            DashCombo {
                key: setup.up,
                interrupts: [setup.left, setup.down, setup.right],
                direction: Vector2::new(0.0, -1.0),
            },
            DashCombo {
                key: setup.right,
                interrupts: [setup.left, setup.down, setup.up],
                direction: Vector2::new(1.0, 0.0),
            },
            DashCombo {
                key: setup.left,
                interrupts: [setup.up, setup.down, setup.right],
                direction: Vector2::new(-1.0, 0.0),
            },
        ]
    }

    /// 成立したコンボのダッシュ方向。なければ `None`。
    fn detect_dash(&self, setup: &PlayerSetup, input: &InputState) -> Option<Vector2> {
        Self::combos(setup)
            .into_iter()
            .find(|combo| {
                input.double_tapped(
                    combo.key,
                    &combo.interrupts,
                    self.control.double_tap_gap_ms,
                    self.control.double_tap_max_age_ms,
                )
            })
            .map(|combo| combo.direction)
    }

    fn control_player(&self, world: &mut World, entity: Entity, setup: &PlayerSetup, frame: &Frame<'_>) -> Result<(), EcsError> {
        if !world.has_component::<Velocity>(entity) {
            return Ok(());
        }
        let Some(mut cooldown) = world.get_component::<Cooldown>(entity).copied() else {
            debug!("ControlCharSystem: {:?} に Cooldown がないので操作しない", entity);
            return Ok(());
        };
        let input = frame.input;

        // 1. ダッシュのコンボ
        let mut dashed = false;
        if cooldown.can_dash() {
            if let Some(direction) = self.detect_dash(setup, input) {
                info!("ControlCharSystem: '{}' がダッシュ！ 向き {:?}", setup.tag, direction);
                world.add_component(entity, Dash::new(self.dash.duration, direction))?;
                world.remove_component::<Velocity>(entity);
                cooldown.dash = self.control.dash_cooldown;
                dashed = true;
            }
        }

        // 2. ジャンプ
        if !dashed && input.is_held(setup.up) && cooldown.can_jump() {
            if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
                velocity.0.y = -self.control.jump_speed;
            }
            cooldown.jump = self.control.jump_cooldown;
        }
        world.add_component(entity, cooldown)?;

        // 3. 横移動
        let mut lateral = 0.0;
        if input.is_held(setup.right) {
            lateral += 1.0;
        }
        if input.is_held(setup.left) {
            lateral -= 1.0;
        }
        let on_ground = match (world.get_component::<Position>(entity), world.get_component::<Extent>(entity)) {
            (Some(position), Some(extent)) => position.0.y + extent.height >= self.floor_y,
            _ => false,
        };
        let speed = if on_ground {
            self.control.move_speed + self.control.ground_speed_bonus
        } else {
            self.control.move_speed
        };
        if lateral != 0.0 {
            if let Some(position) = world.get_component_mut::<Position>(entity) {
                position.0.x += lateral * speed * frame.dt;
            }
        }

        // 4. 無敵
        let defending = input.is_held(setup.down)
            && !input.is_held(setup.right)
            && !input.is_held(setup.left)
            && !input.is_held(setup.up)
            && !dashed;
        if defending {
            if let Some(score) = world.get_component_mut::<Score>(entity) {
                score.time_invulnerable += frame.dt;
            }
            if !world.has_component::<Invulnerable>(entity) {
                world.add_component(entity, Invulnerable)?;
                if let Some(render) = world.get_component_mut::<Render>(entity) {
                    render.alpha = self.control.invulnerable_alpha;
                }
            }
        } else if world.remove_component::<Invulnerable>(entity).is_some() {
            if let Some(render) = world.get_component_mut::<Render>(entity) {
                render.alpha = Render::OPAQUE;
            }
        }
        Ok(())
    }
}

impl System for ControlCharSystem {
    fn name(&self) -> &'static str {
        "ControlCharSystem"
    }

    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError> {
        for setup in &self.players {
            match world.get_by_tag(&setup.tag) {
                Some(entity) => self.control_player(world, entity, setup, frame)?,
                None => debug!("ControlCharSystem: タグ '{}' のプレイヤーがいない", setup.tag),
            }
        }
        Ok(())
    }
}
