// src/systems/dash.rs

use log::debug;

use crate::components::{Dash, Position, Velocity};
use crate::config::DashTuning;
use crate::ecs::{EcsError, Frame, System, World};

// 浮動小数点の誤差で「あとほんの少しだけ残ってる」状態にならないための余裕
const EXPIRY_EPSILON: f32 = 1e-5;

/// ダッシュ中のエンティティを動かすシステムだよ！💨
///
/// 速さは開始速度から終了速度まで、ダッシュの経過割合で線形に変わる。
/// 残り時間がこの tick の dt 以下なら、残りの分だけ動かしてダッシュ終了。
/// `Dash` を外して、止まった `Velocity` を付け直すよ。
pub struct DashSystem {
    start_speed: f32,
    end_speed: f32,
}

impl DashSystem {
    pub fn new(start_speed: f32, end_speed: f32) -> Self {
        Self { start_speed, end_speed }
    }

    pub fn from_tuning(tuning: &DashTuning) -> Self {
        Self::new(tuning.start_speed, tuning.end_speed)
    }

    /// 経過時間 `elapsed` の時の速さ。
    pub fn speed_at(&self, dash: &Dash) -> f32 {
        let progress = if dash.duration > 0.0 {
            (dash.elapsed / dash.duration).clamp(0.0, 1.0)
        } else {
            1.0
        };
        self.start_speed + (self.end_speed - self.start_speed) * progress
    }
}

/// `dt` だけダッシュを進める。返り値は (実際に動く時間, 終わったか)。
/// 最後の tick は残り時間の分しか進まないので、`elapsed` もその分だけ増える。
fn advance(dash: &mut Dash, dt: f32) -> (f32, bool) {
    let finished = dash.remaining <= dt + EXPIRY_EPSILON;
    let step = if finished { dash.remaining } else { dt };
    dash.remaining -= step;
    dash.elapsed += step;
    (step, finished)
}

impl System for DashSystem {
    fn name(&self) -> &'static str {
        "DashSystem"
    }

    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError> {
        for entity in world.entities_with::<Dash>() {
            let Some(dash) = world.get_component_mut::<Dash>(entity) else {
                continue;
            };
            let (step, finished) = advance(dash, frame.dt);
            let dash = *dash;

            let displacement = dash.direction * (self.speed_at(&dash) * step);
            if let Some(position) = world.get_component_mut::<Position>(entity) {
                position.0 += displacement;
            }

            if finished {
                debug!("DashSystem: {:?} のダッシュ終了 (経過 {:.3}s)", entity, dash.elapsed);
                world.remove_component::<Dash>(entity);
                world.add_component(entity, Velocity::zero())?;
            }
        }
        Ok(())
    }
}
