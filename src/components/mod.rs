// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
// コンポーネントはデータだけ。ロジックは systems の方に書くのがルール！🧹✨
pub mod collision;
pub mod cooldown;
pub mod dash;
pub mod extent;
pub mod motion;
pub mod position;
pub mod render;
pub mod shape;
pub mod status;

pub use collision::CollisionEvent;
pub use cooldown::Cooldown;
pub use dash::Dash;
pub use extent::Extent;
pub use motion::{Acceleration, Velocity};
pub use position::Position;
pub use render::Render;
pub use shape::{Shape, ShapeKind};
pub use status::{Invulnerable, Score};

use crate::ecs::World;

/// ゲームで使うコンポーネントを全部 World に登録するよ。初期化の時に一回呼べばOK！
pub fn register_all(world: &mut World) {
    world.register_component::<Position>();
    world.register_component::<Velocity>();
    world.register_component::<Acceleration>();
    world.register_component::<Render>();
    world.register_component::<Extent>();
    world.register_component::<Shape>();
    world.register_component::<Cooldown>();
    world.register_component::<Dash>();
    world.register_component::<Invulnerable>();
    world.register_component::<Score>();
}
