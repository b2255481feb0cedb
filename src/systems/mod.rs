// src/systems/mod.rs

// 毎 tick 順番に呼ばれるシステムたちだよ！⚙️
// どの順番で呼ぶかは app::session のスケジュールが決める。
pub mod accel_control;
pub mod boundary;
pub mod box_collision;
pub mod collision_detection;
pub mod collision_resolver;
pub mod control;
pub mod cooldown;
pub mod dash;
pub mod gravity;
pub mod movement;
pub mod render_system;

pub use accel_control::AccelControlSystem;
pub use boundary::BoundarySystem;
pub use box_collision::{BoxCollisionSystem, ScoreBoard};
pub use collision_detection::CollisionDetectionSystem;
pub use collision_resolver::CollisionResolverSystem;
pub use control::ControlCharSystem;
pub use cooldown::CooldownSystem;
pub use dash::DashSystem;
pub use gravity::GravitySystem;
pub use movement::MovementSystem;
pub use render_system::RenderSystem;
