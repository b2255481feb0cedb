// src/ecs/mod.rs
//! ECS (Entity-Component-System) core implementation.

pub mod component;
pub mod entity;
pub mod error;
pub mod system;
pub mod world;

// Re-export key types for easier use via `crate::ecs::X`
pub use component::{Component, ComponentKind};
pub use entity::{Entity, EntityAllocator};
pub use error::EcsError;
pub use system::{Frame, System};
pub use world::World;
