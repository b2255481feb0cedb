// src/app/setup.rs
//! 最初のシーンを World に並べるところだよ！🏗️
//!
//! - 対戦 (duel): 2人のプレイヤーが箱どうしでぶつかり合うモード
//! - サンドボックス: 形 (ポリゴンと円) の当たり判定を試すモード

use log::info;

use crate::components::{self, Acceleration, Cooldown, Extent, Position, Render, Score, Shape, Velocity};
use crate::config::layout::SANDBOX_PLAYER_TAG;
use crate::config::{ArenaConfig, PlayerSetup};
use crate::ecs::{EcsError, Entity, World};
use crate::geometry::{Circle, Polygon, Vector2};

/// 対戦シーンで作ったプレイヤー。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelScene {
    pub player1: Entity,
    pub player2: Entity,
}

/// サンドボックスで作ったエンティティ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxScene {
    pub player: Entity,
    pub obstacles: Vec<Entity>,
}

fn spawn_player(world: &mut World, config: &ArenaConfig, setup: &PlayerSetup) -> Result<Entity, EcsError> {
    let entity = world.create_entity();
    world.add_component(entity, Position(setup.spawn))?;
    world.add_component(entity, Velocity::zero())?;
    world.add_component(entity, Extent::new(config.player_width, config.player_height))?;
    world.add_component(entity, Cooldown::new(0.0, 0.0))?;
    world.add_component(entity, Render::new(setup.image_id))?;
    world.add_component(entity, Score::default())?;
    world.add_tag(entity, setup.tag.clone())?;
    world.add_to_group(entity, &config.groups.players)?;
    Ok(entity)
}

/// 対戦シーンを作る。コンポーネントの登録もここでやるよ。
pub fn build_duel(world: &mut World, config: &ArenaConfig) -> Result<DuelScene, EcsError> {
    components::register_all(world);
    world.create_group(config.groups.players.clone());

    let player1 = spawn_player(world, config, &config.player1)?;
    let player2 = spawn_player(world, config, &config.player2)?;
    info!("Setup: 対戦シーン完成 ({:?} vs {:?})", player1, player2);
    Ok(DuelScene { player1, player2 })
}

fn spawn_obstacle(world: &mut World, group: &str, at: Vector2, shape: Shape, image_id: u32) -> Result<Entity, EcsError> {
    let entity = world.create_entity();
    world.add_component(entity, Position(at))?;
    world.add_component(entity, Render::new(image_id))?;
    world.add_component(entity, shape)?;
    world.add_to_group(entity, group)?;
    Ok(entity)
}

/// サンドボックスシーンを作る。
///
/// 矢印キーで動かせる四角 (タグ `PLAYER`) と、動かない四角・三角・円。
pub fn build_sandbox(world: &mut World, config: &ArenaConfig) -> Result<SandboxScene, EcsError> {
    components::register_all(world);
    let group = config.groups.collision_bodies.as_str();
    world.create_group(group);

    let square = || Polygon::rectangle(50.0, 50.0);

    let player = world.create_entity();
    world.add_component(player, Position::new(50.0, 50.0))?;
    world.add_component(player, Velocity::zero())?;
    world.add_component(player, Acceleration(config.sandbox_acceleration))?;
    world.add_component(player, Render::new(1))?;
    world.add_component(player, Shape::Poly(square()))?;
    world.add_to_group(player, group)?;
    world.add_tag(player, SANDBOX_PLAYER_TAG)?;

    let mut triangle = Polygon::default();
    triangle.add_vertex(25.0, 0.0);
    triangle.add_vertex(50.0, 50.0);
    triangle.add_vertex(0.0, 50.0);
    triangle.set_center(25.0, 25.0);

    let obstacles = vec![
        spawn_obstacle(world, group, Vector2::new(100.0, 100.0), Shape::Poly(square()), 1)?,
        spawn_obstacle(world, group, Vector2::new(200.0, 200.0), Shape::Poly(triangle), 2)?,
        spawn_obstacle(
            world,
            group,
            Vector2::new(300.0, 100.0),
            Shape::Circle(Circle::new(Vector2::new(25.0, 25.0), 25.0)),
            0,
        )?,
    ];
    info!("Setup: サンドボックス完成 (障害物 {} 個)", obstacles.len());
    Ok(SandboxScene { player, obstacles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::ComponentKind;

    #[test]
    fn duel_has_two_tagged_players_in_group() {
        let mut world = World::new();
        let config = ArenaConfig::default();
        let scene = build_duel(&mut world, &config).unwrap();

        assert_eq!(world.get_by_tag("PLAYER1"), Some(scene.player1));
        assert_eq!(world.get_by_tag("PLAYER2"), Some(scene.player2));
        assert_eq!(world.get_group("PLAYERS"), Some(&[scene.player1, scene.player2][..]));
        assert_eq!(world.get_component::<Position>(scene.player2), Some(&Position::new(650.0, 100.0)));

        let full_players = world.get_entities_with_components(&[
            ComponentKind::Position,
            ComponentKind::Velocity,
            ComponentKind::Rectangle,
            ComponentKind::Cooldown,
            ComponentKind::Score,
        ]);
        assert_eq!(full_players.len(), 2);
    }

    #[test]
    fn sandbox_puts_every_body_in_collision_group() {
        let mut world = World::new();
        let scene = build_sandbox(&mut world, &ArenaConfig::default()).unwrap();

        assert_eq!(world.get_by_tag("PLAYER"), Some(scene.player));
        assert_eq!(world.get_group("COLLISION_BODIES").map(<[Entity]>::len), Some(4));
        assert!(world.has_component::<Velocity>(scene.player));
        assert!(scene.obstacles.iter().all(|e| !world.has_component::<Velocity>(*e)));
    }
}
