// src/systems/box_collision.rs

use log::{info, warn};
use serde::Serialize;

use crate::components::{Cooldown, Dash, Extent, Invulnerable, Position, Score, Velocity};
use crate::config::{PlayerSetup, ResetTuning};
use crate::ecs::{EcsError, Entity, Frame, System, World};
use crate::geometry::sat;

/// 対戦モードの「当たったら得点」を判定するシステムだよ！🏆
///
/// 2人の箱が重なってて、どっちも無敵じゃなくて、少なくとも片方がダッシュ中なら:
///
/// - ダッシュしてる方に1点。両方ダッシュ中なら、ダッシュの経過時間が長い方に1点
///   (ぴったり同じなら誰も点をもらえない)
/// - 2人とも出現位置に戻して、速度・クールダウン・無敵時間をリセット
///
/// 衝突イベントは使わないで、World を直接書き換えるよ。
pub struct BoxCollisionSystem {
    players: [PlayerSetup; 2],
    reset: ResetTuning,
}

impl BoxCollisionSystem {
    pub fn new(player1: PlayerSetup, player2: PlayerSetup, reset: ResetTuning) -> Self {
        Self {
            players: [player1, player2],
            reset,
        }
    }

    fn reset_player(&self, world: &mut World, entity: Entity, setup: &PlayerSetup) -> Result<(), EcsError> {
        if world.remove_component::<Dash>(entity).is_some() {
            world.add_component(entity, Velocity::zero())?;
        }
        if let Some(position) = world.get_component_mut::<Position>(entity) {
            position.0 = setup.spawn;
        }
        if let Some(velocity) = world.get_component_mut::<Velocity>(entity) {
            *velocity = Velocity::zero();
        }
        if let Some(cooldown) = world.get_component_mut::<Cooldown>(entity) {
            *cooldown = Cooldown::new(self.reset.jump_cooldown, self.reset.dash_cooldown);
        }
        if let Some(score) = world.get_component_mut::<Score>(entity) {
            score.time_invulnerable = 0.0;
        }
        Ok(())
    }
}

/// 2人のダッシュ状態から、誰に点をあげるか。`None` なら誰もあげない。
fn point_winner(first: Option<&Dash>, second: Option<&Dash>) -> Option<usize> {
    match (first, second) {
        (Some(a), Some(b)) if a.elapsed > b.elapsed => Some(0),
        (Some(a), Some(b)) if b.elapsed > a.elapsed => Some(1),
        (Some(_), Some(_)) => None,
        (Some(_), None) => Some(0),
        (None, Some(_)) => Some(1),
        (None, None) => None,
    }
}

impl System for BoxCollisionSystem {
    fn name(&self) -> &'static str {
        "BoxCollisionSystem"
    }

    fn run(&mut self, world: &mut World, _frame: &Frame<'_>) -> Result<(), EcsError> {
        let (Some(p1), Some(p2)) = (
            world.get_by_tag(&self.players[0].tag),
            world.get_by_tag(&self.players[1].tag),
        ) else {
            return Ok(());
        };
        let entities = [p1, p2];

        let mut boxes = Vec::with_capacity(2);
        for entity in entities {
            match (world.get_component::<Position>(entity), world.get_component::<Extent>(entity)) {
                (Some(position), Some(extent)) => boxes.push(extent.at(position)),
                _ => {
                    warn!("BoxCollisionSystem: {:?} に Position か Extent がない", entity);
                    return Ok(());
                }
            }
        }
        if !sat::aabb_overlap(&boxes[0], &boxes[1]) {
            return Ok(());
        }
        if world.has_component::<Invulnerable>(p1) || world.has_component::<Invulnerable>(p2) {
            return Ok(());
        }

        let dash1 = world.get_component::<Dash>(p1).copied();
        let dash2 = world.get_component::<Dash>(p2).copied();
        if dash1.is_none() && dash2.is_none() {
            return Ok(());
        }

        match point_winner(dash1.as_ref(), dash2.as_ref()) {
            Some(index) => {
                if let Some(score) = world.get_component_mut::<Score>(entities[index]) {
                    score.points += 1;
                }
                info!("BoxCollisionSystem: '{}' に1点！", self.players[index].tag);
            }
            None => info!("BoxCollisionSystem: 同時ダッシュで引き分け、得点なし"),
        }

        for (entity, setup) in entities.into_iter().zip(self.players.iter()) {
            self.reset_player(world, entity, setup)?;
        }
        Ok(())
    }
}

/// 外の UI に見せるスコア表。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoreBoard {
    pub entries: Vec<ScoreEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub tag: String,
    pub points: u32,
    pub time_invulnerable: f32,
}

impl ScoreBoard {
    /// タグのエンティティの `Score` を集める。いないプレイヤーは飛ばすよ。
    pub fn collect<'a>(world: &World, tags: impl IntoIterator<Item = &'a str>) -> Self {
        let entries = tags
            .into_iter()
            .filter_map(|tag| {
                let entity = world.get_by_tag(tag)?;
                let score = world.get_component::<Score>(entity)?;
                Some(ScoreEntry {
                    tag: tag.to_string(),
                    points: score.points,
                    time_invulnerable: score.time_invulnerable,
                })
            })
            .collect();
        ScoreBoard { entries }
    }

    pub fn points_of(&self, tag: &str) -> Option<u32> {
        self.entries.iter().find(|entry| entry.tag == tag).map(|entry| entry.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components;
    use crate::geometry::Vector2;
    use crate::input::InputState;

    fn player(world: &mut World, setup: &PlayerSetup, x: f32) -> Entity {
        let e = world.create_entity();
        world.add_component(e, Position::new(x, 100.0)).unwrap();
        world.add_component(e, Extent::new(50.0, 50.0)).unwrap();
        world.add_component(e, Velocity::new(5.0, 5.0)).unwrap();
        world.add_component(e, Cooldown::new(0.0, 0.0)).unwrap();
        world.add_component(e, Score { points: 0, time_invulnerable: 2.0 }).unwrap();
        world.add_tag(e, setup.tag.clone()).unwrap();
        e
    }

    fn start_dash(world: &mut World, e: Entity, elapsed: f32) {
        let mut dash = Dash::new(0.4, Vector2::new(1.0, 0.0));
        dash.elapsed = elapsed;
        world.remove_component::<Velocity>(e);
        world.add_component(e, dash).unwrap();
    }

    fn arena() -> (World, Entity, Entity, BoxCollisionSystem) {
        let mut world = World::new();
        components::register_all(&mut world);
        let s1 = PlayerSetup::player1();
        let s2 = PlayerSetup::player2();
        let p1 = player(&mut world, &s1, 300.0);
        let p2 = player(&mut world, &s2, 320.0);
        let system = BoxCollisionSystem::new(s1, s2, ResetTuning::default());
        (world, p1, p2, system)
    }

    fn run(world: &mut World, system: &mut BoxCollisionSystem) {
        let input = InputState::default();
        system.run(world, &Frame::new(0.016, &input)).unwrap();
    }

    fn points(world: &World, e: Entity) -> u32 {
        world.get_component::<Score>(e).unwrap().points
    }

    #[test]
    fn dashing_player_scores_and_level_resets() {
        let (mut world, p1, p2, mut system) = arena();
        start_dash(&mut world, p1, 0.1);
        run(&mut world, &mut system);

        assert_eq!(points(&world, p1), 1);
        assert_eq!(points(&world, p2), 0);
        assert!(!world.has_component::<Dash>(p1));
        assert_eq!(world.get_component::<Velocity>(p1), Some(&Velocity::zero()));
        assert_eq!(world.get_component::<Velocity>(p2), Some(&Velocity::zero()));
        assert_eq!(world.get_component::<Position>(p1), Some(&Position::new(100.0, 100.0)));
        assert_eq!(world.get_component::<Position>(p2), Some(&Position::new(650.0, 100.0)));
        assert_eq!(world.get_component::<Cooldown>(p2), Some(&Cooldown::new(1.0, 1.0)));
        assert_eq!(world.get_component::<Score>(p2).unwrap().time_invulnerable, 0.0);
    }

    #[test]
    fn longer_dash_wins_the_tie_break() {
        let (mut world, p1, p2, mut system) = arena();
        start_dash(&mut world, p1, 0.1);
        start_dash(&mut world, p2, 0.2);
        run(&mut world, &mut system);
        assert_eq!(points(&world, p1), 0);
        assert_eq!(points(&world, p2), 1);
    }

    #[test]
    fn equal_dashes_score_nobody_but_still_reset() {
        let (mut world, p1, p2, mut system) = arena();
        start_dash(&mut world, p1, 0.2);
        start_dash(&mut world, p2, 0.2);
        run(&mut world, &mut system);
        assert_eq!(points(&world, p1), 0);
        assert_eq!(points(&world, p2), 0);
        assert_eq!(world.get_component::<Position>(p1), Some(&Position::new(100.0, 100.0)));
    }

    #[test]
    fn invulnerable_or_idle_players_do_nothing() {
        let (mut world, p1, p2, mut system) = arena();
        run(&mut world, &mut system);
        assert_eq!(world.get_component::<Position>(p1), Some(&Position::new(300.0, 100.0)));

        start_dash(&mut world, p1, 0.1);
        world.add_component(p2, Invulnerable).unwrap();
        run(&mut world, &mut system);
        assert_eq!(points(&world, p1), 0);
        assert!(world.has_component::<Dash>(p1));
    }

    #[test]
    fn scoreboard_collects_tagged_scores() {
        let (mut world, p1, _p2, mut system) = arena();
        start_dash(&mut world, p1, 0.1);
        run(&mut world, &mut system);

        let board = ScoreBoard::collect(&world, ["PLAYER1", "PLAYER2", "NOBODY"]);
        assert_eq!(board.entries.len(), 2);
        assert_eq!(board.points_of("PLAYER1"), Some(1));
        assert_eq!(board.points_of("PLAYER2"), Some(0));
    }
}
