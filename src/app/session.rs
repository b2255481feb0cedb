// src/app/session.rs
//! ゲーム1回分をまるごと持つ `ArenaSession` だよ！🎮
//!
//! World と入力と時計と、システムを呼ぶ順番 (スケジュール) を持ってて、
//! `tick` されるたびにスケジュールを頭から順に1回ずつ走らせる。
//! wasm の外 (普通の `cargo test`) でも動くように、JS のものは一切触らないよ。

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info};
use thiserror::Error;

use crate::app::engine::Engine;
use crate::app::setup;
use crate::config::{ArenaConfig, ConfigError};
use crate::ecs::{EcsError, Frame, System, World};
use crate::input::{InputState, KeyCode};
use crate::render::{DrawCommand, DrawList};
use crate::systems::{
    AccelControlSystem, BoundarySystem, BoxCollisionSystem, CollisionDetectionSystem, CollisionResolverSystem,
    ControlCharSystem, CooldownSystem, DashSystem, GravitySystem, MovementSystem, RenderSystem, ScoreBoard,
};

#[derive(Debug, Error)]
pub enum ArenaError {
    #[error(transparent)]
    Ecs(#[from] EcsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// どっちのシーンで遊んでるか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneMode {
    Duel,
    Sandbox,
}

pub struct ArenaSession {
    world: World,
    input: InputState,
    engine: Engine,
    schedule: Vec<Box<dyn System>>,
    draw_list: Rc<RefCell<DrawList>>,
    config: ArenaConfig,
    mode: SceneMode,
}

impl ArenaSession {
    /// 対戦モード。スケジュールは
    /// クールダウン → 操作 → 重力 → ダッシュ → 移動 → 壁と床 → 得点判定 → 描画 の順。
    pub fn duel(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut world = World::new();
        setup::build_duel(&mut world, &config)?;
        let draw_list = Rc::new(RefCell::new(DrawList::new()));

        let schedule: Vec<Box<dyn System>> = vec![
            Box::new(CooldownSystem::new()),
            Box::new(ControlCharSystem::new(
                vec![config.player1.clone(), config.player2.clone()],
                config.control,
                config.dash,
                config.arena.height,
            )),
            Box::new(GravitySystem::new(config.groups.players.clone(), config.gravity)),
            Box::new(DashSystem::from_tuning(&config.dash)),
            Box::new(MovementSystem::new()),
            Box::new(BoundarySystem::new(config.groups.players.clone(), config.arena)),
            Box::new(BoxCollisionSystem::new(config.player1.clone(), config.player2.clone(), config.reset)),
            Box::new(RenderSystem::new(Rc::clone(&draw_list))),
        ];
        Ok(Self::assemble(world, schedule, draw_list, config, SceneMode::Duel))
    }

    /// 形の当たり判定サンドボックス。
    /// 操作 → 移動 → 衝突検出 → 衝突解決 → 描画 の順 (検出は必ず解決より前！)。
    pub fn sandbox(config: ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut world = World::new();
        setup::build_sandbox(&mut world, &config)?;
        let draw_list = Rc::new(RefCell::new(DrawList::new()));

        let schedule: Vec<Box<dyn System>> = vec![
            Box::new(AccelControlSystem::new(crate::config::layout::SANDBOX_PLAYER_TAG)),
            Box::new(MovementSystem::new()),
            Box::new(CollisionDetectionSystem::new(config.groups.collision_bodies.clone())),
            Box::new(CollisionResolverSystem::new()),
            Box::new(RenderSystem::new(Rc::clone(&draw_list))),
        ];
        Ok(Self::assemble(world, schedule, draw_list, config, SceneMode::Sandbox))
    }

    fn assemble(
        world: World,
        schedule: Vec<Box<dyn System>>,
        draw_list: Rc<RefCell<DrawList>>,
        config: ArenaConfig,
        mode: SceneMode,
    ) -> Self {
        info!(
            "ArenaSession: {:?} モードで準備完了 (システム {} 個: {})",
            mode,
            schedule.len(),
            schedule.iter().map(|system| system.name()).collect::<Vec<_>>().join(" → ")
        );
        ArenaSession {
            world,
            input: InputState::default(),
            engine: Engine::new(),
            schedule,
            draw_list,
            config,
            mode,
        }
    }

    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    // --- 入力 ---

    /// JS の keyCode で key-down。知らないキーは無視するよ。
    pub fn key_down(&mut self, code: u32, timestamp_ms: f64) {
        match KeyCode::from_code(code) {
            Some(key) => self.input.press(key, timestamp_ms),
            None => debug!("ArenaSession: 知らないキー {} は無視", code),
        }
    }

    pub fn key_up(&mut self, code: u32) {
        if let Some(key) = KeyCode::from_code(code) {
            self.input.release(key);
        }
    }

    // --- 時計 ---

    pub fn start(&mut self, now_ms: f64) {
        info!("ArenaSession: start");
        self.engine.start(now_ms);
    }

    pub fn pause(&mut self) {
        info!("ArenaSession: pause");
        self.engine.pause();
    }

    pub fn stop(&mut self) {
        info!("ArenaSession: stop");
        self.engine.stop();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// 時計を `now_ms` まで進めて、動いてたら1 tick 走らせる。走らせたら `true`。
    pub fn tick(&mut self, now_ms: f64) -> Result<bool, ArenaError> {
        let Some(dt) = self.engine.advance(now_ms) else {
            return Ok(false);
        };
        self.input.set_now(now_ms);
        self.step(dt)?;
        Ok(true)
    }

    /// 時計を使わずに dt 秒ぶん1 tick 進める。スケジュールを順番に全部走らせるよ。
    pub fn step(&mut self, dt: f32) -> Result<(), ArenaError> {
        let frame = Frame::new(dt, &self.input);
        for system in self.schedule.iter_mut() {
            system.run(&mut self.world, &frame)?;
        }
        Ok(())
    }

    // --- 出力 ---

    pub fn draw_commands(&self) -> Ref<'_, [DrawCommand]> {
        Ref::map(self.draw_list.borrow(), |list| list.commands())
    }

    pub fn draw_list_json(&self) -> Result<String, ArenaError> {
        Ok(self.draw_list.borrow().to_json()?)
    }

    pub fn scores(&self) -> ScoreBoard {
        ScoreBoard::collect(&self.world, [self.config.player1.tag.as_str(), self.config.player2.tag.as_str()])
    }

    pub fn scores_json(&self) -> Result<String, ArenaError> {
        Ok(serde_json::to_string(&self.scores())?)
    }
}
