// src/ecs/system.rs

use crate::ecs::error::EcsError;
use crate::ecs::world::World;
use crate::input::InputState;

/// 1 tick 分の外からの入力だよ。前の tick からの経過時間と、キー入力のスナップショット。
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// 前の tick からの経過時間 (秒)。
    pub dt: f32,
    pub input: &'a InputState,
}

impl<'a> Frame<'a> {
    pub fn new(dt: f32, input: &'a InputState) -> Self {
        Frame { dt, input }
    }
}

/// System（システム）トレイトだよ！
///
/// システムはゲームのロジックを実行する係。データは持たないで (調整用の定数は別)、
/// 毎 tick `run` で World の中のコンポーネントを読んだり書き換えたりするんだ。
///
/// システム同士は World を通してしかやり取りしないよ。どの順番で呼ぶかは
/// ゲームループ側 (`ArenaSession` のスケジュール) の責任。
/// 例えば「衝突検出 → 衝突解決」の順番を守るのはループの仕事で、World は何もチェックしない。
///
/// `run` の中で借りたコンポーネントの参照は `run` の外に持ち出さないこと！
/// 次のシステムがそのコンポーネントを消したり置き換えたりするかもしれないからね。
pub trait System {
    /// ログやデバッグ用の名前。
    fn name(&self) -> &'static str;

    /// このシステムを 1 tick 分実行する。
    fn run(&mut self, world: &mut World, frame: &Frame<'_>) -> Result<(), EcsError>;
}
