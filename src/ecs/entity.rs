// src/ecs/entity.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Entity（エンティティ）は、ゲームに登場する「モノ」を表すただの識別子（ID）だよ！
/// プレイヤー、床のポリゴン、三角形の障害物… ぜんぶこの番号ひとつで表すんだ。
///
/// ID そのものはデータを持たないよ。位置とか速度とかは、
/// 後で World に「コンポーネント」としてくっつけることで意味を持つんだ。✨
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Entity(pub usize);

/// エンティティIDの払い出しと回収をする係だよ！♻️
///
/// ルールはシンプル:
/// - 削除されたIDがあれば、その中で **一番小さいID** を再利用する
/// - なければ、まだ一度も使ってない次のIDを出す
///
/// 生きてるIDと空いてるIDは絶対にかぶらない。これがこの構造体の約束！🤝
#[derive(Debug, Default)]
pub struct EntityAllocator {
    // 次に新品で出すID。これ以上のIDは一度も使われてない。
    next_id: usize,
    // 削除されて空いたID。BTreeSet だから最小値がすぐ取れる！
    free: BTreeSet<usize>,
}

impl EntityAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいエンティティIDを払い出すよ。失敗はしない！
    pub fn allocate(&mut self) -> Entity {
        if let Some(id) = self.free.pop_first() {
            return Entity(id);
        }
        let id = self.next_id;
        self.next_id += 1;
        Entity(id)
    }

    /// IDを空きリストに戻す。
    ///
    /// 生きてたIDなら `true`、もともと空いてた (or 一度も出してない) なら何もせず `false`。
    pub fn free(&mut self, entity: Entity) -> bool {
        if !self.is_allocated(entity) {
            return false;
        }
        self.free.insert(entity.0)
    }

    /// そのIDが今「生きてる」かどうか。
    pub fn is_allocated(&self, entity: Entity) -> bool {
        entity.0 < self.next_id && !self.free.contains(&entity.0)
    }

    /// 生きてるIDの数。
    pub fn live_count(&self) -> usize {
        self.next_id - self.free.len()
    }

    /// 生きてるIDを小さい順に並べて返すよ。
    pub fn live(&self) -> impl Iterator<Item = Entity> + '_ {
        (0..self.next_id)
            .filter(move |id| !self.free.contains(id))
            .map(Entity)
    }
}
