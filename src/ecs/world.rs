// src/ecs/world.rs

// === Rust 標準ライブラリからのインポート ===
// Any: コンポーネントストレージを型に関係なく保持するためのトレイト。
use std::any::Any;
// BTreeSet: クエリ結果を ID 順に並べて返すのに使う。順番が毎回同じだとテストもデバッグも楽！
use std::collections::{BTreeSet, HashMap};

use log::{debug, info, warn};

// === このクレート内の他のモジュールからのインポート ===
use crate::components::collision::CollisionEvent;
use crate::ecs::component::{Component, ComponentKind};
use crate::ecs::entity::{Entity, EntityAllocator};
use crate::ecs::error::EcsError;

/// コンポーネントストレージとその操作をまとめた内部的な構造体だよ！✨
/// `storage` の中身は `HashMap<Entity, T>` なんだけど、`Box<dyn Any>` で型を隠してる。
/// 型を知らなくても消したり数えたりできるように、型 `T` 専用の関数ポインタを一緒に持っておくんだ！
struct ComponentStoreEntry {
    /// 実際のデータ (`HashMap<Entity, T>`) を型消去して入れておく箱。📦
    storage: Box<dyn Any>,
    /// 指定エンティティのコンポーネントを消すお掃除関数。🧹 消せたら `true`。
    remover: fn(&mut dyn Any, Entity) -> bool,
    /// 指定エンティティがこの種類のコンポーネントを持ってるか。
    contains: fn(&dyn Any, Entity) -> bool,
    /// この種類のコンポーネントを持ってるエンティティ全部。
    holders: fn(&dyn Any) -> Vec<Entity>,
}

impl ComponentStoreEntry {
    fn new<T: Component>() -> Self {
        ComponentStoreEntry {
            storage: Box::new(HashMap::<Entity, T>::new()),
            remover: |storage, entity| {
                storage
                    .downcast_mut::<HashMap<Entity, T>>()
                    .map_or(false, |map| map.remove(&entity).is_some())
            },
            contains: |storage, entity| {
                storage
                    .downcast_ref::<HashMap<Entity, T>>()
                    .map_or(false, |map| map.contains_key(&entity))
            },
            holders: |storage| {
                storage
                    .downcast_ref::<HashMap<Entity, T>>()
                    .map_or_else(Vec::new, |map| map.keys().copied().collect())
            },
        }
    }
}

/// ゲーム世界の全てのエンティティとコンポーネントを管理する中心的な構造体 (自作ECSのコア！)。
///
/// - エンティティの生成・削除 (ID は小さい順に再利用♻️)
/// - コンポーネントの種類ごとの保存とアクセス
/// - タグ ("PLAYER1" みたいな一意の名前) とグループ (名前つきのエンティティの列)
/// - その tick の間だけ生きてる衝突イベントのキュー
///
/// グローバル変数にはしないよ！System には `&mut World` を毎回渡すのがこのプロジェクトのやり方。
#[derive(Default)]
pub struct World {
    allocator: EntityAllocator,
    component_stores: HashMap<ComponentKind, ComponentStoreEntry>,
    tags: HashMap<String, Entity>,
    groups: HashMap<String, Vec<Entity>>,
    collision_events: Vec<CollisionEvent>,
}

impl World {
    /// 新しい空の World を作成するコンストラクタ。
    pub fn new() -> Self {
        Self::default()
    }

    // --- Entity Management ---

    /// 新しいエンティティを生成して返す。空いてるIDがあれば一番小さいものを再利用するよ。
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.allocator.allocate();
        debug!("World: Created entity with ID {}", entity.0);
        entity
    }

    /// 指定されたエンティティが生きてるかどうか。
    pub fn is_entity_alive(&self, entity: Entity) -> bool {
        self.allocator.is_allocated(entity)
    }

    /// 生きてるエンティティの数。
    pub fn entity_count(&self) -> usize {
        self.allocator.live_count()
    }

    /// 生きてるエンティティを ID 順に全部。
    pub fn entities(&self) -> Vec<Entity> {
        self.allocator.live().collect()
    }

    /// 指定されたエンティティを削除 (破棄) する。 ✨超重要メソッド！✨
    ///
    /// くっついてた全部のコンポーネントを消して、そのエンティティを指してたタグと
    /// グループの中の出現も片付けてから、IDを空きリストに戻すよ。
    /// IDが再利用された時に、前の持ち主のタグを引き継いじゃう事故を防ぐためだよ！
    ///
    /// もう削除済みのIDを渡しても何も起きない (`false` が返るだけ)。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.allocator.free(entity) {
            debug!("World: Attempted to destroy non-existent entity with ID {}", entity.0);
            return false;
        }

        debug!("World: Destroying entity with ID {}", entity.0);
        for entry in self.component_stores.values_mut() {
            (entry.remover)(entry.storage.as_mut(), entity);
        }
        self.tags.retain(|_, tagged| *tagged != entity);
        for members in self.groups.values_mut() {
            members.retain(|member| *member != entity);
        }
        true
    }

    // --- Component Management ---

    /// 新しい種類のコンポーネントを World に登録する。
    /// 同じ種類を二回登録しても何も起きないよ (ログだけ出す)。
    pub fn register_component<T: Component>(&mut self) {
        if self.component_stores.contains_key(&T::KIND) {
            info!(
                "World: Component kind {:?} ({}) is already registered",
                T::KIND,
                std::any::type_name::<T>()
            );
            return;
        }
        debug!("World: Registering component kind {:?} ({})", T::KIND, std::any::type_name::<T>());
        self.component_stores.insert(T::KIND, ComponentStoreEntry::new::<T>());
    }

    /// その種類が登録済みかどうか。
    pub fn is_registered(&self, kind: ComponentKind) -> bool {
        self.component_stores.contains_key(&kind)
    }

    /// エンティティにコンポーネントを追加する。同じ種類がもうあったら上書き！
    ///
    /// # エラー
    /// - 未登録の種類 → `EcsError::UnregisteredComponent`
    /// - 生きてないエンティティ → `EcsError::DeadEntity`
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> Result<(), EcsError> {
        if !self.is_entity_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let storage = self
            .storage_mut::<T>()
            .ok_or(EcsError::UnregisteredComponent(T::KIND))?;
        storage.insert(entity, component);
        Ok(())
    }

    /// コンポーネントへの **読み取り専用** 参照。ないのは普通のことなので `None` で返すよ。
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>().and_then(|storage| storage.get(&entity))
    }

    /// コンポーネントへの **書き込み可能** 参照。
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storage_mut::<T>().and_then(|storage| storage.get_mut(&entity))
    }

    /// そのエンティティが `T` を持ってるか。
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.get_component::<T>(entity).is_some()
    }

    /// コンポーネントを外して、外した値を返す。なければ `None` (エラーじゃないよ)。
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> Option<T> {
        self.storage_mut::<T>().and_then(|storage| storage.remove(&entity))
    }

    /// 種類 (enum) を指定してコンポーネントを外す。外せたら `true`。
    pub fn remove_component_kind(&mut self, entity: Entity, kind: ComponentKind) -> bool {
        match self.component_stores.get_mut(&kind) {
            Some(entry) => (entry.remover)(entry.storage.as_mut(), entity),
            None => {
                warn!("World: remove_component_kind on unregistered kind {:?}", kind);
                false
            }
        }
    }

    /// ある種類のコンポーネント全部 (エンティティ → コンポーネント) のマップ。
    /// 未登録なら警告ログを出して `None`。
    pub fn components<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        self.storage::<T>()
    }

    /// `components` の書き込み可能版。
    pub fn components_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        self.storage_mut::<T>()
    }

    /// `T` を持ってるエンティティを ID 順に。
    pub fn entities_with<T: Component>(&self) -> Vec<Entity> {
        let mut entities: Vec<Entity> = self
            .storage::<T>()
            .map(|storage| storage.keys().copied().collect())
            .unwrap_or_default();
        entities.sort();
        entities
    }

    /// 指定した種類を **全部** 持ってるエンティティの集合 (本当の積集合！)。
    ///
    /// 最初の種類の持ち主リストをコピーして、残りの種類を全部持ってるものだけ集め直すよ。
    /// 種類のリストが空なら空集合。未登録の種類が混じってたら、誰もそれを持てないので空集合。
    pub fn get_entities_with_components(&self, kinds: &[ComponentKind]) -> BTreeSet<Entity> {
        let mut entries = Vec::with_capacity(kinds.len());
        for kind in kinds {
            match self.component_stores.get(kind) {
                Some(entry) => entries.push(entry),
                None => {
                    warn!("World: Query uses unregistered component kind {:?}; returning no entities", kind);
                    return BTreeSet::new();
                }
            }
        }
        let Some((first_entry, other_entries)) = entries.split_first() else {
            return BTreeSet::new();
        };
        let candidates = (first_entry.holders)(first_entry.storage.as_ref());
        candidates
            .into_iter()
            .filter(|entity| {
                other_entries
                    .iter()
                    .all(|entry| (entry.contains)(entry.storage.as_ref(), *entity))
            })
            .collect()
    }

    // --- Tags ---

    /// エンティティにタグをつける。同じタグがもう別のエンティティについてたら **上書き** するよ。
    pub fn add_tag(&mut self, entity: Entity, tag: impl Into<String>) -> Result<(), EcsError> {
        if !self.is_entity_alive(entity) {
            return Err(EcsError::DeadEntity(entity));
        }
        let tag = tag.into();
        if let Some(previous) = self.tags.insert(tag.clone(), entity) {
            if previous != entity {
                debug!("World: Tag '{}' moved from entity {} to entity {}", tag, previous.0, entity.0);
            }
        }
        Ok(())
    }

    /// タグからエンティティを引く。タグがない時も、指してた相手が死んでる時も `None`。
    pub fn get_by_tag(&self, tag: &str) -> Option<Entity> {
        self.tags
            .get(tag)
            .copied()
            .filter(|entity| self.is_entity_alive(*entity))
    }

    /// タグを外す。外したタグが指してたエンティティを返すよ。
    pub fn remove_tag(&mut self, tag: &str) -> Option<Entity> {
        self.tags.remove(tag)
    }

    // --- Groups ---

    /// 空のグループを作る。もうあったらログだけ出して何もしない。
    pub fn create_group(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.groups.contains_key(&name) {
            info!("World: Group '{}' already exists", name);
            return;
        }
        self.groups.insert(name, Vec::new());
    }

    /// グループを消す。あったら `true`。
    pub fn destroy_group(&mut self, name: &str) -> bool {
        self.groups.remove(name).is_some()
    }

    /// グループの末尾にエンティティを足す。同じエンティティを何回入れてもOK (重複あり)。
    pub fn add_to_group(&mut self, entity: Entity, name: &str) -> Result<(), EcsError> {
        let members = self
            .groups
            .get_mut(name)
            .ok_or_else(|| EcsError::UnknownGroup(name.to_string()))?;
        members.push(entity);
        Ok(())
    }

    /// グループから、そのエンティティと **等しい最初の1個** を取り除く。取り除けたら `true`。
    pub fn remove_from_group(&mut self, entity: Entity, name: &str) -> Result<bool, EcsError> {
        let members = self
            .groups
            .get_mut(name)
            .ok_or_else(|| EcsError::UnknownGroup(name.to_string()))?;
        match members.iter().position(|member| *member == entity) {
            Some(index) => {
                members.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// グループのメンバーを入れた順に。未定義のグループなら `None`。
    pub fn get_group(&self, name: &str) -> Option<&[Entity]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    /// 定義されてるグループ名を全部 (名前順)。
    pub fn group_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.groups.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    // --- Collision events (その tick の中だけ生きてるキュー) ---

    /// 衝突検出システムがイベントを積む。
    pub fn push_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push(event);
    }

    /// 積まれたイベントを全部取り出す。取り出した後のキューは空っぽ！
    pub fn drain_collision_events(&mut self) -> Vec<CollisionEvent> {
        std::mem::take(&mut self.collision_events)
    }

    /// まだ処理されてないイベント (覗き見用)。
    pub fn pending_collision_events(&self) -> &[CollisionEvent] {
        &self.collision_events
    }

    // --- 内部ヘルパー ---

    fn storage<T: Component>(&self) -> Option<&HashMap<Entity, T>> {
        match self.component_stores.get(&T::KIND) {
            Some(entry) => entry.storage.downcast_ref::<HashMap<Entity, T>>(),
            None => {
                warn!(
                    "World: Component kind {:?} ({}) is not registered",
                    T::KIND,
                    std::any::type_name::<T>()
                );
                None
            }
        }
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut HashMap<Entity, T>> {
        match self.component_stores.get_mut(&T::KIND) {
            Some(entry) => entry.storage.downcast_mut::<HashMap<Entity, T>>(),
            None => {
                warn!(
                    "World: Component kind {:?} ({}) is not registered",
                    T::KIND,
                    std::any::type_name::<T>()
                );
                None
            }
        }
    }
} // impl World の終わり

// テストコードは world_tests.rs にまとめてあるよ
#[cfg(test)]
#[path = "world_tests.rs"]
mod world_tests;
