// src/ecs/error.rs
//! World の使い方を間違えた時のエラーだよ。
//!
//! 「見つからない」は普通のこと (`Option` で返す) だけど、
//! 登録してない種類のコンポーネントを書き込もうとしたり、
//! 作ってないグループに入れようとしたりするのはプログラムのミス！
//! そういうのはここのエラーで即座に知らせるよ。🚨

use thiserror::Error;

use crate::ecs::component::ComponentKind;
use crate::ecs::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcsError {
    /// `register_component` を呼ぶ前に書き込もうとした。
    #[error("component kind {0:?} is not registered; call register_component first")]
    UnregisteredComponent(ComponentKind),

    /// 生きていない (作られてない or 削除済みの) エンティティへの書き込み。
    #[error("entity {0:?} is not alive")]
    DeadEntity(Entity),

    /// `create_group` してないグループ名。
    #[error("group '{0}' does not exist")]
    UnknownGroup(String),
}
