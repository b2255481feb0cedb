// src/ecs/component.rs

use serde::{Deserialize, Serialize};

/// このゲームに出てくるコンポーネントの種類、ぜんぶのリストだよ！📋
///
/// 文字列の名前 ("CPos" とか) で種類を見分けるとタイポで簡単に壊れちゃうから、
/// 閉じた enum にしてコンパイラにチェックしてもらうんだ。
/// World のストレージもこの enum をキーにしてるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    Position,
    Velocity,
    Acceleration,
    Render,
    Rectangle,
    Shape,
    Cooldown,
    Dash,
    Invulnerable,
    Score,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 10] = [
        ComponentKind::Position,
        ComponentKind::Velocity,
        ComponentKind::Acceleration,
        ComponentKind::Render,
        ComponentKind::Rectangle,
        ComponentKind::Shape,
        ComponentKind::Cooldown,
        ComponentKind::Dash,
        ComponentKind::Invulnerable,
        ComponentKind::Score,
    ];
}

/// Component（コンポーネント）トレイトだよ！
///
/// 構造体がコンポーネントとして World に入れる資格があることを示すマーカー。
/// `KIND` で「自分はどの種類か」を宣言するのがお約束！
/// コンポーネントはデータだけを持って、ロジックは持たないよ。ロジックは System の仕事！💪
pub trait Component: std::fmt::Debug + 'static {
    const KIND: ComponentKind;
}
