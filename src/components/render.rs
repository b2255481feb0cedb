// src/components/render.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::{Component, ComponentKind};

/// 描画用のコンポーネント。🎨
///
/// 画像そのものは持たないで、外側 (JS 側のアセット管理) が解決する画像IDだけ持つよ。
/// `alpha` は透明度。無敵中は半透明になる！
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Render {
    pub image_id: u32,
    pub alpha: f32,
}

impl Render {
    pub const OPAQUE: f32 = 1.0;

    pub const fn new(image_id: u32) -> Self {
        Render {
            image_id,
            alpha: Self::OPAQUE,
        }
    }
}

impl Component for Render {
    const KIND: ComponentKind = ComponentKind::Render;
}
