// src/render.rs
//! 描画の出口だよ！🖼️
//!
//! Rust 側はキャンバスを直接触らない。`RenderSystem` が「どの画像をどこに、どの透明度で」
//! っていう命令をシンクに流して、JS 側がそれを見て実際に描くんだ。

use serde::{Deserialize, Serialize};

use crate::geometry::Vector2;

/// 描画命令の受け取り手。
pub trait RenderSink {
    /// 画面を消す。毎フレーム最初に1回呼ばれるよ。
    fn clear(&mut self);

    /// 画像を1枚描く。`alpha` が `None` なら不透明のまま。
    fn draw(&mut self, image_id: u32, position: Vector2, alpha: Option<f32>);
}

/// 描画命令ひとつ分。JSON にして JS に渡す。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub image_id: u32,
    pub x: f32,
    pub y: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

/// 描画命令をためておくだけのシンク。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.commands)
    }
}

impl RenderSink for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, image_id: u32, position: Vector2, alpha: Option<f32>) {
        self.commands.push(DrawCommand {
            image_id,
            x: position.x,
            y: position.y,
            alpha,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_previous_frame() {
        let mut list = DrawList::new();
        list.draw(1, Vector2::new(1.0, 2.0), None);
        list.clear();
        list.draw(2, Vector2::new(3.0, 4.0), Some(0.5));
        assert_eq!(
            list.commands(),
            &[DrawCommand { image_id: 2, x: 3.0, y: 4.0, alpha: Some(0.5) }]
        );
    }

    #[test]
    fn opaque_draws_omit_alpha_in_json() {
        let mut list = DrawList::new();
        list.draw(7, Vector2::new(10.0, 20.0), None);
        let json = list.to_json().unwrap();
        assert_eq!(json, r#"[{"image_id":7,"x":10.0,"y":20.0}]"#);
    }
}
