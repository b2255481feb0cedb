// src/systems/render_system.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::components::{Position, Render};
use crate::ecs::{EcsError, Frame, System, World};
use crate::render::RenderSink;

/// 描画システムだよ！🎨
///
/// シンクをクリアしてから、`Render` と `Position` を両方持ってるエンティティを
/// ID 順に1つずつ描く。不透明 (alpha == 1) の時は alpha を渡さないよ。
///
/// シンクは JS 側に渡すためにセッションとも共有するので `Rc<RefCell<_>>` で持つ。
pub struct RenderSystem<S: RenderSink> {
    sink: Rc<RefCell<S>>,
}

impl<S: RenderSink> RenderSystem<S> {
    pub fn new(sink: Rc<RefCell<S>>) -> Self {
        Self { sink }
    }
}

impl<S: RenderSink> System for RenderSystem<S> {
    fn name(&self) -> &'static str {
        "RenderSystem"
    }

    fn run(&mut self, world: &mut World, _frame: &Frame<'_>) -> Result<(), EcsError> {
        let mut sink = self.sink.borrow_mut();
        sink.clear();
        for entity in world.entities_with::<Render>() {
            let (Some(render), Some(position)) = (world.get_component::<Render>(entity), world.get_component::<Position>(entity)) else {
                continue;
            };
            let alpha = (render.alpha != Render::OPAQUE).then_some(render.alpha);
            sink.draw(render.image_id, position.0, alpha);
        }
        Ok(())
    }
}
