// src/app/engine.rs
//! ループの時計だよ！⏱️
//!
//! 実際に毎フレーム呼んでくれるのは JS の `requestAnimationFrame`。
//! こっちは「前回から何秒たったか」と「合計で何秒動いてたか」を数えるだけ。

/// start / pause / stop できる時計。
#[derive(Debug, Clone, Default)]
pub struct Engine {
    running: bool,
    last_frame_ms: Option<f64>,
    time_passed: f64,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// 動かし始める。`now_ms` が次の `advance` の基準になるよ。
    pub fn start(&mut self, now_ms: f64) {
        self.running = true;
        self.last_frame_ms = Some(now_ms);
    }

    /// 一時停止。今までの経過時間は覚えておく。
    pub fn pause(&mut self) {
        self.running = false;
        self.last_frame_ms = None;
    }

    /// 停止。経過時間もリセット。
    pub fn stop(&mut self) {
        self.pause();
        self.time_passed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// 合計の経過時間 (秒)。
    pub fn time_passed(&self) -> f64 {
        self.time_passed
    }

    /// 時計を `now_ms` まで進めて、前回からの dt (秒) を返す。止まってたら `None`。
    /// 時刻が巻き戻ってたら dt は 0 にするよ。
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        if !self.running {
            return None;
        }
        let last = self.last_frame_ms.replace(now_ms).unwrap_or(now_ms);
        let dt = ((now_ms - last) / 1000.0).max(0.0);
        self.time_passed += dt;
        Some(dt as f32)
    }
}
