// src/input.rs
//! キー入力のスナップショットだよ！⌨️
//!
//! ブラウザのイベントを拾うのは JS 側のお仕事。こっちは
//! 「今押されてるキー」と「最近押されたキーの履歴 (新しい順)」を持ってるだけ。
//! 履歴はダブルタップ (同じキーを素早く2回) のコンボ判定に使うよ。

use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};

/// ゲームで使うキー。数値は JS の `KeyboardEvent.keyCode`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Space,
    Left,
    Up,
    Right,
    Down,
    A,
    D,
    S,
    W,
}

impl KeyCode {
    /// JS の keyCode から。知らないキーは `None`。
    pub fn from_code(code: u32) -> Option<KeyCode> {
        match code {
            32 => Some(KeyCode::Space),
            37 => Some(KeyCode::Left),
            38 => Some(KeyCode::Up),
            39 => Some(KeyCode::Right),
            40 => Some(KeyCode::Down),
            65 => Some(KeyCode::A),
            68 => Some(KeyCode::D),
            83 => Some(KeyCode::S),
            87 => Some(KeyCode::W),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            KeyCode::Space => 32,
            KeyCode::Left => 37,
            KeyCode::Up => 38,
            KeyCode::Right => 39,
            KeyCode::Down => 40,
            KeyCode::A => 65,
            KeyCode::D => 68,
            KeyCode::S => 83,
            KeyCode::W => 87,
        }
    }
}

/// キーが押された瞬間の記録。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: KeyCode,
    /// 押された時刻 (ミリ秒)。
    pub timestamp_ms: f64,
}

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// 今の入力状態。
#[derive(Debug, Clone)]
pub struct InputState {
    active: HashSet<KeyCode>,
    // 先頭が一番新しい
    history: VecDeque<KeyEvent>,
    history_capacity: usize,
    now_ms: f64,
}

impl Default for InputState {
    fn default() -> Self {
        InputState::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl InputState {
    pub fn with_capacity(history_capacity: usize) -> Self {
        InputState {
            active: HashSet::new(),
            history: VecDeque::with_capacity(history_capacity),
            history_capacity,
            now_ms: 0.0,
        }
    }

    /// キーが押された。押しっぱなしのリピートは履歴に積まないよ (離してから押し直した時だけ)。
    pub fn press(&mut self, key: KeyCode, timestamp_ms: f64) {
        if !self.active.insert(key) {
            return;
        }
        self.history.push_front(KeyEvent { key, timestamp_ms });
        self.history.truncate(self.history_capacity);
    }

    /// キーが離された。
    pub fn release(&mut self, key: KeyCode) {
        self.active.remove(&key);
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.active.contains(&key)
    }

    /// 最近の key-down 履歴 (新しい順)。
    pub fn history(&self) -> impl Iterator<Item = &KeyEvent> {
        self.history.iter()
    }

    /// 判定に使う「今」の時刻をセットする。tick の頭でループが呼ぶ。
    pub fn set_now(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// 履歴を新しい順に見て、`key` のタップを最大2つ集める。
    /// 途中で `interrupts` のどれかが出てきたら、そこで打ち切り (別の方向キーを挟んだらコンボ不成立)。
    pub fn find_taps(&self, key: KeyCode, interrupts: &[KeyCode]) -> Vec<KeyEvent> {
        let mut taps = Vec::with_capacity(2);
        for event in &self.history {
            if event.key == key {
                taps.push(*event);
                if taps.len() == 2 {
                    break;
                }
            } else if interrupts.contains(&event.key) {
                break;
            }
        }
        taps
    }

    /// ダブルタップ判定。
    ///
    /// 2回のタップの間隔が `max_gap_ms` 未満で、しかも新しい方のタップが
    /// 今から `max_age_ms` 未満の出来事ならコンボ成立！🎮
    pub fn double_tapped(&self, key: KeyCode, interrupts: &[KeyCode], max_gap_ms: f64, max_age_ms: f64) -> bool {
        match self.find_taps(key, interrupts).as_slice() {
            [latest, previous] => {
                latest.timestamp_ms - previous.timestamp_ms < max_gap_ms
                    && self.now_ms - latest.timestamp_ms < max_age_ms
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(input: &mut InputState, key: KeyCode, at: f64) {
        input.press(key, at);
        input.release(key);
    }

    #[test]
    fn key_codes_round_trip_through_js_codes() {
        for key in [KeyCode::Space, KeyCode::Left, KeyCode::Up, KeyCode::Right, KeyCode::Down, KeyCode::A, KeyCode::D, KeyCode::S, KeyCode::W] {
            assert_eq!(KeyCode::from_code(key.code()), Some(key));
        }
        assert_eq!(KeyCode::from_code(13), None);
    }

    #[test]
    fn held_key_repeat_is_not_recorded_twice() {
        let mut input = InputState::default();
        input.press(KeyCode::W, 0.0);
        input.press(KeyCode::W, 30.0);
        assert!(input.is_held(KeyCode::W));
        assert_eq!(input.history().count(), 1);
        input.release(KeyCode::W);
        assert!(!input.is_held(KeyCode::W));
    }

    #[test]
    fn history_is_bounded_and_newest_first() {
        let mut input = InputState::with_capacity(3);
        for i in 0..5 {
            tap(&mut input, KeyCode::A, i as f64);
        }
        let stamps: Vec<f64> = input.history().map(|e| e.timestamp_ms).collect();
        assert_eq!(stamps, vec![4.0, 3.0, 2.0]);
    }

    #[test]
    fn double_tap_within_window_is_detected() {
        let mut input = InputState::default();
        tap(&mut input, KeyCode::D, 1000.0);
        tap(&mut input, KeyCode::D, 1200.0);
        input.set_now(1300.0);
        assert!(input.double_tapped(KeyCode::D, &[KeyCode::A, KeyCode::W, KeyCode::S], 400.0, 400.0));
    }

    #[test]
    fn slow_or_stale_taps_are_not_a_combo() {
        let mut input = InputState::default();
        tap(&mut input, KeyCode::D, 1000.0);
        tap(&mut input, KeyCode::D, 1500.0);
        input.set_now(1550.0);
        assert!(!input.double_tapped(KeyCode::D, &[], 400.0, 400.0), "タップ間隔が長すぎる");

        input.set_now(2000.0);
        tap(&mut input, KeyCode::D, 1600.0);
        assert!(!input.double_tapped(KeyCode::D, &[], 400.0, 400.0), "新しいタップが古すぎる");
    }

    #[test]
    fn interrupting_key_breaks_the_combo() {
        let mut input = InputState::default();
        tap(&mut input, KeyCode::D, 1000.0);
        tap(&mut input, KeyCode::A, 1100.0);
        tap(&mut input, KeyCode::D, 1200.0);
        input.set_now(1250.0);
        assert_eq!(input.find_taps(KeyCode::D, &[KeyCode::A]).len(), 1);
        assert!(!input.double_tapped(KeyCode::D, &[KeyCode::A], 400.0, 400.0));
        // 割り込み扱いしなければ成立
        assert!(input.double_tapped(KeyCode::D, &[], 400.0, 400.0));
    }
}
