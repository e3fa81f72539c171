//! Inspect events

use bevy::prelude::*;

/// UI intent: нажата inspect кнопка
#[derive(Event, Clone, Copy, Debug, Default)]
pub struct InspectButtonPressed;

/// Broadcast: оружие вошло в inspect (true) / полностью вышло (false)
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponInInspection {
    pub inspecting: bool,
}
