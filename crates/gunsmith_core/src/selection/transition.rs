//! Weapon select transitions
//!
//! # Архитектура
//!
//! **WeaponMotion** - линейный slide вдоль right-оси оружия вместо мгновенного
//! show/hide. Новый motion на том же entity заменяет предыдущий (insert поверх).
//!
//! **MotionTracker** - пока движется хоть одно оружие, держится `WeaponSwap` lock.
//!
//! **CameraBlend** - таймер blend'а камеры после смены вкладки типа оружия,
//! держит `CameraBlend` lock.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::item_catalog::WeaponType;

/// Настройки выбора оружия (resource)
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponSelectionSettings {
    /// Slide in/out вместо мгновенного show/hide
    pub transition_enabled: bool,
    /// Смещение вдоль right-оси оружия (метры)
    pub transition_offset: f32,
    /// Длительность slide (секунды)
    pub transition_duration: f32,
    /// Camera blend после смены вкладки (0 → без blend)
    pub camera_blend_time: f32,
    /// Вкладка, открываемая на старте (None → первая по порядку типов)
    pub default_weapon_type: Option<WeaponType>,
}

impl Default for WeaponSelectionSettings {
    fn default() -> Self {
        Self {
            transition_enabled: false,
            transition_offset: 0.5,
            transition_duration: 0.25,
            camera_blend_time: 0.0,
            default_weapon_type: None,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct WeaponMotion {
    from: Vec3,
    to: Vec3,
    elapsed: f32,
    duration: f32,
    /// Slide-out: скрыть оружие на финише
    hide_on_finish: bool,
}

impl WeaponMotion {
    pub fn new(from: Vec3, to: Vec3, duration: f32, hide_on_finish: bool) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            hide_on_finish,
        }
    }

    pub fn hide_on_finish(&self) -> bool {
        self.hide_on_finish
    }

    pub fn target(&self) -> Vec3 {
        self.to
    }

    /// Тик: новая позиция + завершён ли motion
    pub fn advance(&mut self, delta: f32) -> (Vec3, bool) {
        if self.duration <= 0.0 {
            return (self.to, true);
        }

        self.elapsed += delta;
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        if t >= 1.0 {
            return (self.to, true);
        }
        (self.from.lerp(self.to, t), false)
    }
}

/// Какие оружия сейчас в slide
#[derive(Resource, Debug, Default, Clone)]
pub struct MotionTracker {
    moving: HashSet<Entity>,
}

impl MotionTracker {
    /// true → первый motion, надо поднять lock
    pub fn begin(&mut self, entity: Entity) -> bool {
        let was_idle = self.moving.is_empty();
        self.moving.insert(entity);
        was_idle
    }

    /// true → последний motion закончился, lock снимается
    pub fn finish(&mut self, entity: Entity) -> bool {
        self.moving.remove(&entity) && self.moving.is_empty()
    }

    /// Выкинуть оружие, у которого motion пропал без finish (despawn посреди slide)
    ///
    /// true → из-за этого tracker опустел, lock снимается.
    pub fn retain_moving(&mut self, still_moving: impl Fn(Entity) -> bool) -> bool {
        let before = self.moving.len();
        self.moving.retain(|entity| still_moving(*entity));
        before > 0 && self.moving.len() < before && self.moving.is_empty()
    }

    pub fn is_moving(&self, entity: Entity) -> bool {
        self.moving.contains(&entity)
    }

    pub fn any(&self) -> bool {
        !self.moving.is_empty()
    }
}

/// Camera blend таймер (resource)
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct CameraBlend {
    remaining: Option<f32>,
}

impl CameraBlend {
    /// true → blend стартовал (раньше не шёл), надо поднять lock
    pub fn start(&mut self, blend_time: f32) -> bool {
        if blend_time <= 0.0 {
            return false;
        }
        let was_idle = self.remaining.is_none();
        self.remaining = Some(blend_time);
        was_idle
    }

    /// true → blend закончился на этом тике
    pub fn advance(&mut self, delta: f32) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };
        let remaining = remaining - delta;
        if remaining <= 0.0 {
            self.remaining = None;
            return true;
        }
        self.remaining = Some(remaining);
        false
    }

    pub fn is_blending(&self) -> bool {
        self.remaining.is_some()
    }
}
