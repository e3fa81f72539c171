//! Inspect configuration
//!
//! Значения по умолчанию - shipped константы; `InspectConfigOverride` на активной
//! камере заменяет distance/offset/FOV поля на время одной inspect-сессии.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::InspectConfigOverride;

/// Сколько держать drag input до начала вращения (секунды)
pub const DRAG_HOLD_THRESHOLD: f32 = 0.12;

/// Множитель scroll → FOV (градусы в секунду на единицу scroll)
pub const SCROLL_FOV_FACTOR: f32 = 40.0;

#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectConfig {
    /// Градусы в секунду при полном ускорении
    pub drag_rotate_speed: f32,
    /// Разгон drag rotation 0 → 1 (секунды)
    pub drag_accelerate_time: f32,
    /// Длительность перехода in/out (секунды)
    pub transition_time: f32,
    /// 0 → вплотную к камере, 1 → на исходной дистанции
    pub distance_reduction: f32,
    pub right_offset: f32,
    pub left_offset: f32,
    /// 0 → максимальный zoom, 1 → FOV не меняется
    pub fov_reduction: f32,
    pub fov_max: f32,
    pub fov_min: f32,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            drag_rotate_speed: 85.0,
            drag_accelerate_time: 0.5,
            transition_time: 0.24,
            distance_reduction: 0.88,
            right_offset: 0.0,
            left_offset: 0.0,
            fov_reduction: 0.8,
            fov_max: 150.0,
            fov_min: 30.0,
        }
    }
}

impl InspectConfig {
    /// Эффективный config сессии (сам resource не меняется)
    pub fn with_override(&self, camera_override: Option<&InspectConfigOverride>) -> Self {
        let Some(o) = camera_override else {
            return self.clone();
        };

        Self {
            distance_reduction: o.distance_reduction,
            right_offset: o.right_offset,
            left_offset: o.left_offset,
            fov_reduction: o.fov_reduction,
            fov_max: o.fov_max,
            fov_min: o.fov_min,
            ..self.clone()
        }
    }

    /// Clamp FOV в [fov_min, fov_max] (без panic при перепутанных границах)
    pub fn clamp_fov(&self, fov: f32) -> f32 {
        fov.max(self.fov_min).min(self.fov_max)
    }
}
