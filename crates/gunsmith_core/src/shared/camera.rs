//! Inspect camera components
//!
//! Host синхронизирует `InspectCamera.fov` со своей проекцией; позиция камеры -
//! обычный `Transform` на том же entity.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Камера, которую использует inspect mode
///
/// Inspect берёт первую камеру с `active == true`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct InspectCamera {
    /// Vertical FOV в градусах
    pub fov: f32,
    pub active: bool,
}

impl Default for InspectCamera {
    fn default() -> Self {
        Self {
            fov: 60.0,
            active: true,
        }
    }
}

/// Per-camera override параметров inspect
///
/// Если присутствует на активной камере в момент старта inspect, его значения
/// заменяют соответствующие поля `InspectConfig` на время сессии.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct InspectConfigOverride {
    pub distance_reduction: f32,
    pub right_offset: f32,
    pub left_offset: f32,
    pub fov_reduction: f32,
    pub fov_max: f32,
    pub fov_min: f32,
}
