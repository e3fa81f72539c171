//! Scene collaborator - минимальный контракт с host-рендером
//!
//! # Архитектура
//!
//! ECS хранит только то, что нужно customization-логике:
//! - `SceneVisibility` - показан/скрыт (host синхронизирует с рендером)
//! - `Transform` + `ChildOf`/`Children` - иерархия и позы
//! - `MeshPart` (paint) - mesh-bearing часть с материалами
//! - `PrefabLibrary` - blueprints, из которых спавнятся представления предметов
//!
//! Все представления спавнятся скрытыми один раз; дальше меняется только видимость.

use bevy::prelude::*;

pub mod hierarchy;
pub mod prefab;

pub use hierarchy::*;
pub use prefab::*;

/// Видимость scene-объекта
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum SceneVisibility {
    #[default]
    Visible,
    Hidden,
}

impl SceneVisibility {
    pub fn show(&mut self) {
        *self = SceneVisibility::Visible;
    }

    pub fn hide(&mut self) {
        *self = SceneVisibility::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, SceneVisibility::Visible)
    }
}
