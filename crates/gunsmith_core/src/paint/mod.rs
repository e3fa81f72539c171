//! Paint domain - покраска материалов оружия
//!
//! # Архитектура
//!
//! **Discovery:** оружие → видимые mesh-части → материалы, сгруппированные по имени
//! (`MeshMaterialMap`), кэш по политике `CachePolicy`.
//!
//! **Selector pool:** кнопки материалов переиспользуются между оружиями,
//! `SelectorPool::match_size` подгоняет число активных под число материалов.
//!
//! **Default color memo:** исходный цвет материала запоминается при первом
//! обращении и переживает перестройку map (reset возвращает именно его).

use bevy::prelude::*;

pub mod cache;
pub mod events;
pub mod material;
pub mod mesh_map;
pub mod panel;
pub mod pool;
pub mod systems;

pub use cache::*;
pub use events::*;
pub use material::*;
pub use mesh_map::*;
pub use panel::*;
pub use pool::*;
pub use systems::*;

use crate::CustomizationSet;

/// Paint plugin
pub struct PaintPlugin;

impl Plugin for PaintPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MeshMaterialCache>()
            .add_event::<MaterialSelectorClicked>()
            .add_event::<PaintSwatchClicked>()
            .add_event::<PaintResetClicked>()
            .add_systems(FixedUpdate, bind_paint_to_selected_weapon.in_set(CustomizationSet::React))
            .add_systems(
                FixedUpdate,
                (
                    process_material_selector_clicks,
                    process_paint_swatch_clicks,
                    process_paint_resets,
                )
                    .chain()
                    .in_set(CustomizationSet::Input),
            );
    }
}
