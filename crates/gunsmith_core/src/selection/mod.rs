//! Selection domain - вкладки типов оружия и выбор оружия
//!
//! # Архитектура
//!
//! **Events → Systems flow:**
//! - UI шлёт `WeaponTypeTabClicked` / `WeaponEntryClicked`
//! - `TabContext` меняет состояние вкладок, возвращает `SelectionEffect`
//! - `SelectionApplier` показывает/прячет оружие и шлёт `WeaponSelectionChanged`
//!
//! **Weapon lifecycle:**
//! - Startup → все представления заспавнены скрытыми у spawn point вкладки
//! - Select → show (+ slide-in), Deselect → slide-out (+ hide)
//! - Пока идёт slide/camera blend - interaction lock

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;
pub mod transition;

pub use components::*;
pub use events::*;
pub use systems::*;
pub use transition::*;

use crate::CustomizationSet;

/// Weapon selection plugin
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeaponSelectionSettings>()
            .init_resource::<MotionTracker>()
            .init_resource::<CameraBlend>()
            .add_event::<WeaponTypeTabClicked>()
            .add_event::<WeaponEntryClicked>()
            .add_event::<WeaponSelectionChanged>()
            .add_systems(Startup, generate_weapon_tabs.after(crate::item_catalog::validate_item_catalog))
            .add_systems(PostStartup, open_default_tabs)
            .add_systems(
                FixedUpdate,
                (
                    process_weapon_type_tab_clicks,
                    process_weapon_entry_clicks,
                    advance_weapon_motions,
                    advance_camera_blend,
                )
                    .chain()
                    .in_set(CustomizationSet::Selection),
            );
    }
}

#[cfg(test)]
mod components_tests;
