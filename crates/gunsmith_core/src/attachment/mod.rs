//! Attachment domain - equip-cycle обвесов по слотам
//!
//! # Архитектура
//!
//! **Slot lifecycle:**
//! - Слот появляется вместе с prefab'ом оружия (`AttachmentSlot` на части prefab'а)
//! - Init → eligible список из каталога, все обвесы pre-spawned скрытыми, equip стартового
//! - Cycle next/previous → unequip (hide) + equip (show), wraparound
//!
//! **Panel lifecycle:**
//! - Оружие показано → панели его слотов регистрируются как вкладки
//! - Selection box эксклюзивен между слотами
//! - Смена оружия в процессе → box свёрнут, панель не кликабельна

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

pub use components::*;
pub use events::*;
pub use systems::*;

use crate::CustomizationSet;

/// Attachment plugin
pub struct AttachmentPlugin;

impl Plugin for AttachmentPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttachmentBoxToggled>()
            .add_event::<AttachmentCycleRequested>()
            .add_event::<AttachmentEquipped>()
            .add_systems(FixedUpdate, init_attachment_slots.in_set(CustomizationSet::Setup))
            .add_systems(FixedUpdate, sync_attachment_panels.in_set(CustomizationSet::React))
            .add_systems(
                FixedUpdate,
                (process_attachment_box_toggles, process_attachment_cycles)
                    .chain()
                    .in_set(CustomizationSet::Input),
            );
    }
}
