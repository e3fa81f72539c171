//! Weapon selection events
//!
//! **Intents (UI → ECS):**
//! - `WeaponTypeTabClicked` → смена вкладки типа оружия
//! - `WeaponEntryClicked` → выбор оружия внутри открытой вкладки
//!
//! **Broadcast (ECS → все подписчики):**
//! - `WeaponSelectionChanged` → единственный сигнал "текущее оружие изменилось"
//!   (paint engine, attachment панели, inspect controller)

use bevy::prelude::*;

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponTypeTabClicked {
    pub tab: Entity,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponEntryClicked {
    pub tab: Entity,
    pub index: usize,
}

/// Оружие показано (`selected == true`) или убрано
///
/// При смене оружия всегда сначала `(old, false)`, затем `(new, true)`.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeaponSelectionChanged {
    pub representation: Entity,
    pub selected: bool,
}
