//! Inspect domain - free-look осмотр выбранного оружия
//!
//! # Архитектура
//!
//! **InspectButton** (resource) - Enter/Exit/Rejected; блокируется interaction locks.
//!
//! **WeaponInspect** (resource) - state machine перехода in/out, drag, scroll FOV.
//!
//! **Flow:**
//! - `WeaponSelectionChanged` → текущее оружие контроллера
//! - `InspectButtonPressed` → Enter: tabs прячут UI, оружие едет к камере
//! - Exit → оружие возвращается, UI восстанавливается после снятия lock'а
//!
//! Камера: первая `InspectCamera` с `active == true`; `InspectConfigOverride`
//! на ней заменяет distance/offset/FOV параметры сессии.

use bevy::prelude::*;

pub mod button;
pub mod config;
pub mod controller;
pub mod events;
pub mod input;
pub mod systems;

pub use button::*;
pub use config::*;
pub use controller::*;
pub use events::*;
pub use input::*;
pub use systems::*;

use crate::CustomizationSet;

/// Inspect plugin
pub struct InspectPlugin;

impl Plugin for InspectPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InspectConfig>()
            .init_resource::<WeaponInspect>()
            .init_resource::<InspectButton>()
            .init_resource::<InspectInput>()
            .add_event::<InspectButtonPressed>()
            .add_event::<WeaponInInspection>()
            .add_systems(FixedUpdate, track_current_inspect_weapon.in_set(CustomizationSet::React))
            .add_systems(
                FixedUpdate,
                (process_inspect_button, advance_inspect)
                    .chain()
                    .in_set(CustomizationSet::Inspect),
            )
            .add_systems(
                FixedUpdate,
                (finish_inspect_exit, clear_inspect_input)
                    .chain()
                    .in_set(CustomizationSet::Finalize),
            );
    }
}
