//! Tabs domain - оркестрация панелей
//!
//! # Архитектура
//!
//! **TabRegistry** (resource) - активные вкладки, hideable панели, inspect mode,
//! текущая/предыдущая вкладка типа оружия.
//!
//! **TabContext** (SystemParam) - единственное место, где вкладки открываются и
//! закрываются. Гарантирует: не больше одной открытой вкладки типа оружия,
//! inspect mode прячет всё и возвращает ровно спрятанное.
//!
//! **Hideable** - контракт hide/unhide для любой UI панели.
//!
//! **Interaction locks** - `apply_interaction_locks` собирает broadcasts
//! и выставляет interactable для inspect button, attachment панелей, hideables.

pub mod context;
pub mod hideable;
pub mod registry;
pub mod systems;

pub use context::*;
pub use hideable::*;
pub use registry::*;
pub use systems::*;

use bevy::prelude::*;

use crate::shared::{InteractionLockChanged, InteractionLocks};
use crate::CustomizationSet;

/// Tabs plugin: registry, hideable панели, interaction locks
pub struct TabsPlugin;

impl Plugin for TabsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TabRegistry>()
            .init_resource::<InteractionLocks>()
            .add_event::<InteractionLockChanged>()
            .add_systems(FixedUpdate, track_hideable_panels.in_set(CustomizationSet::Setup))
            .add_systems(FixedUpdate, apply_interaction_locks.in_set(CustomizationSet::Locks))
            .add_systems(
                FixedUpdate,
                advance_hideables
                    .after(crate::inspect::finish_inspect_exit)
                    .in_set(CustomizationSet::Finalize),
            );
    }
}

#[cfg(test)]
mod hideable_tests;
#[cfg(test)]
mod registry_tests;
