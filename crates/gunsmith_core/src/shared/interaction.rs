//! Interaction locks
//!
//! Любая длительная анимация (смена оружия, camera blend, inspect переход)
//! публикует `InteractionLockChanged { locked: true }` на старте и `false` на финише.
//! `InteractionLocks` агрегирует активные источники: UI разблокирован, только когда
//! ни один источник не держит lock.

use bevy::prelude::*;
use std::collections::HashSet;

/// Источник блокировки взаимодействия
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
pub enum LockSource {
    /// Weapon select motion (slide in/out)
    WeaponSwap,
    /// Camera blend после смены вкладки типа оружия
    CameraBlend,
    /// Inspect mode переход (in/out)
    InspectTransition,
}

impl LockSource {
    /// "Weapon change in progress" - блокирует attachment панели и hideable UI
    pub fn is_weapon_change(&self) -> bool {
        matches!(self, LockSource::WeaponSwap | LockSource::CameraBlend)
    }
}

/// Broadcast: блокировка взаимодействия включена/снята
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InteractionLockChanged {
    pub source: LockSource,
    pub locked: bool,
}

/// Активные блокировки (resource)
#[derive(Resource, Debug, Default, Clone)]
pub struct InteractionLocks {
    active: HashSet<LockSource>,
}

impl InteractionLocks {
    /// Применить broadcast. Возвращает true если набор изменился.
    pub fn apply(&mut self, change: &InteractionLockChanged) -> bool {
        if change.locked {
            self.active.insert(change.source)
        } else {
            self.active.remove(&change.source)
        }
    }

    pub fn is_locked(&self, source: LockSource) -> bool {
        self.active.contains(&source)
    }

    pub fn any(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn weapon_change_in_progress(&self) -> bool {
        self.active.iter().any(LockSource::is_weapon_change)
    }
}
