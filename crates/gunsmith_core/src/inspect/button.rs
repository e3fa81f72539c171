//! Inspect button state
//!
//! Кнопка блокируется, пока держится любой interaction lock (смена оружия,
//! camera blend, inspect переход). Выход из inspect завершается только когда
//! lock перехода снят (`finish_exit` поллится каждый tick).
//!
//! Без активной камеры кнопка выключается насовсем (`disable`).

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Rejected,
    Enter,
    Exit,
}

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct InspectButton {
    can_inspect: bool,
    is_inspecting: bool,
    exit_pending: bool,
    disabled: bool,
}

impl Default for InspectButton {
    fn default() -> Self {
        Self {
            can_inspect: true,
            is_inspecting: false,
            exit_pending: false,
            disabled: false,
        }
    }
}

impl InspectButton {
    pub fn can_inspect(&self) -> bool {
        self.can_inspect
    }

    pub fn is_inspecting(&self) -> bool {
        self.is_inspecting
    }

    pub fn exit_pending(&self) -> bool {
        self.exit_pending
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Что сделает нажатие (состояние не меняется)
    pub fn press(&self) -> ButtonAction {
        if self.disabled || !self.can_inspect || self.exit_pending {
            return ButtonAction::Rejected;
        }
        if self.is_inspecting {
            ButtonAction::Exit
        } else {
            ButtonAction::Enter
        }
    }

    pub fn mark_entered(&mut self) {
        self.is_inspecting = true;
    }

    pub fn mark_exit_pending(&mut self) {
        self.exit_pending = true;
    }

    /// Выход ждёт снятия lock'а. true → выход завершён в этот tick.
    pub fn finish_exit(&mut self) -> bool {
        if !self.exit_pending || !self.can_inspect {
            return false;
        }
        self.exit_pending = false;
        self.is_inspecting = false;
        true
    }

    pub fn set_blocked(&mut self, blocked: bool) {
        self.can_inspect = !blocked;
    }

    /// Нет зависимости (камеры) - кнопка больше не реагирует, locks её не включат
    pub fn disable(&mut self) {
        self.disabled = true;
    }
}
