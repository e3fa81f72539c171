//! Hideable panel - единый контракт hide/unhide для UI панелей
//!
//! # Архитектура
//!
//! - `hide()`: панель перестаёт принимать ввод; опционально становится невидимой
//!   (alpha 0) или проигрывает hide-анимацию
//! - `unhide()`: ввод возвращается сразу, либо после окончания unhide-анимации
//!   (таймер проверяется каждый тик в `advance`)
//! - Анимация и invisible-on-hide взаимоисключающие: при конфликте invisibility отключается

use bevy::prelude::*;

/// Длительности hide/unhide анимации (клипы проигрывает host)
#[derive(Clone, Copy, Debug, PartialEq, Reflect)]
pub struct HideAnimation {
    pub hide_duration: f32,
    pub unhide_duration: f32,
}

impl HideAnimation {
    fn is_playable(&self) -> bool {
        self.hide_duration.is_finite()
            && self.unhide_duration.is_finite()
            && self.hide_duration >= 0.0
            && self.unhide_duration >= 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default, Reflect)]
pub enum HideablePhase {
    #[default]
    Shown,
    Hiding { remaining: f32 },
    Hidden,
    Unhiding { remaining: f32 },
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Hideable {
    animation: Option<HideAnimation>,
    invisible_on_hide: bool,
    phase: HideablePhase,
    interactable: bool,
    alpha: f32,
    weapon_change_locked: bool,
}

impl Default for Hideable {
    fn default() -> Self {
        Self::new(None, false)
    }
}

impl Hideable {
    /// Конфиг с деградацией: неиграбельная анимация выключается, конфликт
    /// анимации и invisibility решается в пользу анимации (с warning)
    pub fn new(animation: Option<HideAnimation>, invisible_on_hide: bool) -> Self {
        let animation = match animation {
            Some(anim) if !anim.is_playable() => {
                crate::logger::log_warning(&format!(
                    "⚠️ Hideable: animation {:?} is not playable, hide animation disabled",
                    anim
                ));
                None
            }
            other => other,
        };

        let invisible_on_hide = if invisible_on_hide && animation.is_some() {
            crate::logger::log_warning("⚠️ Hideable: both hide animation and invisible-on-hide set, invisibility disabled");
            false
        } else {
            invisible_on_hide
        };

        Self {
            animation,
            invisible_on_hide,
            phase: HideablePhase::Shown,
            interactable: true,
            alpha: 1.0,
            weapon_change_locked: false,
        }
    }

    pub fn with_animation(hide_duration: f32, unhide_duration: f32) -> Self {
        Self::new(
            Some(HideAnimation {
                hide_duration,
                unhide_duration,
            }),
            false,
        )
    }

    pub fn invisible() -> Self {
        Self::new(None, true)
    }

    pub fn hide(&mut self) {
        self.interactable = false;
        if self.invisible_on_hide {
            self.alpha = 0.0;
        }
        self.phase = match self.animation {
            Some(anim) => HideablePhase::Hiding {
                remaining: anim.hide_duration,
            },
            None => HideablePhase::Hidden,
        };
    }

    pub fn unhide(&mut self) {
        if self.invisible_on_hide {
            self.alpha = 1.0;
        }
        match self.animation {
            Some(anim) => {
                // ввод вернётся после окончания анимации
                self.phase = HideablePhase::Unhiding {
                    remaining: anim.unhide_duration,
                };
            }
            None => {
                self.phase = HideablePhase::Shown;
                self.interactable = !self.weapon_change_locked;
            }
        }
    }

    /// Тик анимации. Возвращает true если анимация завершилась на этом тике.
    pub fn advance(&mut self, delta: f32) -> bool {
        match self.phase {
            HideablePhase::Hiding { remaining } => {
                let remaining = remaining - delta;
                if remaining <= 0.0 {
                    self.phase = HideablePhase::Hidden;
                    return true;
                }
                self.phase = HideablePhase::Hiding { remaining };
                false
            }
            HideablePhase::Unhiding { remaining } => {
                let remaining = remaining - delta;
                if remaining <= 0.0 {
                    self.phase = HideablePhase::Shown;
                    self.interactable = !self.weapon_change_locked;
                    return true;
                }
                self.phase = HideablePhase::Unhiding { remaining };
                false
            }
            HideablePhase::Shown | HideablePhase::Hidden => false,
        }
    }

    /// Временная блокировка на время смены оружия (только для показанной панели)
    pub fn set_weapon_change_lock(&mut self, locked: bool) {
        self.weapon_change_locked = locked;
        if self.phase == HideablePhase::Shown {
            self.interactable = !locked;
        }
    }

    pub fn phase(&self) -> HideablePhase {
        self.phase
    }

    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn has_animation(&self) -> bool {
        self.animation.is_some()
    }

    pub fn invisible_on_hide(&self) -> bool {
        self.invisible_on_hide
    }
}
