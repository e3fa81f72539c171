//! TabContext - единая точка open/close для всех видов вкладок
//!
//! # Архитектура
//!
//! Вкладки не знают друг о друге: любая смена (клик по вкладке типа оружия,
//! выбор оружия, вход/выход из inspect) идёт через `TabContext`, который
//! диспатчит по `TabKind` и держит `TabRegistry` в согласованном состоянии.
//!
//! Weapon-вкладки возвращают `SelectionEffect`, остальные - применяются сразу.

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::{Hideable, TabKind, TabRegistry};
use crate::attachment::AttachmentPanel;
use crate::item_catalog::WeaponType;
use crate::paint::PaintPanel;
use crate::selection::{SelectionEffect, WeaponTypeTab};

#[derive(SystemParam)]
pub struct TabContext<'w, 's> {
    registry: ResMut<'w, TabRegistry>,
    kinds: Query<'w, 's, (Entity, &'static TabKind)>,
    weapon_tabs: Query<'w, 's, &'static mut WeaponTypeTab>,
    attachment_panels: Query<'w, 's, &'static mut AttachmentPanel>,
    paint_panels: Query<'w, 's, &'static mut PaintPanel>,
    hideables: Query<'w, 's, &'static mut Hideable>,
}

impl TabContext<'_, '_> {
    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn inspect_mode(&self) -> bool {
        self.registry.inspect_mode()
    }

    /// Все вкладки данного вида (порядок спавна)
    pub fn tabs_of_kind(&self, kind: TabKind) -> Vec<Entity> {
        let mut tabs: Vec<Entity> = self
            .kinds
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(entity, _)| entity)
            .collect();
        tabs.sort();
        tabs
    }

    /// Вкладка по умолчанию: заданного типа, иначе первая по порядку типов
    pub fn default_weapon_tab(&self, preferred: Option<WeaponType>) -> Option<Entity> {
        let mut tabs: Vec<(Entity, WeaponType)> = self
            .tabs_of_kind(TabKind::WeaponTypePanel)
            .into_iter()
            .filter_map(|tab| self.weapon_tabs.get(tab).ok().map(|t| (tab, t.weapon_type)))
            .collect();
        tabs.sort_by_key(|(_, weapon_type)| *weapon_type);

        preferred
            .and_then(|wanted| tabs.iter().find(|(_, t)| *t == wanted))
            .or(tabs.first())
            .map(|(tab, _)| *tab)
    }

    pub fn open_tab(&mut self, tab: Entity, suspended: bool) -> Option<SelectionEffect> {
        let Ok((_, kind)) = self.kinds.get(tab) else {
            crate::logger::log_error(&format!("❌ TabContext: {:?} is not a tab", tab));
            return None;
        };

        let effect = match *kind {
            TabKind::WeaponTypePanel => {
                let Ok(mut weapon_tab) = self.weapon_tabs.get_mut(tab) else {
                    crate::logger::log_error(&format!("❌ TabContext: weapon tab {:?} has no WeaponTypeTab", tab));
                    return None;
                };
                if !suspended {
                    self.registry.set_current_weapon_tab(tab);
                }
                weapon_tab.open(suspended)
            }
            TabKind::AttachmentPanel => {
                if let Ok(mut panel) = self.attachment_panels.get_mut(tab) {
                    panel.open();
                }
                None
            }
            TabKind::PaintPanel => {
                if let Ok(mut panel) = self.paint_panels.get_mut(tab) {
                    panel.open();
                }
                None
            }
        };

        self.registry.register_tab(tab);
        effect
    }

    pub fn close_tab(&mut self, tab: Entity, suspended: bool) -> Option<SelectionEffect> {
        let Ok((_, kind)) = self.kinds.get(tab) else {
            crate::logger::log_error(&format!("❌ TabContext: {:?} is not a tab", tab));
            return None;
        };

        let effect = match *kind {
            TabKind::WeaponTypePanel => self
                .weapon_tabs
                .get_mut(tab)
                .ok()
                .and_then(|mut weapon_tab| weapon_tab.close(suspended)),
            TabKind::AttachmentPanel => {
                if let Ok(mut panel) = self.attachment_panels.get_mut(tab) {
                    panel.close();
                }
                None
            }
            TabKind::PaintPanel => {
                if let Ok(mut panel) = self.paint_panels.get_mut(tab) {
                    panel.close();
                }
                None
            }
        };

        self.registry.deregister_tab(tab);
        effect
    }

    /// Сменить вкладку типа оружия: закрыть текущую, затем открыть запрошенную
    ///
    /// None → смены не было (та же вкладка, inspect mode, не weapon-вкладка).
    pub fn change_weapon_type_tab(&mut self, tab: Entity) -> Option<Vec<SelectionEffect>> {
        if self.registry.inspect_mode() {
            crate::logger::log_warning("⚠️ TabContext: weapon type change ignored in inspect mode");
            return None;
        }
        if !matches!(self.kinds.get(tab), Ok((_, TabKind::WeaponTypePanel))) {
            crate::logger::log_error(&format!("❌ TabContext: {:?} is not a weapon type tab", tab));
            return None;
        }

        let current = self.registry.current_weapon_tab();
        if current == Some(tab) && self.registry.is_tab_active(tab) {
            return None;
        }

        let mut effects = Vec::with_capacity(2);
        if let Some(current) = current.filter(|c| self.registry.is_tab_active(*c)) {
            effects.extend(self.close_tab(current, false));
        }
        effects.extend(self.open_tab(tab, false));
        Some(effects)
    }

    /// Клик по кнопке оружия внутри вкладки
    pub fn select_weapon_entry(&mut self, tab: Entity, index: usize) -> Vec<SelectionEffect> {
        if self.registry.inspect_mode() {
            return Vec::new();
        }
        match self.weapon_tabs.get_mut(tab) {
            Ok(mut weapon_tab) => weapon_tab.select_entry(index),
            Err(_) => {
                crate::logger::log_error(&format!("❌ TabContext: {:?} is not a weapon type tab", tab));
                Vec::new()
            }
        }
    }

    /// Inspect mode: спрятать всё / вернуть ровно то, что было спрятано
    pub fn set_inspect_mode(&mut self, enabled: bool) {
        if enabled == self.registry.inspect_mode() {
            return;
        }

        if enabled {
            for tab in self.registry.begin_inspect_mode() {
                // suspension-close никогда не трогает выбор оружия
                ignore_effect(self.close_tab(tab, true), tab);
            }
            for panel in self.registry.active_panels().to_vec() {
                if let Ok(mut hideable) = self.hideables.get_mut(panel) {
                    hideable.hide();
                }
            }
            crate::logger::log("🔍 Tabs: inspect mode ON, UI hidden");
        } else {
            for tab in self.registry.end_inspect_mode() {
                ignore_effect(self.open_tab(tab, true), tab);
            }
            for panel in self.registry.active_panels().to_vec() {
                if let Ok(mut hideable) = self.hideables.get_mut(panel) {
                    hideable.unhide();
                }
            }
            crate::logger::log("🔍 Tabs: inspect mode OFF, UI restored");
        }
    }
}

/// Open/close, от которых selection effect не ожидается (панели, suspension)
///
/// Если effect всё же пришёл - он не применяется, это ошибка вызывающего.
pub fn ignore_effect(effect: Option<SelectionEffect>, tab: Entity) {
    if let Some(effect) = effect {
        crate::logger::log_error(&format!("❌ TabContext: unexpected {:?} from tab {:?}, dropped", effect, tab));
    }
}
