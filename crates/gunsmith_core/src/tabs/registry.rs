//! Tab registry - кто сейчас открыт
//!
//! Один на world (resource). Вкладки регистрируются при open и снимаются при close,
//! hideable панели - при спавне/удалении, независимо от inspect mode.

use bevy::prelude::*;

/// Вид вкладки (закрытый набор, dispatch в `TabContext`)
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect)]
#[reflect(Component)]
pub enum TabKind {
    AttachmentPanel,
    PaintPanel,
    WeaponTypePanel,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct TabRegistry {
    active_tabs: Vec<Entity>,
    active_panels: Vec<Entity>,
    /// Вкладки, закрытые входом в inspect mode (переоткрываются при выходе)
    suspended_tabs: Vec<Entity>,
    inspect_mode: bool,
    current_weapon_tab: Option<Entity>,
    previous_weapon_tab: Option<Entity>,
}

impl TabRegistry {
    pub fn register_tab(&mut self, tab: Entity) {
        if !self.active_tabs.contains(&tab) {
            self.active_tabs.push(tab);
        }
    }

    pub fn deregister_tab(&mut self, tab: Entity) {
        self.active_tabs.retain(|t| *t != tab);
    }

    pub fn register_panel(&mut self, panel: Entity) {
        if !self.active_panels.contains(&panel) {
            self.active_panels.push(panel);
        }
    }

    pub fn deregister_panel(&mut self, panel: Entity) {
        self.active_panels.retain(|p| *p != panel);
    }

    pub fn is_tab_active(&self, tab: Entity) -> bool {
        self.active_tabs.contains(&tab)
    }

    pub fn active_tabs(&self) -> &[Entity] {
        &self.active_tabs
    }

    pub fn active_panels(&self) -> &[Entity] {
        &self.active_panels
    }

    pub fn inspect_mode(&self) -> bool {
        self.inspect_mode
    }

    pub fn current_weapon_tab(&self) -> Option<Entity> {
        self.current_weapon_tab
    }

    pub fn previous_weapon_tab(&self) -> Option<Entity> {
        self.previous_weapon_tab
    }

    pub(crate) fn set_current_weapon_tab(&mut self, tab: Entity) {
        if self.current_weapon_tab != Some(tab) {
            self.previous_weapon_tab = self.current_weapon_tab;
            self.current_weapon_tab = Some(tab);
        }
    }

    /// Войти в inspect mode: вернуть снапшот активных вкладок для suspension-close
    pub(crate) fn begin_inspect_mode(&mut self) -> Vec<Entity> {
        self.inspect_mode = true;
        self.suspended_tabs = self.active_tabs.clone();
        self.suspended_tabs.clone()
    }

    /// Выйти из inspect mode: вернуть ровно тот снапшот для suspension-open
    pub(crate) fn end_inspect_mode(&mut self) -> Vec<Entity> {
        self.inspect_mode = false;
        std::mem::take(&mut self.suspended_tabs)
    }
}
