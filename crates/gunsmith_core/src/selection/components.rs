//! Weapon selection components
//!
//! # Архитектура
//!
//! **WeaponTypeTab** - вкладка одного типа оружия: список entry (кнопка + заспавненное
//! представление), выбранный индекс (запоминается между открытиями), Open/Closed.
//! Методы вкладки чистые: возвращают `SelectionEffect`, применяет их `SelectionApplier`.
//!
//! **WeaponRepresentation** - маркер root entity оружия + "домашняя" поза у spawn point.

use bevy::prelude::*;

use crate::item_catalog::{IconRef, ItemDefinition, ItemId, WeaponType};
use crate::tabs::TabKind;

/// Что нужно сделать с представлением оружия
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionEffect {
    /// Показать + уведомить `(repr, true)`
    Select(Entity),
    /// Уведомить `(repr, false)` + скрыть
    Deselect(Entity),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Reflect)]
pub enum TabState {
    #[default]
    Closed,
    Open,
}

/// Кнопка оружия во вкладке
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct WeaponEntry {
    pub item: ItemId,
    pub name: String,
    pub icon: Option<IconRef>,
    pub representation: Entity,
    pub selected: bool,
    pub button_visible: bool,
}

impl WeaponEntry {
    pub fn new(definition: &ItemDefinition, representation: Entity) -> Self {
        Self {
            item: definition.id.clone(),
            name: definition.name.clone(),
            icon: definition.icon.clone(),
            representation,
            selected: false,
            button_visible: false,
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WeaponTypeTab {
    pub weapon_type: WeaponType,
    /// Где спавнятся представления оружия этой вкладки
    pub spawn: Transform,
    pub entries: Vec<WeaponEntry>,
    selected: Option<usize>,
    state: TabState,
    highlighted: bool,
    tab_button_visible: bool,
}

/// Компоненты вкладки типа оружия
pub fn weapon_type_tab_bundle(weapon_type: WeaponType, spawn: Transform) -> (WeaponTypeTab, TabKind) {
    (WeaponTypeTab::new(weapon_type, spawn), TabKind::WeaponTypePanel)
}

impl WeaponTypeTab {
    pub fn new(weapon_type: WeaponType, spawn: Transform) -> Self {
        Self {
            weapon_type,
            spawn,
            entries: Vec::new(),
            selected: None,
            state: TabState::Closed,
            highlighted: false,
            tab_button_visible: true,
        }
    }

    pub fn state(&self) -> TabState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == TabState::Open
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn tab_button_visible(&self) -> bool {
        self.tab_button_visible
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_representation(&self) -> Option<Entity> {
        self.selected.map(|i| self.entries[i].representation)
    }

    /// Открыть вкладку
    ///
    /// Первое открытие выбирает первую entry. В suspension (выход из inspect)
    /// возвращается только видимость панели, выбор оружия не трогается.
    pub fn open(&mut self, suspended: bool) -> Option<SelectionEffect> {
        self.tab_button_visible = true;
        if suspended {
            let open = self.is_open();
            self.entries.iter_mut().for_each(|e| e.button_visible = open);
            return None;
        }

        self.state = TabState::Open;
        self.highlighted = true;
        if self.entries.is_empty() {
            return None;
        }

        self.entries.iter_mut().for_each(|e| e.button_visible = true);
        let index = *self.selected.get_or_insert(0);
        self.entries[index].selected = true;
        Some(SelectionEffect::Select(self.entries[index].representation))
    }

    /// Закрыть вкладку (выбранный индекс запоминается до следующего открытия)
    pub fn close(&mut self, suspended: bool) -> Option<SelectionEffect> {
        self.entries.iter_mut().for_each(|e| e.button_visible = false);
        if suspended {
            self.tab_button_visible = false;
            return None;
        }

        self.state = TabState::Closed;
        self.highlighted = false;
        let index = self.selected?;
        self.entries[index].selected = false;
        Some(SelectionEffect::Deselect(self.entries[index].representation))
    }

    /// Клик по кнопке оружия: deselect предыдущего, затем select нового
    pub fn select_entry(&mut self, index: usize) -> Vec<SelectionEffect> {
        if !self.is_open() || index >= self.entries.len() || self.selected == Some(index) {
            return Vec::new();
        }

        let mut effects = Vec::with_capacity(2);
        if let Some(previous) = self.selected {
            self.entries[previous].selected = false;
            effects.push(SelectionEffect::Deselect(self.entries[previous].representation));
        }

        self.selected = Some(index);
        self.entries[index].selected = true;
        effects.push(SelectionEffect::Select(self.entries[index].representation));
        effects
    }
}

/// Root entity заспавненного оружия
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct WeaponRepresentation {
    pub item: ItemId,
    /// Поза у spawn point вкладки (цель slide-in)
    pub home: Transform,
}
