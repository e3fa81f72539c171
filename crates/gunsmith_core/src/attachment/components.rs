//! Attachment slot components
//!
//! # Архитектура
//!
//! **AttachmentSlot** - конфиг точки крепления (тип + несовместимые обвесы + оружие-владелец).
//! **SlotCycle** - runtime цикл по eligible списку, вставляется при инициализации слота.
//! **AttachmentPanel** - UI-состояние панели слота (selection box, interactable, display).
//!
//! Все eligible обвесы спавнятся скрытыми под слотом один раз, equip/unequip
//! только переключают видимость.

use bevy::prelude::*;

use crate::error::{CustomizationError, CustomizationResult};
use crate::item_catalog::{AttachmentType, IconRef, ItemCatalog, ItemDefinition, ItemId};
use crate::tabs::TabKind;

// ============================================================================
// AttachmentSlot (config)
// ============================================================================

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AttachmentSlot {
    pub attachment_type: AttachmentType,
    pub incompatible: Vec<ItemId>,
    /// Root entity оружия, которому принадлежит слот
    pub owner: Entity,
}

/// Сохранённый извне выбор обвеса (слот стартует с него)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PersistedAttachment(pub ItemId);

/// Слот без eligible обвесов - выключен до перезапуска
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct SlotDisabled;

/// Компоненты attachment слота (config + UI панель + вид вкладки)
pub fn slot_bundle(slot: AttachmentSlot) -> (AttachmentSlot, AttachmentPanel, TabKind) {
    (slot, AttachmentPanel::default(), TabKind::AttachmentPanel)
}

/// Eligible список слота
///
/// Все Empty обвесы, затем все обвесы типа слота кроме несовместимых (порядок каталога).
pub fn eligible_attachments(catalog: &ItemCatalog, slot: &AttachmentSlot) -> Vec<ItemId> {
    let empties = catalog.attachments().iter().filter(|def| def.is_empty_attachment());
    let matching = catalog.attachments().iter().filter(|def| {
        slot.attachment_type != AttachmentType::Empty
            && def.attachment_type() == Some(slot.attachment_type)
            && !slot.incompatible.contains(&def.id)
    });

    empties.chain(matching).map(|def| def.id.clone()).collect()
}

// ============================================================================
// SlotCycle (runtime)
// ============================================================================

/// Изменение видимости представления обвеса
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityChange {
    Show(Entity),
    Hide(Entity),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// Циклический выбор обвеса в слоте
///
/// Инварианты:
/// - `eligible` не пуст
/// - `cycle_index < eligible.len()`
/// - после любой операции `equipped == eligible[cycle_index]`
#[derive(Component, Debug, Clone, PartialEq)]
pub struct SlotCycle {
    eligible: Vec<ItemId>,
    /// Pre-spawned представление на каждый eligible обвес (None → у обвеса нет prefab)
    representations: Vec<Option<Entity>>,
    cycle_index: usize,
    equipped: ItemId,
    equipped_representation: Option<Entity>,
}

impl SlotCycle {
    /// Создать цикл, стартующий с `resume` (если он есть в списке) или с Empty
    ///
    /// Ничего не надевает: вызывающий делает `equip_current()` после спавна представлений.
    pub fn new(
        slot: Entity,
        attachment_type: AttachmentType,
        eligible: Vec<ItemId>,
        representations: Vec<Option<Entity>>,
        resume: Option<&ItemId>,
        catalog: &ItemCatalog,
    ) -> CustomizationResult<Self> {
        if eligible.is_empty() {
            return Err(CustomizationError::NoEligibleAttachments { slot, attachment_type });
        }

        let resumed = resume.and_then(|id| eligible.iter().position(|item| item == id));
        let empty = eligible
            .iter()
            .position(|id| catalog.get(id).is_some_and(ItemDefinition::is_empty_attachment));
        let cycle_index = resumed.or(empty).unwrap_or(0);

        let mut representations = representations;
        representations.resize(eligible.len(), None);

        Ok(Self {
            equipped: eligible[cycle_index].clone(),
            eligible,
            representations,
            cycle_index,
            equipped_representation: None,
        })
    }

    pub fn eligible(&self) -> &[ItemId] {
        &self.eligible
    }

    pub fn cycle_index(&self) -> usize {
        self.cycle_index
    }

    pub fn equipped(&self) -> &ItemId {
        &self.equipped
    }

    pub fn equipped_representation(&self) -> Option<Entity> {
        self.equipped_representation
    }

    /// Надеть обвес `eligible[index]`
    ///
    /// Обвес без представления (Empty, нет prefab) ничего не показывает.
    /// Предыдущий не снимает: снаружи только через `cycle` (unequip + equip).
    fn equip(&mut self, index: usize) -> Option<VisibilityChange> {
        let index = index % self.eligible.len();
        self.cycle_index = index;

        if self.eligible[index] != self.equipped {
            self.equipped = self.eligible[index].clone();
        }

        let representation = self.representations[index]?;
        self.equipped_representation = Some(representation);
        Some(VisibilityChange::Show(representation))
    }

    /// Показать текущий обвес (инициализация слота; повтор показывает то же представление)
    pub fn equip_current(&mut self) -> Option<VisibilityChange> {
        self.equip(self.cycle_index)
    }

    /// Снять текущий обвес (no-op если ничего не показано)
    pub fn unequip(&mut self) -> Option<VisibilityChange> {
        self.equipped_representation.take().map(VisibilityChange::Hide)
    }

    pub fn cycle(&mut self, direction: CycleDirection) -> Vec<VisibilityChange> {
        let len = self.eligible.len();
        let next = match direction {
            CycleDirection::Next => (self.cycle_index + 1) % len,
            CycleDirection::Previous => (self.cycle_index + len - 1) % len,
        };

        self.unequip().into_iter().chain(self.equip(next)).collect()
    }

    pub fn cycle_next(&mut self) -> Vec<VisibilityChange> {
        self.cycle(CycleDirection::Next)
    }

    pub fn cycle_previous(&mut self) -> Vec<VisibilityChange> {
        self.cycle(CycleDirection::Previous)
    }
}

// ============================================================================
// AttachmentPanel (UI state)
// ============================================================================

/// Что показывает панель слота: имя + иконка текущего обвеса
#[derive(Debug, Clone, Default, PartialEq, Reflect)]
pub struct SlotDisplay {
    pub name: String,
    pub icon: Option<IconRef>,
}

impl SlotDisplay {
    pub fn from_definition(definition: Option<&ItemDefinition>) -> Self {
        match definition {
            Some(def) => Self {
                name: def.name.clone(),
                icon: def.icon.clone(),
            },
            None => Self::default(),
        }
    }

    /// Иконка скрывается, если у обвеса её нет
    pub fn icon_visible(&self) -> bool {
        self.icon.is_some()
    }
}

#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AttachmentPanel {
    /// Раскрыт ли selection box (стрелки next/previous)
    pub box_open: bool,
    pub interactable: bool,
    pub panel_visible: bool,
    /// false → слот выключен из-за ошибки конфигурации
    pub enabled: bool,
    pub display: SlotDisplay,
}

impl Default for AttachmentPanel {
    fn default() -> Self {
        Self {
            box_open: false,
            interactable: true,
            panel_visible: false,
            enabled: true,
            display: SlotDisplay::default(),
        }
    }
}

impl AttachmentPanel {
    /// Открытие вкладки всегда закрывает selection box
    pub fn open(&mut self) {
        self.box_open = false;
        self.panel_visible = true;
    }

    pub fn close(&mut self) {
        self.box_open = false;
        self.panel_visible = false;
    }

    /// Пока идёт смена оружия - box закрыт, панель не кликабельна
    pub fn set_weapon_change_lock(&mut self, locked: bool) {
        if locked {
            self.box_open = false;
        }
        self.interactable = !locked;
    }

    /// Скрытая панель (оружие не показано, inspect) ввод не принимает
    pub fn accepts_input(&self) -> bool {
        self.enabled && self.interactable && self.panel_visible
    }
}
