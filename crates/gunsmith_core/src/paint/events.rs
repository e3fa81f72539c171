//! Paint events (UI → ECS)

use bevy::prelude::*;

/// Клик по кнопке материала
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialSelectorClicked {
    pub panel: Entity,
    pub index: usize,
}

/// Клик по цвету палитры - красим выбранный материал
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintSwatchClicked {
    pub panel: Entity,
    pub index: usize,
}

/// Вернуть выбранному материалу исходный цвет
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaintResetClicked {
    pub panel: Entity,
}
