//! Paint panel - UI-состояние покраски
//!
//! Панель держит пул кнопок материалов, палитру (swatches) и "выбранный" материал,
//! который публикуется всем swatches и кнопке reset.

use bevy::prelude::*;

use super::mesh_map::{MaterialEntry, MeshMaterialMap};
use super::pool::{SelectorBinding, SelectorPool};
use crate::shared::Rgba;
use crate::tabs::TabKind;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct PaintPanel {
    pool: SelectorPool,
    swatches: Vec<Rgba>,
    /// Кнопка, чей материал сейчас красят swatches/reset
    chosen: Option<usize>,
    current_weapon: Option<Entity>,
    panel_visible: bool,
}

/// Компоненты paint панели
pub fn paint_panel_bundle(swatches: Vec<Rgba>) -> (PaintPanel, TabKind) {
    (PaintPanel::new(swatches), TabKind::PaintPanel)
}

impl PaintPanel {
    /// Пул стартует с одной активной кнопкой
    pub fn new(swatches: Vec<Rgba>) -> Self {
        Self {
            pool: SelectorPool::with_one(),
            swatches,
            chosen: None,
            current_weapon: None,
            panel_visible: false,
        }
    }

    pub fn pool(&self) -> &SelectorPool {
        &self.pool
    }

    pub fn swatches(&self) -> &[Rgba] {
        &self.swatches
    }

    pub fn chosen(&self) -> Option<usize> {
        self.chosen
    }

    pub fn chosen_binding(&self) -> Option<&SelectorBinding> {
        self.chosen
            .and_then(|i| self.pool.get(i))
            .and_then(|selector| selector.binding.as_ref())
    }

    pub fn current_weapon(&self) -> Option<Entity> {
        self.current_weapon
    }

    pub fn is_visible(&self) -> bool {
        self.panel_visible
    }

    pub fn open(&mut self) {
        self.panel_visible = true;
    }

    pub fn close(&mut self) {
        self.panel_visible = false;
    }

    /// Оружия нет: одна кнопка, без привязки
    pub fn reset_for_no_weapon(&mut self) {
        self.pool.match_size(1);
        self.pool.bind(None, |_| Rgba::WHITE);
        self.pool.clear_highlight();
        self.chosen = None;
        self.current_weapon = None;
    }

    /// Новое оружие: подогнать пул, привязать, выбрать первую активную кнопку
    pub fn bind_weapon(
        &mut self,
        weapon: Entity,
        map: &MeshMaterialMap,
        default_color: impl FnMut(&MaterialEntry) -> Rgba,
    ) {
        self.pool.match_size(map.len());
        self.pool.bind(Some(map), default_color);
        self.current_weapon = Some(weapon);
        self.chosen = None;

        if let Some(first) = self.pool.first_active() {
            self.select(first);
        }
    }

    /// Выбор кнопки материала (эксклюзивный)
    ///
    /// Возвращает false для неактивной/несуществующей кнопки.
    pub fn select(&mut self, index: usize) -> bool {
        let Some(selector) = self.pool.get(index) else {
            return false;
        };
        if !selector.active {
            return false;
        }

        let bound = selector.binding.is_some();
        self.pool.highlight(index);
        self.chosen = bound.then_some(index);
        true
    }
}
