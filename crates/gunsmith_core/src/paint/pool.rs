//! Material selector pool
//!
//! Пул кнопок выбора материала переиспользуется между оружиями: при смене оружия
//! пул подгоняется под число материалов (активация/деактивация/досоздание),
//! новые кнопки создаются только когда все существующие уже активны.

use bevy::prelude::*;

use super::mesh_map::{MaterialEntry, MaterialRef, MeshMaterialMap};
use crate::shared::Rgba;

/// Привязка кнопки к материалу текущего оружия
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorBinding {
    pub material: String,
    pub key: MaterialRef,
    pub meshes: Vec<Entity>,
    pub default_color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSelector {
    pub label: String,
    pub active: bool,
    pub highlighted: bool,
    pub binding: Option<SelectorBinding>,
}

impl MaterialSelector {
    fn deactivate(&mut self) {
        self.active = false;
        self.highlighted = false;
        self.binding = None;
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectorPool {
    selectors: Vec<MaterialSelector>,
    /// Счётчик для подписей "Material N"
    spawned: usize,
}

impl SelectorPool {
    /// Пул с одной активной кнопкой
    pub fn with_one() -> Self {
        let mut pool = Self::default();
        pool.instantiate();
        pool
    }

    pub fn selectors(&self) -> &[MaterialSelector] {
        &self.selectors
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MaterialSelector> {
        self.selectors.get(index)
    }

    pub fn active_count(&self) -> usize {
        self.selectors.iter().filter(|s| s.active).count()
    }

    pub fn first_active(&self) -> Option<usize> {
        self.selectors.iter().position(|s| s.active)
    }

    fn instantiate(&mut self) {
        self.spawned += 1;
        self.selectors.push(MaterialSelector {
            label: format!("Material {}", self.spawned),
            active: true,
            highlighted: false,
            binding: None,
        });
    }

    /// Подогнать число активных кнопок под `required`
    ///
    /// Возвращает число созданных кнопок. После вызова `active_count() == required`.
    pub fn match_size(&mut self, required: usize) -> usize {
        let active = self.active_count();

        if active == required {
            return 0;
        }

        if active > required {
            // оставляем первые `required` активных, остальные гасим
            let mut kept = 0;
            for selector in self.selectors.iter_mut().filter(|s| s.active) {
                if kept < required {
                    kept += 1;
                } else {
                    selector.deactivate();
                }
            }
            return 0;
        }

        if active == self.selectors.len() {
            let missing = required - active;
            for _ in 0..missing {
                self.instantiate();
            }
            return missing;
        }

        let mut remaining = required - active;
        for selector in self.selectors.iter_mut().filter(|s| !s.active) {
            if remaining == 0 {
                break;
            }
            selector.active = true;
            remaining -= 1;
        }

        // неактивные кончились - добираем созданием
        self.match_size(required)
    }

    /// Привязать активные кнопки к материалам (None → оружия нет, всё отвязать)
    pub fn bind(&mut self, map: Option<&MeshMaterialMap>, mut default_color: impl FnMut(&MaterialEntry) -> Rgba) {
        let Some(map) = map else {
            for selector in self.selectors.iter_mut().filter(|s| s.active) {
                selector.binding = None;
            }
            return;
        };

        let mut entries = map.entries().iter();
        for selector in self.selectors.iter_mut().filter(|s| s.active) {
            selector.binding = entries.next().map(|entry| SelectorBinding {
                material: entry.name.clone(),
                key: entry.key,
                meshes: entry.meshes.clone(),
                default_color: default_color(entry),
            });
        }
    }

    pub fn clear_highlight(&mut self) {
        self.selectors.iter_mut().for_each(|s| s.highlighted = false);
    }

    /// Подсветить одну кнопку, погасить остальные
    pub fn highlight(&mut self, index: usize) {
        for (i, selector) in self.selectors.iter_mut().enumerate() {
            selector.highlighted = i == index;
        }
    }
}
