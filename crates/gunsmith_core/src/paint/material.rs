//! Paint materials & mesh parts
//!
//! Материал может иметь несколько color-свойств. Приоритет (и для чтения default
//! цвета, и для записи): alpha-color → base-color → plain color.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::shared::Rgba;

/// Какое color-свойство материала реально используется
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorProperty {
    AlphaColor,
    BaseColor,
    Color,
}

#[derive(Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
pub struct PaintMaterial {
    /// Имя материала. Материалы с одинаковым именем считаются одним "paint channel".
    pub name: String,
    #[serde(default)]
    pub alpha_color: Option<Rgba>,
    #[serde(default)]
    pub base_color: Option<Rgba>,
    #[serde(default)]
    pub color: Rgba,
}

impl PaintMaterial {
    pub fn new(name: &str, color: Rgba) -> Self {
        Self {
            name: name.to_string(),
            alpha_color: None,
            base_color: None,
            color,
        }
    }

    pub fn with_base_color(mut self, color: Rgba) -> Self {
        self.base_color = Some(color);
        self
    }

    pub fn with_alpha_color(mut self, color: Rgba) -> Self {
        self.alpha_color = Some(color);
        self
    }

    pub fn primary_property(&self) -> ColorProperty {
        if self.alpha_color.is_some() {
            ColorProperty::AlphaColor
        } else if self.base_color.is_some() {
            ColorProperty::BaseColor
        } else {
            ColorProperty::Color
        }
    }

    /// Текущий цвет приоритетного свойства
    pub fn current_color(&self) -> Rgba {
        self.alpha_color.or(self.base_color).unwrap_or(self.color)
    }

    /// Записать цвет в приоритетное свойство
    pub fn set_color(&mut self, color: Rgba) {
        match self.primary_property() {
            ColorProperty::AlphaColor => self.alpha_color = Some(color),
            ColorProperty::BaseColor => self.base_color = Some(color),
            ColorProperty::Color => self.color = color,
        }
    }
}

/// Mesh-bearing часть оружия (или надетого обвеса)
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct MeshPart {
    pub materials: Vec<PaintMaterial>,
}

impl MeshPart {
    pub fn new(materials: Vec<PaintMaterial>) -> Self {
        Self { materials }
    }

    /// Первый sub-material с данным именем
    pub fn material_named_mut(&mut self, name: &str) -> Option<&mut PaintMaterial> {
        self.materials.iter_mut().find(|m| m.name == name)
    }
}
