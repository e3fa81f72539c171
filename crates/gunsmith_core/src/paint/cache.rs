//! Mesh/material cache + default color memo

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::mesh_map::{MaterialRef, MeshMaterialMap};
use crate::error::{CustomizationError, CustomizationResult};
use crate::shared::Rgba;

/// Когда перестраивать map оружия
///
/// `Reuse` не видит смену надетых обвесов (их meshes появляются/исчезают).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum CachePolicy {
    #[default]
    AlwaysRebuild,
    Reuse,
}

#[derive(Resource, Debug, Default, Clone)]
pub struct MeshMaterialCache {
    policy: CachePolicy,
    maps: HashMap<Entity, MeshMaterialMap>,
    /// Исходный цвет материала до первой покраски (переживает rebuild)
    default_colors: HashMap<MaterialRef, Rgba>,
}

impl MeshMaterialCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: CachePolicy) {
        self.policy = policy;
    }

    pub fn cached(&self, weapon_root: Entity) -> Option<&MeshMaterialMap> {
        self.maps.get(&weapon_root)
    }

    /// Map оружия по политике кэша
    pub fn map_for(
        &mut self,
        weapon_root: Entity,
        build: impl FnOnce() -> CustomizationResult<MeshMaterialMap>,
    ) -> CustomizationResult<&MeshMaterialMap> {
        let reuse = self.policy == CachePolicy::Reuse && self.maps.contains_key(&weapon_root);
        if !reuse {
            let map = build()?;
            self.maps.insert(weapon_root, map);
        }
        self.maps
            .get(&weapon_root)
            .ok_or(CustomizationError::MissingReference("mesh material map"))
    }

    /// Default цвет: probe выполняется только при первом обращении к материалу
    pub fn default_color(&mut self, key: MaterialRef, probe: impl FnOnce() -> Rgba) -> Rgba {
        *self.default_colors.entry(key).or_insert_with(probe)
    }
}
