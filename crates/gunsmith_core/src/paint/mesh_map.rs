//! Mesh → material discovery
//!
//! Материалы оружия группируются по имени: один "paint channel" на имя,
//! со списком всех mesh-частей, которые его используют.

use bevy::prelude::*;

use super::MeshPart;
use crate::error::{CustomizationError, CustomizationResult};
use crate::scene::{collapse_single_child, visible_subtree, SceneVisibility};

/// Идентичность материала: первое вхождение (mesh + индекс sub-material)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MaterialRef {
    pub mesh: Entity,
    pub slot: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialEntry {
    pub name: String,
    pub key: MaterialRef,
    /// Каждый mesh ровно один раз, в порядке обхода
    pub meshes: Vec<Entity>,
}

/// Упорядоченный map материал → meshes (порядок первого обнаружения)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshMaterialMap {
    entries: Vec<MaterialEntry>,
}

impl MeshMaterialMap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[MaterialEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&MaterialEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }
}

/// Построить map по уже собранным mesh-частям (в порядке обхода)
pub fn build_mesh_material_map(
    root: Entity,
    parts: &[(Entity, &MeshPart)],
) -> CustomizationResult<MeshMaterialMap> {
    if parts.is_empty() {
        return Err(CustomizationError::NoMeshParts(root));
    }

    let mut map = MeshMaterialMap::default();
    for (mesh, part) in parts {
        for (slot, material) in part.materials.iter().enumerate() {
            match map.entries.iter_mut().find(|entry| entry.name == material.name) {
                Some(entry) => {
                    if !entry.meshes.contains(mesh) {
                        entry.meshes.push(*mesh);
                    }
                }
                None => map.entries.push(MaterialEntry {
                    name: material.name.clone(),
                    key: MaterialRef { mesh: *mesh, slot },
                    meshes: vec![*mesh],
                }),
            }
        }
    }

    Ok(map)
}

/// Собрать видимые mesh-части оружия
///
/// Обёртка с единственным child схлопывается; root тоже учитывается;
/// скрытые поддеревья (не надетые обвесы) пропускаются.
pub fn collect_mesh_parts<'a>(
    weapon_root: Entity,
    children: &Query<&Children>,
    visibility: &Query<&SceneVisibility>,
    parts: &'a Query<&MeshPart>,
) -> Vec<(Entity, &'a MeshPart)> {
    let root = collapse_single_child(weapon_root, children);
    visible_subtree(root, children, visibility)
        .into_iter()
        .filter_map(|entity| parts.get(entity).ok().map(|part| (entity, part)))
        .collect()
}
