//! Prefab blueprints & spawn
//!
//! Blueprint - дерево частей. Часть может нести материалы (→ `MeshPart`)
//! и/или точку крепления обвеса (→ `AttachmentSlot`).
//! Позже blueprints будут резолвиться из ассетов host'а; пока hardcoded demo или RON.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::SceneVisibility;
use crate::attachment::{slot_bundle, AttachmentSlot};
use crate::error::{CustomizationError, CustomizationResult};
use crate::item_catalog::{AttachmentType, ItemId, PrefabRef};
use crate::paint::{MeshPart, PaintMaterial};
use crate::shared::Rgba;

/// Точка крепления обвеса внутри prefab'а оружия
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SlotBlueprint {
    pub attachment_type: AttachmentType,
    /// Обвесы, несовместимые с этим оружием (исключаются из цикла слота)
    #[serde(default)]
    pub incompatible: Vec<ItemId>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartBlueprint {
    pub name: String,
    #[serde(default)]
    pub materials: Vec<PaintMaterial>,
    #[serde(default)]
    pub slot: Option<SlotBlueprint>,
    #[serde(default)]
    pub children: Vec<PartBlueprint>,
}

impl PartBlueprint {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            materials: Vec::new(),
            slot: None,
            children: Vec::new(),
        }
    }

    pub fn with_material(mut self, material: PaintMaterial) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_slot(mut self, attachment_type: AttachmentType, incompatible: &[&str]) -> Self {
        self.slot = Some(SlotBlueprint {
            attachment_type,
            incompatible: incompatible.iter().map(|id| ItemId::from(*id)).collect(),
        });
        self
    }

    pub fn with_child(mut self, child: PartBlueprint) -> Self {
        self.children.push(child);
        self
    }
}

/// Prefab = список top-level частей под root entity
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefabBlueprint {
    pub parts: Vec<PartBlueprint>,
}

/// Маркер root entity заспавненного prefab'а
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub struct PrefabInstance {
    pub prefab: PrefabRef,
}

/// Библиотека blueprints (resource)
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefabLibrary {
    blueprints: HashMap<PrefabRef, PrefabBlueprint>,
}

impl PrefabLibrary {
    pub fn insert(&mut self, prefab: &str, blueprint: PrefabBlueprint) {
        self.blueprints.insert(prefab.into(), blueprint);
    }

    pub fn with(mut self, prefab: &str, blueprint: PrefabBlueprint) -> Self {
        self.insert(prefab, blueprint);
        self
    }

    pub fn get(&self, prefab: &PrefabRef) -> Option<&PrefabBlueprint> {
        self.blueprints.get(prefab)
    }

    pub fn from_ron_str(source: &str) -> CustomizationResult<Self> {
        ron::from_str(source).map_err(|e| CustomizationError::parse("prefab library", e))
    }

    /// Demo blueprints для `ItemCatalog::demo()`
    pub fn demo() -> Self {
        let gunmetal = Rgba::rgb(0.22, 0.23, 0.25);
        let polymer = Rgba::rgb(0.08, 0.08, 0.08);
        let tan = Rgba::rgb(0.76, 0.65, 0.48);

        let rifle = |muzzle_incompatible: &[&str]| PrefabBlueprint {
            parts: vec![PartBlueprint::new("Model")
                .with_child(
                    PartBlueprint::new("Receiver")
                        .with_material(PaintMaterial::new("Metal", gunmetal))
                        .with_material(PaintMaterial::new("Polymer", polymer).with_base_color(polymer)),
                )
                .with_child(PartBlueprint::new("Handguard").with_material(PaintMaterial::new("Metal", gunmetal)))
                .with_child(
                    PartBlueprint::new("Stock").with_material(PaintMaterial::new("Furniture", tan).with_base_color(tan)),
                )
                .with_child(PartBlueprint::new("SightMount").with_slot(AttachmentType::Sight, &[]))
                .with_child(PartBlueprint::new("Muzzle").with_slot(AttachmentType::Barrel, muzzle_incompatible))
                .with_child(PartBlueprint::new("RailBottom").with_slot(AttachmentType::Grip, &[]))],
        };

        let handgun = PrefabBlueprint {
            parts: vec![PartBlueprint::new("Model")
                .with_child(PartBlueprint::new("Slide").with_material(PaintMaterial::new("Metal", gunmetal)))
                .with_child(
                    PartBlueprint::new("Frame").with_material(PaintMaterial::new("Polymer", polymer).with_base_color(polymer)),
                )
                .with_child(PartBlueprint::new("Muzzle").with_slot(AttachmentType::Barrel, &["barrel_compensator"]))],
        };

        let attachment = |material: PaintMaterial| PrefabBlueprint {
            parts: vec![PartBlueprint::new("Model").with_material(material)],
        };

        PrefabLibrary::default()
            .with("weapon_ar_m4", rifle(&[]))
            .with("weapon_ar_ak", rifle(&["barrel_suppressor"]))
            .with("weapon_smg_vector", rifle(&[]))
            .with("weapon_lmg_m249", rifle(&["barrel_suppressor"]))
            .with("weapon_sr_bolt", rifle(&["barrel_compensator"]))
            .with("weapon_hg_p226", handgun)
            .with("attachment_sight_red_dot", attachment(PaintMaterial::new("Optic", polymer)))
            .with("attachment_sight_scope", attachment(PaintMaterial::new("Optic", polymer)))
            .with("attachment_barrel_suppressor", attachment(PaintMaterial::new("Metal", gunmetal)))
            .with("attachment_barrel_compensator", attachment(PaintMaterial::new("Metal", gunmetal)))
            .with("attachment_grip_vertical", attachment(PaintMaterial::new("Polymer", polymer).with_base_color(polymer)))
    }
}

/// Заспавнить prefab скрытым
///
/// Root получает `PrefabInstance` + `SceneVisibility::Hidden`, части - `ChildOf` цепочку.
/// Части со слотами становятся attachment слотами, принадлежащими root.
pub fn spawn_prefab(
    commands: &mut Commands,
    prefab: &PrefabRef,
    blueprint: &PrefabBlueprint,
    transform: Transform,
    parent: Option<Entity>,
) -> Entity {
    let root = commands
        .spawn((
            Name::new(prefab.0.clone()),
            PrefabInstance { prefab: prefab.clone() },
            transform,
            SceneVisibility::Hidden,
        ))
        .id();

    if let Some(parent) = parent {
        commands.entity(root).insert(ChildOf(parent));
    }

    for part in &blueprint.parts {
        spawn_part(commands, part, root, root);
    }

    root
}

fn spawn_part(commands: &mut Commands, part: &PartBlueprint, parent: Entity, prefab_root: Entity) {
    let mut entity = commands.spawn((
        Name::new(part.name.clone()),
        Transform::default(),
        SceneVisibility::Visible,
        ChildOf(parent),
    ));

    if !part.materials.is_empty() {
        entity.insert(MeshPart::new(part.materials.clone()));
    }

    if let Some(slot) = &part.slot {
        entity.insert(slot_bundle(AttachmentSlot {
            attachment_type: slot.attachment_type,
            incompatible: slot.incompatible.clone(),
            owner: prefab_root,
        }));
    }

    let id = entity.id();
    for child in &part.children {
        spawn_part(commands, child, id, prefab_root);
    }
}
