//! Paint systems
//!
//! - `bind_paint_to_selected_weapon` - на смену оружия: map → пул → привязка → выбор первой кнопки
//! - `process_material_selector_clicks` - эксклюзивный выбор материала
//! - `process_paint_swatch_clicks` / `process_paint_resets` - покраска

use bevy::prelude::*;

use super::{
    build_mesh_material_map, collect_mesh_parts, MaterialSelectorClicked, MeshMaterialCache, MeshPart,
    PaintPanel, PaintResetClicked, PaintSwatchClicked, SelectorBinding,
};
use crate::scene::SceneVisibility;
use crate::selection::WeaponSelectionChanged;
use crate::shared::Rgba;

pub fn bind_paint_to_selected_weapon(
    mut events: EventReader<WeaponSelectionChanged>,
    mut cache: ResMut<MeshMaterialCache>,
    mut panels: Query<&mut PaintPanel>,
    children: Query<&Children>,
    visibility: Query<&SceneVisibility>,
    parts: Query<&MeshPart>,
) {
    for event in events.read() {
        if !event.selected {
            panels.iter_mut().for_each(|mut panel| panel.reset_for_no_weapon());
            continue;
        }

        let weapon = event.representation;
        let map = cache
            .map_for(weapon, || {
                let found = collect_mesh_parts(weapon, &children, &visibility, &parts);
                build_mesh_material_map(weapon, &found)
            })
            .cloned();

        let map = match map {
            Ok(map) => map,
            Err(err) => {
                crate::logger::log_warning(&format!("⚠️ Paint: {}, paint disabled for this weapon", err));
                panels.iter_mut().for_each(|mut panel| panel.reset_for_no_weapon());
                continue;
            }
        };

        if map.is_empty() {
            crate::logger::log_warning(&format!("⚠️ Paint: weapon {:?} has no materials", weapon));
        }

        for mut panel in panels.iter_mut() {
            panel.bind_weapon(weapon, &map, |entry| {
                cache.default_color(entry.key, || {
                    parts
                        .get(entry.key.mesh)
                        .ok()
                        .and_then(|part| part.materials.get(entry.key.slot))
                        .map(|material| material.current_color())
                        .unwrap_or_default()
                })
            });
        }

        crate::logger::log(&format!(
            "✅ Paint: weapon {:?} bound, {} materials",
            weapon,
            map.len()
        ));
    }
}

pub fn process_material_selector_clicks(
    mut events: EventReader<MaterialSelectorClicked>,
    mut panels: Query<&mut PaintPanel>,
) {
    for event in events.read() {
        let Ok(mut panel) = panels.get_mut(event.panel) else {
            crate::logger::log_error(&format!("❌ Paint: {:?} has no PaintPanel", event.panel));
            continue;
        };
        if !panel.is_visible() {
            continue;
        }
        if !panel.select(event.index) {
            crate::logger::log_warning(&format!(
                "⚠️ Paint: selector {} of {:?} is not active",
                event.index, event.panel
            ));
        }
    }
}

pub fn process_paint_swatch_clicks(
    mut events: EventReader<PaintSwatchClicked>,
    panels: Query<&PaintPanel>,
    mut parts: Query<&mut MeshPart>,
) {
    for event in events.read() {
        let Ok(panel) = panels.get(event.panel) else {
            crate::logger::log_error(&format!("❌ Paint: {:?} has no PaintPanel", event.panel));
            continue;
        };
        if !panel.is_visible() {
            continue;
        }
        let (Some(binding), Some(color)) = (panel.chosen_binding(), panel.swatches().get(event.index)) else {
            continue;
        };
        apply_color(binding, *color, &mut parts);
    }
}

pub fn process_paint_resets(
    mut events: EventReader<PaintResetClicked>,
    panels: Query<&PaintPanel>,
    mut parts: Query<&mut MeshPart>,
) {
    for event in events.read() {
        let Ok(panel) = panels.get(event.panel) else {
            crate::logger::log_error(&format!("❌ Paint: {:?} has no PaintPanel", event.panel));
            continue;
        };
        if !panel.is_visible() {
            continue;
        }
        if let Some(binding) = panel.chosen_binding() {
            apply_color(binding, binding.default_color, &mut parts);
        }
    }
}

/// Покрасить материал на всех привязанных meshes
///
/// На каждом mesh красится первый sub-material с совпадающим именем.
pub fn apply_color(binding: &SelectorBinding, color: Rgba, parts: &mut Query<&mut MeshPart>) {
    for mesh in &binding.meshes {
        let Ok(mut part) = parts.get_mut(*mesh) else {
            crate::logger::log_warning(&format!("⚠️ Paint: mesh {:?} is gone", mesh));
            continue;
        };
        if let Some(material) = part.material_named_mut(&binding.material) {
            material.set_color(color);
        }
    }
}
