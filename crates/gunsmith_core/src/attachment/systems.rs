//! Attachment systems
//!
//! - `init_attachment_slots` - eligible список, pre-spawn обвесов, первый equip
//! - `sync_attachment_panels` - панели слотов открываются вместе с оружием
//! - `process_attachment_box_toggles` - эксклюзивный selection box
//! - `process_attachment_cycles` - next/previous

use bevy::prelude::*;

use super::{
    eligible_attachments, AttachmentBoxToggled, AttachmentCycleRequested, AttachmentEquipped, AttachmentPanel,
    AttachmentSlot, PersistedAttachment, SlotCycle, SlotDisabled, SlotDisplay, VisibilityChange,
};
use crate::item_catalog::ItemCatalog;
use crate::scene::{spawn_prefab, PrefabLibrary, SceneVisibility};
use crate::selection::WeaponSelectionChanged;
use crate::tabs::{ignore_effect, TabContext};

/// Инициализация новых слотов (один раз на слот)
///
/// Пустой eligible список - fatal для слота: log_error + SlotDisabled.
pub fn init_attachment_slots(
    mut commands: Commands,
    catalog: Res<ItemCatalog>,
    library: Res<PrefabLibrary>,
    mut slots: Query<
        (Entity, &AttachmentSlot, Option<&PersistedAttachment>, &mut AttachmentPanel),
        (Without<SlotCycle>, Without<SlotDisabled>),
    >,
) {
    for (slot_entity, slot, persisted, mut panel) in slots.iter_mut() {
        let eligible = eligible_attachments(&catalog, slot);

        // Pre-spawn: одно скрытое представление на обвес с prefab
        let representations: Vec<Option<Entity>> = eligible
            .iter()
            .map(|id| {
                let prefab = catalog.get(id)?.prefab.as_ref()?;
                let Some(blueprint) = library.get(prefab) else {
                    crate::logger::log_warning(&format!(
                        "⚠️ Attachment: prefab {:?} of {:?} not found",
                        prefab, id
                    ));
                    return None;
                };
                Some(spawn_prefab(&mut commands, prefab, blueprint, Transform::IDENTITY, Some(slot_entity)))
            })
            .collect();

        let cycle = SlotCycle::new(
            slot_entity,
            slot.attachment_type,
            eligible,
            representations,
            persisted.map(|p| &p.0),
            &catalog,
        );

        let mut cycle = match cycle {
            Ok(cycle) => cycle,
            Err(err) => {
                crate::logger::log_error(&format!("❌ Attachment: {}", err));
                panel.enabled = false;
                panel.box_open = false;
                commands.entity(slot_entity).insert(SlotDisabled);
                continue;
            }
        };

        // Представления ещё в command buffer - видимость тоже через commands
        if let Some(VisibilityChange::Show(representation)) = cycle.equip_current() {
            commands.entity(representation).insert(SceneVisibility::Visible);
        }
        panel.display = SlotDisplay::from_definition(catalog.get(cycle.equipped()));

        crate::logger::log(&format!(
            "✅ Attachment: slot {:?} ({:?}) ready, {} eligible, equipped {:?}",
            slot_entity,
            slot.attachment_type,
            cycle.eligible().len(),
            cycle.equipped()
        ));
        commands.entity(slot_entity).insert(cycle);
    }
}

/// Панели слотов открываются/закрываются вместе с показом их оружия
pub fn sync_attachment_panels(
    mut events: EventReader<WeaponSelectionChanged>,
    slots: Query<(Entity, &AttachmentSlot)>,
    mut tabs: TabContext,
) {
    for event in events.read() {
        for (slot_entity, slot) in slots.iter() {
            if slot.owner != event.representation {
                continue;
            }
            if event.selected {
                ignore_effect(tabs.open_tab(slot_entity, false), slot_entity);
            } else {
                ignore_effect(tabs.close_tab(slot_entity, false), slot_entity);
            }
        }
    }
}

/// Раскрыть selection box одного слота, свернув все остальные
pub fn process_attachment_box_toggles(
    mut events: EventReader<AttachmentBoxToggled>,
    mut panels: Query<(Entity, &mut AttachmentPanel)>,
) {
    for event in events.read() {
        let Ok((_, panel)) = panels.get(event.slot) else {
            crate::logger::log_error(&format!("❌ Attachment: {:?} has no AttachmentPanel", event.slot));
            continue;
        };
        if !panel.accepts_input() {
            continue;
        }
        let open = !panel.box_open;

        for (entity, mut panel) in panels.iter_mut() {
            if entity == event.slot {
                panel.box_open = open;
            } else if panel.box_open {
                panel.box_open = false;
            }
        }
    }
}

pub fn process_attachment_cycles(
    mut events: EventReader<AttachmentCycleRequested>,
    mut commands: Commands,
    catalog: Res<ItemCatalog>,
    mut slots: Query<(Option<&mut SlotCycle>, &mut AttachmentPanel)>,
    mut visibility: Query<&mut SceneVisibility>,
    mut equipped_events: EventWriter<AttachmentEquipped>,
) {
    for event in events.read() {
        let Ok((cycle, mut panel)) = slots.get_mut(event.slot) else {
            crate::logger::log_error(&format!("❌ Attachment: {:?} is not an attachment slot", event.slot));
            continue;
        };

        let Some(mut cycle) = cycle else {
            // нет eligible списка - слот выключается
            crate::logger::log_error(&format!(
                "❌ Attachment: slot {:?} has no eligible attachment list, disabling",
                event.slot
            ));
            panel.enabled = false;
            panel.box_open = false;
            commands.entity(event.slot).insert(SlotDisabled);
            continue;
        };

        if !panel.accepts_input() {
            continue;
        }

        for change in cycle.cycle(event.direction) {
            let (entity, visible) = match change {
                VisibilityChange::Show(entity) => (entity, true),
                VisibilityChange::Hide(entity) => (entity, false),
            };
            match visibility.get_mut(entity) {
                Ok(mut v) if visible => v.show(),
                Ok(mut v) => v.hide(),
                Err(_) => crate::logger::log_error(&format!(
                    "❌ Attachment: representation {:?} has no SceneVisibility",
                    entity
                )),
            }
        }

        panel.display = SlotDisplay::from_definition(catalog.get(cycle.equipped()));
        equipped_events.write(AttachmentEquipped {
            slot: event.slot,
            item: cycle.equipped().clone(),
        });
    }
}
