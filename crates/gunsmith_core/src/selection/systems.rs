//! Weapon selection systems
//!
//! - `generate_weapon_tabs` (Startup) - кнопки + скрытые представления оружия
//! - `open_default_tabs` (PostStartup) - paint панели + вкладка по умолчанию
//! - `process_weapon_type_tab_clicks` / `process_weapon_entry_clicks` - UI intents
//! - `advance_weapon_motions` / `advance_camera_blend` - тики переходов

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::{
    CameraBlend, MotionTracker, SelectionEffect, WeaponEntry, WeaponEntryClicked, WeaponMotion,
    WeaponRepresentation, WeaponSelectionChanged, WeaponSelectionSettings, WeaponTypeTab,
    WeaponTypeTabClicked,
};
use crate::item_catalog::ItemCatalog;
use crate::scene::{spawn_prefab, PrefabLibrary, SceneVisibility};
use crate::shared::{InteractionLockChanged, LockSource};
use crate::tabs::{ignore_effect, TabContext, TabKind};

// ============================================================================
// SelectionApplier
// ============================================================================

/// Применяет `SelectionEffect` к представлениям оружия
///
/// Select: показать (+ slide-in от `home - right * offset`), уведомить `(repr, true)`.
/// Deselect: уведомить `(repr, false)`, скрыть (или slide-out и скрыть на финише).
#[derive(SystemParam)]
pub struct SelectionApplier<'w, 's> {
    commands: Commands<'w, 's>,
    settings: Res<'w, WeaponSelectionSettings>,
    tracker: ResMut<'w, MotionTracker>,
    representations: Query<
        'w,
        's,
        (
            &'static WeaponRepresentation,
            &'static mut Transform,
            &'static mut SceneVisibility,
        ),
    >,
    selection_events: EventWriter<'w, WeaponSelectionChanged>,
    lock_events: EventWriter<'w, InteractionLockChanged>,
}

impl SelectionApplier<'_, '_> {
    pub fn apply_all(&mut self, effects: impl IntoIterator<Item = SelectionEffect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn apply(&mut self, effect: SelectionEffect) {
        match effect {
            SelectionEffect::Select(representation) => self.select(representation),
            SelectionEffect::Deselect(representation) => self.deselect(representation),
        }
    }

    fn select(&mut self, representation: Entity) {
        let Ok((weapon, mut transform, mut visibility)) = self.representations.get_mut(representation) else {
            crate::logger::log_error(&format!(
                "❌ Selection: {:?} is not a weapon representation",
                representation
            ));
            return;
        };

        let item = weapon.item.clone();
        let home = weapon.home;
        visibility.show();

        if self.settings.transition_enabled {
            let right = home.rotation * Vec3::X;
            let start = home.translation - right * self.settings.transition_offset;
            transform.translation = start;
            self.commands.entity(representation).insert(WeaponMotion::new(
                start,
                home.translation,
                self.settings.transition_duration,
                false,
            ));
            begin_motion(&mut self.tracker, &mut self.lock_events, representation);
        } else {
            *transform = home;
        }

        crate::logger::log(&format!("✅ Selection: weapon {:?} selected ({:?})", item, representation));
        self.selection_events.write(WeaponSelectionChanged {
            representation,
            selected: true,
        });
    }

    fn deselect(&mut self, representation: Entity) {
        self.selection_events.write(WeaponSelectionChanged {
            representation,
            selected: false,
        });

        let Ok((weapon, transform, mut visibility)) = self.representations.get_mut(representation) else {
            crate::logger::log_error(&format!(
                "❌ Selection: {:?} is not a weapon representation",
                representation
            ));
            return;
        };

        let item = weapon.item.clone();
        let right = weapon.home.rotation * Vec3::X;

        if self.settings.transition_enabled {
            let start = transform.translation;
            let end = start + right * self.settings.transition_offset;
            self.commands.entity(representation).insert(WeaponMotion::new(
                start,
                end,
                self.settings.transition_duration,
                true,
            ));
            begin_motion(&mut self.tracker, &mut self.lock_events, representation);
        } else {
            visibility.hide();
        }

        crate::logger::log(&format!("Selection: weapon {:?} deselected ({:?})", item, representation));
    }

    /// Lock broadcast через тот же writer (второй EventWriter в системе конфликтует)
    pub fn write_lock(&mut self, source: LockSource, locked: bool) {
        self.lock_events.write(InteractionLockChanged { source, locked });
    }
}

/// Первый motion поднимает `WeaponSwap` lock (поля, а не `&mut self`: представление ещё заимствовано)
fn begin_motion(
    tracker: &mut MotionTracker,
    lock_events: &mut EventWriter<InteractionLockChanged>,
    representation: Entity,
) {
    if tracker.begin(representation) {
        lock_events.write(InteractionLockChanged {
            source: LockSource::WeaponSwap,
            locked: true,
        });
    }
}

// ============================================================================
// Startup
// ============================================================================

/// Сгенерировать entries вкладок и заспавнить представления оружия (скрытыми)
pub fn generate_weapon_tabs(
    mut commands: Commands,
    catalog: Res<ItemCatalog>,
    library: Res<PrefabLibrary>,
    mut tabs: Query<&mut WeaponTypeTab>,
) {
    if catalog.weapons().is_empty() {
        crate::logger::log_error("❌ Selection: item catalog weapon list is not set!");
        return;
    }

    for mut tab in tabs.iter_mut() {
        let spawn = tab.spawn;
        let weapon_type = tab.weapon_type;

        for definition in catalog.weapons_of_type(weapon_type) {
            let Some(prefab) = &definition.prefab else {
                crate::logger::log_warning(&format!(
                    "⚠️ Selection: weapon {:?} has no prefab, skipped",
                    definition.id
                ));
                continue;
            };
            let Some(blueprint) = library.get(prefab) else {
                crate::logger::log_error(&format!(
                    "❌ Selection: prefab {:?} of weapon {:?} not found",
                    prefab, definition.id
                ));
                continue;
            };

            let representation = spawn_prefab(&mut commands, prefab, blueprint, spawn, None);
            commands.entity(representation).insert(WeaponRepresentation {
                item: definition.id.clone(),
                home: spawn,
            });
            tab.entries.push(WeaponEntry::new(definition, representation));
        }

        crate::logger::log_info(&format!(
            "Selection: tab {} generated with {} weapons",
            weapon_type.label(),
            tab.entries.len()
        ));
    }
}

/// Открыть paint панели и вкладку типа оружия по умолчанию
pub fn open_default_tabs(
    mut tabs: TabContext,
    mut applier: SelectionApplier,
    settings: Res<WeaponSelectionSettings>,
) {
    for panel in tabs.tabs_of_kind(TabKind::PaintPanel) {
        ignore_effect(tabs.open_tab(panel, false), panel);
    }

    // все weapon-вкладки стартуют закрытыми
    for tab in tabs.tabs_of_kind(TabKind::WeaponTypePanel) {
        let effects: Vec<_> = tabs.close_tab(tab, false).into_iter().collect();
        applier.apply_all(effects);
    }

    let Some(default_tab) = tabs.default_weapon_tab(settings.default_weapon_type) else {
        crate::logger::log_warning("⚠️ Selection: no weapon type tabs to open");
        return;
    };

    if let Some(effects) = tabs.change_weapon_type_tab(default_tab) {
        applier.apply_all(effects);
    }
}

// ============================================================================
// Intents
// ============================================================================

pub fn process_weapon_type_tab_clicks(
    mut events: EventReader<WeaponTypeTabClicked>,
    mut tabs: TabContext,
    mut applier: SelectionApplier,
    mut blend: ResMut<CameraBlend>,
) {
    for event in events.read() {
        let Some(effects) = tabs.change_weapon_type_tab(event.tab) else {
            continue;
        };
        applier.apply_all(effects);

        if blend.start(applier.settings.camera_blend_time) {
            applier.write_lock(LockSource::CameraBlend, true);
        }
    }
}

pub fn process_weapon_entry_clicks(
    mut events: EventReader<WeaponEntryClicked>,
    mut tabs: TabContext,
    mut applier: SelectionApplier,
) {
    for event in events.read() {
        let effects = tabs.select_weapon_entry(event.tab, event.index);
        applier.apply_all(effects);
    }
}

// ============================================================================
// Ticks
// ============================================================================

pub fn advance_weapon_motions(
    mut commands: Commands,
    time: Res<Time<Fixed>>,
    mut tracker: ResMut<MotionTracker>,
    mut motions: Query<(Entity, &mut WeaponMotion, &mut Transform, &mut SceneVisibility)>,
    mut lock_events: EventWriter<InteractionLockChanged>,
) {
    let delta = time.timestep().as_secs_f32();

    for (entity, mut motion, mut transform, mut visibility) in motions.iter_mut() {
        let (position, finished) = motion.advance(delta);
        transform.translation = position;
        if !finished {
            continue;
        }

        if motion.hide_on_finish() {
            visibility.hide();
        }
        commands.entity(entity).remove::<WeaponMotion>();

        if tracker.finish(entity) {
            lock_events.write(InteractionLockChanged {
                source: LockSource::WeaponSwap,
                locked: false,
            });
        }
    }

    // despawn посреди slide: motion исчез, finish не пришёл
    if tracker.retain_moving(|entity| motions.contains(entity)) {
        crate::logger::log_warning("⚠️ Selection: moving weapon despawned, releasing swap lock");
        lock_events.write(InteractionLockChanged {
            source: LockSource::WeaponSwap,
            locked: false,
        });
    }
}

pub fn advance_camera_blend(
    time: Res<Time<Fixed>>,
    mut blend: ResMut<CameraBlend>,
    mut lock_events: EventWriter<InteractionLockChanged>,
) {
    if blend.advance(time.timestep().as_secs_f32()) {
        lock_events.write(InteractionLockChanged {
            source: LockSource::CameraBlend,
            locked: false,
        });
    }
}
