//! Inspect systems: кнопка, tick контроллера, завершение выхода

use bevy::prelude::*;

use super::{
    ButtonAction, InspectButton, InspectButtonPressed, InspectConfig, InspectInput, InspectProgress,
    WeaponInInspection, WeaponInspect,
};
use crate::selection::{CameraBlend, MotionTracker, WeaponRepresentation, WeaponSelectionChanged};
use crate::error::CustomizationError;
use crate::shared::{InspectCamera, InspectConfigOverride, InteractionLockChanged, LockSource};
use crate::tabs::TabContext;

/// Текущее оружие для inspect = последнее выбранное
pub fn track_current_inspect_weapon(
    mut events: EventReader<WeaponSelectionChanged>,
    mut controller: ResMut<WeaponInspect>,
) {
    for event in events.read() {
        controller.set_current_weapon(event.representation, event.selected);
    }
}

/// Обработка нажатий inspect кнопки
///
/// Enter: контроллер Idle + есть текущее оружие + активная камера →
/// inspect mode в tabs, `WeaponInInspection(true)`, lock перехода.
/// Slide/camera blend, начатые в этом же tick'е, ещё не дошли до `can_inspect`
/// (Locks идёт после Inspect), поэтому проверяются напрямую.
/// Нет активной камеры → кнопка выключается.
/// Exit: запуск обратного перехода, UI вернётся в `finish_inspect_exit`.
#[allow(clippy::too_many_arguments)]
pub fn process_inspect_button(
    mut presses: EventReader<InspectButtonPressed>,
    mut button: ResMut<InspectButton>,
    mut controller: ResMut<WeaponInspect>,
    config: Res<InspectConfig>,
    tracker: Res<MotionTracker>,
    blend: Res<CameraBlend>,
    mut tabs: TabContext,
    weapons: Query<&Transform, With<WeaponRepresentation>>,
    cameras: Query<
        (Entity, &Transform, &InspectCamera, Option<&InspectConfigOverride>),
        Without<WeaponRepresentation>,
    >,
    mut inspection_events: EventWriter<WeaponInInspection>,
    mut lock_events: EventWriter<InteractionLockChanged>,
) {
    for _ in presses.read() {
        match button.press() {
            ButtonAction::Rejected if button.is_disabled() => {
                crate::logger::log("🔍 Inspect button: press ignored (disabled)");
            }
            ButtonAction::Rejected => {
                crate::logger::log("🔍 Inspect button: press rejected (locked)");
            }
            ButtonAction::Enter => {
                if tracker.any() || blend.is_blending() {
                    crate::logger::log("🔍 Inspect button: press rejected (weapon change in progress)");
                    continue;
                }
                if !controller.can_begin() {
                    crate::logger::log_warning("⚠️ Inspect: no current weapon or transition running");
                    continue;
                }
                let Some(weapon) = controller.current_weapon() else {
                    continue;
                };
                let Some((camera, camera_transform, inspect_camera, camera_override)) =
                    cameras.iter().find(|(_, _, cam, _)| cam.active)
                else {
                    crate::logger::log_error(&format!("❌ Inspect: {}, inspect disabled", CustomizationError::MissingCamera));
                    button.disable();
                    continue;
                };
                let Ok(weapon_transform) = weapons.get(weapon) else {
                    crate::logger::log_error(&format!("❌ Inspect: weapon {:?} has no Transform", weapon));
                    continue;
                };

                let session_config = config.with_override(camera_override);
                if let Err(err) = controller.begin(
                    weapon_transform,
                    camera,
                    camera_transform,
                    inspect_camera.fov,
                    session_config,
                ) {
                    crate::logger::log_error(&format!("❌ Inspect: {}", err));
                    continue;
                }

                button.mark_entered();
                tabs.set_inspect_mode(true);
                inspection_events.write(WeaponInInspection { inspecting: true });
                lock_events.write(InteractionLockChanged {
                    source: LockSource::InspectTransition,
                    locked: true,
                });
                crate::logger::log_info(&format!("🔍 Inspect: entering with {:?}", weapon));
            }
            ButtonAction::Exit => {
                let Some(session) = controller.session() else {
                    // сессия прервана: вернуть только UI
                    button.mark_exit_pending();
                    continue;
                };
                let (weapon, camera) = (session.weapon, session.camera);
                let (Ok(weapon_transform), Ok((_, _, inspect_camera, _))) =
                    (weapons.get(weapon), cameras.get(camera))
                else {
                    crate::logger::log_error("❌ Inspect: session weapon or camera is gone");
                    continue;
                };

                if !controller.end(weapon_transform, inspect_camera.fov) {
                    crate::logger::log("🔍 Inspect: exit ignored, not inspecting yet");
                    continue;
                }

                button.mark_exit_pending();
                lock_events.write(InteractionLockChanged {
                    source: LockSource::InspectTransition,
                    locked: true,
                });
                crate::logger::log_info("🔍 Inspect: exiting");
            }
        }
    }
}

/// Fixed tick контроллера: переходы, drag, scroll FOV
pub fn advance_inspect(
    time: Res<Time<Fixed>>,
    input: Res<InspectInput>,
    mut controller: ResMut<WeaponInspect>,
    mut weapons: Query<&mut Transform, With<WeaponRepresentation>>,
    mut cameras: Query<&mut InspectCamera>,
    mut inspection_events: EventWriter<WeaponInInspection>,
    mut lock_events: EventWriter<InteractionLockChanged>,
) {
    let Some((weapon, camera)) = controller.session().map(|s| (s.weapon, s.camera)) else {
        return;
    };

    let (Ok(mut weapon_transform), Ok(mut inspect_camera)) = (weapons.get_mut(weapon), cameras.get_mut(camera))
    else {
        crate::logger::log_error("❌ Inspect: session weapon or camera despawned, aborting");
        controller.abort();
        lock_events.write(InteractionLockChanged {
            source: LockSource::InspectTransition,
            locked: false,
        });
        inspection_events.write(WeaponInInspection { inspecting: false });
        return;
    };

    let delta = time.timestep().as_secs_f32();
    let progress = controller.advance(delta, &input, &mut weapon_transform, &mut inspect_camera.fov);

    match progress {
        InspectProgress::None => {}
        InspectProgress::EnteredInspecting => {
            lock_events.write(InteractionLockChanged {
                source: LockSource::InspectTransition,
                locked: false,
            });
            crate::logger::log("🔍 Inspect: framing done, drag enabled");
        }
        InspectProgress::ExitFinished => {
            lock_events.write(InteractionLockChanged {
                source: LockSource::InspectTransition,
                locked: false,
            });
            inspection_events.write(WeaponInInspection { inspecting: false });
            crate::logger::log("🔍 Inspect: weapon restored");
        }
    }
}

/// Выход завершается, когда lock перехода снят → UI возвращается
pub fn finish_inspect_exit(mut button: ResMut<InspectButton>, mut tabs: TabContext) {
    if button.finish_exit() {
        tabs.set_inspect_mode(false);
        crate::logger::log_info("🔍 Inspect: exited, UI restored");
    }
}

/// Per-tick поля input'а обнуляются в конце tick'а
pub fn clear_inspect_input(mut input: ResMut<InspectInput>) {
    input.end_tick();
}
