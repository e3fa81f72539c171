//! Inspect mode integration test
//!
//! Проверяем:
//! - Вход/выход без input возвращает pose оружия и FOV камеры
//! - Inspect mode прячет UI и возвращает ровно спрятанное
//! - Кнопка отклоняет нажатия, пока держится любой interaction lock
//! - Override на камере меняет параметры только этой сессии

use bevy::ecs::event::Events;
use bevy::prelude::*;
use gunsmith_core::attachment::{AttachmentPanel, AttachmentSlot};
use gunsmith_core::inspect::*;
use gunsmith_core::paint::{paint_panel_bundle, PaintPanel};
use gunsmith_core::selection::*;
use gunsmith_core::shared::{InspectCamera, InspectConfigOverride, Rgba};
use gunsmith_core::tabs::{Hideable, HideablePhase, TabRegistry};
use gunsmith_core::*;

struct Scene {
    rifles: Entity,
    smgs: Entity,
    paint: Entity,
    hud: Entity,
    camera: Entity,
}

/// Helper: App после Startup и первого fixed tick
fn create_inspect_app(
    camera_override: Option<InspectConfigOverride>,
    selection: WeaponSelectionSettings,
) -> (App, Scene) {
    let mut app = create_headless_app();
    app.add_plugins(CustomizationPlugin);
    app.insert_resource(selection);

    let world = app.world_mut();
    let mut camera = world.spawn((
        InspectCamera::default(),
        Transform::from_xyz(0.0, 1.0, 3.0).looking_at(Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    ));
    if let Some(camera_override) = camera_override {
        camera.insert(camera_override);
    }
    let camera = camera.id();

    let rifles = world
        .spawn(weapon_type_tab_bundle(WeaponType::AssaultRifle, Transform::from_xyz(0.0, 1.0, 0.0)))
        .id();
    let smgs = world
        .spawn(weapon_type_tab_bundle(WeaponType::Smg, Transform::from_xyz(0.0, 1.0, 0.0)))
        .id();
    let paint = world.spawn(paint_panel_bundle(vec![Rgba::WHITE])).id();
    let hud = world.spawn(Hideable::default()).id();

    app.update();
    run_fixed_tick(&mut app);

    (
        app,
        Scene {
            rifles,
            smgs,
            paint,
            hud,
            camera,
        },
    )
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        run_fixed_tick(app);
    }
}

fn press(app: &mut App) {
    app.world_mut().send_event(InspectButtonPressed);
    run_fixed_tick(app);
}

fn phase(app: &App) -> InspectPhase {
    app.world().resource::<WeaponInspect>().phase()
}

fn camera_fov(app: &App, camera: Entity) -> f32 {
    app.world().get::<InspectCamera>(camera).unwrap().fov
}

fn inspection_log(app: &App) -> Vec<bool> {
    let events = app.world().resource::<Events<WeaponInInspection>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).map(|e| e.inspecting).collect()
}

fn slot_panels_visible(app: &mut App, weapon: Entity) -> Vec<bool> {
    let slots: Vec<Entity> = app
        .world_mut()
        .query::<(Entity, &AttachmentSlot)>()
        .iter(app.world())
        .filter(|(_, slot)| slot.owner == weapon)
        .map(|(entity, _)| entity)
        .collect();
    slots
        .into_iter()
        .map(|slot| app.world().get::<AttachmentPanel>(slot).unwrap().panel_visible)
        .collect()
}

#[test]
fn test_round_trip_restores_pose_fov_and_ui() {
    let (mut app, scene) = create_inspect_app(None, WeaponSelectionSettings::default());
    let m4 = app.world().get::<WeaponTypeTab>(scene.rifles).unwrap().entries[0].representation;
    let original = *app.world().get::<Transform>(m4).unwrap();
    let tabs_before = app.world().resource::<TabRegistry>().active_tabs().len();

    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::TransitioningIn);

    // UI спрятан
    assert!(app.world().resource::<TabRegistry>().inspect_mode());
    assert!(!app.world().get::<PaintPanel>(scene.paint).unwrap().is_visible());
    assert_eq!(app.world().get::<Hideable>(scene.hud).unwrap().phase(), HideablePhase::Hidden);
    assert!(!app.world().get::<WeaponTypeTab>(scene.rifles).unwrap().tab_button_visible());
    assert!(slot_panels_visible(&mut app, m4).iter().all(|v| !v));
    // оружие осталось выбранным
    assert!(app.world().get::<SceneVisibility>(m4).unwrap().is_visible());

    run_ticks(&mut app, 20);
    assert_eq!(phase(&app), InspectPhase::Inspecting);
    assert_ne!(app.world().get::<Transform>(m4).unwrap().translation, original.translation);
    assert!((camera_fov(&app, scene.camera) - 48.0).abs() < 1e-3);

    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::TransitioningOut);
    assert!(app.world().resource::<InspectButton>().exit_pending());
    assert!(app.world().resource::<TabRegistry>().inspect_mode(), "UI waits for the transition");

    run_ticks(&mut app, 20);
    assert_eq!(phase(&app), InspectPhase::Idle);

    let restored = app.world().get::<Transform>(m4).unwrap();
    assert_eq!(restored.translation, original.translation);
    assert_eq!(restored.rotation, original.rotation);
    assert_eq!(camera_fov(&app, scene.camera), 60.0);

    // UI вернулся ровно в прежнем составе
    let registry = app.world().resource::<TabRegistry>();
    assert!(!registry.inspect_mode());
    assert_eq!(registry.active_tabs().len(), tabs_before);
    assert!(app.world().get::<PaintPanel>(scene.paint).unwrap().is_visible());
    assert_eq!(app.world().get::<Hideable>(scene.hud).unwrap().phase(), HideablePhase::Shown);
    let rifles = app.world().get::<WeaponTypeTab>(scene.rifles).unwrap();
    assert!(rifles.is_open() && rifles.tab_button_visible());
    assert!(!app.world().get::<WeaponTypeTab>(scene.smgs).unwrap().is_open());
    assert!(slot_panels_visible(&mut app, m4).iter().all(|v| *v));

    assert_eq!(inspection_log(&app), vec![true, false]);
    assert!(!app.world().resource::<InspectButton>().is_inspecting());
}

#[test]
fn test_press_during_transition_is_rejected() {
    let (mut app, _scene) = create_inspect_app(None, WeaponSelectionSettings::default());

    press(&mut app);
    assert!(!app.world().resource::<InspectButton>().can_inspect());

    // второй клик не прерывает переход
    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::TransitioningIn);
    assert!(!app.world().resource::<InspectButton>().exit_pending());
}

#[test]
fn test_weapon_change_blocks_inspect_and_tabs_in_inspect_mode() {
    let selection = WeaponSelectionSettings {
        transition_enabled: true,
        ..Default::default()
    };
    let (mut app, scene) = create_inspect_app(None, selection);
    let vector = app.world().get::<WeaponTypeTab>(scene.smgs).unwrap().entries[0].representation;

    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    run_fixed_tick(&mut app);
    assert!(!app.world().resource::<InspectButton>().can_inspect());

    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::Idle, "slide in progress");

    run_ticks(&mut app, 20);
    assert!(app.world().resource::<InspectButton>().can_inspect());

    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::TransitioningIn);
    assert_eq!(app.world().resource::<WeaponInspect>().current_weapon(), Some(vector));

    // смена вкладки в inspect mode игнорируется
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.rifles });
    run_fixed_tick(&mut app);
    assert!(app.world().get::<WeaponTypeTab>(scene.smgs).unwrap().is_open());
    assert!(!app.world().get::<WeaponTypeTab>(scene.rifles).unwrap().is_open());
}

#[test]
fn test_drag_rotates_and_exit_restores_rotation() {
    let (mut app, scene) = create_inspect_app(None, WeaponSelectionSettings::default());
    let m4 = app.world().get::<WeaponTypeTab>(scene.rifles).unwrap().entries[0].representation;
    let original = *app.world().get::<Transform>(m4).unwrap();

    press(&mut app);
    run_ticks(&mut app, 20);
    let framed = app.world().get::<Transform>(m4).unwrap().rotation;

    for _ in 0..40 {
        app.world_mut().insert_resource(InspectInput {
            held: true,
            axis: Vec2::new(3.0, 1.0),
            scroll: 1.0,
            ..Default::default()
        });
        run_fixed_tick(&mut app);
    }
    app.world_mut().insert_resource(InspectInput {
        just_released: true,
        ..Default::default()
    });
    run_fixed_tick(&mut app);

    assert_ne!(app.world().get::<Transform>(m4).unwrap().rotation, framed);
    assert!(app.world().resource::<WeaponInspect>().drag().acceleration() == 0.0);
    assert!(camera_fov(&app, scene.camera) < 48.0);

    press(&mut app);
    run_ticks(&mut app, 20);
    let restored = app.world().get::<Transform>(m4).unwrap();
    assert_eq!(restored.rotation, original.rotation);
    assert_eq!(camera_fov(&app, scene.camera), 60.0);
}

#[test]
fn test_camera_override_applies_to_session() {
    let camera_override = InspectConfigOverride {
        distance_reduction: 0.5,
        right_offset: 0.0,
        left_offset: 0.0,
        fov_reduction: 0.5,
        fov_max: 100.0,
        fov_min: 20.0,
    };
    let (mut app, scene) = create_inspect_app(Some(camera_override), WeaponSelectionSettings::default());
    let m4 = app.world().get::<WeaponTypeTab>(scene.rifles).unwrap().entries[0].representation;

    press(&mut app);
    run_ticks(&mut app, 20);

    assert!((camera_fov(&app, scene.camera) - 30.0).abs() < 1e-3);
    let camera = *app.world().get::<Transform>(scene.camera).unwrap();
    let weapon = app.world().get::<Transform>(m4).unwrap();
    // камера в 3 м от оружия → 1.5 м после reduction
    assert!((camera.translation.distance(weapon.translation) - 1.5).abs() < 1e-3);

    // resource по умолчанию не тронут
    assert_eq!(*app.world().resource::<InspectConfig>(), InspectConfig::default());
}

#[test]
fn test_no_active_camera_keeps_ui() {
    let (mut app, scene) = create_inspect_app(None, WeaponSelectionSettings::default());
    app.world_mut().get_mut::<InspectCamera>(scene.camera).unwrap().active = false;

    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::Idle);
    assert!(!app.world().resource::<TabRegistry>().inspect_mode());
    assert!(app.world().get::<PaintPanel>(scene.paint).unwrap().is_visible());
    assert!(inspection_log(&app).is_empty());

    // без камеры inspect выключается насовсем
    assert!(app.world().resource::<InspectButton>().is_disabled());
    app.world_mut().get_mut::<InspectCamera>(scene.camera).unwrap().active = true;
    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::Idle);
    assert_eq!(app.world().resource::<InspectButton>().press(), ButtonAction::Rejected);
}

#[test]
fn test_same_tick_tab_switch_rejects_inspect() {
    let selection = WeaponSelectionSettings {
        transition_enabled: true,
        ..Default::default()
    };
    let (mut app, scene) = create_inspect_app(None, selection);
    // стартовый slide-in M4
    run_ticks(&mut app, 20);
    assert!(app.world().resource::<InspectButton>().can_inspect());

    let vector = app.world().get::<WeaponTypeTab>(scene.smgs).unwrap().entries[0].representation;
    let home = app.world().get::<WeaponRepresentation>(vector).unwrap().home.translation;

    // клик по вкладке и inspect в одном tick'е
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::Idle, "slide-in started this tick");
    assert!(!app.world().resource::<TabRegistry>().inspect_mode());

    run_ticks(&mut app, 20);
    assert_eq!(app.world().get::<Transform>(vector).unwrap().translation, home);

    // после slide inspect работает и возвращает оружие домой
    press(&mut app);
    assert_eq!(phase(&app), InspectPhase::TransitioningIn);
    run_ticks(&mut app, 20);
    press(&mut app);
    run_ticks(&mut app, 20);
    assert_eq!(phase(&app), InspectPhase::Idle);
    assert_eq!(app.world().get::<Transform>(vector).unwrap().translation, home);
}

#[test]
fn test_despawn_during_slide_releases_swap_lock() {
    let selection = WeaponSelectionSettings {
        transition_enabled: true,
        ..Default::default()
    };
    let (mut app, scene) = create_inspect_app(None, selection);
    run_ticks(&mut app, 20);

    let vector = app.world().get::<WeaponTypeTab>(scene.smgs).unwrap().entries[0].representation;
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    run_fixed_tick(&mut app);
    assert!(!app.world().resource::<InspectButton>().can_inspect());

    app.world_mut().entity_mut(vector).despawn();
    run_ticks(&mut app, 20);

    assert!(!app.world().resource::<MotionTracker>().any());
    assert!(app.world().resource::<InspectButton>().can_inspect());
}
