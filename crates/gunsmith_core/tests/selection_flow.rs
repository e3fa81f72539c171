//! Selection / attachment / paint integration test
//!
//! Headless App с demo каталогом, две вкладки (AR, SMG), paint панель.
//!
//! Проверяем:
//! - Не больше одной открытой вкладки типа оружия, deselect старого перед select нового
//! - Панели слотов ходят вместе со своим оружием
//! - Cycle обвесов меняет видимость представлений
//! - Покраска и reset к исходному цвету

use bevy::ecs::event::Events;
use bevy::prelude::*;
use gunsmith_core::attachment::*;
use gunsmith_core::paint::*;
use gunsmith_core::selection::*;
use gunsmith_core::shared::{InspectCamera, Rgba};
use gunsmith_core::*;

const RED: Rgba = Rgba::rgb(0.9, 0.1, 0.1);
const GREEN: Rgba = Rgba::rgb(0.1, 0.8, 0.2);

struct Scene {
    rifles: Entity,
    smgs: Entity,
    paint: Entity,
}

/// Helper: App с CustomizationPlugin после Startup и первого fixed tick
fn create_customization_app() -> (App, Scene) {
    let mut app = create_headless_app();
    app.add_plugins(CustomizationPlugin);

    let world = app.world_mut();
    world.spawn((InspectCamera::default(), Transform::from_xyz(0.0, 1.0, 3.0)));
    let rifles = world
        .spawn(weapon_type_tab_bundle(WeaponType::AssaultRifle, Transform::from_xyz(0.0, 1.0, 0.0)))
        .id();
    let smgs = world
        .spawn(weapon_type_tab_bundle(WeaponType::Smg, Transform::from_xyz(0.0, 1.0, 0.0)))
        .id();
    let paint = world.spawn(paint_panel_bundle(vec![RED, GREEN])).id();

    app.update();
    run_fixed_tick(&mut app);

    (app, Scene { rifles, smgs, paint })
}

fn representation(app: &App, tab: Entity, index: usize) -> Entity {
    app.world().get::<WeaponTypeTab>(tab).unwrap().entries[index].representation
}

fn visible(app: &App, entity: Entity) -> bool {
    app.world().get::<SceneVisibility>(entity).unwrap().is_visible()
}

fn slots_of(app: &mut App, weapon: Entity) -> Vec<(Entity, AttachmentType)> {
    app.world_mut()
        .query::<(Entity, &AttachmentSlot)>()
        .iter(app.world())
        .filter(|(_, slot)| slot.owner == weapon)
        .map(|(entity, slot)| (entity, slot.attachment_type))
        .collect()
}

fn selection_log(app: &App) -> Vec<(Entity, bool)> {
    let events = app.world().resource::<Events<WeaponSelectionChanged>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).map(|e| (e.representation, e.selected)).collect()
}

fn open_weapon_tabs(app: &mut App) -> Vec<WeaponType> {
    app.world_mut()
        .query::<&WeaponTypeTab>()
        .iter(app.world())
        .filter(|tab| tab.is_open())
        .map(|tab| tab.weapon_type)
        .collect()
}

#[test]
fn test_default_tab_selects_first_weapon() {
    let (mut app, scene) = create_customization_app();
    let m4 = representation(&app, scene.rifles, 0);
    let ak = representation(&app, scene.rifles, 1);

    assert_eq!(open_weapon_tabs(&mut app), vec![WeaponType::AssaultRifle]);
    assert!(visible(&app, m4));
    assert!(!visible(&app, ak));
    assert_eq!(selection_log(&app), vec![(m4, true)]);

    let paint = app.world().get::<PaintPanel>(scene.paint).unwrap();
    assert!(paint.is_visible());
    assert_eq!(paint.current_weapon(), Some(m4));
}

#[test]
fn test_tab_switch_keeps_single_open_tab() {
    let (mut app, scene) = create_customization_app();
    let m4 = representation(&app, scene.rifles, 0);
    let vector = representation(&app, scene.smgs, 0);

    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    run_fixed_tick(&mut app);

    assert_eq!(open_weapon_tabs(&mut app), vec![WeaponType::Smg]);
    assert!(!visible(&app, m4));
    assert!(visible(&app, vector));
    // старое оружие уходит раньше, чем приходит новое
    assert_eq!(selection_log(&app), vec![(m4, true), (m4, false), (vector, true)]);

    // повторный клик по открытой вкладке - no-op
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    run_fixed_tick(&mut app);
    assert_eq!(selection_log(&app).len(), 3);

    // панели слотов следуют за оружием
    for (slot, _) in slots_of(&mut app, m4) {
        assert!(!app.world().get::<AttachmentPanel>(slot).unwrap().panel_visible);
    }
    for (slot, _) in slots_of(&mut app, vector) {
        assert!(app.world().get::<AttachmentPanel>(slot).unwrap().panel_visible);
    }
}

#[test]
fn test_entry_click_swaps_weapon_within_tab() {
    let (mut app, scene) = create_customization_app();
    let m4 = representation(&app, scene.rifles, 0);
    let ak = representation(&app, scene.rifles, 1);

    app.world_mut().send_event(WeaponEntryClicked {
        tab: scene.rifles,
        index: 1,
    });
    run_fixed_tick(&mut app);

    assert!(!visible(&app, m4));
    assert!(visible(&app, ak));
    assert_eq!(selection_log(&app), vec![(m4, true), (m4, false), (ak, true)]);

    // повторный выбор того же entry - no-op
    app.world_mut().send_event(WeaponEntryClicked {
        tab: scene.rifles,
        index: 1,
    });
    run_fixed_tick(&mut app);
    assert_eq!(selection_log(&app).len(), 3);
}

#[test]
fn test_sight_cycle_wraps_and_toggles_visibility() {
    let (mut app, scene) = create_customization_app();
    let m4 = representation(&app, scene.rifles, 0);
    let (sight, _) = slots_of(&mut app, m4)
        .into_iter()
        .find(|(_, t)| *t == AttachmentType::Sight)
        .unwrap();

    let expected = ["sight_red_dot", "sight_scope", "attachment_empty"];
    let mut previous: Option<Entity> = None;

    for item in expected {
        app.world_mut().send_event(AttachmentCycleRequested {
            slot: sight,
            direction: CycleDirection::Next,
        });
        run_fixed_tick(&mut app);

        let cycle = app.world().get::<SlotCycle>(sight).unwrap();
        assert_eq!(cycle.equipped(), &ItemId::from(item));
        let shown = cycle.equipped_representation();

        if let Some(previous) = previous {
            assert!(!visible(&app, previous), "previous attachment hidden");
        }
        if let Some(shown) = shown {
            assert!(visible(&app, shown));
        }
        previous = shown;
    }

    let events = app.world().resource::<Events<AttachmentEquipped>>();
    let mut cursor = events.get_cursor();
    let equipped: Vec<ItemId> = cursor.read(events).map(|e| e.item.clone()).collect();
    assert_eq!(equipped, expected.iter().map(|s| ItemId::from(*s)).collect::<Vec<_>>());
}

#[test]
fn test_hidden_slot_panel_ignores_cycles() {
    let (mut app, scene) = create_customization_app();
    let ak = representation(&app, scene.rifles, 1);
    let (sight, _) = slots_of(&mut app, ak)
        .into_iter()
        .find(|(_, t)| *t == AttachmentType::Sight)
        .unwrap();

    app.world_mut().send_event(AttachmentCycleRequested {
        slot: sight,
        direction: CycleDirection::Next,
    });
    run_fixed_tick(&mut app);

    let cycle = app.world().get::<SlotCycle>(sight).unwrap();
    assert_eq!(cycle.equipped(), &ItemId::from("attachment_empty"));
}

#[test]
fn test_box_toggle_is_exclusive() {
    let (mut app, scene) = create_customization_app();
    let m4 = representation(&app, scene.rifles, 0);
    let slots = slots_of(&mut app, m4);
    let (first, second) = (slots[0].0, slots[1].0);

    app.world_mut().send_event(AttachmentBoxToggled { slot: first });
    run_fixed_tick(&mut app);
    assert!(app.world().get::<AttachmentPanel>(first).unwrap().box_open);

    app.world_mut().send_event(AttachmentBoxToggled { slot: second });
    run_fixed_tick(&mut app);
    assert!(!app.world().get::<AttachmentPanel>(first).unwrap().box_open);
    assert!(app.world().get::<AttachmentPanel>(second).unwrap().box_open);
}

#[test]
fn test_paint_binds_weapon_materials() {
    let (app, scene) = create_customization_app();
    let paint = app.world().get::<PaintPanel>(scene.paint).unwrap();

    // Receiver/Handguard/Stock: Metal, Polymer, Furniture
    assert_eq!(paint.pool().active_count(), 3);
    assert_eq!(paint.chosen(), Some(0));
    let metal = paint.chosen_binding().unwrap();
    assert_eq!(metal.material, "Metal");
    assert_eq!(metal.meshes.len(), 2);
}

#[test]
fn test_swatch_paints_all_meshes_and_reset_restores_default() {
    let (mut app, scene) = create_customization_app();
    let binding = app
        .world()
        .get::<PaintPanel>(scene.paint)
        .unwrap()
        .chosen_binding()
        .unwrap()
        .clone();

    app.world_mut().send_event(PaintSwatchClicked {
        panel: scene.paint,
        index: 0,
    });
    run_fixed_tick(&mut app);

    for mesh in &binding.meshes {
        let part = app.world().get::<MeshPart>(*mesh).unwrap();
        let metal = part.materials.iter().find(|m| m.name == "Metal").unwrap();
        assert_eq!(metal.current_color(), RED);
    }

    app.world_mut().send_event(PaintResetClicked { panel: scene.paint });
    run_fixed_tick(&mut app);

    for mesh in &binding.meshes {
        let part = app.world().get::<MeshPart>(*mesh).unwrap();
        let metal = part.materials.iter().find(|m| m.name == "Metal").unwrap();
        assert_eq!(metal.current_color(), binding.default_color);
    }
    assert_ne!(binding.default_color, RED);
}

#[test]
fn test_default_color_survives_weapon_swap() {
    let (mut app, scene) = create_customization_app();
    let original = app
        .world()
        .get::<PaintPanel>(scene.paint)
        .unwrap()
        .chosen_binding()
        .unwrap()
        .default_color;

    app.world_mut().send_event(PaintSwatchClicked {
        panel: scene.paint,
        index: 1,
    });
    run_fixed_tick(&mut app);

    // уйти на SMG и вернуться: map перестраивается, default остаётся исходным
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    run_fixed_tick(&mut app);
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.rifles });
    run_fixed_tick(&mut app);

    let paint = app.world().get::<PaintPanel>(scene.paint).unwrap();
    let metal = paint.chosen_binding().unwrap();
    assert_eq!(metal.material, "Metal");
    assert_eq!(metal.default_color, original);
}

#[test]
fn test_equipped_attachment_joins_paint_channels() {
    let (mut app, scene) = create_customization_app();
    let m4 = representation(&app, scene.rifles, 0);
    let (sight, _) = slots_of(&mut app, m4)
        .into_iter()
        .find(|(_, t)| *t == AttachmentType::Sight)
        .unwrap();

    app.world_mut().send_event(AttachmentCycleRequested {
        slot: sight,
        direction: CycleDirection::Next,
    });
    run_fixed_tick(&mut app);

    // перевыбор оружия перестраивает map (AlwaysRebuild)
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.smgs });
    run_fixed_tick(&mut app);
    app.world_mut().send_event(WeaponTypeTabClicked { tab: scene.rifles });
    run_fixed_tick(&mut app);

    let paint = app.world().get::<PaintPanel>(scene.paint).unwrap();
    assert_eq!(paint.pool().active_count(), 4);
    let materials: Vec<&str> = paint
        .pool()
        .selectors()
        .iter()
        .filter_map(|s| s.binding.as_ref().map(|b| b.material.as_str()))
        .collect();
    assert!(materials.contains(&"Optic"));
}
