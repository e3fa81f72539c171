//! Headless demo gunsmith_core
//!
//! Скриптованная сессия без рендера: смена вкладки, обвесы, покраска, inspect.
//! Опционально первым аргументом - путь к RON настройкам.

use bevy::prelude::*;
use gunsmith_core::attachment::{AttachmentCycleRequested, AttachmentSlot, CycleDirection, SlotCycle};
use gunsmith_core::inspect::{InspectButtonPressed, InspectInput, WeaponInspect};
use gunsmith_core::paint::{paint_panel_bundle, PaintPanel, PaintSwatchClicked};
use gunsmith_core::selection::{weapon_type_tab_bundle, WeaponTypeTab, WeaponTypeTabClicked};
use gunsmith_core::shared::{InspectCamera, Rgba};
use gunsmith_core::tabs::Hideable;
use gunsmith_core::*;

fn main() {
    let mut app = create_headless_app();
    app.add_plugins(CustomizationPlugin);

    if let Some(path) = std::env::args().nth(1) {
        match std::fs::read_to_string(&path)
            .map_err(|e| CustomizationError::parse("settings file", e))
            .and_then(|source| CustomizationSettings::from_ron_str(&source))
        {
            Ok(settings) => settings.apply(&mut app),
            Err(err) => log_error(&format!("❌ Demo: {} ({}), using defaults", err, path)),
        }
    }

    let world = app.world_mut();
    world.spawn((InspectCamera::default(), Transform::from_xyz(0.0, 1.2, 3.0)));
    let tabs: Vec<Entity> = WeaponType::ALL
        .iter()
        .map(|weapon_type| {
            world
                .spawn(weapon_type_tab_bundle(*weapon_type, Transform::from_xyz(0.0, 1.0, 0.0)))
                .id()
        })
        .collect();
    let paint_panel = world
        .spawn(paint_panel_bundle(vec![
            Rgba::rgb(0.8, 0.1, 0.1),
            Rgba::rgb(0.1, 0.5, 0.2),
            Rgba::rgb(0.9, 0.8, 0.3),
        ]))
        .id();
    world.spawn(Hideable::with_animation(0.2, 0.2));

    // Startup + PostStartup
    app.update();
    run_ticks(&mut app, 2);
    report(&mut app, "startup");

    // Вторая вкладка (SMG)
    if let Some(tab) = tabs.get(1) {
        app.world_mut().send_event(WeaponTypeTabClicked { tab: *tab });
        run_ticks(&mut app, 30);
        report(&mut app, "tab switch");
    }

    // Следующий обвес на каждом слоте текущего оружия
    let current = current_weapon(&mut app);
    let slots: Vec<Entity> = app
        .world_mut()
        .query::<(Entity, &AttachmentSlot)>()
        .iter(app.world())
        .filter(|(_, slot)| Some(slot.owner) == current)
        .map(|(entity, _)| entity)
        .collect();
    for slot in &slots {
        app.world_mut().send_event(AttachmentCycleRequested {
            slot: *slot,
            direction: CycleDirection::Next,
        });
    }
    run_ticks(&mut app, 2);
    for slot in &slots {
        if let Some(cycle) = app.world().get::<SlotCycle>(*slot) {
            log_info(&format!("Demo: slot {:?} equipped {:?}", slot, cycle.equipped()));
        }
    }

    // Покраска выбранного материала первым swatch
    app.world_mut().send_event(PaintSwatchClicked {
        panel: paint_panel,
        index: 0,
    });
    run_ticks(&mut app, 1);
    if let Some(panel) = app.world().get::<PaintPanel>(paint_panel) {
        log_info(&format!(
            "Demo: painted {:?}",
            panel.chosen_binding().map(|b| b.material.as_str())
        ));
    }

    // Inspect: вход, немного drag, выход
    app.world_mut().send_event(InspectButtonPressed);
    run_ticks(&mut app, 30);
    report(&mut app, "inspect");

    app.world_mut().insert_resource(InspectInput {
        held: true,
        axis: Vec2::new(2.0, 0.5),
        ..Default::default()
    });
    for _ in 0..20 {
        app.world_mut().resource_mut::<InspectInput>().axis = Vec2::new(2.0, 0.5);
        run_fixed_tick(&mut app);
    }
    app.world_mut().insert_resource(InspectInput::default());

    app.world_mut().send_event(InspectButtonPressed);
    run_ticks(&mut app, 30);
    report(&mut app, "inspect exit");

    log_info("Demo complete!");
}

fn run_ticks(app: &mut App, ticks: usize) {
    for _ in 0..ticks {
        run_fixed_tick(app);
    }
}

fn current_weapon(app: &mut App) -> Option<Entity> {
    app.world().resource::<WeaponInspect>().current_weapon()
}

fn report(app: &mut App, stage: &str) {
    let open_tabs: Vec<WeaponType> = app
        .world_mut()
        .query::<&WeaponTypeTab>()
        .iter(app.world())
        .filter(|tab| tab.is_open())
        .map(|tab| tab.weapon_type)
        .collect();
    let weapon = current_weapon(app);
    let fov = app
        .world_mut()
        .query::<&InspectCamera>()
        .iter(app.world())
        .next()
        .map(|camera| camera.fov);

    log_info(&format!(
        "Demo [{}]: open tabs {:?}, current weapon {:?}, camera fov {:?}, inspect {:?}",
        stage,
        open_tabs,
        weapon,
        fov,
        app.world().resource::<WeaponInspect>().phase()
    ));
}
