//! Gunsmith Core
//!
//! Headless ECS-ядро weapon customization на Bevy 0.16:
//! каталог, выбор оружия по вкладкам, обвесы, покраска, inspect mode.
//!
//! # Архитектура
//!
//! Host (UI-слой или тест) спавнит вкладки/панели/камеру, пишет intent events и
//! `InspectInput`, а ядро крутит всё в `FixedUpdate` (60 Hz) в фиксированном порядке:
//!
//! ```text
//! Setup → Selection → React → Input → Inspect → Locks → Finalize
//! ```
//!
//! - **Setup**: новые слоты обвесов, регистрация hideable панелей
//! - **Selection**: клики по вкладкам/оружию, slide и camera blend тики
//! - **React**: подписчики `WeaponSelectionChanged` (paint, слоты, inspect)
//! - **Input**: attachment/paint intents
//! - **Inspect**: inspect кнопка + tick контроллера
//! - **Locks**: агрегация `InteractionLockChanged`
//! - **Finalize**: выход из inspect, анимации hideable, сброс per-tick input
//!
//! Между set'ами стоят sync points: commands одного set'а видны следующему.

use bevy::prelude::*;

pub mod attachment;
pub mod error;
pub mod inspect;
pub mod item_catalog;
pub mod logger;
pub mod paint;
pub mod scene;
pub mod selection;
pub mod settings;
pub mod shared;
pub mod tabs;

pub use attachment::AttachmentPlugin;
pub use error::{CustomizationError, CustomizationResult};
pub use inspect::InspectPlugin;
pub use item_catalog::{AttachmentType, ItemCatalog, ItemDefinition, ItemId, WeaponType};
pub use logger::{init_logger, log, log_error, log_info, log_warning, LogLevel};
pub use paint::PaintPlugin;
pub use scene::{PrefabLibrary, SceneVisibility};
pub use selection::SelectionPlugin;
pub use settings::CustomizationSettings;
pub use tabs::TabsPlugin;

/// Порядок customization систем внутри `FixedUpdate`
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomizationSet {
    Setup,
    Selection,
    React,
    Input,
    Inspect,
    Locks,
    Finalize,
}

/// Главный plugin (объединяет все подсистемы)
///
/// `ItemCatalog` и `PrefabLibrary` берутся из App, если host их вставил,
/// иначе подставляются demo-версии.
pub struct CustomizationPlugin;

impl Plugin for CustomizationPlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<ItemCatalog>() {
            app.insert_resource(ItemCatalog::demo());
        }
        if !app.world().contains_resource::<PrefabLibrary>() {
            app.insert_resource(PrefabLibrary::demo());
        }

        app
            // Fixed timestep 60Hz
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            .configure_sets(
                FixedUpdate,
                (
                    CustomizationSet::Setup,
                    CustomizationSet::Selection,
                    CustomizationSet::React,
                    CustomizationSet::Input,
                    CustomizationSet::Inspect,
                    CustomizationSet::Locks,
                    CustomizationSet::Finalize,
                )
                    .chain(),
            )
            .add_systems(Startup, item_catalog::validate_item_catalog)
            .add_plugins((TabsPlugin, SelectionPlugin, AttachmentPlugin, PaintPlugin, InspectPlugin));
    }
}

/// Создаёт minimal Bevy App для headless прогона (без customization plugin'а)
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Один fixed tick вручную (тесты и demo не зависят от wall clock)
pub fn run_fixed_tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
}
