//! Customization settings (RON)
//!
//! Все секции опциональны: отсутствующее поле → shipped default.
//!
//! ```ron
//! (
//!     selection: (transition_enabled: true, camera_blend_time: 0.5),
//!     inspect: (drag_rotate_speed: 100.0),
//!     cache_policy: Reuse,
//!     log_level: Some("info"),
//! )
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CustomizationError, CustomizationResult};
use crate::inspect::InspectConfig;
use crate::logger::{set_log_level, LogLevel};
use crate::paint::{CachePolicy, MeshMaterialCache};
use crate::selection::WeaponSelectionSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomizationSettings {
    pub selection: WeaponSelectionSettings,
    pub inspect: InspectConfig,
    pub cache_policy: CachePolicy,
    /// "debug" | "info" | "warning" | "error"
    pub log_level: Option<String>,
}

impl CustomizationSettings {
    pub fn from_ron_str(source: &str) -> CustomizationResult<Self> {
        ron::from_str(source).map_err(|err| CustomizationError::parse("customization settings", err))
    }

    /// Уровень логирования; неизвестная строка → ошибка разбора
    pub fn log_level(&self) -> CustomizationResult<Option<LogLevel>> {
        let Some(level) = self.log_level.as_deref() else {
            return Ok(None);
        };
        LogLevel::parse(level)
            .map(Some)
            .ok_or_else(|| CustomizationError::parse("log level", format!("unknown level {:?}", level)))
    }

    /// Вставить настройки в App (после `CustomizationPlugin`, перед первым update)
    pub fn apply(&self, app: &mut App) {
        app.insert_resource(self.selection.clone())
            .insert_resource(self.inspect.clone())
            .insert_resource(MeshMaterialCache::new(self.cache_policy));

        match self.log_level() {
            Ok(Some(level)) => set_log_level(level),
            Ok(None) => {}
            Err(err) => crate::logger::log_warning(&format!("⚠️ Settings: {}, keeping current level", err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ron_is_default() {
        let settings = CustomizationSettings::from_ron_str("()").unwrap();
        assert_eq!(settings, CustomizationSettings::default());
        assert_eq!(settings.inspect.transition_time, 0.24);
        assert_eq!(settings.cache_policy, CachePolicy::AlwaysRebuild);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let settings = CustomizationSettings::from_ron_str(
            r#"(
                selection: (transition_enabled: true, camera_blend_time: 0.5, default_weapon_type: Some(Smg)),
                inspect: (drag_rotate_speed: 100.0),
                cache_policy: Reuse,
                log_level: Some("warn"),
            )"#,
        )
        .unwrap();

        assert!(settings.selection.transition_enabled);
        assert_eq!(settings.selection.transition_duration, 0.25);
        assert_eq!(settings.inspect.drag_rotate_speed, 100.0);
        assert_eq!(settings.inspect.fov_min, 30.0);
        assert_eq!(settings.cache_policy, CachePolicy::Reuse);
        assert_eq!(settings.log_level(), Ok(Some(LogLevel::Warning)));
    }

    #[test]
    fn test_invalid_settings_report_parse_error() {
        let err = CustomizationSettings::from_ron_str("(cache_policy: Sometimes)").unwrap_err();
        assert!(matches!(err, CustomizationError::Parse { what: "customization settings", .. }));

        let settings = CustomizationSettings {
            log_level: Some("loud".into()),
            ..Default::default()
        };
        assert!(settings.log_level().is_err());
    }
}
