//! Item Catalog - read-only реестр оружия и обвесов
//!
//! # Архитектура
//!
//! **ItemDefinition** - статический blueprint (id + name + icon + prefab + kind):
//! - Хранится в `ItemCatalog` resource (два упорядоченных списка)
//! - Порядок списков значим: кнопки оружия и цикл обвесов идут в порядке каталога
//! - Создаётся hardcoded в `ItemCatalog::demo()` или из RON (`ItemCatalog::from_ron_str`)
//!
//! **ItemKind** - категории:
//! - Weapon { weapon_type } → вкладки выбора оружия
//! - Attachment { attachment_type } → слоты обвесов; `AttachmentType::Empty` = "ничего не надето"
//!
//! # Пример
//!
//! ```rust,ignore
//! let catalog = ItemCatalog::demo();
//! let rifles: Vec<_> = catalog.weapons_of_type(WeaponType::AssaultRifle).collect();
//! let sight = catalog.get(&ItemId::from("sight_red_dot"));
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{CustomizationError, CustomizationResult};

// ============================================================================
// Ids & references
// ============================================================================

/// Item identifier (unique string ID)
///
/// # Examples
/// - "ar_m4"
/// - "sight_red_dot"
/// - "attachment_empty"
#[derive(Clone, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Ссылка на иконку (host резолвит в текстуру)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Ссылка на scene prefab (ключ в `PrefabLibrary`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrefabRef(pub String);

impl From<&str> for PrefabRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ============================================================================
// Item kinds
// ============================================================================

/// Тип оружия (одна вкладка выбора на тип)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Reflect, Serialize, Deserialize)]
pub enum WeaponType {
    AssaultRifle,
    Smg,
    Lmg,
    SniperRifle,
    Handgun,
}

impl WeaponType {
    pub const ALL: [WeaponType; 5] = [
        WeaponType::AssaultRifle,
        WeaponType::Smg,
        WeaponType::Lmg,
        WeaponType::SniperRifle,
        WeaponType::Handgun,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeaponType::AssaultRifle => "Assault Rifle",
            WeaponType::Smg => "SMG",
            WeaponType::Lmg => "LMG",
            WeaponType::SniperRifle => "Sniper Rifle",
            WeaponType::Handgun => "Handgun",
        }
    }
}

/// Тип обвеса (один слот на тип)
///
/// `Empty` - зарезервированный sentinel "ничего не надето", попадает в каждый слот.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum AttachmentType {
    Empty,
    Sight,
    Barrel,
    Underbarrel,
    SideBarrel,
    Grip,
    Mag,
    Stock,
}

#[derive(Clone, Debug, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon { weapon_type: WeaponType },
    Attachment { attachment_type: AttachmentType },
}

// ============================================================================
// ItemDefinition
// ============================================================================

/// Static item definition (blueprint)
///
/// Immutable данные, хранятся в `ItemCatalog` resource.
#[derive(Clone, Debug, PartialEq, Reflect, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Prefab визуала (None → предмет без scene-представления, например Empty)
    #[serde(default)]
    pub prefab: Option<PrefabRef>,
    pub kind: ItemKind,
}

impl ItemDefinition {
    pub fn weapon(id: &str, name: &str, weapon_type: WeaponType) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            icon: None,
            prefab: None,
            kind: ItemKind::Weapon { weapon_type },
        }
    }

    pub fn attachment(id: &str, name: &str, attachment_type: AttachmentType) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            icon: None,
            prefab: None,
            kind: ItemKind::Attachment { attachment_type },
        }
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_prefab(mut self, prefab: &str) -> Self {
        self.prefab = Some(prefab.into());
        self
    }

    pub fn weapon_type(&self) -> Option<WeaponType> {
        match self.kind {
            ItemKind::Weapon { weapon_type } => Some(weapon_type),
            ItemKind::Attachment { .. } => None,
        }
    }

    pub fn attachment_type(&self) -> Option<AttachmentType> {
        match self.kind {
            ItemKind::Attachment { attachment_type } => Some(attachment_type),
            ItemKind::Weapon { .. } => None,
        }
    }

    pub fn is_empty_attachment(&self) -> bool {
        self.attachment_type() == Some(AttachmentType::Empty)
    }
}

// ============================================================================
// ItemCatalog resource
// ============================================================================

/// Global item catalog (resource)
///
/// Два упорядоченных списка. Lookup линейный: каталог маленький, порядок важнее скорости.
#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemCatalog {
    #[serde(default)]
    weapons: Vec<ItemDefinition>,
    #[serde(default)]
    attachments: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить definition в соответствующий список (порядок добавления сохраняется)
    pub fn add(&mut self, definition: ItemDefinition) {
        match definition.kind {
            ItemKind::Weapon { .. } => self.weapons.push(definition),
            ItemKind::Attachment { .. } => self.attachments.push(definition),
        }
    }

    pub fn with(mut self, definition: ItemDefinition) -> Self {
        self.add(definition);
        self
    }

    pub fn get(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.weapons
            .iter()
            .chain(self.attachments.iter())
            .find(|def| &def.id == id)
    }

    pub fn weapons(&self) -> &[ItemDefinition] {
        &self.weapons
    }

    pub fn attachments(&self) -> &[ItemDefinition] {
        &self.attachments
    }

    pub fn weapons_of_type(&self, weapon_type: WeaponType) -> impl Iterator<Item = &ItemDefinition> + '_ {
        self.weapons
            .iter()
            .filter(move |def| def.weapon_type() == Some(weapon_type))
    }

    /// Проверка конфигурации каталога
    ///
    /// Пустые списки и отсутствие Empty-обвеса - fatal для соответствующей фичи.
    pub fn validate(&self) -> CustomizationResult<()> {
        if self.weapons.is_empty() {
            return Err(CustomizationError::EmptyCatalog { list: "weapon" });
        }
        if self.attachments.is_empty() {
            return Err(CustomizationError::EmptyCatalog { list: "attachment" });
        }
        if !self.attachments.iter().any(ItemDefinition::is_empty_attachment) {
            return Err(CustomizationError::MissingEmptyAttachment);
        }
        Ok(())
    }

    /// Загрузка каталога из RON
    ///
    /// ```ron
    /// (
    ///     weapons: [(id: "ar_m4", name: "M4", kind: Weapon(weapon_type: AssaultRifle))],
    ///     attachments: [(id: "attachment_empty", name: "None", kind: Attachment(attachment_type: Empty))],
    /// )
    /// ```
    pub fn from_ron_str(source: &str) -> CustomizationResult<Self> {
        let catalog: ItemCatalog =
            ron::from_str(source).map_err(|e| CustomizationError::parse("item catalog", e))?;

        // Definitions могли оказаться не в своём списке - раскладываем заново
        let mut sorted = ItemCatalog::new();
        for def in catalog.weapons.into_iter().chain(catalog.attachments) {
            sorted.add(def);
        }
        Ok(sorted)
    }

    /// Hardcoded demo каталог (пара образцов на каждый тип)
    pub fn demo() -> Self {
        ItemCatalog::new()
            // === Weapons ===
            .with(
                ItemDefinition::weapon("ar_m4", "M4 Carbine", WeaponType::AssaultRifle)
                    .with_icon("icons/ar_m4")
                    .with_prefab("weapon_ar_m4"),
            )
            .with(
                ItemDefinition::weapon("ar_ak", "AK Pattern", WeaponType::AssaultRifle)
                    .with_icon("icons/ar_ak")
                    .with_prefab("weapon_ar_ak"),
            )
            .with(
                ItemDefinition::weapon("smg_vector", "Vector", WeaponType::Smg)
                    .with_icon("icons/smg_vector")
                    .with_prefab("weapon_smg_vector"),
            )
            .with(
                ItemDefinition::weapon("lmg_m249", "M249", WeaponType::Lmg)
                    .with_icon("icons/lmg_m249")
                    .with_prefab("weapon_lmg_m249"),
            )
            .with(
                ItemDefinition::weapon("sr_bolt", "Bolt Action", WeaponType::SniperRifle)
                    .with_icon("icons/sr_bolt")
                    .with_prefab("weapon_sr_bolt"),
            )
            .with(
                ItemDefinition::weapon("hg_p226", "P226", WeaponType::Handgun)
                    .with_icon("icons/hg_p226")
                    .with_prefab("weapon_hg_p226"),
            )
            // === Attachments ===
            .with(ItemDefinition::attachment("attachment_empty", "None", AttachmentType::Empty))
            .with(
                ItemDefinition::attachment("sight_red_dot", "Red Dot", AttachmentType::Sight)
                    .with_icon("icons/sight_red_dot")
                    .with_prefab("attachment_sight_red_dot"),
            )
            .with(
                ItemDefinition::attachment("sight_scope", "4x Scope", AttachmentType::Sight)
                    .with_icon("icons/sight_scope")
                    .with_prefab("attachment_sight_scope"),
            )
            .with(
                ItemDefinition::attachment("barrel_suppressor", "Suppressor", AttachmentType::Barrel)
                    .with_icon("icons/barrel_suppressor")
                    .with_prefab("attachment_barrel_suppressor"),
            )
            .with(
                ItemDefinition::attachment("barrel_compensator", "Compensator", AttachmentType::Barrel)
                    .with_icon("icons/barrel_compensator")
                    .with_prefab("attachment_barrel_compensator"),
            )
            .with(
                ItemDefinition::attachment("grip_vertical", "Vertical Grip", AttachmentType::Grip)
                    .with_icon("icons/grip_vertical")
                    .with_prefab("attachment_grip_vertical"),
            )
    }
}

/// Startup: проверка каталога
///
/// Ошибка только логируется: слоты и вкладки, которым не хватает данных,
/// отключаются сами при инициализации.
pub fn validate_item_catalog(catalog: Res<ItemCatalog>) {
    match catalog.validate() {
        Ok(()) => crate::logger::log_info(&format!(
            "✅ Catalog: {} weapons, {} attachments",
            catalog.weapons().len(),
            catalog.attachments().len()
        )),
        Err(err) => crate::logger::log_error(&format!("❌ Catalog: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_routes_by_kind() {
        let catalog = ItemCatalog::new()
            .with(ItemDefinition::weapon("w1", "W1", WeaponType::Smg))
            .with(ItemDefinition::attachment("a1", "A1", AttachmentType::Grip));

        assert_eq!(catalog.weapons().len(), 1);
        assert_eq!(catalog.attachments().len(), 1);
        assert_eq!(catalog.get(&"a1".into()).map(|d| d.name.as_str()), Some("A1"));
        assert!(catalog.get(&"missing".into()).is_none());
    }

    #[test]
    fn test_weapons_of_type_keeps_catalog_order() {
        let catalog = ItemCatalog::demo();
        let ids: Vec<_> = catalog
            .weapons_of_type(WeaponType::AssaultRifle)
            .map(|d| d.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["ar_m4", "ar_ak"]);
    }

    #[test]
    fn test_validate_empty_lists() {
        assert_eq!(
            ItemCatalog::new().validate(),
            Err(CustomizationError::EmptyCatalog { list: "weapon" })
        );

        let no_attachments = ItemCatalog::new().with(ItemDefinition::weapon("w", "W", WeaponType::Lmg));
        assert_eq!(
            no_attachments.validate(),
            Err(CustomizationError::EmptyCatalog { list: "attachment" })
        );

        let no_empty = no_attachments.with(ItemDefinition::attachment("s", "S", AttachmentType::Sight));
        assert_eq!(no_empty.validate(), Err(CustomizationError::MissingEmptyAttachment));
    }

    #[test]
    fn test_demo_catalog_is_valid() {
        assert!(ItemCatalog::demo().validate().is_ok());
    }

    #[test]
    fn test_from_ron_str() {
        let source = r#"(
            weapons: [
                (id: "ar_m4", name: "M4", icon: Some("icons/m4"), kind: Weapon(weapon_type: AssaultRifle)),
                (id: "empty", name: "None", kind: Attachment(attachment_type: Empty)),
            ],
            attachments: [
                (id: "sight", name: "Sight", prefab: Some("sight_prefab"), kind: Attachment(attachment_type: Sight)),
            ],
        )"#;

        let catalog = ItemCatalog::from_ron_str(source).unwrap();
        assert_eq!(catalog.weapons().len(), 1);
        // "empty" был в списке оружия, но это attachment
        assert_eq!(catalog.attachments().len(), 2);
        assert_eq!(catalog.attachments()[0].id, ItemId::from("empty"));
        assert_eq!(
            catalog.get(&"sight".into()).and_then(|d| d.prefab.clone()),
            Some(PrefabRef::from("sight_prefab"))
        );
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_from_ron_str_reports_parse_error() {
        let err = ItemCatalog::from_ron_str("(weapons: [").unwrap_err();
        assert!(matches!(err, CustomizationError::Parse { what: "item catalog", .. }));
    }
}
