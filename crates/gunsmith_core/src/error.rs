//! Ошибки конфигурации customization-слоя
//!
//! Чистые функции возвращают `Result<_, CustomizationError>`,
//! системы логируют ошибку через `log_error` и отключают владельца (без retry).

use bevy::prelude::*;
use thiserror::Error;

use crate::item_catalog::{AttachmentType, ItemId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CustomizationError {
    #[error("item catalog {list} list is empty")]
    EmptyCatalog { list: &'static str },

    #[error("item catalog has no attachment of type Empty")]
    MissingEmptyAttachment,

    #[error("item {0:?} is not present in the item catalog")]
    UnknownItem(ItemId),

    #[error("attachment slot {slot:?} ({attachment_type:?}) has no eligible attachments")]
    NoEligibleAttachments {
        slot: Entity,
        attachment_type: AttachmentType,
    },

    #[error("weapon {0:?} has no mesh-bearing parts")]
    NoMeshParts(Entity),

    #[error("no active camera available for weapon inspection")]
    MissingCamera,

    #[error("no current weapon to inspect")]
    MissingWeapon,

    #[error("inspect controller is not idle")]
    InspectNotIdle,

    #[error("missing reference: {0}")]
    MissingReference(&'static str),

    #[error("failed to parse {what}: {message}")]
    Parse { what: &'static str, message: String },
}

impl CustomizationError {
    pub fn parse(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            what,
            message: err.to_string(),
        }
    }
}

pub type CustomizationResult<T> = Result<T, CustomizationError>;
