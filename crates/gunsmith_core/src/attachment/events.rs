//! Attachment events
//!
//! **Intents (UI → ECS):**
//! - `AttachmentBoxToggled` → раскрыть/свернуть selection box слота (эксклюзивно)
//! - `AttachmentCycleRequested` → next/previous обвес в слоте
//!
//! **Broadcast:**
//! - `AttachmentEquipped` → слот надел обвес (host может сохранить выбор)

use bevy::prelude::*;

use super::CycleDirection;
use crate::item_catalog::ItemId;

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachmentBoxToggled {
    pub slot: Entity,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttachmentCycleRequested {
    pub slot: Entity,
    pub direction: CycleDirection,
}

#[derive(Event, Clone, Debug, PartialEq, Eq)]
pub struct AttachmentEquipped {
    pub slot: Entity,
    pub item: ItemId,
}
