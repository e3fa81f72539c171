//! Shared domain - cross-cutting типы
//!
//! Содержит типы используемые в нескольких доменах:
//! - Color (Rgba для paint engine и настроек)
//! - Camera (InspectCamera, InspectConfigOverride)
//! - Interaction locks (InteractionLockChanged, InteractionLocks)

pub mod camera;
pub mod color;
pub mod interaction;

pub use camera::*;
pub use color::*;
pub use interaction::*;
