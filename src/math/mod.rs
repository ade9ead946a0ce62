pub mod apca;
pub mod checker;
pub mod composite;
pub mod wcag;
