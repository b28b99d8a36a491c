pub mod contact;
pub mod events;
