// Service module exports

pub mod events;
pub mod layout;
pub mod settings;
