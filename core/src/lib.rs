pub mod inspector;
pub mod probe;
pub mod session;
pub mod walker;
