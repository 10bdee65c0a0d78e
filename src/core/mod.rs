pub mod backup;
pub mod cooldown;
pub mod export;
pub mod session;
pub mod submit;
pub mod validate;
