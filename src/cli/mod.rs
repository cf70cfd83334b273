mod due;
mod migrate;
mod server;

pub use due::due;
pub use migrate::{migrate, reset};
pub use server::serve;
