pub mod dispatch;
pub mod error;
pub mod route;
pub mod session;
pub mod shell;
pub mod telemetry;
pub mod theme;
pub mod views;

#[cfg(test)]
pub(crate) mod testing;

pub use shell::App;
