mod app;
mod logging;
mod source;
mod ui;

pub use app::run_app;
