mod app;
mod err;
mod cmd;
mod utils;

pub use app::App;
