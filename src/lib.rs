// dibraster library
// Software rasterizer for device-independent bitmaps

pub mod cli;
pub mod config;
pub mod graphics;
pub mod logging;
pub mod render;

pub use cli::Cli;
pub use config::RenderOptions;
pub use graphics::{Color, DrawError, DrawPrimitive, Font, Image};
pub use logging::LogLevel;
