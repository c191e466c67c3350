pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::console::{MemoryConsole, StdoutConsole};
pub use config::DemoConfig;
pub use crate::core::{
    composition::ColorDecorator,
    demo::{DemoKind, DemoRunner},
    inheritance::ColoredShape,
};
pub use domain::{
    model::Shape,
    ports::{Console, Drawable},
};
pub use utils::error::{DecoratorError, Result};
