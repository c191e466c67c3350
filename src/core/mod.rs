pub mod composition;
pub mod decorator;
pub mod demo;
pub mod inheritance;

pub use crate::domain::model::Shape;
pub use crate::domain::ports::{Console, Drawable};
pub use crate::utils::error::Result;
