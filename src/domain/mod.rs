// Domain layer: the shape model and its ports. Nothing here knows where output goes.

pub mod model;
pub mod ports;
