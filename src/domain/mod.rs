// Domain layer: request/response models and the generation port. No HTTP framework types here.

pub mod model;
pub mod ports;
