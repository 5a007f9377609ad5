// Domain layer: recipe models, view models and ports (interfaces).

pub mod model;
pub mod ports;
pub mod view;
