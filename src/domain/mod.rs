// Domain layer: the app idea model, the fallback list and the ports (interfaces).

pub mod fallback;
pub mod model;
pub mod ports;
