// Domain layer: HTTP request/response models and the handler port shared by the lesson servers.

pub mod model;
pub mod ports;
