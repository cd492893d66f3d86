// Domain layer: value types, locale presets and ports (interfaces). No I/O here.

pub mod locale;
pub mod model;
pub mod ports;
