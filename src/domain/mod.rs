// Domain layer: records, render settings and the ports the CMS host fills in.

pub mod model;
pub mod ports;
