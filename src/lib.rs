pub mod assemble;
pub mod config;
pub mod port;
pub mod route;
pub mod route_dump;

pub use assemble::{
    AssembleError, AssembledRoute, Assembler, CircularBendAssembler, RouteElement,
    route_bundle_assembled,
};
pub use config::{CrossSection, RouterConfig, load_config};
pub use port::Port;
pub use route::{
    EPSILON, Point, Route, RouteError, Segment, normalize_path, route_bundle, route_single,
};
