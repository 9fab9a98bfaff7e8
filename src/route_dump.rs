use crate::route::Route;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON snapshot of a routed bundle, for debugging and golden comparisons.
#[derive(Debug, Serialize)]
pub struct RouteDump {
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub index: usize,
    pub points: Vec<[f64; 2]>,
    pub length: f64,
}

impl RouteDump {
    pub fn from_routes(routes: &[Route]) -> Self {
        let routes = routes
            .iter()
            .enumerate()
            .map(|(index, route)| RouteEntry {
                index,
                points: route.points.iter().map(|(x, y)| [*x, *y]).collect(),
                length: route.length(),
            })
            .collect();

        RouteDump { routes }
    }
}

pub fn write_route_dump(path: &Path, routes: &[Route]) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = RouteDump::from_routes(routes);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_captures_points_and_length() {
        let routes = vec![Route {
            points: vec![(0.0, 0.0), (30.0, 0.0), (30.0, 10.0)],
        }];
        let dump = RouteDump::from_routes(&routes);
        let value = serde_json::to_value(&dump).unwrap();

        assert_eq!(value["routes"][0]["index"], 0);
        assert_eq!(value["routes"][0]["points"][1][0], 30.0);
        assert_eq!(value["routes"][0]["length"], 40.0);
    }
}
