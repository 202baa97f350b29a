//! Server configuration.
//!
//! Every option can be given on the command line or through the
//! environment; the catalog root keeps the `GEOJSON_PATH` variable name
//! used by existing deployments.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::catalog::CatalogRoot;

/// Catalog root used when `GEOJSON_PATH` is not set, relative to the
/// working directory.
pub const DEFAULT_ROOT: &str = "../mpk_to_geojson/geojson_dir";

/// Listen address used when `GEOVIEW_BIND` is not set.
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

/// Default tracing filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(
    name = "geoview-server",
    version,
    about = "Serve a directory of GeoJSON layer groups to the map viewer"
)]
pub struct Args {
    /// Directory whose subdirectories are the layer groups.
    #[arg(long, env = "GEOJSON_PATH", default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Address to listen on.
    #[arg(long, env = "GEOVIEW_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub root: CatalogRoot,
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Resolve a relative catalog root against the working directory.
    pub fn from_args(args: Args) -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self {
            root: CatalogRoot::resolve_from(&cwd, &args.root),
            bind: args.bind,
        })
    }
}
