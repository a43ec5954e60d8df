//! Synthetic downtown transit network.
//!
//! Ten stops and five one-way lines loosely laid over downtown Mobile,
//! Alabama.  The snapshot is embedded as CSV and goes through the same loader
//! a real data export would.

use std::io::Cursor;

use jp_network::{NetworkGraph, NetworkResult, load_routes_reader, load_stops_reader};

const STOPS_CSV: &str = "\
id,name,lat,lng,code\n\
NT,North Terminal,30.7100,-88.0700,N01\n\
SH,Spring Hill Ave,30.7050,-88.0640,N02\n\
GS,Government St,30.6990,-88.0570,\n\
DH,Downtown Hub,30.6950,-88.0500,D01\n\
WS,Water St,30.6960,-88.0420,H01\n\
CP,Commerce Park,30.7000,-88.0300,H02\n\
ST,South Terminal,30.6700,-88.0300,S01\n\
BS,Broad St,30.6760,-88.0380,S02\n\
CN,Connector,30.6800,-88.0600,\n\
DI,Dauphin Island Pkwy,30.6870,-88.0560,S03\n\
";

const ROUTES_CSV: &str = "\
id,name,color,stop_ids\n\
L1,North Line,#1f77b4,NT|SH|GS|DH\n\
L2,Harbor Line,#2ca02c,DH|WS|CP\n\
L3,South Line,#d62728,ST|BS|CN|DI|DH\n\
L4,South Line (outbound),#d62728,DH|DI|CN|BS|ST\n\
L5,Crosstown,,CN|GS|SH\n\
";

/// Load the embedded snapshot into a graph.
pub fn build_network() -> NetworkResult<NetworkGraph> {
    let stops = load_stops_reader(Cursor::new(STOPS_CSV))?;
    let routes = load_routes_reader(Cursor::new(ROUTES_CSV))?;
    Ok(NetworkGraph::from_snapshot(stops, routes))
}
