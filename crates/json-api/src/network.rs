//! Network info handler.
//!
//! Mobile scanners on the LAN need the server's routable address to point
//! at; this endpoint reports it alongside the bound port.

use std::{
    net::{IpAddr, UdpSocket},
    sync::Arc,
};

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Network info response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct NetworkInfoResponse {
    /// The server's LAN address, when one could be determined
    pub ip: Option<String>,

    /// The port the server is bound to
    pub port: u16,

    /// Base URL for mobile configuration
    pub url: Option<String>,
}

/// Routable local address, discovered by opening a UDP socket toward a
/// public host. No packets are sent; connect only selects the interface.
fn local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind(("0.0.0.0", 0)).ok()?;

    socket.connect(("8.8.8.8", 80)).ok()?;

    socket.local_addr().ok().map(|addr| addr.ip())
}

/// Network Info Handler
///
/// Returns the server's LAN address for mobile configuration.
#[endpoint(tags("network"), summary = "Server LAN address")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<NetworkInfoResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let ip = local_ip().map(|ip| ip.to_string());
    let url = ip.as_ref().map(|ip| format!("http://{ip}:{}", state.port));

    Ok(Json(NetworkInfoResponse {
        ip,
        port: state.port,
        url,
    }))
}
