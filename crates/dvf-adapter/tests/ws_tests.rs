/*
[INPUT]:  Privacy flag cases
[OUTPUT]: Test results for websocket endpoint resolution
[POS]:    Integration tests - websocket endpoint lookup
[UPDATE]: When stream endpoints change
*/

use dvf_adapter::socket_endpoint;

#[test]
fn test_public_endpoint_literal() {
    assert_eq!(
        socket_endpoint(false),
        "wss://api.deversifi.com/market-data/ws"
    );
}

#[test]
fn test_private_endpoint_unresolved() {
    assert_eq!(socket_endpoint(true), "");
}
