/*
[INPUT]:  Privacy flag for stream selection
[OUTPUT]: WebSocket endpoint URL for market-data streams
[POS]:    WebSocket layer - endpoint resolution only, no stream consumption
[UPDATE]: When stream endpoints change
*/

/// Public market-data stream
const MARKET_DATA_STREAM_URL: &str = "wss://api.deversifi.com/market-data/ws";

/// Resolve the websocket endpoint for market-data streams
///
/// The private stream has no published endpoint; requesting it yields an
/// empty string.
pub fn socket_endpoint(private: bool) -> &'static str {
    if private { "" } else { MARKET_DATA_STREAM_URL }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, "wss://api.deversifi.com/market-data/ws")]
    #[case(true, "")]
    fn test_socket_endpoint(#[case] private: bool, #[case] expected: &str) {
        assert_eq!(socket_endpoint(private), expected);
    }
}
