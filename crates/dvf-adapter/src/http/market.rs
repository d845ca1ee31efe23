/*
[INPUT]:  Symbol identifiers and query parameters
[OUTPUT]: Market data (tickers, public trades)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{DvfClient, Result};
use crate::types::{Ticker, Trade};

impl DvfClient {
    /// Query the ticker for a trading pair
    ///
    /// GET /market-data/ticker?symbol={symbol}
    pub async fn ticker(&self, symbol: &str) -> Result<Ticker> {
        self.get("/market-data/ticker", &[("symbol", symbol)]).await
    }

    /// Query recent public trades for a trading pair
    ///
    /// GET /market-data/trades?symbol={symbol}&limit={limit}
    pub async fn trades(&self, symbol: &str, limit: u32) -> Result<Vec<Trade>> {
        let limit = limit.to_string();
        self.get("/market-data/trades", &[("symbol", symbol), ("limit", &limit)])
            .await
    }
}
