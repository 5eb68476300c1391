use crate::models::scoring::MarketRow;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobMarketResponse {
    pub industry: String,
    pub market_data: MarketRow,
    pub last_updated: String,
}
