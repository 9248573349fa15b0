/// REST constraints: per-minute weight budget and call costs.
pub struct RestLimits {
    pub weight_limit_minute: u32,
    pub chart_call_weight: u32,
    pub quote_call_weight: u32,
}

pub struct Endpoints {
    pub site_root: &'static str,
    pub chart_data: &'static str,
    pub quote_equity: &'static str,
}

pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub user_agent: &'static str,
}

pub struct NseConfig {
    pub limits: RestLimits,
    pub endpoints: Endpoints,
    pub client: ClientDefaults,
}

pub const NSE: NseConfig = NseConfig {
    limits: RestLimits {
        // NSE publishes no official budget; stay far below anything that
        // trips the WAF when ~130 symbols fan out.
        weight_limit_minute: 120,
        chart_call_weight: 1,
        quote_call_weight: 1,
    },
    endpoints: Endpoints {
        site_root: "https://www.nseindia.com",
        chart_data: "https://www.nseindia.com/api/chart-databyindex",
        quote_equity: "https://www.nseindia.com/api/quote-equity",
    },
    client: ClientDefaults {
        timeout_ms: 10_000,
        // The API rejects non-browser agents outright.
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                     (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    },
};
