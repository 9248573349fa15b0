//! The fixed scan universe: NSE cash-market tickers watched by the alert.

pub const SYMBOLS: &[&str] = &[
    "ACC",
    "ADANIGREEN",
    "ADANIPORTS",
    "AMBUJACEM",
    "APOLLOHOSP",
    "ASHOKLEY",
    "ASIANPAINT",
    "AUROPHARMA",
    "AXISBANK",
    "BAJAJ-AUTO",
    "BAJAJFINSV",
    "BAJFINANCE",
    "BANDHANBNK",
    "BANKBARODA",
    "BERGEPAINT",
    "BHARTIARTL",
    "BIOCON",
    "BOSCHLTD",
    "BPCL",
    "BRITANNIA",
    "CIPLA",
    "COALINDIA",
    "COFORGE",
    "COLPAL",
    "CONCOR",
    "DLF",
    "DABUR",
    "DIVISLAB",
    "EICHERMOT",
    "GAIL",
    "GLAND",
    "GMRINFRA",
    "GODREJCP",
    "GRASIM",
    "HCLTECH",
    "HDFCAMC",
    "HDFCBANK",
    "HDFCLIFE",
    "HEROMOTOCO",
    "HINDALCO",
    "HINDUNILVR",
    "ICICIBANK",
    "ICICIGI",
    "ICICIPRULI",
    "IDEA",
    "IDFCFIRSTB",
    "IGL",
    "INDHOTEL",
    "INDIGO",
    "INDUSINDBK",
    "INFY",
    "IOC",
    "IRCTC",
    "ITC",
    "JSWSTEEL",
    "JUBLFOOD",
    "KOTAKBANK",
    "LT",
    "LICI",
    "LUPIN",
    "MARICO",
    "MARUTI",
    "MFSL",
    "MGL",
    "MPHASIS",
    "MRF",
    "MUTHOOTFIN",
    "NAUKRI",
    "NAVINFLUOR",
    "NESTLEIND",
    "NMDC",
    "NTPC",
    "ONGC",
    "PAGEIND",
    "PEL",
    "PETRONET",
    "PFC",
    "PIDILITIND",
    "PIIND",
    "PNB",
    "POWERGRID",
    "RAIN",
    "RECLTD",
    "SAIL",
    "SBICARD",
    "SBILIFE",
    "SBIN",
    "SHREECEM",
    "SIEMENS",
    "SRF",
    "SUNPHARMA",
    "TATACHEM",
    "TATACONSUM",
    "TATAMOTORS",
    "TATAPOWER",
    "TATASTEEL",
    "TCS",
    "TECHM",
    "TITAN",
    "TORNTPHARM",
    "TORNTPOWER",
    "TVSMOTOR",
    "UBL",
    "ULTRACEMCO",
    "UPL",
    "VEDL",
    "VOLTAS",
    "WIPRO",
    "ZEEL",
    "ABB",
    "ADANIENSOL",
    "ADANIPOWER",
    "ATGL",
    "DMART",
    "BAJAJHLDNG",
    "BEL",
    "CANBK",
    "CHOLAFIN",
    "DRREDDY",
    "HAL",
    "IRFC",
    "JINDALSTEL",
    "JIOFIN",
    "LTIM",
    "MOTHERSON",
    "SHRIRAMFIN",
    "TATAMTRDVR",
    "TRENT",
    "UNITDSPR",
    "VBL",
    "ZOMATO",
    "ZYDUSLIFE",
];
