//! Fixed catalog of tracked futures contracts
//!
//! Symbols follow the upstream feed's `XX=F` convention. The catalog is the
//! full tracked universe; the worker flags snapshot entries that are not in
//! it but still evaluates them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentCategory {
    Indices,
    Metals,
    Energy,
    Currencies,
    Treasuries,
    Grains,
    Livestock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Instrument {
    pub symbol: &'static str,
    pub code: &'static str,
    pub name: &'static str,
    pub category: InstrumentCategory,
}

const CATALOG: &[Instrument] = &[
    // Indices
    instrument("ES=F", "ES", "E-mini S&P 500", InstrumentCategory::Indices),
    instrument("NQ=F", "NQ", "E-mini NASDAQ", InstrumentCategory::Indices),
    instrument("RTY=F", "RTY", "E-mini Russell 2000", InstrumentCategory::Indices),
    // Metals
    instrument("GC=F", "GC", "Gold Futures", InstrumentCategory::Metals),
    instrument("SI=F", "SI", "Silver Futures", InstrumentCategory::Metals),
    instrument("PL=F", "PL", "Platinum Futures", InstrumentCategory::Metals),
    instrument("HG=F", "HG", "Copper Futures", InstrumentCategory::Metals),
    instrument("QI=F", "NI", "Nickel (Mini)", InstrumentCategory::Metals),
    // Energy
    instrument("CL=F", "CL", "Crude Oil WTI", InstrumentCategory::Energy),
    instrument("NG=F", "NG", "Natural Gas", InstrumentCategory::Energy),
    // Currencies
    instrument("6E=F", "6E", "Euro FX", InstrumentCategory::Currencies),
    instrument("6J=F", "6J", "Japanese Yen", InstrumentCategory::Currencies),
    instrument("6B=F", "6B", "British Pound", InstrumentCategory::Currencies),
    instrument("6A=F", "6A", "Australian Dollar", InstrumentCategory::Currencies),
    instrument("6C=F", "6C", "Canadian Dollar", InstrumentCategory::Currencies),
    instrument("6S=F", "6S", "Swiss Franc", InstrumentCategory::Currencies),
    instrument("6N=F", "6N", "New Zealand Dollar", InstrumentCategory::Currencies),
    // Treasuries
    instrument("ZB=F", "ZB", "30-Year T-Bond", InstrumentCategory::Treasuries),
    instrument("UB=F", "UB", "Ultra T-Bond", InstrumentCategory::Treasuries),
    // Grains
    instrument("ZW=F", "ZW", "Wheat", InstrumentCategory::Grains),
    instrument("ZS=F", "ZS", "Soybeans", InstrumentCategory::Grains),
    instrument("ZC=F", "ZC", "Corn", InstrumentCategory::Grains),
    instrument("ZL=F", "ZL", "Soybean Oil", InstrumentCategory::Grains),
    instrument("ZM=F", "ZM", "Soybean Meal", InstrumentCategory::Grains),
    // Livestock
    instrument("LE=F", "LE", "Live Cattle", InstrumentCategory::Livestock),
];

const fn instrument(
    symbol: &'static str,
    code: &'static str,
    name: &'static str,
    category: InstrumentCategory,
) -> Instrument {
    Instrument {
        symbol,
        code,
        name,
        category,
    }
}

/// All tracked contracts
pub fn catalog() -> &'static [Instrument] {
    CATALOG
}

/// Look up a contract by feed symbol
pub fn find(symbol: &str) -> Option<Instrument> {
    CATALOG.iter().copied().find(|i| i.symbol == symbol)
}

/// Decimal places used when rendering prices for a symbol
pub fn price_decimals(symbol: &str) -> usize {
    if symbol.contains("ES") || symbol.contains("NQ") {
        return 2;
    }
    if symbol.contains("GC") {
        return 2;
    }
    if symbol.contains("SI") {
        return 3;
    }
    if symbol.contains("PL") {
        return 2;
    }
    if symbol.contains("HG") {
        return 4;
    }
    2
}
