use std::env;
use std::path::PathBuf;

/// Dashboard settings, read from the environment (a `.env` file is honoured).
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV with Date, Open, High, Low, Close, Volume columns
    pub data_path: PathBuf,
    /// Ticker or company name shown in titles
    pub symbol: String,
    pub icon: String,
    pub host: String,
    pub port: u16,
    /// Rows shown in the "Raw Data" table
    pub tail_rows: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/BMW_Data.csv"),
            symbol: "BMW".to_string(),
            icon: "🚗".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            tail_rows: 20,
        }
    }
}

fn lookup_str(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn lookup_parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> T {
    lookup_str(lookup, name)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source. Blank values and
    /// unparsable numbers fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            data_path: lookup_str(&lookup, "DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_path),
            symbol: lookup_str(&lookup, "DASHBOARD_SYMBOL").unwrap_or(defaults.symbol),
            icon: lookup_str(&lookup, "DASHBOARD_ICON").unwrap_or(defaults.icon),
            host: lookup_str(&lookup, "HOST").unwrap_or(defaults.host),
            port: lookup_parse(&lookup, "PORT", defaults.port),
            tail_rows: lookup_parse(&lookup, "TAIL_ROWS", defaults.tail_rows),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.tail_rows == 0 {
            return Err("TAIL_ROWS must be at least 1".to_string());
        }
        if self.symbol.is_empty() {
            return Err("DASHBOARD_SYMBOL must not be empty".to_string());
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Page heading, e.g. "🚗 BMW Stock Dashboard".
    pub fn title(&self) -> String {
        format!("{} {} Stock Dashboard", self.icon, self.symbol)
    }
}
