use serde::{Deserialize, Serialize};

/// Category of a hotel ancillary (non-room) service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    Spa,
    Dining,
    /// Meetings, incentives, conferences and exhibitions.
    #[serde(rename = "MICE")]
    Mice,
    Parking,
    Retail,
    Wellness,
}

impl ServiceType {
    /// Every service type, in the order the dashboard lists them.
    pub const ALL: [ServiceType; 6] = [
        ServiceType::Spa,
        ServiceType::Dining,
        ServiceType::Mice,
        ServiceType::Parking,
        ServiceType::Retail,
        ServiceType::Wellness,
    ];

    /// The wire/display name (`"MICE"` rather than `"Mice"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Spa => "Spa",
            ServiceType::Dining => "Dining",
            ServiceType::Mice => "MICE",
            ServiceType::Parking => "Parking",
            ServiceType::Retail => "Retail",
            ServiceType::Wellness => "Wellness",
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single historical sale of an ancillary service.
///
/// `date` is kept exactly as recorded (`YYYY-MM-DD`). Month bucketing works on
/// its first seven characters, so no parsing or timezone conversion happens.
/// Amounts are in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub date: String,
    pub service_type: ServiceType,
    pub revenue: f64,
    pub cost: f64,
    pub location: String,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        service_type: ServiceType,
        revenue: f64,
        cost: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            service_type,
            revenue,
            cost,
            location: location.into(),
        }
    }

    /// The first seven characters of the date (`YYYY-MM`), or the whole date
    /// if it is shorter.
    #[must_use]
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((end, _)) => &self.date[..end],
            None => &self.date,
        }
    }

    /// Whether this transaction falls in the given month (`YYYY-MM` prefix match).
    #[must_use]
    pub fn is_in_month(&self, month: &str) -> bool {
        self.date.starts_with(month)
    }

    /// Net contribution: revenue minus cost.
    #[must_use]
    pub fn profit(&self) -> f64 {
        self.revenue - self.cost
    }
}
