use crate::models::transaction::{ServiceType, Transaction};

const LOCATION: &str = "San Francisco";

/// (id, date, service, revenue, cost) in USD, March–November 2025.
const RECORDS: [(&str, &str, ServiceType, f64, f64); 27] = [
    // March: spring cycle start, MICE baseline
    ("mar-1", "2025-03-05", ServiceType::Mice, 45000.0, 20000.0),
    ("mar-2", "2025-03-12", ServiceType::Dining, 21000.0, 10000.0),
    ("mar-3", "2025-03-22", ServiceType::Spa, 12000.0, 5000.0),
    // April: conference peak
    ("apr-1", "2025-04-10", ServiceType::Mice, 88000.0, 35000.0),
    ("apr-2", "2025-04-15", ServiceType::Dining, 26000.0, 12000.0),
    ("apr-3", "2025-04-28", ServiceType::Wellness, 8000.0, 3000.0),
    // May
    ("may-1", "2025-05-05", ServiceType::Dining, 32000.0, 14000.0),
    ("may-2", "2025-05-18", ServiceType::Spa, 24000.0, 9000.0),
    ("may-3", "2025-05-25", ServiceType::Retail, 11000.0, 4500.0),
    // June: summer tourism peak
    ("jun-1", "2025-06-10", ServiceType::Dining, 45000.0, 19000.0),
    ("jun-2", "2025-06-20", ServiceType::Spa, 29000.0, 11000.0),
    ("jun-3", "2025-06-25", ServiceType::Mice, 35000.0, 15000.0),
    // July
    ("jul-1", "2025-07-04", ServiceType::Dining, 52000.0, 22000.0),
    ("jul-2", "2025-07-15", ServiceType::Wellness, 15000.0, 5000.0),
    ("jul-3", "2025-07-28", ServiceType::Retail, 18000.0, 7000.0),
    // August
    ("aug-1", "2025-08-12", ServiceType::Dining, 41000.0, 18000.0),
    ("aug-2", "2025-08-20", ServiceType::Spa, 26000.0, 10000.0),
    ("aug-3", "2025-08-28", ServiceType::Wellness, 10000.0, 4000.0),
    // September: shoulder season
    ("sep-1", "2025-09-08", ServiceType::Dining, 28000.0, 13000.0),
    ("sep-2", "2025-09-15", ServiceType::Mice, 65000.0, 25000.0),
    ("sep-3", "2025-09-22", ServiceType::Spa, 14000.0, 6000.0),
    // October
    ("oct-1", "2025-10-10", ServiceType::Mice, 75000.0, 30000.0),
    ("oct-2", "2025-10-18", ServiceType::Dining, 30000.0, 14000.0),
    ("oct-3", "2025-10-25", ServiceType::Wellness, 11000.0, 4000.0),
    // November: pre-holiday inbound
    ("nov-1", "2025-11-05", ServiceType::Dining, 38000.0, 16000.0),
    ("nov-2", "2025-11-15", ServiceType::Spa, 22000.0, 9000.0),
    ("nov-3", "2025-11-25", ServiceType::Retail, 14000.0, 5500.0),
];

/// The bundled San Francisco sample set the dashboard starts with.
#[must_use]
pub fn sample_transactions() -> Vec<Transaction> {
    RECORDS
        .iter()
        .map(|&(id, date, service, revenue, cost)| {
            Transaction::new(id, date, service, revenue, cost, LOCATION)
        })
        .collect()
}
