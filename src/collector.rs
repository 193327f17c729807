use chrono::{Local, NaiveDate};
use log::{debug, info, warn};

use crate::exchange_rate::{DateKey, DayRecord};
use crate::fetcher::RateSource;
use crate::privat_api::{ExchangeRates, request_url};

/// Walks back from today one day at a time, one request per day, in order.
pub struct Collector<S> {
    source: S,
    base_url: String,
}

impl<S: RateSource> Collector<S> {
    pub fn new(source: S, base_url: impl Into<String>) -> Self {
        Collector {
            source,
            base_url: base_url.into(),
        }
    }

    pub async fn collect(&self, days: u32) -> Vec<DayRecord> {
        self.collect_from(Local::now().date_naive(), days).await
    }

    /// Failed days are logged and left out; the rest keep today-first order.
    pub async fn collect_from(&self, today: NaiveDate, days: u32) -> Vec<DayRecord> {
        let mut records = Vec::new();

        for offset in 0..u64::from(days) {
            let Some(date) = DateKey::days_ago(today, offset) else {
                warn!("Can't get date {} days before {}, stopping", offset, today);
                break;
            };

            if let Some(record) = self.collect_day(date).await {
                records.push(record);
            }
        }

        records
    }

    async fn collect_day(&self, date: DateKey) -> Option<DayRecord> {
        info!("Fetching rates for: {}", date);

        let url = request_url(&self.base_url, date);
        let Some(response) = self.source.fetch(&url).await else {
            warn!("No response received for {}. Skipping...", date);
            return None;
        };

        let payload: ExchangeRates = match serde_json::from_value(response) {
            Ok(payload) => payload,
            Err(err) => {
                warn!("Malformed exchange rates for {}: {}", date, err);
                return None;
            }
        };

        let Some(rates) = payload.quotes() else {
            warn!("No exchange rates found for {}", date);
            return None;
        };
        debug!("{}: {:?}", date, rates);

        Some(DayRecord::new(date, rates))
    }
}
