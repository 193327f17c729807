use std::fmt;

use chrono::{Days, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Number;

const DATE_KEY_FORMAT: &str = "%d.%m.%Y";

/// Calendar day used both as the request parameter and as the record key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DateKey(pub NaiveDate);

impl DateKey {
    /// `today` minus `offset` days, `None` if that falls off the calendar.
    pub fn days_ago(today: NaiveDate, offset: u64) -> Option<Self> {
        today.checked_sub_days(Days::new(offset)).map(DateKey)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Currency {
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    /// Only the exact upstream codes are recognised.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EUR" => Some(Currency::Eur),
            "USD" => Some(Currency::Usd),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// National bank sale/purchase rates of one currency on one day, kept as the upstream numbers.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CurrencyQuote {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase: Option<Number>,
}

/// Quotes of one day in the order the payload listed them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DayRates(Vec<(Currency, CurrencyQuote)>);

impl DayRates {
    /// A repeated currency takes the new quote but keeps its first position.
    pub fn insert(&mut self, currency: Currency, quote: CurrencyQuote) {
        match self.0.iter_mut().find(|(c, _)| *c == currency) {
            Some((_, existing)) => *existing = quote,
            None => self.0.push((currency, quote)),
        }
    }
}

impl FromIterator<(Currency, CurrencyQuote)> for DayRates {
    fn from_iter<I: IntoIterator<Item = (Currency, CurrencyQuote)>>(iter: I) -> Self {
        let mut rates = DayRates::default();
        for (currency, quote) in iter {
            rates.insert(currency, quote);
        }
        rates
    }
}

impl Serialize for DayRates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (currency, quote) in &self.0 {
            map.serialize_entry(currency, quote)?;
        }
        map.end()
    }
}

/// Rates for a single day, serialized as `{ "DD.MM.YYYY": { "USD": {..}, "EUR": {..} } }`.
#[derive(Debug, Clone, PartialEq)]
pub struct DayRecord {
    pub date: DateKey,
    pub rates: DayRates,
}

impl DayRecord {
    pub fn new(date: DateKey, rates: DayRates) -> Self {
        DayRecord { date, rates }
    }
}

impl Serialize for DayRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &self.rates)?;
        map.end()
    }
}

/// Pretty JSON for the collected days; an empty collection renders as `null`.
pub fn render(records: &[DayRecord]) -> serde_json::Result<String> {
    let document = (!records.is_empty()).then_some(records);
    serde_json::to_string_pretty(&document)
}
