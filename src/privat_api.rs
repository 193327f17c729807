use serde::Deserialize;
use serde_json::Number;

use crate::exchange_rate::{Currency, CurrencyQuote, DateKey, DayRates};

pub const DEFAULT_API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

#[derive(Debug, Deserialize, PartialEq)]
pub struct RateEntry {
    pub currency: Option<String>,
    #[serde(rename = "saleRateNB")]
    pub sale_rate_nb: Option<Number>,
    #[serde(rename = "purchaseRateNB")]
    pub purchase_rate_nb: Option<Number>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct ExchangeRates {
    #[serde(rename = "exchangeRate")]
    pub exchange_rate: Option<Vec<RateEntry>>,
}

impl ExchangeRates {
    /// Recognised currencies in payload order, `None` when the payload has no `exchangeRate`.
    pub fn quotes(&self) -> Option<DayRates> {
        let entries = self.exchange_rate.as_ref()?;

        let quotes = entries
            .iter()
            .filter_map(|entry| {
                let currency = Currency::from_code(entry.currency.as_deref()?)?;
                let quote = CurrencyQuote {
                    sale: entry.sale_rate_nb.clone(),
                    purchase: entry.purchase_rate_nb.clone(),
                };
                Some((currency, quote))
            })
            .collect();

        Some(quotes)
    }
}

pub fn request_url(base_url: &str, date: DateKey) -> String {
    format!("{}?date={}", base_url, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ExchangeRates {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn request_url_templates_the_date() {
        let date = DateKey(NaiveDate::from_ymd_opt(2024, 5, 9).unwrap());
        assert_eq!(
            request_url(DEFAULT_API_URL, date),
            "https://api.privatbank.ua/p24api/exchange_rates?date=09.05.2024"
        );
    }

    fn rate(raw: &str) -> Option<Number> {
        Some(raw.parse().unwrap())
    }

    #[test]
    fn parses_real_shaped_payload() {
        let rates = parse(json!({
            "date": "10.05.2024",
            "bank": "PB",
            "baseCurrency": 980,
            "baseCurrencyLit": "UAH",
            "exchangeRate": [
                {"baseCurrency": "UAH", "currency": "USD", "saleRateNB": 39.5, "purchaseRateNB": 39.0, "saleRate": 39.7, "purchaseRate": 39.2},
                {"baseCurrency": "UAH", "saleRateNB": 1.0, "purchaseRateNB": 1.0}
            ]
        }));

        let entries = rates.exchange_rate.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].currency.as_deref(), Some("USD"));
        assert_eq!(entries[0].sale_rate_nb, rate("39.5"));
        assert_eq!(entries[1].currency, None);
    }

    #[test]
    fn rates_keep_their_upstream_text() {
        let body = r#"{"exchangeRate":[{"currency":"USD","saleRateNB":40,"purchaseRateNB":2.2250738585072011e-308}]}"#;
        let rates: ExchangeRates = serde_json::from_str(body).unwrap();

        let quotes = rates.quotes().unwrap();
        assert_eq!(
            serde_json::to_string(&quotes).unwrap(),
            r#"{"USD":{"sale":40,"purchase":2.2250738585072011e-308}}"#
        );
    }

    #[test]
    fn missing_exchange_rate_yields_no_quotes() {
        let rates = parse(json!({"date": "10.05.2024"}));
        assert_eq!(rates.quotes(), None);
    }

    #[test]
    fn unrecognised_currencies_are_dropped() {
        let rates = parse(json!({"exchangeRate": [
            {"currency": "GBP", "saleRateNB": 50.0, "purchaseRateNB": 49.0},
            {"currency": "EUR", "saleRateNB": 42.1, "purchaseRateNB": 41.5},
            {"saleRateNB": 1.0}
        ]}));

        let expected: DayRates = [(Currency::Eur, CurrencyQuote { sale: rate("42.1"), purchase: rate("41.5") })]
            .into_iter()
            .collect();
        assert_eq!(rates.quotes(), Some(expected));
    }

    #[test]
    fn quotes_follow_payload_order() {
        let rates = parse(json!({"exchangeRate": [
            {"currency": "USD", "saleRateNB": 39.5},
            {"currency": "EUR", "saleRateNB": 42.1}
        ]}));

        assert_eq!(
            serde_json::to_string(&rates.quotes().unwrap()).unwrap(),
            r#"{"USD":{"sale":39.5},"EUR":{"sale":42.1}}"#
        );
    }

    #[test]
    fn missing_rates_stay_absent() {
        let rates = parse(json!({"exchangeRate": [{"currency": "USD", "purchaseRateNB": 39.0}]}));

        let expected: DayRates = [(Currency::Usd, CurrencyQuote { sale: None, purchase: rate("39.0") })]
            .into_iter()
            .collect();
        assert_eq!(rates.quotes(), Some(expected));
    }

    #[test]
    fn empty_exchange_rate_is_an_empty_day() {
        let rates = parse(json!({"exchangeRate": []}));
        assert_eq!(rates.quotes(), Some(DayRates::default()));
    }
}
