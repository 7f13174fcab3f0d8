use super::aggregate::{ExchangeRate, ExchangeRateId, RateSource, RateStatus};
use crate::enums::Currency;
use crate::shared::format::day;
use uuid::Uuid;

pub fn seed_rates() -> Vec<ExchangeRate> {
    let rows = [
        (Currency::Usd, 7.2350, day(2025, 2, 1), RateSource::BankApi, RateStatus::Active),
        (Currency::Eur, 7.8500, day(2025, 2, 1), RateSource::BankApi, RateStatus::Active),
        (Currency::Gbp, 9.1200, day(2025, 2, 1), RateSource::BankApi, RateStatus::Active),
        (Currency::Usd, 7.2100, day(2025, 1, 1), RateSource::Manual, RateStatus::Expired),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (source_currency, rate, effective, source, status))| {
            ExchangeRate::new(
                ExchangeRateId::new(Uuid::from_u128(0xA006_0000 + i as u128 + 1)),
                source_currency,
                Currency::Cny,
                rate,
                effective,
                source,
                status,
            )
        })
        .collect()
}
