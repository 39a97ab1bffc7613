// Payment term scheduling and currency conversion feeding the collector

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use sale_commission::core::{AppError, Currency, CurrencyConverter, FixedRateConverter};
use sale_commission::installments::{
    InstallmentScheduler, PaymentTerm, PaymentTermLine, PaymentTermLineKind, PaymentTermScheduler,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

#[test]
fn test_percent_then_remainder() {
    let term = PaymentTerm::new(
        "30/70",
        vec![
            PaymentTermLine::new(PaymentTermLineKind::Percent(dec!(0.30)), 0, 0),
            PaymentTermLine::new(PaymentTermLineKind::Remainder, 0, 30),
        ],
    )
    .unwrap();

    let schedule = PaymentTermScheduler::new()
        .compute(&term, dec!(999.99), Currency::USD, start())
        .expect("Failed to compute schedule");

    assert_eq!(schedule.len(), 2);
    assert_eq!(schedule[0].amount, dec!(300.00));
    assert_eq!(schedule[0].date, start());
    assert_eq!(schedule[1].amount, dec!(699.99));
    assert_eq!(schedule[1].date, NaiveDate::from_ymd_opt(2026, 2, 14).unwrap());
}

#[test]
fn test_fixed_then_remainder() {
    let term = PaymentTerm::new(
        "deposit",
        vec![
            PaymentTermLine::new(PaymentTermLineKind::Fixed(dec!(100)), 0, 0),
            PaymentTermLine::new(PaymentTermLineKind::Remainder, 1, 0),
        ],
    )
    .unwrap();

    let schedule = PaymentTermScheduler::new()
        .compute(&term, dec!(250), Currency::USD, start())
        .unwrap();

    let amounts: Vec<Decimal> = schedule.iter().map(|i| i.amount).collect();
    assert_eq!(amounts, vec![dec!(100), dec!(150)]);
}

#[test]
fn test_empty_term_schedules_nothing() {
    let schedule = PaymentTermScheduler::new()
        .compute(&PaymentTerm::empty(), dec!(500), Currency::USD, start())
        .unwrap();

    assert!(schedule.is_empty());
}

#[test]
fn test_uncovered_amount_rejected() {
    let term = PaymentTerm::new(
        "half",
        vec![PaymentTermLine::new(PaymentTermLineKind::Percent(dec!(0.5)), 0, 0)],
    )
    .unwrap();

    let result = PaymentTermScheduler::new().compute(&term, dec!(100), Currency::USD, start());

    assert!(result.is_err(), "A term leaving money unscheduled must fail");
}

#[test]
fn test_lines_exceeding_total_rejected() {
    let term = PaymentTerm::new(
        "front loaded",
        vec![
            PaymentTermLine::new(PaymentTermLineKind::Percent(dec!(0.8)), 0, 0),
            PaymentTermLine::new(PaymentTermLineKind::Fixed(dec!(50)), 1, 0),
            PaymentTermLine::new(PaymentTermLineKind::Remainder, 2, 0),
        ],
    )
    .unwrap();

    let scheduler = PaymentTermScheduler::new();

    // 80 + 50 overshoots 100; the remainder would be -30
    let result = scheduler.compute(&term, dec!(100), Currency::USD, start());
    assert!(
        matches!(result, Err(AppError::Validation(_))),
        "A negative installment must never be scheduled"
    );

    // On 300 the remainder stays positive
    let schedule = scheduler.compute(&term, dec!(300), Currency::USD, start()).unwrap();
    let amounts: Vec<Decimal> = schedule.iter().map(|i| i.amount).collect();
    assert_eq!(amounts, vec![dec!(240), dec!(50), dec!(10)]);
}

#[test]
fn test_zero_installments_dropped() {
    let term = PaymentTerm::new(
        "all upfront",
        vec![
            PaymentTermLine::new(PaymentTermLineKind::Percent(Decimal::ONE), 0, 0),
            PaymentTermLine::new(PaymentTermLineKind::Remainder, 1, 0),
        ],
    )
    .unwrap();

    let schedule = PaymentTermScheduler::new()
        .compute(&term, dec!(80), Currency::USD, start())
        .unwrap();

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule[0].amount, dec!(80));
}

#[test]
fn test_idr_has_no_decimals() {
    let term = PaymentTerm::equal_monthly(3).unwrap();

    let schedule = PaymentTermScheduler::new()
        .compute(&term, dec!(100000), Currency::IDR, start())
        .unwrap();

    let amounts: Vec<Decimal> = schedule.iter().map(|i| i.amount).collect();
    assert_eq!(amounts, vec![dec!(33333), dec!(33333), dec!(33334)]);
}

#[test]
fn test_conversion_rounds_to_target_currency() {
    let converter = FixedRateConverter::new()
        .with_rate(Currency::USD, Currency::IDR, dec!(15500.5))
        .unwrap();

    assert_eq!(
        converter.convert(Currency::USD, dec!(10.01), Currency::IDR).unwrap(),
        dec!(155160)
    );
    // Inverse rate is used when no direct one is registered
    assert_eq!(
        converter.convert(Currency::IDR, dec!(15500.5), Currency::USD).unwrap(),
        dec!(1.00)
    );
}

#[test]
fn test_missing_rate_fails() {
    let converter = FixedRateConverter::new();

    assert!(converter.convert(Currency::USD, dec!(1), Currency::MYR).is_err());
    assert_eq!(
        converter.convert(Currency::MYR, dec!(12.34), Currency::MYR).unwrap(),
        dec!(12.34)
    );
}

proptest! {
    /// Property: scheduled installments are positive and sum to the total
    #[test]
    fn prop_schedule_sums_to_total(
        cents in 10_000u64..100_000_000u64,
        count in 1u32..24u32,
    ) {
        let total = Decimal::from(cents) / Decimal::from(100);
        let term = PaymentTerm::equal_monthly(count).expect("valid term");

        let schedule = PaymentTermScheduler::new()
            .compute(&term, total, Currency::USD, start())
            .expect("Failed to compute schedule");

        let sum: Decimal = schedule.iter().map(|i| i.amount).sum();
        prop_assert_eq!(sum, total);
        prop_assert!(schedule.iter().all(|i| i.amount > Decimal::ZERO));
        prop_assert!(schedule.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
