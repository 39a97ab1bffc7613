// Middleman and commission type defaulting on draft sales

use rust_decimal_macros::dec;

use sale_commission::commission_types::CommissionType;
use sale_commission::core::AppError;
use sale_commission::parties::{Party, PartyDirectory};
use sale_commission::sales::{change_customer, change_middleman, derive_defaults, Sale, SaleDefaults};

struct World {
    directory: PartyDirectory,
    retail: CommissionType,
    wholesale: CommissionType,
}

/// Middleman 1 enrolled in retail then wholesale, middleman 2 in nothing,
/// customer 10 referred by 1, customer 11 referred by 2, customer 12 direct
fn world() -> World {
    let mut directory = PartyDirectory::new();
    let mut retail = CommissionType::new(100, "Retail").with_line(1, 1, dec!(0.05)).unwrap();
    let mut wholesale = CommissionType::new(200, "Wholesale").with_line(2, 1, dec!(0.02)).unwrap();

    let agent = Party::middleman(1, "Agent", Vec::new());
    let idle = Party::middleman(2, "Idle agent", Vec::new());
    directory.upsert(agent.clone()).unwrap();
    directory.upsert(idle.clone()).unwrap();
    directory.enroll(1, &mut retail).unwrap();
    directory.enroll(1, &mut wholesale).unwrap();

    directory
        .upsert(Party::customer(10, "Referred", Some(&agent)).unwrap())
        .unwrap();
    directory
        .upsert(Party::customer(11, "Referred by idle", Some(&idle)).unwrap())
        .unwrap();
    directory.upsert(Party::customer(12, "Direct", None).unwrap()).unwrap();

    World {
        directory,
        retail,
        wholesale,
    }
}

#[test]
fn test_enrolment_recorded_on_both_sides() {
    let w = world();

    assert_eq!(w.directory.get(1).unwrap().commissions(), &[100, 200]);
    assert!(w.retail.parties.contains(&1));
    assert!(w.wholesale.parties.contains(&1));
}

#[test]
fn test_defaults_take_first_enrolled_type() {
    let w = world();
    let customer = w.directory.get(10).unwrap();

    let defaults = derive_defaults(customer, &w.directory).unwrap();

    assert_eq!(defaults.middleman, Some(1));
    assert_eq!(defaults.commission_type, Some(100));
    assert!(defaults.ambiguous, "Two enrolled types must be flagged");
}

#[test]
fn test_customer_without_middleman_gets_nothing() {
    let w = world();
    let customer = w.directory.get(12).unwrap();

    assert_eq!(
        derive_defaults(customer, &w.directory).unwrap(),
        SaleDefaults::default()
    );
}

#[test]
fn test_middleman_without_types_is_prefilled_alone() {
    let w = world();
    let customer = w.directory.get(11).unwrap();

    let defaults = derive_defaults(customer, &w.directory).unwrap();

    assert_eq!(defaults.middleman, Some(2));
    assert_eq!(defaults.commission_type, None);
    assert!(!defaults.ambiguous);
}

#[test]
fn test_chosen_middleman_kept_without_types() {
    let w = world();
    let mut sale = Sale::new(1, 12);

    let defaults = change_middleman(&mut sale, Some(w.directory.get(2).unwrap())).unwrap();

    assert_eq!(defaults.middleman, Some(2));
    assert_eq!(defaults.commission_type, None);
    assert_eq!(sale.middleman(), Some(2));
    assert_eq!(sale.commission_type(), None);
    // The type has to be picked before the sale can be confirmed
    assert!(sale.confirm().is_err());
}

#[test]
fn test_customer_of_idle_middleman_refreshes_sale() {
    let w = world();
    let mut sale = Sale::new(1, 12);

    change_customer(&mut sale, w.directory.get(11).unwrap(), &w.directory).unwrap();

    assert_eq!(sale.middleman(), Some(2));
    assert_eq!(sale.commission_assignment(), None);
}

#[test]
fn test_change_customer_refreshes_sale() {
    let w = world();
    let mut sale = Sale::new(1, 12);

    change_customer(&mut sale, w.directory.get(10).unwrap(), &w.directory).unwrap();
    assert_eq!(sale.customer(), 10);
    assert_eq!(sale.commission_assignment(), Some((1, 100)));

    change_customer(&mut sale, w.directory.get(12).unwrap(), &w.directory).unwrap();
    assert_eq!(sale.customer(), 12);
    assert_eq!(sale.commission_assignment(), None);
}

#[test]
fn test_change_middleman_sets_type() {
    let w = world();
    let mut sale = Sale::new(1, 12);

    let defaults = change_middleman(&mut sale, Some(w.directory.get(1).unwrap())).unwrap();
    assert_eq!(defaults.commission_type, Some(100));
    assert_eq!(sale.commission_assignment(), Some((1, 100)));

    change_middleman(&mut sale, None).unwrap();
    assert_eq!(sale.middleman(), None);
    assert_eq!(sale.commission_type(), None);
}

#[test]
fn test_customer_cannot_be_middleman() {
    let w = world();
    let mut sale = Sale::new(1, 12);

    let err = change_middleman(&mut sale, Some(w.directory.get(10).unwrap())).unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(sale.middleman(), None);
}

#[test]
fn test_confirmed_sale_keeps_its_commission() {
    let w = world();
    let mut sale = Sale::new(1, 10);
    change_customer(&mut sale, w.directory.get(10).unwrap(), &w.directory).unwrap();
    sale.confirm().unwrap();

    let result = change_customer(&mut sale, w.directory.get(12).unwrap(), &w.directory);

    assert!(result.is_err());
    assert_eq!(sale.customer(), 10);
    assert_eq!(sale.commission_assignment(), Some((1, 100)));
}

#[test]
fn test_referenced_middleman_cannot_turn_customer() {
    let mut w = world();

    let result = w.directory.upsert(Party::customer(1, "Agent", None).unwrap());

    assert!(result.is_err());
    assert!(w.directory.get(1).unwrap().is_middleman());
}
