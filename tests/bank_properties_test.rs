use branchbook::domain::bank::Bank;
use branchbook::error::{BankError, EntityKind};
use rand::Rng;
use rand::seq::SliceRandom;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn random_case(name: &str, rng: &mut impl Rng) -> String {
    name.chars()
        .map(|c| {
            if rng.gen_bool(0.5) {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

#[test]
fn test_any_case_variant_is_a_duplicate() {
    let mut rng = rand::thread_rng();
    let names = ["Central", "North", "South", "Canary Wharf", "Leeds-2"];

    let mut bank = Bank::new("Test Bank");
    for name in names {
        bank.add_branch(name).unwrap();
    }

    for _ in 0..200 {
        let name = names.choose(&mut rng).unwrap();
        let variant = random_case(name, &mut rng);
        assert!(matches!(
            bank.add_branch(&variant),
            Err(BankError::DuplicateName {
                kind: EntityKind::Branch,
                ..
            })
        ));
        assert_eq!(bank.find_branch(&variant).unwrap().name(), *name);
    }
    assert_eq!(bank.branch_names().count(), names.len());
}

#[test]
fn test_customer_lookup_with_random_case() {
    let mut rng = rand::thread_rng();
    let mut bank = Bank::new("Test Bank");
    bank.add_branch("Central").unwrap();
    bank.add_customer("Central", "Alice", dec!(100.00)).unwrap();

    for i in 1..=50 {
        let branch = random_case("Central", &mut rng);
        let customer = random_case("Alice", &mut rng);
        bank.add_transaction(&branch, &customer, Decimal::from(i))
            .unwrap();
    }

    let history: Vec<Decimal> = bank
        .transactions("CENTRAL", "ALICE")
        .unwrap()
        .map(Decimal::from)
        .collect();
    assert_eq!(history.len(), 51);
    assert_eq!(history[0], dec!(100.00));
    assert!(history[1..].windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_random_invalid_amounts_never_create_customers() {
    let mut rng = rand::thread_rng();
    let mut bank = Bank::new("Test Bank");
    bank.add_branch("Central").unwrap();

    for i in 0..100 {
        let pence: i64 = rng.gen_range(-1_000_000..=0);
        let amount = Decimal::new(pence, 2);
        let result = bank.add_customer("Central", &format!("Customer {i}"), amount);
        assert!(matches!(result, Err(BankError::InvalidAmount(_))));
    }
    assert_eq!(bank.customer_names("Central").unwrap().count(), 0);
}
