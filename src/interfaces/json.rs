use crate::domain::bank::Bank;
use crate::error::Result;
use std::io::Write;

/// Writes a pretty-printed JSON snapshot of the whole bank.
pub fn write_snapshot<W: Write>(mut sink: W, bank: &Bank) -> Result<()> {
    serde_json::to_writer_pretty(&mut sink, bank)?;
    writeln!(sink)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_snapshot_shape() {
        let mut bank = Bank::new("Test Bank");
        bank.add_branch("Central").unwrap();
        bank.add_customer("Central", "Alice", dec!(100)).unwrap();
        bank.add_transaction("Central", "Alice", dec!(50.5)).unwrap();

        let mut out = Vec::new();
        write_snapshot(&mut out, &bank).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(
            value,
            json!({
                "brand_name": "Test Bank",
                "branches": [{
                    "name": "Central",
                    "customers": [{
                        "name": "Alice",
                        "transactions": ["100.00", "50.50"]
                    }]
                }]
            })
        );
    }
}
