use crate::application::commands::Command;
use crate::error::{BankError, Result};
use std::io::Read;

/// Reads commands from a CSV script with the header
/// `command, branch, customer, amount`.
///
/// Whitespace around fields is trimmed and rows may omit trailing fields.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and deserializes commands, one per row.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(BankError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::CommandType;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_stream() {
        let data = "command, branch, customer, amount\n\
                    add_branch, Central\n\
                    add_customer, Central, Alice, 100.00\n\
                    remove_transaction, Central, Alice,";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<Command>> = reader.commands().collect();

        assert_eq!(results.len(), 3);

        let first = results[0].as_ref().unwrap();
        assert_eq!(first.command, CommandType::AddBranch);
        assert_eq!(first.branch.as_deref(), Some("Central"));
        assert_eq!(first.customer, None);
        assert_eq!(first.amount, None);

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.customer.as_deref(), Some("Alice"));
        assert_eq!(second.amount, Some(dec!(100.00)));

        let third = results[2].as_ref().unwrap();
        assert_eq!(third.command, CommandType::RemoveTransaction);
        assert_eq!(third.amount, None);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "command, branch, customer, amount\n\
                    open_vault, Central\n\
                    add_customer, Central, Alice, lots";
        let reader = CommandReader::new(data.as_bytes());
        let results: Vec<Result<Command>> = reader.commands().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(BankError::Csv(_))));
        assert!(matches!(results[1], Err(BankError::Csv(_))));
    }
}
