use crate::domain::name::fold_case;
use crate::domain::ports::{RecordKey, RecordStore};
use crate::error::{BankError, EntityKind, Result};
use async_trait::async_trait;
use std::fmt::Write as _;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A record store writing one value per line to plain text files.
///
/// Layout under `root`:
///
/// * `<branch>_customers.txt` for the customer names of a branch.
/// * `<branch>/<customer>_transactions.txt` for a customer's transactions.
///
/// Names are case-folded with the same per-character fold used for lookups,
/// and every UTF-8 byte outside `[a-z0-9]` is escaped as `%XX`. Two names get
/// the same file exactly when they match, and no path ever contains a
/// separator, `..`, or an empty file stem.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
}

impl FileRecordStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Resolves the file backing `key`.
    pub fn path_for(&self, key: &RecordKey) -> Result<PathBuf> {
        match key {
            RecordKey::Customers { branch } => {
                let branch = escape_name(EntityKind::Branch, branch)?;
                Ok(self.root.join(format!("{branch}_customers.txt")))
            }
            RecordKey::Transactions { branch, customer } => {
                let branch = escape_name(EntityKind::Branch, branch)?;
                let customer = escape_name(EntityKind::Customer, customer)?;
                Ok(self
                    .root
                    .join(branch)
                    .join(format!("{customer}_transactions.txt")))
            }
        }
    }

    fn branch_dir(&self, branch: &str) -> Result<PathBuf> {
        Ok(self.root.join(escape_name(EntityKind::Branch, branch)?))
    }
}

fn escape_name(kind: EntityKind, name: &str) -> Result<String> {
    if name.trim().is_empty() {
        return Err(BankError::InvalidName(kind));
    }
    let mut escaped = String::with_capacity(name.len());
    let mut utf8 = [0u8; 4];
    for c in fold_case(name) {
        for &byte in c.encode_utf8(&mut utf8).as_bytes() {
            if byte.is_ascii_lowercase() || byte.is_ascii_digit() {
                escaped.push(byte as char);
            } else {
                // Writing into a String cannot fail.
                let _ = write!(escaped, "%{byte:02X}");
            }
        }
    }
    Ok(escaped)
}

fn ignore_missing(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn write_lines(&self, key: &RecordKey, lines: Vec<String>) -> Result<()> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let mut contents = String::new();
        for line in lines {
            contents.push_str(&line);
            contents.push('\n');
        }
        fs::write(&path, contents).await?;
        Ok(())
    }

    async fn read_lines(&self, key: &RecordKey) -> Result<Vec<String>> {
        let path = self.path_for(key)?;
        let contents = fs::read_to_string(&path).await?;
        Ok(contents.lines().map(String::from).collect())
    }

    async fn remove(&self, key: &RecordKey) -> Result<()> {
        let path = self.path_for(key)?;
        ignore_missing(fs::remove_file(&path).await)?;
        if let RecordKey::Customers { branch } = key {
            let dir = self.branch_dir(branch)?;
            ignore_missing(fs::remove_dir_all(&dir).await)?;
        }
        Ok(())
    }
}
