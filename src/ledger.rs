use crate::error::Error;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// New ledger balance after one draw: the fixed stake comes off, winnings
/// (possibly zero) go on. Minor currency units throughout.
pub fn update_ledger(previous_balance: i64, stake: i64, winnings: i64) -> i64 {
    previous_balance - stake + winnings
}

/// External key-value store holding the investment balance. Read and write
/// failures surface as `LedgerUnavailable`; no locking is provided, so runs
/// must not execute concurrently.
pub trait LedgerStore {
    fn get_value(&self, key: &str) -> Result<i64, Error>;
    fn set_value(&self, key: &str, value: i64) -> Result<(), Error>;
}

/// SQLite-backed ledger store. A key read before it was ever written is
/// seeded at 0 so a fresh database starts from an empty balance.
pub struct SqliteLedgerStore {
    conn: Connection,
}

impl SqliteLedgerStore {
    pub fn open(database_url: &str) -> Result<Self, Error> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(Error::ledger)?;
            }
        }
        let conn = Connection::open(database_url).map_err(Error::ledger)?;
        Self::from_connection(conn)
    }

    pub fn from_connection(conn: Connection) -> Result<Self, Error> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS ledger (
                key TEXT PRIMARY KEY,
                value INTEGER NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .map_err(Error::ledger)?;
        Ok(SqliteLedgerStore { conn })
    }
}

impl LedgerStore for SqliteLedgerStore {
    fn get_value(&self, key: &str) -> Result<i64, Error> {
        self.conn
            .execute(
                "INSERT OR IGNORE INTO ledger (key, value) VALUES (?1, 0)",
                [key],
            )
            .map_err(Error::ledger)?;
        self.conn
            .query_row("SELECT value FROM ledger WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .map_err(Error::ledger)
    }

    fn set_value(&self, key: &str, value: i64) -> Result<(), Error> {
        self.conn
            .execute(
                "INSERT INTO ledger (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                     value = excluded.value,
                     updated_at = CURRENT_TIMESTAMP",
                (key, value),
            )
            .map_err(Error::ledger)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> SqliteLedgerStore {
        SqliteLedgerStore::from_connection(Connection::open_in_memory().unwrap()).unwrap()
    }

    #[test]
    fn stake_comes_off_winnings_go_on() {
        assert_eq!(update_ledger(1000, 200, 0), 800);
        assert_eq!(update_ledger(800, 200, 5000), 5600);
    }

    #[test]
    fn balance_may_go_negative() {
        assert_eq!(update_ledger(100, 200, 0), -100);
        assert_eq!(update_ledger(-100, 200, 50), -250);
    }

    #[test]
    fn unseen_key_reads_as_zero() {
        let store = memory_store();
        assert_eq!(store.get_value("eurojackpot-investment").unwrap(), 0);
    }

    #[test]
    fn stored_value_round_trips() {
        let store = memory_store();
        store.set_value("eurojackpot-investment", -4200).unwrap();
        assert_eq!(store.get_value("eurojackpot-investment").unwrap(), -4200);

        store.set_value("eurojackpot-investment", 5600).unwrap();
        assert_eq!(store.get_value("eurojackpot-investment").unwrap(), 5600);
    }

    #[test]
    fn keys_are_independent() {
        let store = memory_store();
        store.set_value("a", 100).unwrap();
        store.set_value("b", 200).unwrap();
        assert_eq!(store.get_value("a").unwrap(), 100);
        assert_eq!(store.get_value("b").unwrap(), 200);
    }
}
