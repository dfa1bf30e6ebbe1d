//! SQLite store.
//!
//! Every operation opens its own connection, ensures the schema exists,
//! runs a single statement in autocommit mode and closes the connection.
//! Nothing is pooled and no handle outlives a call. The blocking work runs
//! on tokio's blocking pool.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::{debug, info};

use crate::domain::menu::{Availability, MenuItem, MenuItemDraft, MenuRepository};
use crate::domain::ordering::{Order, OrderRepository, OrderStatus};
use crate::domain::shared::{MenuItemId, Money, OrderId, StorageFault};

/// Schema installed on every connection. Existing tables are left as they are.
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS menu (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    price REAL NOT NULL,
    available TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS orders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    items TEXT NOT NULL,
    total_price REAL NOT NULL,
    status TEXT NOT NULL DEFAULT 'Pending'
);
";

/// How long a statement waits on a locked database file before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl From<rusqlite::Error> for StorageFault {
    fn from(err: rusqlite::Error) -> Self {
        Self::Query(err.to_string())
    }
}

/// Menu and order storage in a single SQLite file.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open the store, creating the file, its parent directory and both
    /// tables if they are missing.
    ///
    /// # Errors
    ///
    /// Returns error if the directory or database cannot be created, or the
    /// schema cannot be installed.
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self, StorageFault> {
        let db_path = db_path.as_ref().to_path_buf();
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageFault::Connection(format!("create {}: {e}", parent.display()))
            })?;
        }

        with_connection(&db_path, |_| Ok(()))?;
        info!(db_path = %db_path.display(), "SQLite store ready");

        Ok(Self { db_path })
    }

    /// Run one statement on a fresh connection on the blocking pool.
    async fn run<T, F>(&self, operation: &'static str, statement: F) -> Result<T, StorageFault>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> rusqlite::Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        debug!(operation, "Running storage operation");
        tokio::task::spawn_blocking(move || with_connection(&db_path, statement))
            .await
            .map_err(|e| StorageFault::Worker(format!("{operation}: {e}")))?
    }
}

/// Open a connection, run `statement`, and close the connection.
///
/// On failure the connection is dropped, which also closes it.
fn with_connection<T>(
    db_path: &Path,
    statement: impl FnOnce(&Connection) -> rusqlite::Result<T>,
) -> Result<T, StorageFault> {
    let conn = connect(db_path)?;
    let value = statement(&conn)?;
    conn.close()
        .map_err(|(_, e)| StorageFault::Connection(e.to_string()))?;
    Ok(value)
}

fn connect(db_path: &Path) -> Result<Connection, StorageFault> {
    let conn = Connection::open(db_path)
        .map_err(|e| StorageFault::Connection(format!("open {}: {e}", db_path.display())))?;
    conn.busy_timeout(BUSY_TIMEOUT)
        .map_err(|e| StorageFault::Connection(e.to_string()))?;
    conn.execute_batch(SCHEMA)?;
    Ok(conn)
}

fn money_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Money> {
    let raw: f64 = row.get(idx)?;
    Money::from_f64(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Real, Box::new(e)))
}

fn menu_item_from_row(row: &Row<'_>) -> rusqlite::Result<MenuItem> {
    Ok(MenuItem {
        id: MenuItemId::new(row.get(0)?),
        name: row.get(1)?,
        category: row.get(2)?,
        price: money_column(row, 3)?,
        available: Availability::from(row.get::<_, String>(4)?),
    })
}

fn order_from_row(row: &Row<'_>) -> rusqlite::Result<Order> {
    Ok(Order {
        id: OrderId::new(row.get(0)?),
        items: row.get(1)?,
        total_price: money_column(row, 2)?,
        status: OrderStatus::from(row.get::<_, String>(3)?),
    })
}

#[async_trait]
impl MenuRepository for SqliteStore {
    async fn list_menu(&self) -> Result<Vec<MenuItem>, StorageFault> {
        self.run("list_menu", |conn| {
            let mut stmt = conn.prepare("SELECT id, name, category, price, available FROM menu")?;
            let rows = stmt.query_map([], menu_item_from_row)?;
            rows.collect()
        })
        .await
    }

    async fn add_menu_item(&self, draft: MenuItemDraft) -> Result<MenuItemId, StorageFault> {
        self.run("add_menu_item", move |conn| {
            conn.execute(
                "INSERT INTO menu (name, category, price, available) VALUES (?1, ?2, ?3, ?4)",
                params![
                    draft.name,
                    draft.category,
                    draft.price.to_f64(),
                    draft.available.as_str(),
                ],
            )?;
            Ok(MenuItemId::new(conn.last_insert_rowid()))
        })
        .await
    }

    async fn delete_menu_item(&self, id: MenuItemId) -> Result<usize, StorageFault> {
        self.run("delete_menu_item", move |conn| {
            conn.execute("DELETE FROM menu WHERE id = ?1", params![id.value()])
        })
        .await
    }

    async fn update_menu_item(
        &self,
        id: MenuItemId,
        draft: MenuItemDraft,
    ) -> Result<usize, StorageFault> {
        self.run("update_menu_item", move |conn| {
            conn.execute(
                "UPDATE menu SET name = ?1, category = ?2, price = ?3, available = ?4 WHERE id = ?5",
                params![
                    draft.name,
                    draft.category,
                    draft.price.to_f64(),
                    draft.available.as_str(),
                    id.value(),
                ],
            )
        })
        .await
    }
}

#[async_trait]
impl OrderRepository for SqliteStore {
    async fn place_order(&self, items: &str, total_price: Money) -> Result<OrderId, StorageFault> {
        let items = items.to_owned();
        self.run("place_order", move |conn| {
            conn.execute(
                "INSERT INTO orders (items, total_price) VALUES (?1, ?2)",
                params![items, total_price.to_f64()],
            )?;
            Ok(OrderId::new(conn.last_insert_rowid()))
        })
        .await
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: &OrderStatus,
    ) -> Result<usize, StorageFault> {
        let status = status.as_str().to_owned();
        self.run("update_order_status", move |conn| {
            conn.execute(
                "UPDATE orders SET status = ?1 WHERE id = ?2",
                params![status, id.value()],
            )
        })
        .await
    }

    async fn list_orders(&self) -> Result<Vec<Order>, StorageFault> {
        self.run("list_orders", |conn| {
            let mut stmt = conn.prepare("SELECT id, items, total_price, status FROM orders")?;
            let rows = stmt.query_map([], order_from_row)?;
            rows.collect()
        })
        .await
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<Order>, StorageFault> {
        self.run("find_order", move |conn| {
            conn.query_row(
                "SELECT id, items, total_price, status FROM orders WHERE id = ?1",
                params![id.value()],
                order_from_row,
            )
            .optional()
        })
        .await
    }
}
