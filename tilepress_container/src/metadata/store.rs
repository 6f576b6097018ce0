//! The `metadata (name, value)` table of an SQLite database.

use anyhow::{Context, Result, bail};
use r2d2::{ManageConnection, Pool, PooledConnection};
use r2d2_sqlite::{SqliteConnectionManager, rusqlite::params};
use std::time::Duration;

/// An SQLite database holding a `metadata (name, value)` table.
///
/// The pool holds a single connection: writers are single-threaded and an in-memory database
/// only exists as long as its connection does.
pub struct MetadataStore {
	name: String,
	pool: Pool<SqliteConnectionManager>,
}

impl MetadataStore {
	/// Wraps an opened database. The `metadata` table is expected to exist.
	///
	/// One connection is opened up front so that an unusable path fails right away instead of
	/// after the pool's retry timeout.
	pub(crate) fn new(name: &str, manager: SqliteConnectionManager) -> Result<MetadataStore> {
		drop(
			manager
				.connect()
				.with_context(|| format!("opening SQLite database {name}"))?,
		);

		let pool = Pool::builder()
			.max_size(1)
			.connection_timeout(Duration::from_secs(5))
			.idle_timeout(None)
			.max_lifetime(None)
			.build(manager)
			.with_context(|| format!("opening SQLite database {name}"))?;

		Ok(MetadataStore {
			name: name.to_string(),
			pool,
		})
	}

	/// Creates a throwaway in-memory store with an empty `metadata` table.
	pub fn open_in_memory() -> Result<MetadataStore> {
		log::debug!("open in-memory metadata store");
		let store = MetadataStore::new(":memory:", SqliteConnectionManager::memory())?;
		store
			.connection()?
			.execute_batch("CREATE TABLE metadata (name text, value text);")
			.context("creating metadata table")?;
		Ok(store)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub(crate) fn connection(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
		self
			.pool
			.get()
			.with_context(|| format!("getting connection to {}", self.name))
	}

	/// Inserts one metadata row.
	pub fn set(&self, name: &str, value: &str) -> Result<()> {
		log::trace!("set metadata {name:?}");
		self
			.connection()?
			.execute(
				"INSERT INTO metadata (name, value) VALUES (?1, ?2)",
				params![name, value],
			)
			.with_context(|| format!("setting metadata key '{name}' in {}", self.name))?;
		Ok(())
	}

	/// Returns the value of the first row named `name`.
	pub fn get(&self, name: &str) -> Result<Option<String>> {
		Ok(self
			.entries()?
			.into_iter()
			.find_map(|(key, value)| (key == name).then_some(value)))
	}

	/// All rows in insertion order.
	///
	/// A row with a NULL name or value means the table was not written by this crate and is
	/// reported as corrupt.
	pub fn entries(&self) -> Result<Vec<(String, String)>> {
		let conn = self.connection()?;
		let mut stmt = conn.prepare("SELECT name, value FROM metadata ORDER BY rowid")?;
		let rows = stmt.query_map([], |row| {
			Ok((row.get::<_, Option<String>>(0)?, row.get::<_, Option<String>>(1)?))
		})?;

		let mut entries = Vec::new();
		for row in rows {
			match row? {
				(Some(name), Some(value)) => entries.push((name, value)),
				_ => bail!("corrupt metadata in {}: null name or value", self.name),
			}
		}
		Ok(entries)
	}
}

impl std::fmt::Debug for MetadataStore {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MetadataStore").field("name", &self.name).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::time::Instant;

	#[test]
	fn keeps_insertion_order() -> Result<()> {
		let store = MetadataStore::open_in_memory()?;
		store.set("name", "roads")?;
		store.set("bounds", "-180,-85,180,85")?;
		store.set("attribution", "OSM")?;

		assert_eq!(
			store.entries()?,
			vec![
				("name".to_string(), "roads".to_string()),
				("bounds".to_string(), "-180,-85,180,85".to_string()),
				("attribution".to_string(), "OSM".to_string()),
			]
		);
		assert_eq!(store.get("bounds")?.as_deref(), Some("-180,-85,180,85"));
		assert_eq!(store.get("center")?, None);
		Ok(())
	}

	#[test]
	fn null_rows_are_corrupt() -> Result<()> {
		let store = MetadataStore::open_in_memory()?;
		store
			.connection()?
			.execute("INSERT INTO metadata (name, value) VALUES ('name', NULL)", [])?;

		let error = store.entries().unwrap_err();
		assert!(error.to_string().contains("null name or value"), "{error}");
		Ok(())
	}

	#[test]
	fn unopenable_path_fails_fast() {
		let dir = assert_fs::TempDir::new().unwrap();
		let path = dir.path().join("missing").join("tiles.mbtiles");

		let start = Instant::now();
		let error = MetadataStore::new("tiles.mbtiles", SqliteConnectionManager::file(&path)).unwrap_err();
		assert!(start.elapsed() < Duration::from_secs(5), "took {:?}", start.elapsed());
		assert!(format!("{error:#}").contains("opening SQLite database tiles.mbtiles"), "{error:#}");
	}
}
