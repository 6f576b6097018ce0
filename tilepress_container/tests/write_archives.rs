use anyhow::Result;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use r2d2_sqlite::rusqlite::Connection;
use std::fs;
use tilepress_container::*;
use tilepress_core::*;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

/// Two workers that both saw the `roads` layer, one of them also `water`.
fn shards(config: &TilestatsConfig) -> Vec<LayerMap> {
	let mut first = LayerEntry {
		lines: 3,
		minzoom: 2,
		maxzoom: 10,
		..LayerEntry::new(0)
	};
	add_sample(&mut first.file_keys, "highway", &TypeAndString::new_string("primary"), config);
	add_sample(&mut first.file_keys, "lanes", &TypeAndString::new_double(2.0), config);

	let mut second = LayerEntry {
		lines: 2,
		minzoom: 0,
		maxzoom: 14,
		..LayerEntry::new(0)
	};
	add_sample(&mut second.file_keys, "highway", &TypeAndString::new_string("residential"), config);
	add_sample(&mut second.file_keys, "lanes", &TypeAndString::new_double(4.0), config);

	let water = LayerEntry {
		polygons: 1,
		maxzoom: 14,
		..LayerEntry::new(1)
	};

	vec![
		LayerMap::from([("roads".to_string(), first)]),
		LayerMap::from([("roads".to_string(), second), ("water".to_string(), water)]),
	]
}

#[test]
fn mbtiles_with_metadata() -> Result<()> {
	init_logger();
	let config = TilestatsConfig::default();
	let layermap = LayerMapMerger::new(config).merge(&shards(&config), false);
	assert_eq!(layermap["roads"].feature_count(), 5);
	assert_eq!((layermap["roads"].minzoom, layermap["roads"].maxzoom), (0, 14));

	let dir = TempDir::new()?;
	let path = dir.path().join("roads.mbtiles");
	let mut writer = ArchiveFormat::from_path(&path)?.open_writer(&path, WriterOptions::default())?;
	writer.write_tile(&TileCoord::new(0, 0, 0)?, &Blob::from("z0"))?;
	writer.write_tile(&TileCoord::new(1, 0, 0)?, &Blob::from("z1"))?;

	let tileset = TilesetMetadata {
		maxzoom: 14,
		center: GeoCenter(13.4, 52.5, 14),
		..TilesetMetadata::new("roads")
	};
	MetadataWriter::new(config).write(writer.metadata_store(), Some(dir.path()), &tileset, &layermap, false)?;
	let summary = writer.finalize()?;
	assert_eq!(summary.tile_count, 2);

	let conn = Connection::open(&path)?;
	let json: String = conn.query_row("SELECT value FROM metadata WHERE name = 'json'", [], |row| row.get(0))?;
	assert!(json.contains(r#""fields": {"highway": "String", "lanes": "Number"}"#), "{json}");
	assert!(
		json.contains(r#""values": ["primary","residential"]"#),
		"{json}"
	);
	assert!(json.contains(r#""values": [2,4],"min": 2,"max": 4"#), "{json}");
	assert!(json.contains(r#""layer": "water","count": 1,"geometry": "Polygon""#), "{json}");

	let center: String = conn.query_row("SELECT value FROM metadata WHERE name = 'center'", [], |row| row.get(0))?;
	assert_eq!(center, "13.400000,52.500000,14");

	let rows: u32 = conn.query_row("SELECT count(*) FROM tiles WHERE zoom_level = 1 AND tile_row = 1", [], |row| {
		row.get(0)
	})?;
	assert_eq!(rows, 1);

	let sidecar = fs::read_to_string(dir.path().join(SIDECAR_FILE_NAME))?;
	assert!(sidecar.starts_with("{\n\"name\": \"roads\",\n"), "{sidecar}");
	assert!(sidecar.contains("\n\"json\": \"{\\\"vector_layers\\\": ["), "{sidecar}");
	Ok(())
}

#[test]
fn pmtiles_with_sidecar() -> Result<()> {
	init_logger();
	let dir = TempDir::new()?;
	let path = dir.path().join("roads.pmtiles");

	let mut writer = ArchiveFormat::from_path(&path)?.open_writer(&path, WriterOptions::default())?;
	for (index, coord) in [TileCoord::new(0, 0, 0)?, TileCoord::new(1, 1, 0)?].iter().enumerate() {
		writer.write_tile(coord, &Blob::from(vec![index as u8; 8]))?;
	}
	assert!(writer.metadata_store().is_none());

	let layermap = merge_layermaps(&shards(&TilestatsConfig::default()));
	MetadataWriter::default().write(
		writer.metadata_store(),
		Some(dir.path()),
		&TilesetMetadata::new("roads"),
		&layermap,
		false,
	)?;

	let summary = writer.finalize()?;
	assert_eq!(
		summary,
		ArchiveSummary {
			tile_count: 2,
			bytes_written: 16
		}
	);
	assert_eq!(fs::metadata(&path)?.len(), 512_016);
	assert!(dir.path().join(SIDECAR_FILE_NAME).exists());

	assert!(ArchiveFormat::PMTiles.open_writer(&path, WriterOptions::default()).is_err());
	Ok(())
}
