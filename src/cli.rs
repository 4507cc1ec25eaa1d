// SPDX-License-Identifier: GPL-3.0-only

//! CLI commands for history inspection
//!
//! This module provides command-line functionality for:
//! - Listing the persisted photo and barcode history
//! - Clearing history lists
//! - Resolving barcode payloads to URLs

use scanshot::config::Config;
use scanshot::history::HistoryStore;
use scanshot::session::link;
use scanshot::session::{SystemUrlOpener, UrlOpener};
use scanshot::storage::FileStore;
use tracing::error;

fn open_history(config: &Config) -> Result<HistoryStore<FileStore>, Box<dyn std::error::Error>> {
    let store = match &config.data_dir {
        Some(dir) => FileStore::new(dir.clone()),
        None => FileStore::in_data_dir().ok_or("no data directory available")?,
    };
    Ok(HistoryStore::new(store))
}

/// Print both history lists
pub fn show_history() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let history = open_history(&config)?;
    let rt = tokio::runtime::Runtime::new()?;

    let (photos, barcodes) = rt.block_on(async {
        let photos = history.load_photos().await;
        let barcodes = history.load_barcodes().await;
        (photos, barcodes)
    });

    if photos.is_empty() {
        println!("No captured photos.");
    } else {
        println!("Captured photos:");
        for (index, photo) in photos.iter().enumerate() {
            println!("  [{}] {}", index, photo.uri);
        }
    }
    println!();

    if barcodes.is_empty() {
        println!("No scanned barcodes.");
    } else {
        println!("Scanned barcodes:");
        for (index, payload) in barcodes.iter().enumerate() {
            println!("  [{}] {}", index, payload);
        }
    }

    Ok(())
}

/// Clear the barcode history, and optionally the photo history
pub fn clear_history(include_photos: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let history = open_history(&config)?;
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(history.clear_barcode_history())?;
    println!("Barcode history cleared.");

    if include_photos {
        if config.allow_photo_clear {
            rt.block_on(history.clear_photo_history())?;
            println!("Photo history cleared.");
        } else {
            println!("Photo history untouched (allow_photo_clear is disabled).");
        }
    }

    Ok(())
}

/// Print the URL a payload resolves to, optionally launching it
pub fn resolve_payload(payload: &str, launch: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load();
    let url = link::resolve(payload, &config.search_url);
    println!("{}", url);

    if launch {
        if let Err(err) = SystemUrlOpener.open(&url) {
            error!(url = %url, error = %err, "Failed to open URL");
        }
    }

    Ok(())
}
