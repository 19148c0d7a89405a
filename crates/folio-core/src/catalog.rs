//! The six-field CSV catalog format.
//!
//! One header line, then one record per line:
//! `id,name,price,growth_rate,sector,market_cap`. Fields are positional and
//! may not contain the delimiter; there is no quoting in files produced by
//! the screening stage (embedded delimiters are replaced upstream).
//!
//! A malformed record makes the positional format ambiguous for everything
//! after it, so any parse failure aborts the whole load. There are no
//! partial catalogs.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Asset;

/// On-disk shape of one catalog record.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogRecord {
    id: String,
    name: String,
    price: f64,
    growth_rate: f64,
    sector: String,
    market_cap: f64,
}

impl From<&Asset> for CatalogRecord {
    fn from(asset: &Asset) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            price: asset.price,
            growth_rate: asset.growth_rate,
            sector: asset.sector.clone(),
            market_cap: asset.market_cap,
        }
    }
}

/// Loads a catalog file into assets, in file order.
///
/// # Errors
///
/// Returns an error if the file cannot be read, if any record fails to
/// parse, if any record violates an asset invariant (`price > 0`), or if
/// two records share an id. In every case the whole load fails.
pub fn load_catalog(path: impl AsRef<Path>) -> CoreResult<Vec<Asset>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut assets = Vec::new();
    let mut seen = HashSet::new();

    for result in reader.deserialize() {
        let record: CatalogRecord = result?;

        if !seen.insert(record.id.clone()) {
            return Err(CoreError::DuplicateAsset { id: record.id });
        }

        assets.push(Asset::new(
            record.id,
            record.name,
            record.price,
            record.growth_rate,
            record.sector,
            record.market_cap,
        )?);
    }

    Ok(assets)
}

/// Writes assets to a catalog file, header first, in slice order.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a record cannot be
/// serialized.
pub fn store_catalog(path: impl AsRef<Path>, assets: &[Asset]) -> CoreResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for asset in assets {
        writer.serialize(CatalogRecord::from(asset))?;
    }

    writer.flush()?;
    Ok(())
}
