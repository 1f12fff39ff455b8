// NetFacts: Relational Fact Extraction for Network Configurations
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Parallel Extraction
//!
//! Extracts the facts of an entire network. The devices are independent of each other, except for
//! the set of all community values, which is computed upfront. Each worker thread writes into its
//! own fact bins, which are merged in hostname order afterwards. Hence, the result does not depend
//! on the number of threads.
//!
//! Configurations are read from a directory containing one JSON file per device. A file that
//! cannot be parsed only excludes that device, just like a device whose extraction is aborted.

use crate::facts::{ConfigurationFactExtractor, ExtractionError, FactBins};
use crate::model::Configuration;
use crate::Error;

use log::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::panic;
use std::path::Path;
use std::sync::Arc;
use std::thread;

/// Device configurations read from a directory.
#[derive(Debug, Default)]
pub struct ConfigDirectory {
    /// Configurations that were parsed successfully, sorted by their file name
    pub configs: Vec<Configuration>,
    /// Files that could not be read or parsed, indexed by their file name without extension
    pub failures: BTreeMap<String, Error>,
}

/// Read a single device configuration from a JSON file.
pub fn read_config(file: impl AsRef<Path>) -> Result<Configuration, Error> {
    let content = fs::read_to_string(file)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read every `*.json` file of the directory as a device configuration. Only an error while
/// listing the directory is returned. Files that cannot be read or parsed are reported in
/// [`ConfigDirectory::failures`], and all other files are still read.
pub fn read_configs(dir: impl AsRef<Path>) -> Result<ConfigDirectory, Error> {
    let mut files = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    files.retain(|p| p.extension().map(|e| e == "json").unwrap_or(false));
    files.sort();

    let mut result = ConfigDirectory::default();
    for file in files {
        debug!("Reading {}", file.display());
        match read_config(&file) {
            Ok(config) => result.configs.push(config),
            Err(e) => {
                error!("Cannot read {}: {}", file.display(), e);
                let name = file.file_stem().map(|s| s.to_string_lossy().into_owned());
                result.failures.insert(name.unwrap_or_default(), e);
            }
        }
    }
    Ok(result)
}

/// Facts of an entire network, together with the diagnostics of every device.
#[derive(Debug, Clone, Default)]
pub struct NetworkFacts {
    /// Merged facts of all devices that were extracted successfully
    pub facts: FactBins,
    /// Warnings of each device, in the order they were raised
    pub warnings: BTreeMap<String, Vec<String>>,
    /// Devices whose extraction was aborted. Their facts are not part of `facts`.
    pub failures: BTreeMap<String, ExtractionError>,
}

impl NetworkFacts {
    /// Returns `true` if no device was aborted.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the failure of the first aborted device, in hostname order.
    pub fn check_complete(&self) -> Result<(), Error> {
        match self.failures.values().next() {
            Some(e) => Err(e.clone().into()),
            None => Ok(()),
        }
    }

    /// Returns the total number of warnings.
    pub fn num_warnings(&self) -> usize {
        self.warnings.values().map(|w| w.len()).sum()
    }
}

/// Returns the union of all communities that are added or set by any device.
pub fn global_communities(configs: &[Configuration]) -> BTreeSet<u32> {
    configs.iter().flat_map(|c| c.communities()).collect()
}

/// Extract the facts of a single device into a fresh set of bins.
pub fn extract_device(
    config: &Configuration,
    all_communities: &BTreeSet<u32>,
) -> (Result<FactBins, ExtractionError>, Vec<String>) {
    let mut bins = FactBins::new();
    let mut extractor = ConfigurationFactExtractor::new(config, all_communities, &mut bins);
    let result = extractor.write_facts();
    let warnings = extractor.into_warnings();
    (result.map(|_| bins), warnings)
}

/// # Extract the facts of the network using multiple parallel threads
///
/// This function spawns `n_threads` worker threads (by default, one per CPU). The devices are
/// distributed among them round-robin. Devices that cannot be extracted are reported in
/// [`NetworkFacts::failures`], and the extraction of all other devices continues.
///
/// ```
/// use netfacts::driver::extract_network;
/// use netfacts::facts::FactType;
/// use netfacts::model::Configuration;
///
/// let configs = vec![Configuration::new("r1", "cisco"), Configuration::new("r0", "juniper")];
/// let result = extract_network(&configs, Some(2));
/// assert!(result.is_complete());
/// assert_eq!(result.facts.get(FactType::SetNodeVendor), "r0|juniper\nr1|cisco\n");
/// ```
pub fn extract_network(configs: &[Configuration], n_threads: Option<usize>) -> NetworkFacts {
    let communities = Arc::new(global_communities(configs));
    debug!("Network uses {} distinct communities", communities.len());

    let n_threads = n_threads.unwrap_or_else(num_cpus::get).max(1).min(configs.len().max(1));
    info!("Extracting facts of {} devices using {} threads", configs.len(), n_threads);

    let handles = (0..n_threads)
        .map(|t| {
            let jobs: Vec<(usize, Configuration)> = configs
                .iter()
                .enumerate()
                .skip(t)
                .step_by(n_threads)
                .map(|(i, c)| (i, c.clone()))
                .collect();
            let communities = communities.clone();
            thread::spawn(move || {
                jobs.into_iter()
                    .map(|(i, c)| {
                        let (result, warnings) = extract_device(&c, &communities);
                        (i, c.hostname, result, warnings)
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect::<Vec<_>>();

    // wait until all threads are done
    let mut results = Vec::with_capacity(configs.len());
    for handle in handles {
        match handle.join() {
            Ok(r) => results.extend(r),
            Err(e) => panic::resume_unwind(e),
        }
    }
    results.sort_by(|a, b| (&a.1, a.0).cmp(&(&b.1, b.0)));

    let mut network = NetworkFacts::default();
    for (_, hostname, result, warnings) in results {
        if !warnings.is_empty() {
            network.warnings.entry(hostname.clone()).or_default().extend(warnings);
        }
        match result {
            Ok(bins) => network.facts.append(&bins),
            Err(e) => {
                error!("Extraction of {} aborted: {}", hostname, e);
                network.failures.insert(hostname, e);
            }
        }
    }

    info!(
        "Extracted {} devices: {} failed, {} warnings",
        configs.len(),
        network.failures.len(),
        network.num_warnings()
    );
    network
}
