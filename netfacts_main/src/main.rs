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

use netfacts::driver::{extract_network, read_configs};
use netfacts::export::device_json;
use netfacts::facts::FactBins;
use netfacts::model::Configuration;
use netfacts::topology::{parse_topology, Topology, TopologyFactExtractor};

use clap::Parser;
use log::*;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    let loaded = read_configs(&args.configs)?;
    let configs = loaded.configs;
    info!("Read {} device configurations", configs.len());

    let topology = match args.topology.as_ref() {
        Some(file) => Some(parse_topology(file)?),
        None => None,
    };

    let mut network = extract_network(&configs, args.threads);
    if let Some(topology) = topology.as_ref() {
        TopologyFactExtractor::new(topology).write_facts(&mut network.facts);
    }

    for (hostname, warnings) in network.warnings.iter() {
        debug!("{}: {} warnings", hostname, warnings.len());
    }
    for (hostname, e) in network.failures.iter() {
        error!("Skipped {}: {}", hostname, e);
    }
    for (file, e) in loaded.failures.iter() {
        error!("Skipped {}: {}", file, e);
    }

    write_facts(&args.output, &network.facts)?;
    if let Some(dir) = args.json.as_ref() {
        write_json(dir, &configs, topology.as_ref())?;
    }

    let num_failed = network.failures.len() + loaded.failures.len();
    info!(
        "Done: {} devices, {} failed, {} warnings",
        configs.len() + loaded.failures.len(),
        num_failed,
        network.num_warnings()
    );

    if args.strict {
        if let Some((file, e)) = loaded.failures.into_iter().next() {
            error!("{} devices could not be extracted, first failure: {}", num_failed, file);
            return Err(e.into());
        }
        network.check_complete()?;
    }

    Ok(())
}

/// Write one `<FactName>.facts` file per fact type.
fn write_facts(dir: &Path, facts: &FactBins) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    for (name, content) in facts.iter() {
        fs::write(dir.join(format!("{}.facts", name)), content)?;
    }
    info!("Facts written to {}", dir.display());
    Ok(())
}

fn write_json(
    dir: &Path,
    configs: &[Configuration],
    topology: Option<&Topology>,
) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    for c in configs {
        let json = serde_json::to_string_pretty(&device_json(c))?;
        fs::write(dir.join(format!("{}.json", c.hostname)), json)?;
    }
    if let Some(topology) = topology {
        let json = serde_json::to_string_pretty(&TopologyFactExtractor::new(topology).to_json())?;
        fs::write(dir.join("topology.json"), json)?;
    }
    info!("JSON objects written to {}", dir.display());
    Ok(())
}

#[derive(Parser, Debug)]
#[clap(name = "NetFacts (Binary)", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Directory containing one JSON configuration per device
    #[clap(short = 'c', long)]
    configs: PathBuf,
    /// Edge list of the physical topology
    #[clap(long)]
    topology: Option<PathBuf>,
    /// Directory into which the fact files are written
    #[clap(short = 'o', long, default_value = "facts")]
    output: PathBuf,
    /// Directory into which the JSON dumps of every device are written
    #[clap(long)]
    json: Option<PathBuf>,
    /// Number of worker threads (defaults to the number of CPUs)
    #[clap(short = 't', long)]
    threads: Option<usize>,
    /// Exit with an error if any device could not be extracted
    #[clap(long)]
    strict: bool,
}
