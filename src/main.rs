use solsim::{run_2d, Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML under scenarios/; built-in inner-planets preset if omitted
    #[arg(short)]
    file_name: Option<String>,
}

// load here to keep main clean
fn load_scenario_config() -> Result<ScenarioConfig> {
    let args = Args::parse();

    let Some(file_name) = args.file_name else {
        return Ok(ScenarioConfig::inner_planets());
    };

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let scenario_cfg = load_scenario_config()?;

    let scenario = Scenario::build_scenario(scenario_cfg);
    run_2d(scenario);

    Ok(())
}
