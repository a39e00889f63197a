use anyhow::Result;
use log::*;
use std::io::{self, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use xray_utils::{
    load_config, Endpoint, ExtractError, Prompt, TerminalPrompt, VlessLink, DEFAULT_ALIAS,
    DEFAULT_CONFIG_PATH,
};

#[derive(Debug, StructOpt)]
#[structopt(
    name = "vless-genuri",
    about = "Parse an Xray (VLESS) configuration and print a vless:// link"
)]
struct Options {
    /// Activate debug mode
    #[structopt(short, long)]
    debug: bool,

    /// A path to your Xray (VLESS) config.json
    #[structopt(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Display name appended to the link
    #[structopt(short, long, default_value = DEFAULT_ALIAS)]
    name: String,
}

impl Options {
    fn run(&self, prompt: &mut dyn Prompt, out: &mut dyn Write) -> Result<()> {
        let config = load_config(&self.config)?;

        match Endpoint::from_config(&config, prompt) {
            Ok(endpoint) => {
                debug!("Extracted endpoint: {:?}", endpoint);
                writeln!(out, "{}", VlessLink::new(&endpoint, &self.name))?;
            }
            // Bad documents are reported, not treated as a failed run.
            Err(err) if err.is_structural() => {
                if let ExtractError::Structure { path } = &err {
                    debug!("Unexpected value at {}", path);
                }
                writeln!(out, "Error: {}", err)?;
            }
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }
}

fn main() {
    let options = Options::from_args();
    let is_debug = options.debug;

    let default_level = match is_debug {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };

    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), default_level)
        .filter(Some("xray_utils"), default_level)
        .filter(None, log::LevelFilter::Info)
        .init();

    let result = options.run(&mut TerminalPrompt, &mut io::stdout());
    if let Err(err) = result {
        match is_debug {
            true => println!("error: {:?}", err),
            false => println!("error: {}", err),
        }
        std::process::exit(1);
    }
}
