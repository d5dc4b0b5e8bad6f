use clap::Parser;
use memento_core::Timings;
use wasm_bindgen::prelude::*;

mod game;
mod host;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Milliseconds a mismatched pair stays face up
    #[arg(long)]
    hide_delay: Option<u32>,
}

impl Args {
    /// Arguments are read from the location hash, e.g. `#-vv&--seed=42`
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(hash.split(['#', '&']))
    }

    fn timings(&self) -> Timings {
        let mut timings = Timings::default();
        if let Some(hide_delay) = self.hide_delay {
            timings.mismatch_hide_ms = hide_delay;
        }
        timings
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();
    let (args, hash_error) = match Args::from_location_hash(&location_hash) {
        Ok(args) => (args, None),
        Err(err) => (Args::parse_from([""]), Some(err)),
    };
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }

    let seed = args.seed.unwrap_or_else(utils::js_random_seed);
    log::debug!("seed: {}", seed);

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    let props = game::GameProps {
        seed,
        timings: args.timings(),
    };
    yew::Renderer::<game::GameView>::with_root_and_props(root, props).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_hash_uses_defaults() {
        let args = Args::from_location_hash("").unwrap();
        assert_eq!(args.seed, None);
        assert_eq!(args.timings(), Timings::default());
        assert_eq!(args.verbose.log_level(), Some(log::Level::Error));
    }

    #[test]
    fn hash_arguments_override_defaults() {
        let args = Args::from_location_hash("#-vv&--seed=42&--hide-delay=900").unwrap();
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.timings().mismatch_hide_ms, 900);
        assert_eq!(args.timings().tick_ms, 1000);
        assert_eq!(args.verbose.log_level(), Some(log::Level::Info));
    }

    #[test]
    fn bad_hash_is_rejected() {
        assert!(Args::from_location_hash("#--seed=soon").is_err());
    }
}
