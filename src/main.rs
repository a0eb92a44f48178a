// SPDX-License-Identifier: MPL-2.0
use meetdeck::app::{self, Flags};
use meetdeck::features::FEATURES;

fn main() -> iced::Result {
    if let Err(err) = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("failed to initialize logger: {err}");
    }

    let mut args = pico_args::Arguments::from_env();

    if args.contains("--list-features") {
        for (name, capability) in FEATURES.iter() {
            println!("{name}\t{}", capability.enabled);
        }
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
    };

    let leftover = args.finish();
    if !leftover.is_empty() {
        log::warn!("Ignoring unexpected arguments: {leftover:?}");
    }

    app::run(flags)
}

fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Ignoring {key}: {err}");
            None
        }
    }
}
