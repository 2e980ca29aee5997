// SPDX-License-Identifier: MPL-2.0
use gift_registry::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Wedding gift registry

USAGE:
  gift-registry [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, pt-BR)
  --config-dir <PATH>    Directory holding settings.toml
  -h, --help             Print this help and exit

ENVIRONMENT:
  GIFT_REGISTRY_CONFIG_DIR   Config directory when --config-dir is not given
  RUST_LOG                   Log filter (default: gift_registry=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gift_registry=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: optional_arg(&mut args, "--lang"),
        config_dir: optional_arg(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting gift registry");

    app::run(flags)
}

/// Reads `--name <value>`, logging and ignoring a malformed value.
fn optional_arg(args: &mut pico_args::Arguments, name: &'static str) -> Option<String> {
    match args.opt_value_from_str(name) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(arg = name, %err, "invalid command-line argument");
            None
        }
    }
}
