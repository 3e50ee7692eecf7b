// SPDX-License-Identifier: MPL-2.0
use signspeak::app::{self, paths, Flags};
use signspeak::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
SignSpeak - sign-language recognition demo

USAGE:
  signspeak [OPTIONS]

OPTIONS:
  -h, --help               Print this help and exit
      --lang <ID>          UI language (e.g. en-US, fr)
      --config-dir <DIR>   Directory containing settings.toml
      --theme <MODE>       light, dark or system (overrides settings.toml)

ENVIRONMENT:
  SIGNSPEAK_CONFIG_DIR     Same as --config-dir
  RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    })
}
