mod app;
mod command;
mod input;
mod text;

use std::io::{self, IsTerminal};

use clap::Parser;
use log::{debug, warn};
use termcolor::{ColorChoice, WriteColor};

use onepass_gen::clipboard::{ClipboardWriter, SystemClipboard};
use onepass_gen::style::{self, Painter, Tone};

use app::App;
use command::{Cli, Kind};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let cli = Cli::parse();
    let choice = ColorChoice::from(cli.color);
    install_interrupt_handler(choice);

    if let Err(err) = run(cli, choice) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli, choice: ColorChoice) -> app::Result<()> {
    let interactive = cli.interactive || matches!(cli.command, None | Some(Kind::Interactive));
    let clipboard = open_clipboard(&cli, interactive);

    let stdin = io::stdin();
    let hide_input = stdin.is_terminal();
    let mut app = App::new(style::stdout(choice), stdin.lock(), clipboard, hide_input);

    if interactive {
        debug!("starting interactive menu");
        return app.interactive();
    }

    match cli.command {
        Some(Kind::Generate(args)) => app.generate(&args),
        Some(Kind::Memorable(args)) => app.memorable(&args),
        Some(Kind::Analyze { password }) => app.analyze(&password),
        None | Some(Kind::Interactive) => app.interactive(),
    }
}

/// Only touches the system clipboard when the command can use it.
fn open_clipboard(cli: &Cli, interactive: bool) -> Option<Box<dyn ClipboardWriter>> {
    if cli.no_clipboard {
        return None;
    }
    let wanted = interactive
        || match &cli.command {
            Some(Kind::Generate(args)) => args.copy,
            Some(Kind::Memorable(args)) => args.copy,
            _ => false,
        };
    if wanted {
        SystemClipboard::probe()
    } else {
        None
    }
}

fn install_interrupt_handler(choice: ColorChoice) {
    let result = ctrlc::set_handler(move || {
        let mut out = style::stdout(choice);
        let _ = out.reset();
        let _ = out.line(Tone::Warning, &format!("\n\n{}", text::MSG_INTERRUPTED));
        std::process::exit(130);
    });
    if let Err(err) = result {
        warn!("failed to install Ctrl-C handler: {}", err);
    }
}
