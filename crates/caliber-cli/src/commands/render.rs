use std::path::PathBuf;

use caliber_widget::UiEvent;
use clap::Args;

use super::GlobalArgs;
use crate::terminal::{prompt_password, TerminalUi};

#[derive(Args)]
pub struct RenderArgs {
    /// Render with admin delete controls (asks for the admin password)
    #[arg(long)]
    admin: bool,
    /// Admin password (will prompt if --admin is set and this is omitted)
    #[arg(long)]
    password: Option<String>,
    /// Write markup to this file instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

pub fn run(global: &GlobalArgs, args: RenderArgs) -> anyhow::Result<()> {
    let mut widget = super::open_widget(global)?;
    let mut ui = TerminalUi::new(false);
    widget.init(&mut ui)?;

    if args.admin || args.password.is_some() {
        let password = match args.password {
            Some(p) => p,
            None => prompt_password()?,
        };
        widget.dispatch(UiEvent::login(password), &mut ui)?;
    }

    match args.output {
        Some(path) => {
            std::fs::write(&path, ui.markup())?;
            println!("Wrote {}", path.display());
        }
        None => println!("{}", ui.markup()),
    }
    Ok(())
}
