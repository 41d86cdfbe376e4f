use caliber_core::models::review::ReviewId;
use caliber_widget::UiEvent;
use clap::Args;

use super::GlobalArgs;
use crate::terminal::{prompt_password, TerminalUi};

#[derive(Args)]
pub struct DeleteArgs {
    /// Review id as shown by `caliber list`
    id: i64,
    /// Admin password (will prompt if not provided)
    #[arg(long)]
    password: Option<String>,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub fn run(global: &GlobalArgs, args: DeleteArgs) -> anyhow::Result<()> {
    let mut widget = super::open_widget(global)?;
    let mut ui = TerminalUi::new(args.yes);
    widget.init(&mut ui)?;

    let password = match args.password {
        Some(p) => p,
        None => prompt_password()?,
    };
    widget.dispatch(UiEvent::login(password), &mut ui)?;

    let id = ReviewId(args.id);
    let was_present = widget.repository().list()?.iter().any(|r| r.id == id);
    widget.dispatch(UiEvent::delete(id), &mut ui)?;
    let still_present = widget.repository().list()?.iter().any(|r| r.id == id);

    match (was_present, still_present) {
        (true, false) => println!("Review {id} deleted"),
        (true, true) => println!("Review {id} kept"),
        (false, _) => println!("No review with id {id}; nothing to delete"),
    }
    Ok(())
}
