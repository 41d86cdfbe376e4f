use caliber_widget::{FormFields, UiEvent};
use clap::Args;

use super::GlobalArgs;
use crate::terminal::TerminalUi;

#[derive(Args)]
pub struct SubmitArgs {
    /// Reviewer name
    #[arg(long)]
    name: String,
    /// Reviewer position or company
    #[arg(long, default_value = "")]
    position: String,
    /// Star rating from 1 to 5
    #[arg(long, default_value_t = 0)]
    rating: u8,
    /// Review text
    #[arg(long)]
    text: String,
}

pub fn run(global: &GlobalArgs, args: SubmitArgs) -> anyhow::Result<()> {
    let mut widget = super::open_widget(global)?;
    let mut ui = TerminalUi::new(false);
    widget.init(&mut ui)?;

    widget.dispatch(UiEvent::click_star(args.rating), &mut ui)?;
    widget.dispatch(
        UiEvent::submit(FormFields {
            name: args.name,
            position: args.position,
            text: args.text,
        }),
        &mut ui,
    )?;

    if let Some(review) = widget.repository().list()?.first() {
        println!("Review {} saved", review.id);
    }
    Ok(())
}
