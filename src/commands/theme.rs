use crate::libs::messages::Message;
use crate::libs::storage::FileStore;
use crate::libs::theme::Theme;
use crate::{msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ThemeArgs {
    /// Theme to switch to
    #[arg(value_enum, conflicts_with = "cycle")]
    theme: Option<Theme>,
    /// Switch to the next theme (light, dark, system)
    #[arg(long)]
    cycle: bool,
}

pub fn cmd(args: ThemeArgs) -> Result<()> {
    let mut store = FileStore::open_default()?;
    let current = Theme::load(&store)?;

    let next = match (args.theme, args.cycle) {
        (Some(theme), _) => theme,
        (None, true) => current.next(),
        (None, false) => {
            msg_print!(Message::ThemeCurrent(current.to_string()));
            return Ok(());
        }
    };

    next.save(&mut store)?;
    msg_success!(Message::ThemeSet(next.to_string()));
    Ok(())
}
