//! Terminal front-end: the window, buttons and speakers of the game.
//!
//! The shell owns all I/O. It reads typed commands, feeds them to the
//! screen flow as events and redraws whatever screen the flow lands on.

mod input;
mod render;
mod sound;
mod view;

pub use input::parse_command;
pub use render::{Renderer, TerminalRenderer};
pub use sound::TerminalBell;
pub use view::{framed_art, headline, hint, move_art, screen_lines, FrameSize, ResultSummary};

use crate::builder::BuildError;
use crate::config::{Config, ConfigError};
use crate::core::FlowEvent;
use crate::effects::{GameEnv, ScreenFlow};
use std::io::{self, BufRead};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that stop the shell
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Missing asset file '{}'", .0.display())]
    MissingAsset(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
}

/// Verify every configured asset exists. A missing file is fatal at
/// startup rather than mid-round.
pub fn check_assets(config: &Config) -> Result<(), ShellError> {
    for path in config.asset_paths() {
        if !path.is_file() {
            return Err(ShellError::MissingAsset(path));
        }
        debug!(path = %path.display(), "asset found");
    }
    Ok(())
}

/// Drive `flow` from `input` until it reaches its final screen.
///
/// End of input closes the window. Unknown commands, including lines that
/// are not valid UTF-8, and events the current screen does not offer are
/// reported and skipped.
pub async fn run<Env, R, V>(
    flow: &mut ScreenFlow<Env>,
    env: &Env,
    mut input: R,
    view: &mut V,
) -> Result<(), ShellError>
where
    Env: GameEnv,
    R: BufRead,
    V: Renderer,
{
    view.render(flow.current_screen())?;
    let mut line = Vec::new();

    while !flow.is_final() {
        line.clear();
        let event = match input.read_until(b'\n', &mut line)? {
            0 => FlowEvent::WindowClosed,
            _ => match parse_command(&String::from_utf8_lossy(&line)) {
                Ok(Some(event)) => event,
                Ok(None) => continue,
                Err(err) => {
                    view.notice(&format!("{err}. {}", hint(flow.current_screen())))?;
                    continue;
                }
            },
        };

        match flow.dispatch(event, env).await {
            Ok(screen) => view.render(screen)?,
            Err(_) => view.notice(hint(flow.current_screen()))?,
        }
    }

    info!(rounds = flow.history().rounds_played(), "goodbye");
    Ok(())
}
