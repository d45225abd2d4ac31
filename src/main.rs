use roshambo::config::{Config, DEFAULT_CONFIG_FILE};
use roshambo::effects::{GameTable, RandomOpponent};
use roshambo::shell::{self, ShellError, TerminalBell, TerminalRenderer};
use roshambo::standard_flow;
use std::io;
use std::path::Path;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), ShellError> {
    let config = Config::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?.validated()?;

    tracing_subscriber::fmt()
        .with_max_level(config.level())
        .with_writer(io::stderr)
        .init();

    shell::check_assets(&config)?;
    info!(
        width = config.window_width,
        height = config.window_height,
        "starting roshambo"
    );

    let env = GameTable::new(RandomOpponent::new(), TerminalBell::new(&config));
    let mut flow = standard_flow()?;
    let mut renderer = TerminalRenderer::new(io::stdout(), &config);

    shell::run(&mut flow, &env, io::stdin().lock(), &mut renderer).await
}
