//! Terminal Cardinal Chains runner (default binary).
//!
//! Serial request/response loop: wait for one key, apply one session
//! action, redraw. Rendering goes through the framebuffer renderer in
//! `cardinal_chains::term`.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use cardinal_chains::core::{GameSession, SessionState};
use cardinal_chains::input::{handle_key_event, should_quit};
use cardinal_chains::levels::LevelLoader;
use cardinal_chains::logging;
use cardinal_chains::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use cardinal_chains::Config;

fn main() -> Result<()> {
    let config = Config::from_env().with_args(std::env::args().skip(1));
    let _log_guard = logging::init(&config.log)?;

    let catalog = LevelLoader::load(&config.levels_path)
        .with_context(|| format!("cannot load levels from {}", config.levels_path.display()))?;
    let mut session = GameSession::with_start_level(catalog, config.start_index())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    match session.state() {
        SessionState::AllLevelsComplete => {
            println!("Congratulations! You have completed all levels!");
        }
        _ => {
            println!("You didn't complete the level. Try again!");
        }
    }
    println!("Thank you for playing, see you next time!");
    Ok(())
}

fn run(term: &mut TerminalRenderer, session: &mut GameSession) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if session.state().is_terminal() {
            // Leave the final overlay up until a key is pressed.
            wait_for_key()?;
            return Ok(());
        }

        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            Event::Resize(_, _) => {
                term.invalidate();
                continue;
            }
            _ => continue,
        };

        if should_quit(key) {
            session.quit();
            return Ok(());
        }

        if let SessionState::LevelComplete(_) = session.state() {
            // Any key moves on from the completion overlay.
            let next = session.advance();
            info!(?next, "advanced");
            continue;
        }

        if let Some(action) = handle_key_event(key) {
            let outcome = session.apply_action(action);
            debug!(action = action.as_str(), changed = outcome.changed, "applied");
        }
    }
}

fn wait_for_key() -> Result<()> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
