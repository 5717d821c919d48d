use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::fetch::spawn_fetch;
use crate::i18n::{Language, Translator};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the catalog screen until the user quits.
///
/// Mount order matches the screen lifecycle: terminal up, fetch spawned
/// once, then draw/consume until quit. The shutdown handle makes teardown
/// explicit so a late fetch result is discarded instead of dispatched.
pub fn run(
    config: &Config,
    language: Language,
    translator: Box<dyn Translator>,
    runtime: &tokio::runtime::Handle,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms.max(50));
    let shutdown = ShutdownHandle::new();
    let mut app = App::new(language, translator);
    let events = EventHandler::new(tick_rate, shutdown.clone());

    spawn_fetch(
        runtime,
        config.api.endpoint_url.clone(),
        Duration::from_secs(config.api.connect_timeout_seconds as u64),
        events.sender(),
        shutdown.clone(),
    );

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {
                // Next draw re-measures the frame; nothing to store.
            }
            Ok(AppEvent::CatalogLoaded(books)) => app.on_catalog_loaded(books),
            Ok(AppEvent::CatalogFailed(message)) => app.on_catalog_failed(message),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
