use crate::config::Config;
use crate::diagram::DiagramRenderer;
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::events::worker::{Event as WorkerEvent, Handler as WorkerEventHandler};
use crate::state::State;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use ratatui_image::picker::Picker;
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tui_logger::{init_logger, set_default_level};

pub type WorkerEventSender = std::sync::mpsc::Sender<WorkerEvent>;
type WorkerEventReceiver = std::sync::mpsc::Receiver<WorkerEvent>;
pub type ConfigSaveSender = std::sync::mpsc::Sender<()>;
type ConfigSaveReceiver = std::sync::mpsc::Receiver<()>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config, startup_image: Option<PathBuf>) -> Result<()> {
        init_logger(LevelFilter::Info)
            .map_err(|e| crate::error::AppError::Logger(e.to_string()))?;
        set_default_level(LevelFilter::Trace);

        info!("Starting application...");
        let (tx, rx) = std::sync::mpsc::channel::<WorkerEvent>();
        let (config_save_tx, config_save_rx) = std::sync::mpsc::channel::<()>();
        let is_dark = config.is_dark();
        let mut app = App {
            state: Arc::new(Mutex::new(State::new(
                tx.clone(),
                config_save_tx.clone(),
                is_dark,
            ))),
            config,
        };
        app.start_worker(rx);
        app.start_config_saver(config_save_rx);

        // Re-attach the image from the previous session, or the one named on
        // the command line, without opening the preview.
        let startup_image = startup_image.or_else(|| app.config.image_path.clone());
        if let Some(path) = startup_image {
            tx.send(WorkerEvent::IngestImage {
                path,
                open_preview: false,
            })?;
        }

        app.start_ui().await?;

        // Save config on exit
        {
            let state = app.state.lock().await;
            app.config.set_dark(state.is_dark_mode());
            app.config.image_path = state.custom_image_path();
            if let Err(e) = app.config.save() {
                error!("Failed to save config on exit: {}", e);
            }
        }

        info!("Exiting application...");
        Ok(())
    }

    /// Start a thread to handle config save requests.
    ///
    fn start_config_saver(&self, receiver: ConfigSaveReceiver) {
        let state = Arc::clone(&self.state);
        let mut config = self.config.clone();
        std::thread::spawn(move || {
            while receiver.recv().is_ok() {
                // The render loop holds the state lock while it waits for the
                // next input event, so this must block until the lock frees
                // up; every save request results in a write.
                {
                    let state_guard = state.blocking_lock();
                    config.set_dark(state_guard.is_dark_mode());
                    config.image_path = state_guard.custom_image_path();
                }
                if let Err(e) = config.save() {
                    error!("Failed to save config: {}", e);
                }
            }
        });
    }

    /// Start a separate thread for asynchronous state mutations. Image
    /// ingestion and diagram rendering run here so the render loop never
    /// blocks on file or subprocess work.
    ///
    fn start_worker(&self, receiver: WorkerEventReceiver) {
        debug!("Creating new thread for background work...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
                .block_on(async {
                    let mut renderer = DiagramRenderer::new();
                    let mut worker_event_handler =
                        WorkerEventHandler::new(&cloned_state, &mut renderer);
                    while let Ok(worker_event) = receiver.recv() {
                        match worker_event_handler.handle(worker_event).await {
                            Ok(_) => (),
                            Err(e) => error!("Failed to handle worker event: {}", e),
                        }
                    }
                })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(&mut self) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        // Probe the terminal for its graphics protocol; fall back to a
        // character-cell guess when the query fails.
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 14)));
        picker.guess_protocol();
        self.state.lock().await.set_picker(picker);

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            if let Ok(size) = terminal.backend().size() {
                state.set_terminal_size(size);
            };
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }

        disable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

        Ok(())
    }
}
