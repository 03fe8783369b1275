mod ui;

use clap::{error::ErrorKind, ArgAction, CommandFactory, Parser};
use clatter::{
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    input_field::{Edit, InputField},
    language::{Language, DEFAULT_LANGUAGE},
    logging::init_logging,
    runtime::{AppEvent, Clock, CrosstermEventSource, EventSource, Runner, SystemClock},
    session::{InputOutcome, Session},
    stats::Stats,
    word_source::{RandomWords, WordSource},
};
use crossterm::{
    cursor::Show,
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    sync::Once,
};

use crate::ui::popup::{GameOverPopup, PopupButton};

/// word-by-word typing practice in your terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Type a short list of random words, one at a time. Every letter turns green or red as you go, and each round ends with your accuracy and speed."
)]
pub struct Cli {
    /// number of words per round [default: from config, or 5]
    #[clap(short = 'w', long)]
    number_of_words: Option<usize>,

    /// log more (repeat for more detail); logs go to a file, never the screen
    #[clap(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,

    /// file to write logs to [default: ~/.local/state/clatter/clatter.log]
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// seed for the word draws, for repeatable rounds
    #[clap(long)]
    seed: Option<u64>,

    /// store the effective settings as the new defaults
    #[clap(long)]
    save_config: bool,
}

impl Cli {
    /// Command line flags win over the stored config
    fn apply(&self, config: Config) -> Config {
        Config {
            number_of_words: self.number_of_words.unwrap_or(config.number_of_words),
            verbosity: if self.verbose > 0 {
                self.verbose
            } else {
                config.verbosity
            },
        }
    }
}

/// What the event loop should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct App<S: WordSource = RandomWords, C: Clock = SystemClock> {
    pub session: Session<S, C>,
    pub field: InputField,
    /// Results shown in the stats panel, from the last round the player retried after
    pub last_stats: Option<Stats>,
    pub popup: Option<GameOverPopup>,
}

impl<S: WordSource, C: Clock> App<S, C> {
    pub fn new(session: Session<S, C>) -> Self {
        Self {
            session,
            field: InputField::new(),
            last_stats: None,
            popup: None,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Exit;
        }

        if let Some(popup) = self.popup.as_mut() {
            return match key.code {
                KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                    popup.toggle();
                    Flow::Continue
                }
                KeyCode::Enter => match popup.selected {
                    PopupButton::Retry => {
                        self.retry();
                        Flow::Continue
                    }
                    PopupButton::Exit => Flow::Exit,
                },
                KeyCode::Char('r') => {
                    self.retry();
                    Flow::Continue
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Flow::Exit,
                _ => Flow::Continue,
            };
        }

        if key.code == KeyCode::Esc {
            return Flow::Exit;
        }
        if let Some(edit) = Edit::from_key(&key) {
            self.type_edits([edit]);
        }
        Flow::Continue
    }

    /// Applies edits to the field and reports every resulting change to the round
    pub fn type_edits(&mut self, edits: impl IntoIterator<Item = Edit>) {
        for edit in edits {
            if self.popup.is_some() {
                break;
            }
            for text in self.field.apply(edit) {
                if let InputOutcome::RoundComplete(stats) = self.session.on_input_change(&text) {
                    self.popup = Some(GameOverPopup::new(stats));
                }
            }
        }
    }

    /// Closes the results dialog; the next round is already waiting
    pub fn retry(&mut self) {
        if let Some(popup) = self.popup.take() {
            self.last_stats = Some(popup.stats);
        }
        self.field.reset();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let store = FileConfigStore::new();
    let stored = store.load();
    let config = cli.apply(stored.as_ref().cloned().unwrap_or_default());

    let log_file = cli.log_file.clone().or_else(AppDirs::log_path);
    init_logging(config.verbosity, log_file.as_deref())?;
    if let Err(e) = &stored {
        tracing::warn!(path = %store.path().display(), error = %e, "ignoring unreadable config");
    }
    if cli.save_config {
        store.save(&config)?;
        tracing::info!(path = %store.path().display(), "config saved");
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let language = Language::load(DEFAULT_LANGUAGE)?;
    let source = match cli.seed {
        Some(seed) => RandomWords::with_seed(language, seed),
        None => RandomWords::new(language),
    };
    let session = Session::new(source, SystemClock, config.number_of_words)?;
    let mut app = App::new(session);

    let guard = enter_tui()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let runner = Runner::new(CrosstermEventSource::new());
    let result = start_tui(&mut terminal, &mut app, &runner);

    drop(guard);
    result
}

/// Runs `restore` when dropped, including while unwinding from a panic
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Switches to raw mode and the alternate screen until the guard is dropped
fn enter_tui() -> io::Result<RestoreGuard<fn()>> {
    install_panic_hook();
    enable_raw_mode()?;
    let guard = RestoreGuard {
        restore: restore_terminal as fn(),
    };
    execute!(io::stdout(), EnterAlternateScreen)?;
    Ok(guard)
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Leaves the alternate screen before the panic message is printed
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            tracing::error!(%info, "panic");
            default_panic(info);
        }));
    });
}

fn start_tui<B: Backend, E: EventSource, S: WordSource, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<S, C>,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    while let Some(event) = runner.step() {
        match event {
            // the next draw re-wraps the words to the new width
            AppEvent::Resize(_, _) => {}
            AppEvent::Key(key) => {
                if app.on_key(key) == Flow::Exit {
                    break;
                }
            }
        }
        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}

fn ui<S: WordSource, C: Clock>(app: &App<S, C>, f: &mut Frame) {
    f.render_widget(app, f.area());
}
