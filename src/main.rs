//! SurfApp - location search with weather and marine conditions

use std::cell::RefCell;
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use surfapp::action::Action;
use surfapp::api::OpenMeteoClient;
use surfapp::components::{Component, SurfView, SurfViewProps};
use surfapp::config::{
    ApiConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_GEOCODING_URL, DEFAULT_MARINE_URL,
    DEFAULT_TIMEOUT_SECS, DEFAULT_WEATHER_URL,
};
use surfapp::effect::Effect;
use surfapp::reducer::reducer;
use surfapp::state::AppState;
use surfapp::tasks::EffectRunner;
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// SurfApp - search a place, see its weather and marine conditions
#[derive(Parser, Debug)]
#[command(name = "surfapp")]
#[command(about = "Search for locations and get weather & marine conditions")]
struct Args {
    /// Query to type into the search box at startup
    #[arg(long, short)]
    query: Option<String>,

    /// Quiet period before a typed query is searched, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS, value_parser = clap::value_parser!(u64).range(1..))]
    debounce_ms: u64,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: u64,

    /// Geocoding API base URL
    #[arg(long, env = "SURFAPP_GEOCODING_URL", default_value = DEFAULT_GEOCODING_URL)]
    geocoding_url: String,

    /// Forecast API base URL
    #[arg(long, env = "SURFAPP_WEATHER_URL", default_value = DEFAULT_WEATHER_URL)]
    weather_url: String,

    /// Marine API base URL
    #[arg(long, env = "SURFAPP_MARINE_URL", default_value = DEFAULT_MARINE_URL)]
    marine_url: String,

    /// Log file (the terminal belongs to the UI); filter with RUST_LOG
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

impl Args {
    fn api_config(&self) -> ApiConfig {
        ApiConfig {
            geocoding_url: self.geocoding_url.clone(),
            weather_url: self.weather_url.clone(),
            marine_url: self.marine_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum SurfComponentId {
    View,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum SurfContext {
    Search,
}

impl EventRoutingState<SurfComponentId, SurfContext> for AppState {
    fn focused(&self) -> Option<SurfComponentId> {
        Some(SurfComponentId::View)
    }

    fn modal(&self) -> Option<SurfComponentId> {
        None
    }

    fn binding_context(&self, _id: SurfComponentId) -> SurfContext {
        SurfContext::Search
    }

    fn default_context(&self) -> SurfContext {
        SurfContext::Search
    }
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("surfapp=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("logging setup failed: {e}")))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    let log_file = args
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("surfapp.log"));
    init_logging(&log_file)?;

    let client = OpenMeteoClient::new(args.api_config()).map_err(io::Error::other)?;
    let debounce = Duration::from_millis(args.debounce_ms);
    let initial_query = args.query.clone();
    tracing::info!(config = ?client.config(), ?debounce, "starting");
    let runner = EffectRunner::new(client, debounce);

    let debug = DebugSession::new(args.debug);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::default()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        runner,
        initial_query,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct SurfUi {
    view: SurfView,
}

impl SurfUi {
    fn new() -> Self {
        Self {
            view: SurfView::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<SurfComponentId>,
    ) {
        event_ctx.set_component_area(SurfComponentId::View, area);

        let props = SurfViewProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.view.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = SurfViewProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.view.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    runner: EffectRunner,
    initial_query: Option<String>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(SurfUi::new()));
    let mut bus: EventBus<AppState, Action, SurfComponentId, SurfContext> = EventBus::new();
    let keybindings: Keybindings<SurfContext> = Keybindings::new();

    let ui_view = Rc::clone(&ui);
    bus.register(SurfComponentId::View, move |event, state| {
        ui_view.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_query.map(Action::SearchQueryChange),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| runner.handle(effect, ctx.tasks()),
        )
        .await
}
