use egui::Rect;
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use crate::board::LineBoard;
use crate::config::Settings;
use crate::event::{BoardEvent, BoardSignal, SignalBus, SignalHandler};
use crate::input::{GestureRecognizer, InputCollector};
use crate::panels::{self, ContextMenuHandler, ContextMenuState};
use crate::renderer::Renderer;
use crate::shared::SharedBoard;

/// How often to wake up while a gesture timer (tap or long press) is pending
const GESTURE_POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Turns `RequestRedraw` into an egui repaint
struct RepaintHandler {
    ctx: egui::Context,
}

impl SignalHandler for RepaintHandler {
    fn handle_signal(&mut self, signal: &BoardSignal) {
        if *signal == BoardSignal::RequestRedraw {
            self.ctx.request_repaint();
        }
    }
}

pub struct TouchTrackerApp {
    settings: Settings,
    /// Settings from the environment apply to this run only
    persist_settings: bool,
    board: SharedBoard,
    collector: InputCollector,
    gestures: GestureRecognizer,
    renderer: Renderer,
    signals: SignalBus,
    menu: Arc<Mutex<ContextMenuState>>,
    menu_rect: Option<Rect>,
}

impl TouchTrackerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let stored = || -> Settings {
            cc.storage
                .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
                .unwrap_or_default()
        };
        let mut app = match Settings::from_env() {
            Some(Ok(settings)) => {
                info!("Loaded settings from ${}", crate::config::SETTINGS_ENV_VAR);
                let mut app = Self::with_settings(settings);
                app.persist_settings = false;
                app
            }
            Some(Err(err)) => {
                warn!("Ignoring settings file: {err}");
                Self::with_settings(stored())
            }
            None => Self::with_settings(stored()),
        };

        app.signals.subscribe(Box::new(RepaintHandler {
            ctx: cc.egui_ctx.clone(),
        }));
        app
    }

    /// An app without a window attached. Repaints are left to the caller.
    pub fn with_settings(settings: Settings) -> Self {
        let menu = Arc::new(Mutex::new(ContextMenuState::default()));
        let signals = SignalBus::new();
        signals.subscribe(Box::new(ContextMenuHandler::new(menu.clone())));

        Self {
            board: SharedBoard::new(LineBoard::with_config(settings.board.clone())),
            collector: InputCollector::new(),
            gestures: GestureRecognizer::new(settings.gestures.clone()),
            renderer: Renderer::new(settings.render.clone()),
            signals,
            menu,
            menu_rect: None,
            settings,
            persist_settings: true,
        }
    }

    pub fn board(&self) -> &SharedBoard {
        &self.board
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn menu_state(&self) -> ContextMenuState {
        self.menu.lock().clone()
    }

    /// Apply one event and broadcast the resulting signals. Errors are logged
    /// and otherwise ignored.
    pub fn dispatch(&mut self, event: &BoardEvent) {
        match self.board.apply(event) {
            Ok(signals) => self.signals.emit_all(&signals),
            // The board already warned about it
            Err(err) => debug!("{} ignored: {err}", event.name()),
        }
    }

    /// Run this frame's raw input through the gesture layer into the board.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: Rect) {
        let (raw_events, time) = ctx.input(|i| (i.events.clone(), i.time));

        let mut events = Vec::new();
        for sample in self.collector.collect(&raw_events, canvas_rect, self.menu_rect) {
            events.extend(self.gestures.process(sample, time));
        }
        events.extend(self.gestures.update(time));

        for event in &events {
            self.dispatch(event);
        }

        if !self.gestures.is_idle() {
            ctx.request_repaint_after(GESTURE_POLL_INTERVAL);
        }
    }
}

impl eframe::App for TouchTrackerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if self.persist_settings {
            eframe::set_value(storage, eframe::APP_KEY, &self.settings);
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::central_panel(self, ctx);

        let (menu_rect, action) = panels::context_menu(ctx, &self.menu_state());
        self.menu_rect = menu_rect;
        if let Some(event) = action {
            self.dispatch(&event);
        }
    }
}
