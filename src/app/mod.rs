mod dialogs;
mod state;
mod ui;
mod view;

use crate::config::BackendConfig;
use crate::reconciler::{Command, Dispatcher, Reconciler};
use crate::registry::LocalFile;
use dialogs::DialogNotifier;
use eframe::{egui, App};
use rfd::FileDialog;
use state::UiState;
use tracing::{debug, error, info};
use view::{CardAction, FileListView};

const APP_TITLE: &str = "File Upload System";

pub struct FileboxApp {
    reconciler: Reconciler<DialogNotifier>,
    dispatcher: Dispatcher,
    view: Box<dyn FileListView>,
    state: UiState,
}

impl FileboxApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: BackendConfig,
        dispatcher: Dispatcher,
    ) -> Self {
        info!("Initializing file upload client for {}", config.base_url);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            reconciler: Reconciler::new(DialogNotifier::new(APP_TITLE)),
            dispatcher,
            view: view::for_kind(config.view),
            state: UiState::new(config.base_url.to_string()),
        };
        let command = app.reconciler.initialize();
        app.run(&cc.egui_ctx, command);
        app
    }

    fn run(&self, ctx: &egui::Context, command: Option<Command>) {
        if let Some(command) = command {
            let ctx = ctx.clone();
            self.dispatcher
                .dispatch(command, move || ctx.request_repaint());
        }
    }

    pub fn choose_file(&mut self) {
        let Some(path) = FileDialog::new().pick_file() else {
            return;
        };
        match LocalFile::from_path(path) {
            Ok(file) => {
                self.state.error_message = None;
                self.reconciler.select_file(file);
            }
            Err(e) => {
                error!("Could not read selected file: {}", e);
                self.state.error_message = Some(format!("Could not read selected file: {}", e));
            }
        }
    }

    pub fn upload(&mut self, ctx: &egui::Context) {
        let command = self.reconciler.confirm_upload();
        self.run(ctx, command);
    }

    pub fn refresh(&mut self, ctx: &egui::Context) {
        let command = self.reconciler.initialize();
        self.run(ctx, command);
    }

    fn handle_action(&mut self, ctx: &egui::Context, action: CardAction) {
        match action {
            CardAction::Delete(filename) => {
                let command = self.reconciler.confirm_delete(&filename);
                self.run(ctx, command);
            }
            CardAction::Play(url) => {
                debug!("Opening video {}", url);
                if let Err(e) = open::that(&url) {
                    error!("Failed to open {}: {}", url, e);
                    self.state.error_message = Some(format!("Could not open video: {}", e));
                }
            }
        }
    }

    pub fn update_state(&mut self, ctx: &egui::Context) {
        while let Some(outcome) = self.dispatcher.try_recv() {
            let follow_up = self.reconciler.apply(outcome);
            self.run(ctx, follow_up);
        }
    }
}

impl App for FileboxApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        for action in self.render(ctx) {
            self.handle_action(ctx, action);
        }
    }
}
