use freight_desk::app::{App, Route};
use freight_desk::config::init_config;
use freight_desk::ui;
use freight_desk::ui::theme::Theme;
use freight_desk::ui::widgets::notifications::NotificationManager;
use freight_desk::utils::runtime::TOKIO_RT;

const WINDOW_TITLE: &str = "TransportEasy - Freight Desk";

struct DeskApp {
    app: App,
    notifications: NotificationManager,
    debug_visible: bool,
}

impl DeskApp {
    fn new(cc: &eframe::CreationContext<'_>, app: App, debug_visible: bool) -> Self {
        Theme::default().apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
            debug_visible,
        }
    }
}

impl eframe::App for DeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();
        ui::render(ctx, &mut self.app, &mut self.notifications, &mut self.debug_visible);

        // Task results arrive without input events
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

fn main() -> eframe::Result<()> {
    let debug_config = freight_desk::debug::init_logger();

    let config = match init_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    tracing::info!(
        environment = ?config.environment,
        backend = ?config.backend,
        base_url = %config.api_base_url,
        "Configuration loaded"
    );

    // Handlers call tokio::spawn from the UI thread
    let _guard = TOKIO_RT.enter();

    let mut app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open session store");
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    app.navigate(Route::Home);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };

    let debug_visible = debug_config.show_debug_ui;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(DeskApp::new(cc, app, debug_visible)))),
    )
}
