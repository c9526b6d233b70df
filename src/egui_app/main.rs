/**
 * Lager Blogs desktop client - Main Entry Point
 *
 * Sets up logging and configuration, then hands control to eframe.
 * Every frame polls finished network tasks before drawing.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use lagerblogs::egui_app::theme::styles;
use lagerblogs::egui_app::{views, AppState, Config};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("[APP] Invalid configuration ({}), using defaults", e);
            Config::new()
        }
    };
    tracing::info!("[APP] Using backend {}", config.server_url());

    let state = AppState::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Lager Blogs",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(BlogApp { state }))
        }),
    )?;
    Ok(())
}

/// Main application state
struct BlogApp {
    state: AppState,
}

impl eframe::App for BlogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.update();

        views::render_top_bar(ctx, &mut self.state);
        views::render_tab_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_dialogs(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
