mod config;
mod error;
mod models;
mod storage;
mod ui;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{Settings, SettingsSource, default_settings_path, log_dir};
use crate::error::Result;
use crate::models::{Category, Place, group_by_category};
use crate::storage::{default_place, load_places, local_places, save_places};
use crate::ui::{App, UiState, render};

#[derive(Parser, Debug)]
#[command(version, about = "Browse places in Dortmund by category")]
struct Cli {
    /// TOML file with [[places]] entries (overrides the settings file)
    #[arg(long)]
    places: Option<PathBuf>,

    /// Category shown on start
    #[arg(long, value_parser = parse_category)]
    category: Option<Category>,

    /// Settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the built-in places as a TOML template and exit
    #[arg(long, value_name = "FILE")]
    export_places: Option<PathBuf>,
}

fn parse_category(s: &str) -> std::result::Result<Category, String> {
    toml::Value::String(s.to_string())
        .try_into()
        .map_err(|_| format!("unknown category `{s}` (park, museum, restaurant, shopping_center)"))
}

/// 初始化文件日志；返回的 guard 需要在程序运行期间一直持有
fn init_logging(filter: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let dir = log_dir();
    std::fs::create_dir_all(&dir).ok();

    let file_appender = tracing_appender::rolling::daily(&dir, "dortmund-places.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

/// 初始界面状态：选中起始分类的第一个地点；分类为空时退回到第一个地点
fn initial_state(places: &[Place], category: Category) -> UiState {
    let selected = places
        .iter()
        .find(|p| p.category == category)
        .or_else(|| {
            warn!(?category, "no places in start category");
            places.first()
        })
        .cloned()
        .unwrap_or_else(default_place);
    UiState::new(group_by_category(places), category, selected, true)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_path = cli.config.clone().unwrap_or_else(default_settings_path);
    let (settings, source) = Settings::load(&settings_path);
    let _log_guard = init_logging(&settings.log_filter);

    match source {
        SettingsSource::File => debug!(path = %settings_path.display(), "settings loaded"),
        SettingsSource::Missing => {
            debug!(path = %settings_path.display(), "no settings file found, using defaults")
        }
        SettingsSource::Malformed(error) => {
            warn!(%error, path = %settings_path.display(), "failed to parse settings, using defaults")
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "dortmund-places starting");

    if let Some(path) = &cli.export_places {
        save_places(&local_places(), path)?;
        println!("Places written to {}", path.display());
        return Ok(());
    }

    // 加载地点
    let places = match cli.places.as_ref().or(settings.places_file.as_ref()) {
        Some(path) => load_places(path)?,
        None => local_places(),
    };
    let category = cli.category.unwrap_or(settings.start_category);

    // 创建应用状态
    let state = initial_state(&places, category);
    let mut app = App::new(state, settings.wide_layout_min_width);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("dortmund-places exiting");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key.code),
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category() {
        assert_eq!(parse_category("museum"), Ok(Category::Museum));
        assert_eq!(parse_category("shopping_center"), Ok(Category::ShoppingCenter));
        assert!(parse_category("zoo").is_err());
    }

    #[test]
    fn test_initial_selection_in_start_category() {
        let state = initial_state(&local_places(), Category::Museum);
        assert_eq!(state.current_category(), Category::Museum);
        assert_eq!(state.current_selected_place().id, "fussballmuseum");
        assert!(state.current_category_places().contains(state.current_selected_place()));

        // 宽终端下起始分类的第一张卡片被高亮
        let app = App::new(state, 100);
        assert_eq!(app.focused_place().map(|p| p.id.as_str()), Some("fussballmuseum"));
    }

    #[test]
    fn test_initial_selection_falls_back_when_category_empty() {
        let parks: Vec<Place> = local_places()
            .into_iter()
            .filter(|p| p.category == Category::Park)
            .collect();
        let state = initial_state(&parks, Category::Restaurant);
        assert!(state.current_category_places().is_empty());
        assert_eq!(state.current_selected_place().id, "westfalenpark");

        let state = initial_state(&[], Category::Park);
        assert_eq!(state.current_selected_place(), &default_place());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["dortmund-places", "--category", "restaurant", "--places", "p.toml"]).unwrap();
        assert_eq!(cli.category, Some(Category::Restaurant));
        assert_eq!(cli.places, Some(PathBuf::from("p.toml")));
        assert!(cli.export_places.is_none());
    }
}
