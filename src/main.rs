mod config;
mod error;
mod logging;
mod models;
mod slider;
mod storage;
mod ui;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use crate::config::Config;
use crate::error::Result;
use crate::storage::{load_catalog, write_sample};
use crate::ui::{App, handle_event, render};

/// 没有待处理的防抖计时时的轮询间隔
const IDLE_POLL: Duration = Duration::from_millis(250);

/// 终端羽毛图鉴，按尺寸筛选
#[derive(Parser, Debug)]
#[command(name = "plume-atlas", version)]
struct Cli {
    /// 图鉴文件 (TOML)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// 配置文件
    #[arg(long)]
    config: Option<PathBuf>,

    /// 把示例图鉴写入图鉴文件后退出
    #[arg(long)]
    init: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = Config::load(&config_path)?;

    let data_dir = config::data_dir()?;
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    logging::init_logging(&data_dir, log_level)?;

    // 图鉴文件路径：命令行 > 配置 > ~/.local/share/plume-atlas/catalog.toml
    let catalog_path = cli
        .catalog
        .or_else(|| config.catalog_path.clone())
        .unwrap_or_else(|| data_dir.join("catalog.toml"));

    if cli.init {
        write_sample(&catalog_path)?;
        println!("示例图鉴已写入 {}", catalog_path.display());
        return Ok(());
    }

    let catalog = load_catalog(&catalog_path)?;
    let mut app = App::new(catalog, config.resize_debounce());
    info!(config = %config_path.display(), catalog = %catalog_path.display(), "starting");

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

    if let Err(e) = &result {
        error!(error = %e, "event loop failed");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let timeout = app.resize.time_left(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? && handle_event(app, event::read()?) {
            break;
        }

        app.tick(Instant::now());
    }
    Ok(())
}
