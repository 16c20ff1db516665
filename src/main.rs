use std::fs;
use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use quizterm::config::Config;
use quizterm::engine::QuizDriver;
use quizterm::error::AppError;
use quizterm::storage::load_quiz;
use quizterm::ui::{self, App, render};

/// 获取并创建应用目录，如 ~/.local/share/quizterm/
fn app_dir(base: Option<PathBuf>, kind: &'static str) -> Result<PathBuf, AppError> {
    let dir = base.ok_or(AppError::MissingDir(kind))?.join("quizterm");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn main() -> Result<(), AppError> {
    let data_dir = app_dir(dirs::data_dir(), "data")?;
    let config = Config::load(&app_dir(dirs::config_dir(), "config")?.join("config.toml"))?;
    quizterm::logging::init(&data_dir.join("quizterm.log"), &config.log_filter)?;

    // 题库路径 (命令行参数 > 配置 > ~/.local/share/quizterm/questions.toml)
    let quiz_path = config.resolve_quiz_path(std::env::args_os().nth(1).map(PathBuf::from), &data_dir);
    let quiz = load_quiz(&quiz_path).inspect_err(|e| error!(%e, "failed to load quiz"))?;

    let mut app = App::new(QuizDriver::new(quiz, config.tiers));

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

    let stats = app.driver.stats();
    info!(
        answered = stats.answered_count,
        total = stats.total_count,
        accuracy = stats.accuracy_percent,
        "quit"
    );
    println!(
        "已答 {}/{}，正确率 {}%",
        stats.answered_count, stats.total_count, stats.accuracy_percent
    );

    result.map_err(AppError::from)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
