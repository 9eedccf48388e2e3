use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use markdown_callouts_config::Config;
use markdown_callouts_engine::{CalloutExtension, IconTable, Markdown, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{
    env,
    io::{Stdout, stdout},
    path::{Path, PathBuf},
    process,
};

struct App {
    notes_path: PathBuf,
    markdown: Markdown,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    show_html: bool,
    current_content: Vec<String>,
}

impl App {
    fn new(notes_path: PathBuf, markdown: Markdown) -> Result<Self> {
        let files = io::scan_markdown_files(&notes_path)?;

        let mut app = Self {
            notes_path,
            markdown,
            files,
            file_list_state: ListState::default(),
            show_html: false,
            current_content: Vec::new(),
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_view(&mut self) {
        self.show_html = !self.show_html;
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(file) = self
            .file_list_state
            .selected()
            .and_then(|index| self.files.get(index))
        else {
            return;
        };

        self.current_content =
            match io::load_document(file, &self.notes_path, &self.markdown) {
                Ok(document) if self.show_html => {
                    document.to_html().lines().map(str::to_string).collect()
                }
                Ok(document) => document.outline(),
                Err(e) => {
                    log::warn!("failed to load {file}: {e}");
                    vec![format!("Error loading document: {e}")]
                }
            };
    }
}

/// The pipeline described by the config: callouts only when enabled.
fn build_markdown(config: &Config) -> Markdown {
    let markdown = Markdown::new().with_max_nesting(config.max_nesting);
    if !config.callouts.enabled {
        return markdown;
    }

    let mut icons = IconTable::new();
    for (kind, icon) in &config.callouts.icons {
        icons = icons.with_icon(kind, icon.clone());
    }
    if let Some(icon) = &config.callouts.default_icon {
        icons = icons.with_default_icon(icon.clone());
    }
    markdown.with_extension(CalloutExtension::new(icons))
}

fn render_file(path: &Path, markdown: &Markdown) -> Result<String> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    markdown
        .convert(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

fn usage(program: &str) {
    eprintln!("Usage: {program} [notes-folder-path]");
    eprintln!("       {program} render <file.md>");
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let from_config = config.is_some();
    let config = config.unwrap_or_default();
    let markdown = build_markdown(&config);

    let notes_path = match args.as_slice() {
        [_, command, file] if command == "render" => {
            print!("{}", render_file(Path::new(file), &markdown)?);
            return Ok(());
        }
        [_, path] => PathBuf::from(path),
        [program] => match config.notes_path {
            Some(path) => path,
            None => {
                eprintln!("Error: No notes path provided and none configured");
                usage(program);
                eprintln!("Or set notes_path in {}", config_path.display());
                process::exit(1);
            }
        },
        _ => {
            usage(args.first().map_or("markdown-callouts-cli", String::as_str));
            process::exit(1);
        }
    };

    // Validate notes directory using engine
    if let Err(e) = io::validate_notes_dir(&notes_path) {
        let source = if from_config && args.len() == 1 {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            notes_path.display(),
            source
        );
        process::exit(1);
    }

    let mut app = App::new(notes_path, markdown)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Char('h') => app.toggle_view(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|file| ListItem::new(Line::from(format!("📄 {file}"))))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text: Vec<Line> = if app.current_content.is_empty() {
        vec![Line::from("Select a file to view its content")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(line.as_str()))
            .collect()
    };
    let title = if app.show_html { "HTML" } else { "Outline" };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("h: Outline/HTML"),
    ]));
    f.render_widget(help, rows[1]);
}
