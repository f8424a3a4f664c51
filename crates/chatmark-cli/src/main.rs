use anyhow::Result;
use chatmark_config::Config;
use chatmark_engine::{BlockNode, Document, InlineSpan, io, parse_blocks};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

struct App {
    reply_files: Vec<PathBuf>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(replies_path: &Path) -> Result<Self> {
        let reply_files = io::scan_reply_files(replies_path)?;

        let mut app = Self {
            reply_files,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first reply if available
        if !app.reply_files.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.reply_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.reply_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        if self.reply_files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.reply_files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(path) = self.reply_files.get(index)
        {
            match io::read_reply_file(path) {
                Ok(text) => {
                    let doc = parse_blocks(&text);
                    self.current_content = render_reply_content(&doc);
                }
                Err(e) => {
                    self.current_content = vec![Line::from(format!("Error reading reply: {e}"))];
                }
            }
        }
    }
}

/// Maps parsed blocks onto styled terminal lines.
fn render_reply_content(doc: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &doc.blocks {
        match block {
            BlockNode::Heading { level, spans } => {
                let bold = Style::default().add_modifier(Modifier::BOLD);
                let mut parts = vec![Span::styled(format!("{} ", "#".repeat(*level as usize)), bold)];
                parts.extend(styled_spans(spans, bold));
                lines.push(Line::from(parts));
                lines.push(Line::default()); // Empty line after heading
            }
            BlockNode::Paragraph { spans } => {
                lines.push(Line::from(styled_spans(spans, Style::default())));
                lines.push(Line::default()); // Empty line after paragraph
            }
            BlockNode::BulletList { items } => {
                for item in items {
                    let mut parts = vec![Span::raw("• ")];
                    parts.extend(styled_spans(&item.spans, Style::default()));
                    lines.push(Line::from(parts));
                }
                lines.push(Line::default()); // Empty line after the whole group
            }
            BlockNode::OrderedListLine { spans } => {
                // Numeral is already in the text; consecutive numbered
                // lines stay visually tight
                lines.push(Line::from(styled_spans(spans, Style::default())));
            }
            BlockNode::HorizontalRule => {
                lines.push(Line::from(Span::styled(
                    "─".repeat(40),
                    Style::default().fg(Color::DarkGray),
                )));
                lines.push(Line::default());
            }
        }
    }

    lines
}

fn styled_spans(spans: &[InlineSpan], base: Style) -> Vec<Span<'static>> {
    spans
        .iter()
        .map(|span| match span {
            InlineSpan::Plain(t) => Span::styled(t.clone(), base),
            InlineSpan::Bold(t) => Span::styled(t.clone(), base.add_modifier(Modifier::BOLD)),
            InlineSpan::Code(t) => Span::styled(t.clone(), base.fg(Color::Yellow)),
        })
        .collect()
}

fn main() -> Result<()> {
    // Determine replies path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let replies_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        replies_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                replies_path = config.replies_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No replies path provided and no config file found");
                eprintln!("Usage: {} <replies-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <replies-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [replies-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate replies directory using engine
    if let Err(e) = io::validate_replies_dir(&replies_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Replies path '{}'{} is invalid: {e}",
            replies_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&replies_path)?;

    // Main loop
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

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Reply list panel
    let file_items: Vec<ListItem> = app
        .reply_files
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            ListItem::new(vec![Line::from(vec![Span::raw(name)])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Replies"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("No saved replies found")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Reply"))
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}
