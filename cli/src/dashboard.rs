use std::{io, time::Duration};
use anyhow::Result;
use chrono::NaiveDate;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph},
};
use macrolog_core::{DaySummary, Goals, StreakSummary};

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    protein: Color,
    calories: Color,
    streak: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    protein: Color::Green,
    calories: Color::Blue,
    streak: Color::Yellow,
};

pub struct DashboardData {
    pub date: NaiveDate,
    pub summary: DaySummary,
    pub goals: Goals,
    pub streaks: StreakSummary,
}

pub fn run(data: DashboardData) -> Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|f| ui(f, &data))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        _ => {}
                    }
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn ui(frame: &mut Frame, data: &DashboardData) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Gauges + streak panel
            Constraint::Length(1), // Footer
        ])
        .split(size);

    // --- Header ---
    let header_block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(THEME.muted));

    let title = Line::from(vec![
        Span::styled(
            "MACROLOG ",
            Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            data.date.format("%Y-%m-%d (%a)").to_string(),
            Style::default().fg(THEME.text),
        ),
    ]);
    let header = Paragraph::new(title).block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(header, main_layout[0]);
    frame.render_widget(header_block, main_layout[0]);

    // --- Main content ---
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(70), // Gauges
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(30), // Streak panel
        ])
        .split(main_layout[1]);

    draw_gauges(frame, data, content_chunks[0]);
    draw_streak_panel(frame, &data.streaks, content_chunks[2]);

    // --- Footer ---
    let help = Line::from(vec![
        Span::styled("QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help)
        .alignment(Alignment::Center)
        .style(Style::default().fg(THEME.muted));
    frame.render_widget(footer, main_layout[2]);
}

fn draw_gauges(frame: &mut Frame, data: &DashboardData, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let summary = &data.summary;

    let protein_label = format!(
        "{:.1} / {:.0} g ({:.0}%)",
        summary.protein_total, data.goals.protein_goal, summary.protein_percentage
    );
    let protein_gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Protein ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.protein))
        .ratio((summary.protein_percentage / 100.0).min(1.0))
        .label(protein_label);
    frame.render_widget(protein_gauge, chunks[0]);

    let calorie_label = format!(
        "{:.0} / {:.0} kcal ({:.0}%)",
        summary.calorie_total, data.goals.calorie_goal, summary.calorie_percentage
    );
    let calorie_gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Calories ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(THEME.muted)),
        )
        .gauge_style(Style::default().fg(THEME.calories))
        .ratio((summary.calorie_percentage / 100.0).min(1.0))
        .label(calorie_label);
    frame.render_widget(calorie_gauge, chunks[1]);
}

fn draw_streak_panel(frame: &mut Frame, streaks: &StreakSummary, area: Rect) {
    let flame = if streaks.current > 0 { "▲" } else { " " };

    let info_text = vec![
        Line::from(Span::styled(
            "Streaks",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Current: ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{} {} days", flame, streaks.current),
                Style::default().fg(THEME.streak).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Best:    ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{} days", streaks.best),
                Style::default().fg(THEME.text),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tracked: ", Style::default().fg(THEME.muted)),
            Span::styled(
                format!("{} days", streaks.days_tracked),
                Style::default().fg(THEME.text),
            ),
        ]),
    ];

    let panel = Paragraph::new(info_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(THEME.muted))
            .title(" Summary "),
    );
    frame.render_widget(panel, area);
}
