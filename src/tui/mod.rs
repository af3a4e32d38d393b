//! TUI module - Terminal dashboard with ratatui

use anyhow::Result;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};
use std::io::{Stdout, stdout};

use crate::db::{Database, HistoryRow, UserStats};
use crate::program::{WeeklyPlan, generate_week};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// App state for TUI
pub struct App {
    db: Database,
    stats: UserStats,
    week: i32,
    plan: WeeklyPlan,
    history: Vec<HistoryRow>,
    show_history: bool,
    should_quit: bool,
}

impl App {
    pub fn new(db: Database) -> Result<Self> {
        let stats = db.user_stats()?;
        let history = db.recent_history()?;
        let plan = generate_week(&stats, 1);
        Ok(Self {
            db,
            stats,
            week: 1,
            plan,
            history,
            show_history: false,
            should_quit: false,
        })
    }

    /// Run the TUI application
    pub fn run(&mut self) -> Result<()> {
        let mut terminal = init_terminal()?;

        while !self.should_quit {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_events()?;
        }

        restore_terminal()?;
        Ok(())
    }

    fn set_week(&mut self, week: i32) {
        self.week = week.clamp(1, 8);
        self.plan = generate_week(&self.stats, self.week);
    }

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
            ])
            .split(area);

        // Header
        let header = Paragraph::new(format!(
            "gymtrack - {} (bw {}kg) - week {}",
            self.stats.name, self.stats.bodyweight, self.week
        ))
        .style(Style::default().fg(Color::Cyan).bold())
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        if self.show_history {
            self.render_history(frame, chunks[1]);
        } else {
            self.render_plan(frame, chunks[1]);
        }

        // Footer
        let footer = Paragraph::new("q: quit | ←/→: week | h: history | r: reload")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(footer, chunks[2]);
    }

    fn render_plan(&self, frame: &mut Frame, area: Rect) {
        let mut rows: Vec<Row> = Vec::new();
        for day in &self.plan.days {
            rows.push(
                Row::new(vec![Cell::from(day.title.clone()), Cell::from(""), Cell::from("")])
                    .style(Style::default().fg(Color::Yellow).bold()),
            );
            for ex in &day.exercises {
                let weight = ex
                    .weight
                    .map(|w| format!("{} kg", w))
                    .unwrap_or_default();
                rows.push(Row::new(vec![
                    Cell::from(format!("  {}", ex.name)),
                    Cell::from(ex.sets.clone()),
                    Cell::from(weight),
                ]));
            }
        }

        let table = Table::new(
            rows,
            [
                Constraint::Min(32),
                Constraint::Length(10),
                Constraint::Length(10),
            ],
        )
        .header(Row::new(vec!["Exercise", "Sets", "Target"]).style(Style::default().bold()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Week {} plan", self.week)),
        );

        frame.render_widget(table, area);
    }

    fn render_history(&self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .history
            .iter()
            .map(|h| {
                Row::new(vec![
                    Cell::from(h.date.to_string()),
                    Cell::from(h.exercise.clone()),
                    Cell::from(format!("{} x {}", h.weight, h.reps)),
                    Cell::from(h.note.clone()),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Length(28),
                Constraint::Length(12),
                Constraint::Min(16),
            ],
        )
        .header(
            Row::new(vec!["Date", "Exercise", "Weight x Reps", "Note"])
                .style(Style::default().bold()),
        )
        .block(Block::default().borders(Borders::ALL).title("Recent sets"));

        frame.render_widget(table, area);
    }

    fn handle_events(&mut self) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') => self.should_quit = true,
                        KeyCode::Left | KeyCode::Char('[') => self.set_week(self.week - 1),
                        KeyCode::Right | KeyCode::Char(']') => self.set_week(self.week + 1),
                        KeyCode::Char('h') => self.show_history = !self.show_history,
                        KeyCode::Char('r') => {
                            self.stats = self.db.user_stats()?;
                            self.history = self.db.recent_history()?;
                            self.plan = generate_week(&self.stats, self.week);
                        }
                        _ => {}
                    }
                }
        Ok(())
    }
}

fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    Ok(terminal)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
