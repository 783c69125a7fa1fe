use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::error;
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};
use torus_life_lib::{Config, Life};

const MIN_INTERVAL: u64 = 1;
const MAX_INTERVAL: u64 = 5000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
    Finished,
}

struct LifeWindow {
    status: Status,
    interval: Duration,
    limit: Option<u64>,
    out: Stdout,
}

impl LifeWindow {
    fn new(config: &Config) -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(LifeWindow {
            status: Status::Running,
            interval: Duration::from_millis(config.interval),
            limit: config.generations,
            out,
        })
    }

    fn update(&mut self, life: &Life) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let (cols, rows) = (cols as usize, rows as usize);
        let grid = life.grid();

        queue!(self.out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        let top_bar = format!(
            "Gen: {}  Cells: {}  Size: {}  Interval: {} ms",
            life.generation(),
            life.population(),
            grid.size(),
            self.interval.as_millis()
        );
        self.bar(&top_bar, cols)?;

        for (i, row) in grid.rows().take(rows.saturating_sub(2)).enumerate() {
            let line = row.iter().take(cols).map(|s| s.to_string()).collect::<String>();
            queue!(self.out, cursor::MoveTo(0, i as u16 + 1), Print(line))?;
        }

        let status_str = match self.status {
            Status::Running => "Running... Press [space] to pause, [+]/[-] to change speed.",
            Status::Paused => "Paused. Press [space] to resume, [n] to step, [q] to quit.",
            Status::Finished => "Finished. Press [q] to quit.",
        };
        queue!(self.out, cursor::MoveTo(0, rows.saturating_sub(1) as u16))?;
        self.bar(status_str, cols)?;
        self.out.flush()
    }

    fn bar(&mut self, text: &str, cols: usize) -> io::Result<()> {
        let text = format!("{:width$}", text, width = cols);
        let text = text.chars().take(cols).collect::<String>();
        queue!(
            self.out,
            SetAttribute(Attribute::Reverse),
            Print(text),
            SetAttribute(Attribute::Reset)
        )
    }

    fn advance(&mut self, life: &mut Life) {
        if self.limit.map_or(false, |n| life.generation() >= n) {
            self.status = Status::Finished;
            return;
        }
        life.advance();
        if self.limit.map_or(false, |n| life.generation() >= n) {
            self.status = Status::Finished;
        }
    }

    fn toggle(&mut self) {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            Status::Finished => Status::Finished,
        };
    }

    fn faster(&mut self) {
        let ms = (self.interval.as_millis() as u64 / 2).max(MIN_INTERVAL);
        self.interval = Duration::from_millis(ms);
    }

    fn slower(&mut self) {
        let ms = (self.interval.as_millis() as u64 * 2).min(MAX_INTERVAL);
        self.interval = Duration::from_millis(ms);
    }
}

impl Drop for LifeWindow {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, LeaveAlternateScreen, cursor::Show) {
            error!("Failed to leave the alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            error!("Failed to disable raw mode: {}", e);
        }
    }
}

/// Runs the simulation in the terminal until the user quits.
pub(crate) fn run_with_tui(life: &mut Life, config: &Config) -> io::Result<()> {
    let mut window = LifeWindow::new(config)?;
    if window.limit == Some(0) {
        window.status = Status::Finished;
    }
    window.update(life)?;
    let mut last_tick = Instant::now();

    loop {
        let timeout = match window.status {
            Status::Running => window.interval.saturating_sub(last_tick.elapsed()),
            _ => Duration::from_millis(MAX_INTERVAL),
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        window.toggle();
                        last_tick = Instant::now();
                        window.update(life)?;
                    }
                    KeyCode::Char('n') if window.status == Status::Paused => {
                        window.advance(life);
                        window.update(life)?;
                    }
                    KeyCode::Char('+') | KeyCode::Char('=') => {
                        window.faster();
                        window.update(life)?;
                    }
                    KeyCode::Char('-') => {
                        window.slower();
                        window.update(life)?;
                    }
                    _ => (),
                },
                Event::Resize(_, _) => window.update(life)?,
                _ => (),
            }
        } else if window.status == Status::Running {
            last_tick = Instant::now();
            window.advance(life);
            window.update(life)?;
        }
    }

    Ok(())
}
