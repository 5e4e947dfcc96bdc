use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use exclusion_view::{AnimationFrame, RunView};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::{Terminal, TerminalOptions, Viewport};
use std::io::{self, Stdout};
use std::time::Duration;

/// Full-screen terminal used for animation playback.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self { terminal })
    }

    pub fn init(&mut self) -> io::Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, cursor::Hide)?;
        enable_raw_mode()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn exit(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

/// Draws `view` below the shell prompt without taking over the screen.
pub fn print_run_view(view: RunView) -> io::Result<()> {
    let mut terminal = Terminal::with_options(
        CrosstermBackend::new(io::stdout()),
        TerminalOptions {
            viewport: Viewport::Inline(view.height()),
        },
    )?;
    terminal.draw(|f| f.render_widget(view, f.area()))?;
    println!();
    Ok(())
}

/// Waits up to `timeout` for a key press; `q` or Esc stops playback.
pub fn quit_requested(timeout: Duration) -> io::Result<bool> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            return Ok(key.kind == KeyEventKind::Press
                && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc));
        }
    }
    Ok(false)
}

/// Draws `frames` one after another at `fps` frames per second.
///
/// `wait` is called between frames with the frame delay and returns `true`
/// to stop early. Returns the number of frames drawn.
pub fn play_animation<B, F>(
    terminal: &mut Terminal<B>,
    frames: &[AnimationFrame],
    fps: u32,
    mut wait: F,
) -> io::Result<usize>
where
    B: Backend,
    F: FnMut(Duration) -> io::Result<bool>,
{
    let delay = Duration::from_millis(1000 / u64::from(fps.max(1)));
    let mut shown = 0;
    for frame in frames {
        terminal.draw(|f| {
            let area = f.area();
            let track = Rect {
                height: area.height.min(exclusion_view::FRAME_HEIGHT),
                ..area
            };
            f.render_widget(frame, track);
        })?;
        shown += 1;
        if wait(delay)? {
            break;
        }
    }
    Ok(shown)
}
