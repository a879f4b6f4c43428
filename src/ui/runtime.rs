use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;

use super::App;
use crate::outcome::SearchOutcome;

const FRAME: Duration = Duration::from_millis(16);
const EVENT_POLL: Duration = Duration::from_millis(50);

/// Run a prepared [`App`] to completion.
pub fn run(mut app: App) -> Result<SearchOutcome> {
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user navigates or quits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		let result = execute!(stdout(), EnableMouseCapture)
			.context("failed to enable mouse capture")
			.and_then(|()| {
				terminal.clear()?;
				self.event_loop(&mut terminal)
			});

		let _ = execute!(stdout(), DisableMouseCapture);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut ratatui::DefaultTerminal) -> Result<SearchOutcome> {
		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::Builder::new()
			.name("terminal-events".into())
			.spawn(move || -> Result<()> {
				while event_loop_flag.load(Ordering::Relaxed) {
					if event::poll(EVENT_POLL)? {
						let event = event::read()?;
						if event_tx.send(event).is_err() {
							break;
						}
					}
				}
				Ok(())
			})
			.context("failed to spawn terminal event reader")?;

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.tick(Instant::now());
			self.throbber_state.calc_next();

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}
			self.after_paint();

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Some(outcome) = self.handle_event(event, Instant::now()) {
					maybe_outcome = Some(outcome);
					break;
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(FRAME);
		};

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
