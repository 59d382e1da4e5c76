//! TUI module using ratatui.
//!
//! A two-field form with a summarize button. Summaries open in a modal that
//! closes on Esc, on its `[x]` control, or on a click on the dimmed backdrop.

mod form;
mod input;
mod render;
mod screen;
mod terminal;

pub use form::{Field, Form};
pub use screen::{FormLayout, ModalView, Screen};

use crate::client::HttpSummaryService;
use crate::config::Config;
use crate::controller::Controller;
use crate::surface::{Diagnostics, TracingDiagnostics};
use crossterm::event;
use input::{handle_event, Action};
use render::draw_ui;
use std::sync::Arc;
use std::time::Duration;
use terminal::{restore_terminal, setup_terminal, Tui};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Run the TUI against the configured endpoint until the user quits
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let service = HttpSummaryService::new(&config.endpoint)?;
    tracing::info!(endpoint = %service.endpoint(), "starting tui");

    let mut controller =
        Controller::new(Arc::new(service), Screen::default(), TracingDiagnostics);
    let mut terminal = setup_terminal()?;

    let result = event_loop(&mut terminal, &mut controller);

    controller.teardown();
    restore_terminal(&mut terminal)?;
    tracing::info!("tui closed");
    result
}

fn event_loop<D: Diagnostics>(
    terminal: &mut Tui,
    controller: &mut Controller<Screen, D>,
) -> anyhow::Result<()> {
    loop {
        let mut bounds = None;
        terminal.draw(|frame| bounds = draw_ui(frame, controller.surface_mut()))?;
        if let Some(bounds) = bounds {
            controller.place_modal(bounds);
        }

        if event::poll(TICK_RATE)? {
            let event = event::read()?;
            let action = handle_event(&event, controller.surface_mut());
            if dispatch(controller, action) {
                return Ok(());
            }
        }

        controller.apply_ready();
    }
}

/// Carry out an input action; returns true when the loop should stop
fn dispatch<D: Diagnostics>(controller: &mut Controller<Screen, D>, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::Summarize => {
            let request = controller.surface().form.request();
            controller.summarize(request);
        }
        Action::CloseModal => controller.close(),
        Action::ModalClick { column, row } => {
            controller.click(column, row);
        }
        Action::None => {}
    }
    false
}
