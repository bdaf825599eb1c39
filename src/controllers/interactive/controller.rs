use std::ops::ControlFlow;
use std::time::Instant;

use tracing::{debug, info};

use crate::controllers::interactive::command::{Command, InputEvent};
use crate::controllers::interactive::errors::ControllerError;
use crate::controllers::interactive::ports::{InputPort, PresenterPort};
use crate::controllers::interactive::status_line::StatusLine;
use crate::core::actions::navigate::{Navigation, navigate};
use crate::core::actions::render_frame::render_frame::render_frame;
use crate::core::data::band_buffer::BandBuffer;
use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::viewport::Viewport;
use crate::instrumentation::cpu_sampler::{CpuMonitor, ProcessTimes};

pub struct InteractiveController<P: PresenterPort> {
    viewport: Viewport,
    grid: GridDimensions,
    presenter: P,
    cpu: CpuMonitor,
    frames_rendered: u64,
}

impl<P: PresenterPort> InteractiveController<P> {
    pub fn new(viewport: Viewport, grid: GridDimensions, presenter: P) -> Self {
        Self {
            viewport,
            grid,
            presenter,
            cpu: CpuMonitor::default(),
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Renders the initial frame, then handles events until quit or an error.
    pub fn run<I: InputPort>(&mut self, input: &mut I) -> Result<(), ControllerError> {
        info!(
            center_x = self.viewport.center_x,
            center_y = self.viewport.center_y,
            scale = self.viewport.scale,
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            "starting interactive session"
        );

        self.render()?;

        loop {
            let event = input.next_event()?;
            if self.handle_event(event)?.is_break() {
                break;
            }
        }

        info!(frames = self.frames_rendered, "interactive session finished");
        Ok(())
    }

    /// Applies one event. Every viewport or grid change is fully rendered before returning.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<ControlFlow<()>, ControllerError> {
        match event {
            InputEvent::Command(Command::Quit) => return Ok(ControlFlow::Break(())),
            InputEvent::Command(Command::Navigate(navigation)) => {
                self.apply_navigation(navigation);
                self.render()?;
            }
            InputEvent::Resize(grid) => {
                if grid != self.grid {
                    info!(rows = grid.rows(), cols = grid.cols(), "grid resized");
                    self.grid = grid;
                    self.render()?;
                }
            }
            InputEvent::Tick => {
                let status = self.status_line();
                self.presenter.present_status(&status)?;
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Computes a full frame for the current viewport and hands it to the presenter.
    pub fn render(&mut self) -> Result<(), ControllerError> {
        let mut frame = BandBuffer::new(self.grid);

        let start = Instant::now();
        render_frame(self.grid, self.viewport, &mut frame);
        let duration = start.elapsed();

        self.frames_rendered += 1;
        debug!(frame = self.frames_rendered, ?duration, "frame rendered");

        let status = self.status_line();
        self.presenter.present_frame(&frame, &status)?;

        Ok(())
    }

    fn apply_navigation(&mut self, navigation: Navigation) {
        self.viewport = navigate(self.viewport, self.grid, navigation);

        debug!(
            %navigation,
            center_x = self.viewport.center_x,
            center_y = self.viewport.center_y,
            scale = self.viewport.scale,
            "viewport updated"
        );
    }

    fn status_line(&mut self) -> StatusLine {
        let cpu_percent = self.cpu.poll(ProcessTimes::now());
        StatusLine::new(cpu_percent, self.viewport)
    }
}
