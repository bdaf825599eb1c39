use std::io::Write;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::controllers::interactive::errors::PresentError;
use crate::controllers::interactive::ports::PresenterPort;
use crate::controllers::interactive::status_line::StatusLine;
use crate::core::data::band_buffer::BandBuffer;
use crate::presenters::terminal::palette::style_for;

/// Draws band frames as coloured glyphs, with the status line over row 0.
///
/// Output is queued and flushed once per frame.
#[derive(Debug)]
pub struct TerminalPresenter<W: Write> {
    out: W,
    last_status_width: usize,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_status_width: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn queue_frame(&mut self, frame: &BandBuffer) -> std::io::Result<()> {
        let grid = frame.grid();

        for row in 0..grid.rows() {
            queue!(self.out, MoveTo(0, row))?;

            let mut current: Option<Color> = None;
            let mut run = String::with_capacity(usize::from(grid.cols()));

            for band in frame.row(row) {
                let (glyph, colour) = style_for(band);

                if current != Some(colour) {
                    if let Some(previous) = current {
                        queue!(self.out, SetForegroundColor(previous), Print(&run))?;
                        run.clear();
                    }
                    current = Some(colour);
                }
                run.push(glyph);
            }

            if let Some(colour) = current {
                queue!(self.out, SetForegroundColor(colour), Print(&run))?;
            }
        }

        queue!(self.out, ResetColor)
    }

    fn queue_status(&mut self, status: &StatusLine) -> std::io::Result<()> {
        let mut text = status.to_string();
        let width = text.chars().count();

        // Blank out whatever a longer previous status left behind.
        if width < self.last_status_width {
            text.extend(std::iter::repeat_n(' ', self.last_status_width - width));
        }
        self.last_status_width = width;

        queue!(self.out, MoveTo(0, 0), ResetColor, Print(text))
    }
}

impl<W: Write> PresenterPort for TerminalPresenter<W> {
    fn present_frame(&mut self, frame: &BandBuffer, status: &StatusLine) -> Result<(), PresentError> {
        self.queue_frame(frame)?;
        self.queue_status(status)?;
        self.out.flush()?;
        Ok(())
    }

    fn present_status(&mut self, status: &StatusLine) -> Result<(), PresentError> {
        self.queue_status(status)?;
        self.out.flush()?;
        Ok(())
    }
}
