use crate::controllers::interactive::errors::PresentError;
use crate::controllers::interactive::status_line::StatusLine;
use crate::core::data::band_buffer::BandBuffer;

pub trait PresenterPort {
    /// Replaces the whole screen with `frame`, then draws `status` over the top row.
    fn present_frame(&mut self, frame: &BandBuffer, status: &StatusLine) -> Result<(), PresentError>;

    /// Redraws only the status line.
    fn present_status(&mut self, status: &StatusLine) -> Result<(), PresentError>;
}
