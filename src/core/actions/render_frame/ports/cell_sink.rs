use crate::core::data::band::Band;

/// Receives one band per rendered cell.
pub trait CellSink {
    fn emit(&mut self, row: u16, col: u16, band: Band);
}

impl<F> CellSink for F
where
    F: FnMut(u16, u16, Band),
{
    #[inline]
    fn emit(&mut self, row: u16, col: u16, band: Band) {
        self(row, col, band);
    }
}
