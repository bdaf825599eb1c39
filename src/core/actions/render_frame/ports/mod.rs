pub mod cell_sink;
