pub mod run_terminal;
