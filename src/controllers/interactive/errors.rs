use thiserror::Error;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to draw frame: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read terminal event: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Present(#[from] PresentError),
    #[error(transparent)]
    Input(#[from] InputError),
}
