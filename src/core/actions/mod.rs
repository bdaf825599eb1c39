pub mod navigate;
pub mod render_frame;
pub mod zoom;
