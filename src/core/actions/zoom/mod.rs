pub mod zoom_at;
