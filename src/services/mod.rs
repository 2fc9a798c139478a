pub mod rankings;
pub mod server;
