pub mod routes;
pub mod server;
pub mod transport;

pub use routes::build_router;
pub use server::BoardServer;
