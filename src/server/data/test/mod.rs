mod category;
mod channel;
mod server;
mod user;
