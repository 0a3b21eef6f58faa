pub mod client;

pub use client::SteamClient;
