pub mod select_account;

pub use select_account::select_network_account;
