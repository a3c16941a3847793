pub mod cart;
pub mod chat;
pub mod messages;
pub mod products;
pub mod sessions;
pub mod wishlist;
