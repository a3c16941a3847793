pub mod cart_items;
pub mod chat_sessions;
pub mod messages;
pub mod price_history;
pub mod products;
pub mod wishlist_items;
