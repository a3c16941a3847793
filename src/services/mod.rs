pub mod cart_service;
pub mod chat_service;
pub mod message_service;
pub mod product_service;
pub mod session_service;
pub mod wishlist_service;
