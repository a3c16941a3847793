use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::AddToCartRequest,
        chat::ChatReply,
        messages::CreateMessageRequest,
        products::ProductList,
        sessions::{CreateSessionRequest, MessageList, SessionList},
        wishlist::{AddWishlistRequest, WishlistRemoval},
    },
    models::{
        CartItem, ChatSession, Message, MessageRole, PriceHistory, PricePoint, Product, Retailer,
        WishlistItem,
    },
    response::{ApiResponse, Meta},
    routes::{cart, chat, health, messages, params, products, sessions, wishlist},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Shopping AI Assistant API"),
    paths(
        health::root,
        health::test_database,
        health::health_check,
        sessions::create_session,
        sessions::list_sessions,
        sessions::recent_sessions,
        sessions::list_messages,
        messages::post_message,
        products::search_products,
        products::trending_products,
        products::essential_products,
        products::favorite_products,
        products::price_history,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        cart::add_to_cart,
        chat::chat
    ),
    components(
        schemas(
            ChatSession,
            Message,
            MessageRole,
            Product,
            Retailer,
            PricePoint,
            PriceHistory,
            WishlistItem,
            CartItem,
            CreateSessionRequest,
            CreateMessageRequest,
            AddWishlistRequest,
            WishlistRemoval,
            AddToCartRequest,
            ChatReply,
            SessionList,
            MessageList,
            ProductList,
            params::LimitQuery,
            params::SearchQuery,
            params::ChatQuery,
            health::HealthData,
            health::ServiceInfo,
            health::DatabaseReport,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<ChatReply>
        )
    ),
    tags(
        (name = "Health", description = "Liveness and database status"),
        (name = "Sessions", description = "Chat sessions and their messages"),
        (name = "Products", description = "Product search and discovery"),
        (name = "Wishlist", description = "Wishlist endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Chat", description = "Heuristic shopping assistant"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
