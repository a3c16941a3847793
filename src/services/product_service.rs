use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use crate::{
    dto::products::ProductList,
    entity::{
        price_history::{Column as HistoryCol, Entity as PriceHistories},
        products::{Column, Entity as Products, Model as ProductModel},
    },
    error::AppResult,
    models::{PriceHistory, Product},
    response::{ApiResponse, Meta},
    routes::params::SearchQuery,
    state::AppState,
};

pub const DEFAULT_SEARCH_LIMIT: u64 = 20;
pub const DEFAULT_SHOWCASE_LIMIT: u64 = 8;

/// Fixed product orderings used by the discovery shelves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Showcase {
    /// Highest rated first.
    Trending,
    /// Cheapest first.
    Essentials,
    /// Most recently added first.
    Favorites,
}

impl Showcase {
    fn label(self) -> &'static str {
        match self {
            Showcase::Trending => "Trending products",
            Showcase::Essentials => "Essential products",
            Showcase::Favorites => "Favorite products",
        }
    }
}

pub async fn search_products(
    state: &AppState,
    query: SearchQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let limit = query.resolve_limit(DEFAULT_SEARCH_LIMIT);
    let Some(db) = state.try_db() else {
        return Ok(product_list("Products", Vec::new(), limit));
    };

    let items = find_matching(db, &query.q, limit)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(product_list("Products", items, limit))
}

pub async fn showcase(
    state: &AppState,
    kind: Showcase,
    limit: u64,
) -> AppResult<ApiResponse<ProductList>> {
    let Some(db) = state.try_db() else {
        return Ok(product_list(kind.label(), Vec::new(), limit));
    };

    let finder = match kind {
        Showcase::Trending => Products::find().order_by_desc(Column::Rating),
        Showcase::Essentials => Products::find().order_by_asc(Column::Price),
        Showcase::Favorites => Products::find().order_by_desc(Column::CreatedAt),
    };
    let items = finder
        .limit(limit)
        .all(db)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();
    Ok(product_list(kind.label(), items, limit))
}

/// An unknown product, or no database at all, yields an empty history.
pub async fn price_history(
    state: &AppState,
    product_id: Uuid,
) -> AppResult<ApiResponse<PriceHistory>> {
    let Some(db) = state.try_db() else {
        return Ok(ApiResponse::success("Price history", PriceHistory::default(), None));
    };

    let history = PriceHistories::find()
        .filter(HistoryCol::ProductId.eq(product_id))
        .one(db)
        .await?
        .map(PriceHistory::from)
        .unwrap_or_default();
    Ok(ApiResponse::success("Price history", history, None))
}

/// Products whose title, description or category contains `q`, ignoring case.
/// An empty `q` matches everything.
pub(crate) async fn find_matching<C: ConnectionTrait>(
    db: &C,
    q: &str,
    limit: u64,
) -> AppResult<Vec<ProductModel>> {
    let mut finder = Products::find();
    if !q.is_empty() {
        finder = finder.filter(text_condition(q));
    }
    Ok(finder.limit(limit).all(db).await?)
}

pub(crate) async fn top_rated<C: ConnectionTrait>(db: &C, limit: u64) -> AppResult<Vec<ProductModel>> {
    Ok(Products::find()
        .order_by_desc(Column::Rating)
        .limit(limit)
        .all(db)
        .await?)
}

fn text_condition(q: &str) -> Condition {
    let pattern = like_pattern(q);
    Condition::any()
        .add(Expr::col(Column::Title).ilike(pattern.clone()))
        .add(Expr::col(Column::Description).ilike(pattern.clone()))
        .add(Expr::col(Column::Category).ilike(pattern))
}

/// `%q%` with LIKE wildcards in `q` escaped so they match literally.
fn like_pattern(q: &str) -> String {
    let mut pattern = String::with_capacity(q.len() + 2);
    pattern.push('%');
    for ch in q.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

fn product_list(message: &str, items: Vec<Product>, limit: u64) -> ApiResponse<ProductList> {
    ApiResponse::success(message, ProductList { items }, Some(Meta::listing(limit)))
}
