pub mod buyers;
pub mod common;
pub mod employees;
pub mod health;
pub mod localities;
pub mod orders;
pub mod product_types;
pub mod products;
pub mod sections;
pub mod sellers;
pub mod warehouses;

use axum::Router;

use crate::AppState;

/// Every resource router, nested under its plural path.
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/buyers", buyers::buyers_routes())
        .nest("/employees", employees::employees_routes())
        .nest("/localities", localities::localities_routes())
        .nest("/product-types", product_types::product_types_routes())
        .nest("/sellers", sellers::sellers_routes())
        .nest("/warehouses", warehouses::warehouses_routes())
        .nest("/sections", sections::sections_routes())
        .nest("/products", products::products_routes())
        .nest("/purchase-orders", orders::purchase_orders_routes())
        .nest("/inbound-orders", orders::inbound_orders_routes())
}
