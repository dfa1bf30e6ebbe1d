//! HTTP Controller (Driver Adapter)
//!
//! Axum router serving the four pages. Every form post performs at most one
//! storage write and then re-renders its page with a notice.

use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;

use super::pages::{Notice, Page, SiteInfo, View, render};
use super::request::{
    AddMenuItemForm, DeleteMenuItemForm, FormError, UpdateMenuItemForm, UpdateOrderStatusForm,
    selected_items,
};
use crate::application::use_cases::{
    ManageMenuUseCase, PlaceOrderOutcome, PlaceOrderUseCase, UpdateOrderStatusUseCase,
};
use crate::domain::menu::MenuRepository;
use crate::domain::ordering::OrderRepository;
use crate::domain::shared::StorageFault;

const STORAGE_FAULT_MESSAGE: &str = "Could not reach the restaurant database. Please try again.";

/// Application state shared across handlers.
pub struct AppState<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    /// Use case for the Menu page.
    pub manage_menu: Arc<ManageMenuUseCase<M>>,
    /// Use case for the Place Order page.
    pub place_order: Arc<PlaceOrderUseCase<M, O>>,
    /// Use case for the Order Status page.
    pub update_order_status: Arc<UpdateOrderStatusUseCase<O>>,
    /// Restaurant details shown on every page.
    pub site: Arc<SiteInfo>,
    /// Application version.
    pub version: String,
}

impl<M, O> AppState<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    /// Wire the use cases over the given repositories.
    pub fn new(menu_repo: Arc<M>, order_repo: Arc<O>, site: SiteInfo) -> Self {
        Self {
            manage_menu: Arc::new(ManageMenuUseCase::new(Arc::clone(&menu_repo))),
            place_order: Arc::new(PlaceOrderUseCase::new(menu_repo, Arc::clone(&order_repo))),
            update_order_status: Arc::new(UpdateOrderStatusUseCase::new(order_repo)),
            site: Arc::new(site),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn page(&self, status: StatusCode, view: &View, notice: Option<&Notice>) -> Response {
        (status, Html(render(&self.site, view, notice))).into_response()
    }

    fn storage_fault(&self, page: Page, err: &StorageFault) -> Response {
        tracing::error!(page = page.label(), error = %err, "Storage operation failed");
        let view = match page {
            Page::Home => View::Home,
            Page::Menu => View::Menu { items: vec![] },
            Page::PlaceOrder => View::PlaceOrder { item_names: vec![] },
            Page::OrderStatus => View::OrderStatus { orders: vec![] },
        };
        self.page(
            StatusCode::INTERNAL_SERVER_ERROR,
            &view,
            Some(&Notice::Error(STORAGE_FAULT_MESSAGE.to_string())),
        )
    }

    async fn menu_page(&self, status: StatusCode, notice: Option<Notice>) -> Response {
        match self.manage_menu.list().await {
            Ok(items) => self.page(status, &View::Menu { items }, notice.as_ref()),
            Err(e) => self.storage_fault(Page::Menu, &e),
        }
    }

    async fn place_order_page(&self, status: StatusCode, notice: Option<Notice>) -> Response {
        match self.manage_menu.list().await {
            Ok(items) => self.page(status, &View::place_order(&items), notice.as_ref()),
            Err(e) => self.storage_fault(Page::PlaceOrder, &e),
        }
    }

    async fn order_status_page(&self, status: StatusCode, notice: Option<Notice>) -> Response {
        match self.update_order_status.list_orders().await {
            Ok(orders) => self.page(status, &View::OrderStatus { orders }, notice.as_ref()),
            Err(e) => self.storage_fault(Page::OrderStatus, &e),
        }
    }
}

impl<M, O> Clone for AppState<M, O>
where
    M: MenuRepository,
    O: OrderRepository,
{
    fn clone(&self) -> Self {
        Self {
            manage_menu: Arc::clone(&self.manage_menu),
            place_order: Arc::clone(&self.place_order),
            update_order_status: Arc::clone(&self.update_order_status),
            site: Arc::clone(&self.site),
            version: self.version.clone(),
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: String,
}

/// Create the HTTP router with all pages.
pub fn create_router<M, O>(state: AppState<M, O>) -> Router
where
    M: MenuRepository + 'static,
    O: OrderRepository + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route(Page::Home.path(), get(home))
        .route(Page::Menu.path(), get(menu))
        .route("/menu/add", post(add_menu_item))
        .route("/menu/delete", post(delete_menu_item))
        .route("/menu/update", post(update_menu_item))
        .route(Page::PlaceOrder.path(), get(new_order))
        .route("/orders", post(place_order))
        .route(
            Page::OrderStatus.path(),
            get(order_status).post(update_order_status),
        )
        .with_state(state)
}

fn warning(err: &FormError) -> Option<Notice> {
    tracing::warn!(error = %err, "Form rejected");
    Some(Notice::Warning(err.to_string()))
}

async fn health_check<M, O>(State(state): State<AppState<M, O>>) -> impl IntoResponse
where
    M: MenuRepository,
    O: OrderRepository,
{
    Json(HealthResponse {
        status: "healthy",
        version: state.version.clone(),
    })
}

async fn home<M, O>(State(state): State<AppState<M, O>>) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    state.page(StatusCode::OK, &View::Home, None)
}

async fn menu<M, O>(State(state): State<AppState<M, O>>) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    state.menu_page(StatusCode::OK, None).await
}

async fn add_menu_item<M, O>(
    State(state): State<AppState<M, O>>,
    Form(form): Form<AddMenuItemForm>,
) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    let draft = match form.into_draft() {
        Ok(draft) => draft,
        Err(e) => return state.menu_page(StatusCode::UNPROCESSABLE_ENTITY, warning(&e)).await,
    };

    match state.manage_menu.add(draft).await {
        Ok(id) => {
            tracing::info!(
                page = Page::Menu.label(),
                menu_item_id = %id,
                "Add form handled"
            );
            let notice = Notice::Success("Menu item added successfully!".to_string());
            state.menu_page(StatusCode::OK, Some(notice)).await
        }
        Err(e) => state.storage_fault(Page::Menu, &e),
    }
}

async fn delete_menu_item<M, O>(
    State(state): State<AppState<M, O>>,
    Form(form): Form<DeleteMenuItemForm>,
) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    let id = match form.item_id() {
        Ok(id) => id,
        Err(e) => return state.menu_page(StatusCode::UNPROCESSABLE_ENTITY, warning(&e)).await,
    };

    match state.manage_menu.delete(id).await {
        Ok(rows) => {
            tracing::info!(
                page = Page::Menu.label(),
                menu_item_id = %id,
                rows,
                "Delete form handled"
            );
            let notice = Notice::Success("Menu item deleted!".to_string());
            state.menu_page(StatusCode::OK, Some(notice)).await
        }
        Err(e) => state.storage_fault(Page::Menu, &e),
    }
}

async fn update_menu_item<M, O>(
    State(state): State<AppState<M, O>>,
    Form(form): Form<UpdateMenuItemForm>,
) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    let (id, draft) = match form.into_parts() {
        Ok(parts) => parts,
        Err(e) => return state.menu_page(StatusCode::UNPROCESSABLE_ENTITY, warning(&e)).await,
    };

    match state.manage_menu.update(id, draft).await {
        Ok(rows) => {
            tracing::info!(
                page = Page::Menu.label(),
                menu_item_id = %id,
                rows,
                "Update form handled"
            );
            let notice = Notice::Success("Menu item updated!".to_string());
            state.menu_page(StatusCode::OK, Some(notice)).await
        }
        Err(e) => state.storage_fault(Page::Menu, &e),
    }
}

async fn new_order<M, O>(State(state): State<AppState<M, O>>) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    state.place_order_page(StatusCode::OK, None).await
}

async fn place_order<M, O>(
    State(state): State<AppState<M, O>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    let selection = selected_items(fields);

    match state.place_order.execute(&selection).await {
        Ok(PlaceOrderOutcome::Placed { order_id, .. }) => {
            tracing::info!(
                page = Page::PlaceOrder.label(),
                order_id = %order_id,
                "Order form handled"
            );
            let notice = Notice::Success("Order placed successfully!".to_string());
            state.place_order_page(StatusCode::OK, Some(notice)).await
        }
        Ok(PlaceOrderOutcome::EmptySelection) => {
            let notice = Notice::Warning("Please select at least one item.".to_string());
            state.place_order_page(StatusCode::OK, Some(notice)).await
        }
        Ok(PlaceOrderOutcome::TotalTooLarge) => {
            let notice = Notice::Warning("Order total is too large to record.".to_string());
            state
                .place_order_page(StatusCode::UNPROCESSABLE_ENTITY, Some(notice))
                .await
        }
        Err(e) => state.storage_fault(Page::PlaceOrder, &e),
    }
}

async fn order_status<M, O>(State(state): State<AppState<M, O>>) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    state.order_status_page(StatusCode::OK, None).await
}

async fn update_order_status<M, O>(
    State(state): State<AppState<M, O>>,
    Form(form): Form<UpdateOrderStatusForm>,
) -> Response
where
    M: MenuRepository,
    O: OrderRepository,
{
    let (id, status) = match form.into_parts() {
        Ok(parts) => parts,
        Err(e) => {
            return state
                .order_status_page(StatusCode::UNPROCESSABLE_ENTITY, warning(&e))
                .await;
        }
    };

    match state.update_order_status.execute(id, &status).await {
        Ok(rows) => {
            tracing::info!(
                page = Page::OrderStatus.label(),
                order_id = %id,
                status = %status,
                rows,
                "Status form handled"
            );
            let notice = Notice::Success("Order status updated!".to_string());
            state.order_status_page(StatusCode::OK, Some(notice)).await
        }
        Err(e) => state.storage_fault(Page::OrderStatus, &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::{Availability, MenuItem, MenuItemDraft};
    use crate::domain::ordering::OrderStatus;
    use crate::domain::shared::{MenuItemId, Money, OrderId};
    use crate::infrastructure::persistence::InMemoryStore;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal_macros::dec;
    use tower::ServiceExt;

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Sukkur Delight".to_string(),
            tagline: "Restaurant & Cafe".to_string(),
            image_url: None,
        }
    }

    fn create_test_state() -> (Arc<InMemoryStore>, AppState<InMemoryStore, InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(Arc::clone(&store), Arc::clone(&store), site());
        (store, state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_ok() {
        let (_, state) = create_test_state();
        let (status, body) = send(create_router(state), get_request("/health")).await;

        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
    }

    #[tokio::test]
    async fn every_page_renders() {
        let (_, state) = create_test_state();
        for (uri, heading) in [
            ("/", "Welcome to Sukkur Delight"),
            ("/menu", "Restaurant Menu"),
            ("/orders/new", "Place an Order"),
            ("/orders/status", "Update Order Status"),
        ] {
            let (status, body) = send(create_router(state.clone()), get_request(uri)).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert!(body.contains(heading), "{uri} missing {heading}");
        }
    }

    #[tokio::test]
    async fn add_item_then_listed() {
        let (store, state) = create_test_state();

        let (status, body) = send(
            create_router(state),
            form_request(
                "/menu/add",
                "name=Burger&category=Food&price=5.00&available=Yes",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Menu item added successfully!"));
        assert!(body.contains("<strong>Burger</strong> (Food) - $5.00 [Yes]"));
        assert_eq!(store.list_menu().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn negative_price_is_rejected_without_write() {
        let (store, state) = create_test_state();

        let (status, body) = send(
            create_router(state),
            form_request("/menu/add", "name=Burger&category=Food&price=-1&available=Yes"),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Price cannot be negative"));
        assert!(store.list_menu().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_id_still_reports_success() {
        let (_, state) = create_test_state();

        let (status, body) =
            send(create_router(state), form_request("/menu/delete", "item_id=42")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Menu item deleted!"));
    }

    #[tokio::test]
    async fn update_id_above_cap_is_rejected() {
        let (store, state) = create_test_state();
        store
            .add_menu_item(MenuItemDraft::new(
                "Burger",
                "Food",
                Money::new(dec!(5)),
                Availability::Yes,
            ))
            .await
            .unwrap();

        let (status, body) = send(
            create_router(state),
            form_request(
                "/menu/update",
                "update_id=5001&new_name=X&new_category=Y&new_price=1&new_available=No",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Item ID must be between 1 and 5000"));
        assert_eq!(store.list_menu().await.unwrap()[0].name, "Burger");
    }

    #[tokio::test]
    async fn empty_selection_warns_and_writes_nothing() {
        let (store, state) = create_test_state();

        let (status, body) = send(create_router(state), form_request("/orders", "")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Please select at least one item."));
        assert!(store.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn multi_select_places_one_order() {
        let (store, state) = create_test_state();
        for (name, price) in [("Burger", dec!(5)), ("Tea", dec!(1.5))] {
            store
                .add_menu_item(MenuItemDraft::new(
                    name,
                    "Food",
                    Money::new(price),
                    Availability::Yes,
                ))
                .await
                .unwrap();
        }

        let (status, body) = send(
            create_router(state),
            form_request("/orders", "items=Burger&items=Tea"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Order placed successfully!"));
        let orders = store.list_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].items, "Burger, Tea");
        assert_eq!(orders[0].total_price, Money::new(dec!(6.5)));
        assert_eq!(orders[0].status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn overflowing_order_total_is_rejected() {
        let (store, state) = create_test_state();
        for _ in 0..2 {
            let (status, _) = send(
                create_router(state.clone()),
                form_request(
                    "/menu/add",
                    "name=X&category=Food&price=50000000000000000000000000000&available=Yes",
                ),
            )
            .await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, body) = send(create_router(state), form_request("/orders", "items=X")).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Order total is too large to record."));
        assert!(store.list_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn price_that_would_not_read_back_is_rejected() {
        let (store, state) = create_test_state();

        let (status, body) = send(
            create_router(state.clone()),
            form_request(
                "/menu/add",
                "name=X&category=Food&price=79228162514264337593543950335&available=Yes",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Price is too large"));
        assert!(store.list_menu().await.unwrap().is_empty());

        let (status, _) = send(
            create_router(state),
            form_request("/menu/add", "name=Tea&category=Drinks&price=1&available=Yes"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn status_update_rejects_unknown_status() {
        let (store, state) = create_test_state();
        let id = store.place_order("Burger", Money::new(dec!(5))).await.unwrap();

        let (status, _) = send(
            create_router(state),
            form_request("/orders/status", &format!("order_id={id}&status=Lost")),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let order = store.find_order(id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn status_update_completes_order() {
        let (store, state) = create_test_state();
        let id = store.place_order("Burger", Money::new(dec!(5))).await.unwrap();

        let (status, body) = send(
            create_router(state),
            form_request("/orders/status", &format!("order_id={id}&status=Completed")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Order status updated!"));
        assert!(body.contains("<td>Completed</td>"));
        assert_eq!(
            store.find_order(OrderId::new(1)).await.unwrap().unwrap().status,
            OrderStatus::Completed
        );
    }

    // Repository that fails every call
    struct BrokenStore;

    #[async_trait]
    impl MenuRepository for BrokenStore {
        async fn list_menu(&self) -> Result<Vec<MenuItem>, StorageFault> {
            Err(StorageFault::Connection("disk unplugged".to_string()))
        }

        async fn add_menu_item(
            &self,
            _draft: MenuItemDraft,
        ) -> Result<MenuItemId, StorageFault> {
            Err(StorageFault::Connection("disk unplugged".to_string()))
        }

        async fn delete_menu_item(
            &self,
            _id: MenuItemId,
        ) -> Result<usize, StorageFault> {
            Err(StorageFault::Connection("disk unplugged".to_string()))
        }

        async fn update_menu_item(
            &self,
            _id: MenuItemId,
            _draft: MenuItemDraft,
        ) -> Result<usize, StorageFault> {
            Err(StorageFault::Connection("disk unplugged".to_string()))
        }
    }

    #[tokio::test]
    async fn storage_fault_renders_error_page() {
        let state = AppState::new(
            Arc::new(BrokenStore),
            Arc::new(InMemoryStore::new()),
            site(),
        );

        let (status, body) = send(create_router(state), get_request("/menu")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains(STORAGE_FAULT_MESSAGE));
    }
}
