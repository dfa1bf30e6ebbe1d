//! Page rendering.
//!
//! Pages are plain HTML built from an explicit [`View`]. Rendering is a pure
//! function of the view, the site info and an optional notice, so handlers
//! hold no state between requests.

use std::fmt::Write;

use crate::domain::menu::{Availability, MenuItem};
use crate::domain::ordering::{Order, OrderStatus};

/// Highest item id the update form accepts.
pub const MAX_UPDATE_ID: i64 = 5000;

/// Navigation targets, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    /// Welcome page.
    Home,
    /// Menu listing and management forms.
    Menu,
    /// Order placement.
    PlaceOrder,
    /// Order status updates.
    OrderStatus,
}

impl Page {
    /// Every page, in navigation order.
    pub const ALL: [Self; 4] = [Self::Home, Self::Menu, Self::PlaceOrder, Self::OrderStatus];

    /// Path the page is served at.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Menu => "/menu",
            Self::PlaceOrder => "/orders/new",
            Self::OrderStatus => "/orders/status",
        }
    }

    /// Label shown in the navigation bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Menu => "Menu",
            Self::PlaceOrder => "Place Order",
            Self::OrderStatus => "Order Status",
        }
    }
}

/// Restaurant details shown on every page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    /// Restaurant name.
    pub name: String,
    /// Line shown under the welcome heading.
    pub tagline: String,
    /// Banner image for the Home page.
    pub image_url: Option<String>,
}

/// Feedback shown above page content after a form post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The action went through.
    Success(String),
    /// The action was not attempted.
    Warning(String),
    /// Storage failed.
    Error(String),
}

impl Notice {
    const fn class(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Warning(_) => "warning",
            Self::Error(_) => "error",
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Warning(m) | Self::Error(m) => m,
        }
    }
}

/// Content of one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Static welcome content.
    Home,
    /// Current menu plus management forms.
    Menu {
        /// Items in storage order.
        items: Vec<MenuItem>,
    },
    /// Order form.
    PlaceOrder {
        /// Selectable names, first occurrence order, without repeats.
        item_names: Vec<String>,
    },
    /// Status form plus the order log.
    OrderStatus {
        /// Orders in storage order.
        orders: Vec<Order>,
    },
}

impl View {
    /// Build the Place Order view from the menu.
    #[must_use]
    pub fn place_order(items: &[MenuItem]) -> Self {
        let mut item_names: Vec<String> = Vec::with_capacity(items.len());
        for item in items {
            if !item_names.contains(&item.name) {
                item_names.push(item.name.clone());
            }
        }
        Self::PlaceOrder { item_names }
    }

    /// Page this view belongs to.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Home => Page::Home,
            Self::Menu { .. } => Page::Menu,
            Self::PlaceOrder { .. } => Page::PlaceOrder,
            Self::OrderStatus { .. } => Page::OrderStatus,
        }
    }
}

/// Render a full HTML document.
#[must_use]
pub fn render(site: &SiteInfo, view: &View, notice: Option<&Notice>) -> String {
    let mut body = String::new();
    if let Some(notice) = notice {
        let _ = write!(
            body,
            r#"<p class="notice {}">{}</p>"#,
            notice.class(),
            escape(notice.message())
        );
    }

    match view {
        View::Home => render_home(&mut body, site),
        View::Menu { items } => render_menu(&mut body, items),
        View::PlaceOrder { item_names } => render_place_order(&mut body, item_names),
        View::OrderStatus { orders } => render_order_status(&mut body, orders),
    }

    let current = view.page();
    let mut nav = String::new();
    for page in Page::ALL {
        let marker = if page == current {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = write!(nav, r#"<li><a href="{}"{marker}>{}</a></li>"#, page.path(), page.label());
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title} - {site}</title>\n</head>\n<body>\n\
         <nav><h2>Navigation</h2><ul>{nav}</ul></nav>\n<main>\n{body}\n</main>\n</body>\n</html>\n",
        title = current.label(),
        site = escape(&site.name),
    )
}

fn render_home(out: &mut String, site: &SiteInfo) {
    let name = escape(&site.name);
    let _ = write!(out, "<h1>Welcome to {name}</h1>");
    if let Some(url) = &site.image_url {
        let _ = write!(
            out,
            r#"<img class="banner" src="{}" alt="{name}">"#,
            escape(url)
        );
    }
    let _ = write!(
        out,
        "<h3>{name} - {tagline}</h3>\
         <p>Manage your restaurant efficiently with our easy-to-use system.</p>",
        tagline = escape(&site.tagline),
    );
}

fn render_menu(out: &mut String, items: &[MenuItem]) {
    out.push_str("<h1>Restaurant Menu</h1>");
    if items.is_empty() {
        out.push_str("<p>No menu items available.</p>");
    } else {
        out.push_str(r#"<ul class="menu">"#);
        for item in items {
            let _ = write!(
                out,
                "<li><strong>{}</strong> ({}) - {} [{}] <small>#{}</small></li>",
                escape(&item.name),
                escape(&item.category),
                item.price,
                escape(item.available.as_str()),
                item.id,
            );
        }
        out.push_str("</ul>");
    }

    out.push_str("<h2>Manage Menu</h2>");
    let _ = write!(
        out,
        r#"<form method="post" action="/menu/add">
<label>Item Name <input name="name" required></label>
<label>Category <input name="category" required></label>
<label>Price <input name="price" type="number" min="0" step="0.01" value="0.00" required></label>
<label>Availability {}</label>
<button type="submit">Add Item</button>
</form>"#,
        select("available", Availability::OPTIONS)
    );

    out.push_str(
        r#"<form method="post" action="/menu/delete">
<label>Enter Item ID to Delete <input name="item_id" type="number" min="1" step="1" value="1" required></label>
<button type="submit">Delete Item</button>
</form>"#,
    );

    out.push_str("<h2>Update Menu Item</h2>");
    let _ = write!(
        out,
        r#"<form method="post" action="/menu/update">
<label>Enter Item ID to Update <input name="update_id" type="number" min="1" max="{MAX_UPDATE_ID}" step="1" value="1" required></label>
<label>New Name <input name="new_name"></label>
<label>New Category <input name="new_category"></label>
<label>New Price <input name="new_price" type="number" min="0" step="0.01" value="0.00" required></label>
<label>New Availability {}</label>
<button type="submit">Update Item</button>
</form>"#,
        select("new_available", Availability::OPTIONS)
    );
}

fn render_place_order(out: &mut String, item_names: &[String]) {
    out.push_str("<h1>Place an Order</h1>");
    out.push_str(r#"<form method="post" action="/orders"><label>Select Items <select name="items" multiple>"#);
    for name in item_names {
        let name = escape(name);
        let _ = write!(out, r#"<option value="{name}">{name}</option>"#);
    }
    out.push_str(r#"</select></label><button type="submit">Place Order</button></form>"#);
}

fn render_order_status(out: &mut String, orders: &[Order]) {
    out.push_str("<h1>Update Order Status</h1>");
    let _ = write!(
        out,
        r#"<form method="post" action="/orders/status">
<label>Enter Order ID <input name="order_id" type="number" min="1" step="1" value="1" required></label>
<label>Update Status {}</label>
<button type="submit">Update Status</button>
</form>"#,
        select("status", OrderStatus::OPTIONS)
    );

    out.push_str("<h2>Orders</h2>");
    if orders.is_empty() {
        out.push_str("<p>No orders yet.</p>");
        return;
    }
    out.push_str(
        "<table><thead><tr><th>ID</th><th>Items</th><th>Total</th><th>Status</th></tr></thead><tbody>",
    );
    for order in orders {
        let _ = write!(
            out,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            order.id,
            escape(&order.items),
            order.total_price,
            escape(order.status.as_str()),
        );
    }
    out.push_str("</tbody></table>");
}

fn select(name: &str, options: &[&str]) -> String {
    let mut html = format!(r#"<select name="{name}">"#);
    for option in options {
        let _ = write!(html, r#"<option value="{option}">{option}</option>"#);
    }
    html.push_str("</select>");
    html
}

/// Escape text for use in element content and quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::menu::MenuItemDraft;
    use crate::domain::shared::{MenuItemId, Money, OrderId};
    use rust_decimal_macros::dec;

    fn site() -> SiteInfo {
        SiteInfo {
            name: "Sukkur Delight".to_string(),
            tagline: "Restaurant & Cafe".to_string(),
            image_url: None,
        }
    }

    fn item(id: i64, name: &str) -> MenuItem {
        MenuItemDraft::new(name, "Food", Money::new(dec!(5)), Availability::Yes)
            .into_item(MenuItemId::new(id))
    }

    #[test]
    fn home_page_welcomes() {
        let html = render(&site(), &View::Home, None);
        assert!(html.contains("<h1>Welcome to Sukkur Delight</h1>"));
        assert!(html.contains("Sukkur Delight - Restaurant &amp; Cafe"));
        assert!(html.contains(r#"<a href="/" aria-current="page">Home</a>"#));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn home_page_shows_configured_banner() {
        let site = SiteInfo {
            image_url: Some("/static/background.jpg?v=1&w=2".to_string()),
            ..site()
        };
        let html = render(&site, &View::Home, None);
        assert!(html.contains(
            r#"<img class="banner" src="/static/background.jpg?v=1&amp;w=2" alt="Sukkur Delight">"#
        ));
    }

    #[test]
    fn empty_menu_message() {
        let html = render(&site(), &View::Menu { items: vec![] }, None);
        assert!(html.contains("No menu items available."));
        assert!(html.contains(r#"action="/menu/add""#));
        assert!(html.contains(r#"max="5000""#));
    }

    #[test]
    fn menu_lines_show_price_and_availability() {
        let html = render(&site(), &View::Menu { items: vec![item(1, "Burger")] }, None);
        assert!(html.contains("<strong>Burger</strong> (Food) - $5.00 [Yes]"));
        assert!(!html.contains("No menu items available."));
    }

    #[test]
    fn place_order_options_skip_repeated_names() {
        let view = View::place_order(&[item(1, "Burger"), item(2, "Tea"), item(3, "Burger")]);
        assert_eq!(
            view,
            View::PlaceOrder {
                item_names: vec!["Burger".to_string(), "Tea".to_string()]
            }
        );
        let html = render(&site(), &view, None);
        assert_eq!(html.matches(r#"<option value="Burger">"#).count(), 1);
    }

    #[test]
    fn order_status_lists_orders() {
        let orders = vec![Order {
            id: OrderId::new(1),
            items: "Burger".to_string(),
            total_price: Money::new(dec!(5)),
            status: OrderStatus::Completed,
        }];
        let html = render(&site(), &View::OrderStatus { orders }, None);
        assert!(html.contains("<td>1</td><td>Burger</td><td>$5.00</td><td>Completed</td>"));
        assert!(html.contains(r#"<option value="Pending">"#));
    }

    #[test]
    fn notice_is_rendered_and_escaped() {
        let notice = Notice::Warning("Please select <at least> one item.".to_string());
        let html = render(&site(), &View::Home, Some(&notice));
        assert!(html.contains(
            r#"<p class="notice warning">Please select &lt;at least&gt; one item.</p>"#
        ));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render(&site(), &View::Menu { items: vec![item(1, "<script>")] }, None);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<strong><script>"));
    }
}
