use crate::core::cart_store::CartStore;
use crate::core::catalog::Catalog;
use crate::core::renderer::{render_cart, render_products};
use crate::core::router::{route, Action, UiEvent};
use crate::domain::model::CartChange;
use crate::domain::ports::{KeyValueStore, Notifier, Prompt, Surface};
use crate::domain::view::{CartView, Control, ProductView};
use std::sync::Arc;

pub const CLEAR_CONFIRMATION: &str = "Do you really want to clear the cart?";
pub const CLEARED_MESSAGE: &str = "Cart cleared";

/// Application root: owns the cart and drives the surface.
///
/// Events are handled one at a time and each is awaited to completion, so
/// cart operations never interleave.
pub struct ShopApp<K, V, N, P>
where
    K: KeyValueStore,
    V: Surface,
    N: Notifier,
    P: Prompt,
{
    catalog: Arc<Catalog>,
    store: CartStore<K>,
    surface: V,
    notifier: N,
    prompt: P,
    filter: String,
    products: ProductView,
    cart: CartView,
    focused: Option<Control>,
}

impl<K, V, N, P> ShopApp<K, V, N, P>
where
    K: KeyValueStore,
    V: Surface,
    N: Notifier,
    P: Prompt,
{
    pub fn new(store: CartStore<K>, surface: V, notifier: N, prompt: P) -> Self {
        let catalog = store.shared_catalog();
        let products = render_products(&catalog, "");
        let cart = render_cart(store.lines(), store.calculate_total());
        Self {
            catalog,
            store,
            surface,
            notifier,
            prompt,
            filter: String::new(),
            products,
            cart,
            focused: None,
        }
    }

    /// Draw both views for the first time.
    pub fn start(&mut self) {
        tracing::info!(
            "Shop started with {} product(s), {} cart line(s)",
            self.catalog.len(),
            self.store.lines().len()
        );
        self.redraw_products();
        self.redraw_cart();
    }

    pub async fn handle(&mut self, event: UiEvent) {
        tracing::debug!("Event: {:?}", event);
        match route(event) {
            Some(action) => self.apply(action).await,
            None => tracing::debug!("Event ignored"),
        }
    }

    pub async fn apply(&mut self, action: Action) {
        match action {
            Action::AddToCart(id) => {
                let change = self.store.add_to_cart(&id).await;
                if let CartChange::Added { name, .. } = &change {
                    let message = format!("{} added to cart", name);
                    self.redraw_cart();
                    self.notifier.notify(&message);
                }
            }
            Action::RemoveFromCart(id) => {
                let change = self.store.remove_from_cart(&id).await;
                self.after_change(&change);
            }
            Action::ChangeQty(id, delta) => {
                let change = self.store.change_qty(&id, delta).await;
                self.after_change(&change);
            }
            Action::ClearCart => self.clear_with_confirmation().await,
            Action::Search(term) => {
                self.filter = term;
                self.redraw_products();
            }
            Action::FocusFirstAdd => {
                self.focused = self.products.first_add_control().cloned();
                self.surface.show_focus(self.focused.as_ref());
            }
        }
    }

    async fn clear_with_confirmation(&mut self) {
        if self.store.is_empty() {
            return;
        }
        if !self.prompt.confirm(CLEAR_CONFIRMATION).await {
            tracing::debug!("Clear declined");
            return;
        }

        let change = self.store.clear_cart().await;
        if change.is_changed() {
            self.redraw_cart();
            self.notifier.notify(CLEARED_MESSAGE);
        }
    }

    fn after_change(&mut self, change: &CartChange) {
        if change.is_changed() {
            self.redraw_cart();
        }
    }

    pub fn redraw_products(&mut self) {
        self.products = render_products(&self.catalog, &self.filter);
        // 重新繪製後舊的焦點元素已不存在
        self.focused = None;
        self.surface.show_products(&self.products);
    }

    pub fn redraw_cart(&mut self) {
        self.cart = render_cart(self.store.lines(), self.store.calculate_total());
        self.surface.show_cart(&self.cart);
    }

    pub fn product_view(&self) -> &ProductView {
        &self.products
    }

    pub fn cart_view(&self) -> &CartView {
        &self.cart
    }

    pub fn focused(&self) -> Option<&Control> {
        self.focused.as_ref()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn store(&self) -> &CartStore<K> {
        &self.store
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }
}
