//! Interactive shopping session.
//!
//! One [`Store`] lives for the whole session; every menu action dispatches into
//! it and the grid is re-filtered from its search and category fields.

use anyhow::{bail, Result};
use chrono::Utc;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use storefront_commerce::catalog::{category_label, NewProduct, Product};
use storefront_commerce::checkout::CheckoutSummary;
use storefront_commerce::store::Store;

use super::{add_product, load_catalog, simulate};
use crate::context::Context;
use crate::output::cart_badge;
use crate::views;

/// Run the shop command.
pub async fn run(ctx: &Context) -> Result<()> {
    if !Term::stdout().is_term() {
        bail!("The shop command needs an interactive terminal");
    }

    let mut session = Session::new(ctx);
    session.load().await;

    loop {
        session.render_grid();
        let action = match session.menu()? {
            Some(action) => action,
            None => break,
        };
        if matches!(action, MenuAction::Quit) {
            break;
        }

        if let Err(e) = session.perform(action).await {
            if e.downcast_ref::<dialoguer::Error>().is_some() {
                return Err(e);
            }
            ctx.output.error(&format!("{:#}", e));
        }
    }

    Ok(())
}

/// Each unit is its own dispatch, so one prompt adds at most this many.
const MAX_ADD_QUANTITY: i64 = 999;

#[derive(Debug, Clone, Copy)]
enum MenuAction {
    ViewProduct,
    QuickAdd,
    Search,
    ClearFilters,
    FilterCategory,
    Cart,
    AddProduct,
    Reload,
    Quit,
}

struct Session<'a> {
    ctx: &'a Context,
    theme: ColorfulTheme,
    store: Store,
    products: Vec<Product>,
    categories: Vec<String>,
    load_failed: bool,
}

impl<'a> Session<'a> {
    fn new(ctx: &'a Context) -> Self {
        Self {
            ctx,
            theme: ColorfulTheme::default(),
            store: Store::new(),
            products: Vec::new(),
            categories: Vec::new(),
            load_failed: false,
        }
    }

    async fn load(&mut self) {
        let (products, categories) = load_catalog(self.ctx).await;

        match products {
            Ok(products) => {
                self.products = products;
                self.load_failed = false;
            }
            Err(e) => {
                tracing::debug!(error = %e, "product list unavailable");
                self.load_failed = true;
            }
        }

        // An empty category list only hides the category filter.
        match categories {
            Ok(categories) => self.categories = categories,
            Err(e) => tracing::debug!(error = %e, "category list unavailable"),
        }
    }

    fn visible(&self) -> Vec<&Product> {
        self.store.state().filter().apply(&self.products)
    }

    fn render_grid(&self) {
        if self.load_failed {
            self.ctx.output.error(views::LOAD_FAILED);
            return;
        }
        let filter = self.store.state().filter();
        views::render_products(
            &self.ctx.output,
            &filter.apply(&self.products),
            self.products.len(),
            !filter.is_empty(),
        );
    }

    fn menu(&self) -> Result<Option<MenuAction>> {
        let actions = menu_actions(&self.store, !self.categories.is_empty());
        let labels: Vec<&str> = actions.iter().map(|(_, label)| label.as_str()).collect();
        let choice = Select::with_theme(&self.theme)
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(choice.map(|i| actions[i].0))
    }

    async fn perform(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::ViewProduct => self.view_product().await,
            MenuAction::QuickAdd => self.quick_add(),
            MenuAction::Search => self.search(),
            MenuAction::ClearFilters => {
                clear_filters(&mut self.store);
                Ok(())
            }
            MenuAction::FilterCategory => self.filter_category(),
            MenuAction::Cart => self.cart().await,
            MenuAction::AddProduct => self.add_product().await,
            MenuAction::Reload => {
                self.ctx.catalog.clear();
                self.load().await;
                Ok(())
            }
            MenuAction::Quit => Ok(()),
        }
    }

    fn search(&mut self) -> Result<()> {
        let query: String = Input::with_theme(&self.theme)
            .with_prompt("Search products (empty clears)")
            .with_initial_text(self.store.search_query())
            .allow_empty(true)
            .interact_text()?;
        apply_search(&mut self.store, query);
        Ok(())
    }

    fn filter_category(&mut self) -> Result<()> {
        let mut labels = vec!["All categories".to_string()];
        labels.extend(self.categories.iter().map(|c| category_label(c)));

        let current = self
            .categories
            .iter()
            .position(|c| c == self.store.selected_category())
            .map_or(0, |i| i + 1);

        let choice = Select::with_theme(&self.theme)
            .with_prompt("Category")
            .items(&labels)
            .default(current)
            .interact_opt()?;

        match choice {
            Some(0) => self.store.set_selected_category(""),
            Some(i) => {
                let category = self.categories[i - 1].clone();
                self.store.set_selected_category(category);
            }
            None => {}
        }
        Ok(())
    }

    /// Let the user pick one of the visible products.
    fn pick_product(&self, prompt: &str) -> Result<Option<Product>> {
        let visible = self.visible();
        if visible.is_empty() {
            self.ctx.output.warn(views::NO_MATCHES);
            return Ok(None);
        }

        let labels: Vec<String> = visible
            .iter()
            .map(|p| format!("{} ({})", views::truncate(&p.title, 50), p.price.display()))
            .collect();

        let choice = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        Ok(choice.map(|i| visible[i].clone()))
    }

    fn quick_add(&mut self) -> Result<()> {
        let Some(product) = self.pick_product("Add to cart")? else {
            return Ok(());
        };
        let title = product.title.clone();
        self.store.add_to_cart(product);
        self.ctx.output.success(&format!("Added {} to cart", title));
        Ok(())
    }

    async fn view_product(&mut self) -> Result<()> {
        let Some(product) = self.pick_product("Product")? else {
            return Ok(());
        };

        self.store.open_product(product.id);
        let result = self.product_modal().await;
        self.store.close_product();
        result
    }

    async fn product_modal(&mut self) -> Result<()> {
        let Some(id) = self.store.state().product_to_fetch() else {
            return Ok(());
        };

        let spinner = self.ctx.output.spinner("Loading product...");
        let product = self.ctx.catalog.get_product(id).await;
        spinner.finish_and_clear();

        let product = match product {
            Ok(product) => product,
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "product unavailable");
                bail!(views::DETAILS_FAILED);
            }
        };

        views::render_product_details(&self.ctx.output, &product);

        let add = Confirm::with_theme(&self.theme)
            .with_prompt("Add to cart?")
            .default(true)
            .interact()?;
        if !add {
            return Ok(());
        }

        let quantity: i64 = Input::with_theme(&self.theme)
            .with_prompt("Quantity")
            .default(1)
            .validate_with(|q: &i64| {
                if *q > MAX_ADD_QUANTITY {
                    Err(format!("At most {} at a time", MAX_ADD_QUANTITY))
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        let title = product.title.clone();
        self.store.add_to_cart_times(product, quantity)?;
        self.ctx
            .output
            .success(&format!("Added {} x {} to cart", quantity, title));
        Ok(())
    }

    async fn cart(&mut self) -> Result<()> {
        loop {
            views::render_cart(&self.ctx.output, self.store.cart());
            if self.store.cart().is_empty() {
                return Ok(());
            }

            let choice = Select::with_theme(&self.theme)
                .with_prompt("Cart")
                .items(&[
                    "Change quantity",
                    "Remove item",
                    "Clear cart",
                    "Checkout",
                    "Back",
                ])
                .default(3)
                .interact_opt()?;

            match choice {
                Some(0) => self.change_quantity()?,
                Some(1) => self.remove_item()?,
                Some(2) => {
                    let confirmed = Confirm::with_theme(&self.theme)
                        .with_prompt("Remove every item from the cart?")
                        .default(false)
                        .interact()?;
                    if confirmed {
                        self.store.clear_cart();
                    }
                }
                Some(3) => return self.checkout().await,
                _ => return Ok(()),
            }
        }
    }

    fn pick_line(&self, prompt: &str) -> Result<Option<usize>> {
        let labels: Vec<String> = self
            .store
            .cart_items()
            .iter()
            .map(views::cart_line_label)
            .collect();
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()?)
    }

    fn change_quantity(&mut self) -> Result<()> {
        let Some(index) = self.pick_line("Item")? else {
            return Ok(());
        };
        let line = &self.store.cart_items()[index];
        let id = line.product.id;

        let quantity: i64 = Input::with_theme(&self.theme)
            .with_prompt("New quantity (0 removes)")
            .default(line.quantity)
            .interact_text()?;
        self.store.update_quantity(id, quantity);
        Ok(())
    }

    fn remove_item(&mut self) -> Result<()> {
        if let Some(index) = self.pick_line("Remove")? {
            let id = self.store.cart_items()[index].product.id;
            self.store.remove_from_cart(id);
        }
        Ok(())
    }

    async fn checkout(&mut self) -> Result<()> {
        let summary = CheckoutSummary::from_cart(self.store.cart())?;

        simulate(
            self.ctx,
            "Processing...",
            self.ctx.config.checkout.delay(),
        )
        .await;
        tracing::info!(
            items = summary.total_items,
            lines = summary.items.len(),
            total = %summary.total,
            placed_at = %Utc::now().to_rfc3339(),
            "Mock checkout"
        );

        self.ctx
            .output
            .success("Order placed successfully! This is a mock checkout.");
        self.store.clear_cart();
        Ok(())
    }

    async fn add_product(&mut self) -> Result<()> {
        let title = self.prompt_field("Title")?;
        let price = self.prompt_field("Price")?;
        let description = self.prompt_field("Description")?;
        let category = if self.categories.is_empty() {
            self.prompt_field("Category")?
        } else {
            let labels: Vec<String> = self.categories.iter().map(|c| category_label(c)).collect();
            match Select::with_theme(&self.theme)
                .with_prompt("Category")
                .items(&labels)
                .default(0)
                .interact_opt()?
            {
                Some(i) => self.categories[i].clone(),
                None => String::new(),
            }
        };
        let image = self.prompt_field("Image URL")?;

        let form = NewProduct {
            title,
            price,
            description,
            category,
            image,
        };
        add_product::submit(self.ctx, &form).await
    }

    fn prompt_field(&self, prompt: &str) -> Result<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }
}

/// Main menu entries for the current store state.
fn menu_actions(store: &Store, has_categories: bool) -> Vec<(MenuAction, String)> {
    let mut actions = vec![
        (MenuAction::ViewProduct, "View product".to_string()),
        (MenuAction::QuickAdd, "Add to cart".to_string()),
        (MenuAction::Search, search_label(store.search_query())),
    ];
    if has_categories {
        actions.push((
            MenuAction::FilterCategory,
            category_menu_label(store.selected_category()),
        ));
    }
    if !store.state().filter().is_empty() {
        actions.push((MenuAction::ClearFilters, "Clear filters".to_string()));
    }
    actions.push((
        MenuAction::Cart,
        format!("Cart ({})", cart_badge(store.total_items())),
    ));
    actions.push((MenuAction::AddProduct, "Add a product".to_string()));
    actions.push((MenuAction::Reload, "Reload catalog".to_string()));
    actions.push((MenuAction::Quit, "Quit".to_string()));
    actions
}

/// Store the search text exactly as typed.
fn apply_search(store: &mut Store, query: String) {
    store.set_search_query(query);
}

fn clear_filters(store: &mut Store) {
    store.set_search_query("");
    store.set_selected_category("");
}

fn search_label(query: &str) -> String {
    if query.is_empty() {
        "Search".to_string()
    } else {
        format!("Search (\"{}\")", query)
    }
}

fn category_menu_label(category: &str) -> String {
    if category.is_empty() {
        "Filter by category".to_string()
    } else {
        format!("Filter by category ({})", category_label(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_commerce::catalog::Rating;
    use storefront_commerce::{Money, ProductId};

    fn jacket() -> Product {
        Product {
            id: ProductId::new(3),
            title: "Mens Cotton Jacket".to_string(),
            price: Money::new(5599),
            description: "Great outerwear jackets".to_string(),
            category: "men's clothing".to_string(),
            image: "https://example.com/3.jpg".to_string(),
            rating: Rating { rate: 4.7, count: 500 },
        }
    }

    fn labels(actions: &[(MenuAction, String)]) -> Vec<&str> {
        actions.iter().map(|(_, label)| label.as_str()).collect()
    }

    #[test]
    fn test_search_is_stored_as_typed() {
        let mut store = Store::new();
        apply_search(&mut store, " jacket ".to_string());
        assert_eq!(store.search_query(), " jacket ");

        let products = vec![jacket()];
        assert!(store.state().filter().apply(&products).is_empty());
        assert_eq!(search_label(store.search_query()), "Search (\" jacket \")");
    }

    #[test]
    fn test_clear_filters() {
        let mut store = Store::new();
        assert!(!labels(&menu_actions(&store, true)).contains(&"Clear filters"));

        apply_search(&mut store, "jacket".to_string());
        store.set_selected_category("men's clothing");
        assert!(labels(&menu_actions(&store, true)).contains(&"Clear filters"));

        clear_filters(&mut store);
        assert_eq!(store.search_query(), "");
        assert_eq!(store.selected_category(), "");
        assert!(!labels(&menu_actions(&store, true)).contains(&"Clear filters"));
    }

    #[test]
    fn test_menu_entries() {
        let mut store = Store::new();
        let actions = menu_actions(&store, false);
        let entries = labels(&actions);
        assert_eq!(entries[..3], ["View product", "Add to cart", "Search"]);
        assert!(!entries.contains(&"Filter by category"));

        store.add_to_cart(jacket());
        let actions = menu_actions(&store, true);
        let entries = labels(&actions);
        assert!(entries.contains(&"Filter by category"));
        assert!(entries.contains(&"Cart (1)"));
        assert_eq!(entries.last(), Some(&"Quit"));
    }

    #[test]
    fn test_menu_labels() {
        assert_eq!(search_label(""), "Search");
        assert_eq!(search_label("shirt"), "Search (\"shirt\")");
        assert_eq!(category_menu_label(""), "Filter by category");
        assert_eq!(
            category_menu_label("jewelery"),
            "Filter by category (Jewelery)"
        );
    }
}
