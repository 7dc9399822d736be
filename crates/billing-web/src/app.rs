//! Main App Component

use std::sync::Arc;

use billing_core::{BillingError, Catalog, CheckoutHandle, SharedAccountSource};
use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::api::HttpAccountSource;
use crate::config::WebConfig;
use crate::pages::BillingPage;

/// Root application component
#[component]
pub fn App(config: WebConfig) -> impl IntoView {
    let catalog = match Catalog::standard() {
        Ok(catalog) => catalog,
        Err(e) => return startup_error("Failed to load plan catalog", &e),
    };

    let account_source: SharedAccountSource = match HttpAccountSource::new(&config) {
        Ok(source) => Arc::new(source),
        Err(e) => return startup_error("Invalid account endpoint", &e),
    };

    // Payments are not wired up yet; plan buttons are inert
    let checkout = CheckoutHandle::noop();

    let billing = move || {
        view! {
            <BillingPage
                catalog=catalog.clone()
                checkout=checkout.clone()
                account_source=account_source.clone()
            />
        }
    };

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=billing.clone() />
                    <Route path=path!("/settings/billing") view=billing />
                </Routes>
            </main>
        </Router>
    }
    .into_any()
}

fn startup_error(context: &str, error: &BillingError) -> AnyView {
    tracing::error!(error = %error, "{context}");
    view! { <p class="error">{error.user_message().to_string()}</p> }.into_any()
}
