//! Billing Page

use billing_core::{
    AccountStatus, BillingCards, BillingInterval, Catalog, CheckoutHandle, SharedAccountSource,
    load_account, visible_cards,
};
use leptos::prelude::*;

use crate::components::{IntervalSwitch, PlanCardView};

#[component]
pub fn BillingPage(
    catalog: Catalog,
    checkout: CheckoutHandle,
    account_source: SharedAccountSource,
) -> impl IntoView {
    let interval = RwSignal::new(BillingInterval::default());
    let (status, set_status) = signal(AccountStatus::Pending);

    leptos::task::spawn_local(async move {
        set_status.set(load_account(account_source.as_ref()).await);
    });

    let catalog = StoredValue::new(catalog);
    let checkout = StoredValue::new(checkout);

    move || {
        let cards = status.with(|s| catalog.with_value(|c| visible_cards(s, c, interval.get())));

        match cards {
            None => view! { <div class="loading">"Loading..."</div> }.into_any(),
            Some(BillingCards { plans, enterprise }) => view! {
                <section class="billing">
                    <IntervalSwitch interval=interval />

                    <div class="plans">
                        {plans
                            .into_iter()
                            .map(|card| view! { <PlanCardView card=card checkout=checkout.get_value() /> })
                            .collect_view()}
                    </div>

                    <PlanCardView card=enterprise checkout=checkout.get_value() wide=true />
                </section>
            }
            .into_any(),
        }
    }
}
