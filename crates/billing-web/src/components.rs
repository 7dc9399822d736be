//! UI Components

use billing_core::{BillingInterval, CheckoutHandle, PlanCard};
use leptos::prelude::*;

/// Monthly / Annual switch
#[component]
pub fn IntervalSwitch(interval: RwSignal<BillingInterval>) -> impl IntoView {
    view! {
        <div class="interval-switch">
            <span class="interval-label">"Monthly"</span>
            <input
                id="billing-interval"
                type="checkbox"
                role="switch"
                prop:checked=move || interval.get().is_annual()
                on:change=move |ev| {
                    let next = BillingInterval::from_checked(event_target_checked(&ev));
                    tracing::debug!(interval = %next, "Billing interval changed");
                    interval.set(next);
                }
            />
            <span class="interval-label">"Annual"</span>
        </div>
    }
}

/// One plan with its price, button and features
#[component]
pub fn PlanCardView(
    card: PlanCard,
    checkout: CheckoutHandle,
    /// Full-width layout used for the enterprise plan
    #[prop(optional)]
    wide: bool,
) -> impl IntoView {
    let highlighted = card.highlighted;
    let name = card.name.clone();
    let description = card.description.clone();
    let amount = card.price.amount.clone();
    let suffix = card.price.suffix.unwrap_or_default();
    let cta_label = card.cta_label;
    let features = card.features.clone();

    let on_choose = move |_| card.activate(&checkout);

    view! {
        <div class="plan" class:featured=move || highlighted class:wide=move || wide>
            <div class="plan-summary">
                {highlighted.then(|| view! { <span class="badge">"Most popular"</span> })}
                <span class="plan-name">{name}</span>
                <div class="price">{amount}<span class="price-suffix">{suffix}</span></div>
                <p class="plan-desc">{description}</p>
                <button class="btn btn-primary" on:click=on_choose>
                    {cta_label}
                </button>
            </div>
            <FeatureList features=features />
        </div>
    }
}

/// Feature bullets, in the order given
#[component]
pub fn FeatureList(features: Vec<String>) -> impl IntoView {
    view! {
        <ul class="features">
            <li class="features-heading"><p>"Features"</p></li>
            {features
                .into_iter()
                .map(|feature| view! { <li class="feature"><CheckIcon />{feature}</li> })
                .collect_view()}
        </ul>
    }
}

#[component]
fn CheckIcon() -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class="check"
            viewBox="0 0 20 20"
            fill="currentColor"
        >
            <path
                fill-rule="evenodd"
                d="M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z"
                clip-rule="evenodd"
            />
        </svg>
    }
}
