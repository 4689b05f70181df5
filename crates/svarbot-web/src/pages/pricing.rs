//! Pricing Page

use leptos::prelude::*;

use savings_advisor::format::format_currency;
use savings_advisor::pricing::{AddOn, Quote, PACKAGE_PRICE};

#[component]
pub fn PricingPage() -> impl IntoView {
    view! {
        <div class="pricing">
            <h1>"Priser"</h1>
            <p class="subtitle">"Én oppsettspris, ingen overraskelser"</p>

            <div class="plans">
                <div class="plan">
                    <h2>"Gratis pilot"</h2>
                    <div class="price">"0 kr"<span>" i 1 måned"</span></div>
                    <ul>
                        <li>"Bot trent på deres egne henvendelser"</li>
                        <li>"Ekte kundetrafikk i fire uker"</li>
                        <li>"Ingen forpliktelser"</li>
                    </ul>
                    <a href="/kontakt" class="btn">"Start pilot"</a>
                </div>

                <div class="plan featured">
                    <span class="badge">"Mest valgt"</span>
                    <h2>"Standard løsning"</h2>
                    <div class="price">
                        {format_currency(PACKAGE_PRICE)}
                        <span>" i oppsett"</span>
                    </div>
                    <ul>
                        <li>"Chatbot på nettsiden og e-post"</li>
                        <li>"Svar døgnet rundt"</li>
                        <li>"1 000 kr/mnd i drift"</li>
                    </ul>
                    <a href="/kontakt" class="btn btn-primary">"Kom i gang"</a>
                </div>

                <div class="plan">
                    <h2>"AI-konsultering"</h2>
                    <div class="price">"Etter avtale"</div>
                    <ul>
                        <li>"Skreddersydd løsning"</li>
                        <li>"Integrasjoner mot egne systemer"</li>
                        <li>"Opplæring av egne folk"</li>
                    </ul>
                    <a href="/kontakt" class="btn">"Ta kontakt"</a>
                </div>
            </div>

            <ConfiguratorSection />
        </div>
    }
}

/// Build-your-own-package section with a live total
#[component]
fn ConfiguratorSection() -> impl IntoView {
    let (quote, set_quote) = signal(Quote::standard());

    view! {
        <section class="configurator">
            <h2>"Sett sammen pakken din"</h2>
            <p class="configurator__base">
                {format!("Standardpakke: {}", format_currency(PACKAGE_PRICE))}
            </p>

            <div class="configurator__options">
                {AddOn::ALL
                    .into_iter()
                    .map(|add_on| view! {
                        <ConfiguratorOption add_on=add_on quote=quote set_quote=set_quote />
                    })
                    .collect_view()}
            </div>

            <div class="configurator__total">
                <span>"Totalt oppsett: "</span>
                <strong>{move || format_currency(quote.get().total())}</strong>
            </div>
        </section>
    }
}

#[component]
fn ConfiguratorOption(
    add_on: AddOn,
    quote: ReadSignal<Quote>,
    set_quote: WriteSignal<Quote>,
) -> impl IntoView {
    view! {
        <label class="configurator__option">
            <input
                type="checkbox"
                prop:checked=move || quote.get().is_selected(add_on)
                on:change=move |_| set_quote.update(|q| q.toggle(add_on))
            />
            <span>{add_on.label()}</span>
            <span class="configurator__option-price">
                {format!("+ {}", format_currency(add_on.price()))}
            </span>
        </label>
    }
}
