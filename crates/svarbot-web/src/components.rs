//! UI Components

use chrono::Datelike;
use leptos::prelude::*;

use savings_advisor::inquiry::CONTACT_EMAIL;

/// Top navigation with a collapsible mobile menu
#[component]
pub fn NavBar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <a href="/" class="nav__brand">"svarbot"</a>
            <button
                class="nav__toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <ul class=move || if menu_open.get() { "nav__menu is-open" } else { "nav__menu" }>
                <li><a href="/">"Hjem"</a></li>
                <li><a href="/priser">"Priser"</a></li>
                <li><a href="/kontakt">"Kontakt"</a></li>
            </ul>
        </nav>
    }
}

/// Site footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <p>{format!("© {} svarbot", year)}</p>
            <p>
                <a href=format!("mailto:{}", CONTACT_EMAIL)>{CONTACT_EMAIL}</a>
            </p>
        </footer>
    }
}

const REVIEWS: [(&str, &str); 3] = [
    (
        "Svarboten tar unna det meste av innboksen før vi rekker å lese den. \
         Vi bruker tiden på kundene som faktisk trenger oss.",
        "Daglig leder, Fjellsport & Fritid",
    ),
    (
        "Piloten overbeviste oss på to uker. Oppsettet var gjort på en ettermiddag.",
        "Butikksjef, Brygga Interiør",
    ),
    (
        "Kundene får svar på kvelden og i helgene uten at noen av oss sitter vakt.",
        "Medgründer, Fjordvik Regnskap",
    ),
];

/// Testimonial stepper with wrap-around navigation
#[component]
pub fn ReviewCarousel() -> impl IntoView {
    let (index, set_index) = signal(0usize);

    view! {
        <section class="reviews">
            <h2>"Hva kundene sier"</h2>
            <div class="carousel">
                <button
                    class="carousel__prev"
                    on:click=move |_| {
                        set_index.update(|i| *i = (*i + REVIEWS.len() - 1) % REVIEWS.len());
                    }
                >
                    "‹"
                </button>
                <div class="carousel__track">
                    {REVIEWS
                        .iter()
                        .enumerate()
                        .map(|(i, &(quote, author))| {
                            view! {
                                <figure class=move || {
                                    if index.get() == i { "review is-active" } else { "review" }
                                }>
                                    <blockquote>{quote}</blockquote>
                                    <figcaption>{author}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
                <button
                    class="carousel__next"
                    on:click=move |_| {
                        set_index.update(|i| *i = (*i + 1) % REVIEWS.len());
                    }
                >
                    "›"
                </button>
            </div>
        </section>
    }
}

/// Two-tab before/after panel used in the case study
#[component]
pub fn BeforeAfterTabs(before: &'static str, after: &'static str) -> impl IntoView {
    let (show_after, set_show_after) = signal(false);

    view! {
        <div class="before-after">
            <div class="before-after__tabs">
                <button
                    class=move || {
                        if show_after.get() {
                            "before-after__tab"
                        } else {
                            "before-after__tab active"
                        }
                    }
                    on:click=move |_| set_show_after.set(false)
                >
                    "Før"
                </button>
                <button
                    class=move || {
                        if show_after.get() {
                            "before-after__tab active"
                        } else {
                            "before-after__tab"
                        }
                    }
                    on:click=move |_| set_show_after.set(true)
                >
                    "Etter"
                </button>
            </div>
            <Show
                when=move || show_after.get()
                fallback=move || view! { <p class="before-after__panel">{before}</p> }
            >
                <p class="before-after__panel">{after}</p>
            </Show>
        </div>
    }
}
