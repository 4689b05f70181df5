//! Home Page

use leptos::prelude::*;

use savings_advisor::format::{bar_width, format_currency, format_hours, format_months};
use savings_advisor::parse::{parse_amount, parse_count};
use savings_advisor::{AutomationAssumptions, RoiInputs, SavingsEstimator};

use crate::components::{BeforeAfterTabs, ReviewCarousel};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Slutt å drukne i kundemail"</h1>
                <p class="tagline">
                    "svarbot bygger AI-chatboter som svarer kundene dine på norsk, hele døgnet."
                </p>
                <div class="cta">
                    <a href="/kontakt" class="btn btn-primary">"Book gratis pilot"</a>
                    <a href="/priser" class="btn">"Se priser"</a>
                </div>
            </header>

            <CalculatorSection />
            <ServicesSection />
            <CaseStudySection />
            <ReviewCarousel />
        </div>
    }
}

/// Interactive ROI section: four inputs, three result slots and the
/// before/after workload chart, recomputed on every keystroke
#[component]
fn CalculatorSection() -> impl IntoView {
    let (emails, set_emails) = signal("20".to_string());
    let (minutes, set_minutes) = signal("5".to_string());
    let (rate, set_rate) = signal("500".to_string());
    let (days, set_days) = signal("22".to_string());

    let estimate = move || {
        SavingsEstimator::new(AutomationAssumptions::standard()).estimate(&RoiInputs::new(
            parse_count(&emails.get()),
            parse_count(&minutes.get()),
            parse_amount(&rate.get()),
            parse_count(&days.get()),
        ))
    };

    view! {
        <section class="calculator">
            <h2>"Hva koster innboksen deg?"</h2>

            <div class="calculator__inputs">
                <label class="field">
                    "E-poster per dag"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || emails.get()
                        on:input=move |ev| set_emails.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Minutter per e-post"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || minutes.get()
                        on:input=move |ev| set_minutes.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Timepris (kr)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || rate.get()
                        on:input=move |ev| set_rate.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Arbeidsdager per måned"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || days.get()
                        on:input=move |ev| set_days.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="calculator__results">
                <div class="result">
                    <span class="result__value">
                        {move || format_hours(estimate().hours_saved_per_month)}
                    </span>
                    <span class="result__label">"timer spart per måned"</span>
                </div>
                <div class="result">
                    <span class="result__value">
                        {move || format_currency(estimate().cost_saved_per_month)}
                    </span>
                    <span class="result__label">"spart per måned"</span>
                </div>
                <div class="result">
                    <span class="result__value">
                        {move || format_months(estimate().payback_months)}
                    </span>
                    <span class="result__label">"måneder til inntjening"</span>
                </div>
            </div>

            <div class="chart">
                <div class="chart__bar chart__bar--before">
                    <span class="chart__label">"I dag"</span>
                    <div class="chart__bar__fill" style:width="100%"></div>
                    <span class="chart__value">
                        {move || format_hours(estimate().monthly_hours)}
                    </span>
                </div>
                <div class="chart__bar chart__bar--after">
                    <span class="chart__label">"Med svarbot"</span>
                    <div
                        class="chart__bar__fill"
                        style:width=move || bar_width(estimate().remaining_work_percent)
                    ></div>
                    <span class="chart__value">
                        {move || {
                            let e = estimate();
                            format_hours(e.monthly_hours - e.hours_saved_per_month)
                        }}
                    </span>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServicesSection() -> impl IntoView {
    view! {
        <section class="services">
            <h2>"Det vi leverer"</h2>
            <div class="services__cards">
                <ServiceCard
                    title="Gratis pilot"
                    summary="Prøv en svarbot på egne kundehenvendelser i en måned."
                    details="Vi trener en bot på et utvalg av deres tidligere e-poster og \
                             lar den svare på ekte henvendelser i fire uker. Dere ser tallene, \
                             vi tar jobben. Ingen forpliktelser etterpå."
                />
                <ServiceCard
                    title="Standard løsning"
                    summary="Chatbot på nettsiden og e-post, klar på under en uke."
                    details="Fast oppsettspris og 1 000 kr i måneden i drift. Boten svarer \
                             på de vanligste spørsmålene og sender resten videre til dere med \
                             et ferdig utkast."
                />
                <ServiceCard
                    title="AI-konsultering"
                    summary="Skreddersydd automatisering for mer sammensatte behov."
                    details="Integrasjoner mot ordresystem, booking eller CRM, flerspråklige \
                             boter og opplæring av egne folk. Vi starter alltid med en \
                             kartlegging av hvor tiden faktisk går."
                />
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(
    title: &'static str,
    summary: &'static str,
    details: &'static str,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);

    view! {
        <div class="card">
            <h3>{title}</h3>
            <p>{summary}</p>
            <button
                class="card__more"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                {move || if expanded.get() { "Vis mindre" } else { "Les mer" }}
            </button>
            <Show when=move || expanded.get()>
                <p class="card__details">{details}</p>
            </Show>
        </div>
    }
}

#[component]
fn CaseStudySection() -> impl IntoView {
    view! {
        <section class="case-study">
            <h2>"Fra 14 timer i uka til under 3"</h2>
            <p>
                "Fjellsport & Fritid driver nettbutikk med to ansatte. "
                "Slik så innboksen deres ut før og etter svarbot."
            </p>
            <BeforeAfterTabs
                before="Rundt 60 e-poster om dagen, det meste spørsmål om levering, retur \
                        og lagerstatus. Kundene ventet opptil to døgn på svar, og kveldene \
                        gikk med til å tømme innboksen."
                after="Boten svarer på tre av fire henvendelser med en gang, døgnet rundt. \
                       De ansatte bruker under tre timer i uka på e-post og svartiden for \
                       resten er nede i et par timer."
            />
        </section>
    }
}
