//! Contact Page

use leptos::prelude::*;

use savings_advisor::inquiry::{Inquiry, ServiceInterest};

#[component]
pub fn ContactPage() -> impl IntoView {
    let (company, set_company) = signal(String::new());
    let (contact_person, set_contact_person) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (services, set_services) = signal(Vec::<ServiceInterest>::new());
    let (message, set_message) = signal(String::new());
    let (error, set_error) = signal(String::new());
    let (confirmation, set_confirmation) = signal(String::new());

    let toggle_service = move |service: ServiceInterest| {
        set_services.update(|chosen| {
            if let Some(pos) = chosen.iter().position(|s| *s == service) {
                chosen.remove(pos);
            } else {
                chosen.push(service);
            }
        });
    };

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let inquiry = Inquiry {
            company: company.get(),
            contact_person: contact_person.get(),
            email: email.get(),
            phone: phone.get(),
            services: services.get(),
            message: message.get(),
        };

        match inquiry.validate() {
            Err(e) => {
                set_confirmation.set(String::new());
                set_error.set(e.to_string());
            }
            Ok(()) => {
                set_error.set(String::new());

                // Hand the inquiry to the visitor's own mail client
                let url = inquiry.mailto_url();
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href(&url);
                }

                set_confirmation
                    .set("Takk for din forespørsel! E-post-programmet ditt åpnes nå.".into());
                set_company.set(String::new());
                set_contact_person.set(String::new());
                set_email.set(String::new());
                set_phone.set(String::new());
                set_services.set(Vec::new());
                set_message.set(String::new());
            }
        }
    };

    view! {
        <div class="contact">
            <h1>"Kontakt oss"</h1>
            <p class="subtitle">"Fortell oss om innboksen deres, så tar vi det derfra."</p>

            <form class="contact__form" on:submit=submit>
                <label class="field">
                    "Bedrift *"
                    <input
                        type="text"
                        prop:value=move || company.get()
                        on:input=move |ev| set_company.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Kontaktperson *"
                    <input
                        type="text"
                        prop:value=move || contact_person.get()
                        on:input=move |ev| set_contact_person.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "E-post *"
                    <input
                        type="text"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    "Telefon"
                    <input
                        type="text"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                </label>

                <fieldset class="field">
                    <legend>"Hvilket tilbud er dere interessert i? *"</legend>
                    {ServiceInterest::ALL
                        .into_iter()
                        .map(|service| view! {
                            <label class="checkbox">
                                <input
                                    type="checkbox"
                                    prop:checked=move || services.get().contains(&service)
                                    on:change=move |_| toggle_service(service)
                                />
                                {service.label()}
                            </label>
                        })
                        .collect_view()}
                </fieldset>

                <label class="field">
                    "Beskriv behovet deres"
                    <textarea
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || !error.get().is_empty()>
                    <p class="form__error">{move || error.get()}</p>
                </Show>
                <Show when=move || !confirmation.get().is_empty()>
                    <p class="form__status">{move || confirmation.get()}</p>
                </Show>

                <button type="submit" class="btn btn-primary form__submit">
                    "Send forespørsel"
                </button>
            </form>
        </div>
    }
}
