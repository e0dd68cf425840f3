//! Hero section: welcome, getting-started steps, spaces overview.

use leptos::prelude::*;

use super::actions::org_redirect_callback;
use super::copy::{STEPS, intro_messages, space_messages};
use crate::session::SessionServices;
use crate::state::header::HeaderState;

#[component]
pub fn Body() -> impl IntoView {
    let services = expect_context::<SessionServices>();
    let header = expect_context::<RwSignal<HeaderState>>();

    let intro = intro_messages(&services.config().company_name);
    let spaces = space_messages(&services.config().space_name);
    let view_org = org_redirect_callback(services, header);

    view! {
        <main class="body">
            <section class="cta cta--welcome">
                <div class="speech-bubble speech-bubble--welcome">
                    {intro.into_iter().map(|msg| view! { <p>{msg}</p> }).collect::<Vec<_>>()}
                </div>
                <div class="cta__art cta__art--rocket-man"></div>
            </section>

            <section class="cta cta--steps">
                <div class="cta__steps">
                    {STEPS
                        .iter()
                        .map(|step| {
                            view! {
                                <div class="cta__step">
                                    <div>
                                        <img class="cta__step-image" src=step.image alt=""/>
                                    </div>
                                    {step.lead}
                                    <a href=step.href>{step.link_text}</a>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta cta--spaces">
                <div class="speech-bubble speech-bubble--spaces">
                    {spaces.into_iter().map(|msg| view! { <p>{msg}</p> }).collect::<Vec<_>>()}
                </div>
                <div class="cta__art cta__art--moon-man"></div>
            </section>

            <button class="btn btn--raised" on:click=move |_| view_org.run(())>
                "View My Org"
            </button>
        </main>
    }
}
