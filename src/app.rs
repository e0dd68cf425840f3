//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{app_bar::AppBar, body::Body, copy::brand_name, footer::Footer};
use crate::config::LandingConfig;
use crate::net::types::Profile;
use crate::session::SessionServices;
use crate::state::header::HeaderState;

const FOOTER_LOGO: &str = "/assets/pivotal.svg";

/// Root application component.
///
/// Provides the session services and header state to every component.
/// `services` defaults to the browser-backed set built from the page's meta
/// tags; a harness injects its own (and optionally a `profile`).
#[component]
pub fn App(
    #[prop(optional)] services: Option<SessionServices>,
    #[prop(optional)] profile: Option<Profile>,
) -> impl IntoView {
    provide_meta_context();

    let services = services.unwrap_or_else(|| SessionServices::browser(load_config()));
    let title = brand_name(&services.config().company_name);
    provide_context(services);
    provide_context(RwSignal::new(HeaderState::default()));

    view! {
        <Title text=title/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=move || view! { <HomePage profile=profile.clone()/> }/>
            </Routes>
        </Router>
    }
}

/// Header, hero, and footer.
#[component]
pub fn HomePage(#[prop(optional_no_strip)] profile: Option<Profile>) -> impl IntoView {
    let links = expect_context::<SessionServices>().config().footer_links.clone();

    view! {
        <div class="home">
            <AppBar profile=profile/>
            <Body/>
            <Footer links=links logo_url=FOOTER_LOGO/>
        </div>
    }
}

fn load_config() -> LandingConfig {
    LandingConfig::from_document().unwrap_or_else(|e| {
        log::warn!("ignoring invalid landing config: {e}");
        LandingConfig::default()
    })
}
