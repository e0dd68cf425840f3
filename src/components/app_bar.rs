//! Sticky header: logo, welcome banner, "My Org" button, account menu.

use leptos::prelude::*;

use super::actions::{install_session_probe, logout_callback, org_redirect_callback};
use super::copy::brand_name;
use crate::net::types::Profile;
use crate::session::SessionServices;
use crate::state::header::HeaderState;

/// Header bar.
///
/// Probes the session on mount. An injected `profile` seeds the
/// authenticated view directly (harness rendering).
#[component]
pub fn AppBar(#[prop(optional_no_strip)] profile: Option<Profile>) -> impl IntoView {
    let services = expect_context::<SessionServices>();
    let header = expect_context::<RwSignal<HeaderState>>();

    if let Some(profile) = profile {
        header.set(HeaderState::with_profile(profile));
    }
    install_session_probe(services.clone(), header);

    let brand = brand_name(&services.config().company_name);
    let my_org = org_redirect_callback(services.clone(), header);
    let logout = logout_callback(services, header);

    let is_authenticated = move || header.with(HeaderState::is_authenticated);
    let welcome = move || header.with(|h| h.welcome_text().unwrap_or_default());
    let menu_open = move || header.with(|h| h.menu_open);
    let toggle_menu = move |_| {
        header.update(|h| if h.menu_open { h.close_menu() } else { h.open_menu() });
    };

    view! {
        <header class="app-bar">
            <div class="app-bar__logo">
                <img class="app-bar__logo-img" src="/assets/ignition.svg" alt=brand/>
            </div>
            <Show when=is_authenticated>
                <div class="app-bar__user">
                    <span class="app-bar__welcome">{welcome}</span>
                    <button class="btn btn--primary app-bar__org" on:click=move |_| my_org.run(())>
                        "My Org"
                    </button>
                    <button
                        class="app-bar__account"
                        title="Account"
                        aria-haspopup="true"
                        aria-controls="menu-appbar"
                        aria-expanded=move || menu_open().to_string()
                        on:click=toggle_menu
                    >
                        "\u{25C9}"
                    </button>
                    <Show when=menu_open>
                        <div class="app-bar__backdrop" on:click=move |_| header.update(HeaderState::close_menu)></div>
                        <ul id="menu-appbar" class="app-bar__menu" role="menu">
                            <li role="menuitem">
                                <button class="app-bar__menu-item" on:click=move |_| logout.run(())>
                                    "Logout"
                                </button>
                            </li>
                        </ul>
                    </Show>
                </div>
            </Show>
            {move || {
                header
                    .with(|h| h.notice.clone())
                    .map(|notice| {
                        view! {
                            <div class="app-bar__notice" role="alert">
                                <span>{notice}</span>
                                <button class="app-bar__notice-dismiss" on:click=move |_| header.update(HeaderState::dismiss_notice)>
                                    "Dismiss"
                                </button>
                            </div>
                        }
                    })
            }}
        </header>
    }
}
