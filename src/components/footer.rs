//! Footer links and logo.

use leptos::prelude::*;

use crate::config::FooterLink;

#[component]
pub fn Footer(links: Vec<FooterLink>, #[prop(into)] logo_url: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <nav class="footer__links">
                {links
                    .into_iter()
                    .map(|link| view! { <a href=link.url>{link.text}</a> })
                    .collect::<Vec<_>>()}
            </nav>
            <img class="footer__logo" src=logo_url alt=""/>
        </footer>
    }
}
